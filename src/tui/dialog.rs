//! Modal memo / break-activity prompt.
//!
//! The dialog owns the completion event it was opened for. The timer does
//! not move until the dialog hands that event back with the user's answer.

use crate::core::timer::SessionComplete;
use crate::models::Mode;
use crate::utils::format_duration;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    /// After a Work session: what did you work on?
    Memo,
    /// After a break: what did you do?
    BreakActivity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    /// Still collecting input.
    Open,
    /// Saved or cancelled; cancelled dialogs answer with an empty note.
    Closed { done: SessionComplete, note: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub input: String,
    done: SessionComplete,
}

impl Dialog {
    pub fn for_completion(done: SessionComplete) -> Self {
        let kind = if done.mode == Mode::Work {
            DialogKind::Memo
        } else {
            DialogKind::BreakActivity
        };
        Self {
            kind,
            input: String::new(),
            done,
        }
    }

    pub fn completion(&self) -> &SessionComplete {
        &self.done
    }

    /// Give the event back unanswered, as if cancelled.
    pub fn into_completion(self) -> SessionComplete {
        self.done
    }

    pub fn title(&self) -> String {
        let verb = match self.kind {
            DialogKind::Memo => "Work session finished 🎯",
            DialogKind::BreakActivity => "Break finished ☕",
        };
        format!(" {verb} ({}) ", format_duration(self.done.elapsed_secs))
    }

    pub fn prompt(&self) -> &'static str {
        match self.kind {
            DialogKind::Memo => "What did you study / do this session?",
            DialogKind::BreakActivity => "What did you do during the break? (optional)",
        }
    }

    /// Feed one key press.
    ///
    /// Enter saves, Alt+Enter adds a line break, Esc cancels.
    pub fn handle_key(mut self, key: KeyEvent) -> (Option<Self>, DialogOutcome) {
        match key.code {
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => {
                self.input.push('\n');
            }
            KeyCode::Enter => {
                let note = self.input.trim().to_string();
                return (None, DialogOutcome::Closed { done: self.done, note });
            }
            KeyCode::Esc => {
                return (
                    None,
                    DialogOutcome::Closed {
                        done: self.done,
                        note: String::new(),
                    },
                );
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Tab => self.input.push(' '),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.push(c);
            }
            _ => {}
        }
        (Some(self), DialogOutcome::Open)
    }
}
