use crate::core::suggest::HintKind;
use crate::models::Mode;
use crate::tui::app::{App, NoticeLevel, View};
use crate::tui::settings::SettingsField;
use crate::utils::format_clock;
use crate::utils::formatting::truncate_width;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph, Tabs, Wrap,
};

fn mode_color(mode: Mode) -> Color {
    match mode {
        Mode::Work => Color::Red,
        Mode::ShortBreak => Color::Green,
        Mode::LongBreak => Color::Blue,
    }
}

fn key_span(k: &str) -> Span<'_> {
    Span::styled(k, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
}

pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title + task
            Constraint::Length(3), // mode tabs
            Constraint::Length(3), // clock
            Constraint::Length(3), // progress
            Constraint::Length(1), // status
            Constraint::Length(3), // hint / notice
            Constraint::Min(3),    // recent sessions
            Constraint::Length(2), // keys
        ])
        .split(area);

    draw_header(f, app, chunks[0]);
    draw_tabs(f, app, chunks[1]);
    draw_clock(f, app, chunks[2]);
    draw_progress(f, app, chunks[3]);
    draw_status(f, app, chunks[4]);
    draw_hint(f, app, chunks[5]);
    draw_history(f, app, chunks[6]);
    draw_footer(f, app, chunks[7]);

    if app.view() == View::Settings {
        draw_settings(f, app, centered_rect(60, 60, area));
    }
    if let Some(input) = app.task_input() {
        draw_task_input(f, input, centered_rect(60, 20, area));
    }
    if app.dialog().is_some() {
        draw_dialog(f, app, centered_rect(70, 50, area));
    }
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let task = if app.task().is_empty() {
        Span::styled("(no task)", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(app.task(), Style::default().add_modifier(Modifier::BOLD))
    };
    let header = Paragraph::new(Line::from(vec![Span::raw("Task: "), task]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(format!(" 🍅 {} ", app.config().app_name)),
        );
    f.render_widget(header, area);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Mode::ALL
        .iter()
        .enumerate()
        .map(|(i, m)| Line::from(format!("{} {}", i + 1, m.label())))
        .collect();
    let selected = Mode::ALL
        .iter()
        .position(|m| *m == app.timer().mode)
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded))
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(mode_color(app.timer().mode))
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );
    f.render_widget(tabs, area);
}

fn draw_clock(f: &mut Frame, app: &App, area: Rect) {
    let clock = Paragraph::new(format_clock(app.timer().remaining_secs))
        .style(
            Style::default()
                .fg(mode_color(app.timer().mode))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(clock, area);
}

fn draw_progress(f: &mut Frame, app: &App, area: Rect) {
    let ratio = app.timer().progress(app.settings());
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded))
        .gauge_style(Style::default().fg(mode_color(app.timer().mode)).bg(Color::Black))
        .ratio(ratio);
    f.render_widget(gauge, area);
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let timer = app.timer();
    let state = if timer.running { "● Running" } else { "⏸ Paused" };
    let auto = if app.settings().auto_start { "auto-start on" } else { "auto-start off" };
    let text = format!(
        "{} • {} • Cycle {} • {}",
        timer.mode.label(),
        state,
        timer.completed_work_sessions,
        auto
    );
    let status = Paragraph::new(text)
        .style(Style::default().fg(if timer.running { Color::Green } else { Color::Yellow }))
        .alignment(Alignment::Center);
    f.render_widget(status, area);
}

fn draw_hint(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();

    if let Some(hint) = app.hint() {
        let color = match hint.kind {
            HintKind::Do => Color::Green,
            HintKind::Dont => Color::Red,
            HintKind::Neutral => Color::Gray,
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}: ", hint.kind.label()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(hint.hint),
        ]));
    }

    if let Some(notice) = app.notice() {
        let color = match notice.level {
            NoticeLevel::Info => Color::Cyan,
            NoticeLevel::Warning => Color::Yellow,
            NoticeLevel::Error => Color::Red,
        };
        lines.push(Line::from(Span::styled(
            notice.text.as_str(),
            Style::default().fg(color),
        )));
    }

    let pending = app.logbook().pending_count();
    if pending > 0 {
        lines.push(Line::from(Span::styled(
            format!("{pending} log write(s) pending"),
            Style::default().fg(Color::Yellow),
        )));
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn draw_history(f: &mut Frame, app: &App, area: Rect) {
    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = app
        .history()
        .iter()
        .rev()
        .map(|r| {
            let note = if r.has_note() {
                r.note.replace('\n', " ")
            } else if r.skipped {
                "(skipped)".to_string()
            } else {
                "-".to_string()
            };
            let line = format!("{}  {:<11} {}", r.ended_at.format("%H:%M"), r.mode.label(), note);
            ListItem::new(truncate_width(&line, width))
                .style(Style::default().fg(mode_color(r.mode)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" Sessions ({}) ", app.history().len())),
    );
    f.render_widget(list, area);
}

fn draw_footer(f: &mut Frame, _app: &App, area: Rect) {
    let keys = vec![
        Line::from(vec![
            key_span("Space"),
            Span::raw(" Start/Pause  "),
            key_span("S"),
            Span::raw(" Skip  "),
            key_span("R"),
            Span::raw(" Reset  "),
            key_span("1/2/3"),
            Span::raw(" Mode"),
        ]),
        Line::from(vec![
            key_span("T"),
            Span::raw(" Task  "),
            key_span("A"),
            Span::raw(" Auto-start  "),
            key_span("C"),
            Span::raw(" Settings  "),
            key_span("W"),
            Span::raw(" Retry writes  "),
            key_span("Q"),
            Span::raw(" Quit"),
        ]),
    ];
    f.render_widget(Paragraph::new(keys).alignment(Alignment::Center), area);
}

fn draw_settings(f: &mut Frame, app: &App, area: Rect) {
    let panel = app.panel();
    let items: Vec<ListItem> = SettingsField::ALL
        .iter()
        .map(|field| {
            let selected = *field == panel.selected;
            let value = if selected && panel.editing {
                format!("{}▏", panel.input)
            } else {
                field.value(app.config())
            };
            let style = if selected {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default()
            };
            ListItem::new(format!("{:<26} {}", field.label(), value)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Settings (↑/↓ select, Enter edit, Esc close) "),
    );
    f.render_widget(Clear, area);
    f.render_widget(list, area);
}

fn draw_task_input(f: &mut Frame, input: &str, area: Rect) {
    let widget = Paragraph::new(format!("{input}▏")).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Task name (Enter save, Esc cancel) "),
    );
    f.render_widget(Clear, area);
    f.render_widget(widget, area);
}

fn draw_dialog(f: &mut Frame, app: &App, area: Rect) {
    let Some(dialog) = app.dialog() else {
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(dialog.prompt(), Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
    ];
    let mut body: Vec<Line> = dialog.input.split('\n').map(|l| Line::from(l.to_string())).collect();
    if let Some(last) = body.last_mut() {
        last.push_span(Span::raw("▏"));
    }
    lines.extend(body);
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        key_span("Enter"),
        Span::raw(" save  "),
        key_span("Alt+Enter"),
        Span::raw(" new line  "),
        key_span("Esc"),
        Span::raw(" cancel"),
    ]));

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(mode_color(dialog.completion().mode)))
            .title(dialog.title()),
    );
    f.render_widget(Clear, area);
    f.render_widget(widget, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
