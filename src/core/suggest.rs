//! Keyword heuristic turning a break-activity note into a do/don't hint.
//!
//! Matching is a case-insensitive substring search against [`RULES`], in
//! table order. "Don't" rules come first, so a note mentioning both the
//! phone and a walk gets the caution.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HintKind {
    Do,
    Dont,
    Neutral,
}

impl HintKind {
    pub fn label(&self) -> &'static str {
        match self {
            HintKind::Do => "Do",
            HintKind::Dont => "Don't",
            HintKind::Neutral => "Tip",
        }
    }
}

/// The hint shown in the UI before the next break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub kind: HintKind,
    /// Keyword that triggered the hint, `None` for the neutral default.
    pub keyword: Option<&'static str>,
    pub hint: &'static str,
}

/// Every hint that applies to a note, written into the break's log entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Advice {
    pub dos: Vec<&'static str>,
    pub donts: Vec<&'static str>,
}

struct Rule {
    keyword: &'static str,
    kind: HintKind,
    hint: &'static str,
}

const PHONE: &str = "Leave the phone in another room or turn on Focus mode next break.";
const FEEDS: &str = "Avoid algorithmic feeds and passive scrolling next break.";
const BINGE: &str = "Skip games and episodes; they rarely stop after five minutes.";
const MOVE: &str = "Quick movement reset your focus; repeat it next break.";
const OUTSIDE: &str = "A short walk or some daylight helped; do it again.";
const HYDRATE: &str = "Hydrating worked; keep a glass of water within reach.";
const BREATHE: &str = "Keep the breathing exercise; it calms the next session down.";

pub const NEUTRAL_HINT: &str = "Keep the break short (3-5 min) and physically reset: stand up and stretch.";
const NEUTRAL_EXTRA: &str = "Sip some water and skip snacks that make you sluggish.";

const fn rule(keyword: &'static str, kind: HintKind, hint: &'static str) -> Rule {
    Rule {
        keyword,
        kind,
        hint,
    }
}

const RULES: &[Rule] = &[
    // don't
    rule("phone", HintKind::Dont, PHONE),
    rule("scroll", HintKind::Dont, FEEDS),
    rule("instagram", HintKind::Dont, FEEDS),
    rule("tiktok", HintKind::Dont, FEEDS),
    rule("reel", HintKind::Dont, FEEDS),
    rule("youtube", HintKind::Dont, FEEDS),
    rule("doom", HintKind::Dont, FEEDS),
    rule("whatsapp", HintKind::Dont, FEEDS),
    rule("twitter", HintKind::Dont, FEEDS),
    rule("x.com", HintKind::Dont, FEEDS),
    rule("reddit", HintKind::Dont, FEEDS),
    rule("news", HintKind::Dont, FEEDS),
    rule("binge", HintKind::Dont, BINGE),
    rule("gaming", HintKind::Dont, BINGE),
    rule("netflix", HintKind::Dont, BINGE),
    // do
    rule("walk", HintKind::Do, OUTSIDE),
    rule("sunlight", HintKind::Do, OUTSIDE),
    rule("standing", HintKind::Do, MOVE),
    rule("stretch", HintKind::Do, MOVE),
    rule("pushups", HintKind::Do, MOVE),
    rule("plank", HintKind::Do, MOVE),
    rule("yoga", HintKind::Do, MOVE),
    rule("water", HintKind::Do, HYDRATE),
    rule("hydrate", HintKind::Do, HYDRATE),
    rule("coffee", HintKind::Do, HYDRATE),
    rule("breath", HintKind::Do, BREATHE),
    rule("meditat", HintKind::Do, BREATHE),
];

fn matching(text: &str) -> impl Iterator<Item = &'static Rule> {
    let lowered = text.to_lowercase();
    RULES.iter().filter(move |r| lowered.contains(r.keyword))
}

/// First matching hint for `text`, or the neutral default.
pub fn suggest(text: &str) -> Suggestion {
    matching(text)
        .next()
        .map(|r| Suggestion {
            kind: r.kind,
            keyword: Some(r.keyword),
            hint: r.hint,
        })
        .unwrap_or(Suggestion {
            kind: HintKind::Neutral,
            keyword: None,
            hint: NEUTRAL_HINT,
        })
}

/// All distinct hints for `text`, split into dos and don'ts.
///
/// When nothing matches, both neutral tips land in `dos`.
pub fn advise(text: &str) -> Advice {
    let mut advice = Advice::default();

    for rule in matching(text) {
        let bucket = match rule.kind {
            HintKind::Dont => &mut advice.donts,
            _ => &mut advice.dos,
        };
        if !bucket.contains(&rule.hint) {
            bucket.push(rule.hint);
        }
    }

    if advice.dos.is_empty() && advice.donts.is_empty() {
        advice.dos.push(NEUTRAL_HINT);
        advice.dos.push(NEUTRAL_EXTRA);
    }

    advice
}

/// Keywords known to the heuristic, in matching order.
pub fn keywords() -> impl Iterator<Item = (&'static str, HintKind)> {
    RULES.iter().map(|r| (r.keyword, r.kind))
}
