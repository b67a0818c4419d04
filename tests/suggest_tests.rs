use pomomemo::core::suggest::{HintKind, NEUTRAL_HINT, advise, keywords, suggest};

#[test]
fn test_phone_gets_a_dont() {
    let s = suggest("Checked my Phone and answered messages");
    assert_eq!(s.kind, HintKind::Dont);
    assert_eq!(s.keyword, Some("phone"));
    assert!(s.hint.to_lowercase().contains("phone"));
}

#[test]
fn test_walk_gets_a_do() {
    let s = suggest("short walk around the block");
    assert_eq!(s.kind, HintKind::Do);
    assert_eq!(s.keyword, Some("walk"));
}

#[test]
fn test_donts_win_over_dos() {
    let s = suggest("walk while scrolling on the phone");
    assert_eq!(s.kind, HintKind::Dont);
    assert_eq!(s.keyword, Some("phone"));
}

#[test]
fn test_unknown_or_empty_text_gets_neutral_hint() {
    for text in ["", "   ", "read a chapter of a novel"] {
        let s = suggest(text);
        assert_eq!(s.kind, HintKind::Neutral);
        assert_eq!(s.keyword, None);
        assert_eq!(s.hint, NEUTRAL_HINT);
    }
}

#[test]
fn test_advise_collects_distinct_hints() {
    let a = advise("instagram then tiktok, then a walk and some water");
    assert_eq!(a.donts.len(), 1, "feeds hint appears once");
    assert_eq!(a.dos.len(), 2);
}

#[test]
fn test_advise_falls_back_to_neutral_tips() {
    let a = advise("nothing special");
    assert!(a.donts.is_empty());
    assert_eq!(a.dos.first().copied(), Some(NEUTRAL_HINT));
}

#[test]
fn test_keywords_are_lowercase_and_donts_first() {
    let all: Vec<_> = keywords().collect();
    assert!(all.iter().all(|(k, _)| *k == k.to_lowercase()));
    let first_do = all.iter().position(|(_, kind)| *kind == HintKind::Do).unwrap();
    assert!(all[first_do..].iter().all(|(_, kind)| *kind == HintKind::Do));
}
