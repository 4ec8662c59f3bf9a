use std::collections::HashSet;

use crate::auditor::semantic_delta;
use crate::context::resolve_baseline;
use crate::risk::{matched_categories, risk_score};
use crate::text_analysis::{extract_keywords, keyword_overlap, normalize, MIN_KEYWORD_LENGTH};

fn keywords(text: &str) -> HashSet<String> {
    extract_keywords(text, MIN_KEYWORD_LENGTH)
}

#[test]
fn normalize_strips_punctuation_and_collapses_whitespace() {
    assert_eq!(
        normalize("  Wire $4,000 -- NOW!!  (please)  "),
        "wire 4 000 now please"
    );
}

#[test]
fn normalize_is_total_over_degenerate_input() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("!!! ??? ..."), "");
}

#[test]
fn extract_keywords_filters_stop_words_and_short_tokens() {
    let kw = keywords("The agent will transfer it to an account");
    assert!(kw.contains("agent"));
    assert!(kw.contains("transfer"));
    assert!(kw.contains("account"));
    // stop words and short tokens never survive
    assert!(!kw.contains("the"));
    assert!(!kw.contains("will"));
    assert!(!kw.contains("it"));
    assert!(!kw.contains("to"));
    assert!(!kw.contains("an"));
}

#[test]
fn keyword_self_similarity_is_perfect() {
    for text in [
        "Respond to customer support tickets",
        "Transfer funds to the vendor account",
        "",
    ] {
        let kw = keywords(text);
        assert_eq!(keyword_overlap(&kw, &kw), 1.0, "text: {text:?}");
    }
}

#[test]
fn empty_set_overlap_policy() {
    let empty = HashSet::new();
    let nonempty: HashSet<String> = ["payment".to_string()].into_iter().collect();

    assert_eq!(keyword_overlap(&empty, &empty), 1.0);
    assert_eq!(keyword_overlap(&empty, &nonempty), 0.0);
    assert_eq!(keyword_overlap(&nonempty, &empty), 0.0);
}

#[test]
fn overlap_is_standard_jaccard_otherwise() {
    let a = keywords("analyze quarterly revenue spreadsheets");
    let b = keywords("analyze quarterly revenue figures");
    // 3 shared words over a 5-word union
    assert!((keyword_overlap(&a, &b) - 0.6).abs() < 1e-9);
}

#[test]
fn risk_score_counts_categories_not_matches() {
    // one category, many hits
    assert!((risk_score("urgent urgent URGENT emergency") - 1.0 / 3.0).abs() < 1e-9);
    // two distinct categories
    assert!((risk_score("urgent payment") - 2.0 / 3.0).abs() < 1e-9);
    // three categories saturate
    assert_eq!(risk_score("urgent payment, ignore checks"), 1.0);
    // all five stay saturated
    assert_eq!(
        risk_score("urgent: ignore checks, wire the payment to an unknown account, do not wait"),
        1.0
    );
}

#[test]
fn risk_score_requires_word_boundaries() {
    // "urgently" must not match the "urgent" pattern
    assert_eq!(matched_categories("urgently expedited"), Vec::<&str>::new());
    assert_eq!(risk_score("a perfectly ordinary sentence"), 0.0);
}

#[test]
fn delta_score_bounded_for_degenerate_inputs() {
    let cases = [
        ("", ""),
        ("", "Transfer everything now"),
        ("Respond to tickets", ""),
        ("!!! ???", "12 34 56"),
        ("urgent secret bypass wire unknown must", "urgent secret bypass wire unknown must"),
    ];
    for (mission, action) in cases {
        let baseline = resolve_baseline(action);
        let delta = semantic_delta(mission, action, &baseline);
        assert!(
            (0.0..=1.0).contains(&delta),
            "delta {delta} out of range for mission={mission:?} action={action:?}"
        );
    }
}

#[test]
fn delta_never_increases_with_mission_overlap() {
    let mission = "analyze quarterly revenue spreadsheets";
    let aligned = "analyze quarterly revenue spreadsheets";
    let partial = "analyze quarterly revenue figures";
    let disjoint = "compile annual expense figures";

    let baseline = resolve_baseline(aligned);
    let d_aligned = semantic_delta(mission, aligned, &baseline);
    let d_partial = semantic_delta(mission, partial, &baseline);
    let d_disjoint = semantic_delta(mission, disjoint, &baseline);

    assert_eq!(d_aligned, 0.0);
    assert!(d_aligned <= d_partial);
    assert!(d_partial <= d_disjoint);
}

#[test]
fn delta_is_rounded_to_two_decimals() {
    // disjoint keywords, one risk category: 0.6 + (1/3) * 0.4 = 0.7333... -> 0.73
    let mission = "catalog archived research papers";
    let action = "issue the refund";
    let baseline = resolve_baseline(action);
    assert_eq!(semantic_delta(mission, action, &baseline), 0.73);
}
