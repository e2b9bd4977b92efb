// Host-side tests for one-shot scroll reveals.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod reveal {
    include!("../src/core/reveal.rs");
}

use constants::*;
use reveal::*;

#[test]
fn reveals_once_at_threshold() {
    let mut r = Reveal::new(0.3);
    assert_eq!(r.threshold(), REVEAL_THRESHOLD);
    assert_eq!(r.report(0.0), None);
    assert_eq!(r.report(0.19), None);
    assert_eq!(r.state(), RevealState::Unrevealed);
    assert_eq!(r.report(0.2), Some(RevealTrigger { delay_sec: 0.3 }));
    assert_eq!(r.state(), RevealState::Revealed);
}

#[test]
fn later_reports_are_ignored() {
    let mut r = Reveal::new(0.0);
    assert!(r.report(1.0).is_some());
    for ratio in [0.0, 0.5, 1.0, 0.1, 1.0] {
        assert_eq!(r.report(ratio), None);
        assert_eq!(r.state(), RevealState::Revealed);
    }
}

#[test]
fn non_finite_ratios_do_not_fire() {
    let mut r = Reveal::new(0.0);
    assert_eq!(r.report(f64::NAN), None);
    assert_eq!(r.report(f64::INFINITY), None);
    assert_eq!(r.state(), RevealState::Unrevealed);
}

#[test]
fn delay_attribute_parsing() {
    assert_eq!(parse_delay(None), 0.0);
    assert_eq!(parse_delay(Some("0.25")), 0.25);
    assert_eq!(parse_delay(Some(" 1 ")), 1.0);
    assert_eq!(parse_delay(Some("soon")), 0.0);
    assert_eq!(parse_delay(Some("-2")), 0.0);
    assert_eq!(parse_delay(Some("NaN")), 0.0);
}

#[test]
fn styles_describe_slide_and_fade() {
    assert_eq!(hidden_style(), "opacity:0;transform:translateY(50px)");
    let visible = visible_style(0.2);
    assert!(visible.starts_with("opacity:1;transform:translateY(0px)"));
    assert!(visible.contains("opacity 0.5s ease-out 0.2s"));
    assert!(visible.contains("transform 0.5s ease-out 0.2s"));
}

#[test]
fn ratio_just_under_threshold_still_reveals() {
    let mut r = Reveal::new(0.0);
    assert_eq!(
        r.report(REVEAL_THRESHOLD - 1e-6),
        Some(RevealTrigger { delay_sec: 0.0 })
    );
    let mut r = Reveal::new(0.0);
    assert_eq!(r.report(REVEAL_THRESHOLD - 0.01), None);
    assert_eq!(r.state(), RevealState::Unrevealed);
}

#[test]
fn entries_that_are_not_intersecting_never_reveal() {
    let mut r = Reveal::new(0.0);
    assert_eq!(r.report_entry(0.5, false), None);
    assert_eq!(r.state(), RevealState::Unrevealed);
    assert!(r.report_entry(0.5, true).is_some());
    assert_eq!(r.report_entry(1.0, true), None);
}
