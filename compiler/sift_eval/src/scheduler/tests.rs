#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;

use super::*;

fn program(source: &str) -> Arc<Program> {
    let tokens = sift_lexer::tokenize(source).unwrap();
    let templates = sift_parse::parse(&tokens).unwrap();
    Arc::new(Program::new(templates).unwrap())
}

/// Feed units at times 0, 1, 2, ...; each unit ends half a tick later.
fn run(source: &str, units: &[u8]) -> Vec<Annotation<f64>> {
    let mut scheduler = Scheduler::new(program(source));
    let mut out = Vec::new();
    for (i, &unit) in units.iter().enumerate() {
        let t = i as f64;
        out.extend(scheduler.feed(Some(unit), t, t + 0.5));
    }
    out
}

fn annotation(label: Label, start_time: f64, end_time: f64) -> Annotation<f64> {
    Annotation {
        label,
        start_time,
        end_time,
    }
}

const COMMANDS: &str = "\"Get Version\" = x01 xFE; \"Get Chip ID\" = x02 xFD;";

#[test]
fn named_match_spans_both_units() {
    assert_eq!(
        run(COMMANDS, &[0x01, 0xFE]),
        vec![annotation(Label::Named("Get Version".to_owned()), 0.0, 1.5)]
    );
}

#[test]
fn both_candidates_fail() {
    assert_eq!(run(COMMANDS, &[0x01, 0x02]), vec![]);
}

#[test]
fn match_after_failed_attempt() {
    assert_eq!(
        run(COMMANDS, &[0x01, 0x02, 0xFD]),
        vec![annotation(Label::Named("Get Chip ID".to_owned()), 1.0, 2.5)]
    );
}

#[test]
fn unnamed_match_uses_marker() {
    let found = run("x0A x0B", &[0x0A, 0x0B]);
    assert_eq!(found, vec![annotation(Label::Unnamed, 0.0, 1.5)]);
    assert_eq!(found[0].label.text(), UNNAMED_MARKER);
    assert!(!found[0].label.is_named());
}

#[test]
fn label_renders_captures() {
    assert_eq!(
        run("\"Chip {id} = {id:B}\" = x02 id:(. .)", &[0x02, 0x01, 0x00]),
        vec![annotation(
            Label::Named("Chip x0100 = 256".to_owned()),
            0.0,
            2.5
        )]
    );
}

#[test]
fn earliest_start_wins() {
    // "long" starts at 0, "short" starts at 1; both complete at unit 2
    let source = "\"long\" = x01 . x03; \"short\" = x02 x03;";
    assert_eq!(
        run(source, &[0x01, 0x02, 0x03]),
        vec![annotation(Label::Named("long".to_owned()), 0.0, 2.5)]
    );
}

#[test]
fn tie_goes_to_first_declared() {
    let source = "\"first\" = . x02; \"second\" = x01 x02;";
    assert_eq!(
        run(source, &[0x01, 0x02]),
        vec![annotation(Label::Named("first".to_owned()), 0.0, 1.5)]
    );
    let swapped = "\"first\" = x01 x02; \"second\" = . x02;";
    assert_eq!(
        run(swapped, &[0x01, 0x02]),
        vec![annotation(Label::Named("first".to_owned()), 0.0, 1.5)]
    );
}

#[test]
fn win_clears_pending_candidates() {
    // "pair" would complete at unit 2, but "single" wins at unit 1 and the
    // pool is cleared, so unit 2 starts fresh.
    let source = "\"pair\" = xAA xBB xCC; \"single\" = xBB;";
    let mut scheduler = Scheduler::new(program(source));
    assert_eq!(scheduler.feed(Some(0xAA), 0.0, 0.5), None);
    assert_eq!(scheduler.live(), 1);
    assert_eq!(
        scheduler.feed(Some(0xBB), 1.0, 1.5),
        Some(annotation(Label::Named("single".to_owned()), 1.0, 1.5))
    );
    assert_eq!(scheduler.live(), 0);
    assert_eq!(scheduler.feed(Some(0xCC), 2.0, 2.5), None);
}

#[test]
fn units_without_data_are_skipped() {
    let mut scheduler = Scheduler::new(program(COMMANDS));
    assert_eq!(scheduler.feed(Some(0x01), 0.0, 0.5), None);
    assert_eq!(scheduler.feed(None, 1.0, 1.5), None);
    assert_eq!(scheduler.live(), 1);
    assert_eq!(
        scheduler.feed(Some(0xFE), 2.0, 2.5),
        Some(annotation(Label::Named("Get Version".to_owned()), 0.0, 2.5))
    );
}

#[test]
fn hint_index_prunes_spawns() {
    let mut scheduler = Scheduler::new(program(COMMANDS));
    assert_eq!(scheduler.feed(Some(0x55), 0.0, 0.5), None);
    assert_eq!(scheduler.live(), 0);
    assert_eq!(scheduler.feed(Some(0x01), 1.0, 1.5), None);
    assert_eq!(scheduler.live(), 1);
}

#[test]
fn fixed_start_spawns_only_on_its_byte() {
    let mut scheduler = Scheduler::new(program("x01 . . x02"));
    for (i, unit) in [0x10u8, 0x11, 0x12].into_iter().enumerate() {
        let t = i as f64;
        assert_eq!(scheduler.feed(Some(unit), t, t), None);
        assert_eq!(scheduler.live(), 0);
    }
}

#[test]
fn wildcard_start_spawns_on_every_unit() {
    let found = run(". x02", &[0x07, 0x07, 0x02]);
    assert_eq!(found, vec![annotation(Label::Unnamed, 1.0, 2.5)]);
}

#[test]
fn repeated_matches_do_not_overlap() {
    let found = run("\"ab\" = xAA xBB", &[0xAA, 0xBB, 0xAA, 0xBB, 0xAA]);
    assert_eq!(
        found,
        vec![
            annotation(Label::Named("ab".to_owned()), 0.0, 1.5),
            annotation(Label::Named("ab".to_owned()), 2.0, 3.5),
        ]
    );
}

#[test]
fn clear_drops_candidates() {
    let mut scheduler = Scheduler::new(program(COMMANDS));
    scheduler.feed(Some(0x01), 0.0, 0.5);
    scheduler.clear();
    assert_eq!(scheduler.feed(Some(0xFE), 1.0, 1.5), None);
    assert_eq!(scheduler.program().len(), 2);
}

#[test]
fn render_failure_falls_back_to_template_text() {
    // Labels are validated at parse time, so build the program directly.
    let template = sift_ir::Template::new(sift_ir::Pattern::named(
        "value {v}",
        sift_ir::Pattern::sequence(vec![sift_ir::Pattern::Fixed(1)]).unwrap(),
    ));
    let mut scheduler = Scheduler::new(Arc::new(Program::new(vec![template]).unwrap()));
    assert_eq!(
        scheduler.feed(Some(1), 0.0, 1.0),
        Some(annotation(Label::Named("value {v}".to_owned()), 0.0, 1.0))
    );
}
