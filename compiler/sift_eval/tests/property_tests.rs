//! Property tests for the scheduler.
//!
//! The hint index must only change how many candidates are spawned, never
//! which annotations come out. A reference scheduler that spawns every
//! template on every unit is the oracle.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::sync::Arc;

use proptest::prelude::*;
use sift_eval::{MatchEnvironment, MatchResult, MatchState, Program, Scheduler};
use sift_ir::{Pattern, Template};

/// Small alphabet so random streams actually match.
fn element() -> impl Strategy<Value = Pattern> {
    let leaf = prop_oneof![
        3 => (0u8..3).prop_map(Pattern::Fixed),
        1 => Just(Pattern::Wildcard),
    ];
    leaf.prop_recursive(3, 16, 3, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 1..4)
                .prop_map(|children| Pattern::sequence(children).unwrap()),
            inner.prop_map(|p| Pattern::capture("c", p)),
        ]
    })
}

fn templates() -> impl Strategy<Value = Vec<Template>> {
    prop::collection::vec(prop::collection::vec(element(), 1..4), 1..5).prop_map(|bodies| {
        bodies
            .into_iter()
            .enumerate()
            .map(|(i, body)| {
                Template::new(Pattern::named(
                    format!("t{i}"),
                    Pattern::sequence(body).unwrap(),
                ))
            })
            .collect()
    })
}

fn stream() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..4, 0..48)
}

/// `(label, start, end)` per annotation.
type Found = Vec<(String, u32, u32)>;

fn indexed(templates: &[Template], units: &[u8]) -> Found {
    let program = Program::new(templates.to_vec()).unwrap();
    let mut scheduler = Scheduler::new(Arc::new(program));
    (0u32..)
        .zip(units)
        .filter_map(|(t, &unit)| scheduler.feed(Some(unit), t, t))
        .map(|a| (a.label.text().to_owned(), a.start_time, a.end_time))
        .collect()
}

/// Spawn every template on every unit; no index.
fn reference(templates: &[Template], units: &[u8]) -> Found {
    let mut pool: Vec<(usize, MatchState, MatchEnvironment, u32)> = Vec::new();
    let mut found = Vec::new();
    for (t, &unit) in (0u32..).zip(units) {
        for (i, template) in templates.iter().enumerate() {
            pool.push((i, MatchState::new(template.layout()), MatchEnvironment::new(), t));
        }
        let mut winner: Option<(usize, u32)> = None;
        pool.retain_mut(|(i, state, env, start)| {
            match state.advance(&templates[*i], unit, env) {
                MatchResult::NeedMore => true,
                MatchResult::Failure => false,
                MatchResult::Success => {
                    if winner.map_or(true, |(_, best)| *start < best) {
                        winner = Some((*i, *start));
                    }
                    false
                }
            }
        });
        if let Some((i, start)) = winner {
            pool.clear();
            found.push((format!("t{i}"), start, t));
        }
    }
    found
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn hint_index_matches_reference(templates in templates(), units in stream()) {
        prop_assert_eq!(indexed(&templates, &units), reference(&templates, &units));
    }

    #[test]
    fn spans_never_overlap(templates in templates(), units in stream()) {
        let found = indexed(&templates, &units);
        for (_, start, end) in &found {
            prop_assert!(start <= end);
        }
        for pair in found.windows(2) {
            let (_, _, prev_end) = &pair[0];
            let (_, next_start, _) = &pair[1];
            prop_assert!(next_start > prev_end);
        }
        prop_assert!(found.len() <= units.len());
    }

    #[test]
    fn no_data_units_change_nothing(templates in templates(), units in stream()) {
        let program = Arc::new(Program::new(templates.clone()).unwrap());
        let mut plain = Scheduler::new(Arc::clone(&program));
        let mut gappy = Scheduler::new(program);
        for (t, &unit) in (0u32..).zip(&units) {
            prop_assert_eq!(gappy.feed(None, t, t), None);
            prop_assert_eq!(
                plain.feed(Some(unit), t, t),
                gappy.feed(Some(unit), t, t)
            );
        }
    }
}
