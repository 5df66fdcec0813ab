//! Candidate scheduler.
//!
//! Runs every template of a [`Program`] against one stream of units. Each
//! unit is processed in three steps:
//!
//! 1. **Spawn** a candidate for every template the hint index admits.
//! 2. **Advance** every live candidate, old and new, with the unit.
//! 3. **Resolve**: if any candidate succeeded, the one with the earliest
//!    start time wins (first in pool order on a tie), one annotation is
//!    emitted and the whole pool is cleared.
//!
//! Clearing the pool on a win keeps emitted spans from overlapping: every
//! survivor started at or before this unit and would have to reuse it.

use std::fmt;
use std::mem;
use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::{CompiledTemplate, MatchEnvironment, MatchResult, MatchState, Program};

/// Text used for the label of unnamed matches.
pub const UNNAMED_MARKER: &str = "(unnamed)";

/// The label of an emitted annotation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Label {
    /// A named template matched; the rendered label text.
    Named(String),
    /// An unnamed template matched.
    Unnamed,
}

impl Label {
    pub fn text(&self) -> &str {
        match self {
            Label::Named(text) => text,
            Label::Unnamed => UNNAMED_MARKER,
        }
    }

    pub fn is_named(&self) -> bool {
        matches!(self, Label::Named(_))
    }
}

/// One matched span of the stream.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation<T> {
    pub label: Label,
    /// Start time of the first unit of the match.
    pub start_time: T,
    /// End time of the unit that completed the match.
    pub end_time: T,
}

/// One live attempt to match one template from one start unit.
struct Candidate<T> {
    template: Arc<CompiledTemplate>,
    state: MatchState,
    environment: MatchEnvironment,
    start_time: T,
}

impl<T> Candidate<T> {
    fn spawn(template: &Arc<CompiledTemplate>, start_time: T) -> Self {
        Candidate {
            state: MatchState::new(template.template().layout()),
            template: Arc::clone(template),
            environment: MatchEnvironment::new(),
            start_time,
        }
    }

    fn advance(&mut self, unit: u8) -> MatchResult {
        self.state
            .advance(self.template.template(), unit, &mut self.environment)
    }
}

/// The earliest successful candidate of a round.
struct Winner<T> {
    template: Arc<CompiledTemplate>,
    environment: MatchEnvironment,
    start_time: T,
}

/// Drives a [`Program`] over a stream of timestamped units.
///
/// `T` is the host's timestamp type; it only needs to be ordered.
pub struct Scheduler<T> {
    program: Arc<Program>,
    pool: Vec<Candidate<T>>,
}

impl<T> Scheduler<T>
where
    T: Copy + PartialOrd + fmt::Debug,
{
    pub fn new(program: Arc<Program>) -> Self {
        Scheduler {
            program,
            pool: Vec::new(),
        }
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Number of live candidates.
    #[inline]
    pub fn live(&self) -> usize {
        self.pool.len()
    }

    /// Drop every live candidate.
    pub fn clear(&mut self) {
        self.pool.clear();
    }

    /// Process one unit. `None` is a unit without data and is ignored
    /// entirely.
    pub fn feed(&mut self, unit: Option<u8>, start_time: T, end_time: T) -> Option<Annotation<T>> {
        let Some(unit) = unit else {
            trace!(?start_time, "skipping unit without data");
            return None;
        };

        let before = self.pool.len();
        for index in self.program.hints().spawn_order(unit) {
            if let Some(template) = self.program.get(index) {
                self.pool.push(Candidate::spawn(template, start_time));
            }
        }
        let spawned = self.pool.len() - before;

        let mut winner: Option<Winner<T>> = None;
        let mut matched = 0usize;
        self.pool.retain_mut(|candidate| match candidate.advance(unit) {
            MatchResult::NeedMore => true,
            MatchResult::Failure => false,
            MatchResult::Success => {
                matched += 1;
                let earlier = winner
                    .as_ref()
                    .map_or(true, |best| candidate.start_time < best.start_time);
                if earlier {
                    winner = Some(Winner {
                        template: Arc::clone(&candidate.template),
                        environment: mem::take(&mut candidate.environment),
                        start_time: candidate.start_time,
                    });
                }
                false
            }
        });
        trace!(
            unit,
            spawned,
            live = self.pool.len(),
            matched,
            "advanced candidates"
        );

        let winner = winner?;
        self.pool.clear();

        let label = render_label(&winner);
        debug!(
            start_time = ?winner.start_time,
            ?end_time,
            label = label.text(),
            "match"
        );
        Some(Annotation {
            label,
            start_time: winner.start_time,
            end_time,
        })
    }
}

fn render_label<T>(winner: &Winner<T>) -> Label {
    let Some(template) = winner.template.label() else {
        return Label::Unnamed;
    };
    match template.render(|name| winner.environment.get(name)) {
        Ok(text) => Label::Named(text),
        Err(err) => {
            warn!(label = template.source(), error = %err, "label render failed");
            Label::Named(template.source().to_owned())
        }
    }
}

#[cfg(test)]
mod tests;
