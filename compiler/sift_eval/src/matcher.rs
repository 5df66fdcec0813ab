//! The per-candidate matching automaton.
//!
//! A [`Pattern`] tree is immutable and shared; everything that changes while
//! a candidate consumes units lives in its [`MatchState`]: one cursor per
//! `Sequence` and one buffer per `Capture`, addressed by the slots assigned
//! when the template was compiled.
//!
//! Contract: once [`MatchState::advance`] returns `Success` or `Failure` for
//! a template it must not be advanced again without an intervening
//! [`MatchState::reset`]. The environment is written only on `Success`.
//! A state whose layout does not cover the template fails instead of
//! reading out of bounds.

use std::mem;

use sift_ir::{Pattern, StateLayout, Template};
use sift_stack::ensure_sufficient_stack;
use smallvec::{smallvec, SmallVec};

use crate::MatchEnvironment;

/// Outcome of feeding one unit to a pattern.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MatchResult {
    /// The pattern matched, ending at this unit.
    Success,
    /// The pattern cannot match.
    Failure,
    /// Consistent so far; more units are needed.
    NeedMore,
}

/// Mutable matching state for one candidate of one template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchState {
    cursors: SmallVec<[u32; 4]>,
    buffers: SmallVec<[Vec<u8>; 2]>,
}

impl MatchState {
    /// Fresh state for a template with the given layout.
    pub fn new(layout: StateLayout) -> Self {
        MatchState {
            cursors: smallvec![0; layout.cursors as usize],
            buffers: smallvec![Vec::new(); layout.buffers as usize],
        }
    }

    /// Discard all in-progress state of `template`.
    pub fn reset(&mut self, template: &Template) {
        self.reset_node(template.root());
    }

    /// Feed one unit to `template`.
    pub fn advance(
        &mut self,
        template: &Template,
        unit: u8,
        environment: &mut MatchEnvironment,
    ) -> MatchResult {
        self.advance_node(template.root(), unit, environment)
    }

    /// A sequence resets every child, not only those already visited.
    fn reset_node(&mut self, pattern: &Pattern) {
        ensure_sufficient_stack(|| match pattern {
            Pattern::Fixed(_) | Pattern::Wildcard => {}
            Pattern::Sequence { children, cursor } => {
                if let Some(position) = self.cursors.get_mut(cursor.index()) {
                    *position = 0;
                }
                for child in children.iter() {
                    self.reset_node(child);
                }
            }
            Pattern::Named { inner, .. } => self.reset_node(inner),
            Pattern::Capture { inner, buffer, .. } => {
                if let Some(bytes) = self.buffers.get_mut(buffer.index()) {
                    bytes.clear();
                }
                self.reset_node(inner);
            }
        });
    }

    fn advance_node(
        &mut self,
        pattern: &Pattern,
        unit: u8,
        environment: &mut MatchEnvironment,
    ) -> MatchResult {
        ensure_sufficient_stack(|| match pattern {
            Pattern::Fixed(byte) => {
                if unit == *byte {
                    MatchResult::Success
                } else {
                    MatchResult::Failure
                }
            }
            Pattern::Wildcard => MatchResult::Success,
            Pattern::Sequence { children, cursor } => {
                let slot = cursor.index();
                let Some(&position) = self.cursors.get(slot) else {
                    return MatchResult::Failure;
                };
                let position = position as usize;
                let Some(child) = children.get(position) else {
                    // exhausted: only reachable by advancing past Success
                    return MatchResult::Failure;
                };
                match self.advance_node(child, unit, environment) {
                    MatchResult::Success => {
                        self.cursors[slot] += 1;
                        if position + 1 == children.len() {
                            MatchResult::Success
                        } else {
                            MatchResult::NeedMore
                        }
                    }
                    other => other,
                }
            }
            Pattern::Named { inner, .. } => self.advance_node(inner, unit, environment),
            Pattern::Capture {
                name,
                inner,
                buffer,
            } => {
                if buffer.index() >= self.buffers.len() {
                    return MatchResult::Failure;
                }
                let result = self.advance_node(inner, unit, environment);
                let bytes = &mut self.buffers[buffer.index()];
                match result {
                    MatchResult::Success => {
                        bytes.push(unit);
                        environment.publish(name.clone(), mem::take(bytes));
                    }
                    MatchResult::NeedMore => bytes.push(unit),
                    MatchResult::Failure => {}
                }
                result
            }
        })
    }
}
