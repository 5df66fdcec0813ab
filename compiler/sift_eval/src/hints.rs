//! Start-hint index.
//!
//! For each unit value, the templates that could begin a match on it, plus a
//! fallback list of templates that could begin on any unit. Both lists hold
//! template indices in declaration order, so merging them reproduces the
//! order in which unconditional spawning would visit the same templates.

use sift_ir::{StartHint, Template};

/// Precomputed unit → templates table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HintIndex {
    by_unit: Vec<Vec<u32>>,
    fallback: Vec<u32>,
}

impl HintIndex {
    pub fn new<'a>(templates: impl IntoIterator<Item = &'a Template>) -> Self {
        let mut by_unit = vec![Vec::new(); 256];
        let mut fallback = Vec::new();
        for (index, template) in (0u32..).zip(templates) {
            match template.start_hint() {
                StartHint::Units(units) => {
                    for unit in units.iter() {
                        by_unit[usize::from(unit)].push(index);
                    }
                }
                StartHint::Unbounded => fallback.push(index),
            }
        }
        HintIndex { by_unit, fallback }
    }

    /// Templates hinted for exactly `unit`, excluding the fallback list.
    pub fn hinted(&self, unit: u8) -> &[u32] {
        &self.by_unit[usize::from(unit)]
    }

    pub fn fallback(&self) -> &[u32] {
        &self.fallback
    }

    /// Every template worth spawning on `unit`, in declaration order.
    pub fn spawn_order(&self, unit: u8) -> SpawnOrder<'_> {
        SpawnOrder {
            hinted: self.hinted(unit),
            fallback: &self.fallback,
        }
    }

    /// Number of units with at least one hinted template.
    pub fn hinted_units(&self) -> usize {
        self.by_unit.iter().filter(|list| !list.is_empty()).count()
    }
}

/// Ordered merge of a unit's hinted list with the fallback list.
#[derive(Clone, Debug)]
pub struct SpawnOrder<'a> {
    hinted: &'a [u32],
    fallback: &'a [u32],
}

impl<'a> Iterator for SpawnOrder<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let take_hinted = match (self.hinted.first(), self.fallback.first()) {
            (Some(h), Some(f)) => h < f,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => return None,
        };
        let list = if take_hinted {
            &mut self.hinted
        } else {
            &mut self.fallback
        };
        let current: &'a [u32] = *list;
        let (&index, rest) = current.split_first()?;
        *list = rest;
        Some(index as usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.hinted.len() + self.fallback.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for SpawnOrder<'_> {}
