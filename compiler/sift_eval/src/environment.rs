//! Capture environment of one candidate.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

/// Capture buffers published by one candidate, by capture name.
///
/// Written only when a `Capture` element succeeds, read once by the label
/// renderer when the candidate wins. Never shared between candidates.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MatchEnvironment {
    captures: FxHashMap<Arc<str>, Vec<u8>>,
}

impl MatchEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish `bytes` under `name`, replacing an earlier capture of the
    /// same name.
    pub fn publish(&mut self, name: Arc<str>, bytes: Vec<u8>) {
        self.captures.insert(name, bytes);
    }

    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.captures.get(name).map(Vec::as_slice)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.captures.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.captures.is_empty()
    }

    /// Iterate captures in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.captures
            .iter()
            .map(|(name, bytes)| (name.as_ref(), bytes.as_slice()))
    }
}

impl fmt::Debug for MatchEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by_key(|(name, _)| *name);
        f.debug_map().entries(entries).finish()
    }
}
