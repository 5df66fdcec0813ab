//! Pattern templates.
//!
//! A [`Pattern`] is the compiled tree for one grammar entry. The tree itself
//! never changes after compilation: the matching state a live candidate
//! needs (one cursor per `Sequence`, one buffer per `Capture`) lives outside
//! the tree, addressed by the [`CursorSlot`] / [`BufferSlot`] each node is
//! given when the tree is wrapped in a [`Template`].
//!
//! ```text
//! "Read {reg}" = x03 reg:. (. .)
//!
//! Named("Read {reg}")
//!   Sequence #0
//!     Fixed(x03)
//!     Capture(reg) buf #0
//!       Wildcard
//!     Sequence #1
//!       Wildcard
//!       Wildcard
//! ```

use std::fmt;
use std::sync::Arc;

use sift_stack::ensure_sufficient_stack;

use crate::ByteSet;

/// Index of a sequence cursor inside a candidate's match state.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct CursorSlot(u32);

impl CursorSlot {
    #[inline]
    pub const fn new(index: u32) -> Self {
        CursorSlot(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Index of a capture buffer inside a candidate's match state.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct BufferSlot(u32);

impl BufferSlot {
    #[inline]
    pub const fn new(index: u32) -> Self {
        BufferSlot(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// How much mutable state one candidate of a template needs.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct StateLayout {
    /// Number of `Sequence` nodes (one cursor each).
    pub cursors: u32,
    /// Number of `Capture` nodes (one buffer each).
    pub buffers: u32,
}

/// A sequence was built with no children.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("empty pattern sequence is not allowed")]
pub struct EmptySequenceError;

/// Values a unit must have for a pattern's first `match` not to fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StartHint {
    /// Only these unit values can begin a match.
    Units(ByteSet),
    /// Any unit value might begin a match.
    Unbounded,
}

/// One node of a compiled pattern tree.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Pattern {
    /// Matches exactly one byte value.
    Fixed(u8),
    /// Matches any one byte.
    Wildcard,
    /// Matches children in order. Never empty.
    Sequence {
        children: Box<[Pattern]>,
        cursor: CursorSlot,
    },
    /// Marks a top-level match target; reporting only.
    Named { label: String, inner: Box<Pattern> },
    /// Records every byte `inner` consumes and publishes them under `name`
    /// when `inner` succeeds.
    Capture {
        name: Arc<str>,
        inner: Box<Pattern>,
        buffer: BufferSlot,
    },
}

impl Pattern {
    /// Build a sequence. Slots are assigned later by [`Template::new`].
    pub fn sequence(children: Vec<Pattern>) -> Result<Pattern, EmptySequenceError> {
        if children.is_empty() {
            return Err(EmptySequenceError);
        }
        Ok(Pattern::Sequence {
            children: children.into_boxed_slice(),
            cursor: CursorSlot::default(),
        })
    }

    pub fn named(label: impl Into<String>, inner: Pattern) -> Pattern {
        Pattern::Named {
            label: label.into(),
            inner: Box::new(inner),
        }
    }

    pub fn capture(name: impl Into<Arc<str>>, inner: Pattern) -> Pattern {
        Pattern::Capture {
            name: name.into(),
            inner: Box::new(inner),
            buffer: BufferSlot::default(),
        }
    }

    /// The set of unit values that could begin a match of this pattern.
    pub fn start_hint(&self) -> StartHint {
        ensure_sufficient_stack(|| match self {
            Pattern::Fixed(byte) => StartHint::Units(ByteSet::single(*byte)),
            Pattern::Wildcard => StartHint::Unbounded,
            Pattern::Sequence { children, .. } => children
                .first()
                .map_or(StartHint::Unbounded, Pattern::start_hint),
            Pattern::Named { inner, .. } | Pattern::Capture { inner, .. } => inner.start_hint(),
        })
    }

    /// Names of every capture in this subtree, in pre-order.
    pub fn capture_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_capture_names(&mut names);
        names
    }

    fn collect_capture_names<'a>(&'a self, out: &mut Vec<&'a str>) {
        ensure_sufficient_stack(|| match self {
            Pattern::Fixed(_) | Pattern::Wildcard => {}
            Pattern::Sequence { children, .. } => {
                for child in children.iter() {
                    child.collect_capture_names(out);
                }
            }
            Pattern::Named { inner, .. } => inner.collect_capture_names(out),
            Pattern::Capture { name, inner, .. } => {
                out.push(name);
                inner.collect_capture_names(out);
            }
        });
    }

    /// Number pre-order the sequence cursors and capture buffers of this
    /// subtree, continuing from `layout`.
    fn assign_slots(&mut self, layout: &mut StateLayout) {
        ensure_sufficient_stack(|| match self {
            Pattern::Fixed(_) | Pattern::Wildcard => {}
            Pattern::Sequence { children, cursor } => {
                *cursor = CursorSlot::new(layout.cursors);
                layout.cursors += 1;
                for child in children.iter_mut() {
                    child.assign_slots(layout);
                }
            }
            Pattern::Named { inner, .. } => inner.assign_slots(layout),
            Pattern::Capture { inner, buffer, .. } => {
                *buffer = BufferSlot::new(layout.buffers);
                layout.buffers += 1;
                inner.assign_slots(layout);
            }
        });
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Fixed(byte) => write!(f, "x{byte:02X}"),
            Pattern::Wildcard => f.write_str("."),
            Pattern::Sequence { children, .. } => {
                f.write_str("(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{child}")?;
                }
                f.write_str(")")
            }
            Pattern::Named { label, inner } => write!(f, "\"{label}\" = {inner}"),
            Pattern::Capture { name, inner, .. } => write!(f, "{name}:{inner}"),
        }
    }
}

/// A compiled, immutable top-level pattern with its state layout.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Template {
    root: Pattern,
    layout: StateLayout,
}

impl Template {
    /// Wrap a pattern tree, assigning its state slots.
    pub fn new(mut root: Pattern) -> Self {
        let mut layout = StateLayout::default();
        root.assign_slots(&mut layout);
        Template { root, layout }
    }

    #[inline]
    pub fn root(&self) -> &Pattern {
        &self.root
    }

    #[inline]
    pub fn layout(&self) -> StateLayout {
        self.layout
    }

    /// The label template, if this is a named entry.
    pub fn label(&self) -> Option<&str> {
        match &self.root {
            Pattern::Named { label, .. } => Some(label.as_str()),
            _ => None,
        }
    }

    #[inline]
    pub fn start_hint(&self) -> StartHint {
        self.root.start_hint()
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}
