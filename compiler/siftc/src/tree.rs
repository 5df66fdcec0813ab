//! Indented rendering of compiled templates, for `sift parse`.

use std::fmt::Write;

use sift_ir::{Pattern, StartHint, Template};
use sift_stack::ensure_sufficient_stack;

/// Render a template as an indented tree, two spaces per level.
///
/// ```text
/// Named("Read {reg}")
///   Sequence #0
///     Fixed(x03)
///     Capture(reg) buf #0
///       Wildcard
/// ```
pub fn render_tree(template: &Template) -> String {
    let mut out = String::new();
    write_node(&mut out, template.root(), 0);
    out
}

/// `any`, or the admitted units in ascending order.
pub fn render_start_hint(hint: &StartHint) -> String {
    match hint {
        StartHint::Unbounded => "any".to_owned(),
        StartHint::Units(set) => set
            .iter()
            .map(|unit| format!("x{unit:02X}"))
            .collect::<Vec<_>>()
            .join(" "),
    }
}

fn write_node(out: &mut String, pattern: &Pattern, depth: usize) {
    ensure_sufficient_stack(|| {
        let indent = depth * 2;
        // Writing to a String cannot fail.
        let _ = match pattern {
            Pattern::Fixed(byte) => writeln!(out, "{:indent$}Fixed(x{byte:02X})", ""),
            Pattern::Wildcard => writeln!(out, "{:indent$}Wildcard", ""),
            Pattern::Sequence { cursor, .. } => {
                writeln!(out, "{:indent$}Sequence #{}", "", cursor.index())
            }
            Pattern::Named { label, .. } => writeln!(out, "{:indent$}Named({label:?})", ""),
            Pattern::Capture { name, buffer, .. } => {
                writeln!(out, "{:indent$}Capture({name}) buf #{}", "", buffer.index())
            }
        };
        match pattern {
            Pattern::Fixed(_) | Pattern::Wildcard => {}
            Pattern::Sequence { children, .. } => {
                for child in children.iter() {
                    write_node(out, child, depth + 1);
                }
            }
            Pattern::Named { inner, .. } | Pattern::Capture { inner, .. } => {
                write_node(out, inner, depth + 1);
            }
        }
    });
}
