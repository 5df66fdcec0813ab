#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use sift_ir::Pattern;

use super::*;

fn named(label: &str, inner: Pattern) -> Template {
    Template::new(Pattern::named(
        label,
        Pattern::sequence(vec![inner]).unwrap(),
    ))
}

#[test]
fn labels_are_parsed_once() {
    let program = Program::new(vec![
        named("Read {v:B}", Pattern::capture("v", Pattern::Wildcard)),
        Template::new(Pattern::sequence(vec![Pattern::Fixed(1)]).unwrap()),
    ])
    .unwrap();
    assert_eq!(program.len(), 2);
    let first = program.get(0).unwrap();
    assert_eq!(first.label().unwrap().source(), "Read {v:B}");
    assert!(program.get(1).unwrap().label().is_none());
    assert_eq!(program.hints().fallback(), &[0]);
    assert_eq!(program.hints().hinted(1), &[1]);
}

#[test]
fn bad_label_is_rejected() {
    let err = Program::new(vec![named("{v:?}", Pattern::capture("v", Pattern::Wildcard))])
        .unwrap_err();
    assert_eq!(
        err,
        LabelError::UnknownSpec {
            name: "v".to_owned(),
            spec: "?".to_owned(),
        }
    );
}

#[test]
fn empty_program() {
    let program = Program::new(Vec::new()).unwrap();
    assert!(program.is_empty());
    assert!(program.templates().is_empty());
}
