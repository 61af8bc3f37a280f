use bakery_core::{Error, TechStack};

#[test]
fn default_stack_is_python_38() {
    assert_eq!(TechStack::default(), TechStack::Python38);
    assert_eq!(TechStack::default().as_tag(), "python:3.8");
}

#[test]
fn every_tag_round_trips_through_from_str() {
    for stack in TechStack::ALL {
        let parsed: TechStack = stack.as_tag().parse().unwrap();
        assert_eq!(parsed, stack);
    }
}

#[test]
fn unknown_tag_is_rejected_with_supported_list() {
    let result: Result<TechStack, _> = "ruby:3.2".parse();

    match result {
        Err(Error::UnknownTechStack { tag, supported }) => {
            assert_eq!(tag, "ruby:3.2");
            assert_eq!(supported.len(), 9);
            assert!(supported.contains(&"node:18".to_owned()));
        }
        other => panic!("expected UnknownTechStack, got {other:?}"),
    }
}

#[test]
fn display_matches_wire_tag() {
    assert_eq!(TechStack::Node18.to_string(), "node:18");
    assert_eq!(TechStack::Java17.to_string(), "java:17");
    assert_eq!(TechStack::Python312.to_string(), "python:3.12");
}
