use event_modifiers::prelude::*;
use event_modifiers::{ModifierError, ParseModifierError};
use event_modifiers_testing::{EmissionLog, TestDocument};

#[test]
fn attach_activates_the_named_modifier() {
    let document = TestDocument::new();
    let panel = document.create_element("div", &document.body());
    let button = document.create_element("button", &panel);

    let modifier = attach(
        document.clone(),
        panel.clone(),
        "click.self",
        EventOptions::default(),
    )
    .expect("attach");
    assert_eq!(modifier.kind(), ModifierKind::SelfTarget);
    assert!(modifier.is_active());
    let log = EmissionLog::attach(&modifier);

    document.click(button.id());
    document.click(panel.id());

    assert_eq!(log.targets(), vec![panel.id()]);
}

#[test]
fn attach_rejects_unknown_attributes() {
    let document = TestDocument::new();
    let body = document.body();

    let err = attach(document.clone(), body.clone(), "click.twice", EventOptions::default())
        .expect_err("unknown modifier");
    assert_eq!(
        err,
        AttachError::Parse(ParseModifierError::UnknownModifier("twice".to_owned()))
    );

    let err = attach(document.clone(), body, "submit.prevent", EventOptions::default())
        .expect_err("unsupported event");
    assert!(matches!(
        err,
        AttachError::Parse(ParseModifierError::UnsupportedEvent(_))
    ));
    assert_eq!(document.listen_calls(), 0);
}

#[test]
fn attach_surfaces_listener_failures() {
    let document = TestDocument::new();
    document.fail_next_listen("no such node");

    let err = attach(
        document.clone(),
        document.body(),
        "click.outside",
        EventOptions::default(),
    )
    .expect_err("listen fails");

    assert!(matches!(err, AttachError::Activate(ModifierError::Listen(_))));
    assert_eq!(document.listener_count(), 0);
}
