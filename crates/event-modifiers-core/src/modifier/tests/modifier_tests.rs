use super::{
    AnyEventModifier, ClickOnce, ClickOutside, EventModifier, LifecycleState, ModifierError,
    ModifierKind, ParseModifierError, PreventDefault, SelfTarget, StopPropagation,
};
use crate::options::EventOptions;
use crate::test_support::{FakeElement, FakeEnv, FakeEvent, DOCUMENT};
use std::cell::Cell;
use std::rc::Rc;

const PANEL: u32 = 10;
const BUTTON: u32 = 11;
const ELSEWHERE: u32 = 20;

fn panel() -> FakeElement {
    FakeElement {
        id: PANEL,
        descendants: vec![BUTTON],
    }
}

fn counter<M: EventModifier>(modifier: &M) -> Rc<Cell<u32>> {
    let count = Rc::new(Cell::new(0));
    modifier.output().subscribe({
        let count = count.clone();
        move |_| count.set(count.get() + 1)
    });
    count
}

#[test]
fn stop_stops_propagation_without_options() {
    let env = FakeEnv::default();
    let mut modifier = StopPropagation::new(env.clone(), panel());
    modifier.activate().expect("activate");
    let emitted = counter(&modifier);

    let event = FakeEvent::targeting(BUTTON);
    env.deliver(&event);

    assert_eq!(event.stop_propagation_calls.get(), 1);
    assert_eq!(event.prevent_default_calls.get(), 0);
    assert_eq!(emitted.get(), 1);
}

#[test]
fn stop_with_stop_option_stops_twice() {
    let env = FakeEnv::default();
    let options = EventOptions::new().with_stop_propagation(true);
    let mut modifier = StopPropagation::with_options(env.clone(), panel(), options);
    modifier.activate().expect("activate");

    let event = FakeEvent::targeting(PANEL);
    env.deliver(&event);

    assert_eq!(event.stop_propagation_calls.get(), 2);
}

#[test]
fn prevent_prevents_default_and_applies_options() {
    let env = FakeEnv::default();
    let options = EventOptions::new().with_stop_propagation(true);
    let mut modifier = PreventDefault::with_options(env.clone(), panel(), options);
    modifier.activate().expect("activate");
    let emitted = counter(&modifier);

    let event = FakeEvent::targeting(PANEL);
    env.deliver(&event);

    assert_eq!(event.prevent_default_calls.get(), 1);
    assert_eq!(event.stop_propagation_calls.get(), 1);
    assert_eq!(emitted.get(), 1);
}

#[test]
fn self_target_filters_descendants_but_still_guards() {
    let env = FakeEnv::default();
    let options = EventOptions::new().with_prevent_default(true);
    let mut modifier = SelfTarget::with_options(env.clone(), panel(), options);
    modifier.activate().expect("activate");
    let emitted = counter(&modifier);

    let on_button = FakeEvent::targeting(BUTTON);
    env.deliver(&on_button);
    assert_eq!(emitted.get(), 0);
    assert_eq!(on_button.prevent_default_calls.get(), 1);

    let on_panel = FakeEvent::targeting(PANEL);
    env.deliver(&on_panel);
    assert_eq!(emitted.get(), 1);

    env.deliver(&FakeEvent::default());
    assert_eq!(emitted.get(), 1);
}

#[test]
fn once_emits_and_guards_only_first_event() {
    let env = FakeEnv::default();
    let options = EventOptions::new().with_prevent_default(true);
    let mut modifier = ClickOnce::with_options(env.clone(), panel(), options);
    modifier.activate().expect("activate");
    let emitted = counter(&modifier);

    let first = FakeEvent::targeting(PANEL);
    let second = FakeEvent::targeting(PANEL);
    env.deliver(&first);
    env.deliver(&second);
    env.deliver(&second);

    assert_eq!(emitted.get(), 1);
    assert_eq!(first.prevent_default_calls.get(), 1);
    assert_eq!(second.prevent_default_calls.get(), 0);
    assert!(modifier.is_active());
    assert_eq!(env.registered_on(), vec![PANEL]);
}

#[test]
fn outside_listens_on_document_and_checks_containment() {
    let env = FakeEnv::default();
    let mut modifier = ClickOutside::new(env.clone(), panel());
    modifier.activate().expect("activate");
    let emitted = counter(&modifier);
    assert_eq!(env.registered_on(), vec![DOCUMENT]);

    env.deliver(&FakeEvent::targeting(PANEL));
    env.deliver(&FakeEvent::targeting(BUTTON));
    assert_eq!(emitted.get(), 0);

    env.deliver(&FakeEvent::targeting(ELSEWHERE));
    env.deliver(&FakeEvent::targeting(DOCUMENT));
    env.deliver(&FakeEvent::default());
    assert_eq!(emitted.get(), 3);
}

#[test]
fn options_are_read_on_every_event() {
    let env = FakeEnv::default();
    let mut modifier = SelfTarget::new(env.clone(), panel());
    modifier.activate().expect("activate");

    let before = FakeEvent::targeting(PANEL);
    env.deliver(&before);
    modifier.set_event_options(EventOptions::new().with_prevent_default(true));
    let after = FakeEvent::targeting(PANEL);
    env.deliver(&after);

    assert_eq!(before.prevent_default_calls.get(), 0);
    assert_eq!(after.prevent_default_calls.get(), 1);
    assert_eq!(
        modifier.event_options(),
        EventOptions::new().with_prevent_default(true)
    );
}

#[test]
fn activation_registers_exactly_once() {
    let env = FakeEnv::default();
    let mut modifier = StopPropagation::new(env.clone(), panel());
    assert_eq!(modifier.state(), LifecycleState::Created);

    modifier.activate().expect("activate");
    assert_eq!(modifier.activate(), Err(ModifierError::AlreadyActive));

    assert_eq!(env.state.listen_calls.get(), 1);
    assert_eq!(env.registered_on().len(), 1);
}

#[test]
fn release_is_idempotent_and_terminal() {
    let env = FakeEnv::default();
    let mut modifier = SelfTarget::new(env.clone(), panel());
    modifier.activate().expect("activate");

    modifier.release();
    modifier.release();

    assert_eq!(modifier.state(), LifecycleState::Released);
    assert_eq!(env.state.releases.get(), 1);
    assert!(env.registered_on().is_empty());
    assert_eq!(modifier.activate(), Err(ModifierError::Released));
    assert_eq!(env.state.listen_calls.get(), 1);
}

#[test]
fn release_before_activation_prevents_activation() {
    let env = FakeEnv::default();
    let mut modifier = ClickOutside::new(env.clone(), panel());
    modifier.release();

    assert_eq!(modifier.activate(), Err(ModifierError::Released));
    assert_eq!(env.state.listen_calls.get(), 0);
}

#[test]
fn dropping_modifier_releases_listener() {
    let env = FakeEnv::default();
    let mut modifier = PreventDefault::new(env.clone(), panel());
    modifier.activate().expect("activate");
    assert_eq!(env.registered_on().len(), 1);

    drop(modifier);

    assert!(env.registered_on().is_empty());
    assert_eq!(env.state.releases.get(), 1);
}

#[test]
fn failed_activation_is_fatal() {
    let env = FakeEnv::default();
    *env.state.fail_with.borrow_mut() = Some("detached element".to_owned());
    let mut modifier = StopPropagation::new(env.clone(), panel());

    let err = modifier.activate().expect_err("activation must fail");
    assert!(matches!(err, ModifierError::Listen(ref listen) if listen.event_name == "click"));
    assert_eq!(modifier.state(), LifecycleState::Released);
    assert!(modifier.output().is_closed());

    assert_eq!(modifier.activate(), Err(ModifierError::Released));
    assert_eq!(env.state.listen_calls.get(), 1);
}

#[test]
fn deliveries_after_release_are_ignored_entirely() {
    let env = FakeEnv::default();
    let options = EventOptions::new().with_prevent_default(true);
    let mut modifier = SelfTarget::with_options(env.clone(), panel(), options);
    modifier.activate().expect("activate");
    let emitted = counter(&modifier);

    // Keep the raw handler alive to model a platform that still delivers.
    let handler = env.state.handlers.borrow()[0].1.clone();
    modifier.release();

    let late = FakeEvent::targeting(PANEL);
    handler(&late);

    assert_eq!(emitted.get(), 0);
    assert_eq!(late.prevent_default_calls.get(), 0);
}

#[test]
fn kinds_round_trip_through_names_and_attributes() {
    for kind in ModifierKind::ALL {
        assert_eq!(kind.name().parse::<ModifierKind>(), Ok(kind));
        assert_eq!(ModifierKind::from_attribute(&kind.attribute()), Ok(kind));
    }
    assert_eq!(ModifierKind::SelfTarget.attribute(), "click.self");
    assert!(ModifierKind::Outside.listens_on_document());
    assert!(!ModifierKind::Stop.listens_on_document());
}

#[test]
fn kind_parsing_rejects_unknown_input() {
    assert_eq!(
        "capture".parse::<ModifierKind>(),
        Err(ParseModifierError::UnknownModifier("capture".to_owned()))
    );
    assert_eq!(
        ModifierKind::from_attribute("keyup.enter"),
        Err(ParseModifierError::UnsupportedEvent("keyup".to_owned()))
    );
    assert_eq!(
        ModifierKind::from_attribute("click"),
        Err(ParseModifierError::MalformedAttribute("click".to_owned()))
    );
}

#[test]
fn bind_builds_the_requested_variant() {
    let env = FakeEnv::default();
    for kind in ModifierKind::ALL {
        let mut modifier = kind.bind(env.clone(), panel(), EventOptions::default());
        assert_eq!(modifier.kind(), kind);
        modifier.activate().expect("activate");
        assert!(modifier.is_active());
    }

    let outside = ModifierKind::Outside.bind(env.clone(), panel(), EventOptions::default());
    assert!(matches!(outside, AnyEventModifier::Outside(_)));
    // Every bound modifier above was dropped, releasing its listener.
    assert!(env.registered_on().is_empty());
}
