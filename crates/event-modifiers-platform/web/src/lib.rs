//! Web platform adapter for event modifiers.
//!
//! [`WebEnvironment`] registers listeners with `addEventListener` on DOM
//! elements or on the window's document, and removes them again when the
//! returned subscription is released.

use event_modifiers_core::{
    ElementRef, Environment, EventHandler, ListenError, ListenTarget, RawEvent,
    SubscriptionHandle,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, Node};

/// Browser DOM environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebEnvironment;

impl WebEnvironment {
    pub fn new() -> Self {
        Self
    }
}

impl Environment for WebEnvironment {
    type Node = EventTarget;
    type Element = WebElement;
    type Event = WebEvent;

    fn listen(
        &self,
        target: ListenTarget<'_, WebElement>,
        event_name: &str,
        handler: EventHandler<WebEvent>,
    ) -> Result<SubscriptionHandle, ListenError> {
        let target: EventTarget = match target {
            ListenTarget::Element(element) => element.0.clone().unchecked_into(),
            ListenTarget::Document => web_sys::window()
                .and_then(|window| window.document())
                .ok_or_else(|| ListenError::new(event_name, "no document available"))?
                .unchecked_into(),
        };

        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            handler(&WebEvent(event));
        });
        target
            .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())
            .map_err(|err| ListenError::new(event_name, format!("{err:?}")))?;

        let event_name = event_name.to_owned();
        Ok(SubscriptionHandle::new(move || {
            if let Err(err) = target
                .remove_event_listener_with_callback(&event_name, closure.as_ref().unchecked_ref())
            {
                log::warn!("failed to remove `{event_name}` listener: {err:?}");
            }
            drop(closure);
        }))
    }
}

/// DOM element a modifier is attached to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebElement(pub Element);

impl From<Element> for WebElement {
    fn from(element: Element) -> Self {
        Self(element)
    }
}

impl ElementRef for WebElement {
    type Node = EventTarget;

    fn is_node(&self, node: &EventTarget) -> bool {
        let own: &EventTarget = self.0.as_ref();
        own == node
    }

    fn contains_node(&self, node: &EventTarget) -> bool {
        node.dyn_ref::<Node>()
            .is_some_and(|node| self.0.contains(Some(node)))
    }
}

/// Browser event delivered to a modifier.
#[derive(Clone, Debug)]
pub struct WebEvent(pub web_sys::Event);

impl WebEvent {
    pub fn event(&self) -> &web_sys::Event {
        &self.0
    }
}

impl RawEvent for WebEvent {
    type Target = EventTarget;

    fn prevent_default(&self) {
        self.0.prevent_default();
    }

    fn stop_propagation(&self) {
        self.0.stop_propagation();
    }

    fn target(&self) -> Option<EventTarget> {
        self.0.target()
    }
}
