//! Document-level `mousedown` listener that reports presses landing outside a
//! mounted element. The listener is installed once per component and removed
//! when the component unmounts.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

#[derive(Clone)]
pub struct OutsideClick {
    container: Rc<RefCell<Option<web_sys::Element>>>,
}

impl OutsideClick {
    /// Remember the element that counts as "inside".
    pub fn attach(&self, evt: &MountedEvent) {
        match evt.data().downcast::<web_sys::Element>() {
            Some(element) => *self.container.borrow_mut() = Some(element.clone()),
            None => tracing::debug!("mounted element is not a DOM element"),
        }
    }
}

struct Listener {
    document: web_sys::Document,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("mousedown", self.callback.as_ref().unchecked_ref());
    }
}

pub fn use_outside_click(on_outside: impl FnMut() + 'static) -> OutsideClick {
    let handle = use_hook(|| OutsideClick {
        container: Rc::new(RefCell::new(None)),
    });
    let listener = use_hook(|| Rc::new(RefCell::new(install(handle.container.clone(), on_outside))));
    use_drop(move || {
        listener.borrow_mut().take();
    });
    handle
}

fn install(
    container: Rc<RefCell<Option<web_sys::Element>>>,
    mut on_outside: impl FnMut() + 'static,
) -> Option<Listener> {
    let document = web_sys::window()?.document()?;
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        let target = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok());
        let inside = match (container.borrow().as_ref(), target.as_ref()) {
            (Some(element), Some(node)) => element.contains(Some(node)),
            _ => false,
        };
        if !inside {
            on_outside();
        }
    });
    if let Err(e) = document
        .add_event_listener_with_callback("mousedown", callback.as_ref().unchecked_ref())
    {
        tracing::warn!("could not install outside-click listener: {:?}", e);
        return None;
    }
    Some(Listener { document, callback })
}
