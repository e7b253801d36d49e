use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event};

use crate::html::{HANDLER_ATTRIBUTE, Html};
use crate::sink::DomSink;
use crate::{Component, Runtime, RuntimeConfig};

/// Mount into the root container and route clicks through one delegated listener
///
/// Only the container is patched; siblings such as the sink's host element
/// stay untouched.
pub(crate) fn hydrate<C: Component + 'static>(
    component: C,
    config: RuntimeConfig,
) -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or("No global window object")?;
    let document = window.document().ok_or("No document object")?;
    let root = root_container(&document, &config.root_element_id)?;

    let sink = Rc::new(DomSink::new(config.sink_element_id.clone()));
    let runtime = Rc::new(RefCell::new(Runtime::with_config(component, sink, config)));

    patch(&root, runtime.borrow_mut().mount());

    let target = root.clone();
    let listener = Closure::<dyn Fn(Event)>::new(move |event: Event| {
        let Some(index) = handler_index(&event) else {
            return;
        };

        let mut runtime = runtime.borrow_mut();

        // A listener has no caller to return to; the console is the host's error channel
        if let Err(err) = runtime.click_index(index) {
            web_sys::console::error_1(&err.to_string().into());
        }

        if let Some(tree) = runtime.html() {
            patch(&target, tree);
        }
    });

    root.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;
    listener.forget();

    Ok(())
}

/// The element with `id`, or a new `<div id=..>` appended to `<body>`
fn root_container(document: &Document, id: &str) -> Result<Element, JsValue> {
    if let Some(existing) = document.get_element_by_id(id) {
        return Ok(existing);
    }

    let body = document.body().ok_or("No body element")?;
    let container = document.create_element("div")?;
    container.set_id(id);
    body.append_child(&container)?;

    Ok(container)
}

fn patch(target: &Element, tree: &Html) {
    target.set_inner_html(&tree.to_html_with_handlers());
}

fn handler_index(event: &Event) -> Option<usize> {
    let element = event.target()?.dyn_into::<Element>().ok()?;
    let control = element
        .closest(&format!("[{HANDLER_ATTRIBUTE}]"))
        .ok()??;
    control.get_attribute(HANDLER_ATTRIBUTE)?.parse().ok()
}
