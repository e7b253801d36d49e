//! Output capabilities injected into components.
//!
//! A component never looks up host state on its own. Whatever it wants to show
//! outside its rendered tree goes through the [`Sink`] the runtime was built with.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::info;

use crate::error::Result;

/// Somewhere a component can write text outside its own tree.
pub trait Sink {
    /// Replace the sink's content with `text`
    fn write(&self, text: &str) -> Result<()>;
}

impl<S: Sink + ?Sized> Sink for Rc<S> {
    fn write(&self, text: &str) -> Result<()> {
        (**self).write(text)
    }
}

/// Records every write, newest last.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    writes: Rc<RefCell<Vec<String>>>,
}

impl MemorySink {
    /// An empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent write, which is what a host element would display
    pub fn last(&self) -> Option<String> {
        self.writes.borrow().last().cloned()
    }

    /// Every write so far, oldest first
    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }

    /// Forget recorded writes
    pub fn clear(&self) {
        self.writes.borrow_mut().clear();
    }
}

impl Sink for MemorySink {
    fn write(&self, text: &str) -> Result<()> {
        self.writes.borrow_mut().push(text.to_owned());
        Ok(())
    }
}

/// Emits every write as a `tracing` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl Sink for TracingSink {
    fn write(&self, text: &str) -> Result<()> {
        info!(target: "snapshot::sink", text, "sink write");
        Ok(())
    }
}

/// Overwrites the inner HTML of a host element looked up by id on every write.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct DomSink {
    element_id: String,
}

#[cfg(target_arch = "wasm32")]
impl DomSink {
    /// Sink targeting the element with `element_id`
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Sink for DomSink {
    fn write(&self, text: &str) -> Result<()> {
        use crate::error::Error;

        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(Error::NoDocument)?;

        // The host page owns this element; its absence is the caller's problem
        let element = document
            .get_element_by_id(&self.element_id)
            .ok_or_else(|| Error::MissingElement {
                id: self.element_id.clone(),
            })?;

        element.set_inner_html(text);
        web_sys::console::log_1(&text.into());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_keeps_history() {
        let sink = MemorySink::new();
        assert_eq!(sink.last(), None);

        sink.write("one").unwrap();
        sink.write("two").unwrap();
        assert_eq!(sink.last().as_deref(), Some("two"));
        assert_eq!(sink.writes(), vec!["one".to_owned(), "two".to_owned()]);

        sink.clear();
        assert!(sink.writes().is_empty());
    }

    #[test]
    fn clones_share_history_through_dyn_handles() {
        let sink = MemorySink::new();
        let shared: Rc<dyn Sink> = Rc::new(sink.clone());

        shared.write("through rc").unwrap();
        assert_eq!(sink.last().as_deref(), Some("through rc"));
    }

    #[test]
    fn tracing_sink_accepts_writes() {
        assert!(TracingSink.write("logged").is_ok());
    }
}
