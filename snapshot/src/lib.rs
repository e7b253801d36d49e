//! A small hook runtime for components that render to an owned HTML tree.
//!
//! State updates are queued and only become visible at the runtime's commit
//! point. Callbacks capture values at creation; memoized callbacks are kept
//! across renders according to an explicit dependency list ([`Deps`]).

pub mod prelude;

mod action;
mod config;
#[cfg(target_arch = "wasm32")]
mod dom;
mod error;
pub mod helpers;
mod hooks;
mod html;
mod runtime;
pub mod sink;
mod state;

pub use config::RuntimeConfig;
pub use error::{Error, Result};
pub use helpers::Callback;
pub use hooks::{Deps, Scope};
pub use html::{Element, HANDLER_ATTRIBUTE, Html};
pub use runtime::{Phase, Runtime};
pub use sink::Sink;
pub use snapshot_macro::component;
pub use state::SetState;

#[cfg(target_arch = "wasm32")]
pub use wasm_bindgen;
#[cfg(target_arch = "wasm32")]
pub use web_sys;

/// Trait that defines the view layer for components
///
/// `render` runs once per commit. Everything it reads from hooks is the
/// value committed before that render started.
pub trait Component {
    /// Render the component, calling hooks in a fixed order
    fn render(&self, cx: &mut Scope) -> Html;
}

/// Browser entry point for mounting a component into the page
#[derive(Debug, Default)]
pub struct Snapshot {
    config: RuntimeConfig,
}

impl Snapshot {
    /// Create a new application with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Mount `component` into the element named by `root_element_id` and wire up
    /// its click handlers
    ///
    /// The root is created under `<body>` when the page doesn't have one. Log
    /// output goes to the element named by `sink_element_id`.
    #[cfg(target_arch = "wasm32")]
    pub fn hydrate<C: Component + 'static>(
        self,
        component: C,
    ) -> std::result::Result<(), wasm_bindgen::JsValue> {
        dom::hydrate(component, self.config)
    }
}
