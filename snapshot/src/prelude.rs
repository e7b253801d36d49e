//! Everything a component module usually needs.

pub use crate::sink::{MemorySink, Sink, TracingSink};
pub use crate::{
    Callback, Component, Deps, Html, Result, Runtime, RuntimeConfig, Scope, SetState, action,
    component,
};

#[cfg(target_arch = "wasm32")]
pub use crate::sink::DomSink;
