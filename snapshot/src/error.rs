use thiserror::Error;

/// Errors surfaced by the runtime, its sinks, and configuration loading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The DOM sink could not find its target element.
    #[error("no element with id `{id}` in the host document")]
    MissingElement {
        /// Id that was looked up.
        id: String,
    },

    /// No global window or document is available.
    #[error("no global window or document")]
    NoDocument,

    /// A dispatch named a control that the current render does not contain.
    #[error("no control labelled `{label}` in the current render")]
    UnknownControl {
        /// Label that was looked up.
        label: String,
    },

    /// Dispatch or settle was called before the first render.
    #[error("component has not been mounted")]
    NotMounted,

    /// Renders kept queueing updates past the configured bound.
    #[error("updates still pending after {passes} re-renders")]
    RenderLoop {
        /// Number of commit passes performed before giving up.
        passes: usize,
    },

    /// Configuration could not be parsed or is out of range.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result alias used throughout the runtime.
pub type Result<T, E = Error> = std::result::Result<T, E>;
