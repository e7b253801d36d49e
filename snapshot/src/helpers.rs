//! Shared callback handles.

use std::fmt;
use std::rc::Rc;

use snapshot_utils::next_callback_id;

use crate::error::Result;

type Handler = dyn Fn() -> Result<()>;

/// A shared event handler with a stable identity.
///
/// Every call to [`Callback::new`] yields a new id, so two callbacks compare equal
/// only when one is a clone of the other. Hooks that memoize callbacks hand back
/// the same instance across renders, which is observable through [`Callback::id`].
#[derive(Clone)]
pub struct Callback {
    id: usize,
    handler: Rc<Handler>,
}

impl Callback {
    /// Wrap a handler, capturing whatever it closes over right now
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn() -> Result<()> + 'static,
    {
        Self {
            id: next_callback_id(),
            handler: Rc::new(handler),
        }
    }

    /// Identity of this callback instance
    pub fn id(&self) -> usize {
        self.id
    }

    /// Invoke the handler
    pub fn call(&self) -> Result<()> {
        (self.handler)()
    }

    /// True when both handles point at the same callback instance
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback").field("id", &self.id).finish_non_exhaustive()
    }
}

/// Creates a callback that does nothing
pub fn noop_callback() -> Callback {
    Callback::new(|| Ok(()))
}
