use std::rc::Rc;

use snapshot_utils::{next_instance_id, next_render_id};
use tracing::debug;

use crate::Component;
use crate::config::RuntimeConfig;
use crate::error::{Error, Result};
use crate::helpers::Callback;
use crate::hooks::Scope;
use crate::html::Html;
use crate::sink::Sink;
use crate::state::UpdateQueue;

/// Where a mounted instance is in its render/commit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The rendered tree reflects every committed update
    Idle,
    /// Updates are queued and the next `settle` will commit them
    UpdatePending,
}

/// Single-threaded scheduler owning one component instance
///
/// Events run handlers against the last rendered tree. Handlers queue state
/// updates; nothing they queue is visible until [`Runtime::settle`] commits the
/// queue and renders again.
#[derive(Debug)]
pub struct Runtime<C> {
    id: usize,
    component: C,
    scope: Scope,
    queue: UpdateQueue,
    config: RuntimeConfig,
    tree: Option<Html>,
    last_render_id: Option<usize>,
}

impl<C: Component> Runtime<C> {
    /// Runtime with default configuration
    pub fn new(component: C, sink: Rc<dyn Sink>) -> Self {
        Self::with_config(component, sink, RuntimeConfig::default())
    }

    /// Runtime with explicit configuration
    pub fn with_config(component: C, sink: Rc<dyn Sink>, config: RuntimeConfig) -> Self {
        let queue = UpdateQueue::default();
        Self {
            id: next_instance_id(),
            component,
            scope: Scope::new(queue.clone(), sink),
            queue,
            config,
            tree: None,
            last_render_id: None,
        }
    }

    /// First render. Later calls return the current tree without rendering.
    pub fn mount(&mut self) -> &Html {
        let tree = match self.tree.take() {
            Some(tree) => tree,
            None => {
                debug!(instance = self.id, "mounting component");
                self.render()
            }
        };
        self.tree.insert(tree)
    }

    /// Run the handler of the control labelled `label`
    ///
    /// Queued updates stay pending; the rendered tree is untouched.
    pub fn dispatch(&mut self, label: &str) -> Result<()> {
        let callback = self
            .tree
            .as_ref()
            .ok_or(Error::NotMounted)?
            .find_control(label)
            .ok_or_else(|| Error::UnknownControl {
                label: label.to_owned(),
            })?;

        debug!(instance = self.id, label, "dispatching click");
        callback.call()
    }

    /// Run the handler at `index` in document order of the current tree
    pub fn dispatch_index(&mut self, index: usize) -> Result<()> {
        let callback: Callback = self
            .tree
            .as_ref()
            .ok_or(Error::NotMounted)?
            .handlers()
            .into_iter()
            .nth(index)
            .ok_or_else(|| Error::UnknownControl {
                label: format!("#{index}"),
            })?;

        debug!(instance = self.id, index, "dispatching click");
        callback.call()
    }

    /// Commit point: apply queued updates in order, then render once
    ///
    /// Repeats while renders keep queueing updates, up to
    /// `config.max_rerenders` passes. Returns how many updates were applied.
    pub fn settle(&mut self) -> Result<usize> {
        if self.tree.is_none() {
            return Err(Error::NotMounted);
        }

        let mut applied = 0;
        let mut passes = 0;

        while !self.queue.is_empty() {
            if passes == self.config.max_rerenders {
                return Err(Error::RenderLoop { passes });
            }
            passes += 1;

            let updates = self.queue.take_all();
            let count = updates.len();
            for update in updates {
                update();
            }
            applied += count;

            let tree = self.render();
            self.tree = Some(tree);

            debug!(
                instance = self.id,
                applied = count,
                pass = passes,
                "committed queued updates"
            );
        }

        Ok(applied)
    }

    /// `dispatch` followed by `settle`
    ///
    /// Updates the handler queued are committed even when it fails; the
    /// handler's error is returned after the commit.
    pub fn click(&mut self, label: &str) -> Result<usize> {
        let dispatched = self.dispatch(label);
        let applied = self.settle()?;
        dispatched.map(|()| applied)
    }

    /// `dispatch_index` followed by `settle`, with the same error ordering as `click`
    pub fn click_index(&mut self, index: usize) -> Result<usize> {
        let dispatched = self.dispatch_index(index);
        let applied = self.settle()?;
        dispatched.map(|()| applied)
    }

    /// `UpdatePending` while anything is queued
    pub fn phase(&self) -> Phase {
        if self.queue.is_empty() {
            Phase::Idle
        } else {
            Phase::UpdatePending
        }
    }

    /// Last rendered tree, if mounted
    pub fn html(&self) -> Option<&Html> {
        self.tree.as_ref()
    }

    /// Completed renders of this instance
    pub fn render_count(&self) -> usize {
        self.scope.render_count()
    }

    /// Number of queued, uncommitted updates
    pub fn pending_updates(&self) -> usize {
        self.queue.len()
    }

    /// Process-wide id of the latest render, if any
    pub fn last_render_id(&self) -> Option<usize> {
        self.last_render_id
    }

    /// Active configuration
    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// The mounted component value
    pub fn component(&self) -> &C {
        &self.component
    }

    fn render(&mut self) -> Html {
        let render_id = next_render_id();
        self.scope.begin_render();
        let html = self.component.render(&mut self.scope);
        self.scope.finish_render();
        self.last_render_id = Some(render_id);
        html
    }
}
