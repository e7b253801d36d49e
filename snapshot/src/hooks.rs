use std::any::{Any, type_name};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::trace;

use crate::error::Result;
use crate::helpers::Callback;
use crate::sink::Sink;
use crate::state::{SetState, UpdateQueue};

/// When a memoized hook recomputes its value
///
/// This is the dependency list of a memo or callback hook, spelled out. Pick
/// [`Deps::every_render`] to get a fresh closure each render that always sees the
/// current values. Pick [`Deps::none`] to create it once and keep whatever it
/// captured on the first render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deps<D> {
    /// Recompute on every render
    EveryRender,
    /// Recompute when the value differs from the previous render's
    On(D),
}

impl<D: PartialEq> Deps<D> {
    /// Recompute whenever `value` changes between renders
    pub fn on(value: D) -> Self {
        Deps::On(value)
    }

    fn changed_since(&self, previous: &Self) -> bool {
        match (previous, self) {
            (Deps::On(before), Deps::On(now)) => before != now,
            _ => true,
        }
    }
}

impl Deps<()> {
    /// Empty dependency list: compute once, reuse forever
    pub fn none() -> Self {
        Deps::On(())
    }

    /// No dependency list at all: recompute every render
    pub fn every_render() -> Self {
        Deps::EveryRender
    }
}

struct StateHook<T> {
    cell: Rc<RefCell<T>>,
}

struct MemoHook<D, T> {
    deps: Deps<D>,
    value: T,
}

/// Per-instance hook storage handed to `Component::render`
///
/// Hooks are addressed by call order. A component must call the same hooks in
/// the same order on every render.
pub struct Scope {
    slots: Vec<Box<dyn Any>>,
    cursor: usize,
    renders: usize,
    queue: UpdateQueue,
    sink: Rc<dyn Sink>,
}

impl Scope {
    pub(crate) fn new(queue: UpdateQueue, sink: Rc<dyn Sink>) -> Self {
        Self {
            slots: Vec::new(),
            cursor: 0,
            renders: 0,
            queue,
            sink,
        }
    }

    pub(crate) fn begin_render(&mut self) {
        self.cursor = 0;
    }

    /// Panics when this render used fewer hooks than the first one
    pub(crate) fn finish_render(&mut self) {
        if self.cursor != self.slots.len() {
            panic!(
                "hook order changed: render used {} hooks, first render used {}",
                self.cursor,
                self.slots.len()
            );
        }
        self.renders += 1;
    }

    /// True while the first render is running
    pub fn is_first_render(&self) -> bool {
        self.renders == 0
    }

    /// Completed renders so far
    pub fn render_count(&self) -> usize {
        self.renders
    }

    /// Injected output capability
    pub fn sink(&self) -> Rc<dyn Sink> {
        Rc::clone(&self.sink)
    }

    /// Local state, initialised by `init` on the first render
    ///
    /// Returns a copy of the value committed before this render and a setter that
    /// queues updates. The copy never changes, even after the setter runs.
    pub fn use_state<T, F>(&mut self, init: F) -> (T, SetState<T>)
    where
        T: Clone + 'static,
        F: FnOnce() -> T,
    {
        let index = self.next_slot();
        if index == self.slots.len() {
            self.expect_first_render(index);
            trace!(slot = index, hook = type_name::<T>(), "creating state slot");
            self.slots.push(Box::new(StateHook {
                cell: Rc::new(RefCell::new(init())),
            }));
        }

        let cell = Rc::clone(&self.hook_mut::<StateHook<T>>(index).cell);
        let value = cell.borrow().clone();

        (value, SetState::new(cell, self.queue.clone()))
    }

    /// A value recomputed only when `deps` says so
    pub fn use_memo<D, T, F>(&mut self, deps: Deps<D>, compute: F) -> T
    where
        D: PartialEq + 'static,
        T: Clone + 'static,
        F: FnOnce() -> T,
    {
        let index = self.next_slot();
        if index == self.slots.len() {
            self.expect_first_render(index);
            trace!(slot = index, "memo miss: first render");
            let value = compute();
            self.slots.push(Box::new(MemoHook {
                deps,
                value: value.clone(),
            }));
            return value;
        }

        let hook = self.hook_mut::<MemoHook<D, T>>(index);
        if deps.changed_since(&hook.deps) {
            trace!(slot = index, "memo miss: dependencies changed");
            hook.value = compute();
            hook.deps = deps;
        } else {
            trace!(slot = index, "memo hit");
        }

        hook.value.clone()
    }

    /// A callback kept across renders until `deps` changes
    ///
    /// The handler passed in is built fresh on every render; it only replaces
    /// the stored one when the dependencies changed. With [`Deps::none`] the
    /// callback from the first render, and everything it captured, is kept.
    pub fn use_callback<D, F>(&mut self, deps: Deps<D>, handler: F) -> Callback
    where
        D: PartialEq + 'static,
        F: Fn() -> Result<()> + 'static,
    {
        self.use_memo(deps, move || Callback::new(handler))
    }

    fn next_slot(&mut self) -> usize {
        let index = self.cursor;
        self.cursor += 1;
        index
    }

    /// Slots can only be created while the first render runs
    fn expect_first_render(&self, index: usize) {
        if !self.is_first_render() {
            panic!(
                "hook order changed: render used hook slot {index}, first render used {}",
                self.slots.len()
            );
        }
    }

    fn hook_mut<H: 'static>(&mut self, index: usize) -> &mut H {
        match self.slots[index].downcast_mut::<H>() {
            Some(hook) => hook,
            None => panic!(
                "hook order changed: slot {index} does not hold a {}",
                type_name::<H>()
            ),
        }
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("slots", &self.slots.len())
            .field("renders", &self.renders)
            .field("queue", &self.queue)
            .finish_non_exhaustive()
    }
}
