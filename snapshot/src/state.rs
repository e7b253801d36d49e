use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

type QueuedUpdate = Box<dyn FnOnce()>;

/// FIFO of pending state updates shared by every setter of one runtime instance.
///
/// Nothing here touches a state cell until the scheduler drains the queue at its
/// commit point.
#[derive(Clone, Default)]
pub(crate) struct UpdateQueue {
    pending: Rc<RefCell<VecDeque<QueuedUpdate>>>,
}

impl UpdateQueue {
    pub(crate) fn push(&self, update: QueuedUpdate) {
        self.pending.borrow_mut().push_back(update);
    }

    pub(crate) fn len(&self) -> usize {
        self.pending.borrow().len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }

    /// Take every queued update, leaving the queue empty for the next pass
    pub(crate) fn take_all(&self) -> VecDeque<QueuedUpdate> {
        std::mem::take(&mut *self.pending.borrow_mut())
    }
}

impl fmt::Debug for UpdateQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateQueue")
            .field("pending", &self.len())
            .finish()
    }
}

/// Setter handed out by `Scope::use_state`.
///
/// Calls never change the value seen by the current render. They queue an update
/// that the runtime applies on its next commit.
pub struct SetState<T> {
    cell: Rc<RefCell<T>>,
    queue: UpdateQueue,
}

impl<T: 'static> SetState<T> {
    pub(crate) fn new(cell: Rc<RefCell<T>>, queue: UpdateQueue) -> Self {
        Self { cell, queue }
    }

    /// Queue a function of the previous committed value
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&T) -> T + 'static,
    {
        let cell = self.cell.clone();
        self.queue.push(Box::new(move || {
            let new_value = f(&cell.borrow());
            *cell.borrow_mut() = new_value;
        }));
    }

    /// Queue a replacement value
    pub fn set(&self, new_value: T) {
        self.update(move |_| new_value);
    }

    /// True when both setters address the same state slot
    pub fn same_slot(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cell, &other.cell)
    }
}

impl<T> Clone for SetState<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
            queue: self.queue.clone(),
        }
    }
}

impl<T> fmt::Debug for SetState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SetState")
            .field("queue", &self.queue)
            .finish_non_exhaustive()
    }
}
