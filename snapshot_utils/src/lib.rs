#![allow(missing_docs)]

use std::sync::atomic::{AtomicUsize, Ordering};

// Process-wide counters for identities handed out by the runtime
static RUNTIME_INSTANCE_COUNTER: AtomicUsize = AtomicUsize::new(0);
static CALLBACK_COUNTER: AtomicUsize = AtomicUsize::new(0);
static RENDER_COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn next_instance_id() -> usize {
    RUNTIME_INSTANCE_COUNTER.fetch_add(1, Ordering::SeqCst)
}

pub fn next_callback_id() -> usize {
    CALLBACK_COUNTER.fetch_add(1, Ordering::SeqCst)
}

pub fn next_render_id() -> usize {
    RENDER_COUNTER.fetch_add(1, Ordering::SeqCst)
}

pub fn get_callback_counter() -> usize {
    CALLBACK_COUNTER.load(Ordering::SeqCst)
}

pub fn get_render_counter() -> usize {
    RENDER_COUNTER.load(Ordering::SeqCst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_increasing() {
        let first = next_callback_id();
        let second = next_callback_id();
        assert!(second > first);
        assert!(get_callback_counter() > second);

        let render = next_render_id();
        assert!(get_render_counter() > render);

        assert_ne!(next_instance_id(), next_instance_id());
    }
}
