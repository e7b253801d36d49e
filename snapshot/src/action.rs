/// Macro to create a [`Callback`](crate::Callback) that captures clones of the named values
///
/// The body runs on every activation and must evaluate to `snapshot::Result<()>`.
/// Plain `Copy` values used in the body (like a count read from `use_state`) are
/// captured as they are at the moment the macro runs.
///
/// Usage examples:
/// ```rust,ignore
/// // Auto-captures clones with the same name
/// let increment = action!(set_count => { set_count.update(|c| c + 1); Ok(()) });
///
/// // Multiple captures
/// let log = action!(set_count, sink => { sink.write("hi") });
///
/// // Custom variable names
/// let log = action!(sink as out => { out.write("hi") });
///
/// // Nothing to clone
/// let noop = action!(=> { Ok(()) });
/// ```
#[macro_export]
macro_rules! action {
    // Nothing to capture by clone
    (=> $body:block) => {
        $crate::Callback::new(move || $body)
    };

    // One or more captures, same names
    ($($captured:ident),+ => $body:block) => {
        {
            $(let $captured = $captured.clone();)+
            $crate::Callback::new(move || $body)
        }
    };

    // One or more captures with custom variable names
    ($($source:ident as $captured:ident),+ => $body:block) => {
        {
            $(let $captured = $source.clone();)+
            $crate::Callback::new(move || $body)
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::sink::{MemorySink, Sink};
    use std::rc::Rc;

    #[test]
    fn captures_clones_and_values() {
        let sink = Rc::new(MemorySink::new());
        let count = 3;

        let log = action!(sink => { sink.write(&format!("count {count}")) });
        let renamed = action!(sink as out => { out.write("renamed") });
        let noop = action!(=> { Ok(()) });

        log.call().unwrap();
        renamed.call().unwrap();
        noop.call().unwrap();

        assert_eq!(sink.writes(), vec!["count 3".to_owned(), "renamed".to_owned()]);
    }
}
