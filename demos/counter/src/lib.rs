//! Counter demo: one piece of state, and two ways to log it.
//!
//! `Log` is rebuilt on every render and always reports the current count.
//! `Log (memoized)` is built on the first render with an empty dependency list
//! and keeps reporting the count it saw then.

#![allow(missing_docs)]

pub mod script;

use snapshot::prelude::*;

pub const INCREMENT: &str = "Increment";
pub const LOG: &str = "Log";
pub const MEMOIZED_LOG: &str = "Log (memoized)";
pub const INCREMENT_AND_LOG: &str = "Increment and log";

/// Write the count to the external output
pub fn log_count(sink: &dyn Sink, count: i32) -> snapshot::Result<()> {
    sink.write(&format!("Count from React: {count}"))
}

#[component]
pub fn app(cx: &mut Scope) -> Html {
    let (count, set_count) = cx.use_state(|| 0);
    let sink = cx.sink();

    // Empty dependency list: `count` stays whatever it was on the first render
    let memoized_log_count = cx.use_callback(Deps::none(), {
        let sink = sink.clone();
        move || log_count(sink.as_ref(), count)
    });

    let log = action!(sink => { log_count(sink.as_ref(), count) });

    let increment = action!(set_count => {
        set_count.update(|prev| prev + 1);
        Ok(())
    });

    // The update is only queued, so this logs the count of the current render
    let increment_and_log = action!(set_count, sink => {
        set_count.update(|prev| prev + 1);
        log_count(sink.as_ref(), count)
    });

    Html::element("div")
        .class("App")
        .child(
            Html::element("div")
                .style("display: inline-block; margin-right: 5px")
                .text(format!("Count is: {count}")),
        )
        .child(
            Html::element("button")
                .style("margin-right: 5px")
                .on_click(increment)
                .text(INCREMENT),
        )
        .child(Html::element("button").on_click(log).text(LOG))
        .child(
            Html::element("button")
                .on_click(memoized_log_count)
                .text(MEMOIZED_LOG),
        )
        .child(
            Html::element("button")
                .on_click(increment_and_log)
                .text(INCREMENT_AND_LOG),
        )
        .into()
}

/// Parse the displayed `Count is: N` back out of a rendered tree
pub fn displayed_count(html: &Html) -> Option<i32> {
    let text = html.text_content();
    let rest = text.strip_prefix("Count is: ")?;
    let digits: String = rest
        .chars()
        .take_while(|ch| ch.is_ascii_digit() || *ch == '-')
        .collect();
    digits.parse().ok()
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    snapshot::Snapshot::new().hydrate(App)
}
