//! Small bridges to browser APIs that have no Dioxus equivalent.

use dioxus::document::eval;
use dioxus::prelude::*;
use types::Viewport;

/// Tracks whether the window is narrower than [`Viewport::BREAKPOINT_PX`].
///
/// Starts as [`Viewport::Wide`] (also what server rendering sees) and follows
/// the media query from then on.
pub fn use_viewport() -> Signal<Viewport> {
    let mut viewport = use_signal(Viewport::default);

    use_future(move || async move {
        let js = format!(
            r#"
            const query = window.matchMedia("(max-width: {}px)");
            dioxus.send(query.matches);
            query.addEventListener("change", (event) => dioxus.send(event.matches));
            await new Promise(() => {{}});
            "#,
            Viewport::BREAKPOINT_PX - 1
        );
        let mut watcher = eval(&js);

        while let Ok(narrow) = watcher.recv::<bool>().await {
            let next = Viewport::from_narrow(narrow);
            if *viewport.peek() != next {
                viewport.set(next);
            }
        }
    });

    viewport
}

pub fn scroll_to_top() {
    let _ = eval("window.scrollTo({ top: 0, behavior: 'smooth' });");
}
