use dioxus::prelude::*;

use crate::icons::UserIcon;

/// Registration photo. Without a source a person placeholder is shown; an image
/// that fails to load is hidden, not replaced.
#[component]
pub fn Photo(#[props(!optional)] src: Option<String>, #[props(default)] large: bool) -> Element {
    let mut failed = use_signal(|| false);
    let mut prev_src = use_signal(|| src.clone());

    // A new source gets a fresh chance to load
    if *prev_src.read() != src {
        prev_src.set(src.clone());
        failed.set(false);
    }

    let class = if large { "photo photo-lg" } else { "photo" };

    match src {
        Some(src) => rsx! {
            img {
                class,
                src,
                alt: "Foto",
                style: if failed() { "display: none;" },
                onerror: move |_| failed.set(true),
            }
        },
        None => rsx! {
            div { class: "{class} photo-placeholder",
                UserIcon {}
            }
        },
    }
}
