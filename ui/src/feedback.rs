use dioxus::prelude::*;

use crate::icons::{Spinner, UserIcon};

#[component]
pub fn Loading(#[props(into)] message: String) -> Element {
    rsx! {
        div { class: "loading",
            Spinner {}
            span { class: "loading-message", "{message}" }
        }
    }
}

#[component]
pub fn EmptyState(#[props(into)] title: String, #[props(into)] description: String) -> Element {
    rsx! {
        div { class: "empty-state",
            UserIcon { class: "icon-xl empty-state-icon" }
            h3 { class: "empty-state-title", "{title}" }
            p { class: "empty-state-desc", "{description}" }
        }
    }
}
