use dioxus::prelude::*;
use types::{Validation, format};

#[component]
pub fn ValidationBadge(validation: Validation) -> Element {
    let class = if validation.is_verified() {
        "badge badge-success"
    } else {
        "badge badge-warning"
    };

    rsx! {
        span { class, {validation.label()} }
    }
}

/// Expiry date as supplied by the server, flagged when `expired` is set.
#[component]
pub fn ExpiryDate(date: String, expired: bool) -> Element {
    let formatted = format::date(&date);

    rsx! {
        span { class: if expired { "expiry expiry-expired" } else { "expiry" },
            "{formatted}"
            if expired {
                " (Exp.)"
            }
        }
    }
}
