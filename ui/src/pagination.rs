use dioxus::prelude::*;
use types::{
    Viewport,
    pagination::{has_next, has_previous, page_numbers},
};

use crate::icons::{ChevronLeft, ChevronRight};

/// Numbered page buttons with previous/next. Renders nothing for a single page.
///
/// `on_select` receives the requested page as-is; bounds are the caller's call.
#[component]
pub fn Pagination(
    current: u32,
    total_pages: u32,
    viewport: Viewport,
    on_select: EventHandler<u32>,
) -> Element {
    if total_pages <= 1 {
        return rsx! {};
    }

    let pages = page_numbers(current, total_pages, viewport);

    rsx! {
        nav { class: "pagination",
            button {
                class: "btn btn-outline btn-sm",
                title: "Página anterior",
                disabled: !has_previous(current),
                onclick: move |_| on_select.call(current.saturating_sub(1)),
                ChevronLeft {}
            }
            for page in pages {
                button {
                    key: "{page}",
                    class: if page == current { "btn btn-primary btn-sm pagination-page" } else { "btn btn-outline btn-sm pagination-page" },
                    onclick: move |_| on_select.call(page),
                    "{page}"
                }
            }
            button {
                class: "btn btn-outline btn-sm",
                title: "Próxima página",
                disabled: !has_next(current, total_pages),
                onclick: move |_| on_select.call(current + 1),
                ChevronRight {}
            }
        }
    }
}
