//! Inline SVG icons (24x24, stroke based).

use dioxus::prelude::*;

#[component]
fn Icon(#[props(default, into)] class: String, children: Element) -> Element {
    rsx! {
        svg {
            class: "icon {class}",
            width: "16",
            height: "16",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {children}
        }
    }
}

#[component]
pub fn UserIcon(#[props(default, into)] class: String) -> Element {
    rsx! {
        Icon { class,
            path { d: "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2" }
            circle { cx: "12", cy: "7", r: "4" }
        }
    }
}

#[component]
pub fn ChevronLeft() -> Element {
    rsx! {
        Icon { polyline { points: "15 18 9 12 15 6" } }
    }
}

#[component]
pub fn ChevronRight() -> Element {
    rsx! {
        Icon { polyline { points: "9 18 15 12 9 6" } }
    }
}

#[component]
pub fn ArrowLeft() -> Element {
    rsx! {
        Icon {
            line { x1: "19", y1: "12", x2: "5", y2: "12" }
            polyline { points: "12 19 5 12 12 5" }
        }
    }
}

#[component]
pub fn Refresh(#[props(default)] spinning: bool) -> Element {
    rsx! {
        Icon { class: if spinning { "spin" } else { "" },
            path { d: "M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8" }
            path { d: "M21 3v5h-5" }
            path { d: "M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16" }
            path { d: "M8 16H3v5" }
        }
    }
}

#[component]
pub fn Spinner() -> Element {
    rsx! {
        Icon { class: "spin icon-lg",
            path { d: "M21 12a9 9 0 1 1-6.219-8.56" }
        }
    }
}
