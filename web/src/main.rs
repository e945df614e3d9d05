use dioxus::prelude::*;

mod browser;
mod views;

use ui::Loading;
use views::{Dashboard, Registrations};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Dashboard {},
        #[route("/registrations")]
        Registrations {},
}

fn main() {
    #[cfg(feature = "server")]
    {
        server::init_tracing();
        server::init();
        dioxus::serve(|| async move { Ok(dioxus::server::router(App)) });
    }

    #[cfg(all(feature = "web", not(feature = "server")))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "QR Code RG" }
        document::Link { rel: "icon", href: asset!("/assets/favicon.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}

#[component]
fn NavLink(to: Route, children: Element) -> Element {
    let current_route: Route = use_route();
    let is_active = current_route == to;

    rsx! {
        Link {
            to,
            class: if is_active { "active" },
            {children}
        }
    }
}

/// Structured error information for display
#[derive(Clone, Debug, Default)]
pub struct ErrorInfo {
    pub message: String,
    pub chain: Vec<String>,
}

impl ErrorInfo {
    /// Parse a ServerFnError to extract structured error info
    pub fn from_server_error(err: &ServerFnError) -> Self {
        match err {
            ServerFnError::ServerError {
                message, details, ..
            } => {
                let chain = details
                    .as_ref()
                    .and_then(|d| d.get("chain"))
                    .and_then(|c| c.as_array())
                    .map(|arr| {
                        arr.iter()
                            .filter_map(|v| v.as_str().map(String::from))
                            .collect()
                    })
                    // "outer: inner: root" from the server's error chain
                    .unwrap_or_else(|| message.split(": ").map(String::from).collect());

                Self {
                    message: message.clone(),
                    chain,
                }
            }
            other => Self {
                message: other.to_string(),
                chain: vec![other.to_string()],
            },
        }
    }
}

/// Global error state - use `use_error()` to access
#[derive(Clone, Copy)]
pub struct ErrorState(Signal<Option<ErrorInfo>>);

impl ErrorState {
    pub fn set_server_error(&mut self, err: &ServerFnError) {
        self.0.set(Some(ErrorInfo::from_server_error(err)));
    }

    pub fn clear(&mut self) {
        self.0.set(None);
    }
}

/// Get the global error state for setting/clearing errors
pub fn use_error() -> ErrorState {
    use_context::<ErrorState>()
}

#[component]
fn ErrorBanner() -> Element {
    let mut error_state = use_context::<ErrorState>();
    let error = error_state.0.read();

    let Some(err) = error.as_ref() else {
        return rsx! {};
    };

    let has_chain = err.chain.len() > 1;

    rsx! {
        div { class: "error-banner",
            div { class: "error-banner-content",
                div { class: "error-banner-header",
                    span { class: "error-banner-message", "{err.message}" }
                    div { class: "error-banner-actions",
                        button {
                            class: "error-banner-close",
                            onclick: move |_| error_state.clear(),
                            "×"
                        }
                    }
                }
                if has_chain {
                    div { class: "error-details",
                        div { class: "error-chain",
                            h4 { class: "error-section-title", "Detalhes" }
                            ol { class: "error-chain-list",
                                for (i, msg) in err.chain.iter().enumerate() {
                                    li {
                                        key: "{i}",
                                        class: "error-chain-item",
                                        "{msg}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AppLayout() -> Element {
    let site = use_server_future(api::site_links)?;

    match &*site.read() {
        Some(Ok(links)) => {
            let links = links.clone();
            use_context_provider(|| links);
            use_context_provider(|| ErrorState(Signal::new(None)));

            rsx! {
                div { class: "app-layout",
                    aside { class: "sidebar",
                        div { class: "sidebar-header",
                            span { class: "sidebar-logo", "QR Code RG" }
                        }
                        nav { class: "sidebar-nav",
                            NavLink { to: Route::Dashboard {}, "Painel" }
                            NavLink { to: Route::Registrations {}, "Cadastros" }
                        }
                    }
                    main { class: "main-content",
                        ErrorBanner {}
                        Outlet::<Route> {}
                    }
                }
            }
        }
        Some(Err(e)) => {
            tracing::error!("failed to load site links: {e}");
            rsx! {
                div { class: "alert alert-error", "Não foi possível carregar a configuração: {e}" }
            }
        }
        None => {
            rsx! {
                Loading { message: "Carregando..." }
            }
        }
    }
}
