use crate::browser::{scroll_to_top, use_viewport};
use crate::{Route, use_error};
use dioxus::prelude::*;
use types::{
    Listing, LoadTicket, PageLoad, Registration, SiteLinks, Viewport, format,
    pagination::{Navigation, navigate},
};
use ui::{
    EmptyState, ExpiryDate, Loading, Pagination, Photo, ValidationBadge,
    icons::{ArrowLeft, Refresh},
};

/// Every QR Code RG registration, twenty per page.
#[component]
pub fn Registrations() -> Element {
    let viewport = use_viewport();
    let mut error_state = use_error();
    let mut current_page = use_signal(|| 1u32);
    let mut refresh = use_signal(|| 0u64);
    let mut listing = use_signal(Listing::default);

    // Load on mount, on page change and on refresh. Nothing else is read here.
    use_effect(move || {
        let page = current_page();
        let nonce = refresh();
        let ticket = listing.write().begin(page);

        spawn(async move {
            let outcome = api::list_registrations(ticket.page()).await;
            if let Ok(PageLoad::Unavailable) = &outcome {
                tracing::warn!(page, "registration listing unavailable");
            }

            let settled = settle(&mut listing.write(), ticket, outcome);
            match settled {
                Settled::Loaded => error_state.clear(),
                Settled::Failed(e) => {
                    tracing::error!(page, "failed to load registrations: {e}");
                    error_state.set_server_error(&e);
                }
                Settled::Stale => {
                    tracing::debug!(page, nonce, "discarding stale registration page");
                }
            }
        });
    });

    let mut go_to_page = move |page: u32| {
        let total_pages = listing.peek().total_pages();
        let navigation = navigate(*current_page.peek(), page, total_pages);
        if let Navigation::Switch(page) = navigation {
            current_page.set(page);
        }
        if navigation.scrolls() {
            scroll_to_top();
        }
    };

    let state = listing.read();
    let loading = state.is_loading();
    let page = current_page();

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Todos os Cadastros - QR Code RG" }
                }
            }

            div { class: "toolbar",
                button {
                    class: "btn btn-outline btn-sm",
                    onclick: move |_| {
                        navigator().push(Route::Dashboard {});
                    },
                    ArrowLeft {}
                    " Voltar"
                }
                button {
                    class: "btn btn-outline btn-sm",
                    disabled: loading,
                    onclick: move |_| *refresh.write() += 1,
                    Refresh { spinning: loading }
                    " Atualizar"
                }
                span { class: "toolbar-count", {format::total_label(state.total())} }
            }

            div { class: "card",
                if loading {
                    Loading { message: "Carregando cadastros..." }
                } else if state.is_empty() {
                    EmptyState {
                        title: "Nenhum cadastro encontrado",
                        description: "Seus cadastros realizados aparecerão aqui",
                    }
                } else {
                    RegistrationList { records: state.records().to_vec(), viewport: viewport() }

                    Pagination {
                        current: page,
                        total_pages: state.total_pages(),
                        viewport: viewport(),
                        on_select: move |page| go_to_page(page),
                    }
                }
            }
        }
    }
}

/// How a finished load left the listing.
#[derive(Debug, PartialEq)]
enum Settled<E> {
    /// A newer load was issued meanwhile; nothing changed.
    Stale,
    Loaded,
    Failed(E),
}

fn settle<E>(
    listing: &mut Listing,
    ticket: LoadTicket,
    outcome: Result<PageLoad, E>,
) -> Settled<E> {
    if !listing.is_current(&ticket) {
        return Settled::Stale;
    }

    match outcome {
        Ok(load) => {
            listing.complete(ticket, load);
            Settled::Loaded
        }
        Err(e) => {
            listing.fail(ticket);
            Settled::Failed(e)
        }
    }
}

/// Cards on narrow screens, a table otherwise.
#[component]
fn RegistrationList(records: Vec<Registration>, viewport: Viewport) -> Element {
    if viewport.is_narrow() {
        rsx! {
            RegistrationCards { records }
        }
    } else {
        rsx! {
            RegistrationTable { records }
        }
    }
}

#[component]
fn RegistrationTable(records: Vec<Registration>) -> Element {
    let links = use_context::<SiteLinks>();

    rsx! {
        div { class: "table-container",
            table {
                thead {
                    tr {
                        th { class: "col-photo", "Foto" }
                        th { "Nome" }
                        th { "Documento" }
                        th { "Nascimento" }
                        th { "Pai" }
                        th { "Mãe" }
                        th { "Cadastro" }
                        th { "Validade" }
                        th { class: "text-center", "Status" }
                        th { class: "text-center", "Ações" }
                    }
                }
                tbody {
                    for reg in records {
                        tr { key: "{reg.id}",
                            td {
                                Photo { src: reg.photo_path().map(|p| links.photo_url(p)) }
                            }
                            td { class: "cell-name", "{reg.full_name}" }
                            td { class: "cell-mono", "{reg.document_number}" }
                            td { {format::date(&reg.birth_date)} }
                            td { {reg.parent1_or_dash()} }
                            td { {reg.parent2_or_dash()} }
                            td { {format::date_time(&reg.created_at)} }
                            td {
                                ExpiryDate { date: reg.expiry_date.clone(), expired: reg.is_expired }
                            }
                            td { class: "text-center",
                                ValidationBadge { validation: reg.validation }
                            }
                            td { class: "text-center",
                                ViewerLink { token: reg.token.clone(), label: "Visualizar" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RegistrationCards(records: Vec<Registration>) -> Element {
    let links = use_context::<SiteLinks>();

    rsx! {
        div { class: "registration-cards",
            for reg in records {
                div { key: "{reg.id}", class: "registration-card",
                    div { class: "registration-card-head",
                        Photo { src: reg.photo_path().map(|p| links.photo_url(p)), large: true }
                        div { class: "registration-card-identity",
                            div { class: "cell-name", "{reg.full_name}" }
                            div { class: "cell-mono text-muted", "{reg.document_number}" }
                            div { class: "text-muted", {format::date_time(&reg.created_at)} }
                        }
                        ValidationBadge { validation: reg.validation }
                    }
                    div { class: "registration-card-fields",
                        div {
                            span { class: "field-label", "Nasc: " }
                            {format::date(&reg.birth_date)}
                        }
                        div {
                            span { class: "field-label", "Validade: " }
                            ExpiryDate { date: reg.expiry_date.clone(), expired: reg.is_expired }
                        }
                        div {
                            span { class: "field-label", "Pai: " }
                            {reg.parent1_or_dash()}
                        }
                        div {
                            span { class: "field-label", "Mãe: " }
                            {reg.parent2_or_dash()}
                        }
                    }
                    ViewerLink { token: reg.token.clone(), label: "Visualizar QR" }
                }
            }
        }
    }
}

/// Opens the QR validation viewer for `token` in a new tab.
#[component]
fn ViewerLink(token: String, label: &'static str) -> Element {
    let links = use_context::<SiteLinks>();
    let href = links.viewer_url(&token).to_string();

    rsx! {
        a {
            class: "link",
            href,
            target: "_blank",
            rel: "noopener noreferrer",
            "{label}"
        }
    }
}
