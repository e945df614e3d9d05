use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        div {
            div { class: "page-header",
                h1 { class: "page-title", "QR Code RG" }
                p { class: "page-subtitle", "Painel de cadastros do QR Code RG." }
            }
            div { class: "dashboard-grid",
                Link {
                    to: Route::Registrations {},
                    class: "dashboard-card",
                    h3 { class: "dashboard-card-title", "Todos os Cadastros" }
                    p { class: "dashboard-card-desc",
                        "Consulte os cadastros, o status de validação e o QR de cada registro."
                    }
                }
            }
        }
    }
}
