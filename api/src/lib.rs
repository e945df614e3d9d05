use dioxus::prelude::*;
use types::{PageLoad, SiteLinks};

/// One page of registrations, fetched from the PHP API on the server. The
/// page size is fixed server side.
#[post("/api/registrations")]
pub async fn list_registrations(page: u32) -> ServerFnResult<PageLoad> {
    Ok(server::QR_API.list_page(page).await?)
}

#[post("/api/site-links")]
pub async fn site_links() -> ServerFnResult<SiteLinks> {
    Ok(server::site_links())
}
