use eyre::{WrapErr, eyre};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::sync::LazyLock;
use types::{PageLoad, PageRequest, Result, listing::ListUsersResponse};

use crate::CONFIG;

pub static QR_API: LazyLock<QrApiClient> =
    LazyLock::new(|| QrApiClient::new(CONFIG.api_base.clone()));

trait ReqwestExt {
    async fn try_send<T: DeserializeOwned>(self) -> Result<T>;
}

impl ReqwestExt for RequestBuilder {
    async fn try_send<T: DeserializeOwned>(self) -> Result<T> {
        let response = self
            .send()
            .await
            .wrap_err("request failed")?
            .error_for_status()
            .wrap_err("unexpected status")?;
        let body = response.bytes().await.wrap_err("failed to read body")?;

        match serde_json::from_slice(&body) {
            Ok(r) => Ok(r),
            Err(error) => {
                let body = String::from_utf8_lossy(&body);
                tracing::debug!(?error, %body, "failed to parse response");
                Err(eyre!(error).wrap_err("response is not valid JSON").into())
            }
        }
    }
}

/// Client for the PHP registration API.
#[derive(Clone)]
pub struct QrApiClient {
    client: Client,
    base_url: Url,
}

impl QrApiClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn endpoint(&self, script: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| types::err!("{} cannot be a base URL", self.base_url))?
            .pop_if_empty()
            .push(script);
        Ok(url)
    }

    pub fn list_users_url(&self, request: PageRequest) -> Result<Url> {
        let mut url = self.endpoint("list_users.php")?;
        url.query_pairs_mut()
            .append_pair("limit", &request.limit.to_string())
            .append_pair("offset", &request.offset.to_string());
        Ok(url)
    }

    /// Fetch 1-based `page`, always [`types::PAGE_SIZE`] records at a time.
    pub async fn list_page(&self, page: u32) -> Result<PageLoad> {
        self.list_users(PageRequest::for_page(page)).await
    }

    /// Fetch one page. Transport and decoding problems are errors; a response
    /// without a usable page is [`PageLoad::Unavailable`].
    pub async fn list_users(&self, request: PageRequest) -> Result<PageLoad> {
        let url = self.list_users_url(request)?;
        tracing::debug!(%url, "listing registrations");

        let response: ListUsersResponse = self
            .client
            .get(url)
            .try_send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "list_users request failed"))?;

        let load = PageLoad::try_from(response)
            .wrap_err("list_users returned malformed records")
            .inspect_err(|e| tracing::error!(error = %e, "list_users decode failed"))?;

        match &load {
            PageLoad::Loaded { records, total } => {
                tracing::debug!(count = records.len(), total, "registrations loaded");
            }
            PageLoad::Unavailable => {
                tracing::warn!(?request, "list_users answered without a page");
            }
        }

        Ok(load)
    }
}
