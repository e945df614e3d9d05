use serde::{Deserialize, Serialize};
use url::Url;

/// Builds the outbound links of the listing: photos and the QR validation viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteLinks {
    validation_base: Url,
}

impl SiteLinks {
    pub fn new(mut validation_base: Url) -> Self {
        if !validation_base.path().ends_with('/') {
            let path = format!("{}/", validation_base.path());
            validation_base.set_path(&path);
        }
        validation_base.set_query(None);

        Self { validation_base }
    }

    pub fn validation_base(&self) -> &Url {
        &self.validation_base
    }

    /// `{validation_base}/{photo_path}`. The path is appended as-is.
    pub fn photo_url(&self, photo_path: &str) -> String {
        format!(
            "{}{}",
            self.validation_base,
            photo_path.trim_start_matches('/')
        )
    }

    /// Viewer link; the token is passed as both `token` and `ref`.
    pub fn viewer_url(&self, token: &str) -> Url {
        let mut url = self.validation_base.clone();
        url.query_pairs_mut()
            .append_pair("token", token)
            .append_pair("ref", token);
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links() -> SiteLinks {
        SiteLinks::new(Url::parse("https://qr.atito.com.br/qrvalidation").unwrap())
    }

    #[test]
    fn photo_is_joined_under_base() {
        assert_eq!(
            links().photo_url("uploads/photos/12.jpg"),
            "https://qr.atito.com.br/qrvalidation/uploads/photos/12.jpg"
        );
        assert_eq!(
            links().photo_url("/uploads/12.jpg"),
            "https://qr.atito.com.br/qrvalidation/uploads/12.jpg"
        );
    }

    #[test]
    fn viewer_repeats_token() {
        assert_eq!(
            links().viewer_url("9f8e7d").as_str(),
            "https://qr.atito.com.br/qrvalidation/?token=9f8e7d&ref=9f8e7d"
        );
    }

    #[test]
    fn trailing_slash_is_not_doubled() {
        let links = SiteLinks::new(Url::parse("https://example.com/qr/").unwrap());
        assert_eq!(links.validation_base().as_str(), "https://example.com/qr/");
        assert_eq!(links.photo_url("a.png"), "https://example.com/qr/a.png");
    }
}
