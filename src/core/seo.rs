//! Search engine metadata for the landing page.

use serde::Serialize;

pub const DEFAULT_SITE_URL: &str = "https://webly.ai";

pub const SITE_TITLE: &str = "Webly AI — создавайте сайты силой AI";

pub const SITE_DESCRIPTION: &str = "Превратите идею в готовый веб-сайт за минуты. Без кода, без сложностей — только чистая магия искусственного интеллекта.";

/// Canonical public URL of the site, provided as context by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteUrl(String);

impl SiteUrl {
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            Self::default()
        } else {
            Self(trimmed.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical URL of the page root, with trailing slash.
    pub fn canonical(&self) -> String {
        format!("{}/", self.0)
    }

    pub fn og_image(&self) -> String {
        format!("{}/og-image.png", self.0)
    }
}

impl Default for SiteUrl {
    fn default() -> Self {
        Self(DEFAULT_SITE_URL.to_string())
    }
}

#[derive(Serialize)]
struct SoftwareApplication<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    #[serde(rename = "applicationCategory")]
    application_category: &'static str,
    #[serde(rename = "operatingSystem")]
    operating_system: &'static str,
    description: &'static str,
    url: &'a str,
    offers: Offer,
}

#[derive(Serialize)]
struct Offer {
    #[serde(rename = "@type")]
    kind: &'static str,
    price: &'static str,
    #[serde(rename = "priceCurrency")]
    price_currency: &'static str,
}

/// JSON-LD `SoftwareApplication` record embedded in the page head.
pub fn structured_data(site: &SiteUrl) -> String {
    let record = SoftwareApplication {
        context: "https://schema.org",
        kind: "SoftwareApplication",
        name: "Webly AI",
        application_category: "DeveloperApplication",
        operating_system: "Web",
        description: SITE_DESCRIPTION,
        url: site.as_str(),
        offers: Offer {
            kind: "Offer",
            price: "0",
            price_currency: "RUB",
        },
    };
    serde_json::to_string(&record).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_url_trims_trailing_slash() {
        let site = SiteUrl::new("https://example.com/ ");
        assert_eq!(site.as_str(), "https://example.com");
        assert_eq!(site.canonical(), "https://example.com/");
        assert_eq!(site.og_image(), "https://example.com/og-image.png");
    }

    #[test]
    fn test_blank_site_url_falls_back_to_default() {
        assert_eq!(SiteUrl::new("  "), SiteUrl::default());
        assert_eq!(SiteUrl::default().as_str(), DEFAULT_SITE_URL);
    }

    #[test]
    fn test_structured_data() {
        let json = structured_data(&SiteUrl::new("https://example.com"));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["@type"], "SoftwareApplication");
        assert_eq!(value["url"], "https://example.com");
        assert_eq!(value["offers"]["price"], "0");
        assert_eq!(value["offers"]["priceCurrency"], "RUB");
    }
}
