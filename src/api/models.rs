use serde::{Deserialize, Serialize};

use crate::locale::Locale;
use crate::seo::{ContentType, SeoOverrides, SeoRequest};

/// Query parameters for `GET /api/seo`. Override fields ride along as plain
/// query params and win over whatever resolution produces.
#[derive(Debug, Deserialize)]
pub struct SeoParams {
    pub content_type: Option<ContentType>,
    pub slug: Option<String>,
    #[serde(default)]
    pub locale: Locale,
    pub fallback: Option<String>,

    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub og_image: Option<String>,
    pub og_image_alt: Option<String>,
}

impl SeoParams {
    pub fn into_request(self) -> SeoRequest {
        SeoRequest {
            content_type: self.content_type,
            slug: self.slug,
            locale: self.locale,
            fallback_page: self.fallback,
            overrides: SeoOverrides {
                title: self.title,
                description: self.description,
                keywords: self.keywords,
                og_image: self.og_image,
                og_image_alt: self.og_image_alt,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AirportQuery {
    pub q: String,
    #[serde(default = "default_airport_limit")]
    pub limit: usize,
}

fn default_airport_limit() -> usize {
    10
}

#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    pub q: String,
    #[serde(default)]
    pub locale: Locale,
}

#[derive(Debug, Deserialize)]
pub struct LangQuery {
    #[serde(default)]
    pub lang: Locale,
}

#[derive(Debug, Serialize)]
pub struct FlightUrlResponse {
    pub url: String,
}

/// Body of a 422 from the flight URL endpoint: the precise reason for logs
/// plus the locale-appropriate inline message the form shows.
#[derive(Debug, Serialize)]
pub struct ValidationMessage {
    pub error: String,
    pub message: String,
}
