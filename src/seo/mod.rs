use serde::{Deserialize, Serialize};

pub mod resolver;
pub mod strapi;
pub mod table;

pub use resolver::{SeoOverrides, SeoRequest, SeoSource, resolve};
pub use strapi::{StrapiClient, StrapiError};

/// Resolved SEO bundle applied to a page: the title/description/keyword/image
/// set, in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoEntry {
    pub title: String,
    pub description: String,
    pub keywords: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image_alt: Option<String>,
}

/// CMS collection types that carry an SEO component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Offer,
    Tour,
    Destination,
    Blog,
}

impl ContentType {
    /// Key the collection appears under in the GraphQL response data.
    pub fn collection_key(self) -> &'static str {
        match self {
            ContentType::Offer => "offers",
            ContentType::Tour => "tours",
            ContentType::Destination => "destinations",
            ContentType::Blog => "blogs",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "offer" => Some(ContentType::Offer),
            "tour" => Some(ContentType::Tour),
            "destination" => Some(ContentType::Destination),
            "blog" => Some(ContentType::Blog),
            _ => None,
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ContentType::Offer => "offer",
            ContentType::Tour => "tour",
            ContentType::Destination => "destination",
            ContentType::Blog => "blog",
        };
        f.write_str(label)
    }
}
