//! Strapi GraphQL client: SEO component fetches and location search.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;
use thiserror::Error;

use crate::config::CONFIG;
use crate::locale::Locale;
use crate::seo::{ContentType, SeoEntry};

const GET_OFFER_SEO: &str = r#"
  query GetOfferSEO($slug: String!, $locale: I18NLocaleCode!) {
    offers(filters: { slug: { eq: $slug } }, locale: $locale) {
      data {
        id
        attributes {
          title
          slug
          seo {
            metaTitle
            metaDescription
            keywords
            ogImage {
              data {
                attributes {
                  url
                  alternativeText
                }
              }
            }
            ogImageAlt
          }
        }
      }
    }
  }
"#;

const GET_TOUR_SEO: &str = r#"
  query GetTourSEO($slug: String!, $locale: I18NLocaleCode!) {
    tours(filters: { slug: { eq: $slug } }, locale: $locale) {
      data {
        id
        attributes {
          title
          slug
          seo {
            metaTitle
            metaDescription
            keywords
            ogImage {
              data {
                attributes {
                  url
                  alternativeText
                }
              }
            }
            ogImageAlt
          }
        }
      }
    }
  }
"#;

const GET_DESTINATION_SEO: &str = r#"
  query GetDestinationSEO($slug: String!, $locale: I18NLocaleCode!) {
    destinations(filters: { slug: { eq: $slug } }, locale: $locale) {
      data {
        id
        attributes {
          name
          slug
          seo {
            metaTitle
            metaDescription
            keywords
            ogImage {
              data {
                attributes {
                  url
                  alternativeText
                }
              }
            }
            ogImageAlt
          }
        }
      }
    }
  }
"#;

const GET_BLOG_SEO: &str = r#"
  query GetBlogSEO($slug: String!, $locale: I18NLocaleCode!) {
    blogs(filters: { slug: { eq: $slug } }, locale: $locale) {
      data {
        id
        attributes {
          title
          slug
          seo {
            metaTitle
            metaDescription
            keywords
            ogImage {
              data {
                attributes {
                  url
                  alternativeText
                }
              }
            }
            ogImageAlt
          }
        }
      }
    }
  }
"#;

// Location search ships the Strapi 5 flat shape (no data/attributes wrapper).
const SEARCH_LOCATIONS: &str = r#"
  query SearchLocations($locale: I18NLocaleCode, $filters: LocationFiltersInput, $pagination: PaginationArg) {
    locations(locale: $locale, filters: $filters, pagination: $pagination) {
      documentId
      name
      slug
      type
      country
      shortDescription
    }
  }
"#;

impl ContentType {
    fn seo_query(self) -> &'static str {
        match self {
            ContentType::Offer => GET_OFFER_SEO,
            ContentType::Tour => GET_TOUR_SEO,
            ContentType::Destination => GET_DESTINATION_SEO,
            ContentType::Blog => GET_BLOG_SEO,
        }
    }
}

#[derive(Debug, Error)]
pub enum StrapiError {
    #[error("strapi request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("strapi returned status {0}")]
    Status(StatusCode),

    #[error("graphql errors: {0}")]
    GraphQl(String),

    #[error("no {content_type} found with slug {slug} for locale {locale}")]
    NotFound {
        content_type: ContentType,
        slug: String,
        locale: Locale,
    },

    #[error("no seo component on {content_type} {slug}")]
    MissingSeo {
        content_type: ContentType,
        slug: String,
    },

    #[error("unexpected response shape: {0}")]
    BadResponse(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct GraphQlResponse {
    data: Option<serde_json::Value>,
    errors: Option<Vec<GraphQlErrorEntry>>,
}

#[derive(Deserialize)]
struct GraphQlErrorEntry {
    message: String,
}

#[derive(Deserialize)]
struct Collection {
    data: Vec<Item>,
}

#[derive(Deserialize)]
struct Item {
    attributes: Attributes,
}

#[derive(Deserialize)]
struct Attributes {
    title: Option<String>,
    name: Option<String>,
    seo: Option<SeoComponent>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeoComponent {
    meta_title: Option<String>,
    meta_description: Option<String>,
    keywords: Option<String>,
    og_image: Option<Media>,
    og_image_alt: Option<String>,
}

#[derive(Deserialize)]
struct Media {
    data: Option<MediaData>,
}

#[derive(Deserialize)]
struct MediaData {
    attributes: MediaAttributes,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MediaAttributes {
    url: String,
    alternative_text: Option<String>,
}

/// A CMS location row, as the search dropdown consumes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub document_id: Option<String>,
    pub name: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub location_type: Option<String>,
    pub country: Option<String>,
    pub short_description: Option<String>,
}

#[derive(Deserialize)]
struct LocationsData {
    locations: Vec<Location>,
}

pub struct StrapiClient {
    http: reqwest::Client,
    base_url: String,
}

impl StrapiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(CONFIG.strapi_url.clone())
    }

    fn endpoint(&self) -> String {
        format!("{}/graphql", self.base_url)
    }

    /// Execute a GraphQL query and hand back the `data` payload.
    async fn execute(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<serde_json::Value, StrapiError> {
        let response = self
            .http
            .post(self.endpoint())
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(StrapiError::Status(response.status()));
        }

        let body: GraphQlResponse = response.json().await?;

        if let Some(errors) = body.errors {
            let joined = errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(StrapiError::GraphQl(joined));
        }

        Ok(body.data.unwrap_or(serde_json::Value::Null))
    }

    /// Fetch a content item's SEO component by slug and locale.
    pub async fn fetch_seo(
        &self,
        content_type: ContentType,
        slug: &str,
        locale: Locale,
    ) -> Result<SeoEntry, StrapiError> {
        let data = self
            .execute(
                content_type.seo_query(),
                json!({ "slug": slug, "locale": locale.strapi_code() }),
            )
            .await?;

        let mut collections: HashMap<String, Collection> = serde_json::from_value(data)?;
        let items = collections
            .remove(content_type.collection_key())
            .map(|c| c.data)
            .unwrap_or_default();

        let Some(item) = items.into_iter().next() else {
            return Err(StrapiError::NotFound {
                content_type,
                slug: slug.to_string(),
                locale,
            });
        };

        let attributes = item.attributes;
        let Some(seo) = attributes.seo else {
            return Err(StrapiError::MissingSeo {
                content_type,
                slug: slug.to_string(),
            });
        };

        Ok(self.map_seo(seo, &attributes.title, &attributes.name))
    }

    /// Map the Strapi SEO component onto a [`SeoEntry`], falling back to the
    /// content's own title/name where the component leaves gaps.
    fn map_seo(
        &self,
        seo: SeoComponent,
        title: &Option<String>,
        name: &Option<String>,
    ) -> SeoEntry {
        let content_title = title.clone().or_else(|| name.clone());
        let image = seo.og_image.and_then(|media| media.data);

        let og_image = image
            .as_ref()
            .map(|data| self.absolutize(&data.attributes.url));
        let og_image_alt = seo
            .og_image_alt
            .or_else(|| image.and_then(|data| data.attributes.alternative_text))
            .or_else(|| content_title.clone());

        SeoEntry {
            title: seo.meta_title.or(content_title).unwrap_or_default(),
            description: seo.meta_description.unwrap_or_default(),
            keywords: seo.keywords.unwrap_or_default(),
            og_image,
            og_image_alt,
        }
    }

    /// Media URLs come back site-relative unless the CMS stores them on a CDN.
    fn absolutize(&self, url: &str) -> String {
        if url.starts_with("http") {
            url.to_string()
        } else {
            format!("{}{}", self.base_url, url)
        }
    }

    /// Case-insensitive location search over name/country/description.
    pub async fn search_locations(
        &self,
        query: &str,
        locale: Locale,
        limit: usize,
    ) -> Result<Vec<Location>, StrapiError> {
        let data = self
            .execute(
                SEARCH_LOCATIONS,
                json!({
                    "locale": locale.strapi_code(),
                    "filters": {
                        "or": [
                            { "name": { "containsi": query } },
                            { "country": { "containsi": query } },
                            { "shortDescription": { "containsi": query } },
                        ]
                    },
                    "pagination": { "limit": limit },
                }),
            )
            .await?;

        let locations: LocationsData = serde_json::from_value(data)?;
        Ok(locations.locations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> StrapiClient {
        StrapiClient::new("http://localhost:1337")
    }

    fn sample_response(collection: &str) -> serde_json::Value {
        json!({
            collection: {
                "data": [{
                    "id": "1",
                    "attributes": {
                        "title": "Nile Cruise Special",
                        "slug": "nile-cruise",
                        "seo": {
                            "metaTitle": "Nile Cruise | QuickAir",
                            "metaDescription": "Seven nights on the Nile.",
                            "keywords": "nile, cruise, egypt",
                            "ogImage": {
                                "data": {
                                    "attributes": {
                                        "url": "/uploads/nile.jpg",
                                        "alternativeText": "A felucca at sunset"
                                    }
                                }
                            },
                            "ogImageAlt": null
                        }
                    }
                }]
            }
        })
    }

    fn parse_entry(client: &StrapiClient, data: serde_json::Value) -> SeoEntry {
        let mut collections: HashMap<String, Collection> =
            serde_json::from_value(data).unwrap();
        let item = collections
            .remove("offers")
            .unwrap()
            .data
            .into_iter()
            .next()
            .unwrap();
        let attributes = item.attributes;
        let seo = attributes.seo.unwrap();
        client.map_seo(seo, &attributes.title, &attributes.name)
    }

    #[test]
    fn test_map_seo_full_component() {
        let entry = parse_entry(&client(), sample_response("offers"));
        assert_eq!(entry.title, "Nile Cruise | QuickAir");
        assert_eq!(entry.description, "Seven nights on the Nile.");
        assert_eq!(entry.keywords, "nile, cruise, egypt");
        // relative media URL gets absolutized against the CMS base
        assert_eq!(
            entry.og_image.as_deref(),
            Some("http://localhost:1337/uploads/nile.jpg")
        );
        // ogImageAlt missing -> image alternativeText wins
        assert_eq!(entry.og_image_alt.as_deref(), Some("A felucca at sunset"));
    }

    #[test]
    fn test_map_seo_falls_back_to_content_title() {
        let client = client();
        let seo = SeoComponent {
            meta_title: None,
            meta_description: None,
            keywords: None,
            og_image: None,
            og_image_alt: None,
        };
        let entry = client.map_seo(seo, &None, &Some("Red Sea Riviera".into()));
        assert_eq!(entry.title, "Red Sea Riviera");
        assert_eq!(entry.description, "");
        assert!(entry.og_image.is_none());
        // alt text chain bottoms out at the content name
        assert_eq!(entry.og_image_alt.as_deref(), Some("Red Sea Riviera"));
    }

    #[test]
    fn test_absolutize_keeps_full_urls() {
        let client = client();
        assert_eq!(
            client.absolutize("https://cdn.example.com/a.jpg"),
            "https://cdn.example.com/a.jpg"
        );
        assert_eq!(
            client.absolutize("/uploads/a.jpg"),
            "http://localhost:1337/uploads/a.jpg"
        );
    }

    #[test]
    fn test_graphql_error_body_parses() {
        let body: GraphQlResponse = serde_json::from_value(json!({
            "data": null,
            "errors": [{ "message": "locale not found" }]
        }))
        .unwrap();
        assert_eq!(body.errors.unwrap()[0].message, "locale not found");
    }
}
