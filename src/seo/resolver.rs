//! SEO resolution: CMS first, static table on any miss, caller overrides last.

use serde::Deserialize;

use crate::locale::Locale;
use crate::seo::strapi::{StrapiClient, StrapiError};
use crate::seo::table;
use crate::seo::{ContentType, SeoEntry};

/// Seam over the CMS fetch so resolution is testable without a network.
pub trait SeoSource: Send + Sync {
    fn fetch_seo(
        &self,
        content_type: ContentType,
        slug: &str,
        locale: Locale,
    ) -> impl Future<Output = Result<SeoEntry, StrapiError>> + Send;
}

impl SeoSource for StrapiClient {
    async fn fetch_seo(
        &self,
        content_type: ContentType,
        slug: &str,
        locale: Locale,
    ) -> Result<SeoEntry, StrapiError> {
        StrapiClient::fetch_seo(self, content_type, slug, locale).await
    }
}

/// Caller-supplied overrides: any field present here wins over whatever the
/// CMS or the static table produced.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeoOverrides {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub og_image: Option<String>,
    pub og_image_alt: Option<String>,
}

impl SeoOverrides {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.keywords.is_none()
            && self.og_image.is_none()
            && self.og_image_alt.is_none()
    }

    fn apply(&self, entry: &mut SeoEntry) {
        if let Some(title) = &self.title {
            entry.title = title.clone();
        }
        if let Some(description) = &self.description {
            entry.description = description.clone();
        }
        if let Some(keywords) = &self.keywords {
            entry.keywords = keywords.clone();
        }
        if let Some(og_image) = &self.og_image {
            entry.og_image = Some(og_image.clone());
        }
        if let Some(og_image_alt) = &self.og_image_alt {
            entry.og_image_alt = Some(og_image_alt.clone());
        }
    }
}

/// What a page asks for when it mounts. A derived value: callers re-resolve
/// whenever any of these inputs change.
#[derive(Debug, Clone, Default)]
pub struct SeoRequest {
    pub content_type: Option<ContentType>,
    pub slug: Option<String>,
    pub locale: Locale,
    /// Static-table key used when content-specific SEO cannot be obtained.
    pub fallback_page: Option<String>,
    pub overrides: SeoOverrides,
}

impl SeoRequest {
    pub fn for_page(page: &str, locale: Locale) -> Self {
        Self {
            fallback_page: Some(page.to_string()),
            locale,
            ..Self::default()
        }
    }

    pub fn for_content(
        content_type: ContentType,
        slug: &str,
        locale: Locale,
        fallback_page: &str,
    ) -> Self {
        Self {
            content_type: Some(content_type),
            slug: Some(slug.to_string()),
            locale,
            fallback_page: Some(fallback_page.to_string()),
            overrides: SeoOverrides::default(),
        }
    }
}

/// Resolve a page's SEO entry. Never fails: every CMS problem is logged and
/// downgraded to the static table, so a page always has metadata to render.
pub async fn resolve<S: SeoSource>(source: &S, request: &SeoRequest) -> SeoEntry {
    let mut entry = match (request.content_type, request.slug.as_deref()) {
        (Some(content_type), Some(slug)) if !slug.is_empty() => {
            match source.fetch_seo(content_type, slug, request.locale).await {
                Ok(entry) => entry,
                Err(err) => {
                    log::warn!(
                        "using fallback seo for {content_type}:{slug} ({} locale): {err}",
                        request.locale
                    );
                    table::fallback_seo(request.fallback_page.as_deref(), request.locale).clone()
                }
            }
        }
        // no content reference at all: skip the fetch entirely
        _ => match request.fallback_page.as_deref() {
            Some(page) => table::fallback_seo(Some(page), request.locale).clone(),
            None => table::default_seo(request.locale).clone(),
        },
    };

    request.overrides.apply(&mut entry);
    entry
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSource(fn() -> StrapiError);

    impl SeoSource for FailingSource {
        async fn fetch_seo(
            &self,
            _content_type: ContentType,
            _slug: &str,
            _locale: Locale,
        ) -> Result<SeoEntry, StrapiError> {
            Err((self.0)())
        }
    }

    struct FixedSource(SeoEntry);

    impl SeoSource for FixedSource {
        async fn fetch_seo(
            &self,
            _content_type: ContentType,
            _slug: &str,
            _locale: Locale,
        ) -> Result<SeoEntry, StrapiError> {
            Ok(self.0.clone())
        }
    }

    fn remote_entry() -> SeoEntry {
        SeoEntry {
            title: "Petra Day Trip | QuickAir".into(),
            description: "See the rose city in a day.".into(),
            keywords: "petra, jordan".into(),
            og_image: Some("https://cms.example.com/uploads/petra.jpg".into()),
            og_image_alt: Some("The Treasury".into()),
        }
    }

    #[tokio::test]
    async fn test_remote_hit_is_used_as_is() {
        let source = FixedSource(remote_entry());
        let request = SeoRequest::for_content(ContentType::Tour, "petra-day-trip", Locale::En, "tour-single");
        let entry = resolve(&source, &request).await;
        assert_eq!(entry, remote_entry());
    }

    #[tokio::test]
    async fn test_fetch_failure_falls_back_to_named_page() {
        let source = FailingSource(|| StrapiError::GraphQl("boom".into()));
        let request = SeoRequest::for_content(ContentType::Tour, "petra-day-trip", Locale::Ar, "tour-single");
        let entry = resolve(&source, &request).await;
        assert_eq!(&entry, table::page_seo("tour-single", Locale::Ar).unwrap());
    }

    #[tokio::test]
    async fn test_missing_reference_skips_fetch() {
        // a source that would panic if called proves the fetch is skipped
        struct PanicSource;
        impl SeoSource for PanicSource {
            async fn fetch_seo(
                &self,
                _content_type: ContentType,
                _slug: &str,
                _locale: Locale,
            ) -> Result<SeoEntry, StrapiError> {
                panic!("fetch must not run without a content reference");
            }
        }

        let request = SeoRequest::for_page("about", Locale::En);
        let entry = resolve(&PanicSource, &request).await;
        assert_eq!(&entry, table::page_seo("about", Locale::En).unwrap());

        let entry = resolve(&PanicSource, &SeoRequest::default()).await;
        assert_eq!(&entry, table::default_seo(Locale::En));
    }

    #[tokio::test]
    async fn test_overrides_win_over_everything() {
        let source = FixedSource(remote_entry());
        let mut request = SeoRequest::for_content(ContentType::Offer, "petra", Locale::En, "home");
        request.overrides.title = Some("Override Title".into());
        request.overrides.og_image = Some("/img/custom-og.jpg".into());

        let entry = resolve(&source, &request).await;
        assert_eq!(entry.title, "Override Title");
        assert_eq!(entry.og_image.as_deref(), Some("/img/custom-og.jpg"));
        // untouched fields survive from the fetched entry
        assert_eq!(entry.description, "See the rose city in a day.");
    }

    #[tokio::test]
    async fn test_every_failure_class_degrades_to_fallback() {
        let failures: Vec<fn() -> StrapiError> = vec![
            || StrapiError::Status(reqwest::StatusCode::BAD_GATEWAY),
            || StrapiError::GraphQl("bad query".into()),
            || StrapiError::NotFound {
                content_type: ContentType::Blog,
                slug: "gone".into(),
                locale: Locale::En,
            },
            || StrapiError::MissingSeo {
                content_type: ContentType::Blog,
                slug: "bare".into(),
            },
        ];

        for failure in failures {
            let source = FailingSource(failure);
            let request = SeoRequest::for_content(ContentType::Blog, "gone", Locale::En, "blog");
            let entry = resolve(&source, &request).await;
            assert_eq!(&entry, table::page_seo("blog", Locale::En).unwrap());
            assert!(!entry.title.is_empty());
            assert!(!entry.description.is_empty());
        }
    }
}
