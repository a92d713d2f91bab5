//! Declarative document-head management.
//!
//! A [`HeadModel`] holds the head's current tag set; applying a resolved
//! [`SeoEntry`] reconciles the desired tags into it (find by selector, then
//! set, never duplicate). All imperative HTML reading/writing stays in this
//! adapter: `parse` ingests an existing document, `render` emits the head.

use scraper::{Html, Selector};

use crate::locale::Locale;
use crate::seo::SeoEntry;

/// Identity of a meta tag, i.e. the selector it is found by:
/// `meta[name="..."]` or `meta[property="..."]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MetaKey {
    Name(String),
    Property(String),
}

impl MetaKey {
    pub fn name(key: impl Into<String>) -> Self {
        MetaKey::Name(key.into())
    }

    pub fn property(key: impl Into<String>) -> Self {
        MetaKey::Property(key.into())
    }

    fn attr(&self) -> &'static str {
        match self {
            MetaKey::Name(_) => "name",
            MetaKey::Property(_) => "property",
        }
    }

    fn key(&self) -> &str {
        match self {
            MetaKey::Name(key) | MetaKey::Property(key) => key,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub key: MetaKey,
    pub content: String,
}

/// The document head as a tag set: one title, at most one meta per selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadModel {
    title: Option<String>,
    metas: Vec<MetaTag>,
}

impl HeadModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest an existing document's head. Later duplicates of a selector
    /// collapse onto the first occurrence, so the model is clean even if the
    /// markup was not.
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);
        let title_selector = Selector::parse("title").unwrap();
        let meta_selector = Selector::parse("meta").unwrap();

        let mut model = Self::new();

        if let Some(title) = document.select(&title_selector).next() {
            let text = title.text().collect::<String>().trim().to_string();
            if !text.is_empty() {
                model.title = Some(text);
            }
        }

        for element in document.select(&meta_selector) {
            let key = if let Some(name) = element.value().attr("name") {
                MetaKey::name(name)
            } else if let Some(property) = element.value().attr("property") {
                MetaKey::property(property)
            } else {
                continue;
            };
            let content = element.value().attr("content").unwrap_or("");
            model.upsert(key, content);
        }

        model
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn get(&self, key: &MetaKey) -> Option<&str> {
        self.metas
            .iter()
            .find(|tag| &tag.key == key)
            .map(|tag| tag.content.as_str())
    }

    /// Tags matching the selector. Idempotency means this is never above 1.
    pub fn count(&self, key: &MetaKey) -> usize {
        self.metas.iter().filter(|tag| &tag.key == key).count()
    }

    /// Find the tag by its selector and set its content, creating it if
    /// absent. Empty content is a no-op: a tag with nothing to say must not
    /// be created at all.
    pub fn upsert(&mut self, key: MetaKey, content: impl Into<String>) {
        let content = content.into();
        if content.is_empty() {
            return;
        }
        if let Some(tag) = self.metas.iter_mut().find(|tag| tag.key == key) {
            tag.content = content;
        } else {
            self.metas.push(MetaTag { key, content });
        }
    }

    /// Reconcile a resolved SEO entry into the head. Safe to call repeatedly
    /// with the same entry: tags are keyed by selector, never appended blind.
    pub fn apply(&mut self, entry: &SeoEntry, locale: Locale) {
        self.set_title(&entry.title);

        self.upsert(MetaKey::name("description"), &entry.description);
        self.upsert(MetaKey::name("keywords"), &entry.keywords);

        self.upsert(MetaKey::property("og:title"), &entry.title);
        self.upsert(MetaKey::property("og:description"), &entry.description);
        self.upsert(MetaKey::property("og:locale"), locale.og_locale());

        if let Some(og_image) = entry.og_image.as_deref().filter(|url| !url.is_empty()) {
            self.upsert(MetaKey::property("og:image"), og_image);
            self.upsert(
                MetaKey::property("og:image:alt"),
                entry.og_image_alt.as_deref().unwrap_or(&entry.title),
            );
            self.upsert(MetaKey::name("twitter:image"), og_image);
        }

        self.upsert(MetaKey::name("twitter:title"), &entry.title);
        self.upsert(MetaKey::name("twitter:description"), &entry.description);
    }

    /// Emit the head's inner HTML.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("<meta charset=\"utf-8\"/>\n");
        if let Some(title) = &self.title {
            out.push_str(&format!("<title>{}</title>\n", escape_text(title)));
        }
        for tag in &self.metas {
            out.push_str(&format!(
                "<meta {}=\"{}\" content=\"{}\"/>\n",
                tag.key.attr(),
                escape_attr(tag.key.key()),
                escape_attr(&tag.content)
            ));
        }
        out
    }
}

/// Full page shell: html root carries the locale's lang/dir, head comes from
/// the model, body is slotted in untouched.
pub fn render_page(head: &HeadModel, body: &str, locale: Locale) -> String {
    format!(
        "<!doctype html>\n<html lang=\"{}\" dir=\"{}\">\n<head>\n{}</head>\n<body>\n{}\n</body>\n</html>\n",
        locale.strapi_code(),
        locale.text_direction(),
        head.render(),
        body
    )
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn escape_attr(text: &str) -> String {
    escape_text(text).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> SeoEntry {
        SeoEntry {
            title: "Tours & Offers | QuickAir".into(),
            description: "Browse tours.".into(),
            keywords: "tours, offers".into(),
            og_image: Some("/img/seo/tours-og.jpg".into()),
            og_image_alt: Some("Tours collage".into()),
        }
    }

    #[test]
    fn test_apply_sets_all_tags() {
        let mut head = HeadModel::new();
        head.apply(&entry(), Locale::En);

        assert_eq!(head.title(), Some("Tours & Offers | QuickAir"));
        assert_eq!(head.get(&MetaKey::name("description")), Some("Browse tours."));
        assert_eq!(head.get(&MetaKey::property("og:locale")), Some("en_US"));
        assert_eq!(
            head.get(&MetaKey::property("og:image")),
            Some("/img/seo/tours-og.jpg")
        );
        assert_eq!(
            head.get(&MetaKey::name("twitter:image")),
            Some("/img/seo/tours-og.jpg")
        );
    }

    #[test]
    fn test_arabic_og_locale() {
        let mut head = HeadModel::new();
        head.apply(&entry(), Locale::Ar);
        assert_eq!(head.get(&MetaKey::property("og:locale")), Some("ar_SA"));
    }

    #[test]
    fn test_apply_is_idempotent() {
        let mut head = HeadModel::new();
        head.apply(&entry(), Locale::En);
        head.apply(&entry(), Locale::En);

        for key in [
            MetaKey::name("description"),
            MetaKey::name("keywords"),
            MetaKey::property("og:title"),
            MetaKey::property("og:description"),
            MetaKey::property("og:locale"),
            MetaKey::property("og:image"),
            MetaKey::property("og:image:alt"),
            MetaKey::name("twitter:title"),
            MetaKey::name("twitter:description"),
            MetaKey::name("twitter:image"),
        ] {
            assert_eq!(head.count(&key), 1, "duplicate tag for {key:?}");
        }
    }

    #[test]
    fn test_no_image_tags_without_image() {
        let mut head = HeadModel::new();
        let mut bare = entry();
        bare.og_image = None;
        head.apply(&bare, Locale::En);

        assert_eq!(head.count(&MetaKey::property("og:image")), 0);
        assert_eq!(head.count(&MetaKey::property("og:image:alt")), 0);
        assert_eq!(head.count(&MetaKey::name("twitter:image")), 0);

        // an empty string counts as absent too
        bare.og_image = Some(String::new());
        head.apply(&bare, Locale::En);
        assert_eq!(head.count(&MetaKey::property("og:image")), 0);
    }

    #[test]
    fn test_upsert_skips_empty_content() {
        let mut head = HeadModel::new();
        head.upsert(MetaKey::name("description"), "");
        assert_eq!(head.count(&MetaKey::name("description")), 0);
    }

    #[test]
    fn test_parse_then_apply_keeps_single_tags() {
        let mut head = HeadModel::new();
        head.apply(&entry(), Locale::En);
        let html = render_page(&head, "<div id=\"app\"></div>", Locale::En);

        // re-ingest the rendered page and apply again: still one per selector
        let mut reparsed = HeadModel::parse(&html);
        reparsed.apply(&entry(), Locale::En);
        assert_eq!(reparsed, head);
    }

    #[test]
    fn test_render_escapes_content() {
        let mut head = HeadModel::new();
        head.upsert(MetaKey::name("description"), "Sun, sea & \"sand\"");
        let html = head.render();
        assert!(html.contains("Sun, sea &amp; &quot;sand&quot;"));
    }

    #[test]
    fn test_render_page_locale_attributes() {
        let head = HeadModel::new();
        let page = render_page(&head, "", Locale::Ar);
        assert!(page.contains("<html lang=\"ar\" dir=\"rtl\">"));
    }
}
