use quickair::head::{HeadModel, MetaKey, render_page};
use quickair::locale::Locale;
use quickair::seo::{
    ContentType, SeoEntry, SeoRequest, SeoSource, StrapiError, resolve, table,
};

/// CMS stub that always fails the way it is told to.
struct Failing(fn() -> StrapiError);

impl SeoSource for Failing {
    async fn fetch_seo(
        &self,
        _content_type: ContentType,
        _slug: &str,
        _locale: Locale,
    ) -> Result<SeoEntry, StrapiError> {
        Err((self.0)())
    }
}

/// CMS stub that always answers with the given entry.
struct Fixed(SeoEntry);

impl SeoSource for Fixed {
    async fn fetch_seo(
        &self,
        _content_type: ContentType,
        _slug: &str,
        _locale: Locale,
    ) -> Result<SeoEntry, StrapiError> {
        Ok(self.0.clone())
    }
}

fn cms_entry() -> SeoEntry {
    SeoEntry {
        title: "Luxor & Aswan Cruise | QuickAir".into(),
        description: "Five days between Luxor and Aswan.".into(),
        keywords: "luxor, aswan, nile".into(),
        og_image: Some("https://cms.quickair.com/uploads/cruise.jpg".into()),
        og_image_alt: Some("Cruise ship on the Nile".into()),
    }
}

#[tokio::test]
async fn fallback_is_the_exact_table_entry_for_every_failure_class() {
    let failures: Vec<fn() -> StrapiError> = vec![
        || StrapiError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR),
        || StrapiError::GraphQl("Cannot query field".into()),
        || StrapiError::NotFound {
            content_type: ContentType::Tour,
            slug: "nope".into(),
            locale: Locale::Ar,
        },
        || StrapiError::MissingSeo { content_type: ContentType::Tour, slug: "bare".into() },
    ];

    for failure in failures {
        for locale in [Locale::En, Locale::Ar] {
            let request = SeoRequest::for_content(ContentType::Tour, "nope", locale, "tour-single");
            let entry = resolve(&Failing(failure), &request).await;
            assert_eq!(&entry, table::page_seo("tour-single", locale).unwrap());
            assert!(!entry.title.is_empty());
            assert!(!entry.description.is_empty());
        }
    }
}

#[tokio::test]
async fn unknown_fallback_page_lands_on_the_default_entry() {
    let request = SeoRequest::for_content(
        ContentType::Offer,
        "ghost-offer",
        Locale::En,
        "no-such-page",
    );
    let entry = resolve(&Failing(|| StrapiError::GraphQl("down".into())), &request).await;
    assert_eq!(&entry, table::default_seo(Locale::En));
}

#[tokio::test]
async fn overrides_survive_resolution_verbatim() {
    // against a working CMS
    let mut request = SeoRequest::for_content(ContentType::Tour, "cruise", Locale::En, "tour-single");
    request.overrides.title = Some("Spring Sale".into());
    request.overrides.keywords = Some("sale".into());
    let entry = resolve(&Fixed(cms_entry()), &request).await;
    assert_eq!(entry.title, "Spring Sale");
    assert_eq!(entry.keywords, "sale");
    assert_eq!(entry.description, "Five days between Luxor and Aswan.");

    // and against a broken one
    let entry = resolve(&Failing(|| StrapiError::GraphQl("down".into())), &request).await;
    assert_eq!(entry.title, "Spring Sale");
    assert_eq!(entry.keywords, "sale");
    assert_eq!(
        entry.description,
        table::page_seo("tour-single", Locale::En).unwrap().description
    );
}

#[tokio::test]
async fn resolved_entry_renders_into_a_complete_head() {
    let request = SeoRequest::for_content(ContentType::Tour, "cruise", Locale::Ar, "tour-single");
    let entry = resolve(&Fixed(cms_entry()), &request).await;

    let mut head = HeadModel::new();
    head.apply(&entry, Locale::Ar);
    let html = render_page(&head, "<div id=\"app\"></div>", Locale::Ar);

    assert!(html.contains("<html lang=\"ar\" dir=\"rtl\">"));
    assert!(html.contains("<title>Luxor &amp; Aswan Cruise | QuickAir</title>"));
    assert!(html.contains("property=\"og:locale\" content=\"ar_SA\""));
    assert!(html.contains(
        "property=\"og:image\" content=\"https://cms.quickair.com/uploads/cruise.jpg\""
    ));

    // round-trip: a second application over the parsed page stays duplicate-free
    let mut reparsed = HeadModel::parse(&html);
    reparsed.apply(&entry, Locale::Ar);
    assert_eq!(reparsed.count(&MetaKey::property("og:image")), 1);
    assert_eq!(reparsed.count(&MetaKey::name("twitter:title")), 1);
}

#[tokio::test]
async fn fallback_entries_skip_image_tags_they_do_not_have() {
    let request = SeoRequest::for_page("dashboard", Locale::En);
    let mut entry = resolve(&Failing(|| StrapiError::GraphQl("unused".into())), &request).await;
    entry.og_image = None;

    let mut head = HeadModel::new();
    head.apply(&entry, Locale::En);
    assert_eq!(head.count(&MetaKey::property("og:image")), 0);
    assert_eq!(head.count(&MetaKey::name("twitter:image")), 0);
    assert_eq!(head.count(&MetaKey::name("description")), 1);
}
