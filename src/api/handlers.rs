use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
};
use std::sync::Arc;

use crate::airports::{self, Airport};
use crate::flight::FlightSearch;
use crate::head::{HeadModel, render_page};
use crate::locale::Locale;
use crate::search::LocationSearcher;
use crate::seo::strapi::Location;
use crate::seo::{self, ContentType, SeoEntry, SeoRequest, StrapiClient, table};

use super::models::{
    AirportQuery, FlightUrlResponse, LangQuery, LocationQuery, SeoParams, ValidationMessage,
};

#[derive(Clone)]
pub struct AppState {
    pub strapi: Arc<StrapiClient>,
    pub locations: Arc<LocationSearcher>,
}

impl AppState {
    pub fn new(strapi: Arc<StrapiClient>) -> Self {
        let locations = Arc::new(LocationSearcher::new(strapi.clone()));
        Self { strapi, locations }
    }
}

/// Resolve SEO metadata. Never an error response: resolution always degrades
/// to the static table, so every page has something to render.
pub async fn resolve_seo(
    State(state): State<AppState>,
    Query(params): Query<SeoParams>,
) -> Json<SeoEntry> {
    let request = params.into_request();
    Json(seo::resolve(state.strapi.as_ref(), &request).await)
}

/// Build the booking engine redirect URL from the posted form state.
pub async fn flight_url(
    Query(lang): Query<LangQuery>,
    Json(search): Json<FlightSearch>,
) -> Result<Json<FlightUrlResponse>, (StatusCode, Json<ValidationMessage>)> {
    match search.build_search_url() {
        Ok(url) => Ok(Json(FlightUrlResponse { url: url.into() })),
        Err(err) => {
            log::info!("flight search rejected: {err}");
            Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationMessage {
                    error: err.to_string(),
                    message: err.user_message(lang.lang).to_string(),
                }),
            ))
        }
    }
}

pub async fn airports_search(Query(query): Query<AirportQuery>) -> Json<Vec<Airport>> {
    let results = airports::search(&query.q, query.limit);
    Json(results.into_iter().copied().collect())
}

pub async fn locations_search(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> Json<Vec<Location>> {
    Json(state.locations.search(&query.q, query.locale).await)
}

pub async fn home(
    State(state): State<AppState>,
    Query(lang): Query<LangQuery>,
) -> Html<String> {
    let request = SeoRequest::for_page("home", lang.lang);
    let entry = seo::resolve(state.strapi.as_ref(), &request).await;
    render_shell(&entry, lang.lang)
}

/// Static page shell. Only keys the SEO table knows get a page.
pub async fn static_page(
    State(state): State<AppState>,
    Path(page): Path<String>,
    Query(lang): Query<LangQuery>,
) -> Result<Html<String>, StatusCode> {
    if table::page_seo(&page, lang.lang).is_none() {
        return Err(StatusCode::NOT_FOUND);
    }
    let request = SeoRequest::for_page(&page, lang.lang);
    let entry = seo::resolve(state.strapi.as_ref(), &request).await;
    Ok(render_shell(&entry, lang.lang))
}

/// CMS content page shell: resolve by content type and slug, fall back to
/// the section's static entry.
pub async fn content_page(
    State(state): State<AppState>,
    Path((section, slug)): Path<(String, String)>,
    Query(lang): Query<LangQuery>,
) -> Result<Html<String>, StatusCode> {
    let (content_type, fallback) = section_ref(&section).ok_or(StatusCode::NOT_FOUND)?;
    let request = SeoRequest::for_content(content_type, &slug, lang.lang, fallback);
    let entry = seo::resolve(state.strapi.as_ref(), &request).await;
    Ok(render_shell(&entry, lang.lang))
}

fn section_ref(section: &str) -> Option<(ContentType, &'static str)> {
    match section {
        "offers" => Some((ContentType::Offer, "home")),
        "tours" => Some((ContentType::Tour, "tour-single")),
        "destinations" | "location" => Some((ContentType::Destination, "destinations")),
        "blog" => Some((ContentType::Blog, "blog")),
        _ => None,
    }
}

fn render_shell(entry: &SeoEntry, locale: Locale) -> Html<String> {
    let mut head = HeadModel::new();
    head.apply(entry, locale);
    Html(render_page(&head, "<div id=\"app\"></div>", locale))
}
