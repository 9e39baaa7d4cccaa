/// Public catalog endpoints
use crate::{
    cart::Quality,
    catalog::{
        self, EventDetail, EventSummary, Horse, Photo, PhotographerProfile, Rider,
    },
    context::AppContext,
    error::{AppError, AppResult},
    search::{
        self, EventBrowseFilter, FilterOptions, FilterState, QuickResults, ScopeStats,
        SearchScope,
    },
};
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

/// Build catalog routes
pub fn routes() -> Router<AppContext> {
    Router::new()
        .route("/api/events", get(list_events))
        .route("/api/events/:id", get(get_event))
        .route("/api/photos", get(list_photos))
        .route("/api/photos/:id", get(get_photo))
        .route("/api/search", get(quick_search))
        .route("/api/riders/:id", get(get_rider))
        .route("/api/horses/:id", get(get_horse))
        .route("/api/photographers/:id", get(get_photographer))
        .route("/api/recent", get(recently_viewed))
}

async fn list_events(
    State(ctx): State<AppContext>,
    Query(filter): Query<EventBrowseFilter>,
) -> Json<Vec<EventSummary>> {
    Json(filter.apply(ctx.catalog.events()).into_iter().cloned().collect())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EventResponse {
    event: EventSummary,
    detail: EventDetail,
    stats: ScopeStats,
}

async fn get_event(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> AppResult<Json<EventResponse>> {
    let (event, detail) = ctx
        .catalog
        .event(&id)
        .zip(ctx.catalog.event_detail(&id))
        .ok_or_else(|| AppError::NotFound(format!("Event not found: {}", id)))?;

    let photos = SearchScope::Event(id.clone()).photos(ctx.catalog.photos());

    Ok(Json(EventResponse {
        event: event.clone(),
        detail: detail.clone(),
        stats: search::stats(&photos),
    }))
}

/// Facet and scope query parameters
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PhotoQuery {
    scope: Option<String>,
    scope_id: Option<String>,
    event: Option<String>,
    discipline: Option<String>,
    rider: Option<String>,
    horse: Option<String>,
    class: Option<String>,
    photographer: Option<String>,
    q: Option<String>,
}

impl PhotoQuery {
    /// Filters for this query; a lone rider or horse pulls in its partner
    fn filters(&self) -> FilterState {
        let mut filters = FilterState::default();
        let set = |slot: &mut String, value: &Option<String>| {
            if let Some(value) = value {
                *slot = value.clone();
            }
        };

        set(&mut filters.event, &self.event);
        set(&mut filters.discipline, &self.discipline);
        set(&mut filters.class_name, &self.class);
        set(&mut filters.photographer, &self.photographer);
        set(&mut filters.query, &self.q);

        match (&self.rider, &self.horse) {
            (Some(rider), None) => filters.select_rider(rider),
            (None, Some(horse)) => filters.select_horse(horse),
            (rider, horse) => {
                set(&mut filters.rider, rider);
                set(&mut filters.horse, horse);
            }
        }

        filters
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PhotoListResponse {
    filters: FilterState,
    is_default: bool,
    options: FilterOptions,
    /// Counts for the whole scope, unaffected by facets
    stats: ScopeStats,
    total: usize,
    photos: Vec<Photo>,
}

async fn list_photos(
    State(ctx): State<AppContext>,
    Query(query): Query<PhotoQuery>,
) -> Json<PhotoListResponse> {
    let scope = SearchScope::from_params(query.scope.as_deref(), query.scope_id.as_deref());
    let scoped = scope.photos(ctx.catalog.photos());
    let filters = query.filters();

    let photos: Vec<Photo> = search::filter_photos(&scoped, &filters)
        .into_iter()
        .cloned()
        .collect();

    Json(PhotoListResponse {
        is_default: filters.is_default(),
        options: search::facet_options(&scoped, &filters),
        stats: search::stats(&scoped),
        total: photos.len(),
        filters,
        photos,
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QualityOffer {
    quality: Quality,
    label: &'static str,
    price: u32,
    resolution: &'static str,
    in_cart: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PhotoResponse {
    photo: Photo,
    offers: Vec<QualityOffer>,
}

/// Photo detail; unknown ids fall back to the first photo
async fn get_photo(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> AppResult<Json<PhotoResponse>> {
    let photo = ctx
        .catalog
        .photo_or_default(&id)
        .cloned()
        .ok_or_else(|| AppError::NotFound("Catalog is empty".to_string()))?;

    ctx.recent.record_view(&photo.id).await;

    let mut offers = Vec::with_capacity(Quality::ALL.len());
    for quality in Quality::ALL {
        offers.push(QualityOffer {
            quality,
            label: quality.label(),
            price: quality.price(),
            resolution: quality.resolution(photo.is_portrait()),
            in_cart: ctx.cart.is_in_cart_with_quality(&photo.id, quality).await,
        });
    }

    Ok(Json(PhotoResponse { photo, offers }))
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
}

async fn quick_search(Query(query): Query<SearchQuery>) -> Json<QuickResults> {
    Json(search::quick_search(&query.q))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RiderResponse {
    rider: Rider,
    full_name: String,
    avatar_url: String,
    primary_horse: Option<Horse>,
    top_horse: Option<Horse>,
    stats: ScopeStats,
}

async fn get_rider(State(ctx): State<AppContext>, Path(id): Path<String>) -> Json<RiderResponse> {
    let rider = catalog::rider_or_default(&id);
    let photos = SearchScope::Rider(rider.id.to_string()).photos(ctx.catalog.photos());

    Json(RiderResponse {
        rider: *rider,
        full_name: rider.full_name(),
        avatar_url: rider.avatar_url(),
        primary_horse: catalog::primary_horse_for_rider(rider.id).copied(),
        top_horse: search::top_horse(&photos, &rider.full_name()).copied(),
        stats: search::stats(&photos),
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HorseResponse {
    horse: Horse,
    avatar_url: String,
    primary_rider: Option<Rider>,
    stats: ScopeStats,
}

async fn get_horse(State(ctx): State<AppContext>, Path(id): Path<String>) -> Json<HorseResponse> {
    let horse = catalog::horse_or_default(&id);
    let photos = SearchScope::Horse(horse.id.to_string()).photos(ctx.catalog.photos());

    Json(HorseResponse {
        horse: *horse,
        avatar_url: horse.avatar_url(),
        primary_rider: catalog::primary_rider_for_horse(horse.id).copied(),
        stats: search::stats(&photos),
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PhotographerResponse {
    #[serde(flatten)]
    profile: PhotographerProfile,
    full_name: String,
    avatar_url: String,
    available_to_hire: bool,
    highlights: Vec<Photo>,
    stats: ScopeStats,
}

async fn get_photographer(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Json<PhotographerResponse> {
    let profile = catalog::photographer_profile(&id);
    let photographer_id = profile.photographer.id;
    let photos = SearchScope::Photographer(photographer_id.to_string()).photos(ctx.catalog.photos());

    let highlights = ctx
        .public_highlights(photographer_id)
        .await
        .iter()
        .filter_map(|id| ctx.catalog.photo(id).cloned())
        .collect();

    Json(PhotographerResponse {
        full_name: profile.photographer.full_name(),
        avatar_url: profile.photographer.avatar_url(),
        available_to_hire: ctx.public_available_to_hire(photographer_id).await,
        highlights,
        stats: search::stats(&photos),
        profile,
    })
}

/// Recently viewed photos, most recent first
async fn recently_viewed(State(ctx): State<AppContext>) -> Json<Vec<Photo>> {
    let photos = ctx
        .recent
        .ids()
        .await
        .iter()
        .filter_map(|id| ctx.catalog.photo(id).cloned())
        .collect();
    Json(photos)
}
