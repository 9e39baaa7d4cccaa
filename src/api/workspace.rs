/// Photographer workspace endpoints (`/api/pg`)
use crate::{
    context::AppContext,
    error::AppResult,
    workspace::{
        NewUpload, PgEvent, PhotoMetadata, PhotoStatus, UploadOverlay, UploadSession,
        WorkspacePhoto,
    },
};
use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Build workspace routes
pub fn routes() -> Router<AppContext> {
    Router::new()
        .route("/api/pg/events", get(list_events))
        .route("/api/pg/events/:id", get(get_event))
        .route("/api/pg/events/:id/register", post(register_for_event))
        .route("/api/pg/events/:id/photos", get(event_photos))
        .route("/api/pg/photos", get(all_photos))
        .route("/api/pg/photos/status", post(update_status))
        .route("/api/pg/photos/metadata", post(update_metadata))
        .route("/api/pg/photos/price", post(set_price))
        .route("/api/pg/photos/delete", post(delete_photos))
        .route("/api/pg/upload", get(get_upload_state))
        .route("/api/pg/upload/open", post(open_overlay))
        .route("/api/pg/upload/close", post(close_overlay))
        .route("/api/pg/upload/files", post(start_upload))
        .route("/api/pg/upload/sessions/:event_id", delete(clear_session))
        .route("/api/pg/highlights", get(get_highlights).put(update_highlights))
        .route("/api/pg/highlights/:photo_id/toggle", post(toggle_highlight))
        .route("/api/pg/availability", get(get_availability).put(set_availability))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EventsResponse {
    photographer_id: String,
    my_events: Vec<PgEvent>,
    upcoming_events: Vec<PgEvent>,
}

async fn list_events(State(ctx): State<AppContext>) -> Json<EventsResponse> {
    Json(EventsResponse {
        photographer_id: ctx.workspace.photographer_id().to_string(),
        my_events: ctx.workspace.my_events().await,
        upcoming_events: ctx.workspace.upcoming_events().await,
    })
}

async fn get_event(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> AppResult<Json<PgEvent>> {
    Ok(Json(ctx.workspace.get_event(&id).await?))
}

async fn register_for_event(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> AppResult<Json<PgEvent>> {
    Ok(Json(ctx.workspace.register_for_event(&id).await?))
}

async fn event_photos(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<WorkspacePhoto>>> {
    ctx.workspace.get_event(&id).await?;
    Ok(Json(ctx.workspace.get_photos_by_event(&id).await))
}

async fn all_photos(State(ctx): State<AppContext>) -> Json<Vec<WorkspacePhoto>> {
    Json(ctx.workspace.photos().await)
}

#[derive(Debug, Serialize)]
struct Affected {
    affected: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatusRequest {
    photo_ids: Vec<String>,
    status: PhotoStatus,
}

async fn update_status(
    State(ctx): State<AppContext>,
    Json(req): Json<StatusRequest>,
) -> Json<Affected> {
    let affected = ctx.workspace.update_photo_status(&req.photo_ids, req.status).await;
    Json(Affected { affected })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MetadataRequest {
    photo_ids: Vec<String>,
    metadata: PhotoMetadata,
}

async fn update_metadata(
    State(ctx): State<AppContext>,
    Json(req): Json<MetadataRequest>,
) -> Json<Affected> {
    let affected = ctx
        .workspace
        .update_photo_metadata(&req.photo_ids, &req.metadata)
        .await;
    Json(Affected { affected })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PriceRequest {
    photo_ids: Vec<String>,
    price: u32,
}

/// Accepted and logged; prices are not stored
async fn set_price(State(ctx): State<AppContext>, Json(req): Json<PriceRequest>) -> Json<Affected> {
    ctx.workspace.set_photo_price(&req.photo_ids, req.price);
    Json(Affected { affected: 0 })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PhotoIdsRequest {
    photo_ids: Vec<String>,
}

async fn delete_photos(
    State(ctx): State<AppContext>,
    Json(req): Json<PhotoIdsRequest>,
) -> Json<Affected> {
    let affected = ctx.workspace.delete_photos(&req.photo_ids).await;
    Json(Affected { affected })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UploadStateResponse {
    overlay: UploadOverlay,
    sessions: BTreeMap<String, UploadSession>,
}

async fn get_upload_state(State(ctx): State<AppContext>) -> Json<UploadStateResponse> {
    Json(UploadStateResponse {
        overlay: ctx.workspace.overlay().await,
        sessions: ctx.workspace.upload_sessions().await,
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OpenOverlayRequest {
    event_id: String,
}

async fn open_overlay(
    State(ctx): State<AppContext>,
    Json(req): Json<OpenOverlayRequest>,
) -> AppResult<Json<UploadOverlay>> {
    Ok(Json(ctx.workspace.open_upload_overlay(&req.event_id).await?))
}

async fn close_overlay(State(ctx): State<AppContext>) -> Json<UploadOverlay> {
    Json(ctx.workspace.close_upload_overlay().await)
}

#[derive(Debug, Deserialize)]
struct StartUploadRequest {
    files: Vec<NewUpload>,
}

async fn start_upload(
    State(ctx): State<AppContext>,
    Json(req): Json<StartUploadRequest>,
) -> AppResult<Json<UploadSession>> {
    Ok(Json(ctx.workspace.start_upload(req.files).await?))
}

#[derive(Debug, Serialize)]
struct ClearedResponse {
    cleared: bool,
}

async fn clear_session(
    State(ctx): State<AppContext>,
    Path(event_id): Path<String>,
) -> Json<ClearedResponse> {
    Json(ClearedResponse {
        cleared: ctx.workspace.clear_upload_session(&event_id).await,
    })
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HighlightsBody {
    photo_ids: Vec<String>,
}

async fn get_highlights(State(ctx): State<AppContext>) -> Json<HighlightsBody> {
    Json(HighlightsBody {
        photo_ids: ctx.workspace.highlights().await,
    })
}

async fn update_highlights(
    State(ctx): State<AppContext>,
    Json(req): Json<HighlightsBody>,
) -> AppResult<Json<HighlightsBody>> {
    let photo_ids = ctx.workspace.update_highlights(req.photo_ids).await?;
    Ok(Json(HighlightsBody { photo_ids }))
}

async fn toggle_highlight(
    State(ctx): State<AppContext>,
    Path(photo_id): Path<String>,
) -> AppResult<Json<HighlightsBody>> {
    let photo_ids = ctx.workspace.toggle_highlight(&photo_id).await?;
    Ok(Json(HighlightsBody { photo_ids }))
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AvailabilityBody {
    available_to_hire: bool,
}

async fn get_availability(State(ctx): State<AppContext>) -> Json<AvailabilityBody> {
    Json(AvailabilityBody {
        available_to_hire: ctx.workspace.available_to_hire().await,
    })
}

async fn set_availability(
    State(ctx): State<AppContext>,
    Json(req): Json<AvailabilityBody>,
) -> Json<AvailabilityBody> {
    Json(AvailabilityBody {
        available_to_hire: ctx
            .workspace
            .toggle_available_to_hire(req.available_to_hire)
            .await,
    })
}
