/// Photographer workspace
///
/// Events, photos, uploads and public-profile settings for the signed-in
/// photographer. Unlike the public catalog, unknown ids here are errors.

pub mod models;
mod upload;

pub use models::*;

use crate::{
    catalog::{self, generator::random_suffix, Catalog, HIGHLIGHT_LIMIT},
    config::WorkspaceConfig,
    error::{AppError, AppResult},
};
use std::{
    collections::{BTreeMap, HashSet},
    sync::Arc,
};
use tokio::{sync::RwLock, task::JoinHandle, time::Duration};
use tracing::{debug, info};

pub(crate) struct WorkspaceState {
    events: Vec<PgEvent>,
    photos: Vec<WorkspacePhoto>,
    overlay_open: bool,
    current_upload_event_id: Option<String>,
    sessions: BTreeMap<String, UploadSession>,
    highlights: Vec<String>,
    available_to_hire: bool,
}

/// Workspace store for one photographer
pub struct WorkspaceStore {
    photographer_id: String,
    tick: Duration,
    state: Arc<RwLock<WorkspaceState>>,
}

impl WorkspaceStore {
    pub fn new(config: &WorkspaceConfig, catalog: &Catalog) -> Self {
        let photographer_id = config.photographer_id.clone();
        let events = models::pg_events(catalog.events());
        let photos = models::seed_photos(&mut rand::thread_rng());

        let highlights = catalog.seed_highlights(&photographer_id);
        let available_to_hire = catalog::photographer(&photographer_id)
            .map(|p| p.is_available_to_hire)
            .unwrap_or(true);

        info!(
            "Workspace for {}: {} events, {} photos",
            photographer_id,
            events.len(),
            photos.len()
        );

        Self {
            photographer_id,
            tick: Duration::from_millis(config.upload_tick_ms),
            state: Arc::new(RwLock::new(WorkspaceState {
                events,
                photos,
                overlay_open: false,
                current_upload_event_id: None,
                sessions: BTreeMap::new(),
                highlights,
                available_to_hire,
            })),
        }
    }

    pub fn photographer_id(&self) -> &str {
        &self.photographer_id
    }

    // ========== Events ==========

    pub async fn events(&self) -> Vec<PgEvent> {
        self.state.read().await.events.clone()
    }

    pub async fn get_event(&self, event_id: &str) -> AppResult<PgEvent> {
        self.state
            .read()
            .await
            .events
            .iter()
            .find(|e| e.id == event_id)
            .cloned()
            .ok_or_else(|| event_not_found(event_id))
    }

    /// Registered events
    pub async fn my_events(&self) -> Vec<PgEvent> {
        let state = self.state.read().await;
        state.events.iter().filter(|e| e.is_registered).cloned().collect()
    }

    /// Events not yet registered for
    pub async fn upcoming_events(&self) -> Vec<PgEvent> {
        let state = self.state.read().await;
        state.events.iter().filter(|e| !e.is_registered).cloned().collect()
    }

    pub async fn register_for_event(&self, event_id: &str) -> AppResult<PgEvent> {
        let mut state = self.state.write().await;
        let event = state
            .events
            .iter_mut()
            .find(|e| e.id == event_id)
            .ok_or_else(|| event_not_found(event_id))?;

        event.is_registered = true;
        event.status = EventStatus::Open;

        info!("Registered {} for event {}", self.photographer_id, event_id);
        Ok(event.clone())
    }

    // ========== Photos ==========

    pub async fn photos(&self) -> Vec<WorkspacePhoto> {
        self.state.read().await.photos.clone()
    }

    pub async fn get_photos_by_event(&self, event_id: &str) -> Vec<WorkspacePhoto> {
        let state = self.state.read().await;
        state.photos.iter().filter(|p| p.event_id == event_id).cloned().collect()
    }

    /// Set the status of every listed photo; returns how many matched
    pub async fn update_photo_status(&self, photo_ids: &[String], status: PhotoStatus) -> usize {
        let ids: HashSet<&str> = photo_ids.iter().map(String::as_str).collect();
        let mut state = self.state.write().await;

        let mut updated = 0;
        for photo in state.photos.iter_mut().filter(|p| ids.contains(p.id.as_str())) {
            photo.status = status;
            updated += 1;
        }

        debug!("Set status {:?} on {} photo(s)", status, updated);
        updated
    }

    pub async fn delete_photos(&self, photo_ids: &[String]) -> usize {
        let ids: HashSet<&str> = photo_ids.iter().map(String::as_str).collect();
        let mut state = self.state.write().await;

        let before = state.photos.len();
        state.photos.retain(|p| !ids.contains(p.id.as_str()));
        let deleted = before - state.photos.len();

        info!("Deleted {} photo(s)", deleted);
        deleted
    }

    pub async fn update_photo_metadata(&self, photo_ids: &[String], metadata: &PhotoMetadata) -> usize {
        let ids: HashSet<&str> = photo_ids.iter().map(String::as_str).collect();
        let mut state = self.state.write().await;

        let mut updated = 0;
        for photo in state.photos.iter_mut().filter(|p| ids.contains(p.id.as_str())) {
            metadata.apply(photo);
            updated += 1;
        }
        updated
    }

    /// Pricing is not stored anywhere yet; the request is only logged
    pub fn set_photo_price(&self, photo_ids: &[String], price: u32) {
        info!("Set price to {} for {:?}", price, photo_ids);
    }

    // ========== Uploads ==========

    pub async fn overlay(&self) -> UploadOverlay {
        let state = self.state.read().await;
        UploadOverlay {
            is_open: state.overlay_open,
            current_event_id: state.current_upload_event_id.clone(),
        }
    }

    pub async fn open_upload_overlay(&self, event_id: &str) -> AppResult<UploadOverlay> {
        {
            let mut state = self.state.write().await;
            if !state.events.iter().any(|e| e.id == event_id) {
                return Err(event_not_found(event_id));
            }
            state.current_upload_event_id = Some(event_id.to_string());
            state.overlay_open = true;
        }
        Ok(self.overlay().await)
    }

    /// Hide the overlay; the target event and all sessions are kept
    pub async fn close_upload_overlay(&self) -> UploadOverlay {
        self.state.write().await.overlay_open = false;
        self.overlay().await
    }

    /// Queue files for the overlay's current event and start their drivers
    pub async fn start_upload(&self, files: Vec<NewUpload>) -> AppResult<UploadSession> {
        let (session, _drivers) = self.start_upload_tasks(files).await?;
        Ok(session)
    }

    pub(crate) async fn start_upload_tasks(
        &self,
        files: Vec<NewUpload>,
    ) -> AppResult<(UploadSession, Vec<JoinHandle<()>>)> {
        if files.is_empty() {
            return Err(AppError::Validation("No files selected".to_string()));
        }

        let mut state = self.state.write().await;
        let event_id = state
            .current_upload_event_id
            .clone()
            .ok_or_else(|| AppError::Validation("No event selected for upload".to_string()))?;

        let new_files: Vec<UploadFile> = {
            let mut rng = rand::thread_rng();
            files
                .into_iter()
                .map(|f| UploadFile {
                    id: random_suffix(&mut rng, 9),
                    file_name: f.file_name,
                    size: f.size,
                    progress: 0,
                    status: FileStatus::Pending,
                    error: None,
                })
                .collect()
        };
        let file_ids: Vec<String> = new_files.iter().map(|f| f.id.clone()).collect();

        let session = state
            .sessions
            .entry(event_id.clone())
            .or_insert_with(|| UploadSession {
                event_id: event_id.clone(),
                status: BatchStatus::Uploading,
                files: Vec::new(),
                start_time: chrono::Utc::now().timestamp_millis(),
            });
        session.status = BatchStatus::Uploading;
        session.files.extend(new_files);
        let snapshot = session.clone();
        drop(state);

        info!("Uploading {} file(s) to {}", file_ids.len(), event_id);

        let drivers = file_ids
            .into_iter()
            .map(|file_id| {
                upload::spawn_driver(self.state.clone(), event_id.clone(), file_id, self.tick)
            })
            .collect();

        Ok((snapshot, drivers))
    }

    pub async fn upload_sessions(&self) -> BTreeMap<String, UploadSession> {
        self.state.read().await.sessions.clone()
    }

    pub async fn upload_session(&self, event_id: &str) -> Option<UploadSession> {
        self.state.read().await.sessions.get(event_id).cloned()
    }

    /// Forget an event's session; photos already created stay
    pub async fn clear_upload_session(&self, event_id: &str) -> bool {
        self.state.write().await.sessions.remove(event_id).is_some()
    }

    // ========== Public profile ==========

    pub async fn highlights(&self) -> Vec<String> {
        self.state.read().await.highlights.clone()
    }

    /// Replace the highlight set
    pub async fn update_highlights(&self, photo_ids: Vec<String>) -> AppResult<Vec<String>> {
        let mut seen = HashSet::new();
        let ids: Vec<String> = photo_ids
            .into_iter()
            .filter(|id| seen.insert(id.clone()))
            .collect();

        if ids.len() > HIGHLIGHT_LIMIT {
            return Err(AppError::Validation(format!(
                "At most {} highlights are allowed",
                HIGHLIGHT_LIMIT
            )));
        }

        let mut state = self.state.write().await;
        state.highlights = ids.clone();
        debug!("Highlights set to {} photo(s)", ids.len());
        Ok(ids)
    }

    /// Add or remove one highlight
    pub async fn toggle_highlight(&self, photo_id: &str) -> AppResult<Vec<String>> {
        let mut state = self.state.write().await;

        if let Some(pos) = state.highlights.iter().position(|id| id == photo_id) {
            state.highlights.remove(pos);
        } else {
            if state.highlights.len() >= HIGHLIGHT_LIMIT {
                return Err(AppError::Validation(format!(
                    "At most {} highlights are allowed",
                    HIGHLIGHT_LIMIT
                )));
            }
            state.highlights.push(photo_id.to_string());
        }

        Ok(state.highlights.clone())
    }

    pub async fn available_to_hire(&self) -> bool {
        self.state.read().await.available_to_hire
    }

    pub async fn toggle_available_to_hire(&self, available: bool) -> bool {
        self.state.write().await.available_to_hire = available;
        info!("{} available to hire: {}", self.photographer_id, available);
        available
    }
}

fn event_not_found(event_id: &str) -> AppError {
    AppError::NotFound(format!("Event not found: {}", event_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CatalogConfig;

    fn store(tick_ms: u64) -> WorkspaceStore {
        let catalog = Catalog::generate(&CatalogConfig {
            seed: Some(1),
            photo_count: 200,
        });
        WorkspaceStore::new(
            &WorkspaceConfig {
                photographer_id: "klara-fors".to_string(),
                upload_tick_ms: tick_ms,
            },
            &catalog,
        )
    }

    fn uploads(n: usize) -> Vec<NewUpload> {
        (0..n)
            .map(|i| NewUpload {
                file_name: format!("IMG_{:04}.jpg", i),
                size: 1024,
            })
            .collect()
    }

    #[tokio::test]
    async fn test_event_partitions_and_registration() {
        let ws = store(800);
        assert_eq!(ws.my_events().await.len(), 3);
        assert_eq!(ws.upcoming_events().await.len(), 7);

        let event = ws.register_for_event("c5").await.unwrap();
        assert!(event.is_registered);
        assert_eq!(event.status, EventStatus::Open);
        assert_eq!(ws.my_events().await.len(), 4);

        assert!(matches!(
            ws.register_for_event("nope").await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(ws.get_event("nope").await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_bulk_photo_updates() {
        let ws = store(800);
        let ids = vec!["c1-p-mock-0".to_string(), "c1-p-mock-1".to_string(), "ghost".to_string()];

        assert_eq!(ws.update_photo_status(&ids, PhotoStatus::NeedsReview).await, 2);
        let c1 = ws.get_photos_by_event("c1").await;
        assert_eq!(c1.iter().filter(|p| p.status == PhotoStatus::NeedsReview && ids.contains(&p.id)).count(), 2);

        let metadata = PhotoMetadata {
            rider: Some("Maja Sjöberg".to_string()),
            ..Default::default()
        };
        assert_eq!(ws.update_photo_metadata(&ids, &metadata).await, 2);

        ws.set_photo_price(&ids, 299);

        assert_eq!(ws.delete_photos(&ids).await, 2);
        assert_eq!(ws.get_photos_by_event("c1").await.len(), 22);
    }

    #[tokio::test]
    async fn test_start_upload_requires_target_event() {
        let ws = store(800);
        assert!(matches!(
            ws.start_upload(uploads(1)).await,
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            ws.open_upload_overlay("nope").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_upload_batch_completes() {
        let ws = store(800);
        ws.open_upload_overlay("c1").await.unwrap();
        let before = ws.get_photos_by_event("c1").await.len();

        let (session, drivers) = ws.start_upload_tasks(uploads(3)).await.unwrap();
        assert_eq!(session.files.len(), 3);
        assert!(session.files.iter().all(|f| f.status == FileStatus::Pending));
        assert_eq!(session.status, BatchStatus::Uploading);

        for driver in drivers {
            driver.await.unwrap();
        }

        let session = ws.upload_session("c1").await.unwrap();
        assert_eq!(session.status, BatchStatus::Completed);
        assert!(session
            .files
            .iter()
            .all(|f| f.status == FileStatus::Completed && f.progress == 100));

        let photos = ws.get_photos_by_event("c1").await;
        assert_eq!(photos.len(), before + 3);
        let fresh = &photos[0];
        assert!(fresh.id.starts_with("new-"));
        assert_eq!(fresh.status, PhotoStatus::UploadedUnpublished);
        assert_eq!(fresh.rider.as_deref(), Some("Processing..."));
        assert!((400..600).contains(&fresh.width));
        assert!((300..500).contains(&fresh.height));
    }

    #[tokio::test(start_paused = true)]
    async fn test_closing_overlay_keeps_sessions() {
        let ws = store(800);
        ws.open_upload_overlay("c2").await.unwrap();
        let (first, drivers) = ws.start_upload_tasks(uploads(1)).await.unwrap();

        let overlay = ws.close_upload_overlay().await;
        assert!(!overlay.is_open);
        assert_eq!(overlay.current_event_id.as_deref(), Some("c2"));

        for driver in drivers {
            driver.await.unwrap();
        }

        // A second batch joins the same session and keeps its start time
        let (second, drivers) = ws.start_upload_tasks(uploads(2)).await.unwrap();
        assert_eq!(second.files.len(), 3);
        assert_eq!(second.start_time, first.start_time);
        assert_eq!(second.status, BatchStatus::Uploading);
        for driver in drivers {
            driver.await.unwrap();
        }
        assert_eq!(ws.upload_session("c2").await.unwrap().status, BatchStatus::Completed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cleared_session_still_creates_photos() {
        let ws = store(800);
        ws.open_upload_overlay("c3").await.unwrap();
        let before = ws.get_photos_by_event("c3").await.len();

        let (_session, drivers) = ws.start_upload_tasks(uploads(2)).await.unwrap();
        assert!(ws.clear_upload_session("c3").await);

        for driver in drivers {
            driver.await.unwrap();
        }

        assert!(ws.upload_session("c3").await.is_none());
        assert_eq!(ws.get_photos_by_event("c3").await.len(), before + 2);
    }

    #[tokio::test]
    async fn test_highlight_cap() {
        let ws = store(800);
        let ten: Vec<String> = (0..10).map(|i| format!("p{}", i)).collect();
        assert_eq!(ws.update_highlights(ten.clone()).await.unwrap().len(), 10);

        let mut eleven = ten.clone();
        eleven.push("p10".to_string());
        assert!(matches!(
            ws.update_highlights(eleven).await,
            Err(AppError::Validation(_))
        ));
        assert_eq!(ws.highlights().await, ten);

        assert!(ws.toggle_highlight("p10").await.is_err());
        assert_eq!(ws.toggle_highlight("p3").await.unwrap().len(), 9);
        assert_eq!(ws.toggle_highlight("p10").await.unwrap().len(), 10);

        // Duplicates count once
        let dupes = vec!["a".to_string(); 12];
        assert_eq!(ws.update_highlights(dupes).await.unwrap(), vec!["a".to_string()]);
    }

    #[tokio::test]
    async fn test_availability_toggle() {
        let ws = store(800);
        assert!(!ws.toggle_available_to_hire(false).await);
        assert!(!ws.available_to_hire().await);
    }
}
