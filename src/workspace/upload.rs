/// Simulated upload drivers
///
/// Each file gets its own task that advances progress on a fixed tick until
/// it reaches 100, then adds a placeholder photo to the event.

use super::{
    models::{BatchStatus, FileStatus, PhotoStatus, WorkspacePhoto},
    WorkspaceState,
};
use crate::catalog::fixtures::UPLOAD_PLACEHOLDER_URL;
use rand::Rng;
use std::sync::Arc;
use tokio::{
    sync::RwLock,
    task::JoinHandle,
    time::{interval_at, Duration, Instant},
};
use tracing::{debug, info};

/// Start a driver for one file
pub(crate) fn spawn_driver(
    state: Arc<RwLock<WorkspaceState>>,
    event_id: String,
    file_id: String,
    tick: Duration,
) -> JoinHandle<()> {
    tokio::spawn(drive(state, event_id, file_id, tick))
}

async fn drive(state: Arc<RwLock<WorkspaceState>>, event_id: String, file_id: String, tick: Duration) {
    let mut ticker = interval_at(Instant::now() + tick, tick);
    let mut progress: u32 = 0;

    loop {
        ticker.tick().await;
        progress += rand::thread_rng().gen_range(10..30);

        if progress >= 100 {
            complete(&state, &event_id, &file_id).await;
            return;
        }

        set_progress(&state, &event_id, &file_id, progress as u8).await;
    }
}

async fn set_progress(state: &RwLock<WorkspaceState>, event_id: &str, file_id: &str, progress: u8) {
    let mut state = state.write().await;

    // Session cleared while uploading
    let Some(session) = state.sessions.get_mut(event_id) else {
        return;
    };

    if let Some(file) = session.files.iter_mut().find(|f| f.id == file_id) {
        file.progress = progress;
        file.status = FileStatus::Uploading;
        debug!("Upload {} at {}%", file_id, progress);
    }
}

async fn complete(state: &RwLock<WorkspaceState>, event_id: &str, file_id: &str) {
    let mut state = state.write().await;

    if let Some(session) = state.sessions.get_mut(event_id) {
        if let Some(file) = session.files.iter_mut().find(|f| f.id == file_id) {
            file.progress = 100;
            file.status = FileStatus::Completed;
        }

        if session.is_settled() {
            session.status = BatchStatus::Completed;
            info!("Upload batch for {} completed ({} files)", event_id, session.files.len());
        }
    }

    let photo = {
        let mut rng = rand::thread_rng();
        WorkspacePhoto {
            id: format!("new-{}", file_id),
            url: UPLOAD_PLACEHOLDER_URL.to_string(),
            event_id: event_id.to_string(),
            status: PhotoStatus::UploadedUnpublished,
            sold_count: 0,
            rider: Some("Processing...".to_string()),
            horse: Some(String::new()),
            timestamp: Some(chrono::Local::now().format("%H:%M").to_string()),
            width: rng.gen_range(400..600),
            height: rng.gen_range(300..500),
            title: None,
        }
    };

    debug!("Upload {} finished as photo {}", file_id, photo.id);
    state.photos.insert(0, photo);
}
