/// Workspace records and their fixture generation
use crate::catalog::{
    fixtures::{HORSES, PHOTO_FILES, RIDERS},
    primary_horse_for_rider, EventSummary,
};
use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};

/// Events the workspace photographer starts registered for
pub const MY_EVENT_IDS: [&str; 3] = ["c1", "c2", "c3"];

/// Seed photo counts for each of `MY_EVENT_IDS`
const SEED_PHOTO_COUNTS: [usize; 3] = [24, 32, 12];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Open,
    Archived,
}

/// An event as the photographer sees it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PgEvent {
    pub id: String,
    pub title: String,
    /// Start of the date range
    pub date: String,
    pub date_range: String,
    pub location: String,
    pub cover_image: String,
    pub status: EventStatus,
    pub photos_count: u32,
    pub published_count: u32,
    pub sold_count: u32,
    pub is_registered: bool,
    pub logo: String,
    pub venue_name: String,
    pub disciplines: Vec<String>,
    pub city: String,
}

impl PgEvent {
    pub fn from_summary(event: &EventSummary, mine: bool) -> Self {
        let venue_name = if event.name.contains("Gothenburg") {
            "Scandinavium"
        } else if event.name.contains("Falsterbo") {
            "Falsterbo Arena"
        } else {
            "Main Arena"
        };

        let date = event
            .period
            .split(" – ")
            .next()
            .unwrap_or(&event.period)
            .to_string();

        Self {
            id: event.id.clone(),
            title: event.name.clone(),
            date,
            date_range: event.period.clone(),
            location: format!("{}, Sweden", event.city),
            cover_image: event.cover_image.clone(),
            status: if mine { EventStatus::Open } else { EventStatus::Upcoming },
            photos_count: event.photo_count,
            published_count: if mine { event.photo_count * 8 / 10 } else { 0 },
            sold_count: if mine { event.photo_count / 10 } else { 0 },
            is_registered: mine,
            logo: event.logo.clone(),
            venue_name: venue_name.to_string(),
            disciplines: vec![event.discipline.clone()],
            city: event.city.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PhotoStatus {
    Uploading,
    Processing,
    NeedsReview,
    UploadedUnpublished,
    Published,
}

/// A photo owned by the workspace photographer
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspacePhoto {
    pub id: String,
    pub url: String,
    pub event_id: String,
    pub status: PhotoStatus,
    pub sold_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horse: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    pub width: u32,
    pub height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Partial photo update applied to every selected photo
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoMetadata {
    pub rider: Option<String>,
    pub horse: Option<String>,
    pub timestamp: Option<String>,
    pub title: Option<String>,
    pub status: Option<PhotoStatus>,
    pub sold_count: Option<u32>,
}

impl PhotoMetadata {
    pub fn apply(&self, photo: &mut WorkspacePhoto) {
        if let Some(rider) = &self.rider {
            photo.rider = Some(rider.clone());
        }
        if let Some(horse) = &self.horse {
            photo.horse = Some(horse.clone());
        }
        if let Some(timestamp) = &self.timestamp {
            photo.timestamp = Some(timestamp.clone());
        }
        if let Some(title) = &self.title {
            photo.title = Some(title.clone());
        }
        if let Some(status) = self.status {
            photo.status = status;
        }
        if let Some(sold_count) = self.sold_count {
            photo.sold_count = sold_count;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Pending,
    Uploading,
    Completed,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchStatus {
    Uploading,
    Completed,
}

/// File handed to `start_upload`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUpload {
    pub file_name: String,
    #[serde(default)]
    pub size: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadFile {
    pub id: String,
    pub file_name: String,
    pub size: u64,
    pub progress: u8,
    pub status: FileStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// All uploads for one event
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadSession {
    pub event_id: String,
    pub status: BatchStatus,
    pub files: Vec<UploadFile>,
    /// Unix milliseconds of the first batch
    pub start_time: i64,
}

impl UploadSession {
    /// Every file has finished, successfully or not
    pub fn is_settled(&self) -> bool {
        self.files
            .iter()
            .all(|f| matches!(f.status, FileStatus::Completed | FileStatus::Failed))
    }
}

/// Visibility of the upload overlay
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadOverlay {
    pub is_open: bool,
    pub current_event_id: Option<String>,
}

/// Workspace events for every catalog event
pub fn pg_events(events: &[EventSummary]) -> Vec<PgEvent> {
    events
        .iter()
        .map(|e| PgEvent::from_summary(e, MY_EVENT_IDS.contains(&e.id.as_str())))
        .collect()
}

/// Seed photos for the photographer's registered events
pub fn seed_photos<R: Rng + ?Sized>(rng: &mut R) -> Vec<WorkspacePhoto> {
    MY_EVENT_IDS
        .iter()
        .zip(SEED_PHOTO_COUNTS)
        .flat_map(|(event_id, count)| event_photos(&mut *rng, event_id, count))
        .collect()
}

fn event_photos<R: Rng + ?Sized>(rng: &mut R, event_id: &str, count: usize) -> Vec<WorkspacePhoto> {
    (0..count)
        .map(|i| {
            let file = PHOTO_FILES.choose(rng).copied().unwrap_or(PHOTO_FILES[0]);
            let rider = RIDERS.choose(rng).unwrap_or(&RIDERS[0]);
            let horse = primary_horse_for_rider(rider.id).unwrap_or(&HORSES[0]);

            let ratio: f64 = rng.gen();
            let (width, mut height) = if ratio > 0.66 {
                (800, 600)
            } else if ratio > 0.33 {
                (800, 800)
            } else {
                (600, 800)
            };
            if ratio < 0.33 {
                height = (height as i32 + rng.gen_range(-50..50)) as u32;
            }

            let roll: f64 = rng.gen();
            let (status, sold_count) = if roll > 0.95 {
                (PhotoStatus::Published, rng.gen_range(1..5))
            } else if roll > 0.85 {
                (PhotoStatus::NeedsReview, 0)
            } else if roll > 0.75 {
                (PhotoStatus::UploadedUnpublished, 0)
            } else {
                (PhotoStatus::Published, 0)
            };

            WorkspacePhoto {
                id: format!("{}-p-mock-{}", event_id, i),
                url: format!("/images/{}", file),
                event_id: event_id.to_string(),
                status,
                sold_count,
                rider: Some(rider.full_name()),
                horse: Some(horse.name.to_string()),
                timestamp: Some("12:00".to_string()),
                width,
                height,
                title: Some(format!("Photo {}", i)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::generator::event_summaries;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_pg_events_mark_my_events() {
        let events = pg_events(&event_summaries());
        assert_eq!(events.len(), 10);

        let c1 = &events[0];
        assert_eq!(c1.status, EventStatus::Open);
        assert!(c1.is_registered);
        assert_eq!(c1.published_count, c1.photos_count * 8 / 10);
        assert_eq!(c1.location, format!("{}, Sweden", c1.city));
        assert!(!c1.date.contains('–'));

        let c4 = events.iter().find(|e| e.id == "c4").unwrap();
        assert_eq!(c4.status, EventStatus::Upcoming);
        assert_eq!(c4.sold_count, 0);

        let c2 = events.iter().find(|e| e.id == "c2").unwrap();
        assert_eq!(c2.venue_name, "Scandinavium");
    }

    #[test]
    fn test_seed_photos_per_event() {
        let mut rng = StdRng::seed_from_u64(5);
        let photos = seed_photos(&mut rng);

        assert_eq!(photos.iter().filter(|p| p.event_id == "c1").count(), 24);
        assert_eq!(photos.iter().filter(|p| p.event_id == "c2").count(), 32);
        assert_eq!(photos.iter().filter(|p| p.event_id == "c3").count(), 12);
        assert_eq!(photos[0].id, "c1-p-mock-0");

        for photo in &photos {
            let rider = crate::catalog::rider_by_name(photo.rider.as_deref().unwrap()).unwrap();
            let horse = primary_horse_for_rider(rider.id).unwrap();
            assert_eq!(photo.horse.as_deref(), Some(horse.name));
            assert!(photo.sold_count == 0 || photo.status == PhotoStatus::Published);
        }
    }
}
