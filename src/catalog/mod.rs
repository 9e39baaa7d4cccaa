/// Public catalog
///
/// Riders, horses, competitions and photographers come from static fixture
/// tables; events, schedules and photo records are generated from them once at
/// startup and never change afterwards. Lookups of unknown ids on the public
/// side fall back to the first record of the table.

pub mod fixtures;
pub mod generator;
pub mod models;

pub use models::*;

use crate::config::CatalogConfig;
use fixtures::{COMPETITIONS, DUMMY_EVENTS, HORSES, PHOTOGRAPHERS, RIDERS, RIDER_PRIMARY_HORSE};
use rand::{rngs::StdRng, SeedableRng};
use std::collections::HashMap;
use tracing::info;

/// Maximum number of highlighted photos per photographer
pub const HIGHLIGHT_LIMIT: usize = 10;

pub fn riders() -> &'static [Rider] {
    &RIDERS
}

pub fn horses() -> &'static [Horse] {
    &HORSES
}

pub fn competitions() -> &'static [Competition] {
    &COMPETITIONS
}

pub fn photographers() -> &'static [Photographer] {
    &PHOTOGRAPHERS
}

pub fn rider(id: &str) -> Option<&'static Rider> {
    RIDERS.iter().find(|r| r.id == id)
}

/// Rider by id, or the first rider
pub fn rider_or_default(id: &str) -> &'static Rider {
    rider(id).unwrap_or(&RIDERS[0])
}

/// Rider by "First Last" name as carried on photos
pub fn rider_by_name(full_name: &str) -> Option<&'static Rider> {
    RIDERS.iter().find(|r| r.full_name() == full_name)
}

pub fn horse(id: &str) -> Option<&'static Horse> {
    HORSES.iter().find(|h| h.id == id)
}

/// Horse by id, or the first horse
pub fn horse_or_default(id: &str) -> &'static Horse {
    horse(id).unwrap_or(&HORSES[0])
}

pub fn horse_by_name(name: &str) -> Option<&'static Horse> {
    HORSES.iter().find(|h| h.name == name)
}

pub fn competition(id: &str) -> Option<&'static Competition> {
    COMPETITIONS.iter().find(|c| c.id == id)
}

pub fn photographer(id: &str) -> Option<&'static Photographer> {
    PHOTOGRAPHERS.iter().find(|p| p.id == id)
}

/// The rider's single mapped primary horse
pub fn primary_horse_for_rider(rider_id: &str) -> Option<&'static Horse> {
    RIDER_PRIMARY_HORSE
        .iter()
        .find(|m| m.rider_id == rider_id)
        .and_then(|m| horse(m.horse_id))
}

/// The horse's single mapped primary rider
pub fn primary_rider_for_horse(horse_id: &str) -> Option<&'static Rider> {
    RIDER_PRIMARY_HORSE
        .iter()
        .find(|m| m.horse_id == horse_id)
        .and_then(|m| rider(m.rider_id))
}

/// Profile header for a photographer, or the first photographer
pub fn photographer_profile(photographer_id: &str) -> PhotographerProfile {
    let photographer = photographer(photographer_id).unwrap_or(&PHOTOGRAPHERS[0]);
    let primary_event = competition(photographer.primary_event_id).unwrap_or(&COMPETITIONS[0]);

    PhotographerProfile {
        photographer: *photographer,
        primary_event: *primary_event,
        dummy_events: DUMMY_EVENTS.to_vec(),
    }
}

/// Generated catalog records
#[derive(Debug, Clone)]
pub struct Catalog {
    events: Vec<EventSummary>,
    details: Vec<EventDetail>,
    photos: Vec<Photo>,
    seed_highlights: HashMap<String, Vec<String>>,
}

impl Catalog {
    /// Generate the catalog; a configured seed makes it reproducible
    pub fn generate(config: &CatalogConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let events = generator::event_summaries();
        let details = generator::event_details(&mut rng, &events);
        let photos = generator::public_photos(&mut rng, config.photo_count, &details);
        let seed_highlights = generator::seed_highlights(&mut rng, &photos);

        info!(
            "Generated catalog: {} events, {} photos",
            events.len(),
            photos.len()
        );

        Self {
            events,
            details,
            photos,
            seed_highlights,
        }
    }

    pub fn events(&self) -> &[EventSummary] {
        &self.events
    }

    pub fn event(&self, id: &str) -> Option<&EventSummary> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn event_detail(&self, id: &str) -> Option<&EventDetail> {
        self.details.iter().find(|d| d.meeting_id == id)
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn photo(&self, id: &str) -> Option<&Photo> {
        self.photos.iter().find(|p| p.id == id)
    }

    /// Photo by id, or the first photo of the catalog
    pub fn photo_or_default(&self, id: &str) -> Option<&Photo> {
        self.photo(id).or_else(|| self.photos.first())
    }

    /// Highlights a photographer started with
    pub fn seed_highlights(&self, photographer_id: &str) -> Vec<String> {
        self.seed_highlights
            .get(photographer_id)
            .cloned()
            .unwrap_or_default()
    }
}
