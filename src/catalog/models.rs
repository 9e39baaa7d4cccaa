/// Public catalog data models
use serde::{Deserialize, Serialize};

/// Rider fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rider {
    pub id: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub gender: &'static str,
    pub country_code: &'static str,
}

impl Rider {
    /// "First Last", the form photos carry
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn avatar_url(&self) -> String {
        format!("/images/{}.jpg", self.full_name())
    }
}

/// Horse fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Horse {
    pub id: &'static str,
    pub name: &'static str,
    pub registered_name: &'static str,
}

impl Horse {
    pub fn avatar_url(&self) -> String {
        format!("/images/{}.jpg", self.name)
    }
}

/// Competition fixture (one horse show)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Competition {
    pub id: &'static str,
    pub name: &'static str,
    pub country: &'static str,
    pub country_code: &'static str,
    pub city: &'static str,
    pub discipline: &'static str,
    /// ISO date (YYYY-MM-DD)
    pub date: &'static str,
    pub end_date: &'static str,
}

/// Photographer fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Photographer {
    pub id: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub gender: &'static str,
    pub country_code: &'static str,
    pub primary_event_id: &'static str,
    pub city: &'static str,
    pub is_available_to_hire: bool,
}

impl Photographer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn avatar_url(&self) -> String {
        format!("/images/{}.jpg", self.full_name())
    }
}

/// Rider to primary horse association
#[derive(Debug, Clone, Copy)]
pub struct RiderHorse {
    pub rider_id: &'static str,
    pub horse_id: &'static str,
}

/// Placeholder event shown on photographer profiles
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DummyEvent {
    pub id: &'static str,
    pub name: &'static str,
}

/// A photo in the public catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: String,
    pub src: String,
    pub rider: String,
    pub horse: String,
    pub event: String,
    pub event_id: String,
    pub date: String,
    pub width: u32,
    pub height: u32,
    /// Class section the photo was taken in (e.g. "1.30m")
    #[serde(default)]
    pub class_name: String,
    pub time: String,
    pub city: String,
    pub arena: String,
    pub country_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discipline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photographer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photographer_id: Option<String>,
}

impl Photo {
    pub fn is_portrait(&self) -> bool {
        self.height > self.width
    }
}

/// Photographer reference embedded in events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotographerRef {
    pub id: String,
    pub name: String,
    pub avatar: String,
}

/// Event card data for the events listing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    pub id: String,
    pub name: String,
    pub cover_image: String,
    /// Display range, e.g. "26 Nov – 30 Nov 2026"
    pub period: String,
    pub flag: String,
    pub city: String,
    pub discipline: String,
    pub country: String,
    pub photo_count: u32,
    pub logo: String,
    pub photographer: PhotographerRef,
}

#[derive(Debug, Clone, Serialize)]
pub struct Country {
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    pub start_date: String,
    pub end_date: String,
}

/// Meeting header of an event detail
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: String,
    pub name: String,
    pub country: Country,
    pub city: String,
    pub venue_name: String,
    pub club_name: String,
    pub period: Period,
    pub disciplines: Vec<String>,
    pub timezone: String,
    pub photo_count: u32,
    pub cover_image: String,
    pub logo: String,
    pub photographer: Option<PhotographerRef>,
}

/// One class within an arena's daily program
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSection {
    pub class_section_id: String,
    pub name: String,
    pub start_time: String,
    pub position: u32,
    pub discipline: String,
    pub entries_count: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Arena {
    pub id: String,
    pub name: String,
    pub position: u32,
    pub competitions: Vec<ClassSection>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DailySchedule {
    pub date: String,
    pub arenas: Vec<Arena>,
}

/// Full event detail: meeting plus schedule
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetail {
    pub meeting_id: String,
    pub meeting: Meeting,
    pub schedule: Vec<DailySchedule>,
}

impl EventDetail {
    /// Every class section across all days and arenas
    pub fn class_sections(&self) -> impl Iterator<Item = &ClassSection> {
        self.schedule
            .iter()
            .flat_map(|day| day.arenas.iter())
            .flat_map(|arena| arena.competitions.iter())
    }
}

/// Public photographer profile header
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotographerProfile {
    pub photographer: Photographer,
    pub primary_event: Competition,
    pub dummy_events: Vec<DummyEvent>,
}
