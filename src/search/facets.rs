/// Faceted photo filtering
///
/// Each facet's options are drawn from the photos matching every other
/// facet, so one choice narrows what the others offer.

use crate::catalog::{
    self, horse_by_name, primary_horse_for_rider, primary_rider_for_horse, rider_by_name, Horse,
    Photo,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Value meaning "no restriction"
pub const ALL: &str = "All";

fn all() -> String {
    ALL.to_string()
}

/// Current facet selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Event id
    #[serde(default = "all")]
    pub event: String,
    #[serde(default = "all")]
    pub discipline: String,
    /// Rider full name
    #[serde(default = "all")]
    pub rider: String,
    /// Horse name
    #[serde(default = "all")]
    pub horse: String,
    /// Class section name
    #[serde(default = "all", rename = "class")]
    pub class_name: String,
    /// Photographer id
    #[serde(default = "all")]
    pub photographer: String,
    #[serde(default)]
    pub query: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            event: all(),
            discipline: all(),
            rider: all(),
            horse: all(),
            class_name: all(),
            photographer: all(),
            query: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Event,
    Discipline,
    Rider,
    Horse,
    Class,
    Photographer,
}

fn is_all(value: &str) -> bool {
    value.is_empty() || value.eq_ignore_ascii_case(ALL)
}

fn facet_matches(selected: &str, actual: Option<&str>) -> bool {
    is_all(selected) || actual == Some(selected)
}

impl FilterState {
    /// Reset every facet
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        is_all(&self.event)
            && is_all(&self.discipline)
            && is_all(&self.rider)
            && is_all(&self.horse)
            && is_all(&self.class_name)
            && is_all(&self.photographer)
            && self.query.trim().is_empty()
    }

    /// Select a rider, pulling in their mapped horse
    pub fn select_rider(&mut self, rider: &str) {
        self.rider = rider.to_string();
        if is_all(rider) {
            return;
        }
        if let Some(horse) = rider_by_name(rider).and_then(|r| primary_horse_for_rider(r.id)) {
            self.horse = horse.name.to_string();
        }
    }

    /// Select a horse, pulling in its mapped rider
    pub fn select_horse(&mut self, horse: &str) {
        self.horse = horse.to_string();
        if is_all(horse) {
            return;
        }
        if let Some(rider) = horse_by_name(horse).and_then(|h| primary_rider_for_horse(h.id)) {
            self.rider = rider.full_name();
        }
    }

    pub fn matches(&self, photo: &Photo) -> bool {
        self.matches_except(photo, None)
    }

    fn matches_except(&self, photo: &Photo, skip: Option<Facet>) -> bool {
        let check = |facet: Facet, selected: &str, actual: Option<&str>| {
            skip == Some(facet) || facet_matches(selected, actual)
        };

        check(Facet::Event, &self.event, Some(photo.event_id.as_str()))
            && check(Facet::Discipline, &self.discipline, photo.discipline.as_deref())
            && check(Facet::Rider, &self.rider, Some(photo.rider.as_str()))
            && check(Facet::Horse, &self.horse, Some(photo.horse.as_str()))
            && check(Facet::Class, &self.class_name, Some(photo.class_name.as_str()))
            && check(Facet::Photographer, &self.photographer, photo.photographer_id.as_deref())
            && self.matches_query(photo)
    }

    fn matches_query(&self, photo: &Photo) -> bool {
        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        [
            Some(photo.rider.as_str()),
            Some(photo.horse.as_str()),
            Some(photo.event.as_str()),
            Some(photo.class_name.as_str()),
            Some(photo.city.as_str()),
            photo.photographer.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&query))
    }
}

/// Photos passing every active facet
pub fn filter_photos<'a>(photos: &[&'a Photo], filters: &FilterState) -> Vec<&'a Photo> {
    photos.iter().copied().filter(|p| filters.matches(p)).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    pub label: String,
    pub value: String,
}

impl FacetOption {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Dropdown contents for every facet
#[derive(Debug, Clone, Serialize)]
pub struct FilterOptions {
    pub events: Vec<FacetOption>,
    pub disciplines: Vec<FacetOption>,
    pub riders: Vec<FacetOption>,
    pub horses: Vec<FacetOption>,
    pub classes: Vec<FacetOption>,
    pub photographers: Vec<FacetOption>,
}

/// "All" option followed by unique (value, label) pairs sorted by label
fn options(all_label: &str, pairs: Vec<(String, String)>) -> Vec<FacetOption> {
    let unique: BTreeMap<String, String> = pairs.into_iter().collect();
    let mut sorted: Vec<(String, String)> = unique.into_iter().collect();
    sorted.sort_by(|a, b| a.1.cmp(&b.1));

    std::iter::once(FacetOption::new(all_label, ALL))
        .chain(sorted.into_iter().map(|(value, label)| FacetOption::new(label, value)))
        .collect()
}

/// Facets whose value doubles as the label
fn named<'a>(photos: Vec<&'a Photo>, field: impl Fn(&'a Photo) -> Option<&'a str>) -> Vec<(String, String)> {
    photos
        .into_iter()
        .filter_map(field)
        .map(|v| (v.to_string(), v.to_string()))
        .collect()
}

/// Build option lists for the current selection
pub fn facet_options(photos: &[&Photo], filters: &FilterState) -> FilterOptions {
    let narrowed = |facet: Facet| {
        photos
            .iter()
            .copied()
            .filter(|p| filters.matches_except(p, Some(facet)))
            .collect::<Vec<&Photo>>()
    };

    let riders = if is_all(&filters.horse) {
        options("All Riders", named(narrowed(Facet::Rider), |p| Some(p.rider.as_str())))
    } else {
        match horse_by_name(&filters.horse).and_then(|h| primary_rider_for_horse(h.id)) {
            Some(rider) => vec![FacetOption::new(rider.full_name(), rider.full_name())],
            None => options("All Riders", named(narrowed(Facet::Rider), |p| Some(p.rider.as_str()))),
        }
    };

    let horses = if is_all(&filters.rider) {
        options("All Horses", named(narrowed(Facet::Horse), |p| Some(p.horse.as_str())))
    } else {
        match rider_by_name(&filters.rider).and_then(|r| primary_horse_for_rider(r.id)) {
            Some(horse) => vec![FacetOption::new(horse.name, horse.name)],
            None => options("All Horses", named(narrowed(Facet::Horse), |p| Some(p.horse.as_str()))),
        }
    };

    let events: Vec<(String, String)> = narrowed(Facet::Event)
        .into_iter()
        .map(|p| (p.event_id.clone(), p.event.clone()))
        .collect();

    let photographers: Vec<(String, String)> = narrowed(Facet::Photographer)
        .into_iter()
        .filter_map(|p| match (&p.photographer_id, &p.photographer) {
            (Some(id), Some(name)) => Some((id.clone(), name.clone())),
            _ => None,
        })
        .collect();

    FilterOptions {
        events: options("All Events", events),
        disciplines: options(
            "All Disciplines",
            named(narrowed(Facet::Discipline), |p| p.discipline.as_deref()),
        ),
        riders,
        horses,
        classes: options(
            "All Classes",
            named(narrowed(Facet::Class), |p| Some(p.class_name.as_str())),
        ),
        photographers: options("All Photographers", photographers),
    }
}

/// Which slice of the catalog a listing shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchScope {
    All,
    Event(String),
    Rider(String),
    Horse(String),
    Photographer(String),
}

impl SearchScope {
    /// Parse `scope`/`scopeId` query parameters; unknown scopes mean everything
    pub fn from_params(scope: Option<&str>, id: Option<&str>) -> Self {
        match (scope, id) {
            (Some("event"), Some(id)) => SearchScope::Event(id.to_string()),
            (Some("rider"), Some(id)) => SearchScope::Rider(id.to_string()),
            (Some("horse"), Some(id)) => SearchScope::Horse(id.to_string()),
            (Some("photographer"), Some(id)) => SearchScope::Photographer(id.to_string()),
            _ => SearchScope::All,
        }
    }

    /// Photos inside this scope
    ///
    /// Rider and horse ids resolve like the public profile pages do, falling
    /// back to the first record.
    pub fn photos<'a>(&self, photos: &'a [Photo]) -> Vec<&'a Photo> {
        match self {
            SearchScope::All => photos.iter().collect(),
            SearchScope::Event(id) => photos.iter().filter(|p| &p.event_id == id).collect(),
            SearchScope::Rider(id) => {
                let name = catalog::rider_or_default(id).full_name();
                photos.iter().filter(|p| p.rider == name).collect()
            }
            SearchScope::Horse(id) => {
                let name = catalog::horse_or_default(id).name;
                photos.iter().filter(|p| p.horse == name).collect()
            }
            SearchScope::Photographer(id) => photos
                .iter()
                .filter(|p| p.photographer_id.as_deref() == Some(id.as_str()))
                .collect(),
        }
    }
}

/// Header counts for a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScopeStats {
    pub photos: usize,
    pub events: usize,
    pub riders: usize,
    pub horses: usize,
}

pub fn stats(photos: &[&Photo]) -> ScopeStats {
    ScopeStats {
        photos: photos.len(),
        events: photos.iter().map(|p| p.event_id.as_str()).collect::<HashSet<_>>().len(),
        riders: photos.iter().map(|p| p.rider.as_str()).collect::<HashSet<_>>().len(),
        horses: photos.iter().map(|p| p.horse.as_str()).collect::<HashSet<_>>().len(),
    }
}

/// The horse appearing most often in a rider's photos
///
/// Ties go to the alphabetically first name.
pub fn top_horse(photos: &[&Photo], rider_name: &str) -> Option<&'static Horse> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for photo in photos.iter().filter(|p| p.rider == rider_name) {
        *counts.entry(photo.horse.as_str()).or_default() += 1;
    }

    let names: BTreeSet<&str> = counts.keys().copied().collect();
    let top = names
        .into_iter()
        .max_by(|a, b| counts[a].cmp(&counts[b]).then_with(|| b.cmp(a)))?;

    horse_by_name(top)
}
