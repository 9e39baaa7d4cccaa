/// Header quick search over events, riders and horses
use crate::catalog::{
    competitions, generator::format_period, horses, primary_horse_for_rider,
    primary_rider_for_horse, riders,
};
use serde::Serialize;

/// Shortest query that produces results
pub const MIN_QUERY_LEN: usize = 2;
/// Hits kept per group
pub const MAX_PER_GROUP: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HitKind {
    Event,
    Rider,
    Horse,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuickHit {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: HitKind,
    pub title: String,
    pub subtitle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct QuickResults {
    pub events: Vec<QuickHit>,
    pub riders: Vec<QuickHit>,
    pub horses: Vec<QuickHit>,
}

impl QuickResults {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.riders.is_empty() && self.horses.is_empty()
    }
}

pub fn quick_search(query: &str) -> QuickResults {
    let query = query.trim();
    if query.chars().count() < MIN_QUERY_LEN {
        return QuickResults::default();
    }
    let needle = query.to_lowercase();
    let hit = |haystack: &str| haystack.to_lowercase().contains(&needle);

    let events = competitions()
        .iter()
        .filter(|c| hit(c.name) || hit(c.city))
        .take(MAX_PER_GROUP)
        .map(|c| QuickHit {
            id: c.id.to_string(),
            kind: HitKind::Event,
            title: c.name.to_string(),
            subtitle: format!(
                "{} • {} • {}",
                c.city,
                format_period(c.date, c.end_date),
                c.discipline
            ),
            meta: Some(c.country.to_string()),
        })
        .collect();

    let riders = riders()
        .iter()
        .filter(|r| hit(&r.full_name()))
        .take(MAX_PER_GROUP)
        .map(|r| QuickHit {
            id: r.id.to_string(),
            kind: HitKind::Rider,
            title: r.full_name(),
            subtitle: primary_horse_for_rider(r.id)
                .map(|h| {
                    if h.registered_name.is_empty() {
                        h.name.to_string()
                    } else {
                        h.registered_name.to_string()
                    }
                })
                .unwrap_or_else(|| "—".to_string()),
            meta: None,
        })
        .collect();

    let horses = horses()
        .iter()
        .filter(|h| hit(h.name) || hit(h.registered_name))
        .take(MAX_PER_GROUP)
        .map(|h| QuickHit {
            id: h.id.to_string(),
            kind: HitKind::Horse,
            title: h.name.to_string(),
            subtitle: primary_rider_for_horse(h.id)
                .map(|r| r.full_name())
                .unwrap_or_else(|| "—".to_string()),
            meta: None,
        })
        .collect();

    QuickResults {
        events,
        riders,
        horses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_query_yields_nothing() {
        assert!(quick_search("").is_empty());
        assert!(quick_search("s").is_empty());
        assert!(quick_search("  ö ").is_empty());
    }

    #[test]
    fn test_groups_are_capped() {
        // "st" hits several competitions by name or city
        let results = quick_search("st");
        assert!(results.events.len() <= MAX_PER_GROUP);
        assert!(!results.events.is_empty());
        assert!(results.riders.len() <= MAX_PER_GROUP);
    }

    #[test]
    fn test_case_insensitive_matches() {
        let results = quick_search("FROST");
        assert_eq!(results.horses.len(), 1);
        assert_eq!(results.horses[0].id, "h10");
        assert_eq!(results.horses[0].subtitle, "Elsa Håkansson");

        let results = quick_search("göteborg");
        assert_eq!(results.events[0].id, "c2");
        assert_eq!(results.events[0].subtitle, "Göteborg • 19 Feb – 22 Feb 2026 • Show Jumping");
    }
}
