/// Event listing filter (country, city, discipline)
use crate::catalog::EventSummary;
use serde::Deserialize;

fn default_country() -> String {
    "Sweden".to_string()
}

fn default_city() -> String {
    "All".to_string()
}

fn default_discipline() -> String {
    "Any".to_string()
}

/// Event browse selection; "all" in any slot disables it
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EventBrowseFilter {
    #[serde(default = "default_country")]
    pub country: String,
    #[serde(default = "default_city")]
    pub city: String,
    #[serde(default = "default_discipline")]
    pub discipline: String,
}

impl Default for EventBrowseFilter {
    fn default() -> Self {
        Self {
            country: default_country(),
            city: default_city(),
            discipline: default_discipline(),
        }
    }
}

impl EventBrowseFilter {
    pub fn is_reset(&self) -> bool {
        self.country == "all" && self.city.eq_ignore_ascii_case("all") && is_any(&self.discipline)
    }

    pub fn matches(&self, event: &EventSummary) -> bool {
        let country = self.country == "all" || event.country == self.country;
        let city = self.city.eq_ignore_ascii_case("all") || event.city == self.city;
        let discipline = is_any(&self.discipline) || event.discipline == self.discipline;
        country && city && discipline
    }

    pub fn apply<'a>(&self, events: &'a [EventSummary]) -> Vec<&'a EventSummary> {
        events.iter().filter(|e| self.matches(e)).collect()
    }
}

fn is_any(discipline: &str) -> bool {
    discipline == "Any" || discipline == "all"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::generator::event_summaries;

    #[test]
    fn test_default_shows_swedish_events() {
        let events = event_summaries();
        let filter = EventBrowseFilter::default();
        assert_eq!(filter.apply(&events).len(), events.len());
        assert!(!filter.is_reset());
    }

    #[test]
    fn test_narrowing() {
        let events = event_summaries();
        let filter = EventBrowseFilter {
            discipline: "Dressage".to_string(),
            ..Default::default()
        };
        let ids: Vec<&str> = filter.apply(&events).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["c4", "c9"]);

        let filter = EventBrowseFilter {
            country: "Norway".to_string(),
            ..Default::default()
        };
        assert!(filter.apply(&events).is_empty());

        let filter = EventBrowseFilter {
            country: "all".to_string(),
            city: "Falsterbo".to_string(),
            discipline: "all".to_string(),
        };
        assert_eq!(filter.apply(&events).len(), 1);
    }
}
