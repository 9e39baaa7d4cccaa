/// Mock record generation from the fixture tables
use crate::catalog::{
    fixtures::{
        ARENA_NAMES, CLASS_HEIGHTS, COMPETITIONS, EVENT_ASSETS, HORSES, PHOTOGRAPHERS,
        PHOTO_FILES, RIDERS, VENUES,
    },
    models::{
        Arena, ClassSection, Country, DailySchedule, EventDetail, EventSummary, Meeting, Period,
        Photo, PhotographerRef,
    },
    primary_horse_for_rider, HIGHLIGHT_LIMIT,
};
use chrono::{Duration, NaiveDate};
use rand::{distributions::Alphanumeric, seq::SliceRandom, Rng};
use std::collections::HashMap;

const DAYS_PER_EVENT: u32 = 2;
const ARENAS_PER_DAY: u32 = 2;
const CLASSES_PER_ARENA: u32 = 3;

/// Short lowercase alphanumeric id fragment
pub fn random_suffix<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect::<String>()
        .to_lowercase()
}

/// Format an ISO date range as "26 Nov – 30 Nov 2026"
///
/// Unparseable input is returned as-is.
pub fn format_period(start: &str, end: &str) -> String {
    let parse = |raw: &str| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok();

    match (parse(start), parse(end)) {
        (Some(s), Some(e)) => format!("{} – {}", s.format("%d %b"), e.format("%d %b %Y")),
        (Some(s), None) => s.format("%d %b %Y").to_string(),
        _ => start.to_string(),
    }
}

/// Photographer credited for a competition (the one whose primary event it is)
fn photographer_ref(event_id: &str) -> PhotographerRef {
    let p = PHOTOGRAPHERS
        .iter()
        .find(|p| p.primary_event_id == event_id)
        .unwrap_or(&PHOTOGRAPHERS[0]);

    PhotographerRef {
        id: p.id.to_string(),
        name: p.full_name(),
        avatar: p.avatar_url(),
    }
}

/// Event cards, one per competition
pub fn event_summaries() -> Vec<EventSummary> {
    COMPETITIONS
        .iter()
        .map(|comp| {
            let assets = EVENT_ASSETS
                .iter()
                .find(|a| a.event_id == comp.id)
                .unwrap_or(&EVENT_ASSETS[0]);

            EventSummary {
                id: comp.id.to_string(),
                name: comp.name.to_string(),
                cover_image: assets.cover.to_string(),
                period: format_period(comp.date, comp.end_date),
                flag: "🇸🇪".to_string(),
                city: comp.city.to_string(),
                discipline: comp.discipline.to_string(),
                country: comp.country.to_string(),
                photo_count: assets.count,
                logo: assets.logo.to_string(),
                photographer: photographer_ref(comp.id),
            }
        })
        .collect()
}

/// Meeting headers and a two-day schedule per competition
pub fn event_details<R: Rng + ?Sized>(rng: &mut R, summaries: &[EventSummary]) -> Vec<EventDetail> {
    COMPETITIONS
        .iter()
        .map(|comp| {
            let enriched = summaries.iter().find(|e| e.id == comp.id);
            let (venue, club) = *VENUES.choose(rng).unwrap_or(&VENUES[0]);

            let meeting = Meeting {
                id: comp.id.to_string(),
                name: comp.name.to_string(),
                country: Country {
                    name: comp.country.to_string(),
                    code: comp.country_code.to_string(),
                },
                city: comp.city.to_string(),
                venue_name: venue.to_string(),
                club_name: club.to_string(),
                period: Period {
                    start_date: comp.date.to_string(),
                    end_date: comp.end_date.to_string(),
                },
                disciplines: vec![comp.discipline.to_string()],
                timezone: "Europe/Stockholm".to_string(),
                photo_count: rng.gen_range(40..=200),
                cover_image: enriched
                    .map(|e| e.cover_image.clone())
                    .unwrap_or_else(|| "/images/events/default.jpg".to_string()),
                logo: enriched.map(|e| e.logo.clone()).unwrap_or_default(),
                photographer: enriched.map(|e| e.photographer.clone()),
            };

            let start = NaiveDate::parse_from_str(comp.date, "%Y-%m-%d").ok();
            let schedule = (0..DAYS_PER_EVENT)
                .map(|d| {
                    let date = start
                        .map(|s| (s + Duration::days(d as i64)).format("%Y-%m-%d").to_string())
                        .unwrap_or_else(|| comp.date.to_string());

                    let arenas = (0..ARENAS_PER_DAY)
                        .map(|a| Arena {
                            id: format!("a-{}-d{}-a{}", comp.id, d + 1, a + 1),
                            name: ARENA_NAMES
                                .get(a as usize)
                                .map(|n| n.to_string())
                                .unwrap_or_else(|| format!("Arena {}", a + 1)),
                            position: a + 1,
                            competitions: (0..CLASSES_PER_ARENA)
                                .map(|c| ClassSection {
                                    class_section_id: format!("cs-{}-{}-{}-{}", comp.id, d, a, c),
                                    name: CLASS_HEIGHTS
                                        .choose(rng)
                                        .unwrap_or(&CLASS_HEIGHTS[0])
                                        .to_string(),
                                    start_time: format!("{:02}:00", 9 + c * 3),
                                    position: c + 1,
                                    discipline: comp.discipline.to_string(),
                                    entries_count: rng.gen_range(20..=70),
                                })
                                .collect(),
                        })
                        .collect();

                    DailySchedule { date, arenas }
                })
                .collect();

            EventDetail {
                meeting_id: comp.id.to_string(),
                meeting,
                schedule,
            }
        })
        .collect()
}

/// Public catalog photos, spread evenly over riders, events and photographers
pub fn public_photos<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    details: &[EventDetail],
) -> Vec<Photo> {
    (0..count)
        .map(|i| {
            let filename = PHOTO_FILES[i % PHOTO_FILES.len()];
            let rider = &RIDERS[i % RIDERS.len()];
            let comp = &COMPETITIONS[(i + i / RIDERS.len()) % COMPETITIONS.len()];
            let pg = &PHOTOGRAPHERS[(i + i / COMPETITIONS.len()) % PHOTOGRAPHERS.len()];
            let horse = primary_horse_for_rider(rider.id).unwrap_or(&HORSES[0]);

            let class_name = details
                .iter()
                .find(|d| d.meeting_id == comp.id)
                .and_then(|d| {
                    let names: Vec<&str> = d.class_sections().map(|c| c.name.as_str()).collect();
                    names.choose(rng).map(|n| n.to_string())
                })
                .unwrap_or_else(|| "1.30m".to_string());

            Photo {
                id: format!("m-{}-{}", i, random_suffix(rng, 9)),
                src: format!("/images/{}", filename),
                rider: rider.full_name(),
                horse: horse.name.to_string(),
                event: comp.name.to_string(),
                event_id: comp.id.to_string(),
                date: comp.date.to_string(),
                width: *[600, 800, 700].choose(rng).unwrap_or(&600),
                height: *[600, 800, 500, 900].choose(rng).unwrap_or(&600),
                class_name,
                time: format!("{}:00", 10 + (i % 8)),
                city: comp.city.to_string(),
                arena: format!("{} Arena", comp.city),
                country_code: comp.country_code.to_lowercase(),
                discipline: Some(comp.discipline.to_string()),
                photographer: Some(pg.full_name()),
                photographer_id: Some(pg.id.to_string()),
            }
        })
        .collect()
}

/// Initial highlight picks per photographer, never above the highlight cap
pub fn seed_highlights<R: Rng + ?Sized>(rng: &mut R, photos: &[Photo]) -> HashMap<String, Vec<String>> {
    PHOTOGRAPHERS
        .iter()
        .map(|p| {
            let mut own: Vec<&Photo> = photos
                .iter()
                .filter(|photo| photo.photographer_id.as_deref() == Some(p.id))
                .collect();
            own.shuffle(rng);

            let ids = own
                .into_iter()
                .take(HIGHLIGHT_LIMIT)
                .map(|photo| photo.id.clone())
                .collect();

            (p.id.to_string(), ids)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_format_period() {
        assert_eq!(format_period("2026-11-26", "2026-11-30"), "26 Nov – 30 Nov 2026");
        assert_eq!(format_period("2026-01-31", "2026-02-01"), "31 Jan – 01 Feb 2026");
        assert_eq!(format_period("garbage", "2026-02-01"), "garbage");
    }

    #[test]
    fn test_schedule_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let details = event_details(&mut rng, &event_summaries());

        assert_eq!(details.len(), COMPETITIONS.len());
        let first = &details[0];
        assert_eq!(first.schedule.len(), 2);
        assert_eq!(first.schedule[0].date, "2026-11-26");
        assert_eq!(first.schedule[1].date, "2026-11-27");
        assert_eq!(first.class_sections().count(), 12);
        assert_eq!(first.schedule[0].arenas[0].competitions[2].start_time, "15:00");
        assert!((40..=200).contains(&first.meeting.photo_count));
    }

    #[test]
    fn test_photo_distribution() {
        let mut rng = StdRng::seed_from_u64(11);
        let details = event_details(&mut rng, &event_summaries());
        let photos = public_photos(&mut rng, 100, &details);

        assert_eq!(photos.len(), 100);
        assert_eq!(photos[0].rider, "Ebba Lindström");
        assert_eq!(photos[0].horse, "Björkdal Brave");
        assert_eq!(photos[0].event_id, "c1");
        // Photographer index tracks the competition index
        assert_eq!(photos[0].photographer_id.as_deref(), Some("hanna-bjork"));
        assert_eq!(photos[10].event_id, "c2");
        assert!(photos.iter().all(|p| p.id.starts_with("m-")));
        assert!(photos.iter().all(|p| !p.class_name.is_empty()));
    }

    #[test]
    fn test_seed_highlights_respect_cap() {
        let mut rng = StdRng::seed_from_u64(3);
        let details = event_details(&mut rng, &event_summaries());
        let photos = public_photos(&mut rng, 1000, &details);
        let highlights = seed_highlights(&mut rng, &photos);

        assert_eq!(highlights.len(), PHOTOGRAPHERS.len());
        assert!(highlights.values().all(|ids| ids.len() <= HIGHLIGHT_LIMIT));
        assert_eq!(highlights["klara-fors"].len(), HIGHLIGHT_LIMIT);
    }
}
