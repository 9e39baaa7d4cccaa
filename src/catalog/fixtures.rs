/// Static fixture tables
use crate::catalog::models::{Competition, DummyEvent, Horse, Photographer, Rider, RiderHorse};

const fn rider(
    id: &'static str,
    first_name: &'static str,
    last_name: &'static str,
    gender: &'static str,
) -> Rider {
    Rider {
        id,
        first_name,
        last_name,
        gender,
        country_code: "SE",
    }
}

const fn horse(id: &'static str, name: &'static str) -> Horse {
    Horse {
        id,
        name,
        registered_name: name,
    }
}

const fn competition(
    id: &'static str,
    name: &'static str,
    city: &'static str,
    discipline: &'static str,
    date: &'static str,
    end_date: &'static str,
) -> Competition {
    Competition {
        id,
        name,
        country: "Sweden",
        country_code: "SE",
        city,
        discipline,
        date,
        end_date,
    }
}

const fn photographer(
    id: &'static str,
    first_name: &'static str,
    last_name: &'static str,
    gender: &'static str,
    primary_event_id: &'static str,
    city: &'static str,
    is_available_to_hire: bool,
) -> Photographer {
    Photographer {
        id,
        first_name,
        last_name,
        gender,
        country_code: "SE",
        primary_event_id,
        city,
        is_available_to_hire,
    }
}

pub static RIDERS: [Rider; 10] = [
    rider("r1", "Ebba", "Lindström", "F"),
    rider("r2", "Maja", "Sjöberg", "F"),
    rider("r3", "Alva", "Karlsson", "F"),
    rider("r4", "Nora", "Bergqvist", "F"),
    rider("r5", "Elsa", "Håkansson", "F"),
    rider("r6", "Signe", "Jonsson", "F"),
    rider("r7", "Freja", "Nyström", "F"),
    rider("r8", "Linnea", "Ek", "F"),
    rider("r9", "Oskar", "Wallin", "M"),
    rider("r10", "Viktor", "Sundberg", "M"),
];

pub static HORSES: [Horse; 10] = [
    horse("h1", "Nordic Aurora"),
    horse("h2", "Silver Tindra"),
    horse("h3", "Stormvind"),
    horse("h4", "Midnight Saga"),
    horse("h5", "Lilla Fjord"),
    horse("h6", "Valhalla Rune"),
    horse("h7", "Skärgårdsprins"),
    horse("h8", "Göta Glimt"),
    horse("h9", "Björkdal Brave"),
    horse("h10", "Frost Nova"),
];

pub static COMPETITIONS: [Competition; 10] = [
    competition("c1", "Sweden International Horse Show", "Stockholm", "Show Jumping", "2026-11-26", "2026-11-30"),
    competition("c2", "Gothenburg Indoor Masters", "Göteborg", "Show Jumping", "2026-02-19", "2026-02-22"),
    competition("c3", "Falsterbo Summer Classic", "Falsterbo", "Show Jumping", "2026-07-11", "2026-07-19"),
    competition("c4", "Strömsholm Spring Dressage", "Strömsholm", "Dressage", "2026-05-08", "2026-05-10"),
    competition("c5", "Uppsala Arena Cup", "Uppsala", "Show Jumping", "2026-03-14", "2026-03-15"),
    competition("c6", "Malmö City Jumping", "Malmö", "Show Jumping", "2026-04-25", "2026-04-26"),
    competition("c7", "Linköping Eventing Weekend", "Linköping", "Eventing", "2026-09-05", "2026-09-06"),
    competition("c8", "Örebro Autumn Cup", "Örebro", "Show Jumping", "2026-10-10", "2026-10-11"),
    competition("c9", "Umeå Northern Lights Dressage", "Umeå", "Dressage", "2026-01-31", "2026-02-01"),
    competition("c10", "Jönköping Lake District Classic", "Jönköping", "Show Jumping", "2026-06-12", "2026-06-14"),
];

pub static PHOTOGRAPHERS: [Photographer; 10] = [
    photographer("hanna-bjork", "Hanna", "Björk", "F", "c1", "Stockholm", true),
    photographer("klara-fors", "Klara", "Fors", "F", "c2", "Göteborg", false),
    photographer("ida-holmgren", "Ida", "Holmgren", "F", "c3", "Malmö", true),
    photographer("tove-lund", "Tove", "Lund", "F", "c4", "Uppsala", true),
    photographer("sara-engstrom", "Sara", "Engström", "F", "c5", "Västerås", false),
    photographer("johan-lindahl", "Johan", "Lindahl", "M", "c6", "Örebro", true),
    photographer("erik-nyberg", "Erik", "Nyberg", "M", "c7", "Linköping", true),
    photographer("mattias-berg", "Mattias", "Berg", "M", "c8", "Helsingborg", false),
    photographer("daniel-soder", "Daniel", "Söder", "M", "c9", "Jönköping", true),
    photographer("per-hedman", "Per", "Hedman", "M", "c10", "Norrköping", true),
];

/// Hard 1:1 rider ↔ primary horse table; read in both directions
pub static RIDER_PRIMARY_HORSE: [RiderHorse; 10] = [
    RiderHorse { rider_id: "r1", horse_id: "h9" },
    RiderHorse { rider_id: "r2", horse_id: "h4" },
    RiderHorse { rider_id: "r3", horse_id: "h8" },
    RiderHorse { rider_id: "r4", horse_id: "h1" },
    RiderHorse { rider_id: "r5", horse_id: "h10" },
    RiderHorse { rider_id: "r6", horse_id: "h2" },
    RiderHorse { rider_id: "r7", horse_id: "h6" },
    RiderHorse { rider_id: "r8", horse_id: "h7" },
    RiderHorse { rider_id: "r9", horse_id: "h5" },
    RiderHorse { rider_id: "r10", horse_id: "h3" },
];

pub static DUMMY_EVENTS: [DummyEvent; 3] = [
    DummyEvent { id: "d1", name: "Club Series" },
    DummyEvent { id: "d2", name: "Indoor Tour" },
    DummyEvent { id: "d3", name: "Weekend Cup" },
];

/// Cover image, logo and listed photo count per competition
pub struct EventAssets {
    pub event_id: &'static str,
    pub cover: &'static str,
    pub logo: &'static str,
    pub count: u32,
}

pub static EVENT_ASSETS: [EventAssets; 10] = [
    EventAssets { event_id: "c1", cover: "/images/Abdel_Said_Arpege_du_RU5978.jpg", logo: "/images/Sweden International Horse Show.jpg", count: 145 },
    EventAssets { event_id: "c2", cover: "/images/Alice_Nilsson_Eunomia8286.jpg", logo: "/images/Gothenburg Indoor Masters.jpg", count: 192 },
    EventAssets { event_id: "c3", cover: "/images/Falsterbo7800.jpg", logo: "/images/Falsterbo Summer Classic.jpg", count: 168 },
    EventAssets { event_id: "c4", cover: "/images/Peder_Fredricson_Alcapone_des_Carmille8136.jpg", logo: "/images/Strömsholm Spring Dressage.jpg", count: 156 },
    EventAssets { event_id: "c5", cover: "/images/Anna_Svanberg_Vidar9116.jpg", logo: "/images/Uppsala Arena Cup.jpg", count: 130 },
    EventAssets { event_id: "c6", cover: "/images/Fredrik_Spetz_Galactee_de_Tivoli8292.jpg", logo: "/images/Malmö City Jumping.jpg", count: 120 },
    EventAssets { event_id: "c7", cover: "/images/Alma_Nilsson_Sall_Kilimanjaro_WV7865.jpg", logo: "/images/Linköping Eventing Weekend.jpg", count: 175 },
    EventAssets { event_id: "c8", cover: "/images/Felicia_Hultberg_Bollerup_Chiquelle8407.jpg", logo: "/images/Örebro Autumn Cup.jpg", count: 90 },
    EventAssets { event_id: "c9", cover: "/images/Amanda_Landeblad_Joelina6763.jpg", logo: "/images/Umeå Northern Lights Dressage.jpg", count: 180 },
    EventAssets { event_id: "c10", cover: "/images/Carl-Walter_Fox_Eka_First_Navy_Jack8998.jpg", logo: "/images/Jönköping Lake District Classic.jpg", count: 110 },
];

/// Venue and organising club pairs used for meeting headers
pub static VENUES: [(&str, &str); 5] = [
    ("Friends Arena Showground", "Stockholms Fältrittklubb"),
    ("Scandinavium Arena", "Gothenburg Horse Club"),
    ("Falsterbo Horse Show Arena", "Falsterbo Horse Club"),
    ("Strömsholm Castle Park", "Strömsholm Riding Association"),
    ("Flyinge Kungsgård", "Flyinge Riding Club"),
];

pub static ARENA_NAMES: [&str; 4] = ["Main Arena", "International Ring", "Showground A", "Grand Hall"];

pub static CLASS_HEIGHTS: [&str; 6] = ["1.10m", "1.15m", "1.20m", "1.30m", "1.40m", "Grand Prix 1.50m"];

/// Image files served under `/images/`
pub static PHOTO_FILES: [&str; 41] = [
    "Abdel_Said_Arpege_du_RU5978.jpg",
    "Alice_Nilsson_Eunomia8286.jpg",
    "Alicia_Svensson_Filourado_PS8003.jpg",
    "Alma_Nilsson_Sall_Kilimanjaro_WV7865.jpg",
    "Amanda_Landeblad_Joelina6763.jpg",
    "Amanda_Landeblad_Little_Clara9952.jpg",
    "Amanda_Thagesson_Hop_Living8848.jpg",
    "Anna_Svanberg_Vidar9116.jpg",
    "Annie_Hjerten_Clementine_PJ9738.jpg",
    "Astrid_Lund_Wisholm_Kastanjelunds_Rainbow8397.jpg",
    "Ayleen_Ejderland_Fan_Byarah8230.jpg",
    "Carl-Walter_Fox_Eka_First_Navy_Jack8998.jpg",
    "Cathrine_Laudrup-Dufour_Mount_St_John_Freestyle7222.jpg",
    "Cathrine_Laudrup-Dufour_Mount_St_John_Freestyle7225.jpg",
    "DSC_8370.jpg",
    "Dorothee_Schneider_First_Romance_27059.jpg",
    "Ella_Lofqvist_Linus8899.jpg",
    "Falsterbo7800.jpg",
    "Felicia_Hultberg_Bollerup_Chiquelle8407.jpg",
    "Filippa_Skogstrom_Melvin_D7871.jpg",
    "Fredrik_Spetz_Galactee_de_Tivoli8292.jpg",
    "Hannes_Ahlmann_Coquetto6713.jpg",
    "Harrie_Smolders_Ecclestone_Z6875.jpg",
    "Harrie_Smolders_Kaspar_R5870.jpg",
    "Henrik_von_Eckermann_Minute_Man8186.jpg",
    "Ida_Kuchenmeistern_Nordenberg_Qorruption9047.jpg",
    "Jenny_Krogsaeter_Quana_Van_Klapscheut8330.jpg",
    "Jens_Fredricson_Diarado_s_Rose_Elith6554.jpg",
    "Kim_Emmen_Nimrod_Dmh6923.jpg",
    "Linda_Heed_Skylander_VS6604.jpg",
    "Linnea_Nord_Major_Dice9747.jpg",
    "Marcus_Westergren_Qualando_de_Caramel9946.jpg",
    "Maria_von_Essen_Invoice7241.jpg",
    "Max_Kuhner_Nouri_W6680.jpg",
    "Nicole_Holmen_Bollerup_Big_Bang9527.jpg",
    "Peder_Fredricson_Alcapone_des_Carmille8136.jpg",
    "Peder_Fredricson_Iggy9507.jpg",
    "Peder_Fredricson_Qurious_HS9235.jpg",
    "Philip_Svitzer_Alida_Nike9979.jpg",
    "Trevor_Breen_Konrad_Obolensky8300.jpg",
    "Viktor_Edvinsson_Ada_Race6935.jpg",
];

/// Image used for freshly uploaded workspace photos
pub const UPLOAD_PLACEHOLDER_URL: &str =
    "https://images.unsplash.com/photo-1599056377758-4808a7e70337?auto=format&fit=crop&q=80&w=600";
