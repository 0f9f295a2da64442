//! Major UK railway stations and their platforms.

use crate::domain::{Coordinates, REGION};

use super::{GazetteerEntry, GazetteerTerminal as P, LocationKind};

const KINGS_CROSS_PLATFORMS: &[P] = &[
    P::platform("kings-cross-platform-0", "Platform 0", 51.5316, -0.1236, None, "kings-cross-station"),
    P::platform("kings-cross-platforms-1-8", "Platforms 1-8", 51.5323, -0.1231, Some("Main train shed"), "kings-cross-station"),
    P::platform("kings-cross-platforms-9-11", "Platforms 9-11", 51.5329, -0.1243, Some("Western range, suburban services"), "kings-cross-station"),
];

const ST_PANCRAS_PLATFORMS: &[P] = &[
    P::platform("st-pancras-platforms-1-4", "Platforms 1-4", 51.5309, -0.1257, Some("East Midlands Railway"), "st-pancras-station"),
    P::platform("st-pancras-platforms-5-10", "Platforms 5-10", 51.5322, -0.1265, Some("Eurostar international departures"), "st-pancras-station"),
    P::platform("st-pancras-platforms-11-13", "Platforms 11-13", 51.5318, -0.1270, Some("Southeastern high speed"), "st-pancras-station"),
    P::platform("st-pancras-platforms-a-b", "Platforms A-B", 51.5300, -0.1262, Some("Thameslink, lower level"), "st-pancras-station"),
];

const PADDINGTON_PLATFORMS: &[P] = &[
    P::platform("paddington-platforms-1-8", "Platforms 1-8", 51.5160, -0.1768, Some("Great Western Railway"), "paddington-station"),
    P::platform("paddington-platforms-6-7", "Platforms 6-7", 51.5157, -0.1762, Some("Heathrow Express"), "paddington-station"),
    P::platform("paddington-platforms-12-14", "Platforms 12-14", 51.5173, -0.1779, Some("Elizabeth line interchange"), "paddington-station"),
    P::platform("paddington-elizabeth-line", "Elizabeth line platforms", 51.5150, -0.1771, None, "paddington-station"),
];

const EUSTON_PLATFORMS: &[P] = &[
    P::platform("euston-platforms-1-7", "Platforms 1-7", 51.5286, -0.1328, None, "euston-station"),
    P::platform("euston-platforms-8-11", "Platforms 8-11", 51.5289, -0.1338, None, "euston-station"),
    P::platform("euston-platforms-12-18", "Platforms 12-18", 51.5292, -0.1347, None, "euston-station"),
];

const WATERLOO_PLATFORMS: &[P] = &[
    P::platform("waterloo-platforms-1-4", "Platforms 1-4", 51.5027, -0.1138, Some("Suburban services"), "waterloo-station"),
    P::platform("waterloo-platforms-5-19", "Platforms 5-19", 51.5033, -0.1127, None, "waterloo-station"),
    P::platform("waterloo-platforms-20-24", "Platforms 20-24", 51.5039, -0.1139, Some("Former international terminal"), "waterloo-station"),
];

const VICTORIA_PLATFORMS: &[P] = &[
    P::platform("victoria-platforms-1-8", "Platforms 1-8", 51.4954, -0.1434, Some("South Eastern side"), "victoria-station"),
    P::platform("victoria-platforms-9-19", "Platforms 9-19", 51.4949, -0.1448, Some("Brighton side, Gatwick Express"), "victoria-station"),
];

const LIVERPOOL_STREET_PLATFORMS: &[P] = &[
    P::platform("liverpool-street-platforms-1-10", "Platforms 1-10", 51.5183, -0.0817, None, "liverpool-street-station"),
    P::platform("liverpool-street-platforms-11-18", "Platforms 11-18", 51.5176, -0.0813, Some("Stansted Express"), "liverpool-street-station"),
    P::platform("liverpool-street-elizabeth-line", "Elizabeth line platforms", 51.5177, -0.0837, None, "liverpool-street-station"),
];

const LONDON_BRIDGE_PLATFORMS: &[P] = &[
    P::platform("london-bridge-platforms-1-6", "Platforms 1-6", 51.5052, -0.0855, Some("Through platforms to Cannon Street"), "london-bridge-station"),
    P::platform("london-bridge-platforms-7-9", "Platforms 7-9", 51.5049, -0.0862, Some("Thameslink"), "london-bridge-station"),
    P::platform("london-bridge-platforms-10-15", "Platforms 10-15", 51.5042, -0.0867, Some("Terminating platforms"), "london-bridge-station"),
];

const MANCHESTER_PICCADILLY_PLATFORMS: &[P] = &[
    P::platform("manchester-piccadilly-platforms-1-12", "Platforms 1-12", 53.4772, -2.2300, None, "manchester-piccadilly-station"),
    P::platform("manchester-piccadilly-platforms-13-14", "Platforms 13-14", 53.4767, -2.2322, Some("Through platforms"), "manchester-piccadilly-station"),
];

const BIRMINGHAM_NEW_STREET_PLATFORMS: &[P] = &[
    P::platform("birmingham-new-street-platforms-1-6", "Platforms 1-6", 52.4776, -1.8996, None, "birmingham-new-street-station"),
    P::platform("birmingham-new-street-platforms-7-12", "Platforms 7-12", 52.4780, -1.8984, None, "birmingham-new-street-station"),
];

const EDINBURGH_WAVERLEY_PLATFORMS: &[P] = &[
    P::platform("edinburgh-waverley-platforms-1-11", "Platforms 1-11", 55.9518, -3.1893, Some("East end"), "edinburgh-waverley-station"),
    P::platform("edinburgh-waverley-platforms-12-20", "Platforms 12-20", 55.9521, -3.1912, Some("West end"), "edinburgh-waverley-station"),
];

const GLASGOW_CENTRAL_PLATFORMS: &[P] = &[
    P::platform("glasgow-central-platforms-1-15", "Platforms 1-15", 55.8592, -4.2580, Some("High level"), "glasgow-central-station"),
    P::platform("glasgow-central-low-level", "Platforms 16-17", 55.8587, -4.2574, Some("Low level"), "glasgow-central-station"),
];

const LEEDS_PLATFORMS: &[P] = &[
    P::platform("leeds-platforms-1-8", "Platforms 1-8", 53.7948, -1.5470, None, "leeds-station"),
    P::platform("leeds-platforms-9-17", "Platforms 9-17", 53.7953, -1.5485, None, "leeds-station"),
];

const YORK_PLATFORMS: &[P] = &[
    P::platform("york-platforms-1-4", "Platforms 1-4", 53.9578, -1.0925, None, "york-station"),
    P::platform("york-platforms-5-11", "Platforms 5-11", 53.9583, -1.0940, None, "york-station"),
];

const BRISTOL_TEMPLE_MEADS_PLATFORMS: &[P] = &[
    P::platform("bristol-temple-meads-platforms-1-6", "Platforms 1-6", 51.4489, -2.5808, None, "bristol-temple-meads-station"),
    P::platform("bristol-temple-meads-platforms-7-15", "Platforms 7-15", 51.4494, -2.5818, None, "bristol-temple-meads-station"),
];

const READING_PLATFORMS: &[P] = &[
    P::platform("reading-platforms-4-6", "Platforms 4-6", 51.4582, -0.9722, Some("Terminating platforms for Waterloo"), "reading-station"),
    P::platform("reading-platforms-7-15", "Platforms 7-15", 51.4590, -0.9710, None, "reading-station"),
];

/// Stations, London termini first.
pub static STATIONS: &[GazetteerEntry] = &[
    GazetteerEntry {
        id: "kings-cross-station",
        name: "King's Cross",
        full_name: "London King's Cross",
        kind: LocationKind::Station,
        coordinates: Coordinates::new(51.5320, -0.1233),
        address: "Euston Road, London N1 9AL",
        city: "London",
        region: REGION,
        postcode: Some("N1 9AL"),
        terminals: KINGS_CROSS_PLATFORMS,
    },
    GazetteerEntry {
        id: "st-pancras-station",
        name: "St Pancras",
        full_name: "London St Pancras International",
        kind: LocationKind::Station,
        coordinates: Coordinates::new(51.5317, -0.1263),
        address: "Euston Road, London N1C 4QP",
        city: "London",
        region: REGION,
        postcode: Some("N1C 4QP"),
        terminals: ST_PANCRAS_PLATFORMS,
    },
    GazetteerEntry {
        id: "paddington-station",
        name: "Paddington",
        full_name: "London Paddington",
        kind: LocationKind::Station,
        coordinates: Coordinates::new(51.5154, -0.1755),
        address: "Praed Street, London W2 1HQ",
        city: "London",
        region: REGION,
        postcode: Some("W2 1HQ"),
        terminals: PADDINGTON_PLATFORMS,
    },
    GazetteerEntry {
        id: "euston-station",
        name: "Euston",
        full_name: "London Euston",
        kind: LocationKind::Station,
        coordinates: Coordinates::new(51.5282, -0.1337),
        address: "Euston Road, London NW1 2RT",
        city: "London",
        region: REGION,
        postcode: Some("NW1 2RT"),
        terminals: EUSTON_PLATFORMS,
    },
    GazetteerEntry {
        id: "waterloo-station",
        name: "Waterloo",
        full_name: "London Waterloo",
        kind: LocationKind::Station,
        coordinates: Coordinates::new(51.5031, -0.1132),
        address: "Waterloo Road, London SE1 8SW",
        city: "London",
        region: REGION,
        postcode: Some("SE1 8SW"),
        terminals: WATERLOO_PLATFORMS,
    },
    GazetteerEntry {
        id: "victoria-station",
        name: "Victoria",
        full_name: "London Victoria",
        kind: LocationKind::Station,
        coordinates: Coordinates::new(51.4952, -0.1441),
        address: "Victoria Street, London SW1V 1JU",
        city: "London",
        region: REGION,
        postcode: Some("SW1V 1JU"),
        terminals: VICTORIA_PLATFORMS,
    },
    GazetteerEntry {
        id: "liverpool-street-station",
        name: "Liverpool Street",
        full_name: "London Liverpool Street",
        kind: LocationKind::Station,
        coordinates: Coordinates::new(51.5179, -0.0823),
        address: "Liverpool Street, London EC2M 7PY",
        city: "London",
        region: REGION,
        postcode: Some("EC2M 7PY"),
        terminals: LIVERPOOL_STREET_PLATFORMS,
    },
    GazetteerEntry {
        id: "london-bridge-station",
        name: "London Bridge",
        full_name: "London Bridge Station",
        kind: LocationKind::Station,
        coordinates: Coordinates::new(51.5048, -0.0863),
        address: "Tooley Street, London SE1 9SP",
        city: "London",
        region: REGION,
        postcode: Some("SE1 9SP"),
        terminals: LONDON_BRIDGE_PLATFORMS,
    },
    GazetteerEntry {
        id: "manchester-piccadilly-station",
        name: "Manchester Piccadilly",
        full_name: "Manchester Piccadilly Station",
        kind: LocationKind::Station,
        coordinates: Coordinates::new(53.4774, -2.2309),
        address: "Piccadilly, Manchester M60 7RA",
        city: "Manchester",
        region: REGION,
        postcode: Some("M60 7RA"),
        terminals: MANCHESTER_PICCADILLY_PLATFORMS,
    },
    GazetteerEntry {
        id: "birmingham-new-street-station",
        name: "Birmingham New Street",
        full_name: "Birmingham New Street Station",
        kind: LocationKind::Station,
        coordinates: Coordinates::new(52.4778, -1.8990),
        address: "Station Street, Birmingham B2 4QA",
        city: "Birmingham",
        region: REGION,
        postcode: Some("B2 4QA"),
        terminals: BIRMINGHAM_NEW_STREET_PLATFORMS,
    },
    GazetteerEntry {
        id: "edinburgh-waverley-station",
        name: "Edinburgh Waverley",
        full_name: "Edinburgh Waverley Station",
        kind: LocationKind::Station,
        coordinates: Coordinates::new(55.9520, -3.1900),
        address: "Waverley Bridge, Edinburgh EH1 1BB",
        city: "Edinburgh",
        region: REGION,
        postcode: Some("EH1 1BB"),
        terminals: EDINBURGH_WAVERLEY_PLATFORMS,
    },
    GazetteerEntry {
        id: "glasgow-central-station",
        name: "Glasgow Central",
        full_name: "Glasgow Central Station",
        kind: LocationKind::Station,
        coordinates: Coordinates::new(55.8590, -4.2577),
        address: "Gordon Street, Glasgow G1 3SL",
        city: "Glasgow",
        region: REGION,
        postcode: Some("G1 3SL"),
        terminals: GLASGOW_CENTRAL_PLATFORMS,
    },
    GazetteerEntry {
        id: "leeds-station",
        name: "Leeds",
        full_name: "Leeds Station",
        kind: LocationKind::Station,
        coordinates: Coordinates::new(53.7950, -1.5477),
        address: "New Station Street, Leeds LS1 4DY",
        city: "Leeds",
        region: REGION,
        postcode: Some("LS1 4DY"),
        terminals: LEEDS_PLATFORMS,
    },
    GazetteerEntry {
        id: "york-station",
        name: "York",
        full_name: "York Station",
        kind: LocationKind::Station,
        coordinates: Coordinates::new(53.9580, -1.0933),
        address: "Station Road, York YO24 1AB",
        city: "York",
        region: REGION,
        postcode: Some("YO24 1AB"),
        terminals: YORK_PLATFORMS,
    },
    GazetteerEntry {
        id: "bristol-temple-meads-station",
        name: "Bristol Temple Meads",
        full_name: "Bristol Temple Meads Station",
        kind: LocationKind::Station,
        coordinates: Coordinates::new(51.4491, -2.5813),
        address: "Temple Gate, Bristol BS1 6QF",
        city: "Bristol",
        region: REGION,
        postcode: Some("BS1 6QF"),
        terminals: BRISTOL_TEMPLE_MEADS_PLATFORMS,
    },
    GazetteerEntry {
        id: "reading-station",
        name: "Reading",
        full_name: "Reading Station",
        kind: LocationKind::Station,
        coordinates: Coordinates::new(51.4587, -0.9718),
        address: "Station Hill, Reading RG1 1LZ",
        city: "Reading",
        region: REGION,
        postcode: Some("RG1 1LZ"),
        terminals: READING_PLATFORMS,
    },
    GazetteerEntry {
        id: "stratford-international-station",
        name: "Stratford International",
        full_name: "Stratford International Station",
        kind: LocationKind::Station,
        coordinates: Coordinates::new(51.5448, -0.0088),
        address: "International Way, London E20 1YY",
        city: "London",
        region: REGION,
        postcode: Some("E20 1YY"),
        terminals: &[],
    },
];
