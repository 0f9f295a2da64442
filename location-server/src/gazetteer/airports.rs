//! UK airports and their passenger terminals.

use crate::domain::{Coordinates, REGION};

use super::{GazetteerEntry, GazetteerTerminal as T, LocationKind};

const HEATHROW_TERMINALS: &[T] = &[
    T::terminal("heathrow-terminal-2", "Terminal 2", 51.4694, -0.4503, Some("The Queen's Terminal"), "heathrow-airport"),
    T::terminal("heathrow-terminal-3", "Terminal 3", 51.4713, -0.4566, None, "heathrow-airport"),
    T::terminal("heathrow-terminal-4", "Terminal 4", 51.4598, -0.4462, None, "heathrow-airport"),
    T::terminal("heathrow-terminal-5", "Terminal 5", 51.4723, -0.4887, None, "heathrow-airport"),
];

const GATWICK_TERMINALS: &[T] = &[
    T::terminal("gatwick-north-terminal", "North Terminal", 51.1620, -0.1770, None, "gatwick-airport"),
    T::terminal("gatwick-south-terminal", "South Terminal", 51.1561, -0.1617, Some("Gatwick Airport railway station"), "gatwick-airport"),
];

const STANSTED_TERMINALS: &[T] = &[
    T::terminal("stansted-terminal", "Main Terminal", 51.8894, 0.2613, None, "stansted-airport"),
];

const LUTON_TERMINALS: &[T] = &[
    T::terminal("luton-terminal", "Main Terminal", 51.8790, -0.3762, Some("DART shuttle to Luton Airport Parkway"), "luton-airport"),
];

const LONDON_CITY_TERMINALS: &[T] = &[
    T::terminal("london-city-terminal", "Main Terminal", 51.5036, 0.0553, Some("DLR London City Airport"), "london-city-airport"),
];

const SOUTHEND_TERMINALS: &[T] = &[
    T::terminal("southend-terminal", "Main Terminal", 51.5695, 0.7028, None, "london-southend-airport"),
];

const MANCHESTER_TERMINALS: &[T] = &[
    T::terminal("manchester-terminal-1", "Terminal 1", 53.3650, -2.2730, None, "manchester-airport"),
    T::terminal("manchester-terminal-2", "Terminal 2", 53.3669, -2.2700, None, "manchester-airport"),
    T::terminal("manchester-terminal-3", "Terminal 3", 53.3625, -2.2732, None, "manchester-airport"),
];

const BIRMINGHAM_TERMINALS: &[T] = &[
    T::terminal("birmingham-terminal", "Main Terminal", 52.4524, -1.7333, Some("Air-Rail Link to Birmingham International"), "birmingham-airport"),
];

const EDINBURGH_TERMINALS: &[T] = &[
    T::terminal("edinburgh-terminal", "Main Terminal", 55.9486, -3.3644, Some("Edinburgh Trams stop"), "edinburgh-airport"),
];

const GLASGOW_TERMINALS: &[T] = &[
    T::terminal("glasgow-terminal", "Main Terminal", 55.8691, -4.4336, None, "glasgow-airport"),
];

const BRISTOL_TERMINALS: &[T] = &[
    T::terminal("bristol-terminal", "Main Terminal", 51.3868, -2.7109, None, "bristol-airport"),
];

const LIVERPOOL_TERMINALS: &[T] = &[
    T::terminal("liverpool-terminal", "Main Terminal", 53.3338, -2.8560, None, "liverpool-airport"),
];

const NEWCASTLE_TERMINALS: &[T] = &[
    T::terminal("newcastle-terminal", "Main Terminal", 55.0380, -1.6911, Some("Tyne and Wear Metro Airport station"), "newcastle-airport"),
];

const EAST_MIDLANDS_TERMINALS: &[T] = &[
    T::terminal("east-midlands-terminal", "Main Terminal", 52.8298, -1.3285, None, "east-midlands-airport"),
];

const LEEDS_BRADFORD_TERMINALS: &[T] = &[
    T::terminal("leeds-bradford-terminal", "Main Terminal", 53.8669, -1.6580, None, "leeds-bradford-airport"),
];

const BELFAST_INTERNATIONAL_TERMINALS: &[T] = &[
    T::terminal("belfast-international-terminal", "Main Terminal", 54.6573, -6.2167, None, "belfast-international-airport"),
];

const ABERDEEN_TERMINALS: &[T] = &[
    T::terminal("aberdeen-terminal", "Main Terminal", 57.2027, -2.2000, None, "aberdeen-airport"),
];

const CARDIFF_TERMINALS: &[T] = &[
    T::terminal("cardiff-terminal", "Main Terminal", 51.3985, -3.3396, None, "cardiff-airport"),
];

/// Airports, largest first.
pub static AIRPORTS: &[GazetteerEntry] = &[
    GazetteerEntry {
        id: "heathrow-airport",
        name: "Heathrow",
        full_name: "London Heathrow Airport",
        kind: LocationKind::Airport,
        coordinates: Coordinates::new(51.4700, -0.4543),
        address: "Hounslow TW6 1EW",
        city: "London",
        region: REGION,
        postcode: Some("TW6 1EW"),
        terminals: HEATHROW_TERMINALS,
    },
    GazetteerEntry {
        id: "gatwick-airport",
        name: "Gatwick",
        full_name: "London Gatwick Airport",
        kind: LocationKind::Airport,
        coordinates: Coordinates::new(51.1537, -0.1821),
        address: "Horley, Gatwick RH6 0NP",
        city: "Crawley",
        region: REGION,
        postcode: Some("RH6 0NP"),
        terminals: GATWICK_TERMINALS,
    },
    GazetteerEntry {
        id: "manchester-airport",
        name: "Manchester Airport",
        full_name: "Manchester Airport",
        kind: LocationKind::Airport,
        coordinates: Coordinates::new(53.3588, -2.2727),
        address: "Manchester M90 1QX",
        city: "Manchester",
        region: REGION,
        postcode: Some("M90 1QX"),
        terminals: MANCHESTER_TERMINALS,
    },
    GazetteerEntry {
        id: "stansted-airport",
        name: "Stansted",
        full_name: "London Stansted Airport",
        kind: LocationKind::Airport,
        coordinates: Coordinates::new(51.8860, 0.2389),
        address: "Bassingbourn Road, Stansted CM24 1QW",
        city: "Stansted",
        region: REGION,
        postcode: Some("CM24 1QW"),
        terminals: STANSTED_TERMINALS,
    },
    GazetteerEntry {
        id: "luton-airport",
        name: "Luton",
        full_name: "London Luton Airport",
        kind: LocationKind::Airport,
        coordinates: Coordinates::new(51.8747, -0.3683),
        address: "Airport Way, Luton LU2 9LY",
        city: "Luton",
        region: REGION,
        postcode: Some("LU2 9LY"),
        terminals: LUTON_TERMINALS,
    },
    GazetteerEntry {
        id: "edinburgh-airport",
        name: "Edinburgh Airport",
        full_name: "Edinburgh Airport",
        kind: LocationKind::Airport,
        coordinates: Coordinates::new(55.9508, -3.3615),
        address: "Edinburgh EH12 9DN",
        city: "Edinburgh",
        region: REGION,
        postcode: Some("EH12 9DN"),
        terminals: EDINBURGH_TERMINALS,
    },
    GazetteerEntry {
        id: "birmingham-airport",
        name: "Birmingham Airport",
        full_name: "Birmingham Airport",
        kind: LocationKind::Airport,
        coordinates: Coordinates::new(52.4539, -1.7480),
        address: "Birmingham B26 3QJ",
        city: "Birmingham",
        region: REGION,
        postcode: Some("B26 3QJ"),
        terminals: BIRMINGHAM_TERMINALS,
    },
    GazetteerEntry {
        id: "glasgow-airport",
        name: "Glasgow Airport",
        full_name: "Glasgow Airport",
        kind: LocationKind::Airport,
        coordinates: Coordinates::new(55.8642, -4.4331),
        address: "Paisley PA3 2SW",
        city: "Glasgow",
        region: REGION,
        postcode: Some("PA3 2SW"),
        terminals: GLASGOW_TERMINALS,
    },
    GazetteerEntry {
        id: "bristol-airport",
        name: "Bristol Airport",
        full_name: "Bristol Airport",
        kind: LocationKind::Airport,
        coordinates: Coordinates::new(51.3827, -2.7191),
        address: "Lulsgate Bottom, Bristol BS48 3DY",
        city: "Bristol",
        region: REGION,
        postcode: Some("BS48 3DY"),
        terminals: BRISTOL_TERMINALS,
    },
    GazetteerEntry {
        id: "london-city-airport",
        name: "London City",
        full_name: "London City Airport",
        kind: LocationKind::Airport,
        coordinates: Coordinates::new(51.5048, 0.0495),
        address: "Hartmann Road, London E16 2PX",
        city: "London",
        region: REGION,
        postcode: Some("E16 2PX"),
        terminals: LONDON_CITY_TERMINALS,
    },
    GazetteerEntry {
        id: "liverpool-airport",
        name: "Liverpool John Lennon",
        full_name: "Liverpool John Lennon Airport",
        kind: LocationKind::Airport,
        coordinates: Coordinates::new(53.3336, -2.8497),
        address: "Speke Hall Avenue, Liverpool L24 1YD",
        city: "Liverpool",
        region: REGION,
        postcode: Some("L24 1YD"),
        terminals: LIVERPOOL_TERMINALS,
    },
    GazetteerEntry {
        id: "newcastle-airport",
        name: "Newcastle Airport",
        full_name: "Newcastle International Airport",
        kind: LocationKind::Airport,
        coordinates: Coordinates::new(55.0375, -1.6917),
        address: "Woolsington, Newcastle upon Tyne NE13 8BZ",
        city: "Newcastle upon Tyne",
        region: REGION,
        postcode: Some("NE13 8BZ"),
        terminals: NEWCASTLE_TERMINALS,
    },
    GazetteerEntry {
        id: "east-midlands-airport",
        name: "East Midlands",
        full_name: "East Midlands Airport",
        kind: LocationKind::Airport,
        coordinates: Coordinates::new(52.8311, -1.3281),
        address: "Castle Donington, Derby DE74 2SA",
        city: "Derby",
        region: REGION,
        postcode: Some("DE74 2SA"),
        terminals: EAST_MIDLANDS_TERMINALS,
    },
    GazetteerEntry {
        id: "leeds-bradford-airport",
        name: "Leeds Bradford",
        full_name: "Leeds Bradford Airport",
        kind: LocationKind::Airport,
        coordinates: Coordinates::new(53.8659, -1.6606),
        address: "Whitehouse Lane, Yeadon, Leeds LS19 7TU",
        city: "Leeds",
        region: REGION,
        postcode: Some("LS19 7TU"),
        terminals: LEEDS_BRADFORD_TERMINALS,
    },
    GazetteerEntry {
        id: "london-southend-airport",
        name: "Southend",
        full_name: "London Southend Airport",
        kind: LocationKind::Airport,
        coordinates: Coordinates::new(51.5714, 0.6956),
        address: "Eastwoodbury Crescent, Southend-on-Sea SS2 6YF",
        city: "Southend-on-Sea",
        region: REGION,
        postcode: Some("SS2 6YF"),
        terminals: SOUTHEND_TERMINALS,
    },
    GazetteerEntry {
        id: "belfast-international-airport",
        name: "Belfast International",
        full_name: "Belfast International Airport",
        kind: LocationKind::Airport,
        coordinates: Coordinates::new(54.6575, -6.2158),
        address: "Airport Road, Belfast BT29 4AB",
        city: "Belfast",
        region: REGION,
        postcode: Some("BT29 4AB"),
        terminals: BELFAST_INTERNATIONAL_TERMINALS,
    },
    GazetteerEntry {
        id: "aberdeen-airport",
        name: "Aberdeen Airport",
        full_name: "Aberdeen International Airport",
        kind: LocationKind::Airport,
        coordinates: Coordinates::new(57.2019, -2.1978),
        address: "Dyce, Aberdeen AB21 7DU",
        city: "Aberdeen",
        region: REGION,
        postcode: Some("AB21 7DU"),
        terminals: ABERDEEN_TERMINALS,
    },
    GazetteerEntry {
        id: "cardiff-airport",
        name: "Cardiff Airport",
        full_name: "Cardiff Airport",
        kind: LocationKind::Airport,
        coordinates: Coordinates::new(51.3967, -3.3433),
        address: "Rhoose, Vale of Glamorgan CF62 3BD",
        city: "Cardiff",
        region: REGION,
        postcode: Some("CF62 3BD"),
        terminals: CARDIFF_TERMINALS,
    },
    // Business aviation only; no passenger terminals are listed.
    GazetteerEntry {
        id: "farnborough-airport",
        name: "Farnborough Airport",
        full_name: "Farnborough Airport",
        kind: LocationKind::Airport,
        coordinates: Coordinates::new(51.2758, -0.7763),
        address: "Farnborough GU14 6XA",
        city: "Farnborough",
        region: REGION,
        postcode: Some("GU14 6XA"),
        terminals: &[],
    },
];
