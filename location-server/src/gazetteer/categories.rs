//! Curated search categories.
//!
//! Each category expands to a fixed list of literal place names that are
//! geocoded one by one; see `search::category`.

/// A named class of places and the queries that enumerate it.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCategory {
    pub id: &'static str,
    pub name: &'static str,
    /// Literal place names, in priority order.
    pub search_queries: &'static [&'static str],
    /// Provider type filters for the most specific strategy.
    pub types: &'static [&'static str],
    pub description: &'static str,
}

/// Look up a category by id.
pub fn find(id: &str) -> Option<&'static SearchCategory> {
    CATEGORIES.iter().find(|c| c.id == id)
}

pub static CATEGORIES: &[SearchCategory] = &[
    SearchCategory {
        id: "airports",
        name: "Airports",
        search_queries: &[
            "Heathrow Airport",
            "Gatwick Airport",
            "Stansted Airport",
            "Luton Airport",
            "London City Airport",
            "London Southend Airport",
            "Manchester Airport",
            "Birmingham Airport",
            "Edinburgh Airport",
            "Glasgow Airport",
            "Bristol Airport",
            "Liverpool John Lennon Airport",
            "Newcastle Airport",
            "East Midlands Airport",
            "Leeds Bradford Airport",
            "Belfast International Airport",
            "George Best Belfast City Airport",
            "Aberdeen Airport",
            "Cardiff Airport",
            "Southampton Airport",
            "Exeter Airport",
            "Inverness Airport",
        ],
        types: &["poi"],
        description: "Major UK passenger airports",
    },
    SearchCategory {
        id: "train_stations",
        name: "Train Stations",
        search_queries: &[
            "King's Cross Station",
            "St Pancras International",
            "Paddington Station",
            "Euston Station",
            "Waterloo Station",
            "Victoria Station London",
            "Liverpool Street Station",
            "London Bridge Station",
            "Marylebone Station",
            "Charing Cross Station",
            "Cannon Street Station",
            "Fenchurch Street Station",
            "Clapham Junction",
            "Stratford Station",
            "Manchester Piccadilly",
            "Birmingham New Street",
            "Edinburgh Waverley",
            "Glasgow Central",
            "Leeds Station",
            "York Station",
            "Bristol Temple Meads",
            "Reading Station",
            "Liverpool Lime Street",
            "Newcastle Central Station",
            "Cardiff Central",
        ],
        types: &["poi"],
        description: "Mainline railway stations and London termini",
    },
    SearchCategory {
        id: "landmarks",
        name: "Landmarks",
        search_queries: &[
            "Buckingham Palace",
            "Tower of London",
            "Tower Bridge",
            "Big Ben",
            "Westminster Abbey",
            "London Eye",
            "St Paul's Cathedral",
            "Trafalgar Square",
            "British Museum",
            "Natural History Museum",
            "Hyde Park",
            "Piccadilly Circus",
            "Covent Garden",
            "The Shard",
            "Kensington Palace",
            "Windsor Castle",
            "Stonehenge",
            "Edinburgh Castle",
            "Roman Baths",
            "Royal Albert Hall",
        ],
        types: &["poi"],
        description: "Famous sights and tourist attractions",
    },
    SearchCategory {
        id: "hotels",
        name: "Hotels",
        search_queries: &[
            "The Savoy London",
            "The Ritz London",
            "The Dorchester",
            "Claridge's",
            "The Langham London",
            "Shangri-La The Shard",
            "St Pancras Renaissance Hotel",
            "Hilton London Heathrow Airport",
            "Sofitel London Gatwick",
            "Premier Inn London County Hall",
            "Park Plaza Westminster Bridge",
            "The Midland Manchester",
            "The Balmoral Edinburgh",
        ],
        types: &["poi"],
        description: "Well-known hotels, including airport hotels",
    },
    SearchCategory {
        id: "hospitals",
        name: "Hospitals",
        search_queries: &[
            "St Thomas' Hospital",
            "Guy's Hospital",
            "King's College Hospital",
            "Royal London Hospital",
            "St Mary's Hospital Paddington",
            "University College Hospital",
            "Chelsea and Westminster Hospital",
            "Great Ormond Street Hospital",
            "Manchester Royal Infirmary",
            "Queen Elizabeth Hospital Birmingham",
            "Royal Infirmary of Edinburgh",
        ],
        types: &["poi"],
        description: "Major hospitals with patient drop-off",
    },
    SearchCategory {
        id: "universities",
        name: "Universities",
        search_queries: &[
            "University College London",
            "Imperial College London",
            "King's College London",
            "London School of Economics",
            "University of Oxford",
            "University of Cambridge",
            "University of Manchester",
            "University of Birmingham",
            "University of Edinburgh",
            "University of Bristol",
            "University of Leeds",
        ],
        types: &["poi"],
        description: "University campuses",
    },
    SearchCategory {
        id: "shopping",
        name: "Shopping Centres",
        search_queries: &[
            "Westfield London",
            "Westfield Stratford City",
            "Oxford Street",
            "Harrods",
            "Bluewater Shopping Centre",
            "Lakeside Shopping Centre",
            "Brent Cross Shopping Centre",
            "Trafford Centre",
            "Bullring Birmingham",
            "Meadowhall",
        ],
        types: &["poi"],
        description: "Shopping centres and retail destinations",
    },
    SearchCategory {
        id: "stadiums",
        name: "Stadiums & Arenas",
        search_queries: &[
            "Wembley Stadium",
            "Emirates Stadium",
            "Tottenham Hotspur Stadium",
            "Stamford Bridge",
            "London Stadium",
            "Twickenham Stadium",
            "Lord's Cricket Ground",
            "The O2 Arena",
            "Old Trafford",
            "Etihad Stadium",
            "Anfield",
            "Murrayfield Stadium",
            "Principality Stadium",
        ],
        types: &["poi"],
        description: "Sports stadiums and concert arenas",
    },
];
