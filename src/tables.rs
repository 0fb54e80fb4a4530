// Fixed lookup tables used by the field parsers.
//
// The keyword rule lists are ordered, and the order is part of the parsing
// contract: matching is first-match-wins, so a specific token ("citation",
// "dhc-6", "an-24") has to sit in front of the generic token it is a
// substring or sibling of ("cessna", "de havilland", "an-2").
use crate::types::AircraftCategory;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

pub static US_STATES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "Alabama",
        "Alaska",
        "Arizona",
        "Arkansas",
        "California",
        "Colorado",
        "Connecticut",
        "Delaware",
        "Florida",
        "Georgia",
        "Hawaii",
        "Idaho",
        "Illinois",
        "Indiana",
        "Iowa",
        "Kansas",
        "Kentucky",
        "Louisiana",
        "Maine",
        "Maryland",
        "Massachusetts",
        "Michigan",
        "Minnesota",
        "Mississippi",
        "Missouri",
        "Montana",
        "Nebraska",
        "Nevada",
        "New Hampshire",
        "New Jersey",
        "New Mexico",
        "New York",
        "North Carolina",
        "North Dakota",
        "Ohio",
        "Oklahoma",
        "Oregon",
        "Pennsylvania",
        "Rhode Island",
        "South Carolina",
        "South Dakota",
        "Tennessee",
        "Texas",
        "Utah",
        "Vermont",
        "Virginia",
        "Washington",
        "West Virginia",
        "Wisconsin",
        "Wyoming",
    ]
    .into_iter()
    .collect()
});

/// Postal abbreviation -> full state name, so `location_state` ends up with
/// one spelling per state no matter which form the row carried.
pub static US_STATE_ABBREVS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("AL", "Alabama"),
        ("AK", "Alaska"),
        ("AZ", "Arizona"),
        ("AR", "Arkansas"),
        ("CA", "California"),
        ("CO", "Colorado"),
        ("CT", "Connecticut"),
        ("DE", "Delaware"),
        ("FL", "Florida"),
        ("GA", "Georgia"),
        ("HI", "Hawaii"),
        ("ID", "Idaho"),
        ("IL", "Illinois"),
        ("IN", "Indiana"),
        ("IA", "Iowa"),
        ("KS", "Kansas"),
        ("KY", "Kentucky"),
        ("LA", "Louisiana"),
        ("ME", "Maine"),
        ("MD", "Maryland"),
        ("MA", "Massachusetts"),
        ("MI", "Michigan"),
        ("MN", "Minnesota"),
        ("MS", "Mississippi"),
        ("MO", "Missouri"),
        ("MT", "Montana"),
        ("NE", "Nebraska"),
        ("NV", "Nevada"),
        ("NH", "New Hampshire"),
        ("NJ", "New Jersey"),
        ("NM", "New Mexico"),
        ("NY", "New York"),
        ("NC", "North Carolina"),
        ("ND", "North Dakota"),
        ("OH", "Ohio"),
        ("OK", "Oklahoma"),
        ("OR", "Oregon"),
        ("PA", "Pennsylvania"),
        ("RI", "Rhode Island"),
        ("SC", "South Carolina"),
        ("SD", "South Dakota"),
        ("TN", "Tennessee"),
        ("TX", "Texas"),
        ("UT", "Utah"),
        ("VT", "Vermont"),
        ("VA", "Virginia"),
        ("WA", "Washington"),
        ("WV", "West Virginia"),
        ("WI", "Wisconsin"),
        ("WY", "Wyoming"),
    ]
    .into_iter()
    .collect()
});

/// Alias or historical spelling -> canonical country name.
pub static COUNTRY_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("USA", "United States"),
        ("U.S.A.", "United States"),
        ("U.S.", "United States"),
        ("US", "United States"),
        ("United States of America", "United States"),
        ("UK", "United Kingdom"),
        ("England", "United Kingdom"),
        ("Scotland", "United Kingdom"),
        ("Wales", "United Kingdom"),
        ("Northern Ireland", "United Kingdom"),
        ("Soviet Union", "Russia"),
        ("USSR", "Russia"),
        ("U.S.S.R.", "Russia"),
    ]
    .into_iter()
    .collect()
});

/// Canonical country names recognized when deciding whether a location
/// segment is a country.
pub static KNOWN_COUNTRIES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "United States",
        "Canada",
        "Mexico",
        "United Kingdom",
        "Ireland",
        "France",
        "Germany",
        "Belgium",
        "Italy",
        "Spain",
        "Portugal",
        "Netherlands",
        "Switzerland",
        "Austria",
        "Sweden",
        "Norway",
        "Finland",
        "Denmark",
        "Russia",
        "Japan",
        "China",
        "India",
        "Indonesia",
        "Australia",
        "New Zealand",
        "Brazil",
        "Argentina",
        "Chile",
        "Colombia",
        "Peru",
        "South Africa",
    ]
    .into_iter()
    .collect()
});

/// Ordered categorization rules for `aircraft_type`, lowercase token ->
/// category. First match wins.
///
/// Order notes, all load-bearing:
/// - "citation" (Jet) before "cessna" (Piston/Prop)
/// - "comet" (Jet) and "dhc-"/"dash 8" (Turboprop) before "de havilland"
/// - "an-12"/"an-24"/"an-26" (Turboprop) before "an-2" (Piston/Prop)
/// - "jetstream" (Turboprop) before the generic "jet"
/// - "lockheed 10"/"lockheed 14" (Piston/Prop) before "electra" (Turboprop)
/// - "beechcraft 1900" (Turboprop) before "beechcraft"
pub static CATEGORY_RULES: &[(&str, AircraftCategory)] = &[
    ("zeppelin", AircraftCategory::BalloonAirship),
    ("airship", AircraftCategory::BalloonAirship),
    ("dirigible", AircraftCategory::BalloonAirship),
    ("balloon", AircraftCategory::BalloonAirship),
    ("helicopter", AircraftCategory::Helicopter),
    ("sikorsky", AircraftCategory::Helicopter),
    ("mil mi-", AircraftCategory::Helicopter),
    ("kamov", AircraftCategory::Helicopter),
    ("eurocopter", AircraftCategory::Helicopter),
    ("agusta", AircraftCategory::Helicopter),
    ("chinook", AircraftCategory::Helicopter),
    ("robinson r", AircraftCategory::Helicopter),
    ("military", AircraftCategory::Military),
    ("b-17", AircraftCategory::Military),
    ("b-24", AircraftCategory::Military),
    ("b-29", AircraftCategory::Military),
    ("b-52", AircraftCategory::Military),
    ("c-119", AircraftCategory::Military),
    ("c-124", AircraftCategory::Military),
    ("c-130", AircraftCategory::Military),
    ("kc-135", AircraftCategory::Military),
    ("lockheed 10", AircraftCategory::PistonProp),
    ("lockheed 14", AircraftCategory::PistonProp),
    ("viscount", AircraftCategory::Turboprop),
    ("vanguard", AircraftCategory::Turboprop),
    ("electra", AircraftCategory::Turboprop),
    ("atr 42", AircraftCategory::Turboprop),
    ("atr 72", AircraftCategory::Turboprop),
    ("atr-42", AircraftCategory::Turboprop),
    ("atr-72", AircraftCategory::Turboprop),
    ("dash 8", AircraftCategory::Turboprop),
    ("dhc-6", AircraftCategory::Turboprop),
    ("dhc-7", AircraftCategory::Turboprop),
    ("dhc-8", AircraftCategory::Turboprop),
    ("twin otter", AircraftCategory::Turboprop),
    ("f-27", AircraftCategory::Turboprop),
    ("f27", AircraftCategory::Turboprop),
    ("fh-227", AircraftCategory::Turboprop),
    ("hs 748", AircraftCategory::Turboprop),
    ("hs-748", AircraftCategory::Turboprop),
    ("an-12", AircraftCategory::Turboprop),
    ("an-24", AircraftCategory::Turboprop),
    ("an-26", AircraftCategory::Turboprop),
    ("il-18", AircraftCategory::Turboprop),
    ("saab 340", AircraftCategory::Turboprop),
    ("emb-110", AircraftCategory::Turboprop),
    ("bandeirante", AircraftCategory::Turboprop),
    ("beechcraft 1900", AircraftCategory::Turboprop),
    ("convair 580", AircraftCategory::Turboprop),
    ("convair 640", AircraftCategory::Turboprop),
    ("metroliner", AircraftCategory::Turboprop),
    ("jetstream", AircraftCategory::Turboprop),
    ("turboprop", AircraftCategory::Turboprop),
    ("citation", AircraftCategory::Jet),
    ("comet", AircraftCategory::Jet),
    ("boeing 7", AircraftCategory::Jet),
    ("airbus", AircraftCategory::Jet),
    ("dc-8", AircraftCategory::Jet),
    ("dc-9", AircraftCategory::Jet),
    ("dc-10", AircraftCategory::Jet),
    ("md-11", AircraftCategory::Jet),
    ("md-8", AircraftCategory::Jet),
    ("md-9", AircraftCategory::Jet),
    ("caravelle", AircraftCategory::Jet),
    ("concorde", AircraftCategory::Jet),
    ("trident", AircraftCategory::Jet),
    ("bac 1-11", AircraftCategory::Jet),
    ("bac one-eleven", AircraftCategory::Jet),
    ("vc-10", AircraftCategory::Jet),
    ("tu-104", AircraftCategory::Jet),
    ("tu-124", AircraftCategory::Jet),
    ("tu-134", AircraftCategory::Jet),
    ("tu-144", AircraftCategory::Jet),
    ("tu-154", AircraftCategory::Jet),
    ("tu-204", AircraftCategory::Jet),
    ("il-62", AircraftCategory::Jet),
    ("il-76", AircraftCategory::Jet),
    ("il-86", AircraftCategory::Jet),
    ("il-96", AircraftCategory::Jet),
    ("yak-40", AircraftCategory::Jet),
    ("yak-42", AircraftCategory::Jet),
    ("fokker 70", AircraftCategory::Jet),
    ("fokker 100", AircraftCategory::Jet),
    ("f-28", AircraftCategory::Jet),
    ("f28", AircraftCategory::Jet),
    ("erj", AircraftCategory::Jet),
    ("crj", AircraftCategory::Jet),
    ("learjet", AircraftCategory::Jet),
    ("gulfstream", AircraftCategory::Jet),
    ("jet", AircraftCategory::Jet),
    ("cessna", AircraftCategory::PistonProp),
    ("piper", AircraftCategory::PistonProp),
    ("beechcraft", AircraftCategory::PistonProp),
    ("de havilland", AircraftCategory::PistonProp),
    ("dc-3", AircraftCategory::PistonProp),
    ("dc-4", AircraftCategory::PistonProp),
    ("dc-6", AircraftCategory::PistonProp),
    ("dc-7", AircraftCategory::PistonProp),
    ("c-46", AircraftCategory::PistonProp),
    ("c-47", AircraftCategory::PistonProp),
    ("curtiss", AircraftCategory::PistonProp),
    ("constellation", AircraftCategory::PistonProp),
    ("lodestar", AircraftCategory::PistonProp),
    ("junkers", AircraftCategory::PistonProp),
    ("ford tri-motor", AircraftCategory::PistonProp),
    ("tri-motor", AircraftCategory::PistonProp),
    ("stinson", AircraftCategory::PistonProp),
    ("fairchild", AircraftCategory::PistonProp),
    ("an-2", AircraftCategory::PistonProp),
    ("li-2", AircraftCategory::PistonProp),
    ("il-12", AircraftCategory::PistonProp),
    ("il-14", AircraftCategory::PistonProp),
    ("convair 240", AircraftCategory::PistonProp),
    ("convair 340", AircraftCategory::PistonProp),
    ("convair 440", AircraftCategory::PistonProp),
    ("vickers viking", AircraftCategory::PistonProp),
    ("boeing 247", AircraftCategory::PistonProp),
    ("boeing 307", AircraftCategory::PistonProp),
    ("boeing 377", AircraftCategory::PistonProp),
];

/// Ordered phase-of-flight cues scanned against the lowercased summary.
/// "approach" sits in front of "landing" so "crashed on approach while
/// attempting to land" resolves to Approach.
pub static PHASE_RULES: &[(&str, &str)] = &[
    ("taxi", "Taxi"),
    ("takeoff", "Takeoff"),
    ("taking off", "Takeoff"),
    ("take off", "Takeoff"),
    ("climb", "Climb"),
    ("cruise", "Cruise"),
    ("en route", "Cruise"),
    ("enroute", "Cruise"),
    ("descent", "Descent"),
    ("descend", "Descent"),
    ("approach", "Approach"),
    ("landing", "Landing"),
    ("landed", "Landing"),
];

/// Ordered weather cues. "thunderstorm" and "snow" sit in front of the
/// generic "storm"; "freezing rain" in front of "rain".
pub static WEATHER_RULES: &[(&str, &str)] = &[
    ("thunderstorm", "Thunderstorm"),
    ("lightning", "Lightning"),
    ("hurricane", "Hurricane"),
    ("typhoon", "Typhoon"),
    ("blizzard", "Snow"),
    ("snow", "Snow"),
    ("freezing rain", "Icing"),
    ("icing", "Icing"),
    ("iced", "Icing"),
    ("hail", "Hail"),
    ("heavy rain", "Heavy rain"),
    ("rain", "Rain"),
    ("fog", "Fog"),
    ("mist", "Fog"),
    ("wind shear", "Wind shear"),
    ("windshear", "Wind shear"),
    ("microburst", "Wind shear"),
    ("turbulence", "Turbulence"),
    ("poor visibility", "Low visibility"),
    ("low visibility", "Low visibility"),
    ("reduced visibility", "Low visibility"),
    ("storm", "Storm"),
    ("clear skies", "Clear"),
    ("clear weather", "Clear"),
    ("good weather", "Clear"),
];

/// Weather labels counted as adverse. Plain "Rain" and "Clear" are not.
pub static ADVERSE_WEATHER: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "Thunderstorm",
        "Lightning",
        "Hurricane",
        "Typhoon",
        "Snow",
        "Icing",
        "Hail",
        "Heavy rain",
        "Fog",
        "Wind shear",
        "Turbulence",
        "Low visibility",
        "Storm",
    ]
    .into_iter()
    .collect()
});
