// Field parsers and per-row assembly.
//
// Each parser is a pure function of one raw text field (plus the fixed
// tables); a failure degrades to None/"Unknown" for that field only and
// never aborts the batch.
use crate::tables::{
    ADVERSE_WEATHER, CATEGORY_RULES, COUNTRY_ALIASES, KNOWN_COUNTRIES, PHASE_RULES,
    US_STATES, US_STATE_ABBREVS, WEATHER_RULES,
};
use crate::types::{AircraftCategory, CleanRecord, RawRow};
use crate::util::parse_u32_safe;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static NUM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());
static LABELED_PAX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)passengers:\s*([0-9?]+)").unwrap());
static LABELED_CREW_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)crew:\s*([0-9?]+)").unwrap());
static SLASH_PAIR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\s*(\d+)\s*/\s*(\d+)\s*\)").unwrap());

/// Date formats seen in the raw data, tried in order.
const DATE_FORMATS: &[&str] = &[
    "%B %d, %Y",
    "%b %d, %Y",
    "%Y-%m-%d",
    "%d-%b-%y",
    "%d-%b-%Y",
    "%m/%d/%Y",
    "%d %B %Y",
    "%d %b %Y",
];

pub fn parse_date(s: Option<&str>) -> Option<NaiveDate> {
    let s = s?.trim();
    if s.is_empty() || s == "?" {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Normalize a raw time value ("1432", "700", "2:32 PM", "c 09:40") into a
/// zero-padded 24-hour "HH:MM". Anything ambiguous yields None rather than
/// a guess.
pub fn parse_time(s: Option<&str>) -> Option<String> {
    let raw = s?.trim();
    if raw.is_empty() || raw == "?" {
        return None;
    }
    let lower = raw.to_lowercase();
    let pm = lower.contains("pm") || lower.contains("p.m");
    let am = lower.contains("am") || lower.contains("a.m");

    let mut digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    // One or two digits can't be told apart as hours vs. minutes.
    if digits.len() <= 2 {
        return None;
    }
    if digits.len() == 3 {
        digits.insert(0, '0');
    } else if digits.len() > 4 {
        digits = digits[digits.len() - 4..].to_string();
    }

    let mut hh: u32 = digits[..2].parse().ok()?;
    let mm: u32 = digits[2..4].parse().ok()?;
    if pm && hh < 12 {
        hh += 12;
    }
    if am && hh == 12 {
        hh = 0;
    }
    if hh > 23 || mm > 59 {
        return None;
    }
    Some(format!("{:02}:{:02}", hh, mm))
}

fn normalize_country(s: &str) -> String {
    COUNTRY_ALIASES
        .get(s)
        .map(|c| (*c).to_string())
        .unwrap_or_else(|| s.to_string())
}

/// Heuristic split of a location string into (city, state, country).
///
/// A comma-free value is treated as country-only ("North Atlantic Ocean").
/// US state names and postal abbreviations in the second slot imply
/// "United States"; abbreviations are expanded to the full state name.
pub fn split_location(loc: Option<&str>) -> (Option<String>, Option<String>, Option<String>) {
    let Some(s) = loc.map(str::trim) else {
        return (None, None, None);
    };
    if s.is_empty() {
        return (None, None, None);
    }

    let parts: Vec<&str> = s.split(',').map(str::trim).filter(|p| !p.is_empty()).collect();
    match parts.len() {
        0 => (None, None, None),
        1 => (None, None, Some(normalize_country(parts[0]))),
        2 => {
            let city = parts[0].to_string();
            let last = parts[1];
            if COUNTRY_ALIASES.contains_key(last) || KNOWN_COUNTRIES.contains(last) {
                (Some(city), None, Some(normalize_country(last)))
            } else if let Some(full) = US_STATE_ABBREVS.get(last) {
                (Some(city), Some((*full).to_string()), Some("United States".to_string()))
            } else if US_STATES.contains(last) {
                (Some(city), Some(last.to_string()), Some("United States".to_string()))
            } else if KNOWN_COUNTRIES.iter().any(|c| last.contains(c)) {
                // e.g. "off the coast of France" in the second slot
                (Some(city), None, Some(last.to_string()))
            } else {
                (Some(city), Some(last.to_string()), None)
            }
        }
        _ => {
            let state = parts[1];
            let state = US_STATE_ABBREVS
                .get(state)
                .map(|full| (*full).to_string())
                .unwrap_or_else(|| state.to_string());
            (
                Some(parts[0].to_string()),
                Some(state),
                Some(normalize_country(parts[parts.len() - 1])),
            )
        }
    }
}

/// Decompose a count field shaped like "155 (155/0)" or
/// "22 (passengers:? crew:?)" into (total, passengers, crew).
///
/// The total is the leading integer. A "?" component stays None. A split
/// that exceeds its total is discarded wholesale, so the output never needs
/// subtraction and can never go negative.
pub fn parse_count_pair(s: Option<&str>) -> (Option<u32>, Option<u32>, Option<u32>) {
    let Some(s) = s.map(str::trim) else {
        return (None, None, None);
    };
    if s.is_empty() || s == "?" {
        return (None, None, None);
    }

    let total = parse_u32_safe(NUM_RE.find(s).map(|m| m.as_str()));

    // "?" components fall out as None inside parse_u32_safe.
    let mut pax = parse_u32_safe(LABELED_PAX_RE.captures(s).and_then(|c| c.get(1)).map(|m| m.as_str()));
    let mut crew =
        parse_u32_safe(LABELED_CREW_RE.captures(s).and_then(|c| c.get(1)).map(|m| m.as_str()));
    if pax.is_none() && crew.is_none() {
        if let Some(caps) = SLASH_PAIR_RE.captures(s) {
            pax = parse_u32_safe(caps.get(1).map(|m| m.as_str()));
            crew = parse_u32_safe(caps.get(2).map(|m| m.as_str()));
        }
    }

    if let (Some(t), Some(p), Some(c)) = (total, pax, crew) {
        if p.checked_add(c).map_or(true, |sum| sum > t) {
            pax = None;
            crew = None;
        }
    }

    (total, pax, crew)
}

/// Ground fatalities are reported only when they occurred, so both a
/// missing field and an unparseable placeholder read as zero.
pub fn parse_ground_fatalities(s: Option<&str>) -> u32 {
    parse_u32_safe(s.and_then(|v| NUM_RE.find(v)).map(|m| m.as_str())).unwrap_or(0)
}

pub fn categorize_aircraft(s: Option<&str>) -> AircraftCategory {
    let Some(s) = s else {
        return AircraftCategory::Unknown;
    };
    let t = s.to_lowercase();
    for (pattern, category) in CATEGORY_RULES {
        if t.contains(pattern) {
            return *category;
        }
    }
    AircraftCategory::Unknown
}

fn first_keyword_match(s: Option<&str>, rules: &[(&str, &'static str)]) -> &'static str {
    let Some(s) = s else {
        return "Unknown";
    };
    let t = s.to_lowercase();
    for (pattern, label) in rules {
        if t.contains(pattern) {
            return *label;
        }
    }
    "Unknown"
}

pub fn phase_from_summary(summary: Option<&str>) -> &'static str {
    first_keyword_match(summary, PHASE_RULES)
}

pub fn weather_from_summary(summary: Option<&str>) -> &'static str {
    first_keyword_match(summary, WEATHER_RULES)
}

pub fn is_adverse_weather(condition: &str) -> bool {
    ADVERSE_WEATHER.contains(condition)
}

/// Assemble one cleaned record. Returns None only when the row carries no
/// usable signal at all: no parseable date, location, aboard total, or
/// fatality total. Partial data is always kept.
pub fn clean_record(row: RawRow) -> Option<CleanRecord> {
    let date_parsed = parse_date(row.date.as_deref());
    let time_hhmm = parse_time(row.time.as_deref());
    let (location_city, location_state, location_country) = split_location(row.location.as_deref());
    let (aboard_total, aboard_passengers, aboard_crew) = parse_count_pair(row.aboard.as_deref());
    let (fatalities_total, fatalities_passengers, fatalities_crew) =
        parse_count_pair(row.fatalities.as_deref());
    let ground_fatalities = parse_ground_fatalities(row.ground_fatalities.as_deref());
    let aircraft_category = categorize_aircraft(row.aircraft_type.as_deref());
    let phase = phase_from_summary(row.summary.as_deref());
    let weather = weather_from_summary(row.summary.as_deref());

    let has_location =
        location_city.is_some() || location_state.is_some() || location_country.is_some();
    if date_parsed.is_none() && !has_location && aboard_total.is_none() && fatalities_total.is_none()
    {
        return None;
    }

    Some(CleanRecord {
        date: row.date,
        time: row.time,
        location: row.location,
        operator: row.operator,
        flight_no: row.flight_no,
        route: row.route,
        aircraft_type: row.aircraft_type,
        registration: row.registration,
        cn_ln: row.cn_ln,
        aboard: row.aboard,
        fatalities: row.fatalities,
        summary: row.summary,
        date_parsed,
        time_hhmm,
        aboard_total,
        aboard_passengers,
        aboard_crew,
        fatalities_total,
        fatalities_passengers,
        fatalities_crew,
        ground_fatalities,
        location_city,
        location_state,
        location_country,
        aircraft_category,
        phase_clean: phase.to_string(),
        weather_condition: weather.to_string(),
        weather_adverse: is_adverse_weather(weather),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_raw() -> RawRow {
        RawRow {
            date: None,
            time: None,
            location: None,
            operator: None,
            flight_no: None,
            route: None,
            aircraft_type: None,
            registration: None,
            cn_ln: None,
            aboard: None,
            fatalities: None,
            ground_fatalities: None,
            summary: None,
        }
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(1997, 10, 12).unwrap();
        assert_eq!(parse_date(Some("October 12, 1997")), Some(expected));
        assert_eq!(parse_date(Some("12-OCT-97")), Some(expected));
        assert_eq!(parse_date(Some("1997-10-12")), Some(expected));
        assert_eq!(parse_date(Some("10/12/1997")), Some(expected));
        assert_eq!(parse_date(Some("?")), None);
        assert_eq!(parse_date(Some("sometime in 1997")), None);
        assert_eq!(parse_date(None), None);
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time(Some("1432")), Some("14:32".to_string()));
        assert_eq!(parse_time(Some("14:32")), Some("14:32".to_string()));
        assert_eq!(parse_time(Some("700")), Some("07:00".to_string()));
        assert_eq!(parse_time(Some("2:32 PM")), Some("14:32".to_string()));
        assert_eq!(parse_time(Some("12:05 AM")), Some("00:05".to_string()));
        assert_eq!(parse_time(Some("c 09:40")), Some("09:40".to_string()));
        assert_eq!(parse_time(Some("2560")), None);
        assert_eq!(parse_time(Some("?")), None);
        assert_eq!(parse_time(Some("7")), None);
        assert_eq!(parse_time(None), None);
    }

    #[test]
    fn test_split_location_three_segments() {
        let (city, state, country) = split_location(Some("Miami, Florida, United States"));
        assert_eq!(city.as_deref(), Some("Miami"));
        assert_eq!(state.as_deref(), Some("Florida"));
        assert_eq!(country.as_deref(), Some("United States"));
    }

    #[test]
    fn test_split_location_single_segment_is_country() {
        let (city, state, country) = split_location(Some("North Atlantic Ocean"));
        assert_eq!(city, None);
        assert_eq!(state, None);
        assert_eq!(country.as_deref(), Some("North Atlantic Ocean"));
    }

    #[test]
    fn test_split_location_state_abbreviation() {
        let (city, state, country) = split_location(Some("Anchorage, AK"));
        assert_eq!(city.as_deref(), Some("Anchorage"));
        assert_eq!(state.as_deref(), Some("Alaska"));
        assert_eq!(country.as_deref(), Some("United States"));
    }

    #[test]
    fn test_split_location_country_aliases() {
        let (_, _, country) = split_location(Some("Moscow, Soviet Union"));
        assert_eq!(country.as_deref(), Some("Russia"));
        let (_, _, country) = split_location(Some("Manchester, England"));
        assert_eq!(country.as_deref(), Some("United Kingdom"));
        let (city, state, country) = split_location(Some("Tokyo, Japan"));
        assert_eq!(city.as_deref(), Some("Tokyo"));
        assert_eq!(state, None);
        assert_eq!(country.as_deref(), Some("Japan"));
    }

    #[test]
    fn test_split_location_unresolved_second_segment() {
        let (city, state, country) = split_location(Some("Luanco, Asturias"));
        assert_eq!(city.as_deref(), Some("Luanco"));
        assert_eq!(state.as_deref(), Some("Asturias"));
        assert_eq!(country, None);
    }

    #[test]
    fn test_parse_count_pair_slash_form() {
        assert_eq!(parse_count_pair(Some("155 (155/0)")), (Some(155), Some(155), Some(0)));
        assert_eq!(parse_count_pair(Some("12")), (Some(12), None, None));
        assert_eq!(parse_count_pair(Some("?")), (None, None, None));
        assert_eq!(parse_count_pair(None), (None, None, None));
    }

    #[test]
    fn test_parse_count_pair_labeled_form() {
        assert_eq!(
            parse_count_pair(Some("1    (passengers:1  crew:0)")),
            (Some(1), Some(1), Some(0))
        );
        assert_eq!(
            parse_count_pair(Some("22   (passengers:?  crew:?)")),
            (Some(22), None, None)
        );
    }

    #[test]
    fn test_parse_count_pair_rejects_split_exceeding_total() {
        assert_eq!(parse_count_pair(Some("10 (8/5)")), (Some(10), None, None));
    }

    #[test]
    fn test_parse_ground_fatalities() {
        assert_eq!(parse_ground_fatalities(None), 0);
        assert_eq!(parse_ground_fatalities(Some("?")), 0);
        assert_eq!(parse_ground_fatalities(Some("3")), 3);
    }

    #[test]
    fn test_categorize_aircraft() {
        use AircraftCategory::*;
        assert_eq!(categorize_aircraft(Some("Boeing 737-800")), Jet);
        assert_eq!(categorize_aircraft(Some("Cessna 172")), PistonProp);
        assert_eq!(categorize_aircraft(Some("Sikorsky S-76")), Helicopter);
        assert_eq!(categorize_aircraft(Some("Zeppelin L-1 (airship)")), BalloonAirship);
        assert_eq!(categorize_aircraft(Some("Wright Flyer III")), Unknown);
        assert_eq!(categorize_aircraft(None), Unknown);
    }

    #[test]
    fn test_categorize_aircraft_order_sensitive_cases() {
        use AircraftCategory::*;
        // Specific models must win over the generic token they contain.
        assert_eq!(categorize_aircraft(Some("Cessna Citation 550")), Jet);
        assert_eq!(categorize_aircraft(Some("De Havilland Comet 1")), Jet);
        assert_eq!(categorize_aircraft(Some("De Havilland DH-4")), PistonProp);
        assert_eq!(categorize_aircraft(Some("Antonov An-24B")), Turboprop);
        assert_eq!(categorize_aircraft(Some("Antonov An-2")), PistonProp);
        assert_eq!(categorize_aircraft(Some("Lockheed 10 Electra")), PistonProp);
        assert_eq!(categorize_aircraft(Some("Lockheed L-188 Electra")), Turboprop);
        assert_eq!(categorize_aircraft(Some("BAe Jetstream 31")), Turboprop);
    }

    #[test]
    fn test_phase_from_summary() {
        assert_eq!(
            phase_from_summary(Some("Crashed on approach while attempting to land.")),
            "Approach"
        );
        assert_eq!(
            phase_from_summary(Some("Lost power shortly after takeoff.")),
            "Takeoff"
        );
        assert_eq!(phase_from_summary(Some("No cues here.")), "Unknown");
        assert_eq!(phase_from_summary(None), "Unknown");
    }

    #[test]
    fn test_weather_from_summary() {
        assert_eq!(
            weather_from_summary(Some("Flew into a severe thunderstorm.")),
            "Thunderstorm"
        );
        assert_eq!(
            weather_from_summary(Some("Heavy fog reduced visibility to zero.")),
            "Fog"
        );
        assert_eq!(weather_from_summary(Some("Mechanical failure.")), "Unknown");
        assert!(is_adverse_weather("Thunderstorm"));
        assert!(is_adverse_weather("Fog"));
        assert!(!is_adverse_weather("Clear"));
        assert!(!is_adverse_weather("Unknown"));
    }

    #[test]
    fn test_clean_record_drops_signal_free_rows() {
        let mut row = empty_raw();
        row.date = Some("?".to_string());
        row.location = Some("".to_string());
        row.aboard = Some("?".to_string());
        row.fatalities = Some("?".to_string());
        row.summary = Some("Crashed shortly after takeoff.".to_string());
        assert!(clean_record(row).is_none());
    }

    #[test]
    fn test_clean_record_keeps_partial_rows() {
        let mut row = empty_raw();
        row.date = Some("October 12, 1997".to_string());
        let rec = clean_record(row).expect("date alone is enough signal");
        assert!(rec.date_parsed.is_some());
        assert_eq!(rec.time_hhmm, None);
        assert_eq!(rec.fatalities_total, None);
        assert_eq!(rec.location_country, None);
        assert_eq!(rec.aircraft_category, AircraftCategory::Unknown);
        assert_eq!(rec.phase_clean, "Unknown");
        assert_eq!(rec.weather_condition, "Unknown");
        assert!(!rec.weather_adverse);
    }

    #[test]
    fn test_clean_record_split_never_exceeds_total() {
        let mut row = empty_raw();
        row.date = Some("1977-03-27".to_string());
        row.fatalities = Some("583 (560/23)".to_string());
        let rec = clean_record(row).unwrap();
        let (t, p, c) = (
            rec.fatalities_total.unwrap(),
            rec.fatalities_passengers.unwrap(),
            rec.fatalities_crew.unwrap(),
        );
        assert!(p + c <= t);
    }
}
