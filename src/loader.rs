use crate::clean::clean_record;
use crate::types::{AircraftCategory, CleanRecord, RawRow};
use csv::{ReaderBuilder, StringRecord};
use std::error::Error;
use std::fs::File;
use std::io::Read;

/// Columns that must be present (after header canonicalization) for a run
/// to proceed. A missing column is a structural failure, not a row problem.
const REQUIRED_COLUMNS: &[&str] = &[
    "date",
    "time",
    "location",
    "operator",
    "flight_no",
    "route",
    "aircraft_type",
    "registration",
    "cn_ln",
    "aboard",
    "fatalities",
    "ground_fatalities",
    "summary",
];

#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub total_rows: usize,
    pub kept_rows: usize,
    pub dropped_rows: usize,
    pub read_errors: usize,
    pub null_dates: usize,
    pub null_times: usize,
    pub null_fatality_totals: usize,
    pub null_fatality_splits: usize,
    pub null_countries: usize,
    pub unknown_categories: usize,
    pub unknown_phases: usize,
    pub unknown_weather: usize,
}

/// Fold a raw header spelling onto the canonical schema. The scraper emits
/// variants like "AC Type", "Flight #", "cn / ln" and "Ground"; anything
/// unrecognized is snake_cased and passed through (then ignored by the
/// deserializer).
fn canonical_header(h: &str) -> String {
    let c = h.trim().to_lowercase();
    if c == "ground" || c == "ground_fatalities" {
        return "ground_fatalities".to_string();
    }
    if c.starts_with("aboard") {
        return "aboard".to_string();
    }
    if c.contains("type") {
        return "aircraft_type".to_string();
    }
    if c.starts_with("cn") {
        return "cn_ln".to_string();
    }
    if c.contains("fatalit") {
        return "fatalities".to_string();
    }
    if c.contains("flight") {
        return "flight_no".to_string();
    }
    if c.contains("operator") {
        return "operator".to_string();
    }
    if c.contains("registr") {
        return "registration".to_string();
    }
    snake_case(&c)
}

fn snake_case(s: &str) -> String {
    let mut out = String::new();
    let mut pending_sep = false;
    for ch in s.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            out.push(ch);
        } else {
            pending_sep = true;
        }
    }
    if out.is_empty() {
        s.to_string()
    } else {
        out
    }
}

pub fn load_and_clean(path: &str) -> Result<(Vec<CleanRecord>, LoadReport), Box<dyn Error>> {
    let file = File::open(path)?;
    clean_from_reader(file)
}

/// Read raw records, clean each one, and collect the survivors in input
/// order. Unreadable CSV records and dropped rows are counted, never fatal;
/// a malformed header is.
pub fn clean_from_reader<R: Read>(input: R) -> Result<(Vec<CleanRecord>, LoadReport), Box<dyn Error>> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(input);

    let headers: StringRecord = rdr
        .headers()?
        .iter()
        .map(canonical_header)
        .collect::<Vec<String>>()
        .into();

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .filter(|c| !headers.iter().any(|h| h == **c))
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(format!("input is missing required column(s): {}", missing.join(", ")).into());
    }

    let mut report = LoadReport::default();
    let mut cleaned: Vec<CleanRecord> = Vec::new();

    for result in rdr.records() {
        report.total_rows += 1;
        let record = match result {
            Ok(r) => r,
            Err(_) => {
                report.read_errors += 1;
                continue;
            }
        };
        let row: RawRow = match record.deserialize(Some(&headers)) {
            Ok(r) => r,
            Err(_) => {
                report.read_errors += 1;
                continue;
            }
        };

        match clean_record(row) {
            Some(rec) => {
                tally(&mut report, &rec);
                report.kept_rows += 1;
                cleaned.push(rec);
            }
            None => report.dropped_rows += 1,
        }
    }

    Ok((cleaned, report))
}

fn tally(report: &mut LoadReport, rec: &CleanRecord) {
    if rec.date_parsed.is_none() {
        report.null_dates += 1;
    }
    if rec.time_hhmm.is_none() {
        report.null_times += 1;
    }
    if rec.fatalities_total.is_none() {
        report.null_fatality_totals += 1;
    }
    if rec.fatalities_passengers.is_none() || rec.fatalities_crew.is_none() {
        report.null_fatality_splits += 1;
    }
    if rec.location_country.is_none() {
        report.null_countries += 1;
    }
    if rec.aircraft_category == AircraftCategory::Unknown {
        report.unknown_categories += 1;
    }
    if rec.phase_clean == "Unknown" {
        report.unknown_phases += 1;
    }
    if rec.weather_condition == "Unknown" {
        report.unknown_weather += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::write_csv_to;

    const SCRAPED_HEADER: &str =
        "Date,Time,Location,Operator,Flight #,Route,AC Type,Registration,cn / ln,Aboard,Fatalities,Ground,Summary\n";

    fn sample_csv() -> String {
        let mut s = String::from(SCRAPED_HEADER);
        s.push_str("\"October 12, 1997\",1432,\"Miami, Florida, United States\",Pan Am,101,Miami - New York,Boeing 737-800,N123,42/11,\"60 (55/5)\",\"12 (10/2)\",,Crashed on approach in heavy fog.\n");
        s.push_str("?,?,,,,,,,,?,?,,\n");
        s.push_str("12-OCT-97,?,North Atlantic Ocean,BOAC,?,?,De Havilland Comet 1,G-ALYP,06003,\"22   (passengers:?  crew:?)\",\"22   (passengers:?  crew:?)\",,Lost at sea.\n");
        s
    }

    #[test]
    fn loads_scraped_headers_and_applies_drop_policy() {
        let (rows, report) = clean_from_reader(sample_csv().as_bytes()).unwrap();
        assert_eq!(report.total_rows, 3);
        assert_eq!(report.kept_rows, 2);
        assert_eq!(report.dropped_rows, 1);
        assert_eq!(rows.len(), 2);

        let first = &rows[0];
        assert_eq!(first.time_hhmm.as_deref(), Some("14:32"));
        assert_eq!(first.location_city.as_deref(), Some("Miami"));
        assert_eq!(first.fatalities_total, Some(12));
        assert_eq!(first.fatalities_passengers, Some(10));
        assert_eq!(first.weather_condition, "Fog");
        assert!(first.weather_adverse);

        let second = &rows[1];
        assert_eq!(second.location_country.as_deref(), Some("North Atlantic Ocean"));
        assert_eq!(second.fatalities_total, Some(22));
        assert_eq!(second.fatalities_passengers, None);
        assert_eq!(second.aircraft_category, AircraftCategory::Jet);
    }

    #[test]
    fn missing_required_column_is_fatal() {
        let input = "Date,Time,Location\n\"October 12, 1997\",1432,Miami\n";
        let err = clean_from_reader(input.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("missing required column"));
    }

    #[test]
    fn empty_input_is_fatal() {
        assert!(clean_from_reader("".as_bytes()).is_err());
    }

    #[test]
    fn cleaning_twice_is_byte_identical() {
        let (first, _) = clean_from_reader(sample_csv().as_bytes()).unwrap();
        let (second, _) = clean_from_reader(sample_csv().as_bytes()).unwrap();

        let mut buf_a: Vec<u8> = Vec::new();
        let mut buf_b: Vec<u8> = Vec::new();
        write_csv_to(&mut buf_a, &first).unwrap();
        write_csv_to(&mut buf_b, &second).unwrap();
        assert_eq!(buf_a, buf_b);
    }

    #[test]
    fn header_canonicalization() {
        assert_eq!(canonical_header("AC Type"), "aircraft_type");
        assert_eq!(canonical_header("Flight #"), "flight_no");
        assert_eq!(canonical_header("cn / ln"), "cn_ln");
        assert_eq!(canonical_header("Ground"), "ground_fatalities");
        assert_eq!(canonical_header("Fatalities"), "fatalities");
        assert_eq!(canonical_header(" Date "), "date");
        assert_eq!(canonical_header("detail_url"), "detail_url");
    }
}
