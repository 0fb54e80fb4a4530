use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tabled::Tabled;

/// One scraped accident entry, exactly as it comes out of the raw CSV.
/// Every field may be missing or malformed; that is expected input.
#[derive(Debug, Deserialize)]
pub struct RawRow {
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub operator: Option<String>,
    pub flight_no: Option<String>,
    pub route: Option<String>,
    pub aircraft_type: Option<String>,
    pub registration: Option<String>,
    pub cn_ln: Option<String>,
    pub aboard: Option<String>,
    pub fatalities: Option<String>,
    pub ground_fatalities: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AircraftCategory {
    Jet,
    Turboprop,
    #[serde(rename = "Piston/Prop")]
    PistonProp,
    Helicopter,
    Military,
    #[serde(rename = "Balloon/Airship")]
    BalloonAirship,
    Unknown,
}

impl AircraftCategory {
    pub fn label(self) -> &'static str {
        match self {
            AircraftCategory::Jet => "Jet",
            AircraftCategory::Turboprop => "Turboprop",
            AircraftCategory::PistonProp => "Piston/Prop",
            AircraftCategory::Helicopter => "Helicopter",
            AircraftCategory::Military => "Military",
            AircraftCategory::BalloonAirship => "Balloon/Airship",
            AircraftCategory::Unknown => "Unknown",
        }
    }
}

/// One cleaned record: the raw columns passed through, followed by the
/// derived columns. Field order here is the column order of the output CSV.
#[derive(Debug, Clone, Serialize)]
pub struct CleanRecord {
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub operator: Option<String>,
    pub flight_no: Option<String>,
    pub route: Option<String>,
    pub aircraft_type: Option<String>,
    pub registration: Option<String>,
    pub cn_ln: Option<String>,
    pub aboard: Option<String>,
    pub fatalities: Option<String>,
    pub summary: Option<String>,
    pub date_parsed: Option<NaiveDate>,
    pub time_hhmm: Option<String>,
    pub aboard_total: Option<u32>,
    pub aboard_passengers: Option<u32>,
    pub aboard_crew: Option<u32>,
    pub fatalities_total: Option<u32>,
    pub fatalities_passengers: Option<u32>,
    pub fatalities_crew: Option<u32>,
    pub ground_fatalities: u32,
    pub location_city: Option<String>,
    pub location_state: Option<String>,
    pub location_country: Option<String>,
    pub aircraft_category: AircraftCategory,
    pub phase_clean: String,
    pub weather_condition: String,
    pub weather_adverse: bool,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct YearlyTrendRow {
    #[serde(rename = "Year")]
    #[tabled(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Crashes")]
    #[tabled(rename = "Crashes")]
    pub crashes: usize,
    #[serde(rename = "Fatalities")]
    #[tabled(rename = "Fatalities")]
    pub fatalities: u64,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct CountrySummaryRow {
    #[serde(rename = "Country")]
    #[tabled(rename = "Country")]
    pub country: String,
    #[serde(rename = "Accidents")]
    #[tabled(rename = "Accidents")]
    pub accidents: usize,
    #[serde(rename = "Fatalities")]
    #[tabled(rename = "Fatalities")]
    pub fatalities: u64,
    #[serde(rename = "Aboard")]
    #[tabled(rename = "Aboard")]
    pub aboard: u64,
    #[serde(rename = "FatalityRatio")]
    #[tabled(rename = "FatalityRatio")]
    pub fatality_ratio: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct OperatorRankRow {
    #[serde(rename = "Rank")]
    #[tabled(rename = "Rank")]
    pub rank: usize,
    #[serde(rename = "Operator")]
    #[tabled(rename = "Operator")]
    pub operator: String,
    #[serde(rename = "Accidents")]
    #[tabled(rename = "Accidents")]
    pub accidents: usize,
    #[serde(rename = "Fatalities")]
    #[tabled(rename = "Fatalities")]
    pub fatalities: u64,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct DecadeFatalityRow {
    #[serde(rename = "Decade")]
    #[tabled(rename = "Decade")]
    pub decade: i32,
    #[serde(rename = "Passengers")]
    #[tabled(rename = "Passengers")]
    pub passengers: u64,
    #[serde(rename = "Crew")]
    #[tabled(rename = "Crew")]
    pub crew: u64,
    #[serde(rename = "Ground")]
    #[tabled(rename = "Ground")]
    pub ground: u64,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct CategorySummaryRow {
    #[serde(rename = "Category")]
    #[tabled(rename = "Category")]
    pub category: String,
    #[serde(rename = "Accidents")]
    #[tabled(rename = "Accidents")]
    pub accidents: usize,
    #[serde(rename = "Fatalities")]
    #[tabled(rename = "Fatalities")]
    pub fatalities: u64,
    #[serde(rename = "MedianFatalityRatio")]
    #[tabled(rename = "MedianFatalityRatio")]
    pub median_fatality_ratio: String,
    #[serde(rename = "AdverseWeatherPct")]
    #[tabled(rename = "AdverseWeatherPct")]
    pub adverse_weather_pct: String,
}

/// Dataset-level stats written to `summary.json`. `BTreeMap` keeps the
/// phase counts in a stable key order so repeated runs serialize
/// byte-identically.
#[derive(Debug, Serialize)]
pub struct PipelineSummary {
    pub total_accidents: usize,
    pub total_fatalities: u64,
    pub countries: usize,
    pub operators: usize,
    pub deadliest_year: Option<i32>,
    pub adverse_weather_share: f64,
    pub accidents_by_phase: BTreeMap<String, usize>,
}
