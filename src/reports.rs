use crate::types::{
    CategorySummaryRow, CleanRecord, CountrySummaryRow, DecadeFatalityRow, OperatorRankRow,
    PipelineSummary, YearlyTrendRow,
};
use crate::util::{format_number, median};
use chrono::Datelike;
use std::collections::{BTreeMap, HashMap, HashSet};

// Sorts everywhere below carry a name/year tie-break so repeated runs over
// the same input produce byte-identical report files.

pub fn generate_yearly_trends(data: &[CleanRecord]) -> Vec<YearlyTrendRow> {
    let mut map: HashMap<i32, (usize, u64)> = HashMap::new();
    for r in data {
        let Some(date) = r.date_parsed else { continue };
        let e = map.entry(date.year()).or_insert((0, 0));
        e.0 += 1;
        e.1 += u64::from(r.fatalities_total.unwrap_or(0));
    }
    let mut rows: Vec<YearlyTrendRow> = map
        .into_iter()
        .map(|(year, (crashes, fatalities))| YearlyTrendRow {
            year,
            crashes,
            fatalities,
        })
        .collect();
    rows.sort_by_key(|r| r.year);
    rows
}

pub fn generate_country_summary(data: &[CleanRecord]) -> Vec<CountrySummaryRow> {
    #[derive(Default)]
    struct Acc {
        accidents: usize,
        fatalities: u64,
        aboard: u64,
    }
    let mut map: HashMap<String, Acc> = HashMap::new();
    for r in data {
        let Some(country) = r.location_country.as_deref() else {
            continue;
        };
        let e = map.entry(country.to_string()).or_default();
        e.accidents += 1;
        e.fatalities += u64::from(r.fatalities_total.unwrap_or(0));
        e.aboard += u64::from(r.aboard_total.unwrap_or(0));
    }
    let mut rows: Vec<CountrySummaryRow> = map
        .into_iter()
        .map(|(country, acc)| {
            let ratio = if acc.aboard > 0 {
                acc.fatalities as f64 / acc.aboard as f64
            } else {
                0.0
            };
            CountrySummaryRow {
                country,
                accidents: acc.accidents,
                fatalities: acc.fatalities,
                aboard: acc.aboard,
                fatality_ratio: format_number(ratio, 2),
            }
        })
        .collect();
    rows.sort_by(|a, b| {
        b.accidents
            .cmp(&a.accidents)
            .then_with(|| a.country.cmp(&b.country))
    });
    rows.truncate(20);
    rows
}

pub fn generate_operator_ranking(data: &[CleanRecord]) -> Vec<OperatorRankRow> {
    let mut map: HashMap<String, (usize, u64)> = HashMap::new();
    for r in data {
        let Some(operator) = r.operator.as_deref().map(str::trim).filter(|s| !s.is_empty())
        else {
            continue;
        };
        let e = map.entry(operator.to_string()).or_insert((0, 0));
        e.0 += 1;
        e.1 += u64::from(r.fatalities_total.unwrap_or(0));
    }
    let mut tmp: Vec<(String, usize, u64)> = map
        .into_iter()
        .map(|(operator, (accidents, fatalities))| (operator, accidents, fatalities))
        .collect();
    tmp.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    tmp.into_iter()
        .take(15)
        .enumerate()
        .map(|(idx, (operator, accidents, fatalities))| OperatorRankRow {
            rank: idx + 1,
            operator,
            accidents,
            fatalities,
        })
        .collect()
}

pub fn generate_decade_fatalities(data: &[CleanRecord]) -> Vec<DecadeFatalityRow> {
    let mut map: HashMap<i32, (u64, u64, u64)> = HashMap::new();
    for r in data {
        let Some(date) = r.date_parsed else { continue };
        let decade = date.year().div_euclid(10) * 10;
        let e = map.entry(decade).or_insert((0, 0, 0));
        e.0 += u64::from(r.fatalities_passengers.unwrap_or(0));
        e.1 += u64::from(r.fatalities_crew.unwrap_or(0));
        e.2 += u64::from(r.ground_fatalities);
    }
    let mut rows: Vec<DecadeFatalityRow> = map
        .into_iter()
        .map(|(decade, (passengers, crew, ground))| DecadeFatalityRow {
            decade,
            passengers,
            crew,
            ground,
        })
        .collect();
    rows.sort_by_key(|r| r.decade);
    rows
}

pub fn generate_category_summary(data: &[CleanRecord]) -> Vec<CategorySummaryRow> {
    #[derive(Default)]
    struct Acc {
        accidents: usize,
        fatalities: u64,
        ratios: Vec<f64>,
        adverse: usize,
    }
    let mut map: HashMap<&'static str, Acc> = HashMap::new();
    for r in data {
        let e = map.entry(r.aircraft_category.label()).or_default();
        e.accidents += 1;
        e.fatalities += u64::from(r.fatalities_total.unwrap_or(0));
        if let (Some(fat), Some(aboard)) = (r.fatalities_total, r.aboard_total) {
            if aboard > 0 {
                e.ratios.push(f64::from(fat) / f64::from(aboard));
            }
        }
        if r.weather_adverse {
            e.adverse += 1;
        }
    }
    let mut rows: Vec<CategorySummaryRow> = map
        .into_iter()
        .map(|(category, acc)| {
            let adverse_pct = if acc.accidents > 0 {
                acc.adverse as f64 / acc.accidents as f64 * 100.0
            } else {
                0.0
            };
            CategorySummaryRow {
                category: category.to_string(),
                accidents: acc.accidents,
                fatalities: acc.fatalities,
                median_fatality_ratio: format_number(median(acc.ratios), 2),
                adverse_weather_pct: format_number(adverse_pct, 2),
            }
        })
        .collect();
    rows.sort_by(|a, b| {
        b.accidents
            .cmp(&a.accidents)
            .then_with(|| a.category.cmp(&b.category))
    });
    rows
}

pub fn generate_summary(data: &[CleanRecord]) -> PipelineSummary {
    let total_fatalities: u64 = data
        .iter()
        .map(|r| u64::from(r.fatalities_total.unwrap_or(0)))
        .sum();
    let countries: HashSet<&str> = data
        .iter()
        .filter_map(|r| r.location_country.as_deref())
        .collect();
    let operators: HashSet<&str> = data.iter().filter_map(|r| r.operator.as_deref()).collect();

    let mut by_year: BTreeMap<i32, u64> = BTreeMap::new();
    for r in data {
        if let Some(date) = r.date_parsed {
            *by_year.entry(date.year()).or_insert(0) +=
                u64::from(r.fatalities_total.unwrap_or(0));
        }
    }
    // BTreeMap iteration is year-ascending, so a strict comparison keeps the
    // earliest year on ties.
    let mut deadliest_year: Option<i32> = None;
    let mut deadliest_count: u64 = 0;
    for (year, fatalities) in &by_year {
        if *fatalities > deadliest_count {
            deadliest_count = *fatalities;
            deadliest_year = Some(*year);
        }
    }

    let adverse = data.iter().filter(|r| r.weather_adverse).count();
    let adverse_weather_share = if data.is_empty() {
        0.0
    } else {
        adverse as f64 / data.len() as f64
    };

    let mut accidents_by_phase: BTreeMap<String, usize> = BTreeMap::new();
    for r in data {
        *accidents_by_phase.entry(r.phase_clean.clone()).or_insert(0) += 1;
    }

    PipelineSummary {
        total_accidents: data.len(),
        total_fatalities,
        countries: countries.len(),
        operators: operators.len(),
        deadliest_year,
        adverse_weather_share,
        accidents_by_phase,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clean::clean_record;
    use crate::types::RawRow;

    fn rec(date: &str, location: &str, operator: &str, aircraft: &str, aboard: &str, fatalities: &str, summary: &str) -> CleanRecord {
        clean_record(RawRow {
            date: Some(date.to_string()),
            time: None,
            location: Some(location.to_string()),
            operator: Some(operator.to_string()),
            flight_no: None,
            route: None,
            aircraft_type: Some(aircraft.to_string()),
            registration: None,
            cn_ln: None,
            aboard: Some(aboard.to_string()),
            fatalities: Some(fatalities.to_string()),
            ground_fatalities: None,
            summary: Some(summary.to_string()),
        })
        .expect("fixture rows carry enough signal")
    }

    fn fixture() -> Vec<CleanRecord> {
        vec![
            rec(
                "March 3, 1972",
                "Chicago, Illinois, United States",
                "United Airlines",
                "Boeing 737-200",
                "60 (55/5)",
                "10 (8/2)",
                "Crashed on approach in fog.",
            ),
            rec(
                "July 20, 1972",
                "Paris, France",
                "Air France",
                "Caravelle",
                "80 (72/8)",
                "80 (72/8)",
                "Lost control during climb.",
            ),
            rec(
                "May 5, 1973",
                "Lyon, France",
                "Air France",
                "Caravelle",
                "50 (45/5)",
                "0 (0/0)",
                "Overran the runway while landing.",
            ),
        ]
    }

    #[test]
    fn yearly_trends_are_sorted_and_summed() {
        let rows = generate_yearly_trends(&fixture());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].year, 1972);
        assert_eq!(rows[0].crashes, 2);
        assert_eq!(rows[0].fatalities, 90);
        assert_eq!(rows[1].year, 1973);
        assert_eq!(rows[1].crashes, 1);
    }

    #[test]
    fn country_summary_ranks_by_accidents() {
        let rows = generate_country_summary(&fixture());
        assert_eq!(rows[0].country, "France");
        assert_eq!(rows[0].accidents, 2);
        assert_eq!(rows[0].fatalities, 80);
        assert_eq!(rows[1].country, "United States");
        // 80 fatalities over 130 aboard
        assert_eq!(rows[0].fatality_ratio, "0.62");
    }

    #[test]
    fn operator_ranking_is_deterministic() {
        let rows = generate_operator_ranking(&fixture());
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].operator, "Air France");
        assert_eq!(rows[0].accidents, 2);
        assert_eq!(rows[1].operator, "United Airlines");
    }

    #[test]
    fn decade_fatalities_sum_per_group() {
        let rows = generate_decade_fatalities(&fixture());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].decade, 1970);
        assert_eq!(rows[0].passengers, 80);
        assert_eq!(rows[0].crew, 10);
        assert_eq!(rows[0].ground, 0);
    }

    #[test]
    fn category_summary_tracks_adverse_share() {
        let rows = generate_category_summary(&fixture());
        assert_eq!(rows[0].category, "Jet");
        assert_eq!(rows[0].accidents, 3);
        // One of three accidents happened in fog.
        assert_eq!(rows[0].adverse_weather_pct, "33.33");
    }

    #[test]
    fn summary_picks_deadliest_year_and_phases() {
        let summary = generate_summary(&fixture());
        assert_eq!(summary.total_accidents, 3);
        assert_eq!(summary.total_fatalities, 90);
        assert_eq!(summary.countries, 2);
        assert_eq!(summary.operators, 2);
        assert_eq!(summary.deadliest_year, Some(1972));
        assert_eq!(summary.accidents_by_phase.get("Approach"), Some(&1));
        assert_eq!(summary.accidents_by_phase.get("Climb"), Some(&1));
        assert_eq!(summary.accidents_by_phase.get("Landing"), Some(&1));
    }
}
