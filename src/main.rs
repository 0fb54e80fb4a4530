// Entry point and high-level CLI flow.
//
// - Option [1] reads the scraped CSV, cleans it, writes the cleaned
//   dataset, and prints load diagnostics.
// - Option [2] generates five report CSVs and a JSON summary.
// - After generating reports, the user can choose to go back to the
//   selection menu or exit.
mod clean;
mod loader;
mod output;
mod reports;
mod tables;
mod types;
mod util;

use once_cell::sync::Lazy;
use std::io::{self, Write};
use std::sync::Mutex;
use types::CleanRecord;

const RAW_CSV: &str = "planecrashinfo_accidents.csv";
const CLEAN_CSV: &str = "planecrashinfo_clean.csv";

// Simple in-memory app state so we only load/clean the CSV once but can
// generate reports multiple times in a single run.
static APP_STATE: Lazy<Mutex<AppState>> = Lazy::new(|| Mutex::new(AppState { data: None }));

struct AppState {
    data: Option<Vec<CleanRecord>>,
}

/// Read a single line of input after printing the common "Enter choice:" prompt.
fn read_choice() -> String {
    print!("Enter choice: ");
    let _ = io::stdout().flush();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    buf.trim().to_string()
}

/// Ask the user whether to go back to the report selection menu after
/// generating reports.
///
/// Returns `true` if the user chose `Y`, `false` if they chose `N`.
fn prompt_back_to_menu() -> bool {
    loop {
        print!("Back to Report Selection (Y/N): ");
        let _ = io::stdout().flush();
        let mut buf = String::new();
        io::stdin().read_line(&mut buf).ok();
        let resp = buf.trim().to_uppercase();
        match resp.as_str() {
            "Y" => return true,
            "N" => return false,
            _ => println!("Invalid choice. Please enter Y or N."),
        }
    }
}

fn pct(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Handle option [1]: load and clean the scraped CSV, then write the
/// cleaned dataset.
///
/// On success, we store the `Vec<CleanRecord>` in `APP_STATE` and print
/// a short textual summary of what happened.
fn handle_load() {
    match loader::load_and_clean(RAW_CSV) {
        Ok((data, report)) => {
            println!(
                "Processing dataset... ({} rows read, {} kept, {} dropped for lack of signal)",
                util::format_int(report.total_rows),
                util::format_int(report.kept_rows),
                util::format_int(report.dropped_rows)
            );
            if report.read_errors > 0 {
                println!(
                    "Note: {} unreadable CSV records skipped.",
                    util::format_int(report.read_errors)
                );
            }
            println!(
                "Null rates: date {}%, time {}%, fatality total {}%, fatality split {}%, country {}%",
                util::format_number(pct(report.null_dates, report.kept_rows), 1),
                util::format_number(pct(report.null_times, report.kept_rows), 1),
                util::format_number(pct(report.null_fatality_totals, report.kept_rows), 1),
                util::format_number(pct(report.null_fatality_splits, report.kept_rows), 1),
                util::format_number(pct(report.null_countries, report.kept_rows), 1)
            );
            println!(
                "Unknown rates: aircraft category {}%, flight phase {}%, weather {}%",
                util::format_number(pct(report.unknown_categories, report.kept_rows), 1),
                util::format_number(pct(report.unknown_phases, report.kept_rows), 1),
                util::format_number(pct(report.unknown_weather, report.kept_rows), 1)
            );
            if let Err(e) = output::write_csv(CLEAN_CSV, &data) {
                eprintln!("Write error: {}", e);
            } else {
                println!("Saved cleaned data to {}.", CLEAN_CSV);
            }
            println!("");
            let mut state = APP_STATE.lock().unwrap();
            state.data = Some(data);
        }
        Err(e) => {
            eprintln!("Failed to load file: {}\n", e);
        }
    }
}

/// Handle option [2]: generate all reports and the JSON summary.
///
/// This function is intentionally side-effectful:
/// - writes five CSV files,
/// - writes a JSON summary,
/// - and prints Markdown previews of each report to the console.
fn handle_generate_reports() {
    let data = {
        let state = APP_STATE.lock().unwrap();
        state.data.clone()
    };
    let Some(data) = data else {
        println!("Error: No data loaded. Please load the raw CSV first (option 1).\n");
        return;
    };

    println!("Generating reports...");
    println!("Outputs saved to individual files...\n");

    let r1 = reports::generate_yearly_trends(&data);
    let file1 = "report1_yearly_trends.csv";
    if let Err(e) = output::write_csv(file1, &r1) {
        eprintln!("Write error: {}", e);
    }
    println!("Report 1: Crashes and Fatalities per Year\n");
    output::preview_table_rows(&r1, 3);
    println!("(Full table exported to {})\n", file1);

    let r2 = reports::generate_country_summary(&data);
    let file2 = "report2_country_summary.csv";
    if let Err(e) = output::write_csv(file2, &r2) {
        eprintln!("Write error: {}", e);
    }
    println!("Report 2: Accidents and Severity by Country");
    println!("(Top 20 by Accident Count)\n");
    output::preview_table_rows(&r2, 3);
    println!("(Full table exported to {})\n", file2);

    let r3 = reports::generate_operator_ranking(&data);
    let file3 = "report3_operator_ranking.csv";
    if let Err(e) = output::write_csv(file3, &r3) {
        eprintln!("Write error: {}", e);
    }
    println!("Report 3: Operators by Accident Count");
    println!("(Top 15)\n");
    output::preview_table_rows(&r3, 3);
    println!("(Full table exported to {})\n", file3);

    let r4 = reports::generate_decade_fatalities(&data);
    let file4 = "report4_decade_fatalities.csv";
    if let Err(e) = output::write_csv(file4, &r4) {
        eprintln!("Write error: {}", e);
    }
    println!("Report 4: Passenger, Crew, and Ground Fatalities by Decade\n");
    output::preview_table_rows(&r4, 3);
    println!("(Full table exported to {})\n", file4);

    let r5 = reports::generate_category_summary(&data);
    let file5 = "report5_category_summary.csv";
    if let Err(e) = output::write_csv(file5, &r5) {
        eprintln!("Write error: {}", e);
    }
    println!("Report 5: Severity and Weather by Aircraft Category\n");
    output::preview_table_rows(&r5, 3);
    println!("(Full table exported to {})\n", file5);

    let summary = reports::generate_summary(&data);
    if let Err(e) = output::write_json("summary.json", &summary) {
        eprintln!("Write error: {}", e);
    }
    println!("Summary Stats (summary.json):");
    println!(
        "{{\"total_accidents\": {}, \"total_fatalities\": {}, \"adverse_weather_share\": {}}}\n",
        util::format_int(summary.total_accidents),
        util::format_int(summary.total_fatalities),
        util::format_number(summary.adverse_weather_share, 3)
    );
}

fn main() {
    loop {
        println!("Select an option:");
        println!("[1] Load and clean the raw data");
        println!("[2] Generate Reports\n");
        match read_choice().as_str() {
            "1" => {
                handle_load();
            }
            "2" => {
                println!("");
                handle_generate_reports();
                if !prompt_back_to_menu() {
                    println!("Exiting the program.");
                    break;
                }
            }
            _ => {
                println!("Invalid choice. Please enter 1 or 2.\n");
            }
        }
    }
}
