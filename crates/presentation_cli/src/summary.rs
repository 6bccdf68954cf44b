//! Console summary printed after the report is written

use std::{fmt::Write, path::Path};

use domain::{CityRecord, WeatherReport};

const NAME_WIDTH: usize = 20;

/// Render a human-readable table of the report
pub fn render(report: &WeatherReport, destination: &Path) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Weather report: {} cities, {} failed",
        report.cities.len(),
        report.failure_count()
    );

    if !report.is_empty() {
        let _ = writeln!(
            out,
            "\n{:<NAME_WIDTH$} {:>9} {:>11}  Condition",
            "City", "Temp (°C)", "Wind (km/h)"
        );
        for record in &report.cities {
            out.push_str(&city_line(record));
            out.push('\n');
        }
    }

    match report.stats {
        Some(stats) => {
            let _ = writeln!(
                out,
                "\nMax: {:.1} °C | Min: {:.1} °C | Average: {:.2} °C ({} of {} cities)",
                stats.max,
                stats.min,
                stats.average,
                stats.count,
                report.cities.len()
            );
        },
        None => out.push_str("\nNo temperatures available\n"),
    }

    let _ = writeln!(out, "Written to {}", destination.display());
    out
}

fn city_line(record: &CityRecord) -> String {
    let name = record.name.as_str();
    match (record.temperature(), record.conditions()) {
        (Some(temperature), Some(conditions)) => {
            let wind = conditions
                .wind_speed
                .map_or_else(|| "-".to_string(), |w| format!("{w:.1}"));
            let condition = conditions.condition.map_or("-", |c| c.description());
            format!("{name:<NAME_WIDTH$} {temperature:>9.1} {wind:>11}  {condition}")
        },
        _ => format!(
            "{name:<NAME_WIDTH$} error: {}",
            record.error().unwrap_or("no temperature")
        ),
    }
}
