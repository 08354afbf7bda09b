use std::{path::PathBuf, process::Command};

use weather_stats::{Extreme, LoadError, SkipStats, WeatherData};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn monthly_report_is_cleaned() {
    let data = WeatherData::load(fixture("weather.dat")).unwrap();

    assert_eq!(data.rows.len(), 30);
    assert_eq!(data.rows.first().unwrap().day, 1);
    assert_eq!(data.rows.last().unwrap().day, 30);
    // `32*` on day 9 and `97*` on day 26
    assert_eq!(data.rows[8].min_temp, 32.0);
    assert_eq!(data.rows[25].max_temp, 97.0);
    assert_eq!(
        data.stats,
        SkipStats {
            lines: 33,
            kept: 30,
            too_few_columns: 1,
            bad_day: 2,
            bad_temperature: 0,
            inverted: 0,
        }
    );
}

#[test]
fn monthly_report_summary() {
    let summary = WeatherData::load(fixture("weather.dat"))
        .unwrap()
        .summary()
        .unwrap();

    assert_eq!(summary.smallest_spread, Extreme { day: 14, value: 2.0 });
    assert_eq!(summary.highest_average, Extreme { day: 24, value: 83.5 });
    assert_eq!(summary.highest_max, Extreme { day: 26, value: 97.0 });
    assert_eq!(summary.lowest_min, Extreme { day: 9, value: 32.0 });
}

#[test]
fn missing_file_is_reported() {
    let err = WeatherData::load(fixture("nope.dat")).unwrap_err();
    let LoadError::FileAccess { path, .. } = err;
    assert_eq!(path, fixture("nope.dat"));
}

#[test]
fn binary_prints_the_report() {
    let output = Command::new(env!("CARGO_BIN_EXE_weather-stats"))
        .arg(fixture("weather.dat"))
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "\nWeather Analysis Results:\n\
         Day with Smallest Temperature Spread: Day 14, Value: 2.00°\n\
         Day with Highest Average Temperature: Day 24, Value: 83.50°\n\
         Day with Highest Maximum Temperature: Day 26, Value: 97.00°\n\
         Day with Lowest Minimum Temperature: Day 9, Value: 32.00°\n"
    );
}

#[test]
fn binary_reports_an_empty_dataset() {
    let run = |strict: bool| {
        let mut command = Command::new(env!("CARGO_BIN_EXE_weather-stats"));
        command.arg(fixture("garbage.dat"));
        if strict {
            command.arg("--strict");
        }
        command.output().unwrap()
    };

    let output = run(false);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Error: No valid weather data found in the file.\n"
    );

    let output = run(true);
    assert!(!output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Error: No valid weather data found in the file.\n"
    );
}

#[test]
fn binary_fails_on_missing_file() {
    let output = Command::new(env!("CARGO_BIN_EXE_weather-stats"))
        .arg(fixture("nope.dat"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
