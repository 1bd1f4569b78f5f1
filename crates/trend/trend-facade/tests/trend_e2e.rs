//! End-to-end test: birth-rate history with a linear forecast to 2030

use trend_facade::prelude::*;

/// Total fertility rate, South Korea, 2000-2023
const FERTILITY: [f64; 24] = [
    1.48, 1.31, 1.18, 1.19, 1.16, 1.09, 1.13, 1.26, 1.19, 1.15, 1.23, 1.24, 1.30, 1.19, 1.21,
    1.24, 1.17, 1.05, 0.98, 0.92, 0.84, 0.81, 0.78, 0.72,
];

fn fertility_history() -> TimeSeries {
    TimeSeries::from_start_year(2000, &FERTILITY).unwrap()
}

#[test]
fn test_e2e_fit_matches_reference_coefficients() {
    let model = fit(&fertility_history()).unwrap();

    // Reference values computed independently with the closed form.
    assert!((model.slope - (-0.020_747_826_086_956_5)).abs() < 1e-9);
    assert!((model.intercept - 42.851_752_173_913).abs() < 1e-6);
}

#[test]
fn test_e2e_forecast_to_2030() {
    let history = fertility_history();
    let config = ProjectionConfigBuilder::new().until(2030).build().unwrap();
    let report = TrendForecast::new(config).run(&history).unwrap();

    let expected = [0.858152, 0.837404, 0.816657, 0.795909, 0.775161, 0.754413, 0.733665];
    let projection = report.projection.as_ref().unwrap();
    assert_eq!(projection.years(), (2024..=2030).collect::<Vec<_>>());
    for (got, want) in projection.values().iter().zip(expected.iter()) {
        assert!((got - want).abs() < 1e-5, "got {got}, want {want}");
    }

    assert!((report.diagnostics.r_squared - 0.614_617).abs() < 1e-5);
    assert_eq!(report.combined.len(), 31);
    assert_eq!(report.combined.points()[23].kind, SeriesKind::Historical);
    assert_eq!(report.combined.points()[24].kind, SeriesKind::Projected);
}

#[test]
fn test_e2e_report_json_roundtrips_series() {
    let report = TrendForecast::new(ProjectionConfig::with_horizon(2))
        .run(&fertility_history())
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();

    let combined = json["combined"].as_array().unwrap();
    assert_eq!(combined.len(), 26);
    assert_eq!(combined[0]["year"], 2000);
    assert_eq!(combined[0]["kind"], "historical");
    assert_eq!(combined[25]["year"], 2025);
    assert_eq!(combined[25]["kind"], "projected");
}
