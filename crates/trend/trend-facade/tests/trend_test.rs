//! Unit tests for the trend projection surface

use trend_facade::{fit, fit_points, predict, project, DataPoint, TimeSeries, TrendError};

// ============================================================================
// Fit Tests
// ============================================================================

#[test]
fn test_fit_two_points_is_exact() {
    let history = TimeSeries::from_pairs([(2018, 0.98), (2019, 0.92)]).unwrap();
    let model = fit(&history).unwrap();

    assert!((model.evaluate(2018) - 0.98).abs() < 1e-9);
    assert!((model.evaluate(2019) - 0.92).abs() < 1e-9);
    assert!((model.slope + 0.06).abs() < 1e-9);
}

#[test]
fn test_fit_is_idempotent() {
    let history = TimeSeries::from_start_year(2010, &[1.23, 1.24, 1.30, 1.19, 1.21]).unwrap();
    let first = fit(&history).unwrap();
    let second = fit(&history).unwrap();

    assert!((first.slope - second.slope).abs() < 1e-15);
    assert!((first.intercept - second.intercept).abs() < 1e-15);
}

#[test]
fn test_fit_error_cases() {
    assert!(matches!(
        fit(&TimeSeries::new(vec![]).unwrap()),
        Err(TrendError::InsufficientData { required: 2, actual: 0 })
    ));
    assert!(matches!(
        fit(&TimeSeries::from_pairs([(2000, 1.0)]).unwrap()),
        Err(TrendError::InsufficientData { required: 2, actual: 1 })
    ));
    assert_eq!(
        fit_points(&[DataPoint::new(5, 1.0), DataPoint::new(5, 2.0)]).unwrap_err(),
        TrendError::DegenerateInput
    );
}

// ============================================================================
// Predict / Project Tests
// ============================================================================

#[test]
fn test_three_point_scenario() {
    let history = TimeSeries::from_pairs([(2000, 1.47), (2001, 1.45), (2002, 1.42)]).unwrap();
    let model = fit(&history).unwrap();
    let forecast = predict(&model, &[2003]).unwrap();

    // Direct OLS: x̄ = 2001, ȳ = 4.34 / 3, slope = -0.05 / 2
    let y_mean = (1.47 + 1.45 + 1.42) / 3.0;
    let expected = y_mean + 2.0 * -0.025;

    assert_eq!(forecast.len(), 1);
    assert!((forecast.values()[0] - expected).abs() < 1e-6);
    assert!(forecast.values()[0] < 1.42, "trend should keep declining");
}

#[test]
fn test_predict_on_training_years_has_zero_mean_residual() {
    let history = TimeSeries::from_start_year(2000, &[1.47, 1.31, 1.18, 1.19, 1.16, 1.09]).unwrap();
    let model = fit(&history).unwrap();
    let fitted = predict(&model, &history.years()).unwrap();

    let residual_sum: f64 = history
        .iter()
        .zip(fitted.iter())
        .map(|(obs, line)| obs.value - line.value)
        .sum();
    assert!(residual_sum.abs() < 1e-9, "residual sum = {residual_sum}");
}

#[test]
fn test_predict_empty_domain() {
    let model = fit(&TimeSeries::from_start_year(0, &[1.0, 2.0]).unwrap()).unwrap();
    assert_eq!(predict(&model, &[]).unwrap_err(), TrendError::EmptyDomain);
}

#[test]
fn test_project_composition_law() {
    let history = TimeSeries::from_start_year(2015, &[1.24, 1.17, 1.05, 0.98, 0.92]).unwrap();
    let domain = [2020, 2021, 2022];

    let composed = predict(&fit(&history).unwrap(), &domain).unwrap();
    assert_eq!(project(&history, &domain).unwrap(), composed);
}
