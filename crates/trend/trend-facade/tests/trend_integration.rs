//! Integration tests for configured forecast runs

use trend_facade::{
    merge, project, ProjectedSeries, ProjectionConfig, ProjectionConfigBuilder, SeriesKind,
    TimeSeries, TrendError, TrendEstimator, TrendForecast, TrendProjector,
};

fn sample_history() -> TimeSeries {
    TimeSeries::from_start_year(2016, &[1.17, 1.05, 0.98, 0.92, 0.84, 0.81, 0.78, 0.72]).unwrap()
}

#[test]
fn test_forecast_through_end_year() {
    let config = ProjectionConfigBuilder::new().until(2030).build().unwrap();
    let report = TrendForecast::new(config).run(&sample_history()).unwrap();

    let projection = report.projection.unwrap();
    assert_eq!(projection.years(), (2024..=2030).collect::<Vec<_>>());

    // A declining history keeps declining along the line.
    let values = projection.values();
    assert!(values.windows(2).all(|w| w[1] < w[0]));
}

#[test]
fn test_combined_series_is_ordered_and_labelled() {
    let report = TrendForecast::new(ProjectionConfig::with_horizon(4))
        .run(&sample_history())
        .unwrap();

    let years: Vec<i32> = report.combined.iter().map(|p| p.year).collect();
    assert_eq!(years, (2016..=2027).collect::<Vec<_>>());
    assert_eq!(report.combined.historical().count(), 8);
    assert!(report
        .combined
        .iter()
        .filter(|p| p.year > 2023)
        .all(|p| p.kind == SeriesKind::Projected));
}

#[test]
fn test_hidden_forecast_matches_visible_model() {
    let visible = TrendForecast::default().run(&sample_history()).unwrap();
    let hidden = TrendForecast::new(ProjectionConfig {
        include_forecast: false,
        ..ProjectionConfig::default()
    })
    .run(&sample_history())
    .unwrap();

    assert_eq!(visible.model, hidden.model);
    assert!(hidden.projection.is_none());
    assert_eq!(hidden.combined.len(), 8);
}

#[test]
fn test_merge_rejects_overlapping_projection() {
    let history = sample_history();
    let overlapping: ProjectedSeries = project(&history, &[2022, 2024]).unwrap();
    assert_eq!(
        merge(&history, &overlapping).unwrap_err(),
        TrendError::OverlappingDomain { year: 2022 }
    );
}

#[test]
fn test_custom_estimator_through_forecast() {
    struct FlatEstimator;

    impl TrendEstimator for FlatEstimator {
        fn fit(&self, series: &TimeSeries) -> trend_facade::Result<trend_facade::LinearModel> {
            let model = TrendProjector.fit(series)?;
            Ok(trend_facade::LinearModel::new(0.0, model.evaluate(2023)))
        }

        fn predict(
            &self,
            model: &trend_facade::LinearModel,
            domain: &[i32],
        ) -> trend_facade::Result<ProjectedSeries> {
            TrendProjector.predict(model, domain)
        }

        fn name(&self) -> &str {
            "flat"
        }
    }

    let report = TrendForecast::with_estimator(
        Box::new(FlatEstimator),
        ProjectionConfig::with_horizon(2),
    )
    .run(&sample_history())
    .unwrap();

    assert_eq!(report.estimator, "flat");
    let values = report.projection.unwrap().values();
    assert_eq!(values[0], values[1]);
}
