//! Tests for the gridcast error taxonomy.

use gridcast_core::errors::{ConfigError, DownscaleError, InputError};

#[test]
fn config_errors_render_field_context() {
    let err = ConfigError::ValidationFailed {
        field: "n_trials".to_string(),
        message: "must be at least 1".to_string(),
    };
    let rendered = err.to_string();
    assert!(rendered.contains("n_trials"), "got: {rendered}");
    assert!(rendered.contains("must be at least 1"));
}

#[test]
fn unsupported_resolution_names_the_resolution() {
    let err = ConfigError::UnsupportedResolution {
        resolution: "regional".to_string(),
    };
    assert!(err.to_string().contains("regional"));
}

#[test]
fn input_errors_render_year_context() {
    let err = InputError::DuplicateYear { year: 2030 };
    assert!(err.to_string().contains("2030"));

    let err = InputError::YearNotAfterBaseline {
        year: 2019,
        baseline_year: 2020,
    };
    let rendered = err.to_string();
    assert!(rendered.contains("2019") && rendered.contains("2020"));
}

#[test]
fn infeasibility_reports_target_and_available() {
    let err = DownscaleError::InsufficientCapacity {
        year: 2035,
        target: 12.5,
        available: 10.0,
    };
    let rendered = err.to_string();
    assert!(rendered.contains("2035"));
    assert!(rendered.contains("12.5"));
    assert!(rendered.contains("10"));
}

#[test]
fn downscale_error_wraps_config_and_input_errors() {
    let config: DownscaleError = ConfigError::UnsupportedResolution {
        resolution: "regional".to_string(),
    }
    .into();
    assert!(matches!(config, DownscaleError::Config(_)));

    let input: DownscaleError = InputError::EmptyTable.into();
    assert!(matches!(input, DownscaleError::Input(_)));
    // Transparent wrapping keeps the inner message.
    assert_eq!(input.to_string(), InputError::EmptyTable.to_string());
}
