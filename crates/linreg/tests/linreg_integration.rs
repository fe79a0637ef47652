use approx::assert_abs_diff_eq;
use linreg::{DegeneratePolicy, LinearConfig, LinearModel, ModelError, SimpleRegression};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_full_pipeline() {
    init_logger();

    let x: Vec<f64> = (0..10).map(f64::from).collect();
    let y: Vec<f64> = x.iter().map(|&xi| 2.0 * xi + 5.0).collect();

    let (alpha, beta, variance): (f64, f64, f64) = linreg::fit(&x, &y).unwrap().into();
    assert_abs_diff_eq!(alpha, 5.0, epsilon = 1e-9);
    assert_abs_diff_eq!(beta, 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(variance, 0.0, epsilon = 1e-12);

    let model = linreg::lm(&x, &y).unwrap();
    let pred = model.predict(&[10.0]).unwrap();
    assert_abs_diff_eq!(pred[0], 25.0, epsilon = 1e-9);

    let summary = model.summary().unwrap();
    assert!(summary.to_string().contains("Observations: 10"));
}

#[test]
fn test_degenerate_inputs() {
    init_logger();

    let est = linreg::fit(&[3.0, 3.0, 3.0], &[1.0, 2.0, 3.0]).unwrap();
    assert!(!est.is_finite());

    let strict = LinearConfig {
        degenerate: DegeneratePolicy::Reject,
        ..Default::default()
    };
    let result = SimpleRegression::new()
        .config(strict)
        .data(&[3.0, 3.0, 3.0], &[1.0, 2.0, 3.0])
        .fit();
    assert!(matches!(result, Err(ModelError::ZeroVariance)));
}

#[test]
fn test_length_mismatch_message() {
    let err = linreg::fit(&[1.0, 2.0], &[1.0]).unwrap_err();
    assert_eq!(err.to_string(), "Length mismatch: x has 2 samples, y has 1");
}
