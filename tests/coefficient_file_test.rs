mod test_signals;

use lti_filter::{DigitalFilter, FilterConfig, FilterError};

#[test]
fn test_file_matches_explicit_fir() -> anyhow::Result<()> {
    test_signals::init_logging();

    let b = [0.0625, 0.25, 0.375, 0.25, 0.0625, -0.01, 1e-4];
    let path = test_signals::write_coefficients("taps.txt", &b);

    let mut from_file = DigitalFilter::<f64>::from_file(&path)?;
    let mut explicit = DigitalFilter::fir(&b)?;
    std::fs::remove_file(&path).ok();

    assert_eq!(from_file.b(), explicit.b());
    assert_eq!(from_file.a(), &[1.0]);

    for x in test_signals::noise(100, 7) {
        assert_eq!(from_file.filter(x), explicit.filter(x));
    }
    Ok(())
}

#[test]
fn test_file_without_trailing_newline() -> anyhow::Result<()> {
    let path = test_signals::scratch_path("no_newline.txt");
    std::fs::write(&path, "0.5\n0.25\n0.125")?;

    let filter = DigitalFilter::<f64>::from_file(&path)?;
    std::fs::remove_file(&path).ok();

    // No spurious trailing coefficient
    assert_eq!(filter.b(), &[0.5, 0.25, 0.125]);
    Ok(())
}

#[test]
fn test_empty_file_is_invalid() {
    let path = test_signals::scratch_path("empty.txt");
    std::fs::write(&path, "\n\n").unwrap();

    let result = DigitalFilter::<f64>::from_file(&path);
    std::fs::remove_file(&path).ok();

    assert!(matches!(result, Err(FilterError::InvalidCoefficients(_))));
}

#[test]
fn test_malformed_token() {
    let path = test_signals::scratch_path("malformed.txt");
    std::fs::write(&path, "1.0\n0.5x\n0.25\n").unwrap();

    let result = DigitalFilter::<f32>::from_file(&path);
    std::fs::remove_file(&path).ok();

    match result {
        Err(FilterError::FileParseError { line, token }) => {
            assert_eq!(line, 2);
            assert_eq!(token, "0.5x");
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_config_with_b_file_and_feedback() -> anyhow::Result<()> {
    let taps = test_signals::write_coefficients("cfg_taps.txt", &[2.0, 2.0]);
    let file_name = taps
        .file_name()
        .and_then(|n| n.to_str())
        .expect("scratch path has a file name")
        .to_string();

    let config_path = test_signals::scratch_path("filter.toml");
    std::fs::write(
        &config_path,
        format!("b_file = \"{}\"\na = [2.0, -1.0]\n", file_name),
    )?;

    let config = FilterConfig::load(&config_path)?;
    let mut filter = DigitalFilter::<f64>::from_config(&config)?;
    std::fs::remove_file(&taps).ok();
    std::fs::remove_file(&config_path).ok();

    assert_eq!(filter.b(), &[1.0, 1.0]);
    assert_eq!(filter.a(), &[1.0, -0.5]);

    // y[n] = x[n] + x[n-1] + 0.5 y[n-1]
    assert_eq!(filter.filter(1.0), 1.0);
    assert_eq!(filter.filter(0.0), 1.5);
    assert_eq!(filter.filter(0.0), 0.75);
    Ok(())
}

#[test]
fn test_config_zero_a0() {
    let config = FilterConfig::from_toml_str("b = [1.0]\na = [0.0, 1.0]").unwrap();
    assert!(
        DigitalFilter::<f64>::from_config(&config)
            .unwrap_err()
            .is_invalid_coefficients()
    );
}
