use lti_filter::{DigitalFilter, FilterConfig};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::Mutex;

/// Collects warnings so rejected constructions can be checked
struct WarningCollector {
    records: Mutex<Vec<String>>,
}

impl Log for WarningCollector {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata())
            && let Ok(mut records) = self.records.lock()
        {
            records.push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static COLLECTOR: WarningCollector = WarningCollector {
    records: Mutex::new(Vec::new()),
};

fn warnings_containing(needle: &str) -> usize {
    COLLECTOR
        .records
        .lock()
        .map(|records| records.iter().filter(|r| r.contains(needle)).count())
        .unwrap_or(0)
}

// Single test: the logger is process-global
#[test]
fn test_rejected_constructions_warn() {
    log::set_logger(&COLLECTOR).expect("logger already installed");
    log::set_max_level(LevelFilter::Warn);

    assert!(DigitalFilter::iir(&[1.0], &[0.0]).is_err());
    assert_eq!(warnings_containing("leading denominator"), 1);

    let both = FilterConfig::from_toml_str("b = [1.0]\nb_file = \"taps.txt\"").unwrap();
    assert!(DigitalFilter::<f64>::from_config(&both).is_err());
    assert_eq!(warnings_containing("not both"), 1);

    let neither = FilterConfig::from_toml_str("a = [1.0]").unwrap();
    assert!(DigitalFilter::<f64>::from_config(&neither).is_err());
    assert_eq!(warnings_containing("missing numerator"), 1);

    let missing_file =
        FilterConfig::from_toml_str("b_file = \"/nonexistent/lti_filter/taps.txt\"").unwrap();
    assert!(DigitalFilter::<f64>::from_config(&missing_file).is_err());
    assert_eq!(warnings_containing("/nonexistent/lti_filter/taps.txt"), 1);

    // Valid constructions stay quiet
    let before = warnings_containing("");
    assert!(DigitalFilter::iir(&[1.0], &[2.0, 0.5]).is_ok());
    assert_eq!(warnings_containing(""), before);
}
