//! Regression test parameters and checks

use autobubble_core::{Rectangle, TextRow};

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Report failures only (default)
    #[default]
    Compare,
    /// Also print every checked value
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the test name, the index of the current check, and every
/// failure seen so far. Checks never panic; call [`RegParams::cleanup`]
/// at the end and assert on its result.
pub struct RegParams {
    /// Name of the test (e.g., "segment")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `|expected - actual| <= delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();
        if self.display() {
            eprintln!("  [{}] expected {} actual {}", self.index, expected, actual);
        }

        if diff > delta || diff.is_nan() {
            self.fail(format!(
                "value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.index, diff, delta, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Check that a condition holds
    pub fn compare_bool(&mut self, expected: bool, actual: bool) -> bool {
        self.index += 1;
        if expected != actual {
            self.fail(format!(
                "boolean comparison for index {}: expected {}, got {}",
                self.index, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Compare two row lists for exact equality
    pub fn compare_rows(&mut self, expected: &[TextRow], actual: &[TextRow]) -> bool {
        self.index += 1;
        if self.display() {
            eprintln!("  [{}] rows {:?}", self.index, actual);
        }
        if expected != actual {
            self.fail(format!(
                "row comparison for index {}\n  expected {:?}\n  actual   {:?}",
                self.index, expected, actual
            ));
            false
        } else {
            true
        }
    }

    /// Compare two rectangle lists for exact equality
    pub fn compare_rects(&mut self, expected: &[Rectangle], actual: &[Rectangle]) -> bool {
        self.index += 1;
        if expected != actual {
            self.fail(format!(
                "rectangle comparison for index {}\n  expected {:?}\n  actual   {:?}",
                self.index, expected, actual
            ));
            false
        } else {
            true
        }
    }

    fn fail(&mut self, detail: String) {
        let msg = format!("Failure in {}_reg: {}", self.test_name, detail);
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all checks passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
