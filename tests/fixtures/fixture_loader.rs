/// Query fixture loader
///
/// Loads the data-driven cases in `query_cases.json`. Each entry is either a
/// comment string or a case object.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum FixtureCase {
    /// A parse/build case
    QueryCase {
        input: String,
        #[serde(default)]
        charset: Option<String>,
        #[serde(default)]
        strict: bool,
        #[serde(default)]
        keep_empty: bool,
        #[serde(default)]
        pairs: Vec<(Option<String>, Option<String>)>,
        #[serde(default)]
        output: Option<String>,
        #[serde(default)]
        failure: bool,
    },
    /// A comment line (string)
    #[allow(dead_code)]
    Comment(String),
}

#[derive(Debug, Clone)]
pub struct FixtureFailure {
    pub case_num: usize,
    pub input: String,
    pub field: String,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, Default)]
pub struct FixtureResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<FixtureFailure>,
}

impl FixtureResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail(
        &mut self,
        case_num: usize,
        input: &str,
        field: &str,
        expected: String,
        actual: String,
    ) {
        self.failed += 1;
        self.failures.push(FixtureFailure {
            case_num,
            input: input.to_string(),
            field: field.to_string(),
            expected,
            actual,
        });
    }

    pub fn summary(&self) -> String {
        format!("Passed: {}, Failed: {}", self.passed, self.failed)
    }
}

pub fn load_cases() -> Vec<FixtureCase> {
    let data = include_str!("./query_cases.json");
    serde_json::from_str(data).expect("Failed to parse query fixture data")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_cases() {
        let cases = load_cases();
        let queries = cases
            .iter()
            .filter(|case| matches!(case, FixtureCase::QueryCase { .. }))
            .count();
        assert!(queries >= 20, "only {queries} cases loaded");
    }
}
