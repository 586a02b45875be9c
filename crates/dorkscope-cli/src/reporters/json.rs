//! JSON reporter: the report structures, pretty-printed.

use super::Reporter;
use crate::report::Report;

pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, report: &Report<'_>) -> Result<String, String> {
        let mut out = serde_json::to_string_pretty(report).map_err(|e| e.to_string())?;
        out.push('\n');
        Ok(out)
    }
}
