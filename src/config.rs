use serde::Deserialize;

/// Sentinel written by observers for "no measurement".
pub const MISSING_SENTINEL: f64 = -999.0;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoadConfig {
    pub delimiter: u8,
    pub missing_sentinel: f64,
    /// Cell text (after trimming) that is read as missing.
    pub na_tokens: Vec<String>,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            missing_sentinel: MISSING_SENTINEL,
            na_tokens: [
                "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "null", "NULL", "#N/A", "None",
            ]
            .iter()
            .map(|t| t.to_string())
            .collect(),
        }
    }
}

impl LoadConfig {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// True when `raw` is an NA token or a number equal to the sentinel.
    pub fn is_missing(&self, raw: &str) -> bool {
        let trimmed = raw.trim();
        if self.na_tokens.iter().any(|t| t == trimmed) {
            return true;
        }
        matches!(trimmed.parse::<f64>(), Ok(v) if v == self.missing_sentinel)
    }
}
