//! Snowfall amount classification.
//!
//! Each record gets one of three labels from its `average_snowfall`:
//!
//!   Low (< 5)  |  Medium (5..=15)  |  High (> 15)

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, warn};

use crate::table::{Column, Table, TableError};

pub const SNOWFALL_COLUMN: &str = "average_snowfall";
pub const CATEGORY_COLUMN: &str = "snowfall_category";

/// Amounts strictly above this are `High`.
pub const HIGH_THRESHOLD: f64 = 15.0;
/// Amounts strictly below this are `Low`.
pub const LOW_THRESHOLD: f64 = 5.0;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Unknown snowfall category: {0}")]
pub struct ParseCategoryError(pub String);

/// Snowfall category. Variants are declared in label order so the derived
/// `Ord` sorts the same way the labels do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SnowfallCategory {
    High,
    Low,
    Medium,
}

impl SnowfallCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SnowfallCategory::High => "High",
            SnowfallCategory::Low => "Low",
            SnowfallCategory::Medium => "Medium",
        }
    }
}

impl fmt::Display for SnowfallCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SnowfallCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "High" => Ok(SnowfallCategory::High),
            "Low" => Ok(SnowfallCategory::Low),
            "Medium" => Ok(SnowfallCategory::Medium),
            other => Err(ParseCategoryError(other.to_string())),
        }
    }
}

/// Categorize one snowfall amount. Both thresholds belong to `Medium`.
pub fn define_snow_category(x: f64) -> SnowfallCategory {
    if x > HIGH_THRESHOLD {
        SnowfallCategory::High
    } else if x < LOW_THRESHOLD {
        SnowfallCategory::Low
    } else {
        SnowfallCategory::Medium
    }
}

/// Missing-aware form of [`define_snow_category`]: a missing (or NaN)
/// amount has no category.
pub fn classify_amount(amount: Option<f64>) -> Option<SnowfallCategory> {
    amount
        .filter(|x| !x.is_nan())
        .map(define_snow_category)
}

/// Add the `snowfall_category` column derived from `average_snowfall`.
///
/// All other columns are left untouched. Rows without a snowfall amount get
/// a missing category rather than a guessed one. An existing category
/// column is recomputed in place.
pub fn categorize_snowfall_amount(mut data: Table) -> Result<Table, TableError> {
    let categories: Vec<Option<String>> = data
        .float_column(SNOWFALL_COLUMN)?
        .iter()
        .map(|amount| classify_amount(*amount).map(|c| c.as_str().to_string()))
        .collect();

    let uncategorized = categories.iter().filter(|c| c.is_none()).count();
    if uncategorized > 0 {
        warn!(
            "{} of {} rows have no snowfall amount and were left uncategorized",
            uncategorized,
            categories.len()
        );
    }
    debug!("Categorized {} rows", categories.len() - uncategorized);

    data.with_column(CATEGORY_COLUMN, Column::Text(categories))?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(define_snow_category(20.0), SnowfallCategory::High);
        assert_eq!(define_snow_category(15.01), SnowfallCategory::High);
        assert_eq!(define_snow_category(15.0), SnowfallCategory::Medium);
        assert_eq!(define_snow_category(10.0), SnowfallCategory::Medium);
        assert_eq!(define_snow_category(5.0), SnowfallCategory::Medium);
        assert_eq!(define_snow_category(4.99), SnowfallCategory::Low);
        assert_eq!(define_snow_category(-3.0), SnowfallCategory::Low);
    }

    #[test]
    fn test_threshold_sweep() {
        for tenths in -100..=300 {
            let x = tenths as f64 / 10.0;
            let expected = if x > 15.0 {
                "High"
            } else if x < 5.0 {
                "Low"
            } else {
                "Medium"
            };
            assert_eq!(define_snow_category(x).as_str(), expected, "x = {x}");
        }
    }

    #[test]
    fn test_classify_missing_amount() {
        assert_eq!(classify_amount(None), None);
        assert_eq!(classify_amount(Some(f64::NAN)), None);
        assert_eq!(classify_amount(Some(3.0)), Some(SnowfallCategory::Low));
    }

    #[test]
    fn test_label_round_trip_and_order() {
        for category in [
            SnowfallCategory::High,
            SnowfallCategory::Low,
            SnowfallCategory::Medium,
        ] {
            assert_eq!(category.to_string().parse::<SnowfallCategory>(), Ok(category));
        }
        assert_eq!(
            "Extreme".parse::<SnowfallCategory>(),
            Err(ParseCategoryError("Extreme".to_string()))
        );
        assert_eq!(
            ParseCategoryError("Extreme".to_string()).to_string(),
            "Unknown snowfall category: Extreme"
        );

        let mut labels = vec!["Medium", "High", "Low"];
        labels.sort();
        let mut categories = vec![
            SnowfallCategory::Medium,
            SnowfallCategory::High,
            SnowfallCategory::Low,
        ];
        categories.sort();
        let sorted: Vec<&str> = categories.iter().map(|c| c.as_str()).collect();
        assert_eq!(sorted, labels);
    }

    #[test]
    fn test_categorize_requires_snowfall_column() {
        let table = Table::from_columns(vec![(
            "site".to_string(),
            Column::Text(vec![Some("A".to_string())]),
        )])
        .unwrap();

        assert_eq!(
            categorize_snowfall_amount(table).unwrap_err(),
            TableError::MissingColumn(SNOWFALL_COLUMN.to_string())
        );
    }

    #[test]
    fn test_categorize_leaves_missing_uncategorized() {
        let table = Table::from_columns(vec![(
            SNOWFALL_COLUMN.to_string(),
            Column::Float(vec![Some(16.0), None, Some(5.0)]),
        )])
        .unwrap();

        let categorized = categorize_snowfall_amount(table).unwrap();
        assert_eq!(
            categorized.text_column(CATEGORY_COLUMN).unwrap(),
            &[Some("High".to_string()), None, Some("Medium".to_string())]
        );
    }
}
