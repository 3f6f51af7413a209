use std::path::Path;
use tracing::instrument;

use crate::classify::categorize_snowfall_amount;
use crate::error::Error;
use crate::importers::load_data;
use crate::summary::{summarize_data, Summary};

/// Load, categorize and summarize one observation file
#[instrument(skip_all, fields(path = %filepath.as_ref().display()))]
pub fn summarize_file(filepath: impl AsRef<Path>) -> Result<Summary, Error> {
    let data = load_data(filepath.as_ref())?;
    let categorized = categorize_snowfall_amount(data)?;
    Ok(summarize_data(&categorized)?)
}
