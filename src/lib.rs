pub mod classify;
pub mod config;
pub mod error;
pub mod importers;
pub mod pipeline;
pub mod summary;
pub mod table;
pub mod telemetry;

pub use classify::{
    categorize_snowfall_amount, define_snow_category, ParseCategoryError, SnowfallCategory,
};
pub use config::LoadConfig;
pub use error::Error;
pub use importers::load_data;
pub use pipeline::summarize_file;
pub use summary::{summarize_data, Summary, SummaryRow};
pub use table::{Column, Table, TableError};
