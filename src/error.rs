use crate::importers::LoadError;
use crate::table::TableError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Load error: {0}")]
    Load(#[from] LoadError),
    #[error("Table error: {0}")]
    Table(#[from] TableError),
}
