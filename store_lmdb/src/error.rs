use deed_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LmdbError {
    #[error("lmdb error: {0}")]
    Lmdb(#[from] heed::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<LmdbError> for StoreError {
    fn from(e: LmdbError) -> Self {
        StoreError::Backend(e.to_string())
    }
}
