use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("store error: {0}")]
    Store(String),
    #[error("insert into `{table}` returned no rows")]
    EmptyInsert { table: &'static str },
    #[error("record translation failed: {0}")]
    Model(#[from] models::errors::ModelError),
}
