use thiserror::Error;
use vantage_api::ApiError;
use vantage_store::StoreError;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("could not encode cached record: {0}")]
    Encode(#[from] serde_json::Error),
}
