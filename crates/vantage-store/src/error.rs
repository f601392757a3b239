use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid store key '{0}': use letters, digits, '-' or '_'")]
    InvalidKey(String),

    #[error("store I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("keyring error: {0}")]
    Keyring(String),

    #[error("store lock poisoned")]
    Poisoned,
}
