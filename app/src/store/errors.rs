use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Could not read `{path}': {error}")]
    IO {
        error: std::io::Error,
        path: PathBuf,
    },

    #[error("Could not parse `{path}': {error}")]
    Deserialize { error: String, path: PathBuf },

    #[error("Invalid content in `{path}': {reason}")]
    Invalid { reason: String, path: PathBuf },
}

pub type Result<T> = std::result::Result<T, Error>;
