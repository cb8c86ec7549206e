//! Emitter errors.

use std::path::PathBuf;
use thiserror::Error;

use crate::asset::AssetId;

#[derive(Debug, Error)]
pub enum BundleError {
    #[error("failed to minify `{id}`: {message}")]
    Minify { id: AssetId, message: String },

    #[error("failed to write bundle `{}`", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
