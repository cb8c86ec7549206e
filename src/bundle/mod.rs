//! Bundle emission: per-file minification and concatenation.

mod emit;
mod error;
mod minify;

pub use emit::render_with;
pub use error::BundleError;
pub use minify::{MinifyOptions, minify_js};
