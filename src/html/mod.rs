//! Production entry page derivation.

mod error;
mod rewrite;

pub use error::RewriteError;
pub use rewrite::{RewriteOptions, Rewriter};
