//! Script collection: ordered, deduplicated identity → content mapping.

mod collect;
mod error;
mod id;
mod ignore;
mod map;

pub use collect::{CollectOptions, collect};
pub use error::CollectError;
pub use id::AssetId;
pub use ignore::IgnoreSet;
pub use map::AssetMap;
