//! Configuration section definitions.
//!
//! Each module corresponds to a section in `shellpack.toml`:
//!
//! | Module    | TOML Section | Purpose                               |
//! |-----------|--------------|---------------------------------------|
//! | `assets`  | `[assets]`   | Script tree, ordering and ignore list |
//! | `bundle`  | `[bundle]`   | Bundle location and minification      |
//! | `html`    | `[html]`     | Entry pages and marker texts          |
//! | `serve`   | `[serve]`    | Preview server                        |
//! | `version` | `[version]`  | Version file location                 |

mod assets;
mod bundle;
mod html;
mod serve;
mod version;

pub use assets::AssetsConfig;
pub use bundle::BundleConfig;
pub use html::HtmlConfig;
pub use serve::ServeConfig;
pub use version::VersionConfig;
