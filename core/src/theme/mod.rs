//! # Theme Module
//!
//! Theme discovery and loading for the Plumage pipeline.
//!
//! A theme is a JSON file in the themes directory; its base name (extension
//! stripped) is the name shown to the user. The module is built around two
//! pieces:
//!
//! - **[`ThemeLoader`]** - Filesystem discovery and loading of theme files
//! - **[`Theme`]** - The parsed theme definition with its two managed fields
//!
//! ## Theme File Structure
//!
//! ```text
//! themes/
//! ├── ocean.json
//! ├── night.json
//! └── forest.json
//! ```
//!
//! Each file is a JSON object with two optional members:
//!
//! ```json
//! {
//!     "workbench.colorCustomizations": {
//!         "titleBar.activeBackground": "#123456"
//!     },
//!     "peacock.color": "#123456"
//! }
//! ```

pub mod loader;
pub mod types;
pub mod validation;

pub use loader::ThemeLoader;
pub use types::Theme;
