//! # Settings Module
//!
//! The workspace settings document and the merge that applies a theme to it.
//!
//! The settings file is an arbitrary JSON object of which exactly two keys
//! are managed here:
//!
//! - `workbench.colorCustomizations` - merged per-key with the theme's
//!   customizations
//! - `peacock.color` - replaced wholesale with the theme's accent color
//!
//! Every other key is opaque passthrough data: [`SettingsDocument`] only
//! ever touches the two managed keys, and the backing map preserves
//! insertion order, so untouched keys survive byte-for-byte in their prior
//! relative order.

pub mod document;

pub use document::{ACCENT_COLOR_KEY, COLOR_CUSTOMIZATIONS_KEY, SettingsDocument};
