//! MiniApp and WebApp manifest schemas
//!
//! This module provides typed, structurally decoded representations of the
//! W3C MiniApp manifest and the W3C Web Application manifest. Optional members
//! are explicit `Option` fields and are omitted again on encode, so a decoded
//! manifest re-encodes with exactly the members it was given.
//!
//! # Module Organization
//!
//! - [`common`] - The [`AppManifest`] trait, shared value types, decode/encode
//! - [`miniapp`] - [`MiniAppManifest`] and its nested members
//! - [`webapp`] - [`WebAppManifest`] and its nested members
//!
//! # Examples
//!
//! ```rust
//! use miniapp_report::app::manifest::{AppManifest, MiniAppManifest};
//!
//! let json = br#"{"app_id":"org.example.app","name":"Demo","icons":[],"pages":["pages/index"],
//!     "version":{"code":1,"name":"1.0"},
//!     "platform_version":{"min_code":1,"release_type":"stable","target_code":1}}"#;
//! let manifest = MiniAppManifest::decode(json)?;
//! assert_eq!(manifest.id(), "org.example.app");
//! # Ok::<(), miniapp_report::errors::ManifestError>(())
//! ```

pub mod common;
pub mod miniapp;
pub mod webapp;

#[cfg(test)]
pub mod tests;

pub use common::{load_manifest, AppColor, AppManifest, ImageResource, TextDirection};
pub use miniapp::{
    ColorScheme, MiniAppManifest, Permission, PlatformVersion, Version, Widget, WindowStyle,
};
pub use webapp::{DisplayMode, Orientation, ShortcutItem, WebAppManifest};
