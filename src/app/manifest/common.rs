//! Members shared by MiniApp and WebApp manifests
//!
//! This module contains the [`AppManifest`] trait implemented by both manifest
//! kinds, the value types they share, and the decode/encode entry points.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{ManifestError, ManifestResult};

/// A manifest for an app, such as a [`MiniAppManifest`](super::MiniAppManifest)
/// (<https://w3c.github.io/miniapp-manifest/>) or a
/// [`WebAppManifest`](super::WebAppManifest) (<https://www.w3.org/TR/appmanifest/>).
pub trait AppManifest: Serialize + DeserializeOwned {
    /// Identity of the app
    fn id(&self) -> &str;

    /// Primary language (BCP47) for the values of the localizable members
    fn lang(&self) -> Option<&str>;

    /// Name of the app as it is usually displayed to the user
    fn name(&self) -> &str;

    /// Short version of the name, for places with insufficient space
    fn short_name(&self) -> Option<&str>;

    /// Base direction for the localizable members
    fn dir(&self) -> Option<TextDirection>;

    /// Images that serve as iconic representations of the app
    fn icons(&self) -> Option<&[ImageResource]>;

    /// Decode a manifest from raw JSON bytes
    fn decode(data: &[u8]) -> ManifestResult<Self> {
        Ok(serde_json::from_slice(data)?)
    }

    /// Encode the manifest back to JSON, omitting absent optional members
    fn encode(&self) -> ManifestResult<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

/// Read and decode a manifest file
pub async fn load_manifest<M, P>(path: P) -> ManifestResult<M>
where
    M: AppManifest,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let data = match tokio::fs::read(path).await {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ManifestError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(ManifestError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    debug!("Decoding manifest {} ({} bytes)", path.display(), data.len());
    M::decode(&data)
}

/// <https://www.w3.org/TR/appmanifest/#dfn-text-directions>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
    Auto,
}

/// A Hex, CSS or named color.
///
/// <https://www.w3.org/TR/appmanifest/#dfn-background_color>
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppColor(pub String);

impl AppColor {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AppColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// <https://www.w3.org/TR/image-resource/>
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageResource {
    /// URL from where to obtain the image data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    /// Sizes of the image, using the syntax of link's `sizes` attribute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<String>,

    /// Image MIME type
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    /// Accessible name of the image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}
