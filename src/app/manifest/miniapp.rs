//! MiniApp manifest schema
//!
//! <https://w3c.github.io/miniapp-manifest/>

use serde::{Deserialize, Serialize};

use super::common::{AppColor, AppManifest, ImageResource, TextDirection};

/// An application manifest is a JSON document that contains startup
/// parameters and application defaults for when a MiniApp is launched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MiniAppManifest {
    /// MiniApp identifier
    pub app_id: String,

    /// MiniApp color scheme
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_scheme: Option<ColorScheme>,

    /// MiniApp description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Supported device types, e.g. "phone", "tablet"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_type: Option<Vec<String>>,

    /// Direction of texts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<TextDirection>,

    /// MiniApp icons
    pub icons: Vec<ImageResource>,

    /// MiniApp primary language
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    /// MiniApp name
    pub name: String,

    /// Page routing information; the first entry is the home page
    pub pages: Vec<String>,

    /// Platform version supported
    pub platform_version: PlatformVersion,

    /// Required permissions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub req_permissions: Option<Vec<Permission>>,

    /// MiniApp short name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,

    /// MiniApp version
    pub version: Version,

    /// MiniApp widgets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widgets: Option<Vec<Widget>>,

    /// Window style
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window: Option<WindowStyle>,
}

/// Preferred color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Auto,
    Light,
    Dark,
}

/// MiniApp version
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Version {
    /// Version code, for internal comparison
    pub code: u32,
    /// Version name, displayed to users
    pub name: String,
}

/// Platform version requirements
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlatformVersion {
    pub min_code: u32,
    pub release_type: String,
    pub target_code: u32,
}

/// A permission the MiniApp requests from the user agent
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permission {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// A MiniApp widget
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Widget {
    pub name: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_code: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub req_permissions: Option<Vec<Permission>>,
}

/// Window style for the MiniApp pages
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_design_width: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<AppColor>,
    /// "light" or "dark"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_text_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_pull_down_refresh: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fullscreen: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation_bar_background_color: Option<AppColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation_bar_text_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation_bar_title_text: Option<String>,
    /// "default" or "custom"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<String>,
}

impl MiniAppManifest {
    /// First entry of `pages`, if any
    pub fn home_page(&self) -> Option<&str> {
        self.pages.first().map(String::as_str)
    }
}

impl AppManifest for MiniAppManifest {
    fn id(&self) -> &str {
        &self.app_id
    }

    fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn short_name(&self) -> Option<&str> {
        self.short_name.as_deref()
    }

    fn dir(&self) -> Option<TextDirection> {
        self.dir
    }

    fn icons(&self) -> Option<&[ImageResource]> {
        Some(&self.icons)
    }
}
