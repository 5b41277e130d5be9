//! WebApp manifest schema
//!
//! <https://www.w3.org/TR/appmanifest/#web-application-manifest>

use serde::{Deserialize, Serialize};

use super::common::{AppColor, AppManifest, ImageResource, TextDirection};

/// A WebApp manifest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WebAppManifest {
    /// Expected background color of the app while it is loading.
    ///
    /// Only meant to improve the user experience before the stylesheet is
    /// available; it must not override the stylesheet afterwards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<AppColor>,

    /// Base direction for the localizable members, e.g. "ltr"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<TextDirection>,

    /// Preferred display mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayMode>,

    /// Iconic representations of the app
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icons: Option<Vec<ImageResource>>,

    /// Identity of the application, a URL same origin as the start URL.
    ///
    /// A manifest whose identity matches an installed application is treated
    /// as a replacement for that application's manifest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Primary language tag (BCP47), e.g. "en-AU"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    /// Name of the app, e.g. "Super Racer 3000"
    pub name: String,

    /// Default screen orientation for all top-level browsing contexts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,

    /// Navigation scope, e.g. "/"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    /// Short name, e.g. "Racer3K"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,

    /// Shortcut items giving access to key tasks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcuts: Option<Vec<ShortcutItem>>,

    /// URL the developer prefers to load when the app is launched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_url: Option<String>,

    /// Default theme color for an application context
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<AppColor>,
}

/// <https://www.w3.org/TR/mediaqueries-5/#display-mode>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    Fullscreen,
    Standalone,
    MinimalUi,
    Browser,
}

/// OrientationLockType values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    Any,
    Natural,
    Landscape,
    Portrait,
    PortraitPrimary,
    PortraitSecondary,
    LandscapePrimary,
    LandscapeSecondary,
}

/// <https://www.w3.org/TR/appmanifest/#dfn-shortcut-item>
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShortcutItem {
    /// Name shown in a context menu
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,

    /// Purpose of the shortcut, may be exposed to assistive technology
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// URL within scope opened when the shortcut is activated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icons: Option<Vec<ImageResource>>,
}

impl AppManifest for WebAppManifest {
    /// `id`, falling back to `start_url` as the processed manifest does
    fn id(&self) -> &str {
        self.id
            .as_deref()
            .or(self.start_url.as_deref())
            .unwrap_or_default()
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
        self.icons.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_with_enums() {
        let json = r##"{
            "name": "Super Racer 3000",
            "short_name": "Racer3K",
            "display": "minimal-ui",
            "orientation": "portrait-primary",
            "start_url": "/start",
            "theme_color": "#3367D6"
        }"##;
        let manifest = WebAppManifest::decode(json.as_bytes()).unwrap();
        assert_eq!(manifest.display, Some(DisplayMode::MinimalUi));
        assert_eq!(manifest.orientation, Some(Orientation::PortraitPrimary));
        assert_eq!(manifest.theme_color.as_ref().unwrap().as_str(), "#3367D6");
        assert_eq!(manifest.short_name(), Some("Racer3K"));
    }

    #[test]
    fn test_id_falls_back_to_start_url() {
        let json = r#"{"name":"App","start_url":"/index.html"}"#;
        let manifest = WebAppManifest::decode(json.as_bytes()).unwrap();
        assert_eq!(manifest.id(), "/index.html");

        let json = r#"{"name":"App","id":"/app","start_url":"/index.html"}"#;
        let manifest = WebAppManifest::decode(json.as_bytes()).unwrap();
        assert_eq!(manifest.id(), "/app");

        let json = r#"{"name":"App"}"#;
        let manifest = WebAppManifest::decode(json.as_bytes()).unwrap();
        assert_eq!(manifest.id(), "");
    }

    #[test]
    fn test_unknown_display_mode_fails() {
        let json = r#"{"name":"App","display":"kiosk"}"#;
        assert!(WebAppManifest::decode(json.as_bytes()).is_err());
    }
}
