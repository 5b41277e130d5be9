//! Integration tests for manifest decoding
//!
//! These tests verify decoding of complete manifests from bytes and from
//! disk, and that re-encoding preserves the members that were present.

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use tempfile::TempDir;

    use crate::app::manifest::{
        load_manifest, AppManifest, ColorScheme, MiniAppManifest, TextDirection, WebAppManifest,
    };
    use crate::errors::ManifestError;

    const FULL_MINIAPP: &str = r##"{
        "app_id": "org.w3c.miniapp.test",
        "color_scheme": "dark",
        "description": "A test MiniApp",
        "device_type": ["phone", "tablet"],
        "dir": "rtl",
        "icons": [{"src": "common/icons/icon.png", "sizes": "48x48"}],
        "lang": "ar",
        "name": "Test",
        "pages": ["pages/index/index", "pages/detail/detail"],
        "platform_version": {"min_code": 1, "release_type": "Beta1", "target_code": 2},
        "req_permissions": [{"name": "system.permission.LOCATION", "reason": "maps"}],
        "short_name": "T",
        "version": {"code": 3, "name": "1.0.3"},
        "widgets": [{"name": "card", "path": "widgets/card", "min_code": 2}],
        "window": {
            "navigation_bar_background_color": "#ff0000",
            "navigation_bar_text_style": "white",
            "fullscreen": false,
            "design_width": 750
        }
    }"##;

    /// Test decoding of a manifest that uses every member.
    ///
    /// Purpose: Verifies that nested members and enums decode into typed fields.
    #[test]
    fn test_full_miniapp_manifest() {
        let manifest = MiniAppManifest::decode(FULL_MINIAPP.as_bytes()).unwrap();

        assert_eq!(manifest.id(), "org.w3c.miniapp.test");
        assert_eq!(manifest.color_scheme, Some(ColorScheme::Dark));
        assert_eq!(manifest.dir(), Some(TextDirection::Rtl));
        assert_eq!(manifest.home_page(), Some("pages/index/index"));
        assert_eq!(manifest.icons().unwrap()[0].sizes.as_deref(), Some("48x48"));
        assert_eq!(manifest.widgets.as_ref().unwrap()[0].min_code, Some(2));

        let window = manifest.window.as_ref().unwrap();
        assert_eq!(window.design_width, Some(750));
        assert_eq!(window.fullscreen, Some(false));
        assert!(window.orientation.is_none());
    }

    /// Test that decode-then-encode keeps exactly the members that were present.
    ///
    /// Purpose: Compares the JSON trees before and after a pass through the typed model.
    #[test]
    fn test_reencode_preserves_present_members() {
        let manifest = MiniAppManifest::decode(FULL_MINIAPP.as_bytes()).unwrap();
        let encoded = manifest.encode().unwrap();

        let original: Value = serde_json::from_str(FULL_MINIAPP).unwrap();
        let reencoded: Value = serde_json::from_slice(&encoded).unwrap();
        assert_eq!(original, reencoded);

        let webapp = r#"{"name":"Web","dir":"auto","display":"standalone","scope":"/","shortcuts":[{"name":"Open","url":"/open"}]}"#;
        let manifest = WebAppManifest::decode(webapp.as_bytes()).unwrap();
        let reencoded: Value = serde_json::from_slice(&manifest.encode().unwrap()).unwrap();
        assert_eq!(reencoded, serde_json::from_str::<Value>(webapp).unwrap());
    }

    /// Test that unknown members are ignored rather than rejected.
    #[test]
    fn test_unknown_members_ignored() {
        let json = r#"{"name":"Web","related_applications":[],"prefer_related_applications":false}"#;
        let manifest = WebAppManifest::decode(json.as_bytes()).unwrap();
        assert_eq!(manifest.name(), "Web");
    }

    #[tokio::test]
    async fn test_load_manifest_from_disk() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("manifest.json");
        tokio::fs::write(&path, FULL_MINIAPP).await.unwrap();

        let manifest: MiniAppManifest = load_manifest(&path).await.unwrap();
        assert_eq!(manifest.version.name, "1.0.3");
    }

    #[tokio::test]
    async fn test_load_missing_manifest() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("manifest.json");

        let result = load_manifest::<MiniAppManifest, _>(&path).await;
        assert!(matches!(result, Err(ManifestError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_load_malformed_manifest() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("manifest.json");
        tokio::fs::write(&path, "{ not json").await.unwrap();

        let result = load_manifest::<MiniAppManifest, _>(&path).await;
        assert!(matches!(result, Err(ManifestError::Decode(_))));
    }
}
