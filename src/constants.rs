//! Application constants for the MiniApp report generator
//!
//! This module centralizes the constants used throughout the crate,
//! organized by functional domain.

/// Test corpus layout
pub mod corpus {
    /// JSON-LD metadata file inside each test directory
    pub const METADATA_FILE: &str = "test.jsonld";

    /// Directory holding the application sources of a test
    pub const SOURCE_DIR: &str = "src";

    /// Manifest file inside the source directory
    pub const MANIFEST_FILE: &str = "manifest.json";

    /// Extension of packaged MiniApp files
    pub const PACKAGE_EXTENSION: &str = "ma";

    /// Directory entries starting with this prefix are internal or templates
    pub const EXCLUDE_PREFIX: &str = "xx-";
}

/// Fallback values used when a descriptor field is missing
pub mod fallback {
    pub const TITLE: &str = "(No title)";
    pub const DESCRIPTION: &str = "(No description)";
    pub const COVERAGE: &str = "(Uncategorized)";
    pub const CREATOR: &str = "(Unknown)";
}

/// Implementation report constants
pub mod report {
    /// Variant name given to merged reports
    pub const CONSOLIDATED_VARIANT: &str = "consolidated";

    /// Placeholder name in a generated report template
    pub const TEMPLATE_NAME: &str = "(Implementation's name)";

    /// Placeholder reference in a generated report template
    pub const TEMPLATE_REF: &str = "https://www.example.com";

    /// Default number of files read concurrently
    pub const DEFAULT_MAX_CONCURRENT_READS: usize = 16;
}

/// Configuration file locations
pub mod config {
    /// Project-local configuration file
    pub const LOCAL_CONFIG_FILE: &str = "miniapp-report.toml";

    /// Directory under the user config dir
    pub const CONFIG_DIR_NAME: &str = "miniapp-report";

    /// File name under the user config dir
    pub const CONFIG_FILE_NAME: &str = "config.toml";
}

// Re-export commonly used constants at the top level
pub use corpus::{EXCLUDE_PREFIX, METADATA_FILE};
pub use report::{CONSOLIDATED_VARIANT, DEFAULT_MAX_CONCURRENT_READS};
