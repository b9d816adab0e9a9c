// Version information for the Animal Classifier Node

/// Full version string with feature description
pub const VERSION: &str = "v1.0.0-imagenet-top5-2025-11-18";

/// Semantic version number
pub const VERSION_NUMBER: &str = "1.0.0";

/// Major version number
pub const VERSION_MAJOR: u32 = 1;

/// Minor version number
pub const VERSION_MINOR: u32 = 0;

/// Patch version number
pub const VERSION_PATCH: u32 = 0;

/// Build date
pub const BUILD_DATE: &str = "2025-11-18";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "imagenet-top5",
    "onnx-cpu-inference",
    "multipart-upload",
    "animal-keywords",
    "permissive-cors",
];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("Animal Classifier Node {} ({})", VERSION_NUMBER, BUILD_DATE)
}

/// Get full version info for API responses
pub fn get_version_info() -> serde_json::Value {
    serde_json::json!({
        "version": VERSION_NUMBER,
        "build": VERSION,
        "date": BUILD_DATE,
        "features": FEATURES,
    })
}
