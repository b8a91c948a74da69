//! Product manifest loading from `app/package.json`

use crate::bundler::error::{Error, ErrorExt, Result};
use serde::Deserialize;
use std::path::Path;

/// Product naming and versioning read once from the application's package.json.
///
/// Immutable for the duration of a release; every branded name and output
/// file name is derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppManifest {
    /// Package name, used for release output names (e.g. "myapp")
    pub name: String,

    /// Human-readable product name, used for the bundle and executables (e.g. "MyApp")
    #[serde(rename = "productName")]
    pub product_name: String,

    /// Reverse-DNS bundle identifier (e.g. "com.example.myapp")
    pub identifier: String,

    /// Version string (e.g. "1.2.0")
    pub version: String,
}

impl AppManifest {
    /// Release directory name: `<name>_<version>`
    pub fn release_name(&self) -> String {
        format!("{}_{}", self.name, self.version)
    }

    /// Disk image file name: `<name>_<version>.dmg`
    pub fn dmg_file_name(&self) -> String {
        format!("{}.dmg", self.release_name())
    }

    /// Staged bundle directory name: `<productName>.app`
    pub fn app_bundle_name(&self) -> String {
        format!("{}.app", self.product_name)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        let fields = [
            ("name", &self.name),
            ("productName", &self.product_name),
            ("identifier", &self.identifier),
            ("version", &self.version),
        ];

        for (key, value) in fields {
            if value.trim().is_empty() {
                return Err(Error::Manifest {
                    path: path.to_path_buf(),
                    reason: format!("'{key}' must not be empty"),
                });
            }
        }

        // These end up as single path components
        for (key, value) in [
            ("name", &self.name),
            ("productName", &self.product_name),
            ("version", &self.version),
        ] {
            if value.contains('/') || value.contains('\\') {
                return Err(Error::Manifest {
                    path: path.to_path_buf(),
                    reason: format!("'{key}' must not contain path separators: {value:?}"),
                });
            }
        }

        Ok(())
    }
}

/// Load and validate the product manifest.
///
/// Missing file, malformed JSON, and missing or empty required keys are all
/// fatal; the release does not start without a manifest.
pub async fn load_manifest(path: &Path) -> Result<AppManifest> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .fs_context("reading manifest", path)?;

    let manifest: AppManifest = serde_json::from_str(&contents).map_err(|e| Error::Manifest {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    manifest.validate(path)?;

    log::debug!(
        "Loaded manifest {} ({} {}, {})",
        path.display(),
        manifest.product_name,
        manifest.version,
        manifest.identifier
    );

    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest() -> AppManifest {
        AppManifest {
            name: "myapp".into(),
            product_name: "MyApp".into(),
            identifier: "com.x.myapp".into(),
            version: "1.2.0".into(),
        }
    }

    #[test]
    fn output_names_derive_from_name_and_version() {
        let m = manifest();
        assert_eq!(m.release_name(), "myapp_1.2.0");
        assert_eq!(m.dmg_file_name(), "myapp_1.2.0.dmg");
        assert_eq!(m.app_bundle_name(), "MyApp.app");
    }

    #[tokio::test]
    async fn loads_package_json_ignoring_extra_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        std::fs::write(
            &path,
            r#"{
                "name": "myapp",
                "productName": "MyApp",
                "identifier": "com.x.myapp",
                "version": "1.2.0",
                "main": "background.js",
                "dependencies": {}
            }"#,
        )
        .unwrap();

        assert_eq!(load_manifest(&path).await.unwrap(), manifest());
    }

    #[tokio::test]
    async fn missing_manifest_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_manifest(&dir.path().join("package.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Fs { context: "reading manifest", .. }));
    }

    #[tokio::test]
    async fn missing_key_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        std::fs::write(&path, r#"{"name": "myapp", "version": "1.0.0"}"#).unwrap();

        let err = load_manifest(&path).await.unwrap_err();
        assert!(matches!(err, Error::Manifest { .. }));
        assert!(err.to_string().contains("productName"));
    }

    #[tokio::test]
    async fn malformed_json_names_the_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        std::fs::write(&path, r#"{"name": "myapp","#).unwrap();

        let err = load_manifest(&path).await.unwrap_err();
        match err {
            Error::Manifest { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn empty_value_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        std::fs::write(
            &path,
            r#"{"name": "myapp", "productName": " ", "identifier": "a.b", "version": "1.0.0"}"#,
        )
        .unwrap();

        let err = load_manifest(&path).await.unwrap_err();
        assert!(err.to_string().contains("'productName' must not be empty"));
    }

    #[tokio::test]
    async fn path_separators_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        std::fs::write(
            &path,
            r#"{"name": "../myapp", "productName": "MyApp", "identifier": "a.b", "version": "1.0.0"}"#,
        )
        .unwrap();

        let err = load_manifest(&path).await.unwrap_err();
        assert!(err.to_string().contains("path separators"));
    }
}
