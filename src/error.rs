use thiserror::Error;

/// Errors returned by catalog operations
///
/// `AlreadyInProgress` and the not-found variants are caller errors and are never
/// notified as failures. `Backend` wraps whatever the executor reported.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("{operation} is already in progress")]
    AlreadyInProgress { operation: String },

    #[error("mod \"{0}\" not found")]
    ModNotFound(String),

    #[error("unknown version \"{version}\" for mod \"{mod_id}\"")]
    VersionNotFound { mod_id: String, version: String },

    #[error("mod \"{0}\" isn't installed")]
    NotInstalled(String),

    #[error("invalid version format \"{version}\": {source}")]
    InvalidVersionFormat {
        version: String,
        #[source]
        source: semver::Error,
    },

    #[error("backend failure: {0:#}")]
    Backend(#[source] anyhow::Error),
}

impl CatalogError {
    pub(crate) fn in_progress(operation: impl Into<String>) -> Self {
        Self::AlreadyInProgress {
            operation: operation.into(),
        }
    }

    /// Whether this refers to a mod or version that doesn't exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ModNotFound(_) | Self::VersionNotFound { .. })
    }

    pub fn is_already_in_progress(&self) -> bool {
        matches!(self, Self::AlreadyInProgress { .. })
    }

    pub fn is_backend_failure(&self) -> bool {
        matches!(self, Self::Backend(_))
    }
}

/// Alias for a `Result` with the error type [`CatalogError`]
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classes() {
        assert!(CatalogError::ModNotFound("a".into()).is_not_found());
        assert!(
            CatalogError::VersionNotFound {
                mod_id: "a".into(),
                version: "1.0.0".into(),
            }
            .is_not_found()
        );
        assert!(CatalogError::in_progress("loading mods").is_already_in_progress());
        assert!(CatalogError::Backend(anyhow::anyhow!("boom")).is_backend_failure());
        assert!(!CatalogError::NotInstalled("a".into()).is_not_found());
    }

    #[test]
    fn test_error_messages() {
        let err = CatalogError::in_progress("install of mod \"a\"");
        assert_eq!(err.to_string(), "install of mod \"a\" is already in progress");

        let err = CatalogError::Backend(anyhow::anyhow!("checksum mismatch"));
        assert_eq!(err.to_string(), "backend failure: checksum mismatch");
    }
}
