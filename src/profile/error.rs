//! Profile data error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating profile data
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Profile data parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Duplicate section `{0}` in profile data")]
    DuplicateSection(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_profile_error_display() {
        let io_err = ProfileError::Io(
            PathBuf::from("profile.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        assert!(format!("{io_err}").contains("profile.toml"));

        let dup = ProfileError::DuplicateSection("about".to_string());
        assert!(format!("{dup}").contains("`about`"));
    }
}
