//! Profile data loading and validation.
//!
//! The profile file is the single content source of the site. It is
//! parsed strictly (unlike the pruner's lexical scan, which works on the
//! raw source text) and validated at load time: a section type listed
//! twice is a content error, rejected here rather than rendered twice.

mod error;
mod types;

pub use error::ProfileError;
pub use types::{Metadata, ProfileData, SectionEntry, SocialLink, SocialPlatform, ThemeOverride};

use std::{collections::HashSet, fs, path::Path};

/// Load profile data from a TOML file.
pub fn load(path: &Path) -> Result<ProfileData, ProfileError> {
    let content =
        fs::read_to_string(path).map_err(|err| ProfileError::Io(path.to_path_buf(), err))?;
    from_str(&content)
}

/// Parse and validate profile data from a TOML string.
pub fn from_str(content: &str) -> Result<ProfileData, ProfileError> {
    let profile: ProfileData = toml::from_str(content)?;
    validate(&profile)?;
    Ok(profile)
}

/// Reject profiles that list the same section type twice.
fn validate(profile: &ProfileData) -> Result<(), ProfileError> {
    let mut seen = HashSet::new();
    for entry in &profile.sections {
        if !seen.insert(entry.section.as_str()) {
            return Err(ProfileError::DuplicateSection(entry.section.clone()));
        }
    }
    Ok(())
}
