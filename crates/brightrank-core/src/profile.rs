use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, ProfileError};

/// A competitor tracked alongside the brand, with its last known visibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competitor {
    pub name: String,
    pub visibility: u32,
}

/// The brand being tracked: name, comma-separated keywords, competitors.
///
/// `keywords` keeps the string as the user entered it; use
/// [`BrandProfile::keyword_list`] for the parsed form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandProfile {
    pub brand_name: String,
    pub keywords: String,
    #[serde(default)]
    pub competitors: Vec<Competitor>,
}

impl BrandProfile {
    #[must_use]
    pub fn new(brand_name: &str, keywords: &str) -> Self {
        Self {
            brand_name: brand_name.trim().to_string(),
            keywords: keywords.to_string(),
            competitors: Vec::new(),
        }
    }

    /// Split the keyword string on commas, trimming and dropping empty entries.
    #[must_use]
    pub fn keyword_list(&self) -> Vec<String> {
        split_keywords(&self.keywords)
    }

    /// Check the profile can be saved.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::BlankBrandName`] if the brand name is blank.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.brand_name.trim().is_empty() {
            return Err(ProfileError::BlankBrandName);
        }
        Ok(())
    }

    /// Track another keyword.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::BlankKeyword`] for blank input and
    /// [`ProfileError::DuplicateKeyword`] if it is already tracked.
    pub fn add_keyword(&mut self, keyword: &str) -> Result<(), ProfileError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(ProfileError::BlankKeyword);
        }
        let mut list = self.keyword_list();
        if list.iter().any(|k| k == keyword) {
            return Err(ProfileError::DuplicateKeyword(keyword.to_string()));
        }
        list.push(keyword.to_string());
        self.keywords = list.join(", ");
        Ok(())
    }

    /// Stop tracking a keyword. Returns `false` if it was not tracked.
    pub fn remove_keyword(&mut self, keyword: &str) -> bool {
        let keyword = keyword.trim();
        let list = self.keyword_list();
        let before = list.len();
        let kept: Vec<String> = list.into_iter().filter(|k| k != keyword).collect();
        if kept.len() == before {
            return false;
        }
        self.keywords = kept.join(", ");
        true
    }

    /// Track a competitor with a user-supplied visibility score.
    ///
    /// # Errors
    ///
    /// Returns a [`ProfileError`] for a blank or duplicate name, or a score
    /// outside `0..=100`.
    pub fn add_competitor(&mut self, name: &str, visibility: i64) -> Result<(), ProfileError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ProfileError::BlankCompetitorName);
        }
        let visibility = u32::try_from(visibility)
            .ok()
            .filter(|v| *v <= 100)
            .ok_or(ProfileError::ScoreOutOfRange(visibility))?;
        if self.competitors.iter().any(|c| c.name == name) {
            return Err(ProfileError::DuplicateCompetitor(name.to_string()));
        }
        self.competitors.push(Competitor {
            name: name.to_string(),
            visibility,
        });
        Ok(())
    }

    /// Remove a competitor by exact name. Returns `false` if none matched.
    pub fn remove_competitor(&mut self, name: &str) -> bool {
        let before = self.competitors.len();
        self.competitors.retain(|c| c.name != name);
        self.competitors.len() != before
    }

    #[must_use]
    pub fn competitor_names(&self) -> Vec<String> {
        self.competitors.iter().map(|c| c.name.clone()).collect()
    }
}

/// Split a comma-separated keyword string into trimmed, non-empty keywords.
#[must_use]
pub fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Deserialize)]
struct ProfileFile {
    brand_name: String,
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    competitors: Vec<ProfileFileCompetitor>,
}

#[derive(Debug, Deserialize)]
struct ProfileFileCompetitor {
    name: String,
    visibility: i64,
}

/// Load and validate a brand profile from a YAML file.
///
/// ```yaml
/// brand_name: Widget Co
/// keywords: [best widget, eco widgets]
/// competitors:
///   - name: Gadget Inc
///     visibility: 64
/// ```
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_profile_file(path: &Path) -> Result<BrandProfile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ProfileFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: ProfileFile = serde_yaml::from_str(&content)?;
    profile_from_file(file)
}

fn profile_from_file(file: ProfileFile) -> Result<BrandProfile, ConfigError> {
    let mut profile = BrandProfile::new(&file.brand_name, "");
    profile.validate()?;

    let mut seen = HashSet::new();
    for keyword in &file.keywords {
        // Repeated keywords in a hand-written file are collapsed, not rejected.
        if seen.insert(keyword.trim().to_string()) {
            profile.add_keyword(keyword)?;
        }
    }
    for competitor in file.competitors {
        profile.add_competitor(&competitor.name, competitor.visibility)?;
    }

    Ok(profile)
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod tests;
