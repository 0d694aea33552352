use crate::config::WcbConfig;
use crate::error::{ConfigError, Result};
use std::path::Path;
use wcb_pipeline::destination::out_dir_segment;

impl WcbConfig {
    /// Validate configuration for a project rooted at `root`.
    ///
    /// Checks the fields a user can get wrong in a config file or on the
    /// command line and names the offending field. The pipeline repeats the
    /// structural checks before it starts.
    pub fn validate(&self, root: &Path) -> Result<()> {
        if out_dir_segment(&self.out_dir).is_none() {
            return Err(ConfigError::InvalidValue {
                field: "outDir".to_string(),
                value: self.out_dir.display().to_string(),
                hint: "Use a relative subdirectory of the project root, such as \"dist\""
                    .to_string(),
            }
            .into());
        }

        let src = root.join(&self.src_dir);
        if !src.is_dir() {
            return Err(ConfigError::InvalidValue {
                field: "srcDir".to_string(),
                value: self.src_dir.display().to_string(),
                hint: format!("Create {} or point srcDir at your templates", src.display()),
            }
            .into());
        }

        if self.cdn_prefix.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "cdnPrefix".to_string(),
                value: format!("{:?}", self.cdn_prefix),
                hint: "Remove cdnPrefix to use the jsDelivr default".to_string(),
            }
            .into());
        }

        if self.manifest_file.is_empty()
            || self.manifest_file.contains(['/', '\\'])
            || self.manifest_file == "."
            || self.manifest_file == ".."
        {
            return Err(ConfigError::InvalidValue {
                field: "manifestFile".to_string(),
                value: self.manifest_file.clone(),
                hint: "Use a plain file name such as \"CDN-FILES.md\"".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// Validate an explicit `--tag` value.
pub fn validate_tag(tag: &str) -> Result<()> {
    if tag.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidValue {
            field: "tag".to_string(),
            value: tag.to_string(),
            hint: "Tags cannot contain whitespace; pass a git tag such as v2.0.0".to_string(),
        }
        .into());
    }
    Ok(())
}
