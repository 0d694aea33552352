use std::path::PathBuf;

/// Config file looked up in the project root when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "wcb.config.json";

/// Prefix of the environment variables merged into the configuration.
pub const ENV_PREFIX: &str = "WCB_";

pub fn default_src_dir() -> PathBuf {
    PathBuf::from(wcb_pipeline::DEFAULT_SRC_DIR)
}

pub fn default_out_dir() -> PathBuf {
    PathBuf::from(wcb_pipeline::DEFAULT_OUT_DIR)
}

pub fn default_cdn_prefix() -> String {
    wcb_pipeline::DEFAULT_CDN_PREFIX.to_string()
}

pub fn default_package_manifest() -> PathBuf {
    PathBuf::from(wcb_pipeline::DEFAULT_PACKAGE_MANIFEST)
}

pub fn default_manifest_file() -> String {
    wcb_pipeline::MANIFEST_FILE_NAME.to_string()
}
