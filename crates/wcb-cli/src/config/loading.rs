use crate::cli::BuildArgs;
use crate::config::{DEFAULT_CONFIG_FILE, ENV_PREFIX, WcbConfig, defaults::*};
use crate::error::{ConfigError, Result};
use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized},
};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// `WCB_*` variable suffixes and the config keys they set. Anything else
/// under the prefix is ignored.
const ENV_KEYS: &[(&str, &str)] = &[
    ("src_dir", "srcDir"),
    ("out_dir", "outDir"),
    ("cdn_prefix", "cdnPrefix"),
    ("package_manifest", "packageManifest"),
    ("manifest_file", "manifestFile"),
    ("minify", "minify"),
    ("clean", "clean"),
];

/// Values set on the command line. Unset flags are skipped so they do not
/// shadow the file or the environment.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    src_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    out_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    minify: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    clean: Option<bool>,
}

impl From<&BuildArgs> for CliOverrides {
    fn from(args: &BuildArgs) -> Self {
        Self {
            src_dir: args.src_dir.clone(),
            out_dir: args.out_dir.clone(),
            minify: args.minify.then_some(true),
            clean: args.clean.then_some(true),
        }
    }
}

impl WcbConfig {
    /// Load configuration from multiple sources.
    /// Priority: CLI args > environment variables > config file > defaults
    ///
    /// A relative `--config` path is resolved against `root`. An explicit
    /// config file that does not exist is an error; a missing
    /// `wcb.config.json` is not.
    pub fn load(args: &BuildArgs, root: &Path) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default_config()));

        let config_file = match &args.config {
            Some(path) => {
                let path = crate::commands::utils::resolve_path(path, root);
                if !path.is_file() {
                    return Err(ConfigError::NotFound(path).into());
                }
                Some(path)
            }
            None => {
                let default_path = root.join(DEFAULT_CONFIG_FILE);
                default_path.is_file().then_some(default_path)
            }
        };

        if let Some(path) = config_file {
            tracing::debug!("Loading config from {}", path.display());
            figment = figment.merge(Json::file(path));
        }

        // WCB_OUT_DIR, WCB_MINIFY, ...
        figment = figment.merge(Env::prefixed(ENV_PREFIX).filter_map(|key| {
            ENV_KEYS
                .iter()
                .find(|(suffix, _)| key.as_str().eq_ignore_ascii_case(suffix))
                .map(|(_, field)| (*field).into())
        }));

        figment = figment.merge(Serialized::defaults(CliOverrides::from(args)));

        figment.extract().map_err(|e| {
            ConfigError::Invalid {
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Get default configuration values.
    pub(crate) fn default_config() -> Self {
        Self {
            src_dir: default_src_dir(),
            out_dir: default_out_dir(),
            cdn_prefix: default_cdn_prefix(),
            package_manifest: default_package_manifest(),
            manifest_file: default_manifest_file(),
            minify: false,
            clean: false,
        }
    }
}
