//! `neumorph.toml`: starting values for the editor and server settings.
//!
//! ```toml
//! [defaults]
//! base = "#e0e5ec"
//! offset = 10
//! blur = 20
//! radius = 16
//! inset = false
//!
//! [snippet]
//! class_name = "my-neo"
//!
//! [server]
//! host = "127.0.0.1"
//! port = 4747
//! ```

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::color::hex_to_color;
use crate::error::ConfigError;
use crate::params::{self, EffectParams};
use crate::snippet::SnippetOptions;

pub const DEFAULT_CONFIG_FILE: &str = "neumorph.toml";
pub const DEFAULT_PORT: u16 = 4747;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub defaults: DefaultsConfig,
    pub snippet: SnippetOptions,
    pub server: ServerConfig,
}

/// Raw starting values. The base stays a string until [`Config::effect_params`]
/// validates it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultsConfig {
    pub base: String,
    pub offset: u32,
    pub blur: u32,
    pub radius: u32,
    pub inset: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            base: params::DEFAULT_BASE.to_hex(),
            offset: params::DEFAULT_OFFSET,
            blur: params::DEFAULT_BLUR,
            radius: params::DEFAULT_RADIUS,
            inset: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
        // fail early on a bad base rather than at first render
        config.effect_params()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `path` if given (it must exist), else `neumorph.toml` in the
    /// working directory if present, else the built-in defaults.
    pub fn discover(path: Option<&Path>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        Self::discover_in(Path::new("."), path)
    }

    /// [`Config::discover`] with `dir` standing in for the working directory.
    pub fn discover_in(dir: &Path, path: Option<&Path>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        if let Some(path) = path {
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }
        let default_path = dir.join(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            let config = Self::load(&default_path)?;
            return Ok((config, Some(default_path)));
        }
        Ok((Self::default(), None))
    }

    /// The configured starting parameters, clamped to the control bounds.
    pub fn effect_params(&self) -> Result<EffectParams, ConfigError> {
        let d = &self.defaults;
        let base = hex_to_color(&d.base).map_err(|source| ConfigError::InvalidBase {
            value: d.base.clone(),
            source,
        })?;
        let raw = EffectParams {
            base,
            offset_px: d.offset,
            blur_px: d.blur,
            radius_px: d.radius,
            inset: d.inset,
        };
        let clamped = raw.clamped();
        if clamped != raw {
            tracing::warn!(
                offset = d.offset,
                blur = d.blur,
                radius = d.radius,
                "config defaults out of range, clamped"
            );
        }
        Ok(clamped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.effect_params().unwrap(), EffectParams::default());
        assert_eq!(config.server.addr().to_string(), "127.0.0.1:4747");
    }

    #[test]
    fn partial_sections() {
        let config = Config::from_toml_str(
            r##"
            [defaults]
            base = "#abc"
            inset = true

            [snippet]
            class_name = "card"

            [server]
            port = 8080
            "##,
        )
        .unwrap();
        let p = config.effect_params().unwrap();
        assert_eq!(p.base, Color::rgb(0xaa, 0xbb, 0xcc));
        assert!(p.inset);
        assert_eq!(p.offset_px, params::DEFAULT_OFFSET);
        assert_eq!(config.snippet.class_name, "card");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn out_of_range_defaults_are_clamped() {
        let config = Config::from_toml_str("[defaults]\noffset = 100\nblur = 0\n").unwrap();
        let p = config.effect_params().unwrap();
        assert_eq!(p.offset_px, 30);
        assert_eq!(p.blur_px, 4);
    }

    #[test]
    fn bad_base_is_rejected() {
        let err = Config::from_toml_str("[defaults]\nbase = \"#zzzzzz\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBase { .. }));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Config::from_toml_str("[defaults]\nshade = 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("neumorph.toml");
        std::fs::write(&path, "[defaults]\nradius = 24\n").unwrap();

        let (config, used) = Config::discover(Some(&path)).unwrap();
        assert_eq!(config.defaults.radius, 24);
        assert_eq!(used.as_deref(), Some(path.as_path()));

        let missing = dir.path().join("missing.toml");
        assert!(matches!(Config::discover(Some(&missing)), Err(ConfigError::Io { .. })));
    }

    #[test]
    fn discover_without_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, used) = Config::discover_in(dir.path(), None).unwrap();
        assert_eq!(config, Config::default());
        assert!(used.is_none());
    }

    #[test]
    fn discover_picks_up_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, "[defaults]\nblur = 30\n").unwrap();

        let (config, used) = Config::discover_in(dir.path(), None).unwrap();
        assert_eq!(config.defaults.blur, 30);
        assert_eq!(used.as_deref(), Some(path.as_path()));

        std::fs::write(&path, "[defaults]\nbase = \"nope\"\n").unwrap();
        assert!(matches!(
            Config::discover_in(dir.path(), None),
            Err(ConfigError::InvalidBase { .. })
        ));
    }

    #[test]
    fn class_name_is_normalized() {
        let dotted = Config::from_toml_str("[snippet]\nclass_name = \".card\"\n").unwrap();
        assert_eq!(dotted.snippet.class_name, "card");
        assert_eq!(dotted.snippet.selector(false), ".card");

        let blank = Config::from_toml_str("[snippet]\nclass_name = \"\"\n").unwrap();
        assert_eq!(blank.snippet.class_name, crate::snippet::DEFAULT_CLASS_NAME);

        let params = dotted.effect_params().unwrap();
        let rendered = crate::editor::render_with(&params, &dotted.snippet);
        assert!(rendered.css.contains("\n.card{\n"));
        assert!(!rendered.css.contains("..card"));
    }
}
