//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "magi-arbiter";
const PROJECT_FILES: [&str; 2] = ["magi.toml", ".magi.toml"];
const ENV_PREFIX: &str = "MAGI_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Environment: `MAGI_<SECTION>__<KEY>`
    /// 3. Project root: `./magi.toml` or `./.magi.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/magi-arbiter/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        if let Some(path) = config_path.filter(|p| !p.exists()) {
            return Err(Box::new(figment::Error::from(format!(
                "config file not found: {}",
                path.display()
            ))));
        }

        Self::figment(
            Self::global_config_path().as_deref(),
            Self::project_config_path().as_deref(),
            config_path.map(PathBuf::as_path),
        )
        .extract()
        .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    fn figment(global: Option<&Path>, project: Option<&Path>, explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(path) = global.filter(|p| p.exists()) {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = project {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        figment
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/magi-arbiter/config.toml if set,
    /// otherwise falls back to ~/.config/magi-arbiter/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        if let Some(path) = config_path {
            let marker = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:<7}] Explicit: {}", marker, path.display());
        }

        let env_keys: Vec<String> = std::env::vars()
            .map(|(key, _)| key)
            .filter(|key| key.starts_with(ENV_PREFIX))
            .collect();
        if env_keys.is_empty() {
            println!("  [       ] Env:      {}*", ENV_PREFIX);
        } else {
            println!("  [SET    ] Env:      {}", env_keys.join(", "));
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND  ] Project:  {}", path.display());
        } else {
            println!("  [       ] Project:  ./magi.toml or ./.magi.toml");
        }

        if let Some(path) = Self::global_config_path() {
            let marker = if path.exists() { "FOUND" } else { "" };
            println!("  [{:<7}] Global:   {}", marker, path.display());
        }

        println!("  [       ] Default:  built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn toml_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert!(config.models.logic.is_none());
        assert!(config.output.color);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("magi-arbiter"));
    }

    #[test]
    fn test_explicit_file_is_loaded() {
        let file = toml_file(
            r#"
[models]
logic = "org/explicit-logic"

[endpoint]
timeout_seconds = 15
"#,
        );

        // Jail serializes tests that touch MAGI_* variables
        Jail::expect_with(|_jail| {
            let config: FileConfig =
                ConfigLoader::figment(None, None, Some(file.path())).extract()?;
            assert_eq!(config.models.logic.as_deref(), Some("org/explicit-logic"));
            assert_eq!(config.endpoint.timeout_seconds, Some(15));
            // Untouched keys keep their defaults
            assert_eq!(config.endpoint.api_key_env, "HF_API_TOKEN");
            Ok(())
        });
    }

    #[test]
    fn test_explicit_overrides_project_overrides_global() {
        let global = toml_file(
            r#"
[models]
logic = "global/logic"
safety = "global/safety"
humanity = "global/humanity"
"#,
        );
        let project = toml_file(
            r#"
[models]
safety = "project/safety"
humanity = "project/humanity"
"#,
        );
        let explicit = toml_file(
            r#"
[models]
humanity = "explicit/humanity"
"#,
        );

        Jail::expect_with(|_jail| {
            let config: FileConfig = ConfigLoader::figment(
                Some(global.path()),
                Some(project.path()),
                Some(explicit.path()),
            )
            .extract()?;

            assert_eq!(config.models.logic.as_deref(), Some("global/logic"));
            assert_eq!(config.models.safety.as_deref(), Some("project/safety"));
            assert_eq!(config.models.humanity.as_deref(), Some("explicit/humanity"));
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_project_but_not_explicit() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "magi.toml",
                r#"
[models]
logic = "project/logic"
safety = "project/safety"

[endpoint]
base_url = "http://project.test/models"
"#,
            )?;
            jail.create_file(
                "explicit.toml",
                r#"
[models]
logic = "explicit/logic"
"#,
            )?;
            jail.set_env("MAGI_MODELS__LOGIC", "env/logic");
            jail.set_env("MAGI_ENDPOINT__BASE_URL", "http://env.test/models");

            let project = ConfigLoader::project_config_path();
            assert_eq!(project.as_deref(), Some(Path::new("magi.toml")));

            let config: FileConfig =
                ConfigLoader::figment(None, project.as_deref(), None).extract()?;
            assert_eq!(config.models.logic.as_deref(), Some("env/logic"));
            assert_eq!(config.models.safety.as_deref(), Some("project/safety"));
            assert_eq!(
                config.endpoint.base_url.as_deref(),
                Some("http://env.test/models")
            );

            let config: FileConfig = ConfigLoader::figment(
                None,
                project.as_deref(),
                Some(Path::new("explicit.toml")),
            )
            .extract()?;
            assert_eq!(config.models.logic.as_deref(), Some("explicit/logic"));
            assert_eq!(
                config.endpoint.base_url.as_deref(),
                Some("http://env.test/models")
            );
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = ConfigLoader::load(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let file = toml_file("[endpoint]\ntimeout_seconds = \"soon\"\n");
        let result = ConfigLoader::load(Some(&file.path().to_path_buf()));
        assert!(result.is_err());
    }
}
