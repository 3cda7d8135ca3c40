//! Layered configuration: defaults → TOML file → `CASTRA_` environment.
//!
//! ```toml
//! [log]
//! level = "info"
//!
//! [form]
//! required_fields = ["animal", "tutor", "cpf"]
//!
//! [form.labels]
//! tutor = "Responsável"
//!
//! [export]
//! delimiter = ","
//! ```
//!
//! Nested keys are addressed from the environment with `__`, e.g.
//! `CASTRA_LOG__LEVEL=debug` or `CASTRA_EXPORT__DELIMITER=,`.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, bail};
use castra_validator::form::FormConfig;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// File read from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "castra.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "CASTRA_";

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log: LogConfig,
    pub form: FormConfig,
    pub export: ExportConfig,
}

/// `[log]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive used when neither `--log-level` nor `RUST_LOG`
    /// is set.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
        }
    }
}

/// `[export]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// CSV cell separator.
    pub delimiter: char,
    /// Title line of the text report.
    pub title: String,
    /// Export-only labels, consulted before the form labels.
    pub labels: BTreeMap<String, String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            delimiter: ';',
            title: "RELATÓRIO CASTRA PET - SISTEMA DE CADASTRO DE ANIMAIS".to_owned(),
            labels: [
                ("id", "ID"),
                ("raca", "Raça Definida"),
                ("dataCadastro", "Data do Cadastro"),
                ("ultimaAtualizacao", "Última Atualização"),
            ]
            .into_iter()
            .map(|(field, label)| (field.to_owned(), label.to_owned()))
            .collect(),
        }
    }
}

impl AppConfig {
    /// Loads the configuration.
    ///
    /// An explicit `path` must exist; without one, [`DEFAULT_CONFIG_FILE`] is
    /// read when present and skipped otherwise.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        match path {
            Some(path) => {
                if !path.is_file() {
                    bail!("config file not found: {}", path.display());
                }
                figment = figment.merge(Toml::file(path));
            }
            None => figment = figment.merge(Toml::file(DEFAULT_CONFIG_FILE)),
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("invalid configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_without_file() {
        Jail::expect_with(|_jail| {
            let config = AppConfig::load(None).unwrap();
            assert_eq!(config, AppConfig::default());
            assert_eq!(config.log.level, "warn");
            assert_eq!(config.export.delimiter, ';');
            Ok(())
        });
    }

    #[test]
    fn test_default_file_merges_labels() {
        Jail::expect_with(|jail| {
            jail.create_file(
                DEFAULT_CONFIG_FILE,
                r#"
                [form]
                required_fields = ["tutor"]

                [form.labels]
                tutor = "Responsável"
                "#,
            )?;

            let config = AppConfig::load(None).unwrap();
            assert_eq!(config.form.required_fields, vec!["tutor".to_owned()]);
            assert_eq!(config.form.label("tutor"), "Responsável");
            assert_eq!(config.form.label("animal"), "Nome do Animal");
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("custom.toml", "[log]\nlevel = \"info\"\n")?;
            jail.set_env("CASTRA_LOG__LEVEL", "debug");
            jail.set_env("CASTRA_EXPORT__DELIMITER", ",");

            let config = AppConfig::load(Some(Path::new("custom.toml"))).unwrap();
            assert_eq!(config.log.level, "debug");
            assert_eq!(config.export.delimiter, ',');
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        Jail::expect_with(|_jail| {
            let err = AppConfig::load(Some(Path::new("nope.toml"))).unwrap_err();
            assert!(err.to_string().contains("nope.toml"));
            Ok(())
        });
    }
}
