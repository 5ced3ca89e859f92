// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use common::env_const::DATADEF_CONFIG;
use datadef_builder::config::GlobalConfig;
use serde::Deserialize;
use tracing::debug;

use super::model::Config;

const DEFAULT_CONFIG_FILE: &str = "datadef.toml";

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigSer {
    pub defaults: Option<DefaultsSer>,
}

#[derive(Deserialize, Debug, PartialEq, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct DefaultsSer {
    pub response_transform: Option<String>,
    pub error_transform: Option<String>,
    pub refresh_strategy: Option<String>,
}

impl TryFrom<ConfigSer> for Config {
    type Error = anyhow::Error;

    fn try_from(config: ConfigSer) -> Result<Self, Self::Error> {
        Ok(Config {
            defaults: config
                .defaults
                .map(GlobalConfig::try_from)
                .transpose()?
                .unwrap_or_default(),
        })
    }
}

impl TryFrom<DefaultsSer> for GlobalConfig {
    type Error = anyhow::Error;

    fn try_from(defaults: DefaultsSer) -> Result<Self, Self::Error> {
        Ok(GlobalConfig {
            response_transform: type_name("response-transform", defaults.response_transform)?,
            error_transform: type_name("error-transform", defaults.error_transform)?,
            refresh_strategy: type_name("refresh-strategy", defaults.refresh_strategy)?,
        })
    }
}

fn type_name(key: &str, value: Option<String>) -> Result<Option<String>> {
    match value {
        Some(value) if value.trim().is_empty() || value.chars().any(char::is_whitespace) => Err(
            anyhow!("Invalid value for '{key}': expected a type name, found '{value}'"),
        ),
        value => Ok(value),
    }
}

fn load_config_from_file(path: &Path) -> Result<Config> {
    let toml_str = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read file '{}': {}", path.display(), e))?;
    let config: ConfigSer = toml::from_str(&toml_str)
        .map_err(|e| anyhow!("Failed to parse TOML file '{}': {}", path.display(), e))?;

    config.try_into()
}

/// Load the configuration from `explicit_path`, then the path in `DATADEF_CONFIG`, then
/// `datadef.toml` in the current directory. Only the implicit default file may be missing.
pub fn load_config(explicit_path: Option<PathBuf>) -> Result<Config> {
    let explicit_path =
        explicit_path.or_else(|| std::env::var_os(DATADEF_CONFIG).map(PathBuf::from));

    match explicit_path {
        Some(path) => {
            debug!(path = %path.display(), "loading configuration");
            load_config_from_file(&path)
        }
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if !path.exists() {
                return Ok(Config::default());
            }
            load_config_from_file(path)
        }
    }
}
