// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::ast::ast_types::InterfaceNetworkDefaults;

/// Defaults consumed by the source configs of every method they apply to.
///
/// Configs come in layers (the project's `datadef.toml`, the declaration document, and each
/// interface). A method's own explicit value always wins over any of them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct GlobalConfig {
    #[serde(default)]
    pub response_transform: Option<String>,
    #[serde(default)]
    pub error_transform: Option<String>,
    #[serde(default)]
    pub refresh_strategy: Option<String>,
}

impl GlobalConfig {
    /// Merge `higher` over `self`, field by field.
    pub fn overlay(&self, higher: &GlobalConfig) -> GlobalConfig {
        GlobalConfig {
            response_transform: higher
                .response_transform
                .clone()
                .or_else(|| self.response_transform.clone()),
            error_transform: higher
                .error_transform
                .clone()
                .or_else(|| self.error_transform.clone()),
            refresh_strategy: higher
                .refresh_strategy
                .clone()
                .or_else(|| self.refresh_strategy.clone()),
        }
    }

    pub fn overlay_opt(&self, higher: Option<&GlobalConfig>) -> GlobalConfig {
        match higher {
            Some(higher) => self.overlay(higher),
            None => self.clone(),
        }
    }

    /// The config an interface's methods see: the interface's own `config` over `self`, then the
    /// network options declared on the interface.
    pub fn for_interface(
        &self,
        config: Option<&GlobalConfig>,
        network: Option<&InterfaceNetworkDefaults>,
    ) -> GlobalConfig {
        let config = self.overlay_opt(config);

        match network {
            Some(network) => config.overlay(&GlobalConfig {
                response_transform: network.response_transform.clone(),
                error_transform: network.error_transform.clone(),
                refresh_strategy: None,
            }),
            None => config,
        }
    }
}
