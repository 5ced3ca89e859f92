// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A backend a request may read from or write to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    Network,
    Database,
    Memory,
    KeyValueStore,
}

impl SourceKind {
    pub const ALL: [SourceKind; 4] = [
        SourceKind::Network,
        SourceKind::Database,
        SourceKind::Memory,
        SourceKind::KeyValueStore,
    ];

    /// The order in which sources are passed when building a data-access handle. This does not
    /// depend on the order of the annotations in the declaration.
    pub const CONSTRUCTION_ORDER: [SourceKind; 4] = [
        SourceKind::Memory,
        SourceKind::Database,
        SourceKind::KeyValueStore,
        SourceKind::Network,
    ];

    /// The name of the request target the runtime library uses for this kind. Both storage
    /// backends are addressed as "disk".
    pub fn request_target(&self) -> &'static str {
        match self {
            SourceKind::Network => "network",
            SourceKind::Database | SourceKind::KeyValueStore => "disk",
            SourceKind::Memory => "memory",
        }
    }
}

impl Display for SourceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SourceKind::Network => "network",
            SourceKind::Database => "database",
            SourceKind::Memory => "memory",
            SourceKind::KeyValueStore => "key-value-store",
        };
        f.write_str(name)
    }
}

/// The configuration of one source kind for one method.
///
/// `declared_directly` is true only when the method itself carries the annotation for this kind;
/// `enabled` may additionally be set through defaulting or reuse. Targeted requests only execute
/// directly declared sources.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceConfig<O> {
    pub enabled: bool,
    pub declared_directly: bool,
    pub options: O,
}

impl<O> SourceConfig<O> {
    pub fn declared(options: O) -> Self {
        SourceConfig {
            enabled: true,
            declared_directly: true,
            options,
        }
    }
}

/// A transport binding (such as `GET /items/{id}`) declared on a network request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TransportBinding {
    pub verb: String,
    pub path: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct NetworkOptions {
    /// `None` is the no-op response transform
    pub response_transform: Option<String>,
    /// `None` is the no-op error transform
    pub error_transform: Option<String>,
    /// `None` is the library's default refresh strategy
    pub refresh_strategy: Option<String>,
    /// Overrides the result type of the raw transport call
    pub call_return_type: Option<String>,
    pub transport: Option<TransportBinding>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DatabaseOptions {
    pub is_single_result: bool,
    pub is_async: bool,
    pub refresh_strategy: Option<String>,
}

impl Default for DatabaseOptions {
    fn default() -> Self {
        DatabaseOptions {
            is_single_result: true,
            is_async: false,
            refresh_strategy: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct MemoryOptions {
    pub refresh_strategy: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyValueStoreOptions {
    /// The type that reads and writes values in the store. Required whenever the store is enabled.
    pub delegate_type: Option<String>,
    /// The field under which the delegate instance is kept.
    pub storage_field_name: String,
    pub refresh_strategy: Option<String>,
}

/// The four source configurations of one method.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceConfigs {
    pub network: SourceConfig<NetworkOptions>,
    pub database: SourceConfig<DatabaseOptions>,
    pub memory: SourceConfig<MemoryOptions>,
    pub key_value_store: SourceConfig<KeyValueStoreOptions>,
}

impl SourceConfigs {
    pub fn is_enabled(&self, kind: SourceKind) -> bool {
        match kind {
            SourceKind::Network => self.network.enabled,
            SourceKind::Database => self.database.enabled,
            SourceKind::Memory => self.memory.enabled,
            SourceKind::KeyValueStore => self.key_value_store.enabled,
        }
    }

    pub fn is_declared_directly(&self, kind: SourceKind) -> bool {
        match kind {
            SourceKind::Network => self.network.declared_directly,
            SourceKind::Database => self.database.declared_directly,
            SourceKind::Memory => self.memory.declared_directly,
            SourceKind::KeyValueStore => self.key_value_store.declared_directly,
        }
    }

    pub fn set_enabled(&mut self, kind: SourceKind, enabled: bool) {
        match kind {
            SourceKind::Network => self.network.enabled = enabled,
            SourceKind::Database => self.database.enabled = enabled,
            SourceKind::Memory => self.memory.enabled = enabled,
            SourceKind::KeyValueStore => self.key_value_store.enabled = enabled,
        }
    }

    pub fn has_direct_declarations(&self) -> bool {
        SourceKind::ALL
            .iter()
            .any(|kind| self.is_declared_directly(*kind))
    }

    /// Enabled kinds in construction order.
    pub fn enabled_kinds(&self) -> Vec<SourceKind> {
        SourceKind::CONSTRUCTION_ORDER
            .into_iter()
            .filter(|kind| self.is_enabled(*kind))
            .collect()
    }

    /// Directly declared kinds in construction order.
    pub fn declared_kinds(&self) -> Vec<SourceKind> {
        SourceKind::CONSTRUCTION_ORDER
            .into_iter()
            .filter(|kind| self.is_declared_directly(*kind))
            .collect()
    }

    pub fn refresh_strategy(&self, kind: SourceKind) -> Option<&str> {
        match kind {
            SourceKind::Network => self.network.options.refresh_strategy.as_deref(),
            SourceKind::Database => self.database.options.refresh_strategy.as_deref(),
            SourceKind::Memory => self.memory.options.refresh_strategy.as_deref(),
            SourceKind::KeyValueStore => self.key_value_store.options.refresh_strategy.as_deref(),
        }
    }

    pub fn has_conflicting_storage(&self) -> bool {
        self.database.enabled && self.key_value_store.enabled
    }
}
