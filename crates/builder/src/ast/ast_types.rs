// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Declarations as handed over by the host environment.
//!
//! The host has already discovered the annotated interfaces and read their static types. Every
//! structural fact the resolver needs about a type (is it a callback, a list, a source parameters
//! object...) arrives as a capability tag, so nothing here performs type-system queries.

use std::fmt::{Display, Formatter};

use datadef_core_model::source::SourceKind;
use serde::{Deserialize, Serialize};

use crate::config::GlobalConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct AstSystem {
    /// Defaults for every interface in the document
    #[serde(default)]
    pub config: Option<GlobalConfig>,
    pub interfaces: Vec<AstInterface>,
}

/// A data definition: one logical resource and its request methods.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AstInterface {
    pub name: String,
    #[serde(default)]
    pub config: Option<GlobalConfig>,
    /// Network options declared on the interface itself; they fill in the values its methods
    /// leave unset
    #[serde(default)]
    pub network: Option<InterfaceNetworkDefaults>,
    #[serde(default)]
    pub methods: Vec<AstMethod>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct AstMethod {
    pub name: String,
    pub return_type: AstType,
    #[serde(default)]
    pub parameters: Vec<AstParameter>,
    #[serde(default)]
    pub annotations: Vec<AstAnnotation>,
}

impl AstMethod {
    pub fn reuse_target(&self) -> Option<&str> {
        self.annotations.iter().find_map(|a| match a {
            AstAnnotation::Reuse { method } => Some(method.as_str()),
            _ => None,
        })
    }

    pub fn params_provider_target(&self) -> Option<&str> {
        self.annotations.iter().find_map(|a| match a {
            AstAnnotation::ParamsProvider { target } => Some(target.as_str()),
            _ => None,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AstParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub typ: AstType,
    #[serde(default)]
    pub tags: Vec<AstParameterTag>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", rename_all_fields = "kebab-case")]
pub enum AstParameterTag {
    /// Use a different name externally (in queries and transport calls)
    Rename { name: String },
    /// Hand the value to one source kind only
    Payload { source: SourceKind },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AstType {
    pub name: String,
    #[serde(default)]
    pub args: Vec<AstType>,
    #[serde(default)]
    pub capabilities: Vec<TypeCapability>,
}

impl AstType {
    pub fn has(&self, capability: &TypeCapability) -> bool {
        self.capabilities.contains(capability)
    }

    /// The return wrapper this type represents, if any.
    pub fn wrapper(&self) -> Option<&TypeCapability> {
        self.capabilities.iter().find(|c| c.is_wrapper())
    }

    pub fn is_source_params(&self) -> bool {
        self.capabilities
            .iter()
            .any(|c| matches!(c, TypeCapability::SourceParams { .. }))
    }

    pub fn is_list(&self) -> bool {
        self.has(&TypeCapability::List)
    }
}

impl Display for AstType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)?;

        if !self.args.is_empty() {
            f.write_str("<")?;
            for (index, arg) in self.args.iter().enumerate() {
                if index > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{arg}")?;
            }
            f.write_str(">")?;
        }

        Ok(())
    }
}

/// Structural facts about a type, attached by the host when it reads the declarations.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", rename_all_fields = "kebab-case")]
pub enum TypeCapability {
    /// An asynchronous request over the enabled sources
    Request,
    /// A raw transport call
    Call,
    /// The shared data-access handle
    Controller,
    /// A source parameters object. `payload` names the kind whose parameters it carries.
    SourceParams {
        #[serde(default)]
        payload: Option<SourceKind>,
    },
    Callback,
    ErrorFilter,
    List,
}

impl TypeCapability {
    pub fn is_wrapper(&self) -> bool {
        matches!(
            self,
            TypeCapability::Request
                | TypeCapability::Call
                | TypeCapability::Controller
                | TypeCapability::SourceParams { .. }
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", rename_all_fields = "kebab-case")]
pub enum AstAnnotation {
    Network(NetworkAnnotation),
    /// A transport binding such as `GET /items/{id}`. Implies a direct network declaration.
    Transport {
        verb: String,
        path: String,
    },
    Database(DatabaseAnnotation),
    Memory(MemoryAnnotation),
    KeyValueStore(KeyValueStoreAnnotation),
    Reuse {
        method: String,
    },
    Targets,
    ControllerReference {
        #[serde(default)]
        in_constructor: bool,
        #[serde(default)]
        optional: bool,
    },
    ParamsProvider {
        target: String,
    },
    CancelPrevious,
    /// An annotation the library does not interpret; it is passed through to emission
    Forward {
        name: String,
    },
}

impl AstAnnotation {
    /// The name under which duplicate annotations are detected. Forwarded annotations are
    /// compared only with each other (see [`AstAnnotation::is_forwarded`]).
    pub fn name(&self) -> &str {
        match self {
            AstAnnotation::Network(_) => "network",
            AstAnnotation::Transport { .. } => "transport",
            AstAnnotation::Database(_) => "database",
            AstAnnotation::Memory(_) => "memory",
            AstAnnotation::KeyValueStore(_) => "key-value-store",
            AstAnnotation::Reuse { .. } => "reuse",
            AstAnnotation::Targets => "targets",
            AstAnnotation::ControllerReference { .. } => "controller-reference",
            AstAnnotation::ParamsProvider { .. } => "params-provider",
            AstAnnotation::CancelPrevious => "cancel-previous",
            AstAnnotation::Forward { name } => name,
        }
    }

    pub fn is_forwarded(&self) -> bool {
        matches!(self, AstAnnotation::Forward { .. })
    }
}

/// The network options an interface can set for all of its methods. Refresh strategies and call
/// return types are per method only.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct InterfaceNetworkDefaults {
    #[serde(default)]
    pub response_transform: Option<String>,
    #[serde(default)]
    pub error_transform: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct NetworkAnnotation {
    #[serde(default)]
    pub response_transform: Option<String>,
    #[serde(default)]
    pub error_transform: Option<String>,
    #[serde(default)]
    pub refresh_strategy: Option<String>,
    #[serde(default)]
    pub call_return_type: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct DatabaseAnnotation {
    #[serde(default)]
    pub refresh_strategy: Option<String>,
    #[serde(default)]
    pub is_async: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct MemoryAnnotation {
    #[serde(default)]
    pub refresh_strategy: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct KeyValueStoreAnnotation {
    #[serde(default)]
    pub delegate: Option<String>,
    #[serde(default)]
    pub refresh_strategy: Option<String>,
}
