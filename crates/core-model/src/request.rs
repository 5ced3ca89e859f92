// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::{
    mapped_arena::MappedArena,
    parameter::ResolvedParameter,
    source::{SourceConfigs, SourceKind},
};

/// How a request method hands its result back, derived from its declared return type.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ReturnKind {
    /// Returns the stored value directly, reading from memory and then storage
    SyncLookup,
    /// Returns a request that executes against the enabled sources
    AsyncRequest,
    /// Returns the raw transport call
    RawTransportCall,
    /// Returns only the source parameters that a request would use
    SourceParamsOnly,
    /// Returns the shared data-access handle itself
    ControllerReference,
}

/// A fully resolved request method.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    pub name: String,
    /// The name of the field holding the data-access handle. Equals `name` unless the method
    /// reuses another one.
    pub binding_name: String,
    pub return_kind: ReturnKind,
    pub data_type: String,
    /// `data_type` with one level of generic wrapping removed (`Item` for `List<Item>`)
    pub element_type: String,
    pub sources: SourceConfigs,
    pub parameters: Vec<ResolvedParameter>,
    pub reuses: Option<String>,
    pub targets_only: bool,
    /// The handle is supplied to the generated constructor instead of being built locally
    pub bound_in_constructor: bool,
    pub optional_binding: bool,
    pub controller_reference: bool,
    pub cancel_previous: bool,
    /// For `SourceParamsOnly` requests, the kind whose payload builder produces the result
    pub payload_builder: Option<SourceKind>,
    /// Annotations the library does not interpret, passed through to emission
    pub forwarded_annotations: Vec<String>,
}

/// A method whose only purpose is producing the source parameters of another request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ParamsProviderSpec {
    pub name: String,
    /// The request whose parameters this method builds
    pub target: String,
    pub payload_kind: SourceKind,
    pub return_type: String,
    pub parameters: Vec<ResolvedParameter>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct InterfaceSpec {
    pub name: String,
    pub requests: Vec<RequestSpec>,
    pub params_providers: Vec<ParamsProviderSpec>,
    pub has_network: bool,
    pub has_key_value_store: bool,
    pub has_optional_binding: bool,
}

impl InterfaceSpec {
    pub fn new(
        name: String,
        requests: Vec<RequestSpec>,
        params_providers: Vec<ParamsProviderSpec>,
    ) -> Self {
        let has_network = requests.iter().any(|r| r.sources.network.enabled);
        let has_key_value_store = requests.iter().any(|r| r.sources.key_value_store.enabled);
        let has_optional_binding = requests.iter().any(|r| r.optional_binding);

        InterfaceSpec {
            name,
            requests,
            params_providers,
            has_network,
            has_key_value_store,
            has_optional_binding,
        }
    }

    pub fn request(&self, name: &str) -> Option<&RequestSpec> {
        self.requests.iter().find(|r| r.name == name)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ResolvedSystem {
    pub interfaces: MappedArena<InterfaceSpec>,
}

impl ResolvedSystem {
    pub fn interface(&self, name: &str) -> Option<&InterfaceSpec> {
        self.interfaces.get_by_key(name)
    }
}
