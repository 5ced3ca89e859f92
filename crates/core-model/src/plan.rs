// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Emission-facing views of resolved specs.
//!
//! An emission backend should not have to re-derive ordering or targeting rules, so they are
//! answered here from the resolved values.

use serde::Serialize;

use crate::{
    request::{InterfaceSpec, RequestSpec, ReturnKind},
    source::SourceKind,
};

impl RequestSpec {
    /// The sources the method's own data-access handle is built from, in construction order.
    ///
    /// Returns `None` when the method does not own a handle: it reuses another method's handle,
    /// receives it through the constructor, or never needs one (source params and raw transport
    /// calls).
    pub fn handle_sources(&self) -> Option<Vec<SourceKind>> {
        let owns_handle = self.reuses.is_none()
            && !self.bound_in_constructor
            && !matches!(
                self.return_kind,
                ReturnKind::SourceParamsOnly | ReturnKind::RawTransportCall
            );

        owns_handle.then(|| self.sources.enabled_kinds())
    }

    /// The order in which a synchronous lookup consults storage. Memory always comes first; the
    /// disk read happens only when memory has no value.
    pub fn sync_read_order(&self) -> Vec<SourceKind> {
        if self.return_kind != ReturnKind::SyncLookup {
            return vec![];
        }

        let mut order = vec![];
        if self.sources.memory.enabled {
            order.push(SourceKind::Memory);
        }
        if self.sources.database.enabled {
            order.push(SourceKind::Database);
        } else if self.sources.key_value_store.enabled {
            order.push(SourceKind::KeyValueStore);
        }
        order
    }

    /// Kinds for which an asynchronous request attaches per-source parameters built from the
    /// query parameters.
    pub fn request_sources(&self) -> Vec<SourceKind> {
        if self.return_kind != ReturnKind::AsyncRequest {
            return vec![];
        }

        [SourceKind::Database, SourceKind::Network]
            .into_iter()
            .filter(|kind| {
                self.sources.is_enabled(*kind)
                    && (self.sources.is_declared_directly(*kind)
                        || !self.targets_only
                        || self.bound_in_constructor)
            })
            .collect()
    }

    /// Kinds a targeted request is restricted to. Empty when the request is not targeted.
    pub fn target_sources(&self) -> Vec<SourceKind> {
        if self.targets_only {
            self.sources.declared_kinds()
        } else {
            vec![]
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ExternalBinding {
    pub binding_name: String,
    pub data_type: String,
    pub optional: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StoreDelegate {
    pub field_name: String,
    pub delegate_type: String,
}

/// The inputs of the generated implementation's constructor.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ConstructorShape {
    pub transport_client: bool,
    pub key_value_storage: bool,
    pub external_bindings: Vec<ExternalBinding>,
    pub store_delegates: Vec<StoreDelegate>,
    /// A second constructor that leaves optional bindings unset is also emitted
    pub emits_optional_constructor: bool,
}

impl InterfaceSpec {
    pub fn constructor_shape(&self) -> ConstructorShape {
        let external_bindings = self
            .requests
            .iter()
            .filter(|r| r.bound_in_constructor && r.reuses.is_none())
            .map(|r| ExternalBinding {
                binding_name: r.binding_name.clone(),
                data_type: r.data_type.clone(),
                optional: r.optional_binding,
            })
            .collect();

        let store_delegates = self
            .requests
            .iter()
            .filter(|r| r.sources.key_value_store.declared_directly)
            .filter_map(|r| {
                let options = &r.sources.key_value_store.options;
                options
                    .delegate_type
                    .as_ref()
                    .map(|delegate_type| StoreDelegate {
                        field_name: options.storage_field_name.clone(),
                        delegate_type: delegate_type.clone(),
                    })
            })
            .collect();

        ConstructorShape {
            transport_client: self.has_network,
            key_value_storage: self.has_key_value_store,
            external_bindings,
            store_delegates,
            emits_optional_constructor: self.has_optional_binding,
        }
    }
}
