// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::source::SourceKind;

/// The role a method parameter plays in the generated request.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ParameterRole {
    /// An ordinary value used to query the sources
    Query,
    /// Registered on the request to receive its result
    Callback,
    ErrorFilter,
    /// A payload handed to a single source kind.
    ///
    /// When `carries_source_params` is set the value replaces the generated source parameters for
    /// that kind, otherwise it is attached to them as their data.
    SourcePayload {
        kind: SourceKind,
        carries_source_params: bool,
    },
    /// A pre-built source parameters object applied to the whole request
    OpaqueSourceParams,
}

impl ParameterRole {
    pub fn is_special(&self) -> bool {
        !matches!(self, ParameterRole::Query)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ResolvedParameter {
    /// The name of the parameter in the declaration
    pub declared_name: String,
    /// The name used externally (in queries and transport calls). Differs from `declared_name`
    /// only when the parameter was renamed.
    pub name: String,
    pub type_name: String,
    pub role: ParameterRole,
}

impl ResolvedParameter {
    pub fn is_query(&self) -> bool {
        !self.role.is_special()
    }
}
