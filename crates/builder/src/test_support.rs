// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use datadef_core_model::request::{InterfaceSpec, RequestSpec, ResolvedSystem};
use serde_json::{Value, json};

use crate::{
    ast::ast_types::{AstMethod, AstSystem},
    config::GlobalConfig,
    definition::resolve_system,
    resolution_error::{ResolutionError, ResolutionErrorKind},
};

pub const INTERFACE: &str = "Items";

pub fn resolve_document(document: Value, config: &GlobalConfig) -> (ResolvedSystem, Vec<ResolutionError>) {
    let system: AstSystem = serde_json::from_value(document).unwrap();
    let mut errors = vec![];
    let resolved = resolve_system(&system, config, &mut errors);
    (resolved, errors)
}

/// Resolve a single interface named `Items` with the given methods.
pub fn resolve_methods(methods: Value) -> (InterfaceSpec, Vec<ResolutionError>) {
    let (resolved, errors) = resolve_document(
        json!({ "interfaces": [{ "name": INTERFACE, "methods": methods }] }),
        &GlobalConfig::default(),
    );

    (resolved.interface(INTERFACE).unwrap().clone(), errors)
}

pub fn method(value: Value) -> AstMethod {
    serde_json::from_value(value).unwrap()
}

pub fn request<'a>(interface: &'a InterfaceSpec, name: &str) -> &'a RequestSpec {
    interface
        .request(name)
        .unwrap_or_else(|| panic!("request '{name}' was not resolved"))
}

pub fn error_kinds(errors: &[ResolutionError], method_name: &str) -> Vec<ResolutionErrorKind> {
    errors
        .iter()
        .filter(|e| e.method_name == method_name)
        .map(|e| e.kind.clone())
        .collect()
}

pub fn plain(name: &str) -> Value {
    json!({ "name": name })
}

pub fn list_of(name: &str) -> Value {
    json!({ "name": "List", "args": [plain(name)], "capabilities": ["list"] })
}

pub fn request_of(data_type: Value) -> Value {
    json!({ "name": "Request", "args": [data_type], "capabilities": ["request"] })
}

pub fn call_of(data_type: Value) -> Value {
    json!({ "name": "Call", "args": [data_type], "capabilities": ["call"] })
}

pub fn controller_of(data_type: Value) -> Value {
    json!({ "name": "Controller", "args": [data_type], "capabilities": ["controller"] })
}

pub fn params_of(payload: &str, data_type: Value) -> Value {
    json!({
        "name": "SourceParams",
        "args": [data_type],
        "capabilities": [{ "source-params": { "payload": payload } }]
    })
}

pub fn query(name: &str) -> Value {
    json!({ "name": name, "type": plain("String") })
}
