// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Parameter classification.

use datadef_core_model::{
    parameter::{ParameterRole, ResolvedParameter},
    source::SourceKind,
};

use crate::{
    ast::ast_types::{AstParameter, AstParameterTag, TypeCapability},
    resolution_error::ResolutionErrorKind,
};

/// Assign a role to one parameter.
///
/// A `payload` tag wins over everything else, then the callback, error filter, and source params
/// capabilities of the parameter type are checked in that order. A `rename` tag only changes the
/// external name.
pub fn classify(parameter: &AstParameter) -> ResolvedParameter {
    let typ = &parameter.typ;

    let payload = parameter.tags.iter().find_map(|tag| match tag {
        AstParameterTag::Payload { source } => Some(*source),
        _ => None,
    });

    let role = if let Some(kind) = payload {
        ParameterRole::SourcePayload {
            kind,
            carries_source_params: typ.is_source_params(),
        }
    } else if typ.has(&TypeCapability::Callback) {
        ParameterRole::Callback
    } else if typ.has(&TypeCapability::ErrorFilter) {
        ParameterRole::ErrorFilter
    } else if typ.is_source_params() {
        ParameterRole::OpaqueSourceParams
    } else {
        ParameterRole::Query
    };

    let name = parameter
        .tags
        .iter()
        .rev()
        .find_map(|tag| match tag {
            AstParameterTag::Rename { name } => Some(name.clone()),
            _ => None,
        })
        .unwrap_or_else(|| parameter.name.clone());

    ResolvedParameter {
        declared_name: parameter.name.clone(),
        name,
        type_name: typ.to_string(),
        role,
    }
}

/// Check that a method has at most one error filter, one opaque source params object, and one
/// payload per source kind. The result does not depend on the order of the parameters beyond the
/// order in which offending names are listed.
pub fn check_special_parameters(parameters: &[ResolvedParameter]) -> Vec<ResolutionErrorKind> {
    let mut groups: Vec<(String, Vec<String>)> = vec![
        (
            "error filter".to_string(),
            collect(parameters, |role| matches!(role, ParameterRole::ErrorFilter)),
        ),
        (
            "source params".to_string(),
            collect(parameters, |role| {
                matches!(role, ParameterRole::OpaqueSourceParams)
            }),
        ),
    ];

    for kind in SourceKind::ALL {
        groups.push((
            format!("{kind} payload"),
            collect(parameters, |role| {
                matches!(role, ParameterRole::SourcePayload { kind: k, .. } if *k == kind)
            }),
        ));
    }

    groups
        .into_iter()
        .filter(|(_, names)| names.len() > 1)
        .map(|(role, parameters)| ResolutionErrorKind::DuplicateSpecialParameter { role, parameters })
        .collect()
}

fn collect(parameters: &[ResolvedParameter], filter: impl Fn(&ParameterRole) -> bool) -> Vec<String> {
    parameters
        .iter()
        .filter(|p| filter(&p.role))
        .map(|p| p.declared_name.clone())
        .collect()
}
