// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use datadef_core_model::{
    request::{RequestSpec, ReturnKind},
    source::{SourceConfigs, SourceKind},
};
use tracing::debug;

use super::{MethodAnnotations, Scanned};
use crate::{
    ast::ast_types::{AstMethod, AstType, TypeCapability},
    classifier::{check_special_parameters, classify},
    config::GlobalConfig,
    resolution_error::ResolutionErrorKind,
    source::{self, database, key_value_store, memory, network},
};

/// What the declared return type says about a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnShape {
    pub return_kind: ReturnKind,
    pub data_type: String,
    pub element_type: String,
    pub is_single_result: bool,
    /// For source params results, the kind whose payload they carry
    pub payload_builder: Option<SourceKind>,
}

/// Classify a return type by its wrapper capability. `controller_reference` tells whether the
/// method carries the controller reference marker; the controller wrapper and the marker must
/// appear together.
pub fn classify_return(
    return_type: &AstType,
    controller_reference: bool,
) -> Result<ReturnShape, ResolutionErrorKind> {
    let invalid = |reason: &str| ResolutionErrorKind::InvalidReturnType {
        return_type: return_type.to_string(),
        reason: reason.to_string(),
    };

    let wrapper = return_type.wrapper();

    let (return_kind, payload_builder) = match wrapper {
        Some(TypeCapability::Controller) if !controller_reference => {
            return Err(invalid(
                "only a controller reference may return the controller handle",
            ));
        }
        _ if controller_reference && wrapper != Some(&TypeCapability::Controller) => {
            return Err(invalid("a controller reference must return the controller handle"));
        }
        Some(TypeCapability::Controller) => (ReturnKind::ControllerReference, None),
        Some(TypeCapability::Request) => (ReturnKind::AsyncRequest, None),
        Some(TypeCapability::Call) => (ReturnKind::RawTransportCall, None),
        Some(TypeCapability::SourceParams { payload }) => {
            let payload = payload.unwrap_or(SourceKind::Network);
            if !matches!(payload, SourceKind::Network | SourceKind::Database) {
                return Err(invalid(
                    "source params can only be built for the network or the database",
                ));
            }
            (ReturnKind::SourceParamsOnly, Some(payload))
        }
        _ => (ReturnKind::SyncLookup, None),
    };

    let data_type = if return_kind == ReturnKind::SyncLookup {
        return_type
    } else {
        match return_type.args.as_slice() {
            [data_type] => data_type,
            _ => return Err(invalid("expected exactly one type argument")),
        }
    };

    let element_type = data_type
        .args
        .first()
        .unwrap_or(data_type)
        .to_string();

    Ok(ReturnShape {
        return_kind,
        data_type: data_type.to_string(),
        element_type,
        is_single_result: !data_type.is_list(),
        payload_builder,
    })
}

impl Scanned {
    /// Read everything declared on the method itself and apply the global config to the unset
    /// source options.
    pub fn scan(method: &AstMethod, global: &GlobalConfig) -> Result<Scanned, Vec<ResolutionErrorKind>> {
        let annotations = MethodAnnotations::collect(&method.annotations)?;
        let mut errors = vec![];

        let parameters: Vec<_> = method.parameters.iter().map(classify).collect();
        errors.extend(check_special_parameters(&parameters));

        let controller_reference = annotations.controller.is_some();
        if controller_reference && !parameters.is_empty() {
            errors.push(ResolutionErrorKind::ParametersOnControllerReference {
                count: parameters.len(),
            });
        }

        let shape = match classify_return(&method.return_type, controller_reference) {
            Ok(shape) => Some(shape),
            Err(error) => {
                errors.push(error);
                None
            }
        };

        let shape = match shape {
            Some(shape) if errors.is_empty() => shape,
            _ => return Err(errors),
        };

        let sources = SourceConfigs {
            network: network::scan(annotations.network, annotations.transport.as_ref()),
            database: database::scan(annotations.database, shape.is_single_result),
            memory: memory::scan(annotations.memory),
            key_value_store: key_value_store::scan(annotations.key_value_store, &method.name),
        };

        let marker = annotations.controller;

        let spec = RequestSpec {
            name: method.name.clone(),
            binding_name: method.name.clone(),
            return_kind: shape.return_kind,
            data_type: shape.data_type,
            element_type: shape.element_type,
            sources: source::post_process(sources, global),
            parameters,
            reuses: annotations.reuse.map(str::to_string),
            targets_only: annotations.targets,
            bound_in_constructor: marker.is_some_and(|m| m.in_constructor || m.optional),
            optional_binding: marker.is_some_and(|m| m.optional),
            controller_reference,
            cancel_previous: annotations.cancel_previous,
            payload_builder: shape.payload_builder,
            forwarded_annotations: annotations.forwarded,
        };

        debug!(
            method = %spec.name,
            return_kind = ?spec.return_kind,
            declared = ?spec.sources.declared_kinds(),
            "scanned"
        );

        Ok(Scanned { spec })
    }
}
