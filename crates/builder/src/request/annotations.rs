// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::HashSet;

use datadef_core_model::source::TransportBinding;

use crate::{
    ast::ast_types::{
        AstAnnotation, DatabaseAnnotation, KeyValueStoreAnnotation, MemoryAnnotation,
        NetworkAnnotation,
    },
    resolution_error::ResolutionErrorKind,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerMarker {
    pub in_constructor: bool,
    pub optional: bool,
}

/// The annotations of one method, each kind at most once.
#[derive(Debug, Default)]
pub struct MethodAnnotations<'a> {
    pub network: Option<&'a NetworkAnnotation>,
    pub transport: Option<TransportBinding>,
    pub database: Option<&'a DatabaseAnnotation>,
    pub memory: Option<&'a MemoryAnnotation>,
    pub key_value_store: Option<&'a KeyValueStoreAnnotation>,
    pub reuse: Option<&'a str>,
    pub targets: bool,
    pub controller: Option<ControllerMarker>,
    pub params_provider: Option<&'a str>,
    pub cancel_previous: bool,
    pub forwarded: Vec<String>,
}

impl<'a> MethodAnnotations<'a> {
    pub fn collect(annotations: &'a [AstAnnotation]) -> Result<Self, Vec<ResolutionErrorKind>> {
        let mut seen = HashSet::new();
        let mut errors = vec![];
        let mut collected = MethodAnnotations::default();

        for annotation in annotations {
            if !seen.insert((annotation.is_forwarded(), annotation.name())) {
                errors.push(ResolutionErrorKind::DuplicateAnnotation {
                    annotation: annotation.name().to_string(),
                });
                continue;
            }

            match annotation {
                AstAnnotation::Network(network) => collected.network = Some(network),
                AstAnnotation::Transport { verb, path } => {
                    collected.transport = Some(TransportBinding {
                        verb: verb.clone(),
                        path: path.clone(),
                    })
                }
                AstAnnotation::Database(database) => collected.database = Some(database),
                AstAnnotation::Memory(memory) => collected.memory = Some(memory),
                AstAnnotation::KeyValueStore(store) => collected.key_value_store = Some(store),
                AstAnnotation::Reuse { method } => collected.reuse = Some(method),
                AstAnnotation::Targets => collected.targets = true,
                AstAnnotation::ControllerReference {
                    in_constructor,
                    optional,
                } => {
                    collected.controller = Some(ControllerMarker {
                        in_constructor: *in_constructor,
                        optional: *optional,
                    })
                }
                AstAnnotation::ParamsProvider { target } => collected.params_provider = Some(target),
                AstAnnotation::CancelPrevious => collected.cancel_previous = true,
                AstAnnotation::Forward { name } => collected.forwarded.push(name.clone()),
            }
        }

        if errors.is_empty() {
            Ok(collected)
        } else {
            Err(errors)
        }
    }
}
