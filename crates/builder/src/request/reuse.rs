// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use datadef_core_model::{
    request::RequestSpec,
    source::{SourceConfigs, SourceKind},
};
use tracing::debug;

use super::{Defaulted, ReuseResolved, Validated, defaults::enable_default_kinds};
use crate::resolution_error::ResolutionErrorKind;

/// The methods of one interface a reuse can refer to.
///
/// Only a method that reuses no other can be referenced, so chains are never followed. Of those,
/// only the validated ones have a handle that is actually built.
#[derive(Debug, Default)]
pub struct ReusePool<'a> {
    handles: Vec<&'a RequestSpec>,
    failed: Vec<&'a str>,
    /// `(method, reused method)` for every method that reuses another
    chained: Vec<(&'a str, &'a str)>,
}

impl<'a> ReusePool<'a> {
    pub fn add_handle(&mut self, validated: &'a Validated) {
        self.handles.push(validated.spec());
    }

    /// A method that reuses no other but failed to resolve.
    pub fn add_failed(&mut self, name: &'a str) {
        self.failed.push(name);
    }

    pub fn add_chained(&mut self, name: &'a str, reuses: &'a str) {
        self.chained.push((name, reuses));
    }
}

impl Defaulted {
    /// The next stage of a method that reuses no other.
    pub fn standalone(&self) -> Option<ReuseResolved> {
        self.spec.reuses.is_none().then(|| ReuseResolved {
            spec: self.spec.clone(),
        })
    }

    /// Merge in the configuration of the reused method, then enable the default kinds if this
    /// method declares no source of its own.
    pub fn resolve_reuse(&self, pool: &ReusePool<'_>) -> Result<ReuseResolved, ResolutionErrorKind> {
        let Some(target) = self.spec.reuses.as_deref() else {
            return Ok(ReuseResolved {
                spec: self.spec.clone(),
            });
        };

        let candidates: Vec<&RequestSpec> = pool
            .handles
            .iter()
            .copied()
            .filter(|handle| handle.binding_name == target && handle.name != self.spec.name)
            .collect();
        let failed = pool
            .failed
            .iter()
            .filter(|name| **name == target && **name != self.spec.name)
            .count();

        let reference = match (candidates.as_slice(), failed) {
            ([reference], 0) => *reference,
            ([], 0) => {
                let reuses_another = pool
                    .chained
                    .iter()
                    .find(|(name, _)| *name == target)
                    .map(|(_, reuses)| reuses.to_string());

                return Err(ResolutionErrorKind::DanglingReuseReference {
                    target: target.to_string(),
                    reuses_another,
                });
            }
            ([], 1) => {
                return Err(ResolutionErrorKind::UnresolvedReuseReference {
                    target: target.to_string(),
                });
            }
            _ => {
                return Err(ResolutionErrorKind::AmbiguousReuseReference {
                    target: target.to_string(),
                    count: candidates.len() + failed,
                });
            }
        };

        if reference.data_type != self.spec.data_type {
            return Err(ResolutionErrorKind::ReuseTypeMismatch {
                target: target.to_string(),
                expected: reference.data_type.clone(),
                found: self.spec.data_type.clone(),
            });
        }

        let mut spec = if reference.bound_in_constructor {
            forward_to_bound_handle(&self.spec, reference)
        } else {
            overlay_reference(&self.spec, reference)
        };
        enable_default_kinds(&mut spec);

        debug!(
            method = %spec.name,
            reference = %reference.name,
            enabled = ?spec.sources.enabled_kinds(),
            "reuse resolved"
        );

        Ok(ReuseResolved { spec })
    }
}

/// The reference's handle is supplied from outside. Only its set of enabled kinds is taken, along
/// with whatever this method declares itself.
fn forward_to_bound_handle(own: &RequestSpec, reference: &RequestSpec) -> RequestSpec {
    let mut sources = own.sources.clone();
    for kind in SourceKind::ALL {
        sources.set_enabled(
            kind,
            reference.sources.is_enabled(kind) || own.sources.is_declared_directly(kind),
        );
    }
    sources.database.options.is_single_result =
        reference.sources.database.options.is_single_result;

    RequestSpec {
        binding_name: reference.binding_name.clone(),
        bound_in_constructor: true,
        sources,
        ..own.clone()
    }
}

/// The reference's configuration replaces this method's own, except for the options of the kinds
/// this method declares directly. `declared_directly` always stays this method's own.
fn overlay_reference(own: &RequestSpec, reference: &RequestSpec) -> RequestSpec {
    let theirs = &reference.sources;
    let mine = &own.sources;
    let mut sources = theirs.clone();

    if mine.network.declared_directly {
        sources.network.options = mine.network.options.clone();
    }
    if mine.database.declared_directly {
        sources.database.options = mine.database.options.clone();
    }
    if mine.memory.declared_directly {
        sources.memory.options = mine.memory.options.clone();
    }
    if mine.key_value_store.declared_directly {
        let mut options = mine.key_value_store.options.clone();
        if options.delegate_type.is_none() {
            options.delegate_type = theirs.key_value_store.options.delegate_type.clone();
            options.storage_field_name = theirs.key_value_store.options.storage_field_name.clone();
        }
        sources.key_value_store.options = options;
    }

    for kind in SourceKind::ALL {
        set_declared_directly(&mut sources, kind, mine.is_declared_directly(kind));
    }

    RequestSpec {
        binding_name: reference.binding_name.clone(),
        data_type: reference.data_type.clone(),
        sources,
        ..own.clone()
    }
}

fn set_declared_directly(sources: &mut SourceConfigs, kind: SourceKind, declared: bool) {
    match kind {
        SourceKind::Network => sources.network.declared_directly = declared,
        SourceKind::Database => sources.database.declared_directly = declared,
        SourceKind::Memory => sources.memory.declared_directly = declared,
        SourceKind::KeyValueStore => sources.key_value_store.declared_directly = declared,
    }
}
