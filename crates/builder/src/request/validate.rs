// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use datadef_core_model::{request::ReturnKind, source::SourceKind};
use tracing::debug;

use super::{ReuseResolved, Validated};
use crate::{
    resolution_error::{BindingConflict, ResolutionErrorKind},
    source::key_value_store,
};

impl ReuseResolved {
    /// Check the invariants that hold for every resolved spec.
    pub fn validate(self) -> Result<Validated, Vec<ResolutionErrorKind>> {
        let spec = &self.spec;
        let sources = &spec.sources;
        let declares_sources = sources.has_direct_declarations();
        let mut errors = vec![];

        if sources.has_conflicting_storage() {
            errors.push(ResolutionErrorKind::ConflictingStorageBackends);
        }

        if spec.targets_only && spec.controller_reference {
            errors.push(ResolutionErrorKind::ConstructorBindingConflict(
                BindingConflict::TargetedControllerReference,
            ));
        }

        if let Some(reference) = &spec.reuses
            && spec.bound_in_constructor
            && declares_sources
            && !spec.targets_only
        {
            errors.push(ResolutionErrorKind::ConstructorBindingConflict(
                BindingConflict::UntargetedAnnotations {
                    reference: reference.clone(),
                },
            ));
        }

        if spec.targets_only && !declares_sources {
            errors.push(ResolutionErrorKind::TargetsWithoutAnnotation);
        }

        if let Some(reference) = &spec.reuses {
            for kind in sources.declared_kinds() {
                if !sources.is_enabled(kind) {
                    errors.push(ResolutionErrorKind::UnavailableTargetSource {
                        kind,
                        reference: reference.clone(),
                    });
                }
            }
        }

        // A handle bound in the constructor brings its own store
        if sources.key_value_store.enabled
            && !spec.bound_in_constructor
            && sources.key_value_store.options.delegate_type.is_none()
        {
            errors.push(key_value_store::missing_delegate());
        }

        if spec.return_kind == ReturnKind::SyncLookup
            && ![
                SourceKind::Memory,
                SourceKind::Database,
                SourceKind::KeyValueStore,
            ]
            .into_iter()
            .any(|kind| sources.is_enabled(kind))
        {
            errors.push(ResolutionErrorKind::NoStorageForSyncLookup);
        }

        if errors.is_empty() {
            debug!(method = %spec.name, "validated");
            Ok(Validated { spec: self.spec })
        } else {
            Err(errors)
        }
    }
}
