// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use datadef_core_model::{request::RequestSpec, source::SourceKind};
use tracing::debug;

use super::{Defaulted, Scanned};
use crate::resolution_error::ResolutionErrorKind;

/// Kinds enabled for a method that declares no source of its own. The key-value store always
/// needs an explicit delegate, so it is never among them.
pub const DEFAULT_KINDS: [SourceKind; 3] =
    [SourceKind::Network, SourceKind::Database, SourceKind::Memory];

impl Scanned {
    /// Reject a method that gives no way to find its sources.
    ///
    /// The default kinds themselves are enabled only once the reused handle is known (see
    /// [`enable_default_kinds`]), since the reference's configuration would replace them.
    pub fn apply_defaults(self) -> Result<Defaulted, ResolutionErrorKind> {
        let spec = self.spec;
        let declares_sources = spec.sources.has_direct_declarations();

        if spec.controller_reference {
            if !declares_sources && spec.reuses.is_none() && !spec.bound_in_constructor {
                return Err(ResolutionErrorKind::MissingSourceIntent {
                    controller_reference: true,
                });
            }
        } else if !declares_sources && spec.reuses.is_none() {
            return Err(ResolutionErrorKind::MissingSourceIntent {
                controller_reference: false,
            });
        }

        debug!(method = %spec.name, "defaulted");

        Ok(Defaulted { spec })
    }
}

/// A method that declares no source, is not a controller reference and does not use a handle
/// bound in the constructor gets every default kind, on top of what its reference enables.
pub fn enable_default_kinds(spec: &mut RequestSpec) {
    if spec.sources.has_direct_declarations()
        || spec.controller_reference
        || spec.bound_in_constructor
    {
        return;
    }

    for kind in DEFAULT_KINDS {
        spec.sources.set_enabled(kind, true);
    }
}
