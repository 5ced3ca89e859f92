// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Resolution of a single request method.
//!
//! A method passes through a fixed sequence of stages, each a separate type:
//! [`Scanned`] (annotations, parameters and return type read), [`Defaulted`] (the method is
//! known to have a source intent), [`ReuseResolved`] (the reused handle's configuration merged
//! in and default kinds enabled), and [`Validated`]. Every stage consumes or borrows the previous value and produces a new one, so
//! a spec that failed a stage can never reach the next.

mod annotations;
mod defaults;
mod reuse;
mod scan;
mod validate;

pub use annotations::{ControllerMarker, MethodAnnotations};
pub use reuse::ReusePool;
pub use scan::{ReturnShape, classify_return};

use datadef_core_model::request::RequestSpec;

#[derive(Debug, Clone, PartialEq)]
pub struct Scanned {
    spec: RequestSpec,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Defaulted {
    spec: RequestSpec,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReuseResolved {
    spec: RequestSpec,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Validated {
    spec: RequestSpec,
}

macro_rules! stage_accessors {
    ($($stage:ident),*) => {
        $(
            impl $stage {
                pub fn spec(&self) -> &RequestSpec {
                    &self.spec
                }

                pub fn name(&self) -> &str {
                    &self.spec.name
                }
            }
        )*
    };
}

stage_accessors!(Scanned, Defaulted, ReuseResolved, Validated);

impl Validated {
    pub fn into_spec(self) -> RequestSpec {
        self.spec
    }
}
