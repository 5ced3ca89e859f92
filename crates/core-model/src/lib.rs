// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! The resolved model of data definitions.
//!
//! Everything in this crate is produced by the builder and consumed by an emission backend. Values
//! here are fully resolved: enablement, reuse and targeting decisions have all been made, and
//! nothing is mutated after the builder hands them out.

pub mod mapped_arena;
pub mod parameter;
pub mod plan;
pub mod request;
pub mod source;
