// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

/// Log filter directives, following the same conventions as `RUST_LOG`
pub const DATADEF_LOG: &str = "DATADEF_LOG";

/// Path of the configuration file, when not given on the command line
pub const DATADEF_CONFIG: &str = "DATADEF_CONFIG";
