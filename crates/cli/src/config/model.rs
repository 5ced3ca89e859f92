// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use datadef_builder::config::GlobalConfig;

/// Settings read from `datadef.toml`.
#[derive(Debug, Default, PartialEq)]
pub struct Config {
    /// The outermost config layer: declaration documents and interfaces override it
    pub defaults: GlobalConfig,
}
