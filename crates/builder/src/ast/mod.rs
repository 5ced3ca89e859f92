// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

pub mod ast_types;

use ast_types::AstSystem;

/// Parse a JSON declaration document.
pub fn parse_str(source: &str) -> Result<AstSystem, serde_json::Error> {
    serde_json::from_str(source)
}
