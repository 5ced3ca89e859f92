// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use datadef_core_model::source::{DatabaseOptions, SourceConfig};

use crate::{ast::ast_types::DatabaseAnnotation, config::GlobalConfig};

/// The result shape follows the data type even when the database is not declared, since
/// defaulting and reuse may enable it later.
pub fn scan(
    annotation: Option<&DatabaseAnnotation>,
    is_single_result: bool,
) -> SourceConfig<DatabaseOptions> {
    match annotation {
        Some(annotation) => SourceConfig::declared(DatabaseOptions {
            is_single_result,
            is_async: annotation.is_async,
            refresh_strategy: annotation.refresh_strategy.clone(),
        }),
        None => SourceConfig {
            enabled: false,
            declared_directly: false,
            options: DatabaseOptions {
                is_single_result,
                ..Default::default()
            },
        },
    }
}

pub fn post_process(
    mut config: SourceConfig<DatabaseOptions>,
    global: &GlobalConfig,
) -> SourceConfig<DatabaseOptions> {
    if config.options.refresh_strategy.is_none() {
        config.options.refresh_strategy = global.refresh_strategy.clone();
    }
    config
}
