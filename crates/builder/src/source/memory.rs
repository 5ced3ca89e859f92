// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use datadef_core_model::source::{MemoryOptions, SourceConfig};

use crate::{ast::ast_types::MemoryAnnotation, config::GlobalConfig};

pub fn scan(annotation: Option<&MemoryAnnotation>) -> SourceConfig<MemoryOptions> {
    annotation
        .map(|annotation| {
            SourceConfig::declared(MemoryOptions {
                refresh_strategy: annotation.refresh_strategy.clone(),
            })
        })
        .unwrap_or_default()
}

pub fn post_process(
    mut config: SourceConfig<MemoryOptions>,
    global: &GlobalConfig,
) -> SourceConfig<MemoryOptions> {
    if config.options.refresh_strategy.is_none() {
        config.options.refresh_strategy = global.refresh_strategy.clone();
    }
    config
}
