// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Source config models, one per source kind.
//!
//! Each kind scans the method's direct annotation and then applies the global config to whatever
//! the method left unset.

pub mod database;
pub mod key_value_store;
pub mod memory;
pub mod network;

use datadef_core_model::source::SourceConfigs;

use crate::config::GlobalConfig;

pub fn post_process(configs: SourceConfigs, global: &GlobalConfig) -> SourceConfigs {
    SourceConfigs {
        network: network::post_process(configs.network, global),
        database: database::post_process(configs.database, global),
        memory: memory::post_process(configs.memory, global),
        key_value_store: key_value_store::post_process(configs.key_value_store, global),
    }
}
