// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use datadef_core_model::source::{NetworkOptions, SourceConfig, TransportBinding};

use crate::{ast::ast_types::NetworkAnnotation, config::GlobalConfig};

/// A transport binding declares the network source as much as the network annotation does.
pub fn scan(
    annotation: Option<&NetworkAnnotation>,
    transport: Option<&TransportBinding>,
) -> SourceConfig<NetworkOptions> {
    if annotation.is_none() && transport.is_none() {
        return SourceConfig::default();
    }

    let annotation = annotation.cloned().unwrap_or_default();

    SourceConfig::declared(NetworkOptions {
        response_transform: annotation.response_transform,
        error_transform: annotation.error_transform,
        refresh_strategy: annotation.refresh_strategy,
        call_return_type: annotation.call_return_type,
        transport: transport.cloned(),
    })
}

pub fn post_process(
    config: SourceConfig<NetworkOptions>,
    global: &GlobalConfig,
) -> SourceConfig<NetworkOptions> {
    let SourceConfig {
        enabled,
        declared_directly,
        options,
    } = config;

    SourceConfig {
        enabled,
        declared_directly,
        options: NetworkOptions {
            response_transform: options
                .response_transform
                .or_else(|| global.response_transform.clone()),
            error_transform: options
                .error_transform
                .or_else(|| global.error_transform.clone()),
            refresh_strategy: options
                .refresh_strategy
                .or_else(|| global.refresh_strategy.clone()),
            ..options
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use multiplatform_test::multiplatform_test;

    #[multiplatform_test]
    fn transport_alone_declares_network() {
        let transport = TransportBinding {
            verb: "GET".to_string(),
            path: "/items/{id}".to_string(),
        };

        let config = scan(None, Some(&transport));
        assert!(config.enabled && config.declared_directly);
        assert_eq!(config.options.transport, Some(transport));
    }

    #[multiplatform_test]
    fn own_transforms_win_over_global() {
        let annotation = NetworkAnnotation {
            error_transform: Some("OwnError".to_string()),
            ..Default::default()
        };
        let global = GlobalConfig {
            response_transform: Some("GlobalResponse".to_string()),
            error_transform: Some("GlobalError".to_string()),
            refresh_strategy: None,
        };

        let config = post_process(scan(Some(&annotation), None), &global);
        assert_eq!(
            config.options.response_transform.as_deref(),
            Some("GlobalResponse")
        );
        assert_eq!(config.options.error_transform.as_deref(), Some("OwnError"));
        assert_eq!(config.options.refresh_strategy, None);
    }
}
