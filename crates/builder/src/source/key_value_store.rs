// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use datadef_core_model::source::{KeyValueStoreOptions, SourceConfig, SourceKind};
use heck::ToLowerCamelCase;

use crate::{
    ast::ast_types::KeyValueStoreAnnotation, config::GlobalConfig,
    resolution_error::ResolutionErrorKind,
};

/// The field the delegate of `method_name` is stored under.
pub fn storage_field_name(method_name: &str) -> String {
    format!("{method_name}StoreDelegate").to_lower_camel_case()
}

/// The delegate type may be left out here. A method that reuses another inherits the delegate of
/// the reused method, and validation reports a store that ends up without one.
pub fn scan(
    annotation: Option<&KeyValueStoreAnnotation>,
    method_name: &str,
) -> SourceConfig<KeyValueStoreOptions> {
    let storage_field_name = storage_field_name(method_name);

    match annotation {
        Some(annotation) => SourceConfig::declared(KeyValueStoreOptions {
            delegate_type: annotation.delegate.clone(),
            storage_field_name,
            refresh_strategy: annotation.refresh_strategy.clone(),
        }),
        None => SourceConfig {
            enabled: false,
            declared_directly: false,
            options: KeyValueStoreOptions {
                storage_field_name,
                ..Default::default()
            },
        },
    }
}

pub fn post_process(
    mut config: SourceConfig<KeyValueStoreOptions>,
    global: &GlobalConfig,
) -> SourceConfig<KeyValueStoreOptions> {
    if config.options.refresh_strategy.is_none() {
        config.options.refresh_strategy = global.refresh_strategy.clone();
    }
    config
}

pub fn missing_delegate() -> ResolutionErrorKind {
    ResolutionErrorKind::MalformedSourceOptions {
        kind: SourceKind::KeyValueStore,
        detail: "a delegate type is required".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use multiplatform_test::multiplatform_test;

    #[multiplatform_test]
    fn field_name_is_lower_camel_case() {
        assert_eq!(storage_field_name("getSettings"), "getSettingsStoreDelegate");
        assert_eq!(storage_field_name("GetSettings"), "getSettingsStoreDelegate");
    }

    #[multiplatform_test]
    fn missing_delegate_is_left_to_validation() {
        let config = scan(Some(&KeyValueStoreAnnotation::default()), "getSettings");

        assert!(config.enabled);
        assert!(config.declared_directly);
        assert_eq!(config.options.delegate_type, None);
        assert_eq!(config.options.storage_field_name, "getSettingsStoreDelegate");
    }
}
