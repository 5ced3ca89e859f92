// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Resolution of whole interfaces.

use std::collections::HashSet;

use datadef_core_model::{
    mapped_arena::MappedArena,
    parameter::ResolvedParameter,
    request::{InterfaceSpec, ParamsProviderSpec, RequestSpec, ResolvedSystem},
    source::SourceKind,
};
use tracing::{debug, instrument};

use crate::{
    ast::ast_types::{AstInterface, AstMethod, AstSystem, TypeCapability},
    classifier::{check_special_parameters, classify},
    config::GlobalConfig,
    diagnostics::DiagnosticSink,
    request::{Defaulted, ReuseResolved, ReusePool, Scanned, Validated},
    resolution_error::{ResolutionError, ResolutionErrorKind},
};

/// Resolve every interface of a declaration document.
///
/// `config` is the outermost config layer; the document's own config is applied over it. Errors
/// are reported to `sink` and the methods they concern are left out of the result.
pub fn resolve_system(
    system: &AstSystem,
    config: &GlobalConfig,
    sink: &mut impl DiagnosticSink,
) -> ResolvedSystem {
    let config = config.overlay_opt(system.config.as_ref());
    let mut interfaces = MappedArena::default();

    for interface in &system.interfaces {
        if interfaces.contains_key(&interface.name) {
            sink.report(ResolutionError::new(
                &interface.name,
                &interface.name,
                ResolutionErrorKind::DuplicateInterfaceName,
            ));
            continue;
        }

        let spec = resolve_interface(interface, &config, sink);
        interfaces.add(&interface.name, spec);
    }

    ResolvedSystem { interfaces }
}

#[instrument(skip_all, fields(interface = %interface.name))]
pub fn resolve_interface(
    interface: &AstInterface,
    config: &GlobalConfig,
    sink: &mut impl DiagnosticSink,
) -> InterfaceSpec {
    let config = config.for_interface(interface.config.as_ref(), interface.network.as_ref());
    let mut report = |method: &str, kind: ResolutionErrorKind| {
        sink.report(ResolutionError::new(&interface.name, method, kind))
    };

    // Later definitions of a name are reported and not resolved, but they still count when
    // looking up the method another one reuses.
    let mut seen = HashSet::new();
    let duplicates: Vec<bool> = interface
        .methods
        .iter()
        .map(|method| !seen.insert(method.name.as_str()))
        .collect();

    for (method, _) in interface
        .methods
        .iter()
        .zip(&duplicates)
        .filter(|(_, duplicate)| **duplicate)
    {
        report(&method.name, ResolutionErrorKind::DuplicateMethodName);
    }

    let (providers, requests): (Vec<_>, Vec<_>) = interface
        .methods
        .iter()
        .zip(duplicates)
        .partition(|(method, _)| method.params_provider_target().is_some());

    let mut defaulted: Vec<(&AstMethod, bool, Defaulted)> = vec![];
    let mut unresolved: Vec<&str> = vec![];
    for (method, duplicate) in &requests {
        let spec = Scanned::scan(method, &config)
            .and_then(|scanned| scanned.apply_defaults().map_err(|kind| vec![kind]));

        match spec {
            Ok(spec) => defaulted.push((*method, *duplicate, spec)),
            Err(errors) => {
                if !duplicate {
                    errors.into_iter().for_each(|kind| report(&method.name, kind));
                }
                if method.reuse_target().is_none() {
                    unresolved.push(&method.name);
                }
            }
        }
    }

    // Methods that reuse no other are validated first, so that a reuse can only refer to a handle
    // that is actually built.
    let mut outcomes: Vec<Option<Result<Validated, Vec<ResolutionErrorKind>>>> = defaulted
        .iter()
        .map(|(_, _, spec)| spec.standalone().map(ReuseResolved::validate))
        .collect();

    let mut pool = ReusePool::default();
    for ((method, _, _), outcome) in defaulted.iter().zip(&outcomes) {
        match outcome {
            Some(Ok(validated)) => pool.add_handle(validated),
            Some(Err(_)) => pool.add_failed(&method.name),
            None => {}
        }
    }
    for name in unresolved {
        pool.add_failed(name);
    }
    for (method, _) in &requests {
        if let Some(target) = method.reuse_target() {
            pool.add_chained(&method.name, target);
        }
    }

    let reusing: Vec<(usize, Result<Validated, Vec<ResolutionErrorKind>>)> = defaulted
        .iter()
        .enumerate()
        .filter(|(_, (_, duplicate, spec))| !duplicate && spec.spec().reuses.is_some())
        .map(|(index, (_, _, spec))| {
            let resolved = spec
                .resolve_reuse(&pool)
                .map_err(|kind| vec![kind])
                .and_then(ReuseResolved::validate);
            (index, resolved)
        })
        .collect();
    for (index, resolved) in reusing {
        outcomes[index] = Some(resolved);
    }

    let mut specs: Vec<RequestSpec> = vec![];
    for ((method, duplicate, _), outcome) in defaulted.iter().zip(outcomes) {
        match outcome {
            _ if *duplicate => {}
            Some(Ok(validated)) => specs.push(validated.into_spec()),
            Some(Err(errors)) => errors.into_iter().for_each(|kind| report(&method.name, kind)),
            None => {}
        }
    }

    let request_methods: Vec<&AstMethod> = requests
        .iter()
        .filter(|(_, duplicate)| !duplicate)
        .map(|(method, _)| *method)
        .collect();

    let mut params_providers = vec![];
    for (method, _) in providers.iter().filter(|(_, duplicate)| !duplicate) {
        match resolve_params_provider(method, &request_methods) {
            Ok(provider) => params_providers.push(provider),
            Err(errors) => errors.into_iter().for_each(|kind| report(&method.name, kind)),
        }
    }

    debug!(
        requests = specs.len(),
        params_providers = params_providers.len(),
        "resolved interface"
    );

    InterfaceSpec::new(interface.name.clone(), specs, params_providers)
}

/// Pair a params provider with its target. The provider's query parameters must match the
/// target's by external name and position.
fn resolve_params_provider(
    method: &AstMethod,
    request_methods: &[&AstMethod],
) -> Result<ParamsProviderSpec, Vec<ResolutionErrorKind>> {
    let mut errors = vec![];
    let target = method.params_provider_target().unwrap_or_default();

    let payload_kind = method
        .return_type
        .capabilities
        .iter()
        .find_map(|capability| match capability {
            TypeCapability::SourceParams { payload } => Some(payload.unwrap_or(SourceKind::Network)),
            _ => None,
        })
        .filter(|kind| matches!(kind, SourceKind::Network | SourceKind::Database));

    if payload_kind.is_none() {
        errors.push(ResolutionErrorKind::InvalidReturnType {
            return_type: method.return_type.to_string(),
            reason: "a params provider must return network or database source params"
                .to_string(),
        });
    }

    let parameters: Vec<_> = method.parameters.iter().map(classify).collect();
    errors.extend(check_special_parameters(&parameters));

    match request_methods.iter().find(|m| m.name == target) {
        Some(target_method) => {
            let target_parameters: Vec<_> = target_method.parameters.iter().map(classify).collect();
            let expected = query_names(&target_parameters);
            let found = query_names(&parameters);

            if expected != found {
                errors.push(ResolutionErrorKind::ParamProviderShapeMismatch {
                    target: target.to_string(),
                    expected,
                    found,
                });
            }
        }
        None => errors.push(ResolutionErrorKind::UnknownProviderTarget {
            target: target.to_string(),
        }),
    }

    match payload_kind {
        Some(payload_kind) if errors.is_empty() => Ok(ParamsProviderSpec {
            name: method.name.clone(),
            target: target.to_string(),
            payload_kind,
            return_type: method.return_type.to_string(),
            parameters,
        }),
        _ => Err(errors),
    }
}

fn query_names(parameters: &[ResolvedParameter]) -> Vec<String> {
    parameters
        .iter()
        .filter(|p| p.is_query())
        .map(|p| p.name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use datadef_core_model::{
        plan::ExternalBinding,
        request::ReturnKind,
        source::SourceKind,
    };
    use multiplatform_test::multiplatform_test;
    use serde_json::json;

    use super::*;
    use crate::{
        resolution_error::BindingConflict,
        test_support::{
            call_of, controller_of, error_kinds, list_of, params_of, plain, query, request,
            request_of, resolve_document, resolve_methods,
        },
    };

    #[test_log::test]
    fn database_only_sync_lookup() {
        let (interface, errors) = resolve_methods(json!([{
            "name": "getSettings",
            "return-type": plain("Settings"),
            "annotations": [{ "database": {} }]
        }]));

        assert!(errors.is_empty(), "{errors:?}");
        let spec = request(&interface, "getSettings");
        assert_eq!(spec.return_kind, ReturnKind::SyncLookup);
        assert!(spec.sources.database.enabled);
        assert!(!spec.sources.memory.enabled);
        assert!(!spec.sources.network.enabled);
        assert_eq!(spec.sync_read_order(), vec![SourceKind::Database]);
    }

    #[test_log::test]
    fn targeted_reuse_restricts_to_declared_sources() {
        let (interface, errors) = resolve_methods(json!([
            {
                "name": "getX",
                "return-type": request_of(plain("X")),
                "annotations": [{ "network": {} }, { "database": {} }, { "memory": {} }]
            },
            {
                "name": "getXCached",
                "return-type": request_of(plain("X")),
                "annotations": [{ "reuse": { "method": "getX" } }, "targets", { "memory": {} }]
            }
        ]));

        assert!(errors.is_empty(), "{errors:?}");
        let cached = request(&interface, "getXCached");

        assert_eq!(
            cached.sources.enabled_kinds(),
            vec![SourceKind::Memory, SourceKind::Database, SourceKind::Network]
        );
        assert_eq!(cached.sources.declared_kinds(), vec![SourceKind::Memory]);
        assert!(cached.targets_only);
        assert_eq!(cached.target_sources(), vec![SourceKind::Memory]);
        assert!(cached.request_sources().is_empty());
        assert_eq!(cached.binding_name, "getX");
        assert_eq!(cached.handle_sources(), None);

        let original = request(&interface, "getX");
        assert_eq!(
            original.handle_sources(),
            Some(vec![SourceKind::Memory, SourceKind::Database, SourceKind::Network])
        );
        assert_eq!(
            original.request_sources(),
            vec![SourceKind::Database, SourceKind::Network]
        );
    }

    #[multiplatform_test]
    fn conflicting_storage_names_the_method() {
        let (interface, errors) = resolve_methods(json!([
            {
                "name": "getPrefs",
                "return-type": plain("Prefs"),
                "annotations": [{ "key-value-store": { "delegate": "PrefsDelegate" } }, { "database": {} }]
            },
            {
                "name": "getOther",
                "return-type": plain("Prefs"),
                "annotations": [{ "memory": {} }]
            }
        ]));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].method_name, "getPrefs");
        assert_eq!(errors[0].kind, ResolutionErrorKind::ConflictingStorageBackends);
        assert!(interface.request("getPrefs").is_none());
        assert!(interface.request("getOther").is_some());
    }

    #[multiplatform_test]
    fn params_provider_order_mismatch() {
        let (interface, errors) = resolve_methods(json!([
            {
                "name": "getItems",
                "return-type": request_of(list_of("Item")),
                "parameters": [query("id"), query("storeId")],
                "annotations": [{ "network": {} }]
            },
            {
                "name": "getItemsParams",
                "return-type": params_of("network", list_of("Item")),
                "parameters": [query("storeId"), query("id")],
                "annotations": [{ "params-provider": { "target": "getItems" } }]
            }
        ]));

        assert!(interface.params_providers.is_empty());
        assert_eq!(errors.len(), 1);
        insta::assert_snapshot!(
            errors[0].to_string(),
            @"Parameters do not match those of 'getItems': expected [id, storeId], found [storeId, id] (in `Items.getItemsParams`)"
        );
    }

    #[multiplatform_test]
    fn params_provider_pairs_with_target() {
        let (interface, errors) = resolve_methods(json!([
            {
                "name": "getItems",
                "return-type": request_of(list_of("Item")),
                "parameters": [
                    query("id"),
                    { "name": "onResult", "type": { "name": "Callback", "capabilities": ["callback"] } },
                    { "name": "storeId", "type": plain("String"), "tags": [{ "rename": { "name": "store_id" } }] }
                ],
                "annotations": [{ "database": {} }]
            },
            {
                "name": "getItemsQuery",
                "return-type": params_of("database", list_of("Item")),
                "parameters": [query("id"), query("store_id")],
                "annotations": [{ "params-provider": { "target": "getItems" } }]
            },
            {
                "name": "getMissingQuery",
                "return-type": params_of("database", list_of("Item")),
                "annotations": [{ "params-provider": { "target": "getMissing" } }]
            }
        ]));

        assert_eq!(
            error_kinds(&errors, "getMissingQuery"),
            vec![ResolutionErrorKind::UnknownProviderTarget {
                target: "getMissing".to_string()
            }]
        );
        assert_eq!(errors.len(), 1);

        let provider = &interface.params_providers[0];
        assert_eq!(provider.target, "getItems");
        assert_eq!(provider.payload_kind, SourceKind::Database);
        assert!(interface.request("getItemsQuery").is_none());
    }

    #[multiplatform_test]
    fn no_intent_never_defaults() {
        let (interface, errors) = resolve_methods(json!([
            { "name": "getX", "return-type": request_of(plain("X")) },
            {
                "name": "handle",
                "return-type": controller_of(plain("X")),
                "annotations": [{ "controller-reference": {} }]
            }
        ]));

        assert!(interface.requests.is_empty());
        assert_eq!(
            error_kinds(&errors, "getX"),
            vec![ResolutionErrorKind::MissingSourceIntent {
                controller_reference: false
            }]
        );
        assert_eq!(
            error_kinds(&errors, "handle"),
            vec![ResolutionErrorKind::MissingSourceIntent {
                controller_reference: true
            }]
        );
    }

    #[multiplatform_test]
    fn reuse_is_single_hop() {
        let (interface, errors) = resolve_methods(json!([
            {
                "name": "getX",
                "return-type": request_of(plain("X")),
                "annotations": [{ "network": {} }]
            },
            {
                "name": "getY",
                "return-type": request_of(plain("X")),
                "annotations": [{ "reuse": { "method": "getX" } }]
            },
            {
                "name": "getZ",
                "return-type": request_of(plain("X")),
                "annotations": [{ "reuse": { "method": "getY" } }]
            }
        ]));

        assert_eq!(request(&interface, "getY").binding_name, "getX");
        assert!(interface.request("getZ").is_none());
        assert_eq!(
            error_kinds(&errors, "getZ"),
            vec![ResolutionErrorKind::DanglingReuseReference {
                target: "getY".to_string(),
                reuses_another: Some("getX".to_string()),
            }]
        );
    }

    #[multiplatform_test]
    fn reuse_type_must_match() {
        let (_, errors) = resolve_methods(json!([
            {
                "name": "getX",
                "return-type": request_of(plain("X")),
                "annotations": [{ "network": {} }]
            },
            {
                "name": "getXs",
                "return-type": request_of(list_of("X")),
                "annotations": [{ "reuse": { "method": "getX" } }]
            }
        ]));

        assert_eq!(
            error_kinds(&errors, "getXs"),
            vec![ResolutionErrorKind::ReuseTypeMismatch {
                target: "getX".to_string(),
                expected: "X".to_string(),
                found: "List<X>".to_string(),
            }]
        );
    }

    #[multiplatform_test]
    fn duplicate_names_stay_visible_to_reuse() {
        let (interface, errors) = resolve_methods(json!([
            {
                "name": "getX",
                "return-type": request_of(plain("X")),
                "annotations": [{ "network": {} }]
            },
            {
                "name": "getX",
                "return-type": request_of(plain("X")),
                "annotations": [{ "memory": {} }]
            },
            {
                "name": "getY",
                "return-type": request_of(plain("X")),
                "annotations": [{ "reuse": { "method": "getX" } }]
            }
        ]));

        assert_eq!(interface.requests.len(), 1);
        assert_eq!(
            request(&interface, "getX").sources.enabled_kinds(),
            vec![SourceKind::Network]
        );
        assert_eq!(
            error_kinds(&errors, "getX"),
            vec![ResolutionErrorKind::DuplicateMethodName]
        );
        assert_eq!(
            error_kinds(&errors, "getY"),
            vec![ResolutionErrorKind::AmbiguousReuseReference {
                target: "getX".to_string(),
                count: 2
            }]
        );
    }

    #[multiplatform_test]
    fn constructor_bound_controller() {
        let (interface, errors) = resolve_methods(json!([
            {
                "name": "items",
                "return-type": controller_of(plain("Item")),
                "annotations": [{ "controller-reference": { "optional": true } }]
            },
            {
                "name": "getItem",
                "return-type": request_of(plain("Item")),
                "annotations": [{ "reuse": { "method": "items" } }]
            },
            {
                "name": "getItemFromNetwork",
                "return-type": request_of(plain("Item")),
                "annotations": [{ "reuse": { "method": "items" } }, { "network": {} }]
            }
        ]));

        assert_eq!(
            error_kinds(&errors, "getItemFromNetwork"),
            vec![ResolutionErrorKind::ConstructorBindingConflict(
                BindingConflict::UntargetedAnnotations {
                    reference: "items".to_string()
                }
            )]
        );

        let get_item = request(&interface, "getItem");
        assert!(get_item.bound_in_constructor);
        assert_eq!(get_item.binding_name, "items");
        assert!(get_item.sources.enabled_kinds().is_empty());
        assert_eq!(get_item.handle_sources(), None);

        let shape = interface.constructor_shape();
        assert_eq!(
            shape.external_bindings,
            vec![ExternalBinding {
                binding_name: "items".to_string(),
                data_type: "Item".to_string(),
                optional: true,
            }]
        );
        assert!(shape.emits_optional_constructor);
        assert!(!shape.transport_client);
        assert!(interface.has_optional_binding);
    }

    #[multiplatform_test]
    fn storage_conflict_through_bound_reuse() {
        let (interface, errors) = resolve_methods(json!([
            {
                "name": "prefs",
                "return-type": controller_of(plain("Prefs")),
                "annotations": [
                    { "controller-reference": { "in-constructor": true } },
                    { "key-value-store": { "delegate": "PrefsDelegate" } }
                ]
            },
            {
                "name": "getPrefs",
                "return-type": request_of(plain("Prefs")),
                "annotations": [{ "reuse": { "method": "prefs" } }, "targets", { "database": {} }]
            }
        ]));

        assert_eq!(
            error_kinds(&errors, "getPrefs"),
            vec![ResolutionErrorKind::ConflictingStorageBackends]
        );

        for spec in &interface.requests {
            assert!(!spec.sources.has_conflicting_storage(), "{}", spec.name);
        }
        assert!(interface.has_key_value_store);
        assert_eq!(
            interface.constructor_shape().store_delegates[0].field_name,
            "prefsStoreDelegate"
        );
    }

    #[multiplatform_test]
    fn reuse_requires_reference_to_enable_declared_kinds() {
        let (_, errors) = resolve_methods(json!([
            {
                "name": "getX",
                "return-type": request_of(plain("X")),
                "annotations": [{ "network": {} }]
            },
            {
                "name": "getXCached",
                "return-type": request_of(plain("X")),
                "annotations": [{ "reuse": { "method": "getX" } }, "targets", { "memory": {} }]
            }
        ]));

        assert_eq!(
            error_kinds(&errors, "getXCached"),
            vec![ResolutionErrorKind::UnavailableTargetSource {
                kind: SourceKind::Memory,
                reference: "getX".to_string(),
            }]
        );
    }

    #[multiplatform_test]
    fn resolution_is_idempotent() {
        let document = json!({
            "interfaces": [{
                "name": "Items",
                "methods": [
                    {
                        "name": "getItems",
                        "return-type": request_of(list_of("Item")),
                        "parameters": [query("id")],
                        "annotations": [{ "network": {} }, { "memory": {} }]
                    },
                    {
                        "name": "getItemsCached",
                        "return-type": request_of(list_of("Item")),
                        "parameters": [query("id")],
                        "annotations": [{ "reuse": { "method": "getItems" } }, "targets", { "memory": {} }]
                    },
                    {
                        "name": "getLatest",
                        "return-type": request_of(list_of("Item")),
                        "annotations": [{ "reuse": { "method": "getItems" } }, "cancel-previous"]
                    }
                ]
            }]
        });

        let (first, first_errors) = resolve_document(document.clone(), &GlobalConfig::default());
        let (second, second_errors) = resolve_document(document, &GlobalConfig::default());

        assert!(first_errors.is_empty() && second_errors.is_empty());
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );

        let latest = request(first.interface("Items").unwrap(), "getLatest");
        assert!(latest.cancel_previous);
        assert_eq!(
            latest.sources.enabled_kinds(),
            vec![SourceKind::Memory, SourceKind::Database, SourceKind::Network]
        );
        assert!(latest.sources.declared_kinds().is_empty());
    }

    #[multiplatform_test]
    fn pure_reuse_gets_default_kinds() {
        let (interface, errors) = resolve_methods(json!([
            {
                "name": "getX",
                "return-type": request_of(plain("X")),
                "annotations": [{ "network": {} }]
            },
            {
                "name": "getY",
                "return-type": request_of(plain("X")),
                "annotations": [{ "reuse": { "method": "getX" } }]
            }
        ]));

        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(
            request(&interface, "getX").sources.enabled_kinds(),
            vec![SourceKind::Network]
        );

        let reusing = request(&interface, "getY");
        assert_eq!(
            reusing.sources.enabled_kinds(),
            vec![SourceKind::Memory, SourceKind::Database, SourceKind::Network]
        );
        assert!(!reusing.sources.key_value_store.enabled);
        assert_eq!(reusing.binding_name, "getX");
    }

    #[multiplatform_test]
    fn reuse_of_unresolved_method() {
        let (interface, errors) = resolve_methods(json!([
            {
                "name": "getX",
                "return-type": plain("X"),
                "annotations": [{ "network": {} }]
            },
            {
                "name": "getY",
                "return-type": request_of(plain("X")),
                "annotations": [{ "reuse": { "method": "getX" } }]
            },
            {
                "name": "getW",
                "return-type": controller_of(plain("X")),
                "annotations": [{ "network": {} }]
            },
            {
                "name": "getV",
                "return-type": request_of(plain("X")),
                "annotations": [{ "reuse": { "method": "getW" } }]
            }
        ]));

        assert!(interface.requests.is_empty());
        assert_eq!(
            error_kinds(&errors, "getX"),
            vec![ResolutionErrorKind::NoStorageForSyncLookup]
        );
        assert_eq!(
            error_kinds(&errors, "getY"),
            vec![ResolutionErrorKind::UnresolvedReuseReference {
                target: "getX".to_string()
            }]
        );
        assert!(matches!(
            error_kinds(&errors, "getW").as_slice(),
            [ResolutionErrorKind::InvalidReturnType { .. }]
        ));
        assert_eq!(
            error_kinds(&errors, "getV"),
            vec![ResolutionErrorKind::UnresolvedReuseReference {
                target: "getW".to_string()
            }]
        );
    }

    #[multiplatform_test]
    fn store_with_database_and_no_delegate() {
        let (interface, errors) = resolve_methods(json!([{
            "name": "getPrefs",
            "return-type": plain("Prefs"),
            "annotations": [{ "key-value-store": {} }, { "database": {} }]
        }]));

        assert!(interface.requests.is_empty());
        assert_eq!(
            error_kinds(&errors, "getPrefs"),
            vec![
                ResolutionErrorKind::ConflictingStorageBackends,
                ResolutionErrorKind::MalformedSourceOptions {
                    kind: SourceKind::KeyValueStore,
                    detail: "a delegate type is required".to_string(),
                },
            ]
        );
    }

    #[multiplatform_test]
    fn raw_transport_call() {
        let (interface, errors) = resolve_methods(json!([{
            "name": "fetchItem",
            "return-type": call_of(plain("ItemResponse")),
            "parameters": [query("id")],
            "annotations": [
                { "transport": { "verb": "GET", "path": "/items/{id}" } },
                { "network": { "call-return-type": "ItemResponse" } }
            ]
        }]));

        assert!(errors.is_empty(), "{errors:?}");
        let call = request(&interface, "fetchItem");
        assert_eq!(call.return_kind, ReturnKind::RawTransportCall);
        assert_eq!(call.data_type, "ItemResponse");

        let network = &call.sources.network;
        assert!(network.enabled && network.declared_directly);
        assert_eq!(network.options.call_return_type.as_deref(), Some("ItemResponse"));
        assert_eq!(
            network.options.transport.as_ref().map(|t| t.path.as_str()),
            Some("/items/{id}")
        );
        assert_eq!(call.handle_sources(), None);
        assert!(interface.has_network);
    }

    #[multiplatform_test]
    fn config_layers() {
        let document = json!({
            "config": { "response-transform": "DocResponse", "refresh-strategy": "Daily" },
            "interfaces": [{
                "name": "Items",
                "network": { "error-transform": "ItemsError" },
                "methods": [
                    {
                        "name": "getItem",
                        "return-type": request_of(plain("Item")),
                        "annotations": [
                            { "network": { "response-transform": "OwnResponse" } },
                            { "memory": { "refresh-strategy": "Hourly" } },
                            { "forward": { "name": "Deprecated" } }
                        ]
                    },
                    {
                        "name": "getItemDefault",
                        "return-type": request_of(plain("Item")),
                        "annotations": [{ "reuse": { "method": "getItem" } }, { "network": {} }, "targets"]
                    }
                ]
            }]
        });
        let outermost = GlobalConfig {
            error_transform: Some("ProjectError".to_string()),
            ..Default::default()
        };

        let (resolved, errors) = resolve_document(document, &outermost);
        assert!(errors.is_empty(), "{errors:?}");
        let interface = resolved.interface("Items").unwrap();

        let item = request(interface, "getItem");
        let network = &item.sources.network.options;
        assert_eq!(network.response_transform.as_deref(), Some("OwnResponse"));
        assert_eq!(network.error_transform.as_deref(), Some("ItemsError"));
        assert_eq!(network.refresh_strategy.as_deref(), Some("Daily"));
        assert_eq!(item.sources.refresh_strategy(SourceKind::Memory), Some("Hourly"));
        assert_eq!(item.forwarded_annotations, vec!["Deprecated".to_string()]);

        let default = request(interface, "getItemDefault");
        assert_eq!(
            default.sources.network.options.response_transform.as_deref(),
            Some("DocResponse")
        );
        assert!(interface.constructor_shape().transport_client);
    }

    #[multiplatform_test]
    fn duplicate_interfaces() {
        let (resolved, errors) = resolve_document(
            json!({ "interfaces": [{ "name": "Items" }, { "name": "Items" }] }),
            &GlobalConfig::default(),
        );

        assert_eq!(resolved.interfaces.len(), 1);
        assert_eq!(
            error_kinds(&errors, "Items"),
            vec![ResolutionErrorKind::DuplicateInterfaceName]
        );
    }
}
