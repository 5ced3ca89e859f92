// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use datadef_core_model::source::SourceKind;
use thiserror::Error;

/// An error recorded against one method (or, for duplicate interfaces, one interface).
///
/// Errors never abort the batch: the method is left out of the resolved output and resolution
/// continues with its siblings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} (in `{interface_name}.{method_name}`)")]
pub struct ResolutionError {
    pub interface_name: String,
    pub method_name: String,
    pub kind: ResolutionErrorKind,
}

impl ResolutionError {
    pub fn new(
        interface_name: impl Into<String>,
        method_name: impl Into<String>,
        kind: ResolutionErrorKind,
    ) -> Self {
        ResolutionError {
            interface_name: interface_name.into(),
            method_name: method_name.into(),
            kind,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionErrorKind {
    #[error("{}", missing_source_intent_message(*.controller_reference))]
    MissingSourceIntent { controller_reference: bool },

    #[error("{}", dangling_reuse_message(.target, .reuses_another.as_deref()))]
    DanglingReuseReference {
        target: String,
        /// Set when a method named `target` exists but reuses another method itself
        reuses_another: Option<String>,
    },

    #[error("Reuse of '{target}' refers to a method that failed to resolve")]
    UnresolvedReuseReference { target: String },

    #[error("Reuse of '{target}' is ambiguous: {count} methods provide that handle")]
    AmbiguousReuseReference { target: String, count: usize },

    #[error("Reuse of '{target}' expects data type '{expected}', but this method returns '{found}'")]
    ReuseTypeMismatch {
        target: String,
        expected: String,
        found: String,
    },

    #[error("The key-value store and the database cannot both be enabled on one method")]
    ConflictingStorageBackends,

    #[error("Only one {role} parameter is allowed, found {}", join_names(.parameters))]
    DuplicateSpecialParameter {
        role: String,
        parameters: Vec<String>,
    },

    #[error("Invalid return type '{return_type}': {reason}")]
    InvalidReturnType { return_type: String, reason: String },

    #[error("Duplicate method definition")]
    DuplicateMethodName,

    #[error("Duplicate interface definition")]
    DuplicateInterfaceName,

    #[error("Parameters do not match those of '{target}': expected [{}], found [{}]", .expected.join(", "), .found.join(", "))]
    ParamProviderShapeMismatch {
        target: String,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("{0}")]
    ConstructorBindingConflict(BindingConflict),

    #[error("Annotation '{annotation}' is specified more than once")]
    DuplicateAnnotation { annotation: String },

    #[error("Invalid {kind} options: {detail}")]
    MalformedSourceOptions { kind: SourceKind, detail: String },

    #[error("A targeted request must declare at least one source directly")]
    TargetsWithoutAnnotation,

    #[error("A synchronous lookup needs memory, database, or key-value-store storage")]
    NoStorageForSyncLookup,

    #[error("A controller reference cannot take parameters, found {count}")]
    ParametersOnControllerReference { count: usize },

    #[error("Params provider target '{target}' is not a request method of this interface")]
    UnknownProviderTarget { target: String },

    #[error("The {kind} source is declared, but the handle of '{reference}' does not enable it")]
    UnavailableTargetSource { kind: SourceKind, reference: String },
}

impl ResolutionErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            ResolutionErrorKind::MissingSourceIntent { .. } => "D001",
            ResolutionErrorKind::DanglingReuseReference { .. } => "D002",
            ResolutionErrorKind::AmbiguousReuseReference { .. } => "D003",
            ResolutionErrorKind::ReuseTypeMismatch { .. } => "D004",
            ResolutionErrorKind::ConflictingStorageBackends => "D005",
            ResolutionErrorKind::DuplicateSpecialParameter { .. } => "D006",
            ResolutionErrorKind::InvalidReturnType { .. } => "D007",
            ResolutionErrorKind::DuplicateMethodName => "D008",
            ResolutionErrorKind::DuplicateInterfaceName => "D009",
            ResolutionErrorKind::ParamProviderShapeMismatch { .. } => "D010",
            ResolutionErrorKind::ConstructorBindingConflict(_) => "D011",
            ResolutionErrorKind::DuplicateAnnotation { .. } => "D012",
            ResolutionErrorKind::MalformedSourceOptions { .. } => "D013",
            ResolutionErrorKind::TargetsWithoutAnnotation => "D014",
            ResolutionErrorKind::NoStorageForSyncLookup => "D015",
            ResolutionErrorKind::ParametersOnControllerReference { .. } => "D016",
            ResolutionErrorKind::UnknownProviderTarget { .. } => "D017",
            ResolutionErrorKind::UnavailableTargetSource { .. } => "D018",
            ResolutionErrorKind::UnresolvedReuseReference { .. } => "D019",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindingConflict {
    #[error("A controller reference cannot be targeted")]
    TargetedControllerReference,

    #[error(
        "The handle of '{reference}' is bound in the constructor, so direct source annotations need targets"
    )]
    UntargetedAnnotations { reference: String },
}

fn join_names(names: &[String]) -> String {
    match names {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}

fn missing_source_intent_message(controller_reference: bool) -> String {
    if controller_reference {
        "A controller reference that is not bound in the constructor must declare its sources"
            .to_string()
    } else {
        "No source declared: annotate the method with a source, reuse another method, or mark it as a controller reference"
            .to_string()
    }
}

fn dangling_reuse_message(target: &str, reuses_another: Option<&str>) -> String {
    match reuses_another {
        Some(other) => format!(
            "Could not find source '{target}': '{target}' reuses '{other}' itself, and reuse is resolved one level deep only"
        ),
        None => format!("Could not find source '{target}'"),
    }
}
