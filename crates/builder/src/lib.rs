// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Resolution of data definition declarations into request specs.
//!
//! The entry points take a JSON declaration document (see [`ast::ast_types::AstSystem`]) and
//! produce a [`ResolvedSystem`], reporting every resolution error found along the way.

use std::{fs, path::Path};

use codemap::CodeMap;
use codemap_diagnostic::ColorConfig;
use datadef_core_model::request::ResolvedSystem;
use error::BuildError;

pub mod ast;
pub mod classifier;
pub mod config;
pub mod definition;
pub mod diagnostics;
pub mod error;
pub mod request;
pub mod resolution_error;
pub mod source;

#[cfg(test)]
mod test_support;

use ast::ast_types::AstSystem;
use config::GlobalConfig;
use diagnostics::emit_diagnostics;
use resolution_error::ResolutionError;

/// Resolve a parsed document, failing with every accumulated error if there is any.
pub fn build(system: &AstSystem, config: &GlobalConfig) -> Result<ResolvedSystem, BuildError> {
    let mut errors: Vec<ResolutionError> = vec![];
    let resolved = definition::resolve_system(system, config, &mut errors);

    if errors.is_empty() {
        Ok(resolved)
    } else {
        Err(BuildError::Diagnosis(errors))
    }
}

/// Build a resolved system from a declaration file, emitting diagnostics to stderr
pub fn build_system(
    declaration_file: impl AsRef<Path>,
    config: &GlobalConfig,
    color: ColorConfig,
) -> Result<ResolvedSystem, BuildError> {
    let path = declaration_file.as_ref();
    if !path.exists() {
        return Err(BuildError::FileNotFound(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;
    build_system_from_str(&content, path.display().to_string(), config, color)
}

pub fn build_system_from_str(
    content: &str,
    file_name: String,
    config: &GlobalConfig,
    color: ColorConfig,
) -> Result<ResolvedSystem, BuildError> {
    let mut codemap = CodeMap::new();
    let file = codemap.add_file(file_name, content.to_string());

    let system = ast::parse_str(content)?;

    build(&system, config).inspect_err(|err| {
        if let BuildError::Diagnosis(errors) = err {
            emit_diagnostics(errors, &codemap, &file, color);
        }
    })
}
