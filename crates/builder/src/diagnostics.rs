// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use codemap::{CodeMap, File, Span};
use codemap_diagnostic::{ColorConfig, Diagnostic, Emitter, Level, SpanLabel, SpanStyle};

use crate::resolution_error::ResolutionError;

/// Receives resolution errors as they are found.
pub trait DiagnosticSink {
    fn report(&mut self, error: ResolutionError);
}

impl DiagnosticSink for Vec<ResolutionError> {
    fn report(&mut self, error: ResolutionError) {
        self.push(error);
    }
}

/// Convert a resolution error into a diagnostic, pointing at the quoted method name in the
/// declaration file when it can be found there.
pub fn to_diagnostic(error: &ResolutionError, file: Option<&File>) -> Diagnostic {
    let spans = file
        .and_then(|file| declaration_span(file, &error.interface_name, &error.method_name))
        .map(|span| {
            vec![SpanLabel {
                span,
                style: SpanStyle::Primary,
                label: Some(error.kind.to_string()),
            }]
        })
        .unwrap_or_default();

    Diagnostic {
        level: Level::Error,
        message: format!(
            "{}: {}",
            qualified_name(&error.interface_name, &error.method_name),
            error.kind
        ),
        code: Some(error.kind.code().to_string()),
        spans,
    }
}

pub fn emit_diagnostics(
    errors: &[ResolutionError],
    codemap: &CodeMap,
    file: &File,
    color: ColorConfig,
) {
    let diagnostics: Vec<_> = errors
        .iter()
        .map(|e| to_diagnostic(e, Some(file)))
        .collect();

    let mut emitter = Emitter::stderr(color, Some(codemap));
    emitter.emit(&diagnostics);
}

fn qualified_name(interface_name: &str, method_name: &str) -> String {
    if interface_name == method_name {
        interface_name.to_string()
    } else {
        format!("{interface_name}.{method_name}")
    }
}

/// The span of `"<method_name>"` following the interface's own quoted name. Falls back to the
/// first occurrence anywhere in the file.
fn declaration_span(file: &File, interface_name: &str, method_name: &str) -> Option<Span> {
    let source = file.source();
    let quoted_method = format!("\"{method_name}\"");
    let interface_start = source.find(&format!("\"{interface_name}\"")).unwrap_or(0);

    let start = source[interface_start..]
        .find(&quoted_method)
        .map(|offset| interface_start + offset)
        .or_else(|| source.find(&quoted_method))?;

    Some(
        file.span
            .subspan(start as u64, (start + quoted_method.len()) as u64),
    )
}
