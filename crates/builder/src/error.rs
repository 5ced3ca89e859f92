// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use thiserror::Error;

use crate::resolution_error::ResolutionError;

#[derive(Error, Debug)]
pub enum BuildError {
    // The errors are emitted as diagnostics, so they are not part of the message
    #[error("Could not resolve the declarations ({} errors)", .0.len())]
    Diagnosis(Vec<ResolutionError>),

    #[error("File '{0}' not found")]
    FileNotFound(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid declaration document: {0}")]
    Parse(#[from] serde_json::Error),
}
