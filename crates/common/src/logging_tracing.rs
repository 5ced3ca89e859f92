// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! # Tracing configuration setup.
//!
//! The resolver is instrumented with Rust's `tracing` framework.
//!
//! Calling the `init` function will initialize a global tracing subscriber based on the value of
//! the `DATADEF_LOG` environment variable which follows the same conventions as `RUST_LOG`. For
//! example, `DATADEF_LOG=datadef_builder=debug` shows every stage a request passes through.
//! Without the variable only warnings and errors are printed.

use thiserror::Error;
use tracing_subscriber::{EnvFilter, filter::LevelFilter, prelude::*};

use crate::env_const::DATADEF_LOG;

/// Initialize the tracing subscriber with a compact `tracing_subscriber::fmt` layer writing to
/// stderr (stdout is reserved for the resolved output).
pub fn init() -> Result<(), LoggingError> {
    let directives = std::env::var(DATADEF_LOG).ok();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter(directives.as_deref()))
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

fn env_filter(directives: Option<&str>) -> EnvFilter {
    let builder = EnvFilter::builder().with_default_directive(LevelFilter::WARN.into());

    match directives {
        Some(directives) => builder.parse_lossy(directives),
        None => builder.parse_lossy(""),
    }
}

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Could not install the tracing subscriber: {0}")]
    SubscriberInit(#[from] tracing_subscriber::util::TryInitError),
}
