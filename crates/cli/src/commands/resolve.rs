// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::{fs::File, io::BufWriter, io::Write, path::PathBuf};

use anyhow::{Context, Result};
use clap::{ArgMatches, Command};
use codemap_diagnostic::ColorConfig;
use datadef_builder::build_system;
use tracing::debug;

use super::command::{CommandDefinition, declaration_file_arg, get, get_required, output_arg};
use crate::config::Config;

pub struct ResolveCommandDefinition {}

impl CommandDefinition for ResolveCommandDefinition {
    fn command(&self) -> Command {
        Command::new("resolve")
            .about("Resolve the declarations and print the request specs as JSON")
            .arg(declaration_file_arg())
            .arg(output_arg())
    }

    fn execute(&self, matches: &ArgMatches, config: &Config) -> Result<()> {
        let declarations: PathBuf = get_required(matches, "declarations")?;
        let output: Option<PathBuf> = get(matches, "output");

        let resolved = build_system(&declarations, &config.defaults, ColorConfig::Auto)?;
        debug!(interfaces = resolved.interfaces.len(), "resolved declarations");

        let json = serde_json::to_string_pretty(&resolved)?;

        match output {
            Some(output) => {
                let file = File::create(&output)
                    .with_context(|| format!("Could not create '{}'", output.display()))?;
                let mut writer = BufWriter::new(file);
                writeln!(writer, "{json}")?;
                writer.flush()?;
            }
            None => println!("{json}"),
        }

        Ok(())
    }
}
