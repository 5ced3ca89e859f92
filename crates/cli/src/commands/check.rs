// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgMatches, Command};
use codemap_diagnostic::ColorConfig;
use colored::Colorize;
use datadef_builder::build_system;

use super::command::{CommandDefinition, declaration_file_arg, get_required};
use crate::config::Config;

pub struct CheckCommandDefinition {}

impl CommandDefinition for CheckCommandDefinition {
    fn command(&self) -> Command {
        Command::new("check")
            .about("Check the declarations and report resolution errors without producing output")
            .arg(declaration_file_arg())
    }

    fn execute(&self, matches: &ArgMatches, config: &Config) -> Result<()> {
        let declarations: PathBuf = get_required(matches, "declarations")?;

        let resolved = build_system(&declarations, &config.defaults, ColorConfig::Auto)?;

        let interfaces = resolved.interfaces.len();
        let requests: usize = resolved
            .interfaces
            .values()
            .map(|interface| interface.requests.len())
            .sum();

        println!(
            "{} {} ({interfaces} interfaces, {requests} requests)",
            "OK".green().bold(),
            declarations.display()
        );

        Ok(())
    }
}
