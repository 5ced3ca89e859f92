// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use anyhow::Result;
use clap::Arg;
use common::logging_tracing;

use commands::{
    check::CheckCommandDefinition,
    command::{CommandDefinition, SubcommandDefinition, get},
    resolve::ResolveCommandDefinition,
};

mod commands;
mod config;

fn main() -> Result<()> {
    logging_tracing::init()?;

    let subcommand_definition = SubcommandDefinition::new(
        "datadef",
        "Resolve data definition declarations into request specs",
        vec![
            Box::new(ResolveCommandDefinition {}),
            Box::new(CheckCommandDefinition {}),
        ],
    );

    let command = subcommand_definition
        .command()
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("config")
                .help("Path to the configuration file")
                .long_help(
                    "Path to the configuration file. Defaults to the `DATADEF_CONFIG` environment variable, then `datadef.toml` in the current directory.",
                )
                .long("config")
                .global(true)
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        );

    let matches = command.get_matches();

    let config = config::load_config(get(&matches, "config"))?;

    subcommand_definition.execute(&matches, &config)
}
