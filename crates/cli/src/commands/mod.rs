//! Top level subcommands

pub(crate) mod check;
pub(crate) mod command;
pub(crate) mod resolve;
