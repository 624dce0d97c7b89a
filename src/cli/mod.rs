pub(crate) mod args;
pub(crate) mod commands;

pub(crate) use args::{Cli, split_item};
pub(crate) use commands::{Command, HELP, is_yes, parse_command};
