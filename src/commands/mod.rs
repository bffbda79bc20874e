//! # CLI Subcommands
//!
//! Contains modules that run the subcommands.
//! Simple subcommands are directly in `main.rs`.

pub mod convert;

use std::str::FromStr;

#[derive(thiserror::Error,Debug)]
pub enum CommandError {
    #[error("Command could not be interpreted")]
    InvalidCommand,
    #[error("Table is unknown")]
    UnknownTable,
    #[error("File not found")]
    FileNotFound,
    #[error("Nothing was converted")]
    NothingConverted
}

/// Lookup tables that can be dumped by the `tags` subcommand.
#[derive(PartialEq,Clone,Copy)]
pub enum TableType {
    Pos,
    Morph
}

impl FromStr for TableType {
    type Err = CommandError;
    fn from_str(s: &str) -> Result<Self,Self::Err> {
        match s {
            "pos" => Ok(Self::Pos),
            "morph" => Ok(Self::Morph),
            _ => Err(CommandError::UnknownTable)
        }
    }
}
