//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse field specifications and source selection flags.
//!
//! Non-responsibilities:
//! - Does not resolve fields (see `resolve` module).
//! - Does not format results (see `output` module).

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::field::FieldSpec;

#[derive(Parser, Debug)]
#[command(name = "confstruct")]
#[command(about = "Resolve typed configuration variables and report every problem at once", long_about = None)]
#[command(version)]
#[command(
    after_help = "Field syntax: NAME[!][:TYPE][=DEFAULT]\n  !        required (missing or empty is an error)\n  =DEFAULT used when the variable is not set\n  TYPE     string (default), int, bool, list, optional\n\nExamples:\n  confstruct HOST! PORT:int=8080 TAGS:list DEBUG:bool\n  confstruct --prefix APP_ --format json HOST! MOTD:optional\n  confstruct --env-file .env.production HOST!\n"
)]
pub struct Cli {
    /// Prefix prepended to every variable name (e.g. APP_ turns PORT into APP_PORT)
    #[arg(short, long, env = "CONFSTRUCT_PREFIX", default_value = "")]
    pub prefix: String,

    /// Read variables from this .env file instead of the process environment
    #[arg(short, long, env = "CONFSTRUCT_ENV_FILE", value_name = "FILE")]
    pub env_file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Fields to resolve
    #[arg(required = true, value_name = "FIELD")]
    pub fields: Vec<FieldSpec>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One NAME=value line per resolved field
    Text,
    /// A single JSON object keyed by field name
    Json,
}
