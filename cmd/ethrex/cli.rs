//! Command-line surface for the execution core (spec §6 "CLI"): a thin
//! shim around [`ethrex_levm::Vm`] and [`ethrex_crypto::keccak256`] for
//! driving a bytecode buffer or hashing a byte string from a terminal.
//! The node process entry point proper — networking, sync, block
//! production — is out of scope (spec.md §1).

use std::fmt::Display;
use std::path::PathBuf;

use clap::{ArgAction, Parser as ClapParser, Subcommand as ClapSubcommand};
use tracing::Level;

#[derive(ClapParser)]
#[command(name = "ethrex", author = "LambdaClass", version, about = "ethrex execution core")]
pub struct CLI {
    #[command(flatten)]
    pub opts: Options,
    #[command(subcommand)]
    pub command: Subcommand,
}

#[derive(ClapParser, Debug)]
pub struct Options {
    #[arg(
        long = "log.level",
        default_value_t = Level::INFO,
        value_name = "LOG_LEVEL",
        env = "ETHREX_LOG_LEVEL",
        help = "The verbosity level used for logs.",
        long_help = "Possible values: info, debug, trace, warn, error"
    )]
    pub log_level: Level,
    #[arg(
        long = "log.color",
        default_value_t = LogColor::Auto,
        help = "Output logs with ANSI color codes.",
        long_help = "Possible values: auto, always, never",
        env = "ETHREX_LOG_COLOR"
    )]
    pub log_color: LogColor,
}

#[derive(ClapSubcommand, Debug)]
pub enum Subcommand {
    /// Runs a bytecode buffer through the interpreter and prints the
    /// resulting execution report.
    Run {
        /// Hex-encoded bytecode, with or without a `0x` prefix.
        #[arg(long, conflicts_with = "code_file")]
        code: Option<String>,
        /// Path to a file holding hex-encoded bytecode, as an alternative
        /// to passing it inline with `--code`.
        #[arg(long = "code-file", value_name = "PATH")]
        code_file: Option<PathBuf>,
        /// Starting gas budget.
        #[arg(long, default_value_t = 10_000_000)]
        gas: i64,
        /// Print the stack, memory length, and gas left after every step.
        #[arg(long, action = ArgAction::SetTrue)]
        trace: bool,
    },
    /// Hashes a UTF-8 string argument with Keccak-256 and prints the
    /// digest as hex.
    Keccak {
        #[arg(value_name = "DATA")]
        data: String,
    },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum LogColor {
    #[default]
    Auto,
    Always,
    Never,
}

impl Display for LogColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogColor::Auto => write!(f, "auto"),
            LogColor::Always => write!(f, "always"),
            LogColor::Never => write!(f, "never"),
        }
    }
}
