//! CLI argument parsing using clap.
//!
//! Contains the Cli struct and the Commands enum.

use clap::{
    Args, Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Named calculator over optional 32-bit integers
#[derive(Parser, Debug)]
#[command(
    name = "calculator",
    version = env!("CARGO_PKG_VERSION"),
    about = "Sum and divide optional 32-bit integers",
    long_about = "Sum and divide optional 32-bit integers with wraparound semantics.\nAn omitted operand counts as 0; an omitted divisor is an error.",
    styles = clap_cargo_style()
)]
pub struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Calculator name (overrides config, 2 to 5 UTF-16 code units)
    #[arg(short, long, global = true, env = "CALC_NAME")]
    pub name: Option<String>,

    /// Also print the calculator name and operation count
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Operands of a binary operation. Either may be omitted.
#[derive(Args, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operands {
    /// First operand
    #[arg(short = 'a', long = "a", allow_negative_numbers = true)]
    pub a: Option<i32>,

    /// Second operand
    #[arg(short = 'b', long = "b", allow_negative_numbers = true)]
    pub b: Option<i32>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add two integers
    #[command(
        about = "Add two integers (omitted operands count as 0)",
        after_help = "Examples:\n  calculator sum --a 1 --b 1\n  calculator sum --a 2147483647 --b 1\n  calculator sum"
    )]
    Sum(Operands),

    /// Divide two integers
    #[command(
        about = "Divide two integers, truncating toward zero",
        after_help = "Examples:\n  calculator divide --a 4 --b 2\n  calculator divide --a -7 --b 2\n  calculator divide --b 3"
    )]
    Divide(Operands),

    /// Initialize configuration
    #[command(about = "Set up .calculator directory with default configuration")]
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration settings
    #[command(about = "Display active settings from .calculator/settings.toml")]
    Config,
}
