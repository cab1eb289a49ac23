use clap::{Parser, Subcommand};
use tutor_diagnose::Language;

#[derive(Debug, Parser)]
#[command(name = "tutor")]
#[command(about = "Diagnoses common algebra and calculus misconceptions and answers with hints")]
#[command(version)]
pub struct Cli {
    /// Language of the hints: `en` or `zh` (Traditional Chinese)
    #[arg(long = "lang", default_value_t = Language::English)]
    pub language: Language,

    /// Only use textual pattern matching; never compare the sides of an equation symbolically
    #[arg(long)]
    pub no_checker: bool,

    /// Log filter directive, e.g. `debug` or `tutor_diagnose=trace`; overrides RUST_LOG
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the expanded polynomial form of an expression
    Expand { expr: String },

    /// Print the simplified form of an expression
    Simplify { expr: String },

    /// Check whether both sides of an equation are equivalent
    Check { equation: String },
}
