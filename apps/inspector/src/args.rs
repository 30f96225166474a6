//! Command-line interface of the inspector.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mfg-inspector")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Validate model forms and resolve variant configurations")]
pub struct Cli {
    /// Settings file (`catalog` and `logging` sections); built-in defaults when omitted
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print form values for a stored model draft, or a fresh form
    Form {
        /// Model draft JSON; omit for a new-model form
        draft: Option<PathBuf>,
    },
    /// Map form values to a draft and run the SUPER-BOM validator
    Validate {
        /// Form values JSON
        form: PathBuf,
        /// Reference book JSON (`cuttingParts`, `materials`) used to hydrate references
        #[arg(long)]
        references: Option<PathBuf>,
    },
    /// Resolve the effective configuration of a variant
    Resolve {
        /// Model JSON with its variants
        model: PathBuf,
        /// Variant id; the model's default variant when omitted
        #[arg(long)]
        variant: Option<String>,
    },
    /// Recompute the material cost of every variant of a model
    Estimate {
        /// Model JSON with its variants
        model: PathBuf,
        /// Price list JSON: material id to unit price
        #[arg(long)]
        prices: PathBuf,
    },
}
