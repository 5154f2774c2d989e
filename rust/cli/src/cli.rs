//! Command-line definitions parsed with clap.

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "handscope",
    version,
    about = "Best five-card poker hand finder for 5 to 7 cards"
)]
pub struct HandscopeCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate the best five-card hand from 5 to 7 cards
    Eval {
        /// Card labels such as As 10h Td (whitespace or comma separated)
        cards: Vec<String>,
        /// Hole cards, added to the evaluated set
        #[arg(long)]
        hole: Option<String>,
        /// Community cards, added to the evaluated set
        #[arg(long)]
        board: Option<String>,
        /// Output format, overrides the configured one
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Compare the best hands of two card sets
    Compare {
        /// First card set
        #[arg(long)]
        a: String,
        /// Second card set
        #[arg(long)]
        b: String,
        /// Output format, overrides the configured one
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// List the 52 card labels
    Deck,
    /// Show the resolved configuration and where each value came from
    Cfg,
}
