//! Command handler modules for the handscope CLI.
//!
//! Each command lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers specific to that command
//! - Output streams (`&mut dyn Write`) passed as parameters
//! - Errors propagated via the `CliError` enum

mod cfg;
mod compare;
mod deck;
mod eval;

pub use cfg::handle_cfg_command;
pub use compare::handle_compare_command;
pub use deck::handle_deck_command;
pub use eval::{EvalInput, handle_eval_command};
