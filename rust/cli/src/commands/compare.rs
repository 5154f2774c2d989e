//! Compare command handler.
//!
//! Evaluates two card sets independently and reports which best hand is
//! stronger. Only a pair of hands is compared; there is no pot resolution.

use crate::config::OutputFormat;
use crate::error::CliError;
use crate::formatters::{format_result, format_tiebreak};
use crate::validation::parse_card_list;
use handscope_engine::hand::{HandResult, best_hand, compare_hands};
use std::cmp::Ordering;
use std::io::Write;

/// Handle the compare command.
///
/// Text output lists both hands and ends with `A wins`, `B wins` or `Tie`.
/// JSON output is `{"a": .., "b": .., "winner": "a" | "b" | "tie"}`.
pub fn handle_compare_command(
    a: &str,
    b: &str,
    format: OutputFormat,
    unicode: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let hand_a = best_hand(&parse_card_list(a)?)?;
    let hand_b = best_hand(&parse_card_list(b)?)?;
    let ordering = compare_hands(&hand_a, &hand_b);
    tracing::debug!(?ordering, "compared hands");

    match format {
        OutputFormat::Text => {
            write_line(out, "A", &hand_a, unicode)?;
            write_line(out, "B", &hand_b, unicode)?;
            writeln!(out, "Result: {}", verdict(ordering))?;
        }
        OutputFormat::Json => {
            let winner = match ordering {
                Ordering::Greater => "a",
                Ordering::Less => "b",
                Ordering::Equal => "tie",
            };
            let value = serde_json::json!({
                "a": hand_a,
                "b": hand_b,
                "winner": winner,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        }
    }
    Ok(())
}

fn write_line(
    out: &mut dyn Write,
    label: &str,
    hand: &HandResult,
    unicode: bool,
) -> std::io::Result<()> {
    writeln!(
        out,
        "{}: {} ({})",
        label,
        format_result(hand, unicode),
        format_tiebreak(&hand.tiebreak)
    )
}

fn verdict(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Greater => "A wins",
        Ordering::Less => "B wins",
        Ordering::Equal => "Tie",
    }
}
