//! Eval command handler.
//!
//! Collects cards from the `--hole` and `--board` options and any positional
//! labels, finds the best five-card hand and prints it as text or JSON.
//!
//! # Example Output
//!
//! ```text
//! Cards: [A♠ K♠ 2♠ 5♠ 9♠ 4♥ 7♦]
//! Best:  Flush [A♠ K♠ 9♠ 5♠ 2♠]
//! Tiebreak: 14 13 9 5 2
//! ```

use crate::config::OutputFormat;
use crate::error::CliError;
use crate::formatters::{format_cards, format_result, format_tiebreak};
use crate::ui;
use crate::validation::{parse_card_args, parse_card_list};
use handscope_engine::cards::Card;
use handscope_engine::hand::best_hand;
use std::io::Write;

/// Number of hole cards in Texas Hold'em.
const HOLE_CARDS: usize = 2;

/// Where the evaluated cards come from.
#[derive(Debug, Default, Clone, Copy)]
pub struct EvalInput<'a> {
    pub cards: &'a [String],
    pub hole: Option<&'a str>,
    pub board: Option<&'a str>,
}

/// Handle the eval command.
///
/// # Errors
///
/// Returns `CliError::InvalidInput` when no card is given, `CliError::Parse`
/// for an unreadable label and `CliError::Eval` when the evaluator rejects the
/// set (wrong size or duplicate card).
pub fn handle_eval_command(
    input: EvalInput<'_>,
    format: OutputFormat,
    unicode: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cards = collect_cards(input, err)?;
    if cards.is_empty() {
        return Err(CliError::InvalidInput("no cards given".into()));
    }

    let best = best_hand(&cards)?;
    tracing::info!(category = %best.category, cards = cards.len(), "evaluated");

    match format {
        OutputFormat::Text => {
            writeln!(out, "Cards: {}", format_cards(&cards, unicode))?;
            writeln!(out, "Best:  {}", format_result(&best, unicode))?;
            writeln!(out, "Tiebreak: {}", format_tiebreak(&best.tiebreak))?;
        }
        OutputFormat::Json => {
            let mut value = serde_json::to_value(&best)?;
            value["input"] = cards.iter().map(Card::to_string).collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        }
    }
    Ok(())
}

fn collect_cards(input: EvalInput<'_>, err: &mut dyn Write) -> Result<Vec<Card>, CliError> {
    let mut cards = Vec::new();
    if let Some(hole) = input.hole {
        let hole = parse_card_list(hole)?;
        if hole.len() != HOLE_CARDS {
            ui::display_warning(
                err,
                &format!("expected {} hole cards, got {}", HOLE_CARDS, hole.len()),
            )?;
        }
        cards.extend(hole);
    }
    if let Some(board) = input.board {
        cards.extend(parse_card_list(board)?);
    }
    cards.extend(parse_card_args(input.cards)?);
    Ok(cards)
}
