//! Deck command handler: lists every card label, one suit per line.

use crate::error::CliError;
use crate::formatters::format_card;
use handscope_engine::cards::{all_suits, full_deck};
use std::io::Write;

pub fn handle_deck_command(unicode: bool, out: &mut dyn Write) -> Result<(), CliError> {
    let deck = full_deck();
    for (suit, row) in all_suits().iter().zip(deck.chunks(13)) {
        debug_assert!(row.iter().all(|c| c.suit == *suit));
        let labels: Vec<String> = row.iter().map(|c| format_card(c, unicode)).collect();
        writeln!(out, "{}", labels.join(" "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_four_rows_of_thirteen() {
        let mut out = Vec::new();
        handle_deck_command(false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.split(' ').count() == 13));
        assert_eq!(rows[0], "2c 3c 4c 5c 6c 7c 8c 9c 10c Jc Qc Kc Ac");
    }
}
