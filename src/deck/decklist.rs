use serde::{Deserialize, Serialize};

/// Cards in a legal deck, commander(s) included.
pub const TARGET_DECK_SIZE: u32 = 100;
/// The primary commander is never written in the pasted list.
pub const PRIMARY_COMMANDER_SLOTS: u32 = 1;
/// A partner takes one extra slot on top of the pasted lines.
pub const PARTNER_SLOTS: u32 = 1;

/// One entry of a pasted decklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckLine {
    pub number: u32,
    pub cardname: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedDeck {
    pub lines: Vec<DeckLine>,
    pub total_count: u32,
}

impl ParsedDeck {
    pub fn is_legal(&self) -> bool {
        is_legal_deck(self.total_count)
    }

    /// Signed distance from a legal deck: negative when cards are missing.
    pub fn missing_or_extra(&self) -> i64 {
        i64::from(self.total_count) + i64::from(PRIMARY_COMMANDER_SLOTS)
            - i64::from(TARGET_DECK_SIZE)
    }
}

/// Turns pasted decklist text into card entries and a running card count.
///
/// Never fails: a line without a usable leading quantity counts as one copy
/// of the whole line. Blank lines are skipped. When `has_partner` is set the
/// count starts at [`PARTNER_SLOTS`].
pub fn parse_deck_list(raw: &str, has_partner: bool) -> ParsedDeck {
    let mut total_count = if has_partner { PARTNER_SLOTS } else { 0 };
    let mut lines = Vec::new();

    for line in raw.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let deck_line = parse_line(line);
        total_count = total_count.saturating_add(deck_line.number);
        lines.push(deck_line);
    }

    ParsedDeck { lines, total_count }
}

/// A deck is legal when its count plus the primary commander hits [`TARGET_DECK_SIZE`].
pub fn is_legal_deck(total_count: u32) -> bool {
    total_count.checked_add(PRIMARY_COMMANDER_SLOTS) == Some(TARGET_DECK_SIZE)
}

fn parse_line(line: &str) -> DeckLine {
    match split_quantity(line) {
        Some((number, cardname)) => DeckLine {
            number,
            cardname: cardname.to_string(),
        },
        None => DeckLine {
            number: 1,
            cardname: line.to_string(),
        },
    }
}

/// Splits `"<digits>[suffix] <name>"` into its quantity and name.
/// Expects a trimmed line.
fn split_quantity(line: &str) -> Option<(u32, &str)> {
    let token_end = line.find(char::is_whitespace)?;
    let (token, rest) = line.split_at(token_end);

    let digits_end = token
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(token.len());
    if digits_end == 0 {
        return None;
    }

    // Only overflow can fail here; saturate so the count stays illegal.
    let number = token[..digits_end].parse::<u32>().unwrap_or(u32::MAX);
    if number == 0 {
        return None;
    }
    let cardname = rest.trim_start();
    if cardname.is_empty() {
        return None;
    }

    Some((number, cardname))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(number: u32, cardname: &str) -> DeckLine {
        DeckLine {
            number,
            cardname: cardname.to_string(),
        }
    }

    #[test]
    fn test_leading_quantity() {
        let deck = parse_deck_list("1 Sol Ring", false);
        assert_eq!(deck.lines, vec![line(1, "Sol Ring")]);
        assert_eq!(deck.total_count, 1);
    }

    #[test]
    fn test_missing_quantity_defaults_to_one() {
        let deck = parse_deck_list("Sol Ring", false);
        assert_eq!(deck.lines, vec![line(1, "Sol Ring")]);
        assert_eq!(deck.total_count, 1);
    }

    #[test]
    fn test_partial_numeric_prefix() {
        let deck = parse_deck_list("2x Island\n12abc Forest", false);
        assert_eq!(deck.lines, vec![line(2, "Island"), line(12, "Forest")]);
        assert_eq!(deck.total_count, 14);
    }

    #[test]
    fn test_repeated_lines_are_summed() {
        let deck = parse_deck_list("3 Forest\n3 Forest", false);
        assert_eq!(deck.lines.len(), 2);
        assert_eq!(deck.total_count, 6);
    }

    #[test]
    fn test_only_leading_token_is_stripped() {
        // The quantity text shows up again inside the card name.
        let deck = parse_deck_list("1 Brothers Yamazaki 1 ", false);
        assert_eq!(deck.lines, vec![line(1, "Brothers Yamazaki 1")]);

        let deck = parse_deck_list("2 Ow 2 Ow", false);
        assert_eq!(deck.lines, vec![line(2, "Ow 2 Ow")]);
    }

    #[test]
    fn test_zero_quantity_keeps_whole_line() {
        let deck = parse_deck_list("0 Black Lotus", false);
        assert_eq!(deck.lines, vec![line(1, "0 Black Lotus")]);
        assert_eq!(deck.total_count, 1);
    }

    #[test]
    fn test_bare_number_is_a_card_name() {
        let deck = parse_deck_list("1996", false);
        assert_eq!(deck.lines, vec![line(1, "1996")]);
    }

    #[test]
    fn test_non_digit_token() {
        let deck = parse_deck_list("x2 Island", false);
        assert_eq!(deck.lines, vec![line(1, "x2 Island")]);
    }

    #[test]
    fn test_overflowing_quantity_saturates() {
        let deck = parse_deck_list("99999999999 Relentless Rats", false);
        assert_eq!(deck.lines, vec![line(u32::MAX, "Relentless Rats")]);

        let mut raw = vec!["1 Card"; 98].join("\n");
        raw.push_str("\n99999999999 Relentless Rats");
        let deck = parse_deck_list(&raw, false);
        assert_eq!(deck.lines.len(), 99);
        assert_eq!(deck.total_count, u32::MAX);
        assert!(!deck.is_legal());
    }

    #[test]
    fn test_blank_lines_and_whitespace() {
        let deck = parse_deck_list("\r\n  1   Sol Ring  \r\n\n\t\n Mana Crypt\n", false);
        assert_eq!(deck.lines, vec![line(1, "Sol Ring"), line(1, "Mana Crypt")]);
        assert_eq!(deck.total_count, 2);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_deck_list("", false), ParsedDeck::default());
        assert_eq!(parse_deck_list("", true).total_count, 1);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let raw = "1 Sol Ring\nCounterspell\n30 Island";
        assert_eq!(parse_deck_list(raw, true), parse_deck_list(raw, true));
    }

    #[test]
    fn test_total_count_saturates() {
        let raw = format!("{} Island\n{} Island", u32::MAX, u32::MAX);
        assert_eq!(parse_deck_list(&raw, false).total_count, u32::MAX);
        assert!(!parse_deck_list(&raw, false).is_legal());
    }

    #[test]
    fn test_is_legal_deck() {
        assert!(is_legal_deck(99));
        assert!(!is_legal_deck(98));
        assert!(!is_legal_deck(100));
        assert!(!is_legal_deck(u32::MAX));
    }

    #[test]
    fn test_partner_takes_a_slot() {
        let with_partner = vec!["1 Card"; 98].join("\n");
        let deck = parse_deck_list(&with_partner, true);
        assert_eq!(deck.total_count, 99);
        assert!(deck.is_legal());

        let solo = vec!["Card"; 99].join("\n");
        let deck = parse_deck_list(&solo, false);
        assert_eq!(deck.lines.len(), 99);
        assert!(deck.is_legal());

        assert!(!parse_deck_list(&solo, true).is_legal());
    }

    #[test]
    fn test_missing_or_extra() {
        let deck = parse_deck_list("60 Island\n30 Forest", false);
        assert_eq!(deck.missing_or_extra(), -9);

        let deck = parse_deck_list("60 Island\n40 Forest", false);
        assert_eq!(deck.missing_or_extra(), 1);
    }

    #[test]
    fn test_deck_line_wire_shape() {
        let json = serde_json::to_value(line(4, "Plains")).unwrap();
        assert_eq!(json, serde_json::json!({"number": 4, "cardname": "Plains"}));
    }
}
