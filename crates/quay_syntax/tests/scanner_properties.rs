//! Property tests for the scanner.
//!
//! For separator-delimited input with no comments or strings, scanning is a partition: one token
//! per lexical unit, and the token texts plus the separators rebuild the input byte for byte.

use proptest::prelude::*;

use quay_syntax::scanner;

/// A single lexical unit that reconstructs exactly from its token.
fn unit() -> impl Strategy<Value = String> {
    prop_oneof![
        // Identifiers and keywords (keywords are a subset of this shape).
        "[a-z][a-zA-Z0-9_]{0,10}",
        // Integer literals, optionally negative.
        "-?[0-9]{1,7}",
        // Fixed symbols.
        Just("++".to_string()),
        Just("==".to_string()),
        Just("<=".to_string()),
        Just(">=".to_string()),
        Just("!=".to_string()),
        prop::sample::select(vec![
            "(", ")", "[", "]", "{", "}", "*", "@", ":", ",", ";", "|", "+", "-", "/", "=", "<", ">", "!",
        ])
        .prop_map(str::to_string),
    ]
}

proptest! {
    #[test]
    fn scanning_partitions_separator_delimited_input(units in prop::collection::vec(unit(), 0..24)) {
        let source = units.join(" ");
        let tokens = scanner::scan(&source, "prop.qy").unwrap();

        // One token per unit, plus the closing EOF.
        prop_assert_eq!(tokens.len(), units.len() + 1);
        prop_assert!(tokens.last().unwrap().is_eof());

        // Token texts plus the skipped separators reproduce the input.
        let rebuilt: Vec<String> = tokens[..tokens.len() - 1].iter().map(|t| t.text()).collect();
        prop_assert_eq!(rebuilt.join(" "), source);
    }

    #[test]
    fn block_comments_never_reach_the_token_stream(filler in "[a-z0-9 +*=]{0,20}") {
        let source = format!("x /* {filler} */ y");
        let tokens = scanner::scan(&source, "prop.qy").unwrap();
        prop_assert_eq!(tokens.len(), 3);
        prop_assert_eq!(tokens[0].content.as_str(), "x");
        prop_assert_eq!(tokens[1].content.as_str(), "y");
    }
}
