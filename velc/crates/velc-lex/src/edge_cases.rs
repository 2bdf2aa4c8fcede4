//! Edge case and property tests for velc-lex.

use proptest::prelude::*;

use crate::{tokenize, TokenKind};
use velc_util::Symbol;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .unwrap()
        .tokens
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_empty_source() {
    let output = tokenize("").unwrap();
    assert_eq!(output.tokens.len(), 1);
    assert!(output.tokens[0].is_eof());
    assert_eq!(output.lines_processed, 1);
}

#[test]
fn test_edge_whitespace_only() {
    let output = tokenize("   \n\t  \n  ").unwrap();
    assert_eq!(output.tokens.len(), 1);
    assert!(output.tokens[0].is_eof());
}

#[test]
fn test_edge_single_char_ident() {
    assert_eq!(kinds("x")[0], TokenKind::Ident(Symbol::intern("x")));
}

#[test]
fn test_edge_long_identifier() {
    let name = "a".repeat(10_000);
    assert_eq!(kinds(&name)[0], TokenKind::Ident(Symbol::intern(&name)));
}

#[test]
fn test_edge_keywords_not_idents() {
    let tokens = kinds("func while return");
    assert!(tokens
        .iter()
        .take(3)
        .all(|k| matches!(k, TokenKind::Keyword(_))));
}

#[test]
fn test_edge_adjacent_separators() {
    let tokens = kinds(";;,,");
    assert_eq!(tokens.len(), 5);
    assert!(matches!(tokens[0], TokenKind::Separator(_)));
}

#[test]
fn test_edge_crlf_is_tolerated() {
    let tokens = kinds("a\r\nb");
    assert_eq!(tokens[0], TokenKind::Ident(Symbol::intern("a")));
    assert_eq!(tokens[1], TokenKind::Ident(Symbol::intern("b")));
}

#[test]
fn test_edge_escape_decoding_is_idempotent() {
    // re-scanning the escaped spelling of a decoded payload yields the
    // same payload again
    let source = "\"a\\n\\t\\\\b\\\"c\\0\"";
    let first = match kinds(source)[0] {
        TokenKind::Str(s) => s,
        other => panic!("expected string, got {:?}", other),
    };
    let respelled = format!("\"{}\"", crate::token::reescape(first.as_str()));
    let second = match kinds(&respelled)[0] {
        TokenKind::Str(s) => s,
        other => panic!("expected string, got {:?}", other),
    };
    assert_eq!(first, second);
}

#[test]
fn test_edge_spans_tile_the_line() {
    // concatenating consecutive spans covers the input modulo whitespace:
    // no gaps that swallow characters, no overlaps
    let source = "func main() -> Int32;";
    let output = tokenize(source).unwrap();
    let mut covered = 0usize;
    for token in output.tokens.iter().filter(|t| !t.is_eof()) {
        let width = (token.span.end.column - token.span.start.column + 1) as usize;
        covered += width;
    }
    let non_ws = source.bytes().filter(|b| *b != b' ').count();
    assert_eq!(covered, non_ws);
}

#[test]
fn test_edge_spans_never_overlap() {
    let source = "x := y + 1; // done\nwhile true { }";
    let output = tokenize(source).unwrap();
    for pair in output.tokens.windows(2) {
        assert!(pair[0].span.start <= pair[0].span.end);
        assert!(pair[0].span.end <= pair[1].span.start);
    }
}

#[test]
fn test_edge_directive_then_separator() {
    let tokens = kinds("#if;");
    assert_eq!(tokens[0], TokenKind::Directive(Symbol::intern("if")));
    assert_eq!(tokens[1], TokenKind::Separator(Symbol::intern(";")));
}

#[test]
fn test_edge_minus_before_ident_is_operator() {
    let tokens = kinds("-x");
    assert_eq!(tokens[0], TokenKind::Operator(Symbol::intern("-")));
    assert_eq!(tokens[1], TokenKind::Ident(Symbol::intern("x")));
}

#[test]
fn test_edge_dot_before_ident_is_punctuator() {
    let tokens = kinds(".x");
    assert_eq!(tokens[0], TokenKind::Punctuator(Symbol::intern(".")));
    assert_eq!(tokens[1], TokenKind::Ident(Symbol::intern("x")));
}

#[test]
fn test_edge_consecutive_strings_do_not_alias() {
    let tokens = kinds("\"one\" \"two\"");
    assert_eq!(tokens[0], TokenKind::Str(Symbol::intern("one")));
    assert_eq!(tokens[1], TokenKind::Str(Symbol::intern("two")));
}

// ==================== PROPERTIES ====================

proptest! {
    #[test]
    fn prop_ident_soup_round_trips(words in prop::collection::vec("[a-z][a-z0-9_]{0,11}", 1..12)) {
        let source = words.join(" ");
        let output = tokenize(&source).unwrap();
        prop_assert_eq!(output.tokens.len(), words.len() + 1);
        for (token, word) in output.tokens.iter().zip(&words) {
            match token.kind {
                TokenKind::Ident(s) => prop_assert_eq!(s.as_str(), word.as_str()),
                TokenKind::Keyword(kw) => prop_assert_eq!(kw.as_str(), word.as_str()),
                TokenKind::Bool(_) | TokenKind::Null | TokenKind::Void => {},
                ref other => prop_assert!(false, "unexpected token {:?}", other),
            }
        }
    }

    #[test]
    fn prop_int_literals_round_trip(values in prop::collection::vec(any::<i32>(), 1..12)) {
        let source = values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" ");
        let output = tokenize(&source).unwrap();
        for (token, value) in output.tokens.iter().zip(&values) {
            prop_assert_eq!(token.kind, TokenKind::Int(*value as i64));
        }
    }

    #[test]
    fn prop_spans_are_monotonic(source in "[a-z0-9 ;,(){}]{0,64}") {
        if let Ok(output) = tokenize(&source) {
            for pair in output.tokens.windows(2) {
                prop_assert!(pair[0].span.start <= pair[0].span.end);
                prop_assert!(pair[0].span.end <= pair[1].span.start);
            }
            prop_assert!(output.tokens.last().unwrap().is_eof());
        }
    }

    #[test]
    fn prop_string_payload_is_decoded_body(body in "[a-zA-Z0-9 ]{0,32}") {
        let source = format!("\"{}\"", body);
        let output = tokenize(&source).unwrap();
        match output.tokens[0].kind {
            TokenKind::Str(s) => prop_assert_eq!(s.as_str(), body.as_str()),
            ref other => prop_assert!(false, "unexpected token {:?}", other),
        }
    }
}
