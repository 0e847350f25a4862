use super::boundaries::*;
use super::buffer::*;
use super::classify::*;
use crate::buffer::TextBuffer;

fn buf(lines: &[&str]) -> TextBuffer {
    TextBuffer::from_lines(lines.iter().map(|s| s.to_string()).collect())
}

#[test]
fn test_classify_char() {
    assert_eq!(classify_char(' '), CharClass::Whitespace);
    assert_eq!(classify_char('\t'), CharClass::Whitespace);
    assert_eq!(classify_char('\u{00A0}'), CharClass::Whitespace); // Unicode space

    assert_eq!(classify_char('a'), CharClass::Alphanumeric);
    assert_eq!(classify_char('Z'), CharClass::Alphanumeric);
    assert_eq!(classify_char('5'), CharClass::Alphanumeric);
    assert_eq!(classify_char('_'), CharClass::Alphanumeric);

    assert_eq!(classify_char('-'), CharClass::Symbol);
    assert_eq!(classify_char('('), CharClass::Symbol);
    assert_eq!(classify_char('.'), CharClass::Symbol);
}

#[test]
fn test_token_class_collapses_symbols_for_big_words() {
    assert_eq!(token_class('-', false), CharClass::Symbol);
    assert_eq!(token_class('-', true), CharClass::Alphanumeric);
    assert_eq!(token_class(' ', true), CharClass::Whitespace);
}

#[test]
fn test_is_word_char() {
    assert!(is_word_char('a'));
    assert!(is_word_char('_'));
    assert!(!is_word_char('-'));
    assert!(!is_word_char(' '));
}

// Per-line scans

#[test]
fn test_next_token_start_basic() {
    let text = "hello world";
    assert_eq!(next_token_start(text, 0, false, false), Some(6)); // "hello" -> "world"
    assert_eq!(next_token_start(text, 6, false, false), None); // no further token
}

#[test]
fn test_next_token_start_symbols() {
    let text = "foo->bar";
    assert_eq!(next_token_start(text, 0, false, false), Some(3)); // "foo" -> "->"
    assert_eq!(next_token_start(text, 3, false, false), Some(5)); // "->" -> "bar"
    // WORD semantics: the whole run is one token
    assert_eq!(next_token_start(text, 0, true, false), None);
}

#[test]
fn test_next_token_start_from_whitespace() {
    let text = "  hello";
    assert_eq!(next_token_start(text, 0, false, false), Some(2));
}

#[test]
fn test_next_token_start_rolling() {
    let text = "hello";
    // Rolling accepts the starting character itself
    assert_eq!(next_token_start(text, 0, false, true), Some(0));
    assert_eq!(next_token_start("  x", 0, false, true), Some(2));
}

#[test]
fn test_next_token_start_past_line_end() {
    assert_eq!(next_token_start("abc", 3, false, false), None);
    assert_eq!(next_token_start("", 0, false, false), None);
}

#[test]
fn test_token_end_word_vs_big_word() {
    let text = "hello-world test";
    assert_eq!(token_end(text, 0, false, false), Some(4)); // '-' breaks word tokens
    assert_eq!(token_end(text, 0, true, false), Some(10)); // WORD ignores punctuation
}

#[test]
fn test_token_end_at_token_last_char() {
    let text = "hello world";
    // Already at the end of "hello": jump to the end of "world"
    assert_eq!(token_end(text, 4, false, false), Some(10));
    assert_eq!(token_end(text, 10, false, false), None);
}

#[test]
fn test_token_end_rolling() {
    assert_eq!(token_end("x", 0, false, true), Some(0));
    assert_eq!(token_end("  word", 0, false, true), Some(5));
}

#[test]
fn test_prev_token_start_basic() {
    let text = "hello world";
    assert_eq!(prev_token_start(text, 11, false, false), Some(6));
    assert_eq!(prev_token_start(text, 6, false, false), Some(0));
    assert_eq!(prev_token_start(text, 0, false, false), None);
}

#[test]
fn test_prev_token_start_symbols() {
    let text = "foo->bar";
    assert_eq!(prev_token_start(text, 8, false, false), Some(5)); // end -> "bar"
    assert_eq!(prev_token_start(text, 5, false, false), Some(3)); // "bar" -> "->"
    assert_eq!(prev_token_start(text, 3, false, false), Some(0)); // "->" -> "foo"
    assert_eq!(prev_token_start(text, 8, true, false), Some(0)); // one WORD
}

#[test]
fn test_prev_token_start_leading_whitespace() {
    // Nothing but whitespace before the token: not found on this line
    assert_eq!(prev_token_start("   word", 3, false, false), None);
}

#[test]
fn test_prev_token_start_rolling() {
    let text = "last word";
    // Continuation entry at the last column lands on the token start
    assert_eq!(prev_token_start(text, 8, false, true), Some(5));
}

#[test]
fn test_prev_token_end_basic() {
    let text = "foo bar";
    assert_eq!(prev_token_end(text, 4, false, false), Some(2)); // 'a' of bar -> 'o' of foo
    assert_eq!(prev_token_end(text, 6, false, false), Some(2)); // mid "bar" -> 'o'
    assert_eq!(prev_token_end(text, 3, false, false), Some(2)); // from whitespace
}

#[test]
fn test_prev_token_end_adjacent_classes() {
    let text = "foo-bar";
    assert_eq!(prev_token_end(text, 5, false, false), Some(3)); // "bar" -> '-'
    assert_eq!(prev_token_end(text, 3, false, false), Some(2)); // '-' -> 'o'
}

#[test]
fn test_prev_token_end_no_previous_token() {
    assert_eq!(prev_token_end("hello", 4, false, false), None);
    assert_eq!(prev_token_end("  ab", 3, false, false), None);
}

#[test]
fn test_prev_token_end_rolling() {
    // Continuation entry: the line's last character is itself a token end
    assert_eq!(prev_token_end("word", 3, false, true), Some(3));
    assert_eq!(prev_token_end("word  ", 5, false, true), Some(3));
}

#[test]
fn test_token_range() {
    assert_eq!(token_range("hello world", 8), Some((6, 11)));
    assert_eq!(token_range("hello_world", 5), Some((0, 11)));
    assert_eq!(token_range("a-b", 1), None); // symbol is not a word token
    assert_eq!(token_range("a b", 1), None); // neither is whitespace
    assert_eq!(token_range("abc", 5), None);
}

// Buffer-level continuation

#[test]
fn test_next_word_start_continues_to_next_line() {
    let buffer = buf(&["hello world", "foo bar"]);
    // From the 'd' of "world"
    assert_eq!(next_word_start(&buffer, 0, 10, false), Some((1, 0)));
}

#[test]
fn test_next_word_start_skips_blank_when_token_follows() {
    let buffer = buf(&["last word", "", "first word"]);
    assert_eq!(next_word_start(&buffer, 0, 9, false), Some((2, 0)));
}

#[test]
fn test_next_word_start_lands_on_trailing_blank() {
    let buffer = buf(&["word", ""]);
    // No further token: the blank line is the final stop
    assert_eq!(next_word_start(&buffer, 0, 0, false), Some((1, 0)));
}

#[test]
fn test_next_word_start_skips_whitespace_only_lines() {
    let buffer = buf(&["word", "   ", "next"]);
    assert_eq!(next_word_start(&buffer, 0, 0, false), Some((2, 0)));
}

#[test]
fn test_next_word_start_none_at_buffer_end() {
    let buffer = buf(&["word"]);
    assert_eq!(next_word_start(&buffer, 0, 0, false), None);
    assert_eq!(next_word_start(&buffer, 5, 0, false), None); // absent line
}

#[test]
fn test_prev_word_start_continues_to_previous_line() {
    let buffer = buf(&["last word", "", "first word"]);
    // From the start of "first": blank skipped, lands on "word" of line 0
    assert_eq!(prev_word_start(&buffer, 2, 0, false), Some((0, 5)));
}

#[test]
fn test_prev_word_start_lands_on_leading_blank() {
    let buffer = buf(&["", "word"]);
    assert_eq!(prev_word_start(&buffer, 1, 0, false), Some((0, 0)));
}

#[test]
fn test_word_end_continues_to_next_line() {
    let buffer = buf(&["foo", "", "bar baz"]);
    // From the last char of "foo": blank skipped, end of "bar"
    assert_eq!(word_end(&buffer, 0, 2, false), Some((2, 2)));
}

#[test]
fn test_word_end_within_line() {
    let buffer = buf(&["hello-world test"]);
    assert_eq!(word_end(&buffer, 0, 0, false), Some((0, 4)));
    assert_eq!(word_end(&buffer, 0, 0, true), Some((0, 10)));
}

#[test]
fn test_prev_word_end_continues_to_previous_line() {
    let buffer = buf(&["one two", "", "three"]);
    // From inside "three": blank skipped, last char of "two"
    assert_eq!(prev_word_end(&buffer, 2, 2, false), Some((0, 6)));
}

#[test]
fn test_prev_word_end_none_at_buffer_start() {
    let buffer = buf(&["word"]);
    assert_eq!(prev_word_end(&buffer, 0, 2, false), None);
}

#[test]
fn test_word_under_cursor() {
    let buffer = buf(&["let count = 0;"]);
    assert_eq!(word_under_cursor(&buffer, 0, 5), Some("count".to_string()));
    assert_eq!(word_under_cursor(&buffer, 0, 10), None); // '='
    assert_eq!(word_under_cursor(&buffer, 0, 3), None); // whitespace
    assert_eq!(word_under_cursor(&buffer, 9, 0), None); // absent line
}
