//! Classification of characters and character fragments.
//!
//! The `is_*` predicates answer "is this whole fragment a literal of kind X?".
//! They are used by the lexer to pick a token kind once it has found the
//! extent of a literal, and are usable on their own.
//! None of them panic; an empty fragment is never a literal.

/// Largest magnitude a plain integer literal may have.
pub const INTEGER_MAX: u64 = i32::MAX as u64;

mod regex {
    use regex::Regex;
    use std::sync::OnceLock;

    pub(super) fn integer() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        MATCH.get_or_init(|| {
            Regex::new(r"\A-?(0|[1-9][0-9]*)\z").expect("could not compile regex for integer")
        })
    }

    pub(super) fn unsigned() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        MATCH.get_or_init(|| {
            Regex::new(r"\A[0-9]+\z").expect("could not compile regex for big integer")
        })
    }

    pub(super) fn float() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        MATCH.get_or_init(|| {
            Regex::new(r"\A[0-9]+\.[0-9]+\z").expect("could not compile regex for float")
        })
    }

    pub(super) fn binary() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        MATCH.get_or_init(|| Regex::new(r"\A0[bB][01]+\z").expect("could not compile regex for binary"))
    }

    pub(super) fn hexadecimal() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        MATCH.get_or_init(|| {
            Regex::new(r"\A0[xX][0-9a-fA-F]+\z").expect("could not compile regex for hexadecimal")
        })
    }

    pub(super) fn octal() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        MATCH.get_or_init(|| Regex::new(r"\A0[oO][0-7]+\z").expect("could not compile regex for octal"))
    }
}

/// Compare a run of decimal digits against `limit` without overflowing.
fn magnitude_exceeds(digits: &str, limit: u64) -> bool {
    let mut value: u64 = 0;
    for d in digits.bytes() {
        value = value * 10 + u64::from(d - b'0');
        if value > limit {
            return true;
        }
    }
    false
}

/// Optional `-`, decimal digits without a leading zero, magnitude within `i32::MAX`.
///
/// The magnitude is checked against the positive maximum, so `-2147483648`
/// is not an integer.
pub fn is_integer(fragment: &str) -> bool {
    if !regex::integer().is_match(fragment) {
        return false;
    }
    let digits = fragment.strip_prefix('-').unwrap_or(fragment);
    !magnitude_exceeds(digits, INTEGER_MAX)
}

/// Unsigned decimal digits whose magnitude is past `i32::MAX`.
/// Leading zeros are allowed and do not add to the magnitude.
pub fn is_big_integer(fragment: &str) -> bool {
    regex::unsigned().is_match(fragment) && magnitude_exceeds(fragment, INTEGER_MAX)
}

/// Digits, one decimal point, digits.
pub fn is_float(fragment: &str) -> bool {
    regex::float().is_match(fragment)
}

/// Big floats have no literal syntax yet.
pub fn is_big_float(_fragment: &str) -> bool {
    false
}

pub fn is_binary(fragment: &str) -> bool {
    regex::binary().is_match(fragment)
}

pub fn is_hexadecimal(fragment: &str) -> bool {
    regex::hexadecimal().is_match(fragment)
}

pub fn is_octal(fragment: &str) -> bool {
    regex::octal().is_match(fragment)
}

/// Delimited by a matching pair of quotes. The contents are not inspected.
pub fn is_string(fragment: &str) -> bool {
    let mut chars = fragment.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) => is_quote(first) && first == last,
        _ => false,
    }
}

pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace() && !is_newline(c)
}

pub fn is_newline(c: char) -> bool {
    c == '\n'
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Characters that may start an identifier.
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Characters that may continue an identifier.
pub fn is_identifier_part(c: char) -> bool {
    is_letter(c) || is_digit(c)
}

pub fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

/// Characters that make up binary message selectors, e.g. `+`, `==`, `=>`.
pub fn is_message_symbol(c: char) -> bool {
    matches!(
        c,
        '!' | '$' | '%' | '&' | '*' | '+' | ',' | '-' | '/' | '<' | '=' | '>' | '?' | '@' | '\\'
            | '^' | '|' | '~'
    )
}

/// Suffixes that may trail an identifier, as in `empty?` or `reverse!`.
pub fn is_identifier_symbol(c: char) -> bool {
    c == '?' || c == '!'
}

/// Brackets of every shape.
pub fn is_syntax_symbol(c: char) -> bool {
    matches!(c, '(' | ')' | '[' | ']' | '{' | '}')
}

/// The character after `0` that introduces an alternate-base literal,
/// and the digits that base allows.
pub fn alternate_base(prefix: char) -> Option<fn(char) -> bool> {
    match prefix {
        'b' | 'B' => Some(is_binary_digit),
        'x' | 'X' => Some(is_hex_digit),
        'o' | 'O' => Some(is_octal_digit),
        _ => None,
    }
}

fn is_binary_digit(c: char) -> bool {
    c == '0' || c == '1'
}

fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

fn is_octal_digit(c: char) -> bool {
    ('0'..='7').contains(&c)
}
