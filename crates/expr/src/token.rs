use std::fmt;

use crate::error::{ParseError, ParseErrorKind};

/// A lexical token.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Power,
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "number {value}"),
            Token::Ident(name) => write!(f, "identifier '{name}'"),
            Token::Plus => f.write_str("'+'"),
            Token::Minus => f.write_str("'-'"),
            Token::Star => f.write_str("'*'"),
            Token::Slash => f.write_str("'/'"),
            Token::Power => f.write_str("'**'"),
            Token::LParen => f.write_str("'('"),
            Token::RParen => f.write_str("')'"),
        }
    }
}

/// A token and the byte offset where it starts.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Spanned {
    pub(crate) token: Token,
    pub(crate) offset: usize,
}

/// Splits `source` into tokens, skipping whitespace.
///
/// Identifiers may contain dots (`np.sin`) so module-style prefixes reach
/// the parser as one name.
pub(crate) fn tokenize(source: &str) -> Result<Vec<Spanned>, ParseError> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let start = pos;
        let c = bytes[pos];

        let token = match c {
            b' ' | b'\t' | b'\n' | b'\r' => {
                pos += 1;
                continue;
            }
            b'+' => {
                pos += 1;
                Token::Plus
            }
            b'-' => {
                pos += 1;
                Token::Minus
            }
            b'*' if bytes.get(pos + 1) == Some(&b'*') => {
                pos += 2;
                Token::Power
            }
            b'*' => {
                pos += 1;
                Token::Star
            }
            b'^' => {
                pos += 1;
                Token::Power
            }
            b'/' => {
                pos += 1;
                Token::Slash
            }
            b'(' => {
                pos += 1;
                Token::LParen
            }
            b')' => {
                pos += 1;
                Token::RParen
            }
            b'0'..=b'9' | b'.' => {
                pos = scan_number(bytes, pos);
                let text = &source[start..pos];
                let value = text.parse::<f64>().map_err(|_| {
                    ParseError::new(ParseErrorKind::InvalidNumber(text.to_string()), start)
                })?;
                Token::Number(value)
            }
            c if c.is_ascii_alphabetic() || c == b'_' => {
                pos = scan_ident(bytes, pos);
                Token::Ident(source[start..pos].to_string())
            }
            _ => {
                // Report the full character, not just its first byte.
                let ch = source[start..].chars().next().unwrap_or('\u{fffd}');
                return Err(ParseError::new(ParseErrorKind::UnexpectedChar(ch), start));
            }
        };

        tokens.push(Spanned {
            token,
            offset: start,
        });
    }

    Ok(tokens)
}

/// Returns the end of the number literal starting at `pos`.
///
/// Accepts digits, one decimal point, and an exponent. Anything odd
/// (`1.2.3`, `.`) is left for `f64::from_str` to reject.
fn scan_number(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && (bytes[pos].is_ascii_digit() || bytes[pos] == b'.') {
        pos += 1;
    }

    if pos < bytes.len() && matches!(bytes[pos], b'e' | b'E') {
        let mut exp = pos + 1;
        if exp < bytes.len() && matches!(bytes[exp], b'+' | b'-') {
            exp += 1;
        }
        if exp < bytes.len() && bytes[exp].is_ascii_digit() {
            while exp < bytes.len() && bytes[exp].is_ascii_digit() {
                exp += 1;
            }
            pos = exp;
        }
    }

    pos
}

/// Returns the end of the (possibly dotted) identifier starting at `pos`.
fn scan_ident(bytes: &[u8], mut pos: usize) -> usize {
    let is_ident = |b: u8| b.is_ascii_alphanumeric() || b == b'_';

    while pos < bytes.len() {
        if is_ident(bytes[pos]) {
            pos += 1;
        } else if bytes[pos] == b'.'
            && bytes
                .get(pos + 1)
                .is_some_and(|&b| b.is_ascii_alphabetic() || b == b'_')
        {
            pos += 1;
        } else {
            break;
        }
    }

    pos
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<Token> {
        tokenize(source)
            .expect("should tokenize")
            .into_iter()
            .map(|spanned| spanned.token)
            .collect()
    }

    #[test]
    fn tokenizes_polynomial() {
        assert_eq!(
            tokens("x**2 - 4"),
            vec![
                Token::Ident("x".into()),
                Token::Power,
                Token::Number(2.0),
                Token::Minus,
                Token::Number(4.0),
            ]
        );
    }

    #[test]
    fn caret_is_power() {
        assert_eq!(tokens("x^3")[1], Token::Power);
    }

    #[test]
    fn number_forms() {
        assert_eq!(
            tokens("0.5 .25 5. 1e-6 2E+3"),
            vec![
                Token::Number(0.5),
                Token::Number(0.25),
                Token::Number(5.0),
                Token::Number(1e-6),
                Token::Number(2000.0),
            ]
        );
    }

    #[test]
    fn exponent_without_digits_is_not_consumed() {
        // `2e` is the number 2 followed by the constant e.
        assert_eq!(
            tokens("2e"),
            vec![Token::Number(2.0), Token::Ident("e".into())]
        );
    }

    #[test]
    fn dotted_identifiers_stay_whole() {
        assert_eq!(
            tokens("np.sin(x)"),
            vec![
                Token::Ident("np.sin".into()),
                Token::LParen,
                Token::Ident("x".into()),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn records_offsets() {
        let spanned = tokenize("  x +\t1").expect("should tokenize");
        let offsets: Vec<usize> = spanned.iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![2, 4, 6]);
    }

    #[test]
    fn rejects_unknown_characters() {
        let err = tokenize("x % 2").expect_err("should fail");
        assert_eq!(err.kind, ParseErrorKind::UnexpectedChar('%'));
        assert_eq!(err.offset, 2);

        let err = tokenize("x × 2").expect_err("should fail");
        assert_eq!(err.kind, ParseErrorKind::UnexpectedChar('×'));
    }

    #[test]
    fn rejects_malformed_numbers() {
        let err = tokenize("1.2.3").expect_err("should fail");
        assert_eq!(err.kind, ParseErrorKind::InvalidNumber("1.2.3".into()));

        let err = tokenize("x + .").expect_err("should fail");
        assert_eq!(err.offset, 4);
    }
}
