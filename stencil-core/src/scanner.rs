use crate::Conditional;

/// Characters that may start something the scanner recognizes.
pub const TRIGGERS: [char; 5] = ['`', '[', '\'', '"', '%'];

/// Event produced while scanning raw SQL text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'s> {
    /// Opaque text, copied unchanged.
    Text(&'s str),
    /// Content of `` `identifier` `` or `[identifier]`.
    Identifier(&'s str),
    /// Content of a `'...'` or `"..."` literal, doubled quotes still in place.
    Quoted { quote: char, body: &'s str },
    /// `%else` or `%end`.
    Conditional(Conditional),
    /// 1 to 3 letters modifier at the very end of the text (`... WHERE id = %i`).
    Modifier(&'s str),
    /// Quote that does not start a valid literal.
    StrayQuote(char),
}

/// Lazy tokenizer over a SQL fragment.
///
/// At each trigger character the matchers are tried in priority order (backtick identifier,
/// bracket identifier, single quoted string, double quoted string, conditional keyword,
/// trailing modifier, lone quote), the first one matching wins. The scanner is cheap to
/// clone, a clone restarts from the current position.
///
/// ```rust
/// use stencil_core::{Scanner, Token};
/// let tokens: Vec<_> = Scanner::new("SELECT [id] FROM t WHERE a = %i").collect();
/// assert_eq!(
///     tokens,
///     [
///         Token::Text("SELECT "),
///         Token::Identifier("id"),
///         Token::Text(" FROM t WHERE a = "),
///         Token::Modifier("i"),
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<'s> {
    rest: &'s str,
}

impl<'s> Scanner<'s> {
    pub fn new(input: &'s str) -> Self {
        Self { rest: input }
    }

    /// Whether the input contains anything the scanner would act on.
    pub fn needs_scan(input: &str) -> bool {
        input.contains(TRIGGERS)
    }

    fn advance(&mut self, len: usize) -> &'s str {
        let (taken, rest) = self.rest.split_at(len);
        self.rest = rest;
        taken
    }

    fn match_trigger(&self) -> Option<(Token<'s>, usize)> {
        let rest = self.rest;
        match rest.as_bytes()[0] {
            b'`' => delimited(rest, '`').map(|(v, len)| (Token::Identifier(v), len)),
            b'[' => delimited(rest, ']').map(|(v, len)| (Token::Identifier(v), len)),
            q @ (b'\'' | b'"') => {
                let quote = q as char;
                Some(match quoted(rest, q) {
                    Some((body, len)) => (Token::Quoted { quote, body }, len),
                    None => (Token::StrayQuote(quote), 1),
                })
            }
            b'%' => {
                let directive = &rest[1..];
                if directive.starts_with("else") {
                    Some((Token::Conditional(Conditional::Else), 5))
                } else if directive.starts_with("end") {
                    Some((Token::Conditional(Conditional::End), 4))
                } else {
                    trailing_modifier(directive).map(|v| (Token::Modifier(v), 1 + v.len()))
                }
            }
            _ => None,
        }
    }
}

impl<'s> Iterator for Scanner<'s> {
    type Item = Token<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        match self.rest.find(TRIGGERS) {
            None => return Some(Token::Text(self.advance(self.rest.len()))),
            Some(0) => {}
            Some(position) => return Some(Token::Text(self.advance(position))),
        }
        Some(match self.match_trigger() {
            Some((token, len)) => {
                self.advance(len);
                token
            }
            // Triggers are ascii, a single byte
            None => Token::Text(self.advance(1)),
        })
    }
}

/// Non empty content up to the first `close` (the first content char may be `close` itself).
fn delimited(input: &str, close: char) -> Option<(&str, usize)> {
    let first = input[1..].chars().next()?;
    let start = 1 + first.len_utf8();
    let end = start + input[start..].find(close)?;
    Some((&input[1..end], end + 1))
}

/// Quoted literal where a doubled quote is an escaped quote.
///
/// When the input ends inside the literal, the first quote of the last doubled pair is taken
/// as the closing one instead.
fn quoted(input: &str, quote: u8) -> Option<(&str, usize)> {
    let bytes = input.as_bytes();
    let mut last_pair = None;
    let mut i = 1;
    while i < bytes.len() {
        if bytes[i] == quote {
            if bytes.get(i + 1) == Some(&quote) {
                last_pair = Some(i);
                i += 2;
                continue;
            }
            return Some((&input[1..i], i + 1));
        }
        i += 1;
    }
    last_pair.map(|i| (&input[1..i], i + 1))
}

/// 1 to 3 ascii letters ending the input, a single final newline may follow.
fn trailing_modifier(input: &str) -> Option<&str> {
    let len = input
        .bytes()
        .take_while(|b| b.is_ascii_alphabetic())
        .count();
    if !(1..=3).contains(&len) {
        return None;
    }
    matches!(&input[len..], "" | "\n").then(|| &input[..len])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lone_quote_after_doubled_pair() {
        let tokens: Vec<_> = Scanner::new("'a''").collect();
        assert_eq!(
            tokens,
            [
                Token::Quoted {
                    quote: '\'',
                    body: "a"
                },
                Token::StrayQuote('\''),
            ]
        );
    }

    #[test]
    fn modifier_must_end_the_input() {
        let tokens: Vec<_> = Scanner::new("%i AND %abcd").collect();
        assert_eq!(
            tokens,
            [
                Token::Text("%"),
                Token::Text("i AND "),
                Token::Text("%"),
                Token::Text("abcd"),
            ]
        );
        let tokens: Vec<_> = Scanner::new("x = %sn\n").collect();
        assert_eq!(
            tokens,
            [Token::Text("x = "), Token::Modifier("sn"), Token::Text("\n")]
        );
    }

    #[test]
    fn conditional_wins_over_modifier() {
        let tokens: Vec<_> = Scanner::new("a %end").collect();
        assert_eq!(
            tokens,
            [Token::Text("a "), Token::Conditional(Conditional::End)]
        );
        let tokens: Vec<_> = Scanner::new("%endx").collect();
        assert_eq!(
            tokens,
            [Token::Conditional(Conditional::End), Token::Text("x")]
        );
    }
}
