#[cfg(test)]
mod tests {
    use stencil_core::{Conditional, Scanner, Token};

    fn scan(input: &str) -> Vec<Token<'_>> {
        Scanner::new(input).collect()
    }

    #[test]
    fn plain_text() {
        assert!(!Scanner::needs_scan("SELECT 1 FROM t WHERE a < 2"));
        assert_eq!(scan("SELECT 1"), [Token::Text("SELECT 1")]);
        assert!(scan("").is_empty());
    }

    #[test]
    fn identifiers() {
        assert_eq!(
            scan("SELECT `a b`, [c.d] FROM x"),
            [
                Token::Text("SELECT "),
                Token::Identifier("a b"),
                Token::Text(", "),
                Token::Identifier("c.d"),
                Token::Text(" FROM x"),
            ]
        );
        // The first content char can be the closing one
        assert_eq!(scan("[]]"), [Token::Identifier("]")]);
        assert_eq!(scan("a[]"), [Token::Text("a"), Token::Text("["), Token::Text("]")]);
        assert_eq!(scan("`x"), [Token::Text("`"), Token::Text("x")]);
    }

    #[test]
    fn quoted_literals() {
        assert_eq!(
            scan("a = 'it''s' OR b = \"x\""),
            [
                Token::Text("a = "),
                Token::Quoted {
                    quote: '\'',
                    body: "it''s",
                },
                Token::Text(" OR b = "),
                Token::Quoted {
                    quote: '"',
                    body: "x",
                },
            ]
        );
        // Other quotes and directives are inert inside a literal
        assert_eq!(
            scan("'a\"[b]%end'"),
            [Token::Quoted {
                quote: '\'',
                body: "a\"[b]%end",
            }]
        );
        assert_eq!(
            scan("''"),
            [Token::Quoted {
                quote: '\'',
                body: "",
            }]
        );
        assert_eq!(
            scan("x = 'oops"),
            [Token::Text("x = "), Token::StrayQuote('\''), Token::Text("oops")]
        );
    }

    #[test]
    fn directives() {
        assert_eq!(
            scan("a%if"),
            [Token::Text("a"), Token::Modifier("if")]
        );
        assert_eq!(
            scan("a%else b%end"),
            [
                Token::Text("a"),
                Token::Conditional(Conditional::Else),
                Token::Text(" b"),
                Token::Conditional(Conditional::End),
            ]
        );
        assert_eq!(scan("100%"), [Token::Text("100"), Token::Text("%")]);
        assert_eq!(scan("%sql"), [Token::Modifier("sql")]);
        assert_eq!(scan("%i2"), [Token::Text("%"), Token::Text("i2")]);
    }

    #[test]
    fn multibyte_text() {
        assert_eq!(
            scan("SELECT 'città' AS [località]"),
            [
                Token::Text("SELECT "),
                Token::Quoted {
                    quote: '\'',
                    body: "città",
                },
                Token::Text(" AS "),
                Token::Identifier("località"),
            ]
        );
    }
}
