//! Operator and punctuation scanning.

use crate::error::LexErrorKind;
use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans a configuration-defined operator, if one starts here.
    ///
    /// The longest matching operator text wins and is consumed whole.
    pub(crate) fn scan_extension_operator(&mut self) -> Option<Token> {
        if !self.tables.has_extension_operators() {
            return None;
        }

        let (kind, len) = self
            .tables
            .extension_operator(self.cursor.remaining())
            .map(|op| (op.kind.clone(), op.char_len()))?;

        self.cursor.advance_n(len);
        Some(self.token_from_lexeme(kind))
    }

    /// Scans a built-in operator, if the current character starts one.
    ///
    /// Handles `=` `+` `-` `*` `/` `%` `!` `<` `>` and their compound forms
    /// ending in `=`, plus `&&` and `||`. A lone `&` or `|` is reported with
    /// a suggestion and comes back as an `ILLEGAL` token.
    pub(crate) fn scan_operator(&mut self) -> Option<Token> {
        let op = self.tables.operator(self.cursor.current_char())?.clone();

        if self.cursor.peek_char() == op.follow {
            let text = op.compound_text();
            self.cursor.advance();
            self.cursor.advance();
            return Some(self.make_token(op.compound, text));
        }

        match op.single {
            Some(kind) => {
                self.cursor.advance();
                Some(self.make_token(kind, op.lead.to_string()))
            },
            None => {
                let suggestion = op.compound_text();
                let error = self
                    .error_here(
                        LexErrorKind::Suggestion,
                        format!(
                            "unexpected character '{}' - did you mean '{}'?",
                            op.lead, suggestion
                        ),
                    )
                    .with_suggestion(suggestion);
                self.push_error(error);
                self.cursor.advance();
                Some(self.make_token(TokenKind::Illegal, op.lead.to_string()))
            },
        }
    }

    /// Scans a punctuation character, or reports the current character as
    /// unexpected and consumes it as an `ILLEGAL` token.
    pub(crate) fn scan_punctuation(&mut self) -> Token {
        let c = self.cursor.current_char();

        if let Some(kind) = self.tables.punctuation(c).cloned() {
            self.cursor.advance();
            return self.make_token(kind, c.to_string());
        }

        self.report(
            LexErrorKind::UnexpectedCharacter,
            format!("unexpected character '{}' (Unicode: U+{:04X})", c, c as u32),
        );
        self.cursor.advance();
        self.make_token(TokenKind::Illegal, c.to_string())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Extensions, LexErrorKind, Scanner, TokenKind};
    use pretty_assertions::assert_eq;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Scanner::new(source).map(|t| t.kind).collect()
    }

    #[test]
    fn test_single_operators() {
        assert_eq!(
            kinds("= + - * / % ! < >"),
            vec![
                TokenKind::Assign,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Multiply,
                TokenKind::Divide,
                TokenKind::Modulus,
                TokenKind::Bang,
                TokenKind::LessThan,
                TokenKind::GreaterThan,
            ]
        );
    }

    #[test]
    fn test_compound_operators() {
        assert_eq!(
            kinds("== += -= *= /= %= != <= >= && ||"),
            vec![
                TokenKind::Eql,
                TokenKind::PlusAssign,
                TokenKind::MinusAssign,
                TokenKind::MultiplyAssign,
                TokenKind::DivideAssign,
                TokenKind::ModulusAssign,
                TokenKind::NotEql,
                TokenKind::LessThanEql,
                TokenKind::GreaterThanEql,
                TokenKind::And,
                TokenKind::Or,
            ]
        );
    }

    #[test]
    fn test_compound_text() {
        let tokens: Vec<String> = Scanner::new("a<=b&&c").map(|t| t.text).collect();
        assert_eq!(tokens, vec!["a", "<=", "b", "&&", "c"]);
    }

    #[test]
    fn test_no_backtracking_across_operators() {
        assert_eq!(
            kinds("===!"),
            vec![TokenKind::Eql, TokenKind::Assign, TokenKind::Bang]
        );
    }

    #[test]
    fn test_lone_ampersand() {
        let mut scanner = Scanner::new("a & b");
        scanner.next_token();
        let token = scanner.next_token();
        assert_eq!(token.kind, TokenKind::Illegal);
        assert_eq!(token.text, "&");

        let error = &scanner.errors()[0];
        assert_eq!(error.kind, LexErrorKind::Suggestion);
        assert_eq!(error.message, "unexpected character '&' - did you mean '&&'?");
        assert_eq!(error.suggestion(), Some("&&"));
        assert_eq!((error.line, error.column), (1, 3));

        assert_eq!(scanner.next_token().text, "b");
    }

    #[test]
    fn test_lone_pipe() {
        let (tokens, errors) = Scanner::new("|").tokenize_all();
        assert_eq!(tokens[0].kind, TokenKind::Illegal);
        assert!(errors[0].message.contains("did you mean '||'"));
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            kinds("( ) { } [ ] , ; : ."),
            vec![
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::LBracket,
                TokenKind::RBracket,
                TokenKind::Comma,
                TokenKind::Semicolon,
                TokenKind::Colon,
                TokenKind::Dot,
            ]
        );
    }

    #[test]
    fn test_unexpected_character() {
        let (tokens, errors) = Scanner::new("a # b").tokenize_all();
        assert_eq!(tokens[1].kind, TokenKind::Illegal);
        assert_eq!(tokens[1].text, "#");
        assert_eq!(errors[0].kind, LexErrorKind::UnexpectedCharacter);
        assert_eq!(errors[0].message, "unexpected character '#' (Unicode: U+0023)");
        assert_eq!(tokens[2].text, "b");
    }

    #[test]
    fn test_unexpected_non_ascii_character() {
        let (tokens, errors) = Scanner::new("€").tokenize_all();
        assert_eq!(tokens[0].text, "€");
        assert_eq!(errors[0].message, "unexpected character '€' (Unicode: U+20AC)");
    }

    #[test]
    fn test_extension_operator_longest_match() {
        let ext = Extensions::new()
            .with_operator("->", "ARROW")
            .with_operator("**", "POW")
            .with_operator("**=", "POW_ASSIGN");
        let tokens: Vec<(TokenKind, String)> = Scanner::with_extensions("a->b **= c ** d - e", &ext)
            .map(|t| (t.kind, t.text))
            .collect();

        assert_eq!(tokens[1], (TokenKind::Extended("ARROW".into()), "->".to_string()));
        assert_eq!(tokens[3], (TokenKind::Extended("POW_ASSIGN".into()), "**=".to_string()));
        assert_eq!(tokens[5], (TokenKind::Extended("POW".into()), "**".to_string()));
        assert_eq!(tokens[7], (TokenKind::Minus, "-".to_string()));
    }

    #[test]
    fn test_extension_operator_positions() {
        let ext = Extensions::new().with_operator("=>", "FAT_ARROW");
        let tokens: Vec<_> = Scanner::with_extensions("x => y", &ext).collect();
        assert_eq!((tokens[1].column, tokens[2].column), (3, 6));
    }

    #[test]
    fn test_quote_led_extension_operator_keeps_literals() {
        let ext = Extensions::new().with_operator("\"a", "QA").with_operator("'", "TICK");
        let (tokens, errors) = Scanner::with_extensions("\"abc\" 'z'", &ext).tokenize_all();
        assert!(errors.is_empty());
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].text, "abc");
        assert_eq!(tokens[1].kind, TokenKind::Char);
    }

    #[test]
    fn test_extension_punctuation() {
        let ext = Extensions::new().with_punctuation("@", "AT").with_punctuation("#", "HASH");
        let (tokens, errors) = Scanner::with_extensions("@x #", &ext).tokenize_all();
        assert!(errors.is_empty());
        assert_eq!(tokens[0].kind, TokenKind::Extended("AT".into()));
        assert_eq!(tokens[2].kind, TokenKind::Extended("HASH".into()));
    }
}
