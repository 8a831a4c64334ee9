//! Edge case tests for scanr-lex

#[cfg(test)]
mod tests {
    use crate::{Extensions, LexError, LexErrorKind, Scanner, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token> {
        let mut scanner = Scanner::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = scanner.next_token();
            if token.is_eof() { break; }
            tokens.push(token);
        }
        tokens
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).into_iter().map(|t| t.kind).collect()
    }

    fn errors(source: &str) -> Vec<LexError> {
        Scanner::new(source).tokenize_all().1
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
        assert!(errors("").is_empty());
    }

    #[test]
    fn test_edge_whitespace_only() {
        assert!(lex_all(" \t\r\n \n").is_empty());
    }

    #[test]
    fn test_edge_comments_only() {
        assert!(lex_all("// one\n/* two\n three */ // four").is_empty());
        assert!(errors("// one\n/* two */").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x");
        assert_eq!(t[0].kind, TokenKind::Ident);
        assert_eq!(t[0].text, "x");
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("let {} = 1;", name));
        assert_eq!(t[1].text, name);
        assert_eq!(t[2].column, 10006);
    }

    #[test]
    fn test_edge_keyword_prefixes() {
        assert_eq!(kinds("iffy letter fnord"), vec![TokenKind::Ident; 3]);
    }

    #[test]
    fn test_edge_case_sensitivity() {
        assert_eq!(kinds("Fn fn"), vec![TokenKind::Ident, TokenKind::Fn]);
    }

    #[test]
    fn test_edge_bools_and_null() {
        assert_eq!(
            kinds("true false null"),
            vec![TokenKind::True, TokenKind::False, TokenKind::Null]
        );
    }

    #[test]
    fn test_edge_consecutive_plus() {
        assert_eq!(kinds("+++"), vec![TokenKind::Plus; 3]);
        assert_eq!(kinds("++="), vec![TokenKind::Plus, TokenKind::PlusAssign]);
    }

    #[test]
    fn test_edge_divide_is_not_comment() {
        assert_eq!(
            kinds("a / b /= c"),
            vec![
                TokenKind::Ident,
                TokenKind::Divide,
                TokenKind::Ident,
                TokenKind::DivideAssign,
                TokenKind::Ident,
            ]
        );
    }

    #[test]
    fn test_edge_comment_glued_to_tokens() {
        let texts: Vec<String> = lex_all("a//c\nb/*x*/c").into_iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_edge_slash_star_slash_is_open() {
        let errs = errors("/*/");
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].kind, LexErrorKind::Unterminated);
        assert_eq!(errs[0].message, "unterminated block comment");
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let t = lex_all("a\r\nb");
        assert_eq!((t[1].line, t[1].column), (2, 1));
    }

    #[test]
    fn test_edge_tab_is_one_column() {
        let t = lex_all("\tx");
        assert_eq!(t[0].column, 2);
    }

    #[test]
    fn test_edge_columns_count_code_points() {
        let t = lex_all("λλ x");
        assert_eq!(t[0].text, "λλ");
        assert_eq!(t[1].column, 4);
    }

    #[test]
    fn test_edge_double_dot() {
        let texts: Vec<String> = lex_all("1..2").into_iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["1", ".", ".", "2"]);
    }

    #[test]
    fn test_edge_leading_dot() {
        assert_eq!(kinds(".5"), vec![TokenKind::Dot, TokenKind::Number]);
    }

    #[test]
    fn test_edge_huge_number_is_text() {
        let t = lex_all("184467440737095516150000");
        assert_eq!(t[0].kind, TokenKind::Number);
        assert_eq!(t[0].text, "184467440737095516150000");
    }

    #[test]
    fn test_edge_non_ascii_digit_continues_identifier() {
        let t = lex_all("x٣");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TokenKind::Ident);
    }

    #[test]
    fn test_edge_escaped_quote_in_string() {
        let t = lex_all(r#""a\"b" c"#);
        assert_eq!(t[0].text, "a\"b");
        assert_eq!(t[1].text, "c");
    }

    #[test]
    fn test_edge_nested_delimiters() {
        let t = kinds("((()))");
        assert_eq!(t.iter().filter(|k| **k == TokenKind::LParen).count(), 3);
    }

    #[test]
    fn test_edge_eof_token_after_everything() {
        let mut scanner = Scanner::new("x // trailing");
        scanner.next_token();
        let eof = scanner.next_token();
        assert_eq!(eof.kind, TokenKind::Eof);
        assert_eq!(eof.text, "");
        assert_eq!(eof.column, 14);
    }

    #[test]
    fn test_edge_extensions_do_not_leak() {
        let ext = Extensions::new().with_keyword("match", "MATCH");
        let extended: Vec<TokenKind> = Scanner::with_extensions("match", &ext).map(|t| t.kind).collect();
        assert_eq!(extended, vec![TokenKind::Extended("MATCH".into())]);
        assert_eq!(kinds("match"), vec![TokenKind::Ident]);
    }

    // ==================== ERROR CASES ====================

    #[test]
    fn test_err_invalid_hex_at_eof() {
        let mut scanner = Scanner::new("0x");
        let t = scanner.next_token();
        assert_eq!(t.kind, TokenKind::Illegal);
        assert!(scanner.has_errors());
    }

    #[test]
    fn test_err_unterminated_block_comment_position() {
        let errs = errors("a /* never\nclosed");
        assert_eq!((errs[0].line, errs[0].column), (2, 7));
    }

    #[test]
    fn test_err_invalid_chars() {
        let (tokens, errs) = Scanner::new("@#$").tokenize_all();
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Illegal));
        assert_eq!(errs.len(), 3);
        assert!(errs.iter().all(|e| e.kind == LexErrorKind::UnexpectedCharacter));
    }

    #[test]
    fn test_err_mixed_valid_invalid() {
        let (tokens, errs) = Scanner::new("let x = # 1;").tokenize_all();
        assert_eq!(tokens.len(), 6);
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].column, 9);
    }

    #[test]
    fn test_err_position_after_comment() {
        let errs = errors("// note\n  ~");
        assert_eq!((errs[0].line, errs[0].column), (2, 3));
    }

    #[test]
    fn test_err_many_errors_keep_order() {
        let errs = errors("0b '' \"x\\q\" ~");
        let messages: Vec<&str> = errs.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "invalid binary number: must contain at least one binary digit after 0b",
                "empty character literal",
                "unknown escape sequence '\\q'",
                "unexpected character '~' (Unicode: U+007E)",
            ]
        );
    }
}
