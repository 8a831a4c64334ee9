//! Token definitions.
//!
//! A [`Token`] pairs a [`TokenKind`] with the recognized text and the
//! 1-based position of its first character. Kinds have stable upper-case
//! display names (`IDENT`, `PLUS_ASSIGN`, ...) that round-trip through
//! [`TokenKind::from_name`]; names that are not built in become
//! [`TokenKind::Extended`], which is how configuration-defined kinds enter
//! the scanner.

use std::fmt;

/// Classification of a token.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    // Special
    /// A lexeme that could not be scanned
    Illegal,
    /// End of input
    Eof,

    // Literals
    /// Identifier
    Ident,
    /// Numeric literal in any supported base
    Number,
    /// Double-quoted string, escapes decoded
    String,
    /// Backtick raw string
    BacktickString,
    /// Single-quoted character literal
    Char,

    // Keywords
    /// `let`
    Let,
    /// `const`
    Const,
    /// `fn`
    Fn,
    /// `if`
    If,
    /// `else`
    Else,
    /// `while`
    While,
    /// `for`
    For,
    /// `return`
    Return,
    /// `break`
    Break,
    /// `continue`
    Continue,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
    /// `int`
    TypeInt,
    /// `float`
    TypeFloat,
    /// `string`
    TypeString,
    /// `bool`
    TypeBool,
    /// `char`
    TypeChar,

    // Operators
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Modulus,
    /// `!`
    Bang,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `==`
    Eql,
    /// `!=`
    NotEql,
    /// `<`
    LessThan,
    /// `<=`
    LessThanEql,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterThanEql,
    /// `+=`
    PlusAssign,
    /// `-=`
    MinusAssign,
    /// `*=`
    MultiplyAssign,
    /// `/=`
    DivideAssign,
    /// `%=`
    ModulusAssign,

    // Punctuation
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `.`
    Dot,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,

    /// A kind introduced by an extension table, identified by its name
    Extended(std::string::String),
}

impl TokenKind {
    /// Every built-in kind, in declaration order.
    pub const BUILTIN: &'static [TokenKind] = &[
        TokenKind::Illegal,
        TokenKind::Eof,
        TokenKind::Ident,
        TokenKind::Number,
        TokenKind::String,
        TokenKind::BacktickString,
        TokenKind::Char,
        TokenKind::Let,
        TokenKind::Const,
        TokenKind::Fn,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::While,
        TokenKind::For,
        TokenKind::Return,
        TokenKind::Break,
        TokenKind::Continue,
        TokenKind::True,
        TokenKind::False,
        TokenKind::Null,
        TokenKind::TypeInt,
        TokenKind::TypeFloat,
        TokenKind::TypeString,
        TokenKind::TypeBool,
        TokenKind::TypeChar,
        TokenKind::Assign,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Multiply,
        TokenKind::Divide,
        TokenKind::Modulus,
        TokenKind::Bang,
        TokenKind::And,
        TokenKind::Or,
        TokenKind::Eql,
        TokenKind::NotEql,
        TokenKind::LessThan,
        TokenKind::LessThanEql,
        TokenKind::GreaterThan,
        TokenKind::GreaterThanEql,
        TokenKind::PlusAssign,
        TokenKind::MinusAssign,
        TokenKind::MultiplyAssign,
        TokenKind::DivideAssign,
        TokenKind::ModulusAssign,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::Colon,
        TokenKind::Dot,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::LBracket,
        TokenKind::RBracket,
    ];

    /// Returns the stable display name of this kind.
    ///
    /// # Example
    ///
    /// ```
    /// use scanr_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::PlusAssign.name(), "PLUS_ASSIGN");
    /// assert_eq!(TokenKind::Extended("ARROW".into()).name(), "ARROW");
    /// ```
    pub fn name(&self) -> &str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::BacktickString => "BACKTICK_STRING",
            TokenKind::Char => "CHAR",
            TokenKind::Let => "LET",
            TokenKind::Const => "CONST",
            TokenKind::Fn => "FN",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::For => "FOR",
            TokenKind::Return => "RETURN",
            TokenKind::Break => "BREAK",
            TokenKind::Continue => "CONTINUE",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Null => "NULL",
            TokenKind::TypeInt => "TYPE_INT",
            TokenKind::TypeFloat => "TYPE_FLOAT",
            TokenKind::TypeString => "TYPE_STRING",
            TokenKind::TypeBool => "TYPE_BOOL",
            TokenKind::TypeChar => "TYPE_CHAR",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Modulus => "MODULUS",
            TokenKind::Bang => "BANG",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Eql => "EQL",
            TokenKind::NotEql => "NOT_EQL",
            TokenKind::LessThan => "LESS_THAN",
            TokenKind::LessThanEql => "LESS_THAN_EQL",
            TokenKind::GreaterThan => "GREATER_THAN",
            TokenKind::GreaterThanEql => "GREATER_THAN_EQL",
            TokenKind::PlusAssign => "PLUS_ASSIGN",
            TokenKind::MinusAssign => "MINUS_ASSIGN",
            TokenKind::MultiplyAssign => "MULTIPLY_ASSIGN",
            TokenKind::DivideAssign => "DIVIDE_ASSIGN",
            TokenKind::ModulusAssign => "MODULUS_ASSIGN",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Colon => "COLON",
            TokenKind::Dot => "DOT",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::Extended(name) => name,
        }
    }

    /// Resolves a display name to a kind.
    ///
    /// Built-in names map to their built-in kind; anything else becomes
    /// [`TokenKind::Extended`].
    ///
    /// # Example
    ///
    /// ```
    /// use scanr_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::from_name("LET"), TokenKind::Let);
    /// assert_eq!(TokenKind::from_name("POW"), TokenKind::Extended("POW".into()));
    /// ```
    pub fn from_name(name: &str) -> TokenKind {
        Self::BUILTIN
            .iter()
            .find(|kind| kind.name() == name)
            .cloned()
            .unwrap_or_else(|| TokenKind::Extended(name.to_string()))
    }

    /// Returns true for reserved words, including the type keywords.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Let
                | TokenKind::Const
                | TokenKind::Fn
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::While
                | TokenKind::For
                | TokenKind::Return
                | TokenKind::Break
                | TokenKind::Continue
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Null
                | TokenKind::TypeInt
                | TokenKind::TypeFloat
                | TokenKind::TypeString
                | TokenKind::TypeBool
                | TokenKind::TypeChar
        )
    }

    /// Returns true for literal kinds.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Number
                | TokenKind::String
                | TokenKind::BacktickString
                | TokenKind::Char
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A scanned token.
///
/// `text` is the exact lexeme, except for string and character literals
/// where it holds the decoded content without the quotes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// Token classification
    pub kind: TokenKind,
    /// Recognized text
    pub text: String,
    /// Line of the first character (1-based)
    pub line: u32,
    /// Column of the first character (1-based, in code points)
    pub column: u32,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
        }
    }

    /// Returns true for the end-of-input marker.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?}) at {}:{}", self.kind, self.text, self.line, self.column)
    }
}
