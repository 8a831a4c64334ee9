//! Keyword, operator and punctuation lookup tables.
//!
//! The default tables are built once per process and shared through an
//! `Arc`. A scanner constructed with [`Extensions`] gets a private copy
//! with the extensions applied; nothing global is ever mutated.

use std::sync::{Arc, OnceLock};

use indexmap::IndexMap;
use scanr_util::FxHashMap;
use tracing::{debug, warn};

use crate::token::TokenKind;
use crate::unicode::{is_ident_continue, is_ident_start};

/// An operator with a one-character form and a two-character compound form.
///
/// `lead` alone yields `single`; `lead` followed by `follow` yields
/// `compound`. A `single` of `None` means the lone character is not an
/// operator and the scanner suggests the compound form instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperatorDef {
    /// First character
    pub lead: char,
    /// Kind of the lone character, if it is an operator on its own
    pub single: Option<TokenKind>,
    /// Second character of the compound form
    pub follow: char,
    /// Kind of the compound form
    pub compound: TokenKind,
}

impl OperatorDef {
    fn new(lead: char, single: Option<TokenKind>, follow: char, compound: TokenKind) -> Self {
        Self {
            lead,
            single,
            follow,
            compound,
        }
    }

    /// Text of the compound form.
    pub fn compound_text(&self) -> String {
        let mut text = String::with_capacity(2);
        text.push(self.lead);
        text.push(self.follow);
        text
    }
}

/// A configuration-defined operator, matched by its whole text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtensionOperator {
    /// Operator text (non-empty)
    pub text: String,
    /// Kind produced on a match
    pub kind: TokenKind,
    char_len: usize,
}

impl ExtensionOperator {
    /// Number of code points in the operator text.
    pub fn char_len(&self) -> usize {
        self.char_len
    }
}

/// Extra keywords, operators and punctuation merged into the default tables.
///
/// Each map goes from literal text to a kind name; names are resolved with
/// [`TokenKind::from_name`], so built-in names reuse built-in kinds.
/// Declaration order is preserved and decides ties between operators of
/// equal length.
///
/// # Example
///
/// ```
/// use scanr_lex::{Extensions, Scanner, TokenKind};
///
/// let ext = Extensions::new()
///     .with_keyword("match", "MATCH")
///     .with_operator("->", "ARROW")
///     .with_punctuation("@", "AT");
///
/// let (tokens, errors) = Scanner::with_extensions("match @x -> y", &ext).tokenize_all();
/// assert!(errors.is_empty());
/// assert_eq!(tokens[0].kind, TokenKind::Extended("MATCH".into()));
/// assert_eq!(tokens[3].text, "->");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Extensions {
    /// Keyword text to kind name
    pub keywords: IndexMap<String, String>,
    /// Operator text to kind name
    pub operators: IndexMap<String, String>,
    /// Single-character punctuation to kind name
    pub punctuation: IndexMap<String, String>,
}

impl Extensions {
    /// Creates an empty extension set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a keyword.
    pub fn with_keyword(mut self, text: impl Into<String>, kind: impl Into<String>) -> Self {
        self.keywords.insert(text.into(), kind.into());
        self
    }

    /// Adds an operator.
    pub fn with_operator(mut self, text: impl Into<String>, kind: impl Into<String>) -> Self {
        self.operators.insert(text.into(), kind.into());
        self
    }

    /// Adds a punctuation character.
    pub fn with_punctuation(mut self, text: impl Into<String>, kind: impl Into<String>) -> Self {
        self.punctuation.insert(text.into(), kind.into());
        self
    }

    /// Returns true if no entries are present.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty() && self.operators.is_empty() && self.punctuation.is_empty()
    }

    /// Total number of entries across all three maps.
    pub fn len(&self) -> usize {
        self.keywords.len() + self.operators.len() + self.punctuation.len()
    }
}

/// Lookup tables consulted by the scanner.
#[derive(Clone, Debug)]
pub struct LexTables {
    keywords: FxHashMap<String, TokenKind>,
    operators: Vec<OperatorDef>,
    extension_operators: Vec<ExtensionOperator>,
    punctuation: FxHashMap<char, TokenKind>,
}

static DEFAULT_TABLES: OnceLock<Arc<LexTables>> = OnceLock::new();

impl LexTables {
    /// Returns the shared default tables.
    pub fn defaults() -> Arc<LexTables> {
        DEFAULT_TABLES
            .get_or_init(|| Arc::new(Self::build_defaults()))
            .clone()
    }

    fn build_defaults() -> LexTables {
        let keywords = [
            ("let", TokenKind::Let),
            ("const", TokenKind::Const),
            ("fn", TokenKind::Fn),
            ("if", TokenKind::If),
            ("else", TokenKind::Else),
            ("while", TokenKind::While),
            ("for", TokenKind::For),
            ("return", TokenKind::Return),
            ("break", TokenKind::Break),
            ("continue", TokenKind::Continue),
            ("true", TokenKind::True),
            ("false", TokenKind::False),
            ("null", TokenKind::Null),
            ("int", TokenKind::TypeInt),
            ("float", TokenKind::TypeFloat),
            ("string", TokenKind::TypeString),
            ("bool", TokenKind::TypeBool),
            ("char", TokenKind::TypeChar),
        ]
        .into_iter()
        .map(|(text, kind)| (text.to_string(), kind))
        .collect();

        let operators = vec![
            OperatorDef::new('=', Some(TokenKind::Assign), '=', TokenKind::Eql),
            OperatorDef::new('+', Some(TokenKind::Plus), '=', TokenKind::PlusAssign),
            OperatorDef::new('-', Some(TokenKind::Minus), '=', TokenKind::MinusAssign),
            OperatorDef::new('*', Some(TokenKind::Multiply), '=', TokenKind::MultiplyAssign),
            OperatorDef::new('/', Some(TokenKind::Divide), '=', TokenKind::DivideAssign),
            OperatorDef::new('%', Some(TokenKind::Modulus), '=', TokenKind::ModulusAssign),
            OperatorDef::new('!', Some(TokenKind::Bang), '=', TokenKind::NotEql),
            OperatorDef::new('<', Some(TokenKind::LessThan), '=', TokenKind::LessThanEql),
            OperatorDef::new('>', Some(TokenKind::GreaterThan), '=', TokenKind::GreaterThanEql),
            OperatorDef::new('&', None, '&', TokenKind::And),
            OperatorDef::new('|', None, '|', TokenKind::Or),
        ];

        let punctuation = [
            ('(', TokenKind::LParen),
            (')', TokenKind::RParen),
            ('{', TokenKind::LBrace),
            ('}', TokenKind::RBrace),
            ('[', TokenKind::LBracket),
            (']', TokenKind::RBracket),
            (',', TokenKind::Comma),
            (';', TokenKind::Semicolon),
            (':', TokenKind::Colon),
            ('.', TokenKind::Dot),
        ]
        .into_iter()
        .collect();

        LexTables {
            keywords,
            operators,
            extension_operators: Vec::new(),
            punctuation,
        }
    }

    /// Builds a private copy of the defaults with `extensions` applied.
    ///
    /// Later entries override earlier ones for keywords and punctuation.
    /// Rejected entries are skipped with a warning.
    pub fn with_extensions(extensions: &Extensions) -> LexTables {
        let mut tables = (*Self::defaults()).clone();
        tables.apply(extensions);
        tables
    }

    fn apply(&mut self, extensions: &Extensions) {
        for (text, kind) in &extensions.keywords {
            let mut chars = text.chars();
            let well_formed = chars.next().is_some_and(is_ident_start) && chars.all(is_ident_continue);
            if !well_formed {
                warn!(keyword = %text, "ignoring extension keyword that is not a valid identifier");
                continue;
            }
            self.keywords.insert(text.clone(), TokenKind::from_name(kind));
        }

        for (text, kind) in &extensions.operators {
            if text.is_empty() {
                warn!(kind = %kind, "ignoring extension operator with empty text");
                continue;
            }
            if text.starts_with(['"', '\'', '`']) {
                warn!(operator = %text, "ignoring extension operator that starts with a quote");
                continue;
            }
            let kind = TokenKind::from_name(kind);
            match self.extension_operators.iter_mut().find(|op| op.text == *text) {
                Some(existing) => existing.kind = kind,
                None => self.extension_operators.push(ExtensionOperator {
                    text: text.clone(),
                    kind,
                    char_len: text.chars().count(),
                }),
            }
        }
        // Stable sort: equal lengths keep declaration order.
        self.extension_operators
            .sort_by(|a, b| b.char_len.cmp(&a.char_len));

        for (text, kind) in &extensions.punctuation {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => {
                    self.punctuation.insert(c, TokenKind::from_name(kind));
                },
                _ => warn!(
                    punctuation = %text,
                    "ignoring extension punctuation that is not exactly one character"
                ),
            }
        }

        debug!(
            keywords = self.keywords.len(),
            extension_operators = self.extension_operators.len(),
            punctuation = self.punctuation.len(),
            "merged extension tables"
        );
    }

    /// Looks up a keyword.
    pub fn keyword(&self, text: &str) -> Option<&TokenKind> {
        self.keywords.get(text)
    }

    /// Looks up the built-in operator starting with `c`.
    pub fn operator(&self, c: char) -> Option<&OperatorDef> {
        self.operators.iter().find(|op| op.lead == c)
    }

    /// Looks up a punctuation character.
    pub fn punctuation(&self, c: char) -> Option<&TokenKind> {
        self.punctuation.get(&c)
    }

    /// Returns the longest extension operator that prefixes `input`.
    pub fn extension_operator(&self, input: &str) -> Option<&ExtensionOperator> {
        self.extension_operators
            .iter()
            .find(|op| input.starts_with(op.text.as_str()))
    }

    /// Returns true if any extension operators are installed.
    pub fn has_extension_operators(&self) -> bool {
        !self.extension_operators.is_empty()
    }

    /// Number of keywords, including extensions.
    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }
}
