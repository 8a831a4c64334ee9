//! Character classification helpers for the scanner.

/// Checks if a character can start an identifier.
///
/// Unicode letters and underscore qualify.
///
/// # Example
///
/// ```
/// use scanr_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(is_ident_start('α'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('+'));
/// ```
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Checks if a character can continue an identifier.
///
/// Adds Unicode digits to the start set.
///
/// # Example
///
/// ```
/// use scanr_lex::unicode::is_ident_continue;
///
/// assert!(is_ident_continue('1'));
/// assert!(is_ident_continue('٣'));
/// assert!(!is_ident_continue('-'));
/// ```
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Returns the value of an ASCII hex digit.
///
/// # Example
///
/// ```
/// use scanr_lex::unicode::hex_digit_value;
///
/// assert_eq!(hex_digit_value('7'), Some(7));
/// assert_eq!(hex_digit_value('b'), Some(11));
/// assert_eq!(hex_digit_value('F'), Some(15));
/// assert_eq!(hex_digit_value('g'), None);
/// ```
pub fn hex_digit_value(c: char) -> Option<u32> {
    c.to_digit(16)
}

/// Checks if a character is a binary digit.
pub fn is_binary_digit(c: char) -> bool {
    c == '0' || c == '1'
}

/// Checks if a character is an octal digit.
pub fn is_octal_digit(c: char) -> bool {
    ('0'..='7').contains(&c)
}
