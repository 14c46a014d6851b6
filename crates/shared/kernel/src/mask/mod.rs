//! Input masks in the style of the jQuery Mask Plugin.
//!
//! A pattern is a string of slot tokens and literals:
//!
//! | Token | Accepts |
//! |---|---|
//! | `0` | one digit (required) |
//! | `9` | one digit (optional) |
//! | `A` | one ASCII letter or digit |
//! | `S` | one ASCII letter |
//!
//! Any other character is a literal inserted by the mask itself.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

#[sigi_derive::sigi_error]
pub enum MaskError {
    #[error("Invalid mask pattern{}: {message}", format_context(.context))]
    Pattern { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Digit,
    OptionalDigit,
    Alphanumeric,
    Letter,
    Literal(char),
}

impl Slot {
    const fn from_token(c: char) -> Self {
        match c {
            '0' => Self::Digit,
            '9' => Self::OptionalDigit,
            'A' => Self::Alphanumeric,
            'S' => Self::Letter,
            other => Self::Literal(other),
        }
    }

    pub const fn accepts(self, c: char) -> bool {
        match self {
            Self::Digit | Self::OptionalDigit => c.is_ascii_digit(),
            Self::Alphanumeric => c.is_ascii_alphanumeric(),
            Self::Letter => c.is_ascii_alphabetic(),
            Self::Literal(_) => false,
        }
    }

    pub const fn is_literal(self) -> bool {
        matches!(self, Self::Literal(_))
    }
}

/// A parsed mask pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskPattern {
    source: String,
    slots: Vec<Slot>,
}

impl MaskPattern {
    /// Parses a pattern such as `"000.000.000-00"`.
    ///
    /// # Errors
    /// Returns [`MaskError::Pattern`] for an empty pattern or one without any input slot.
    pub fn parse(pattern: &str) -> Result<Self, MaskError> {
        if pattern.is_empty() {
            return Err(MaskError::Pattern { message: "pattern is empty".into(), context: None });
        }

        let slots: Vec<Slot> = pattern.chars().map(Slot::from_token).collect();
        if slots.iter().all(|slot| slot.is_literal()) {
            return Err(MaskError::Pattern {
                message: format!("'{pattern}' has no input slots").into(),
                context: None,
            });
        }

        Ok(Self { source: pattern.to_owned(), slots })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Maximum number of user characters the mask holds.
    pub fn capacity(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_literal()).count()
    }

    /// Formats raw keystrokes (or an already formatted value).
    ///
    /// Literals are written only when more input follows them, characters a slot
    /// rejects are dropped, and input past the last slot is truncated.
    pub fn apply(&self, raw: &str) -> String {
        self.place(raw).into_iter().map(|(c, _)| c).collect()
    }

    /// The user characters of `value`, without literals.
    pub fn unmask(&self, value: &str) -> String {
        self.place(value).into_iter().filter(|(_, literal)| !literal).map(|(c, _)| c).collect()
    }

    fn place(&self, raw: &str) -> Vec<(char, bool)> {
        let mut input = raw.chars().peekable();
        let mut placed = Vec::with_capacity(self.slots.len());
        let mut pending = Vec::new();

        for slot in &self.slots {
            if let Slot::Literal(literal) = *slot {
                if input.peek() == Some(&literal) {
                    input.next();
                }
                pending.push(literal);
                continue;
            }

            match input.by_ref().find(|c| slot.accepts(*c)) {
                Some(c) => {
                    placed.extend(pending.drain(..).map(|l| (l, true)));
                    placed.push((c, false));
                },
                None if *slot == Slot::OptionalDigit => {},
                None => break,
            }
        }

        placed
    }
}

impl FromStr for MaskPattern {
    type Err = MaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for MaskPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask(pattern: &str) -> MaskPattern {
        MaskPattern::parse(pattern).unwrap()
    }

    #[test]
    fn formats_member_fields() {
        assert_eq!(mask("(00) 00000-0000").apply("11999998888"), "(11) 99999-8888");
        assert_eq!(mask("000.000.000-00").apply("12345678901"), "123.456.789-01");
        assert_eq!(mask("00.000.000-0").apply("123456789"), "12.345.678-9");
        assert_eq!(mask("00000-000").apply("12345678"), "12345-678");
    }

    #[test]
    fn partial_input_has_no_trailing_literal() {
        let phone = mask("(00) 00000-0000");
        assert_eq!(phone.apply(""), "");
        assert_eq!(phone.apply("1"), "(1");
        assert_eq!(phone.apply("11"), "(11");
        assert_eq!(phone.apply("119"), "(11) 9");
        assert_eq!(mask("00000-000").apply("12345"), "12345");
    }

    #[test]
    fn rejects_non_digits_and_truncates() {
        let cep = mask("00000-000");
        assert_eq!(cep.apply("12a34-5x678"), "12345-678");
        assert_eq!(cep.apply("1234567890123"), "12345-678");
        assert_eq!(cep.apply("abc"), "");
    }

    #[test]
    fn reformatting_is_stable() {
        let cpf = mask("000.000.000-00");
        let once = cpf.apply("12345678901");
        assert_eq!(cpf.apply(&once), once);
        assert_eq!(cpf.unmask(&once), "12345678901");
    }

    #[test]
    fn optional_and_letter_slots() {
        let plate = mask("SSS-0A00");
        assert_eq!(plate.apply("abc1d23"), "abc-1d23");
        assert_eq!(plate.apply("12abc"), "abc");

        let ddd = mask("(00) 9999-0000");
        assert_eq!(ddd.apply("11"), "(11");
        assert_eq!(ddd.capacity(), 10);
    }

    #[test]
    fn invalid_patterns() {
        assert!(MaskPattern::parse("").is_err());
        let err = MaskPattern::parse("(-)").expect_err("literals only");
        assert!(err.to_string().contains("no input slots"));
        assert_eq!("00-00".parse::<MaskPattern>().unwrap().to_string(), "00-00");
    }
}
