use folio_derive::folio_error;
use std::borrow::Cow;

#[folio_error]
pub enum ParseError {
    #[error("Number error{}: {source}", format_context(.context))]
    Number { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Empty input{}", format_context(.context))]
    Empty { context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<u32, ParseError> {
    if raw.is_empty() {
        return Err(ParseError::Empty { context: None }).context("checking input");
    }
    raw.parse::<u32>().context("parsing count")
}

fn main() {
    assert_eq!(parse("42").ok(), Some(42));

    let err = parse("x").unwrap_err();
    assert!(err.to_string().starts_with("Number error (parsing count): "));

    let err = parse("").unwrap_err();
    assert_eq!(err.to_string(), "Empty input (checking input)");

    let from: ParseError = "7a".parse::<u32>().unwrap_err().into();
    assert!(matches!(from, ParseError::Number { context: None, .. }));
}
