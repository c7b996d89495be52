use potter_derive::potter_error;
use std::borrow::Cow;

#[potter_error]
pub enum LookupError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse {
        #[source]
        source: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<u32, LookupError> {
    raw.parse::<u32>().context("parsing page number")
}

fn main() {
    let err = parse("x").unwrap_err();
    assert!(err.to_string().contains("(parsing page number)"));

    let internal: LookupError = "boom".into();
    assert_eq!(internal.to_string(), "Internal error: boom");

    let wrapped: Result<(), LookupError> = Err(LookupError::from("late"));
    let err = wrapped.context("after the fact").unwrap_err();
    assert_eq!(err.to_string(), "Internal error (after the fact): late");
}
