use sigi_derive::sigi_error;
use std::borrow::Cow;

#[sigi_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err: DemoError = "boom".into();
    assert!(err.to_string().contains("boom"));
}
