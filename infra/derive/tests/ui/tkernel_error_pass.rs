use std::borrow::Cow;
use tkernel_derive::tkernel_error;

#[tkernel_error]
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

fn read() -> Result<(), DemoError> {
    let failed: Result<(), std::io::Error> = Err(std::io::Error::other("boom"));
    failed.context("reading demo file")
}

fn main() {
    let err = read().unwrap_err();
    assert_eq!(err.kind(), "Io");
    assert!(err.to_string().contains("(reading demo file)"));

    let internal: DemoError = "broken invariant".into();
    assert_eq!(internal.kind(), "Internal");
}
