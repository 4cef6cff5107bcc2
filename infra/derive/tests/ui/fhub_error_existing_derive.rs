use fhub_derive::fhub_error;
use std::borrow::Cow;

#[fhub_error]
#[derive(Debug)]
pub enum DemoError {
    #[error("Rejected{}: {message}", format_context(.context))]
    Rejected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {}
