use std::borrow::Cow;

pub(crate) const OPTION_VALUE_REQUIRED: &str =
    "A string value with a minimum length of 1 character must be provided for each option";
pub(crate) const OPTIONS_REQUIRED: &str =
    "Options are required for initialisation of option based input";
pub(crate) const OPTIONS_UNIQUE: &str =
    "All options of option based inputs must have unique values";

/// Construction-time failures. Runtime value problems never surface here;
/// they show up through validity and hints instead.
#[fhub_derive::fhub_error]
pub enum InputError {
    /// An option was configured without a usable value.
    #[error("Invalid input option{}: {message}", format_context(.context))]
    InvalidOption { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// An option-based input was given nothing to choose from.
    #[error("Missing options{}: {message}", format_context(.context))]
    MissingOptions { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Two reachable options share a value.
    #[error("Duplicate option value{}: {message}", format_context(.context))]
    DuplicateOptionValue { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A pattern or hint instruction is not a valid regular expression.
    #[error("Invalid regular expression{}: {source}", format_context(.context))]
    InvalidPattern { source: regex::Error, context: Option<Cow<'static, str>> },
}
