use fhub_inputs::InputError;
use fhub_kernel::config::ConfigError;
use std::borrow::Cow;

/// Failures while turning a definition file into a live input.
#[fhub_derive::fhub_error]
pub enum FormError {
    #[error("Form definition error{}: {source}", format_context(.context))]
    Config { source: ConfigError, context: Option<Cow<'static, str>> },

    #[error("Form input error{}: {source}", format_context(.context))]
    Input { source: InputError, context: Option<Cow<'static, str>> },

    /// The requested kind is not in [`crate::kinds::ENABLED`].
    #[error("Unknown input kind{}: {message}", format_context(.context))]
    UnknownKind { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
