//! One input per definition file.
//!
//! Every helper reads the file through [`load_config`], so environment overrides
//! prefixed with `FHUB__` apply as well. [`any`] picks the helper from a kind name
//! listed in [`crate::kinds::ENABLED`].

use crate::error::{FormError, FormErrorExt};
use crate::kinds;
use fhub_domain::config::{
    NumericalInputConfig, OptionInputSource, TextualInputConfig, ToggleInputConfig,
};
use fhub_inputs::{
    Input, MultiOptionInput, NumericalInput, OptionInputConfig, SingleOptionInput, TextualInput,
    ToggleInput,
};
use fhub_kernel::config::load_config;
use std::path::Path;
use tracing::{debug, warn};

/// Loads a [`TextualInput`], compiling its pattern and hint instructions.
///
/// # Errors
/// * [`FormError::Config`] if the file is missing or malformed.
/// * [`FormError::Input`] if a regular expression does not compile.
pub fn textual(path: impl AsRef<Path>) -> Result<TextualInput, FormError> {
    let config: TextualInputConfig =
        load_config(Some(path.as_ref())).context("Loading a textual input")?;
    let input = TextualInput::new(config).context("Building a textual input")?;
    debug!(id = %input.id(), path = %path.as_ref().display(), "Textual input loaded");
    Ok(input)
}

/// Loads a [`NumericalInput`].
///
/// # Errors
/// Returns [`FormError::Config`] if the file is missing or malformed.
pub fn numerical(path: impl AsRef<Path>) -> Result<NumericalInput, FormError> {
    let config: NumericalInputConfig =
        load_config(Some(path.as_ref())).context("Loading a numerical input")?;
    Ok(NumericalInput::new(config))
}

/// Loads a [`ToggleInput`].
///
/// # Errors
/// Returns [`FormError::Config`] if the file is missing or malformed.
pub fn toggle(path: impl AsRef<Path>) -> Result<ToggleInput, FormError> {
    let config: ToggleInputConfig =
        load_config(Some(path.as_ref())).context("Loading a toggle input")?;
    Ok(ToggleInput::new(config))
}

/// Loads a [`SingleOptionInput`].
///
/// # Errors
/// * [`FormError::Config`] if the file is missing or malformed.
/// * [`FormError::Input`] if an option is invalid, or the options are missing or not unique.
pub fn single_option(path: impl AsRef<Path>) -> Result<SingleOptionInput, FormError> {
    let config = option_config(path.as_ref())?;
    SingleOptionInput::new(config).context("Building a single option input")
}

/// Loads a [`MultiOptionInput`].
///
/// # Errors
/// * [`FormError::Config`] if the file is missing or malformed.
/// * [`FormError::Input`] if an option is invalid, or the options are missing or not unique.
pub fn multi_option(path: impl AsRef<Path>) -> Result<MultiOptionInput, FormError> {
    let config = option_config(path.as_ref())?;
    MultiOptionInput::new(config).context("Building a multi option input")
}

/// An input loaded by kind name.
#[derive(Debug, Clone)]
pub enum AnyInput {
    Textual(TextualInput),
    Numerical(NumericalInput),
    Toggle(ToggleInput),
    SingleOption(SingleOptionInput),
    MultiOption(MultiOptionInput),
}

impl AnyInput {
    /// The kind name this input was loaded under.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Textual(_) => "textual",
            Self::Numerical(_) => "numerical",
            Self::Toggle(_) => "toggle",
            Self::SingleOption(_) => "single-option",
            Self::MultiOption(_) => "multi-option",
        }
    }

    #[must_use]
    pub fn as_input(&self) -> &dyn Input {
        match self {
            Self::Textual(input) => input,
            Self::Numerical(input) => input,
            Self::Toggle(input) => input,
            Self::SingleOption(input) => input,
            Self::MultiOption(input) => input,
        }
    }

    pub fn as_input_mut(&mut self) -> &mut dyn Input {
        match self {
            Self::Textual(input) => input,
            Self::Numerical(input) => input,
            Self::Toggle(input) => input,
            Self::SingleOption(input) => input,
            Self::MultiOption(input) => input,
        }
    }
}

/// Loads an input whose type is chosen by `kind`.
///
/// # Errors
/// * [`FormError::UnknownKind`] if `kind` is not enabled.
/// * Any error of the matching typed loader.
pub fn any(kind: &str, path: impl AsRef<Path>) -> Result<AnyInput, FormError> {
    if !kinds::is_enabled(kind) {
        warn!(kind, "Rejected unknown input kind");
        return Err(FormError::UnknownKind {
            message: format!("'{kind}' is not one of {}", kinds::ENABLED.join(", ")).into(),
            context: None,
        });
    }

    let path = path.as_ref();
    match kind {
        "textual" => textual(path).map(AnyInput::Textual),
        "numerical" => numerical(path).map(AnyInput::Numerical),
        "toggle" => toggle(path).map(AnyInput::Toggle),
        "single-option" => single_option(path).map(AnyInput::SingleOption),
        _ => multi_option(path).map(AnyInput::MultiOption),
    }
}

fn option_config(path: &Path) -> Result<OptionInputConfig, FormError> {
    let source: OptionInputSource =
        load_config(Some(path)).context("Loading an option based input")?;
    OptionInputConfig::try_from(source).context("Building the options")
}
