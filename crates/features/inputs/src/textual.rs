use crate::error::{InputError, InputErrorExt};
use crate::input::{Input, InputBase};
use fhub_domain::config::{HintInstruction, TextualInputConfig};
use fhub_domain::value::RawValue;
use regex::Regex;
use tracing::debug;

/// A compiled `{regexp, message}` pair.
#[derive(Debug, Clone)]
struct Instruction {
    regexp: Regex,
    message: String,
}

/// A free-text input.
///
/// The value is stored exactly as assigned. Only text is ever valid: numbers,
/// booleans, lists, maps and sets are kept but fail validation regardless of
/// `required`.
#[derive(Debug, Clone)]
pub struct TextualInput {
    base: InputBase,
    value: RawValue,
    pattern: Option<Regex>,
    instructions: Vec<Instruction>,
}

impl TextualInput {
    /// Builds the input, compiling its pattern and hint instructions.
    ///
    /// # Errors
    /// Returns [`InputError::InvalidPattern`] if the pattern or any instruction
    /// is not a valid regular expression.
    pub fn new(config: TextualInputConfig) -> Result<Self, InputError> {
        let TextualInputConfig { base, pattern, hints_instructions } = config;

        let pattern =
            pattern.as_deref().map(Regex::new).transpose().context("Compiling the input pattern")?;
        let instructions = hints_instructions
            .into_iter()
            .map(|HintInstruction { regexp, message }| -> Result<Instruction, InputError> {
                Ok(Instruction { regexp: Regex::new(&regexp)?, message })
            })
            .collect::<Result<Vec<_>, InputError>>()
            .context("Compiling the hint instructions")?;

        let base = InputBase::new(base);
        debug!(id = %base.id(), name = base.name(), "Textual input created");

        Ok(Self { base, value: RawValue::Text(String::new()), pattern, instructions })
    }

    /// The value exactly as it was assigned.
    #[must_use]
    pub const fn value(&self) -> &RawValue {
        &self.value
    }

    /// Stores `value` without any coercion.
    pub fn set_value(&mut self, value: impl Into<RawValue>) {
        self.value = value.into();
    }

    #[must_use]
    pub const fn pattern(&self) -> Option<&Regex> {
        self.pattern.as_ref()
    }

    pub fn set_pattern(&mut self, pattern: Option<Regex>) {
        self.pattern = pattern;
    }
}

impl Input for TextualInput {
    fn base(&self) -> &InputBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut InputBase {
        &mut self.base
    }

    fn is_valid(&self) -> bool {
        let Some(text) = self.value.as_text() else {
            return false;
        };
        if self.base.required() && text.is_empty() {
            return false;
        }
        self.pattern.as_ref().is_none_or(|pattern| pattern.is_match(text))
    }

    fn collect_hints(&self) -> Vec<String> {
        let text = self.value.as_text();
        self.instructions
            .iter()
            .filter(|instruction| !text.is_some_and(|text| instruction.regexp.is_match(text)))
            .map(|instruction| instruction.message.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fhub_domain::config::InputConfig;

    #[test]
    fn invalid_pattern_fails_construction() {
        let config = TextualInputConfig {
            base: InputConfig::new("Code", "code"),
            pattern: Some("[0-9".to_owned()),
            ..TextualInputConfig::default()
        };
        let err = TextualInput::new(config).unwrap_err();
        assert!(matches!(err, InputError::InvalidPattern { .. }));
        assert!(err.to_string().contains("Compiling the input pattern"));
    }

    #[test]
    fn invalid_instruction_fails_construction() {
        let config = TextualInputConfig {
            base: InputConfig::new("Code", "code"),
            hints_instructions: vec![HintInstruction::new("(", "never shown")],
            ..TextualInputConfig::default()
        };
        let err = TextualInput::new(config).unwrap_err();
        assert_eq!(err.kind(), "InvalidPattern");
    }
}
