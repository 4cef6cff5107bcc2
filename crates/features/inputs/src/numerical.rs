//! Numeric input: coercion to a canonical numeric string, range and step rules,
//! and the configurable hint table.
//!
//! ## Storage
//!
//! The stored value is always either empty or a numeric string matching the
//! configured [`NumberKind`]. Bounds never clamp the stored value; an
//! out-of-range number is kept as-is and only affects validity.
//!
//! ## Steps
//!
//! Alignment counts from `min_val` (or zero without one): with a minimum of 5
//! and a step of 2, the aligned values are 5, 7, 9 and so on, so 10 is reported
//! as misaligned while 3 is not.
//!
//! ## Hints
//!
//! Rules are reported in a fixed order (required, range, increment). When both
//! bounds are active and both are violated a single "between" hint is produced,
//! otherwise each violated bound gets its own hint. An empty value on a required
//! input violates every numeric rule.

use crate::hint::Phrasebook;
use crate::input::{Input, InputBase};
use fhub_domain::config::{NumberKind, NumericalInputConfig};
use fhub_domain::hints::{HintConfig, HintRules};
use fhub_domain::value::RawValue;
use tracing::{debug, trace};

/// Remainders closer than this to a whole number of steps count as aligned.
const STEP_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone)]
pub struct NumericalInput {
    base: InputBase,
    value: String,
    kind: NumberKind,
    min_val: Option<f64>,
    max_val: Option<f64>,
    increment_step: Option<f64>,
    hint_config: HintConfig,
}

impl NumericalInput {
    #[must_use]
    pub fn new(config: NumericalInputConfig) -> Self {
        let NumericalInputConfig { base, kind, min_val, max_val, increment_step, hint_config } =
            config;
        let base = InputBase::new(base);
        debug!(id = %base.id(), name = base.name(), ?kind, "Numerical input created");

        Self { base, value: String::new(), kind, min_val, max_val, increment_step, hint_config }
    }

    /// The canonical numeric string, or `""` when there is no usable number.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Coerces `value` and stores the result.
    pub fn set_value(&mut self, value: impl Into<RawValue>) {
        let raw = value.into();
        self.value = coerce(&raw, self.kind);
        trace!(id = %self.base.id(), shape = raw.shape(), stored = %self.value, "Value coerced");
    }

    /// The stored value as a number; `None` when empty.
    #[must_use]
    pub fn value_as_number(&self) -> Option<f64> {
        self.value.parse().ok()
    }

    #[must_use]
    pub const fn kind(&self) -> NumberKind {
        self.kind
    }

    #[must_use]
    pub const fn min_val(&self) -> Option<f64> {
        self.min_val
    }

    #[must_use]
    pub const fn max_val(&self) -> Option<f64> {
        self.max_val
    }

    #[must_use]
    pub const fn increment_step(&self) -> Option<f64> {
        self.increment_step
    }

    #[must_use]
    pub const fn hint_config(&self) -> &HintConfig {
        &self.hint_config
    }

    /// Live access to translations and toggles; changes apply on the next `update_hint`.
    pub const fn hint_config_mut(&mut self) -> &mut HintConfig {
        &mut self.hint_config
    }

    /// A zero or non-finite step constrains nothing; a negative one acts as its magnitude.
    fn step(&self) -> Option<f64> {
        self.increment_step.filter(|step| step.is_finite() && *step != 0.0).map(f64::abs)
    }

    fn below_min(&self, value: Option<f64>) -> bool {
        self.min_val.is_some_and(|min| value.is_none_or(|v| v < min))
    }

    fn above_max(&self, value: Option<f64>) -> bool {
        self.max_val.is_some_and(|max| value.is_none_or(|v| v > max))
    }

    fn misaligned(&self, value: Option<f64>) -> bool {
        self.step().is_some_and(|step| {
            value.is_none_or(|v| {
                let steps = (v - self.min_val.unwrap_or(0.0)) / step;
                (steps - steps.round()).abs() > STEP_TOLERANCE
            })
        })
    }
}

impl Input for NumericalInput {
    fn base(&self) -> &InputBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut InputBase {
        &mut self.base
    }

    fn is_valid(&self) -> bool {
        let Some(value) = self.value_as_number() else {
            return !self.base.required();
        };
        let value = Some(value);
        !self.below_min(value) && !self.above_max(value) && !self.misaligned(value)
    }

    fn collect_hints(&self) -> Vec<String> {
        let value = self.value_as_number();
        if value.is_none() && !self.base.required() {
            return Vec::new();
        }

        let config = &self.hint_config;
        let phrases = Phrasebook::new(config, self.base.label());
        let mut hints = Vec::new();

        if value.is_none() && config.enabled(HintRules::REQUIRED) {
            hints.push(phrases.required());
        }

        let min = self.min_val.filter(|_| config.enabled(HintRules::MIN));
        let max = self.max_val.filter(|_| config.enabled(HintRules::MAX));
        let below = self.below_min(value);
        let above = self.above_max(value);
        match (min, max) {
            (Some(min), Some(max)) if below && above => hints.push(phrases.between(min, max)),
            (min, max) => {
                if let Some(min) = min
                    && below
                {
                    hints.push(phrases.more_than(min));
                }
                if let Some(max) = max
                    && above
                {
                    hints.push(phrases.less_than(max));
                }
            },
        }

        if let Some(step) = self.step()
            && config.enabled(HintRules::INCREMENT)
            && self.misaligned(value)
        {
            hints.push(phrases.in_increments_of(step));
        }

        hints
    }
}

/// Reduces a raw assignment to the canonical numeric string for `kind`.
///
/// Numbers are formatted, text keeps only its leading numeric token, every other
/// shape becomes `""`. Integer mode truncates any fractional part.
#[must_use]
pub fn coerce(raw: &RawValue, kind: NumberKind) -> String {
    match raw {
        RawValue::Number(number) if number.is_finite() => {
            let number = match kind {
                NumberKind::Integers => number.trunc(),
                NumberKind::Floats => *number,
            };
            crate::hint::format_number(number)
        },
        RawValue::Text(text) => leading_number(text).map_or_else(String::new, |token| match kind {
            NumberKind::Integers => integer_part(token).to_owned(),
            NumberKind::Floats => token.to_owned(),
        }),
        _ => String::new(),
    }
}

/// `-?digits(.digits)?` at the start of `text`, after leading whitespace.
fn leading_number(text: &str) -> Option<&str> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count() + start
    };

    let sign = usize::from(bytes.first() == Some(&b'-'));
    let mut end = digits_from(sign);
    if end == sign {
        return None;
    }
    if bytes.get(end) == Some(&b'.') {
        let fraction_end = digits_from(end + 1);
        if fraction_end > end + 1 {
            end = fraction_end;
        }
    }
    Some(&text[..end])
}

/// Drops the fraction; a negative zero loses its sign.
fn integer_part(token: &str) -> &str {
    let integer = token.split_once('.').map_or(token, |(integer, _)| integer);
    match integer.strip_prefix('-') {
        Some(digits) if digits.bytes().all(|b| b == b'0') => digits,
        _ => integer,
    }
}
