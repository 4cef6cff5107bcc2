//! Typed form inputs that hold a value, judge its validity and explain failures.
//!
//! Five input types share one [`Input`] contract: [`TextualInput`], [`NumericalInput`],
//! [`ToggleInput`], [`SingleOptionInput`] and [`MultiOptionInput`]. Each carries an
//! immutable [`InputId`], a label, a name, a `required` flag, an optional mask and the
//! hints computed by the last [`Input::update_hint`] call.
//!
//! ## Validity and hints
//!
//! [`Input::is_valid`] is always computed from the current value. Hints are explicit:
//! they only change when [`Input::update_hint`] runs, so a caller decides when the user
//! gets to see them.
//!
//! ## Options
//!
//! [`InputOption`] is a shared handle. The same option placed in a group, in another
//! group, or in an input's list is one entity, and toggling `disabled` through any
//! holder is visible to all of them. Option values must be unique across everything an
//! input can reach once groups are flattened.
//!
//! ## Examples
//!
//! ```rust
//! use fhub_inputs::prelude::*;
//!
//! let mut age = NumericalInput::new(NumericalInputConfig {
//!     base: InputConfig::new("Age", "age").with_required(true),
//!     min_val: Some(18.0),
//!     max_val: Some(120.0),
//!     ..NumericalInputConfig::default()
//! });
//!
//! age.set_value("12 years");
//! assert_eq!(age.value(), "12");
//! assert!(!age.is_valid());
//!
//! age.update_hint();
//! assert_eq!(age.hints(), ["this field has to be more than 18"]);
//! ```

mod error;
mod hint;
mod input;
mod numerical;
mod option;
mod option_inputs;
mod textual;
mod toggle;

pub use error::{InputError, InputErrorExt};
pub use fhub_kernel::InputId;
pub use input::{Input, InputBase};
pub use numerical::{NumericalInput, coerce};
pub use option::{InputOption, OptionEntry, OptionGroup, OptionGroupConfig, flatten};
pub use option_inputs::{MultiOptionInput, OptionInputConfig, SingleOptionInput};
pub use textual::TextualInput;
pub use toggle::ToggleInput;

pub mod prelude {
    pub use crate::error::{InputError, InputErrorExt};
    pub use crate::input::Input;
    pub use crate::numerical::NumericalInput;
    pub use crate::option::{InputOption, OptionEntry, OptionGroup, OptionGroupConfig};
    pub use crate::option_inputs::{MultiOptionInput, OptionInputConfig, SingleOptionInput};
    pub use crate::textual::TextualInput;
    pub use crate::toggle::ToggleInput;
    pub use fhub_domain::config::{
        HintInstruction, InputConfig, InputOptionConfig, NumberKind, NumericalInputConfig,
        TextualInputConfig, ToggleInputConfig,
    };
    pub use fhub_domain::hints::{HintConfig, HintKey, HintRules, HintTranslation};
    pub use fhub_domain::value::RawValue;
}
