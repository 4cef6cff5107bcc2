//! Facade crate for `FormHub` inputs and shared modules.
//! Re-exports domain/kernel primitives and the input types.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Build inputs in code through [`prelude`], or
//! - load one input definition per file with the helpers in [`load`] (non-wasm).
//!
//! ```rust
//! use fhub::prelude::*;
//!
//! let mut terms = ToggleInput::new(ToggleInputConfig {
//!     base: InputConfig::new("Terms", "terms").with_required(true),
//!     ..ToggleInputConfig::default()
//! });
//! assert!(!terms.is_valid());
//!
//! terms.toggle();
//! assert!(terms.is_valid());
//! ```

mod error;
#[cfg(not(target_arch = "wasm32"))]
pub mod load;

pub use error::{FormError, FormErrorExt};
pub use fhub_domain as domain;
pub use fhub_inputs as inputs;
pub use fhub_kernel as kernel;

pub mod prelude {
    pub use crate::error::{FormError, FormErrorExt};
    #[cfg(not(target_arch = "wasm32"))]
    pub use crate::load::AnyInput;
    pub use fhub_inputs::prelude::*;
}

/// Input kinds registry for runtime introspection.
pub mod kinds {
    /// Input kinds accepted by [`crate::load::any`].
    pub const ENABLED: &[&str] = &["textual", "numerical", "toggle", "single-option", "multi-option"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}
