//! The contract every input type fulfils.

use fhub_domain::config::InputConfig;
use fhub_kernel::InputId;
use tracing::trace;

/// State shared by every input: identity, labelling, required-ness, mask and hints.
///
/// `id` is fixed at construction and `hints` only changes through
/// [`Input::update_hint`].
#[derive(Debug, Clone)]
pub struct InputBase {
    id: InputId,
    label: String,
    name: String,
    required: bool,
    mask: Option<String>,
    hints: Vec<String>,
}

impl InputBase {
    pub(crate) fn new(config: InputConfig) -> Self {
        let InputConfig { label, name, required, mask } = config;
        Self { id: InputId::generate(), label, name, required, mask, hints: Vec::new() }
    }

    #[must_use]
    pub const fn id(&self) -> &InputId {
        &self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn required(&self) -> bool {
        self.required
    }

    pub const fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    #[must_use]
    pub fn mask(&self) -> Option<&str> {
        self.mask.as_deref()
    }

    #[must_use]
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    pub(crate) fn replace_hints(&mut self, hints: Vec<String>) {
        self.hints = hints;
    }
}

/// A single form field that holds a value, validates it and explains why it is invalid.
///
/// Implementors provide [`Input::is_valid`] and [`Input::collect_hints`]; everything
/// else is derived from the shared [`InputBase`].
pub trait Input {
    fn base(&self) -> &InputBase;

    fn base_mut(&mut self) -> &mut InputBase;

    /// Whether every active constraint passes against the current value.
    ///
    /// Always computed from the current state.
    fn is_valid(&self) -> bool;

    /// One message per violated constraint, in rule order. Pure: does not touch `hints`.
    fn collect_hints(&self) -> Vec<String>;

    /// Recomputes the hints from the current value.
    fn update_hint(&mut self) {
        let hints = self.collect_hints();
        trace!(id = %self.id(), count = hints.len(), "Hints updated");
        self.base_mut().replace_hints(hints);
    }

    /// Hints as of the last [`Input::update_hint`] call.
    fn hints(&self) -> &[String] {
        self.base().hints()
    }

    fn id(&self) -> &InputId {
        self.base().id()
    }

    fn label(&self) -> &str {
        self.base().label()
    }

    fn name(&self) -> &str {
        self.base().name()
    }

    fn required(&self) -> bool {
        self.base().required()
    }

    fn set_required(&mut self, required: bool) {
        self.base_mut().set_required(required);
    }

    fn mask(&self) -> Option<&str> {
        self.base().mask()
    }
}
