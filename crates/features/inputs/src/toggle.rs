use crate::hint::Phrasebook;
use crate::input::{Input, InputBase};
use fhub_domain::config::ToggleInputConfig;
use fhub_domain::hints::{HintConfig, HintRules};
use tracing::debug;

/// A boolean switch. When required, only `true` is valid.
#[derive(Debug, Clone)]
pub struct ToggleInput {
    base: InputBase,
    value: bool,
    hint_config: HintConfig,
}

impl ToggleInput {
    #[must_use]
    pub fn new(config: ToggleInputConfig) -> Self {
        let ToggleInputConfig { base, initial_state, hint_config } = config;
        let base = InputBase::new(base);
        debug!(id = %base.id(), name = base.name(), initial_state, "Toggle input created");

        Self { base, value: initial_state, hint_config }
    }

    #[must_use]
    pub const fn value(&self) -> bool {
        self.value
    }

    pub const fn set_value(&mut self, value: bool) {
        self.value = value;
    }

    /// Flips the stored state.
    pub const fn toggle(&mut self) {
        self.value = !self.value;
    }

    #[must_use]
    pub const fn hint_config(&self) -> &HintConfig {
        &self.hint_config
    }

    pub const fn hint_config_mut(&mut self) -> &mut HintConfig {
        &mut self.hint_config
    }
}

impl Input for ToggleInput {
    fn base(&self) -> &InputBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut InputBase {
        &mut self.base
    }

    fn is_valid(&self) -> bool {
        self.value || !self.base.required()
    }

    fn collect_hints(&self) -> Vec<String> {
        if self.is_valid() || !self.hint_config.enabled(HintRules::REQUIRED) {
            return Vec::new();
        }
        vec![Phrasebook::new(&self.hint_config, self.base.label()).required()]
    }
}
