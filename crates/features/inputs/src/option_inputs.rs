use crate::error::{InputError, OPTIONS_REQUIRED, OPTIONS_UNIQUE};
use crate::hint::Phrasebook;
use crate::input::{Input, InputBase};
use crate::option::{InputOption, OptionEntry, flatten};
use fhub_domain::config::{InputConfig, OptionInputSource};
use fhub_domain::hints::{HintConfig, HintRules};
use fxhash::FxHashSet;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default)]
pub struct OptionInputConfig {
    pub base: InputConfig,
    pub options: Vec<OptionEntry>,
    pub hint_config: HintConfig,
}

impl TryFrom<OptionInputSource> for OptionInputConfig {
    type Error = InputError;

    fn try_from(source: OptionInputSource) -> Result<Self, Self::Error> {
        let OptionInputSource { base, options, hint_config } = source;
        let options =
            options.into_iter().map(OptionEntry::from_source).collect::<Result<Vec<_>, _>>()?;
        Ok(Self { base, options, hint_config })
    }
}

/// The caller's entries plus their flattened, uniqueness-checked options.
#[derive(Debug, Clone)]
struct OptionSet {
    entries: Vec<OptionEntry>,
    flat: Vec<InputOption>,
}

impl OptionSet {
    fn new(entries: Vec<OptionEntry>) -> Result<Self, InputError> {
        let flat = flatten(&entries);
        if flat.is_empty() {
            warn!("Rejected option based input without options");
            return Err(InputError::MissingOptions { message: OPTIONS_REQUIRED.into(), context: None });
        }

        let mut seen = FxHashSet::default();
        if let Some(duplicate) = flat.iter().find(|option| !seen.insert(option.value())) {
            warn!(value = duplicate.value(), "Rejected option based input with duplicate values");
            return Err(InputError::DuplicateOptionValue {
                message: OPTIONS_UNIQUE.into(),
                context: Some(format!("value '{}'", duplicate.value()).into()),
            });
        }

        Ok(Self { entries, flat })
    }

    fn find(&self, value: &str) -> Option<&InputOption> {
        self.flat.iter().find(|option| option.value() == value)
    }

    fn values(&self) -> impl Iterator<Item = &str> {
        self.flat.iter().map(InputOption::value)
    }
}

/// Required-ness and membership, shared by both option-based inputs.
fn selection_valid<'s>(
    base: &InputBase,
    options: &OptionSet,
    mut selected: impl Iterator<Item = &'s str>,
) -> bool {
    let mut any = false;
    let known = selected.all(|value| {
        any = true;
        options.find(value).is_some()
    });
    known && (any || !base.required())
}

fn selection_hints<'s>(
    base: &InputBase,
    options: &OptionSet,
    config: &HintConfig,
    mut selected: impl Iterator<Item = &'s str> + Clone,
) -> Vec<String> {
    let phrases = Phrasebook::new(config, base.label());
    let mut hints = Vec::new();

    if base.required() && selected.clone().next().is_none() && config.enabled(HintRules::REQUIRED) {
        hints.push(phrases.required());
    }
    if config.enabled(HintRules::OPTIONS) && selected.any(|value| options.find(value).is_none()) {
        hints.push(phrases.one_of(options.values()));
    }

    hints
}

/// Chooses at most one value among its options.
#[derive(Debug, Clone)]
pub struct SingleOptionInput {
    base: InputBase,
    options: OptionSet,
    selected: Option<String>,
    hint_config: HintConfig,
}

impl SingleOptionInput {
    /// Builds the input; the first pre-selected option becomes the initial value.
    ///
    /// # Errors
    /// * [`InputError::MissingOptions`] if the options flatten to nothing.
    /// * [`InputError::DuplicateOptionValue`] if two reachable options share a value.
    pub fn new(config: OptionInputConfig) -> Result<Self, InputError> {
        let OptionInputConfig { base, options, hint_config } = config;
        let options = OptionSet::new(options)?;
        let selected =
            options.flat.iter().find(|option| option.pre_selected()).map(|o| o.value().to_owned());

        let base = InputBase::new(base);
        debug!(id = %base.id(), name = base.name(), options = options.flat.len(), "Single option input created");

        Ok(Self { base, options, selected, hint_config })
    }

    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn set_value(&mut self, value: Option<String>) {
        self.selected = value;
    }

    pub fn select(&mut self, value: impl Into<String>) {
        self.selected = Some(value.into());
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// The option currently selected, if the selection names a known one.
    #[must_use]
    pub fn selected_option(&self) -> Option<&InputOption> {
        self.selected.as_deref().and_then(|value| self.options.find(value))
    }

    /// Options and groups as supplied at construction.
    #[must_use]
    pub fn options(&self) -> &[OptionEntry] {
        &self.options.entries
    }

    #[must_use]
    pub fn flattened_options(&self) -> &[InputOption] {
        &self.options.flat
    }

    #[must_use]
    pub fn find_option(&self, value: &str) -> Option<&InputOption> {
        self.options.find(value)
    }

    #[must_use]
    pub const fn hint_config(&self) -> &HintConfig {
        &self.hint_config
    }

    pub const fn hint_config_mut(&mut self) -> &mut HintConfig {
        &mut self.hint_config
    }
}

impl Input for SingleOptionInput {
    fn base(&self) -> &InputBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut InputBase {
        &mut self.base
    }

    fn is_valid(&self) -> bool {
        selection_valid(&self.base, &self.options, self.selected.as_deref().into_iter())
    }

    fn collect_hints(&self) -> Vec<String> {
        selection_hints(
            &self.base,
            &self.options,
            &self.hint_config,
            self.selected.as_deref().into_iter(),
        )
    }
}

/// Chooses any number of distinct values among its options, in selection order.
#[derive(Debug, Clone)]
pub struct MultiOptionInput {
    base: InputBase,
    options: OptionSet,
    selected: Vec<String>,
    hint_config: HintConfig,
}

impl MultiOptionInput {
    /// Builds the input; every pre-selected option starts selected.
    ///
    /// # Errors
    /// * [`InputError::MissingOptions`] if the options flatten to nothing.
    /// * [`InputError::DuplicateOptionValue`] if two reachable options share a value.
    pub fn new(config: OptionInputConfig) -> Result<Self, InputError> {
        let OptionInputConfig { base, options, hint_config } = config;
        let options = OptionSet::new(options)?;
        let selected = options
            .flat
            .iter()
            .filter(|option| option.pre_selected())
            .map(|option| option.value().to_owned())
            .collect();

        let base = InputBase::new(base);
        debug!(id = %base.id(), name = base.name(), options = options.flat.len(), "Multi option input created");

        Ok(Self { base, options, selected, hint_config })
    }

    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.selected
    }

    /// Replaces the selection; repeated values are kept once.
    pub fn set_values<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected.clear();
        for value in values {
            self.select(value);
        }
    }

    #[must_use]
    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.iter().any(|selected| selected == value)
    }

    /// Adds `value` to the selection unless it is already there.
    pub fn select(&mut self, value: impl Into<String>) {
        let value = value.into();
        if !self.is_selected(&value) {
            self.selected.push(value);
        }
    }

    /// Removes `value`; returns whether it was selected.
    pub fn deselect(&mut self, value: &str) -> bool {
        let before = self.selected.len();
        self.selected.retain(|selected| selected != value);
        self.selected.len() != before
    }

    /// Selects `value` if absent, deselects it otherwise.
    pub fn toggle(&mut self, value: &str) {
        if !self.deselect(value) {
            self.selected.push(value.to_owned());
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Known options currently selected, in selection order.
    pub fn selected_options(&self) -> impl Iterator<Item = &InputOption> {
        self.selected.iter().filter_map(|value| self.options.find(value))
    }

    #[must_use]
    pub fn options(&self) -> &[OptionEntry] {
        &self.options.entries
    }

    #[must_use]
    pub fn flattened_options(&self) -> &[InputOption] {
        &self.options.flat
    }

    #[must_use]
    pub fn find_option(&self, value: &str) -> Option<&InputOption> {
        self.options.find(value)
    }

    #[must_use]
    pub const fn hint_config(&self) -> &HintConfig {
        &self.hint_config
    }

    pub const fn hint_config_mut(&mut self) -> &mut HintConfig {
        &mut self.hint_config
    }
}

impl Input for MultiOptionInput {
    fn base(&self) -> &InputBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut InputBase {
        &mut self.base
    }

    fn is_valid(&self) -> bool {
        selection_valid(&self.base, &self.options, self.selected.iter().map(String::as_str))
    }

    fn collect_hints(&self) -> Vec<String> {
        selection_hints(
            &self.base,
            &self.options,
            &self.hint_config,
            self.selected.iter().map(String::as_str),
        )
    }
}
