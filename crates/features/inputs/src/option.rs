//! Option entities for option-based inputs.
//!
//! An [`InputOption`] is a shared handle: cloning it, or putting the same option
//! in several groups and inputs, shares one underlying entity, so toggling
//! `disabled` or `pre_selected` is seen by every holder. Use
//! [`InputOption::detached`] for an independent copy.

use crate::error::{InputError, OPTION_VALUE_REQUIRED};
use fhub_domain::config::{InputOptionConfig, OptionGroupSource, OptionSource};
use parking_lot::RwLock;
use std::slice;
use std::sync::Arc;
use tracing::warn;

#[derive(Debug, Clone, Copy, Default)]
struct OptionFlags {
    disabled: bool,
    pre_selected: bool,
}

#[derive(Debug)]
struct OptionInner {
    label: Option<String>,
    value: String,
    flags: RwLock<OptionFlags>,
}

/// A selectable value with an optional label.
#[derive(Debug, Clone)]
pub struct InputOption {
    inner: Arc<OptionInner>,
}

impl InputOption {
    /// Builds an option.
    ///
    /// # Errors
    /// Returns [`InputError::InvalidOption`] if `value` is empty.
    pub fn new(config: InputOptionConfig) -> Result<Self, InputError> {
        let InputOptionConfig { label, value, disabled, pre_selected } = config;
        if value.is_empty() {
            warn!(label = label.as_deref(), "Rejected option without a value");
            return Err(InputError::InvalidOption {
                message: OPTION_VALUE_REQUIRED.into(),
                context: label.map(|label| format!("option '{label}'").into()),
            });
        }

        Ok(Self {
            inner: Arc::new(OptionInner {
                label,
                value,
                flags: RwLock::new(OptionFlags { disabled, pre_selected }),
            }),
        })
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.inner.label.as_deref()
    }

    /// Never empty, never changes.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.inner.value
    }

    #[must_use]
    pub fn disabled(&self) -> bool {
        self.inner.flags.read().disabled
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.inner.flags.write().disabled = disabled;
    }

    #[must_use]
    pub fn pre_selected(&self) -> bool {
        self.inner.flags.read().pre_selected
    }

    pub fn set_pre_selected(&self, pre_selected: bool) {
        self.inner.flags.write().pre_selected = pre_selected;
    }

    /// Whether both handles point at the same option.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// An independent copy: later changes to either side are not shared.
    #[must_use]
    pub fn detached(&self) -> Self {
        let flags = *self.inner.flags.read();
        Self {
            inner: Arc::new(OptionInner {
                label: self.inner.label.clone(),
                value: self.inner.value.clone(),
                flags: RwLock::new(flags),
            }),
        }
    }
}

impl TryFrom<InputOptionConfig> for InputOption {
    type Error = InputError;

    fn try_from(config: InputOptionConfig) -> Result<Self, Self::Error> {
        Self::new(config)
    }
}

#[derive(Debug, Clone, Default)]
pub struct OptionGroupConfig {
    pub label: String,
    pub disabled: bool,
    pub options: Vec<InputOption>,
}

/// A labelled group of options, for grouped rendering only.
#[derive(Debug, Clone)]
pub struct OptionGroup {
    label: String,
    disabled: bool,
    options: Vec<InputOption>,
}

impl OptionGroup {
    #[must_use]
    pub fn new(config: OptionGroupConfig) -> Self {
        let OptionGroupConfig { label, disabled, options } = config;
        Self { label, disabled, options }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub const fn disabled(&self) -> bool {
        self.disabled
    }

    pub const fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    #[must_use]
    pub fn options(&self) -> &[InputOption] {
        &self.options
    }
}

/// An element of the mixed list handed to option-based inputs.
#[derive(Debug, Clone)]
pub enum OptionEntry {
    Option(InputOption),
    Group(OptionGroup),
}

impl OptionEntry {
    /// The options this entry contributes once flattened.
    #[must_use]
    pub fn options(&self) -> &[InputOption] {
        match self {
            Self::Option(option) => slice::from_ref(option),
            Self::Group(group) => group.options(),
        }
    }

    /// Builds an entry from its configuration document.
    ///
    /// # Errors
    /// Returns [`InputError::InvalidOption`] if any option in the source has an empty value.
    pub fn from_source(source: OptionSource) -> Result<Self, InputError> {
        match source {
            OptionSource::Option(config) => InputOption::new(config).map(Self::Option),
            OptionSource::Group(OptionGroupSource { label, disabled, options }) => {
                let options =
                    options.into_iter().map(InputOption::new).collect::<Result<Vec<_>, _>>()?;
                Ok(Self::Group(OptionGroup::new(OptionGroupConfig { label, disabled, options })))
            },
        }
    }
}

impl From<InputOption> for OptionEntry {
    fn from(option: InputOption) -> Self {
        Self::Option(option)
    }
}

impl From<OptionGroup> for OptionEntry {
    fn from(group: OptionGroup) -> Self {
        Self::Group(group)
    }
}

/// Resolves groups into their options, keeping list order.
#[must_use]
pub fn flatten(entries: &[OptionEntry]) -> Vec<InputOption> {
    entries.iter().flat_map(OptionEntry::options).cloned().collect()
}
