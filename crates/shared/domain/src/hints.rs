//! Hint vocabulary, rule toggles and the configuration that combines them.
//!
//! Translations and toggles are partial overrides merged over complete defaults:
//! any key a caller leaves out keeps its default text or stays enabled.

use crate::constants::{
    AND, BETWEEN, HAS_TO_BE, IN_INCREMENTS_OF, IS_REQUIRED, LESS_THAN, MORE_THAN, ONE_OF,
    THIS_FIELD,
};
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;

bitflags! {
    /// The hint rule families that can be switched off individually.
    ///
    /// Toggles only affect hint text; validity checks always run.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct HintRules: u8 {
        const REQUIRED = 1 << 0;
        const MIN = 1 << 1;
        const MAX = 1 << 2;
        const INCREMENT = 1 << 3;
        const OPTIONS = 1 << 4;

        const ALL = Self::REQUIRED.bits()
            | Self::MIN.bits()
            | Self::MAX.bits()
            | Self::INCREMENT.bits()
            | Self::OPTIONS.bits();
    }
}

impl Default for HintRules {
    fn default() -> Self {
        Self::ALL
    }
}

/// Wire shape of [`HintRules`]: a partial `rule -> bool` mapping.
#[derive(Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RuleToggles {
    #[serde(skip_serializing_if = "Option::is_none")]
    required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    increment: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<bool>,
}

impl Serialize for HintRules {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        RuleToggles {
            required: Some(self.contains(Self::REQUIRED)),
            min: Some(self.contains(Self::MIN)),
            max: Some(self.contains(Self::MAX)),
            increment: Some(self.contains(Self::INCREMENT)),
            options: Some(self.contains(Self::OPTIONS)),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for HintRules {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let toggles = RuleToggles::deserialize(deserializer)?;
        let mut rules = Self::ALL;
        for (rule, enabled) in [
            (Self::REQUIRED, toggles.required),
            (Self::MIN, toggles.min),
            (Self::MAX, toggles.max),
            (Self::INCREMENT, toggles.increment),
            (Self::OPTIONS, toggles.options),
        ] {
            if let Some(enabled) = enabled {
                rules.set(rule, enabled);
            }
        }
        Ok(rules)
    }
}

/// Keys of the hint message table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HintKey {
    ThisField,
    IsRequired,
    HasToBe,
    LessThan,
    MoreThan,
    Between,
    And,
    InIncrementsOf,
    OneOf,
}

impl HintKey {
    pub const ALL: [Self; 9] = [
        Self::ThisField,
        Self::IsRequired,
        Self::HasToBe,
        Self::LessThan,
        Self::MoreThan,
        Self::Between,
        Self::And,
        Self::InIncrementsOf,
        Self::OneOf,
    ];

    /// The key as it appears in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ThisField => "thisField",
            Self::IsRequired => "isRequired",
            Self::HasToBe => "hasToBe",
            Self::LessThan => "lessThan",
            Self::MoreThan => "moreThan",
            Self::Between => "between",
            Self::And => "and",
            Self::InIncrementsOf => "inIncrementsOf",
            Self::OneOf => "oneOf",
        }
    }

    /// The English fragment used when no translation overrides this key.
    #[must_use]
    pub const fn default_text(self) -> &'static str {
        match self {
            Self::ThisField => THIS_FIELD,
            Self::IsRequired => IS_REQUIRED,
            Self::HasToBe => HAS_TO_BE,
            Self::LessThan => LESS_THAN,
            Self::MoreThan => MORE_THAN,
            Self::Between => BETWEEN,
            Self::And => AND,
            Self::InIncrementsOf => IN_INCREMENTS_OF,
            Self::OneOf => ONE_OF,
        }
    }

    /// Looks a key up by its configuration name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

/// A complete hint message table.
///
/// Deserializing a partial table keeps the English default for every missing key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HintTranslation {
    pub this_field: Cow<'static, str>,
    pub is_required: Cow<'static, str>,
    pub has_to_be: Cow<'static, str>,
    pub less_than: Cow<'static, str>,
    pub more_than: Cow<'static, str>,
    pub between: Cow<'static, str>,
    pub and: Cow<'static, str>,
    pub in_increments_of: Cow<'static, str>,
    pub one_of: Cow<'static, str>,
}

impl HintTranslation {
    /// Returns the text for `key`.
    #[must_use]
    pub fn get(&self, key: HintKey) -> &str {
        self.slot(key)
    }

    /// Overrides the text for `key`.
    pub fn set(&mut self, key: HintKey, text: impl Into<Cow<'static, str>>) {
        *self.slot_mut(key) = text.into();
    }

    /// Restores the English default for `key`.
    pub fn reset(&mut self, key: HintKey) {
        *self.slot_mut(key) = Cow::Borrowed(key.default_text());
    }

    const fn slot(&self, key: HintKey) -> &Cow<'static, str> {
        match key {
            HintKey::ThisField => &self.this_field,
            HintKey::IsRequired => &self.is_required,
            HintKey::HasToBe => &self.has_to_be,
            HintKey::LessThan => &self.less_than,
            HintKey::MoreThan => &self.more_than,
            HintKey::Between => &self.between,
            HintKey::And => &self.and,
            HintKey::InIncrementsOf => &self.in_increments_of,
            HintKey::OneOf => &self.one_of,
        }
    }

    const fn slot_mut(&mut self, key: HintKey) -> &mut Cow<'static, str> {
        match key {
            HintKey::ThisField => &mut self.this_field,
            HintKey::IsRequired => &mut self.is_required,
            HintKey::HasToBe => &mut self.has_to_be,
            HintKey::LessThan => &mut self.less_than,
            HintKey::MoreThan => &mut self.more_than,
            HintKey::Between => &mut self.between,
            HintKey::And => &mut self.and,
            HintKey::InIncrementsOf => &mut self.in_increments_of,
            HintKey::OneOf => &mut self.one_of,
        }
    }
}

impl Default for HintTranslation {
    fn default() -> Self {
        Self {
            this_field: Cow::Borrowed(THIS_FIELD),
            is_required: Cow::Borrowed(IS_REQUIRED),
            has_to_be: Cow::Borrowed(HAS_TO_BE),
            less_than: Cow::Borrowed(LESS_THAN),
            more_than: Cow::Borrowed(MORE_THAN),
            between: Cow::Borrowed(BETWEEN),
            and: Cow::Borrowed(AND),
            in_increments_of: Cow::Borrowed(IN_INCREMENTS_OF),
            one_of: Cow::Borrowed(ONE_OF),
        }
    }
}

impl<S: Into<Cow<'static, str>>> Extend<(HintKey, S)> for HintTranslation {
    fn extend<I: IntoIterator<Item = (HintKey, S)>>(&mut self, overrides: I) {
        for (key, text) in overrides {
            self.set(key, text);
        }
    }
}

impl<S: Into<Cow<'static, str>>> FromIterator<(HintKey, S)> for HintTranslation {
    /// Merges a partial set of overrides over the English defaults.
    fn from_iter<I: IntoIterator<Item = (HintKey, S)>>(overrides: I) -> Self {
        let mut translation = Self::default();
        translation.extend(overrides);
        translation
    }
}

/// How an input phrases its hints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HintConfig {
    /// Message fragments, English by default.
    pub translation: HintTranslation,
    /// Which rule families produce hint text.
    pub toggle: HintRules,
    /// Start sentences with the input label instead of `thisField`.
    pub use_label: bool,
}

impl HintConfig {
    /// Whether hints for `rule` are currently produced.
    #[must_use]
    pub const fn enabled(&self, rule: HintRules) -> bool {
        self.toggle.contains(rule)
    }
}
