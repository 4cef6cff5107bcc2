//! Sentence assembly for hints.
//!
//! Every hint reads `<subject> <predicate>`: the subject is the translated
//! `thisField` fragment (or the input label when `useLabel` is set) and the
//! predicate is a sequence of translated fragments with bound values spliced in.
//! Empty fragments are skipped, so a translation can drop a word it has no use for.

use fhub_domain::hints::{HintConfig, HintKey, HintTranslation};

pub(crate) struct Phrasebook<'a> {
    translation: &'a HintTranslation,
    subject: &'a str,
}

impl<'a> Phrasebook<'a> {
    pub(crate) fn new(config: &'a HintConfig, label: &'a str) -> Self {
        let translation = &config.translation;
        let subject = if config.use_label && !label.is_empty() {
            label
        } else {
            translation.get(HintKey::ThisField)
        };
        Self { translation, subject }
    }

    pub(crate) fn required(&self) -> String {
        self.sentence(&[self.word(HintKey::IsRequired)])
    }

    pub(crate) fn between(&self, min: f64, max: f64) -> String {
        self.sentence(&[
            self.word(HintKey::HasToBe),
            self.word(HintKey::Between),
            &format_number(min),
            self.word(HintKey::And),
            &format_number(max),
        ])
    }

    pub(crate) fn more_than(&self, min: f64) -> String {
        self.sentence(&[
            self.word(HintKey::HasToBe),
            self.word(HintKey::MoreThan),
            &format_number(min),
        ])
    }

    pub(crate) fn less_than(&self, max: f64) -> String {
        self.sentence(&[
            self.word(HintKey::HasToBe),
            self.word(HintKey::LessThan),
            &format_number(max),
        ])
    }

    pub(crate) fn in_increments_of(&self, step: f64) -> String {
        self.sentence(&[
            self.word(HintKey::HasToBe),
            self.word(HintKey::InIncrementsOf),
            &format_number(step),
        ])
    }

    pub(crate) fn one_of<'v>(&self, values: impl IntoIterator<Item = &'v str>) -> String {
        let values = values.into_iter().collect::<Vec<_>>().join(", ");
        self.sentence(&[self.word(HintKey::HasToBe), self.word(HintKey::OneOf), &values])
    }

    fn word(&self, key: HintKey) -> &'a str {
        self.translation.get(key)
    }

    fn sentence(&self, predicate: &[&str]) -> String {
        let mut sentence = self.subject.to_owned();
        for part in predicate.iter().filter(|part| !part.is_empty()) {
            if !sentence.is_empty() {
                sentence.push(' ');
            }
            sentence.push_str(part);
        }
        sentence
    }
}

/// Shortest decimal rendering: `5.0` prints as `5`, `-0.0` as `0`.
pub(crate) fn format_number(value: f64) -> String {
    if value == 0.0 { "0".to_owned() } else { value.to_string() }
}
