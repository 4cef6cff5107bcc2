use std::fmt;
use std::ops::Deref;

/// Process-unique identity of an input, assigned once at construction.
///
/// There is no way to build or mutate an `InputId` other than [`InputId::generate`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InputId(Box<str>);

impl InputId {
    /// Draws a fresh 12-character id from [`SAFE_ALPHABET`](crate::SAFE_ALPHABET).
    #[must_use]
    pub fn generate() -> Self {
        Self(crate::safe_nanoid!().into_boxed_str())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for InputId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for InputId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for InputId {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for InputId {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}
