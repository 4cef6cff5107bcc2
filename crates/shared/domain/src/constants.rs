//! Default English hint vocabulary.
//!
//! Every hint sentence is assembled from these fragments: a subject
//! ([`THIS_FIELD`]) followed by a predicate clause.

pub const THIS_FIELD: &str = "this field";
pub const IS_REQUIRED: &str = "is required";
pub const HAS_TO_BE: &str = "has to be";
pub const LESS_THAN: &str = "less than";
pub const MORE_THAN: &str = "more than";
pub const BETWEEN: &str = "between";
pub const AND: &str = "and";
pub const IN_INCREMENTS_OF: &str = "in increments of";
pub const ONE_OF: &str = "one of";
