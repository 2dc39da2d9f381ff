//! Length and cardinality checks shared by the step predicates.
//!
//! Lengths count Unicode scalar values of the trimmed text, so accents and
//! emoji count as one character each and surrounding whitespace never counts.

/// Number of characters in `text` once trimmed.
pub(crate) fn char_count(text: &str) -> usize {
    text.trim().chars().count()
}

/// Anything other than whitespace.
pub(crate) fn is_filled(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Strictly more than `min` characters.
pub(crate) fn longer_than(text: &str, min: usize) -> bool {
    char_count(text) > min
}

/// `min` characters or more.
pub(crate) fn at_least(text: &str, min: usize) -> bool {
    char_count(text) >= min
}

/// At least `min` items and every item complete; a half-filled item blocks
/// the collection even when the count is met.
pub(crate) fn complete_collection<T>(items: &[T], min: usize, complete: impl Fn(&T) -> bool) -> bool {
    items.len() >= min && items.iter().all(complete)
}
