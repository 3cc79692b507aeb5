//! Shallow merging for partial updates.
//!
//! Both stores apply patches through these two helpers so the merge rules
//! cannot drift apart: a patch field that carries a value overwrites the
//! record's field, an omitted field keeps whatever the record already had.

/// Overwrite `slot` only when the patch carries a value.
pub(crate) fn merge_field<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// Same as [`merge_field`] for optional slots. Omission retains the current
/// value; a patch cannot clear an optional field back to `None`.
pub(crate) fn merge_optional<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}
