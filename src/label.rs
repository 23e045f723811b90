//! Class labels and the positive/negative partition.
//!
//! Ground truth may be encoded as booleans, small integers, or arbitrary
//! values such as strings. Booleans and `{0, 1}` or `{-1, 1}` integers carry
//! an obvious positive class; anything else must name it explicitly.

use std::fmt;

use crate::error::{Error, Result};

/// A value usable as a binary ground-truth label.
pub trait ClassLabel: Clone + PartialEq + fmt::Display {
    /// Infer the positive class from the distinct values present.
    ///
    /// Returns `None` when the encoding gives no natural positive class.
    fn implicit_positive(classes: &[Self]) -> Option<Self> {
        let _ = classes;
        None
    }
}

impl ClassLabel for bool {
    fn implicit_positive(_classes: &[Self]) -> Option<Self> {
        Some(true)
    }
}

macro_rules! impl_signed_label {
    ($($t:ty),*) => {$(
        impl ClassLabel for $t {
            fn implicit_positive(classes: &[Self]) -> Option<Self> {
                let zero_one = classes.iter().all(|&c| c == 0 || c == 1);
                let signed = classes.iter().all(|&c| c == -1 || c == 1);
                (zero_one || signed).then_some(1)
            }
        }
    )*};
}

macro_rules! impl_unsigned_label {
    ($($t:ty),*) => {$(
        impl ClassLabel for $t {
            fn implicit_positive(classes: &[Self]) -> Option<Self> {
                classes.iter().all(|&c| c <= 1).then_some(1)
            }
        }
    )*};
}

impl_signed_label!(i8, i16, i32, i64, isize);
impl_unsigned_label!(u8, u16, u32, u64, usize);

impl ClassLabel for char {}
impl ClassLabel for String {}
impl ClassLabel for &str {}

/// Labels resolved into a positive/negative mask.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryPartition<L> {
    /// The class treated as positive.
    pub positive: L,
    /// Distinct classes in first-seen order (one or two entries).
    pub classes: Vec<L>,
    /// Per-sample membership in the positive class.
    pub is_positive: Vec<bool>,
}

/// Distinct values in first-seen order, failing on a third class.
fn distinct_classes<L: ClassLabel>(labels: &[L]) -> Result<Vec<L>> {
    let mut classes: Vec<L> = Vec::with_capacity(2);
    for label in labels {
        if classes.contains(label) {
            continue;
        }
        if classes.len() == 2 {
            return Err(Error::NonBinaryLabels { found: 3 });
        }
        classes.push(label.clone());
    }
    Ok(classes)
}

/// Split labels into positive and negative samples.
///
/// An explicit `positive` always wins, even when it does not occur in
/// `labels`; the rate computation then reports the missing class.
pub fn partition<L: ClassLabel>(labels: &[L], positive: Option<&L>) -> Result<BinaryPartition<L>> {
    if labels.is_empty() {
        return Err(Error::EmptyData);
    }

    let classes = distinct_classes(labels)?;

    let positive = match positive {
        Some(p) => p.clone(),
        None => L::implicit_positive(&classes).ok_or_else(|| Error::AmbiguousPositiveLabel {
            classes: classes.iter().map(ToString::to_string).collect(),
        })?,
    };

    let is_positive = labels.iter().map(|l| *l == positive).collect();

    Ok(BinaryPartition {
        positive,
        classes,
        is_positive,
    })
}
