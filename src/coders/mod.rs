//! The "total age of the coders" challenge.
//!
//! A JSON array of records, each carrying an `age`, is summed into one
//! number. [`Variant`] names the eleven ways the task is written in
//! [`variants`]; every one of them yields the same total.
//!
//! ```
//! use lambda_lessons::coders::{Coder, Variant};
//!
//! let team = vec![Coder::new("ada", 36), Coder::new("grace", 45)];
//! for variant in Variant::ALL {
//!     assert_eq!(variant.total_ages(team.clone()), 81);
//! }
//! ```

pub mod variants;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One record of the coders array.
///
/// Only `age` is required. Unknown fields in the JSON are ignored.
///
/// Ages are stored as `u32` and widened to `u64` whenever they are read, so
/// no list of coders that fits in memory can overflow a `u64` total.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coder {
    /// Display name, if the record has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Age in whole years.
    pub age: u32,
}

impl Coder {
    /// Creates a named coder.
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: Some(name.into()),
            age,
        }
    }

    /// Creates a coder record without a name.
    pub const fn anonymous(age: u32) -> Self {
        Self { name: None, age }
    }

    /// The `age` field widened to `u64`, as an accessor usable with
    /// `prop` and `pluck`.
    #[inline]
    pub fn age(&self) -> u64 {
        u64::from(self.age)
    }
}

/// The eleven textual variants of the age-summation task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variant {
    /// Index loop with a mutable accumulator.
    V1,
    /// One fold over the records.
    V2,
    /// Map to ages, then fold.
    V3,
    /// Map and fold as separate stages.
    V4,
    /// Named `get_ages` and `add_ages` stages.
    V5,
    /// Stages as short closures passed by value.
    V6,
    /// Named accessor and combiner.
    V7,
    /// Library `prop` and `add` applied to the data.
    V8,
    /// Point-free `map(prop(age))` and `reduce(add, 0)`.
    V9,
    /// `pluck(age)` then `sum`.
    V10,
    /// `compose!(sum, pluck(age))`.
    V11,
}

impl Variant {
    /// Every variant, in teaching order.
    pub const ALL: [Self; 11] = [
        Self::V1,
        Self::V2,
        Self::V3,
        Self::V4,
        Self::V5,
        Self::V6,
        Self::V7,
        Self::V8,
        Self::V9,
        Self::V10,
        Self::V11,
    ];

    /// Looks a variant up by its number, `1..=11`.
    pub fn from_number(number: usize) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// The variant's number, `1..=11`.
    pub const fn number(self) -> usize {
        self as usize + 1
    }

    /// Runs the synchronous core of this variant.
    pub fn total_ages(self, json: Vec<Coder>) -> u64 {
        match self {
            Self::V1 => variants::imperative_loop(&json),
            Self::V2 => variants::fold_records(&json),
            Self::V3 => variants::map_then_fold(&json),
            Self::V4 => variants::staged(json),
            Self::V5 => variants::named_stages(json),
            Self::V6 => variants::stages_as_values(json),
            Self::V7 => variants::accessor_and_combiner(json),
            Self::V8 => variants::library_helpers(json),
            Self::V9 => variants::point_free_stages(json),
            Self::V10 => variants::pluck_and_sum(json),
            Self::V11 => variants::total_ages()(json),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "v{}", self.number())
    }
}

/// Error returned when a variant name cannot be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown variant `{0}`, expected v1..v11")]
pub struct ParseVariantError(String);

impl FromStr for Variant {
    type Err = ParseVariantError;

    /// Accepts `"v7"`, `"V7"` or `"7"`.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        let digits = trimmed
            .strip_prefix(['v', 'V'])
            .unwrap_or(trimmed);

        digits
            .parse::<usize>()
            .ok()
            .and_then(Self::from_number)
            .ok_or_else(|| ParseVariantError(text.to_owned()))
    }
}

static_assertions::assert_impl_all!(Coder: Send, Sync);
static_assertions::assert_impl_all!(Variant: Send, Sync, Copy);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_records_with_extra_fields() {
        let json = r#"[{"name":"ada","age":36,"language":"rust"},{"age":19}]"#;
        let coders: Vec<Coder> = serde_json::from_str(json).unwrap();
        assert_eq!(coders, vec![Coder::new("ada", 36), Coder::anonymous(19)]);
    }

    #[test]
    fn rejects_record_without_age() {
        let result = serde_json::from_str::<Vec<Coder>>(r#"[{"name":"ada"}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_age_beyond_u32() {
        let result = serde_json::from_str::<Vec<Coder>>(r#"[{"age":18446744073709551615}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn numbers_round_trip_through_display() {
        for variant in Variant::ALL {
            assert_eq!(variant.to_string().parse::<Variant>(), Ok(variant));
        }
    }

    #[test]
    fn out_of_range_numbers_are_rejected() {
        assert_eq!(Variant::from_number(0), None);
        assert_eq!(Variant::from_number(12), None);
        assert!("v0".parse::<Variant>().is_err());
        assert!("eleven".parse::<Variant>().is_err());
    }
}
