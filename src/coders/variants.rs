//! The age-summation task, written eleven ways.
//!
//! Each function takes the decoded JSON array and returns the total age.
//! They differ only in style, moving from an index loop towards a single
//! composed, point-free function. The asynchronous versions in
//! [`challenge`](crate::challenge) chain these same stages behind a fetch.

use crate::compose;
use crate::curried::{add, map, pluck, prop, reduce, sum};

use super::Coder;

/// v1: index loop with a mutable accumulator.
#[allow(clippy::needless_range_loop)]
pub fn imperative_loop(json: &[Coder]) -> u64 {
    let mut age = 0;

    for index in 0..json.len() {
        age += json[index].age();
    }

    age
}

/// v2: a single fold straight over the records.
pub fn fold_records(json: &[Coder]) -> u64 {
    json.iter().fold(0, |total, coder| total + coder.age())
}

/// v3: map to ages, then fold.
pub fn map_then_fold(json: &[Coder]) -> u64 {
    json.iter()
        .map(|coder| coder.age())
        .fold(0, |total, age| total + age)
}

/// v4: map and fold as two separate stages with inline closures.
pub fn staged(json: Vec<Coder>) -> u64 {
    let ages: Vec<u64> = json.into_iter().map(|coder| coder.age()).collect();
    ages.into_iter().fold(0, |total, age| total + age)
}

/// v5 stage: every coder's age.
pub fn get_ages(json: Vec<Coder>) -> Vec<u64> {
    json.into_iter().map(|coder| coder.age()).collect()
}

/// v5 stage: the sum of a list of ages.
pub fn add_ages(ages: Vec<u64>) -> u64 {
    ages.into_iter().fold(0, |total, age| total + age)
}

/// v5: named stages called one after the other.
pub fn named_stages(json: Vec<Coder>) -> u64 {
    let ages = get_ages(json);
    add_ages(ages)
}

/// v6: the named stages passed around as values.
pub fn stages_as_values(json: Vec<Coder>) -> u64 {
    let get_ages = |json: Vec<Coder>| json.into_iter().map(|coder| coder.age()).collect::<Vec<_>>();
    let add_ages = |ages: Vec<u64>| ages.into_iter().fold(0, |total, age| total + age);

    add_ages(get_ages(json))
}

/// v7 accessor.
#[inline]
pub fn get_age(coder: &Coder) -> u64 {
    coder.age()
}

/// v7 combiner.
#[inline]
pub const fn add_to_total(total: u64, age: u64) -> u64 {
    total + age
}

/// v7: stages built from a named accessor and a named combiner.
pub fn accessor_and_combiner(json: Vec<Coder>) -> u64 {
    let ages: Vec<u64> = json.iter().map(get_age).collect();
    ages.into_iter().fold(0, add_to_total)
}

/// v8: library helpers applied to the data.
pub fn library_helpers(json: Vec<Coder>) -> u64 {
    let ages: Vec<u64> = json.into_iter().map(prop(Coder::age)).collect();
    ages.into_iter().fold(0, add)
}

/// v9: point-free stages, `map(prop(age))` and `reduce(add, 0)`.
pub fn point_free_stages(json: Vec<Coder>) -> u64 {
    let get_ages = map(prop(Coder::age));
    let add_ages = reduce(add, 0);

    add_ages(get_ages(json))
}

/// v10: `pluck(age)` then `sum`.
pub fn pluck_and_sum(json: Vec<Coder>) -> u64 {
    sum(pluck(Coder::age)(json))
}

/// v11: one composed function, `compose!(sum, pluck(age))`.
pub fn total_ages() -> impl Fn(Vec<Coder>) -> u64 {
    compose!(sum, pluck(Coder::age))
}
