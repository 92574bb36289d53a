//! The age challenge as asynchronous pipelines.
//!
//! Every variant fetches the coders array and sums its ages. Variants 1-3
//! do all the work in a single continuation; from variant 4 on, each stage
//! is its own continuation, so `.then(getAges).then(addAges)` becomes
//! `.map_ok(get_ages).map_ok(add_ages)`. A failed fetch short-circuits the
//! chain and comes back as `Err`.
//!
//! ```
//! use lambda_lessons::challenge;
//! use lambda_lessons::coders::Variant;
//! use lambda_lessons::fetch::MemorySource;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let source = MemorySource::new()
//!     .with_document("/coders.json", r#"[{"age": 30}, {"age": 12}]"#);
//!
//! let total = challenge::total_ages(&source, "/coders.json", Variant::V11).await;
//! assert_eq!(total.unwrap(), 42);
//! # });
//! ```

use futures::TryFutureExt;
use tracing::{debug, instrument};

use crate::coders::variants::{
    add_ages, add_to_total, fold_records, get_age, get_ages, imperative_loop, map_then_fold,
};
use crate::coders::{Coder, Variant};
use crate::curried::{add, map, pluck, prop, reduce, sum};
use crate::fetch::{FetchError, JsonSource};

/// Fetches the coders at `path` and totals their ages the way `variant` does.
///
/// # Errors
///
/// Propagates the [`FetchError`] of the fetch; the summation itself cannot fail.
#[instrument(skip(source))]
pub async fn total_ages<S>(source: &S, path: &str, variant: Variant) -> Result<u64, FetchError>
where
    S: JsonSource,
{
    let fetch = move || source.fetch_json::<Vec<Coder>>(path);

    let total = match variant {
        Variant::V1 => fetch().map_ok(|json| imperative_loop(&json)).await?,
        Variant::V2 => fetch().map_ok(|json| fold_records(&json)).await?,
        Variant::V3 => fetch().map_ok(|json| map_then_fold(&json)).await?,
        Variant::V4 => {
            fetch()
                .map_ok(|json| json.into_iter().map(|coder| coder.age()).collect::<Vec<_>>())
                .map_ok(|ages| ages.into_iter().fold(0, |total, age| total + age))
                .await?
        }
        #[allow(clippy::redundant_closure)]
        Variant::V5 => {
            fetch()
                .map_ok(|json| get_ages(json))
                .map_ok(|ages| add_ages(ages))
                .await?
        }
        Variant::V6 => fetch().map_ok(get_ages).map_ok(add_ages).await?,
        Variant::V7 => {
            let get_ages = |json: Vec<Coder>| json.iter().map(get_age).collect::<Vec<_>>();
            let add_ages = |ages: Vec<u64>| ages.into_iter().fold(0, add_to_total);
            fetch().map_ok(get_ages).map_ok(add_ages).await?
        }
        Variant::V8 => {
            let get_ages = |json: Vec<Coder>| {
                json.into_iter()
                    .map(prop(Coder::age))
                    .collect::<Vec<_>>()
            };
            let add_ages = |ages: Vec<u64>| ages.into_iter().fold(0, add);
            fetch().map_ok(get_ages).map_ok(add_ages).await?
        }
        Variant::V9 => {
            fetch()
                .map_ok(map(prop(Coder::age)))
                .map_ok(reduce(add, 0))
                .await?
        }
        Variant::V10 => fetch().map_ok(pluck(Coder::age)).map_ok(sum).await?,
        Variant::V11 => {
            let total_ages = crate::coders::variants::total_ages();
            fetch().map_ok(total_ages).await?
        }
    };

    debug!(total, "summed coder ages");
    Ok(total)
}

/// Runs every variant against the same document, in order.
///
/// The document is fetched once per variant, as each variant is a
/// self-contained program.
///
/// # Errors
///
/// Stops at the first [`FetchError`].
pub async fn total_ages_all<S>(source: &S, path: &str) -> Result<Vec<(Variant, u64)>, FetchError>
where
    S: JsonSource,
{
    let mut totals = Vec::with_capacity(Variant::ALL.len());
    for variant in Variant::ALL {
        totals.push((variant, total_ages(source, path, variant).await?));
    }
    Ok(totals)
}

/// Whether every variant produced the same total.
pub fn totals_agree(totals: &[(Variant, u64)]) -> bool {
    totals.windows(2).all(|pair| pair[0].1 == pair[1].1)
}
