//! Response aggregation.
//!
//! Groups responses by dimension, computes per-dimension means and the
//! overall score, and selects the lowest-scoring dimension. Every function
//! here is a pure, total, deterministic mapping over pre-constrained input;
//! no state survives between submissions.

use crate::catalog::ITEMS;
use crate::models::{Dimension, DimensionScore, Profile, Response};
use std::collections::BTreeMap;

/// Group responses by the dimension of the item they answer.
///
/// Every dimension key is present in the result, so downstream means are
/// always defined. Responses whose index falls outside the catalog are
/// ignored; the collector never produces one.
pub fn group_by_dimension(responses: &[Response]) -> BTreeMap<Dimension, Vec<u8>> {
    let mut grouped: BTreeMap<Dimension, Vec<u8>> =
        Dimension::ALL.iter().map(|&d| (d, Vec::new())).collect();

    for response in responses {
        if let Some(entry) = ITEMS.get(response.item_index) {
            grouped
                .entry(entry.dimension)
                .or_default()
                .push(response.value);
        }
    }

    grouped
}

/// Arithmetic mean of one dimension's responses, in IEEE double precision.
///
/// An empty group yields 0.0 by convention. The fixed catalog gives every
/// dimension at least four items, so the fallback is unreachable in the
/// normal pipeline.
fn mean_of(values: &[u8]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|&v| f64::from(v)).sum::<f64>() / values.len() as f64
}

/// Compute the mean for each dimension. All five keys are always present.
pub fn dimension_means(grouped: &BTreeMap<Dimension, Vec<u8>>) -> BTreeMap<Dimension, f64> {
    Dimension::ALL
        .iter()
        .map(|&d| {
            let values = grouped.get(&d).map(Vec::as_slice).unwrap_or(&[]);
            (d, mean_of(values))
        })
        .collect()
}

/// The overall score: the unweighted mean of the five dimension means.
///
/// This deliberately averages the dimension means rather than the 23 raw
/// responses, so the four-item dimensions (R, M) carry the same weight as
/// the five-item ones (P, E, A).
pub fn overall_score(means: &BTreeMap<Dimension, f64>) -> f64 {
    if means.is_empty() {
        return 0.0;
    }
    means.values().sum::<f64>() / means.len() as f64
}

/// Build the complete profile for one submission.
///
/// The lowest-scoring dimension is read off the profile itself
/// ([`Profile::lowest_dimension`]); ties break toward canonical order.
pub fn build_profile(responses: &[Response]) -> Profile {
    let grouped = group_by_dimension(responses);
    let means = dimension_means(&grouped);
    let overall = overall_score(&means);

    let scores = means
        .into_iter()
        .map(|(dimension, mean)| (dimension, DimensionScore { dimension, mean }))
        .collect();

    Profile { scores, overall }
}
