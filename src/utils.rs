use crate::data::Dataset;
use std::collections::BTreeMap;

/// Shannon entropy, in bits, of the label distribution of a dataset.
///
/// The entropy of a view with a single distinct label is `0.0`. An empty
/// view has no distribution and also yields `0.0`; the tree builder never
/// asks for it.
pub fn entropy(data: &Dataset) -> f64 {
    let total = data.n_rows() as f64;
    data.class_counts().values().fold(0.0, |entropy, &count| {
        let p = count as f64 / total;
        entropy - p * p.log2()
    })
}

/// Reduction in entropy from partitioning `data` on attribute `attr`.
///
/// Mathematically within `[0, entropy(data)]`, rounding can push it a few
/// ulps below zero.
pub fn information_gain(data: &Dataset, attr: usize) -> f64 {
    let total = data.n_rows() as f64;
    data.unique_values(attr)
        .into_iter()
        .fold(entropy(data), |gain, value| {
            let subset = data.filter(attr, value);
            gain - (subset.n_rows() as f64 / total) * entropy(&subset)
        })
}

/// Most common label. Counts iterate in lexicographic label order and
/// only a strictly greater count replaces the current best, so ties go to
/// the lexicographically first label.
pub fn majority_label<'a>(counts: &BTreeMap<&'a str, usize>) -> Option<&'a str> {
    counts
        .iter()
        .fold(None, |best: Option<(&'a str, usize)>, (&label, &count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((label, count)),
        })
        .map(|(label, _)| label)
}

pub fn precision_round(n: f64, precision: i32) -> f64 {
    let p = (10.0_f64).powi(precision);
    (n * p).round() / p
}
