use crate::data::Dataset;
use crate::utils::information_gain;
use std::collections::BTreeSet;

/// The attribute chosen to split a node on, and the gain it achieves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitInfo {
    pub split_feature: usize,
    pub split_gain: f64,
}

/// Scores candidate attributes and picks the one to split a node on.
pub trait Splitter {
    /// Score of partitioning `data` on attribute `attr`, higher is better.
    fn split_gain(&self, data: &Dataset, attr: usize) -> f64;

    /// Find the best split among `candidates`.
    ///
    /// Candidates are scanned in ascending order and only a strictly greater
    /// gain replaces the current best, so on ties the lowest index wins.
    /// Non-finite gains are skipped. Returns `None` when no candidate has a
    /// finite gain, including when `candidates` is empty.
    fn best_split(&self, data: &Dataset, candidates: &BTreeSet<usize>) -> Option<SplitInfo> {
        let mut best: Option<SplitInfo> = None;
        for &attr in candidates {
            let gain = self.split_gain(data, attr);
            if !gain.is_finite() {
                continue;
            }
            match best {
                Some(b) if b.split_gain >= gain => {}
                _ => {
                    best = Some(SplitInfo {
                        split_feature: attr,
                        split_gain: gain,
                    })
                }
            }
        }
        best
    }
}

/// ID3 splitter, scoring attributes by information gain.
#[derive(Debug, Clone, Copy, Default)]
pub struct InformationGainSplitter;

impl Splitter for InformationGainSplitter {
    fn split_gain(&self, data: &Dataset, attr: usize) -> f64 {
        information_gain(data, attr)
    }
}
