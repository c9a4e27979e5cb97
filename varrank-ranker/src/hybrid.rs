//! Haplotype-aware ranking.
//!
//! A haplotype's sequence around a variant can only be spelled by the graph if every
//! alternate allele it carries inside the window is in the graph. Starting from an
//! empty graph, the variant whose addition makes the largest fraction of haplotypes
//! representable is ranked next. After each pick, only the variants sharing its
//! window change gain, so candidates live in a max-heap and stale entries are
//! skipped by version stamp.
//!
//! With a blowup penalty, the gain is further multiplied by
//! `threshold ^ (ranked variants already in the window)`.
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

use varrank_core::models::{Phasing, VariantTable};

use crate::popcov::order_by_weight;
use crate::windows::Window;

#[derive(Debug, PartialEq)]
struct Candidate {
    gain: f64,
    row: usize,
    version: u32,
}

impl Eq for Candidate {}

impl Ord for Candidate {
    // higher gain first, then lower row
    fn cmp(&self, other: &Self) -> Ordering {
        self.gain
            .total_cmp(&other.gain)
            .then_with(|| other.row.cmp(&self.row))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

///
/// For every row, the window rows whose alleles decide whether a haplotype is
/// representable: all other rows of the window, pruned to the `max_v - 1` nearest
/// (ties broken by lower row) so that at most `max_v` variants count per window.
///
pub fn build_contexts(table: &VariantTable, windows: &[Window], max_v: usize) -> Vec<Vec<usize>> {
    let keep = max_v.saturating_sub(1);

    windows
        .iter()
        .enumerate()
        .map(|(v, window)| {
            let pos_v = table.variants[v].pos;
            let mut others: Vec<usize> = window.rows().filter(|&u| u != v).collect();
            if others.len() > keep {
                others.sort_by_key(|&u| (table.variants[u].pos.abs_diff(pos_v), u));
                others.truncate(keep);
                others.sort_unstable();
            }
            others
        })
        .collect()
}

struct GreedyState<'a> {
    phasing: &'a Phasing,
    windows: &'a [Window],
    contexts: &'a [Vec<usize>],
    threshold: Option<f64>,
    in_graph: Vec<bool>,
    added_in_window: Vec<usize>,
    versions: Vec<u32>,
}

impl<'a> GreedyState<'a> {
    fn new(
        phasing: &'a Phasing,
        windows: &'a [Window],
        contexts: &'a [Vec<usize>],
        threshold: Option<f64>,
    ) -> Self {
        let n = windows.len();
        GreedyState {
            phasing,
            windows,
            contexts,
            threshold,
            in_graph: vec![false; n],
            added_in_window: vec![0; n],
            versions: vec![0; n],
        }
    }

    /// Fraction of haplotypes that become representable around `row` once it is added
    fn coverage_gain(&self, row: usize) -> f64 {
        let num_haps = self.phasing.num_haplotypes();
        if num_haps == 0 {
            return 0.0;
        }

        let context = &self.contexts[row];
        let covered = (0..num_haps)
            .filter(|&hap| self.phasing.allele(row, hap) != 0)
            .filter(|&hap| {
                context
                    .iter()
                    .all(|&u| self.in_graph[u] || self.phasing.allele(u, hap) == 0)
            })
            .count();

        covered as f64 / num_haps as f64
    }

    fn gain(&self, row: usize) -> f64 {
        let gain = self.coverage_gain(row);
        match self.threshold {
            Some(t) => gain * t.powf(self.added_in_window[row] as f64),
            None => gain,
        }
    }

    fn candidate(&self, row: usize) -> Candidate {
        Candidate {
            gain: self.gain(row),
            row,
            version: self.versions[row],
        }
    }

    /// Add `row` to the graph and return the rows whose gain may have changed
    fn add(&mut self, row: usize) -> Vec<usize> {
        self.in_graph[row] = true;

        let window = self.windows[row];
        let mut touched = Vec::with_capacity(window.neighbors());
        for u in window.rows() {
            if u == row {
                continue;
            }
            self.added_in_window[u] += 1;
            if !self.in_graph[u] {
                self.versions[u] += 1;
                touched.push(u);
            }
        }
        touched
    }
}

fn greedy_order(
    phasing: &Phasing,
    windows: &[Window],
    contexts: &[Vec<usize>],
    weights: &[f64],
    threshold: Option<f64>,
    progress: &ProgressBar,
) -> Vec<usize> {
    let n = windows.len();
    let mut state = GreedyState::new(phasing, windows, contexts, threshold);
    let mut heap: BinaryHeap<Candidate> = (0..n).map(|row| state.candidate(row)).collect();
    let mut ordered: Vec<usize> = Vec::with_capacity(n);

    while let Some(top) = heap.pop() {
        if state.in_graph[top.row] || top.version != state.versions[top.row] {
            continue;
        }
        // every unranked row has an up-to-date entry, so nothing gains anymore
        if top.gain <= 0.0 {
            break;
        }

        ordered.push(top.row);
        progress.inc(1);
        for u in state.add(top.row) {
            heap.push(state.candidate(u));
        }
    }

    let greedy_picks = ordered.len();
    ordered.extend(
        order_by_weight(weights)
            .into_iter()
            .filter(|&row| !state.in_graph[row]),
    );
    progress.inc((n - greedy_picks) as u64);
    debug!(
        "Greedy ranking placed {} of {} variants, the rest follow by base weight",
        greedy_picks, n
    );

    ordered
}

///
/// Rank rows with the hybrid strategy.
///
/// # Returns
/// `(ordered, ordered_blowup)`: the plain greedy order and the order with blowup
/// penalty. Both are permutations of all rows.
///
pub fn rank_hybrid(
    table: &VariantTable,
    windows: &[Window],
    phasing: &Phasing,
    weights: &[f64],
    max_v: usize,
    threshold: f64,
) -> (Vec<usize>, Vec<usize>) {
    let contexts = build_contexts(table, windows, max_v);

    let progress = ProgressBar::new(2 * table.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar().template("[{elapsed}] {bar:40} {pos}/{len} {msg}") {
        progress.set_style(style);
    }
    progress.set_message("hybrid ranking");

    let ordered = greedy_order(phasing, windows, &contexts, weights, None, &progress);
    let ordered_blowup = greedy_order(
        phasing,
        windows,
        &contexts,
        weights,
        Some(threshold),
        &progress,
    );
    progress.finish_and_clear();

    (ordered, ordered_blowup)
}
