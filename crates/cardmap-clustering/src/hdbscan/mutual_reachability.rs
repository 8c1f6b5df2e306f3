//! Core distances and mutual reachability.

use cardmap_core::models::DistanceMatrix;

/// Distance from each point to its `k`-th nearest other point.
/// With fewer than `k` other points the farthest one is used; a lone point has core distance 0.
pub fn core_distances(distances: &DistanceMatrix, k: usize) -> Vec<f64> {
    let n = distances.len();
    (0..n)
        .map(|p| {
            let mut others: Vec<f64> = distances
                .row(p)
                .iter()
                .enumerate()
                .filter(|&(q, _)| q != p)
                .map(|(_, &d)| d)
                .collect();
            if others.is_empty() {
                return 0.0;
            }
            others.sort_by(f64::total_cmp);
            let idx = k.clamp(1, others.len()) - 1;
            others[idx]
        })
        .collect()
}

/// `max(core(a), core(b), d(a, b))` for every pair, zero on the diagonal.
pub fn mutual_reachability(distances: &DistanceMatrix, core: &[f64]) -> DistanceMatrix {
    let n = distances.len();
    let rows: Vec<Vec<f64>> = (0..n)
        .map(|a| {
            (0..n)
                .map(|b| {
                    if a == b {
                        0.0
                    } else {
                        core[a].max(core[b]).max(distances.get(a, b))
                    }
                })
                .collect()
        })
        .collect();
    // rows are n × n by construction
    DistanceMatrix::from_rows(rows).unwrap_or_else(|| distances.clone())
}
