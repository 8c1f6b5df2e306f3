//! Dense pairwise matrices. O(n²) memory; callers size-limit large boards.

use serde::{Deserialize, Serialize};

use crate::constants::SYMMETRY_TOLERANCE;

/// N×N similarity matrix with values in [0, 1], symmetric, zero diagonal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityMatrix {
    size: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// An all-zero matrix.
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            values: vec![0.0; size * size],
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.size + j]
    }

    /// Set both (i, j) and (j, i). Diagonal writes are ignored; values are clamped to [0, 1].
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        if i == j {
            return;
        }
        let v = if value.is_finite() {
            value.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.values[i * self.size + j] = v;
        self.values[j * self.size + i] = v;
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.size..(i + 1) * self.size]
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| {
            self.get(i, i) == 0.0
                && (i + 1..self.size)
                    .all(|j| (self.get(i, j) - self.get(j, i)).abs() <= SYMMETRY_TOLERANCE)
        })
    }

    /// Mean over all off-diagonal pairs; 0 for fewer than two points.
    pub fn mean_off_diagonal(&self) -> f64 {
        if self.size < 2 {
            return 0.0;
        }
        let mut sum = 0.0;
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                sum += self.get(i, j);
            }
        }
        sum / (self.size * (self.size - 1) / 2) as f64
    }

    /// Mean pairwise similarity within a set of points. Singletons count as fully cohesive.
    pub fn mean_within(&self, members: &[usize]) -> f64 {
        if members.len() < 2 {
            return if members.is_empty() { 0.0 } else { 1.0 };
        }
        let mut sum = 0.0;
        let mut pairs = 0usize;
        for (a, &i) in members.iter().enumerate() {
            for &j in &members[a + 1..] {
                sum += self.get(i, j);
                pairs += 1;
            }
        }
        sum / pairs as f64
    }

    pub fn to_distances(&self) -> DistanceMatrix {
        DistanceMatrix::from_similarity(self)
    }
}

/// N×N distance matrix: d(i, i) = 0, d(i, j) = 1 − s(i, j).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceMatrix {
    size: usize,
    values: Vec<f64>,
}

impl DistanceMatrix {
    pub fn from_similarity(similarity: &SimilarityMatrix) -> Self {
        let size = similarity.len();
        let mut values = vec![0.0; size * size];
        for i in 0..size {
            for j in 0..size {
                if i != j {
                    values[i * size + j] = 1.0 - similarity.get(i, j);
                }
            }
        }
        Self { size, values }
    }

    /// Build from explicit rows. Returns `None` unless the rows form a square matrix.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|r| r.len() != size) {
            return None;
        }
        Some(Self {
            size,
            values: rows.into_iter().flatten().collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.size + j]
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.size..(i + 1) * self.size]
    }

    /// Mean distance from `point` to the other members of `members`.
    pub fn mean_distance_to(&self, point: usize, members: &[usize]) -> f64 {
        let others: Vec<usize> = members.iter().copied().filter(|&m| m != point).collect();
        if others.is_empty() {
            return 0.0;
        }
        others.iter().map(|&m| self.get(point, m)).sum::<f64>() / others.len() as f64
    }
}
