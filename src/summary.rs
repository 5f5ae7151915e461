//! Statistics over an iteration-count field.

use fnv::FnvHashMap;
use log::trace;

use crate::field::CountField;

/// Histogram of escape counts ([Wikipedia](https://en.wikipedia.org/wiki/Plotting_algorithms_for_the_Mandelbrot_set#Histogram_coloring)).
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total_samples: usize,
    pub min_count: u32,
    pub max_count: u32,
    /// Cells that reached the iteration cap.
    pub interior: usize,
    pub escaped: usize,
    bucket_labels: Vec<u32>,
    histogram: FnvHashMap<u32, u32>,
}

impl Summary {
    pub fn of(field: &CountField) -> Self {
        trace!("begin summary");

        let max_iterations = field.max_iterations();
        let mut bucket_labels: Vec<u32> = Vec::new();
        let mut histogram: FnvHashMap<u32, u32> = FnvHashMap::default();
        let mut interior = 0;

        for &count in field.counts() {
            let value = histogram.entry(count).or_insert_with(|| {
                bucket_labels.push(count);
                0
            });
            *value += 1;
            if count == max_iterations {
                interior += 1;
            }
        }
        bucket_labels.sort_unstable();

        let total_samples = field.counts().len();
        debug_assert_eq!(
            total_samples,
            histogram.values().map(|value| *value as usize).sum::<usize>()
        );

        trace!("end summary");

        Self {
            total_samples,
            min_count: bucket_labels.first().copied().unwrap_or(0),
            max_count: bucket_labels.last().copied().unwrap_or(0),
            interior,
            escaped: total_samples - interior,
            bucket_labels,
            histogram,
        }
    }

    /// Distinct counts present in the field, ascending.
    pub fn bucket_labels(&self) -> &[u32] {
        &self.bucket_labels
    }

    /// Number of cells holding exactly `count`.
    pub fn frequency(&self, count: u32) -> u32 {
        self.histogram.get(&count).copied().unwrap_or(0)
    }

    /// Fraction of cells with a count strictly below each bucket label.
    pub fn cumulative_fractions(&self) -> Vec<(u32, f64)> {
        let total_samples = self.total_samples as f64;
        let mut acc = 0;
        self.bucket_labels
            .iter()
            .map(|&label| {
                let fraction = acc as f64 / total_samples;
                acc += self.frequency(label);
                (label, fraction)
            })
            .collect()
    }
}
