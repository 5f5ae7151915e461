use bytemuck::{Pod, Zeroable};

use crate::{grid::Region, screen::Size};

/// One cell of a [`CountField`].
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sample {
    pub x_index: u32,
    pub y_index: u32,
    pub count: u32,
}

/// Escape counts for a sampled grid, together with how they were produced.
///
/// Cell `(i, j)` (x-sample `i`, y-sample `j`) is stored at `i * height + j`.
#[derive(Debug, Clone, PartialEq)]
pub struct CountField {
    size: Size,
    max_iterations: u32,
    region: Region,
    counts: Vec<u32>,
}

impl CountField {
    pub(crate) fn new(size: Size, max_iterations: u32, region: Region, counts: Vec<u32>) -> Self {
        debug_assert_eq!(
            counts.len(),
            size.width as usize * size.height as usize
        );
        Self {
            size,
            max_iterations,
            region,
            counts,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn get(&self, x_index: u32, y_index: u32) -> Option<u32> {
        if x_index >= self.size.width || y_index >= self.size.height {
            return None;
        }
        self.counts
            .get(x_index as usize * self.size.height as usize + y_index as usize)
            .copied()
    }

    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    pub fn into_counts(self) -> Vec<u32> {
        self.counts
    }

    /// Native-endian bytes of the counts, for handing to an encoder.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.counts)
    }

    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        let height = self.size.height as usize;
        self.counts
            .iter()
            .enumerate()
            .map(move |(index, &count)| Sample {
                x_index: (index / height) as u32,
                y_index: (index % height) as u32,
                count,
            })
    }
}
