/*!
Grid sampling.

A grid is two sample sequences, `x` of length `width` and `y` of length
`height`, linearly spaced across a [`Region`]. Every pair `(x[i], y[j])`
becomes a starting point and its escape count lands in cell `i * height + j`
of the output field.

The starting point is `y[j] + x[i]·i`: the x-sample is the *imaginary* part
and the y-sample the *real* part. Consumers that draw the field with `i` as
the horizontal screen axis get the imaginary axis running horizontally.
*/

use bytemuck::{Pod, Zeroable};
use log::{debug, trace};
use num_complex::Complex64;
use rayon::prelude::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};
use rayon::slice::ParallelSliceMut;

use crate::{
    config::{GridConfig, Strategy},
    error::{Error, Result},
    escape::{escape_boundary, estimate},
    field::CountField,
};

/// Rectangle of the complex plane covered by a grid, in sample coordinates.
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Region {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        Self {
            xmin,
            xmax,
            ymin,
            ymax,
        }
    }

    /// `[-radius, radius] x [-radius, radius]`.
    pub fn square(radius: f64) -> Self {
        Self::new(-radius, radius, -radius, radius)
    }

    /// The default window for `param`: the square bounding the escape boundary.
    pub fn bounding(param: Complex64) -> Self {
        Self::square(escape_boundary(param))
    }

    pub fn validate(&self) -> Result<()> {
        let finite = [self.xmin, self.xmax, self.ymin, self.ymax]
            .iter()
            .all(|bound| bound.is_finite());
        if !finite || self.xmin >= self.xmax || self.ymin >= self.ymax {
            return Err(Error::InvalidRegion {
                xmin: self.xmin,
                xmax: self.xmax,
                ymin: self.ymin,
                ymax: self.ymax,
            });
        }
        Ok(())
    }
}

/// Where the y-sample sequence starts.
///
/// [`GridConfig`] picks `Shared` for the default window and `Independent`
/// for a custom region unless told otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrigin {
    /// Start the y-samples at the region's `xmin`, stepping by the y span.
    ///
    /// This reproduces the historical sampler, which reused the x minimum for
    /// both axes. On the default square window `xmin == ymin`, so the result
    /// is the same either way.
    Shared,
    /// Start the y-samples at the region's own `ymin`.
    Independent,
}

/// `n` values from `min` stepping by `(max - min) / (n - 1)`. Requires `n > 1`.
pub(crate) fn linspace(min: f64, max: f64, n: u32) -> Vec<f64> {
    debug_assert!(n > 1);
    let step = (max - min) / (n - 1) as f64;
    (0..n).map(|k| min + k as f64 * step).collect()
}

/// The x- and y-sample sequences of a grid.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Axes {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Axes {
    pub fn new(region: &Region, width: u32, height: u32, origin: AxisOrigin) -> Self {
        let window = Self::window(region, origin);
        let x = linspace(window.xmin, window.xmax, width);
        let y = linspace(window.ymin, window.ymax, height);
        Self { x, y }
    }

    /// The window the samples actually span. Under [`AxisOrigin::Shared`]
    /// the y range is shifted to start at `xmin`.
    pub fn window(region: &Region, origin: AxisOrigin) -> Region {
        match origin {
            AxisOrigin::Shared => Region::new(
                region.xmin,
                region.xmax,
                region.xmin,
                region.xmin + (region.ymax - region.ymin),
            ),
            AxisOrigin::Independent => *region,
        }
    }
}

/**
Escape counts for a `width x height` grid over the square bounding the
escape boundary of `param`.

The returned vector has `width * height` entries; entry `i * height + j`
holds the count for x-sample `i` and y-sample `j` (for square grids this is
the `i * width + j` layout). Fails with [`Error::InvalidDimension`] when
either dimension is below 2.
*/
pub fn sample_grid(param: Complex64, width: u32, height: u32, maxit: u32) -> Result<Vec<u32>> {
    GridConfig::new(param)
        .with_size(width, height)
        .with_max_iterations(maxit)
        .sample()
        .map(CountField::into_counts)
}

pub(crate) fn sample(config: &GridConfig) -> Result<CountField> {
    let size = config.size;
    size.validate()?;
    let region = config.region();
    region.validate()?;

    let cells = size.cells()?;
    let mut counts: Vec<u32> = Vec::new();
    counts
        .try_reserve_exact(cells)
        .map_err(|_| Error::AllocationFailure {
            cells: cells as u128,
        })?;
    counts.resize(cells, 0);

    let origin = config.axis_origin();
    let window = Axes::window(&region, origin);
    let axes = Axes::new(&region, size.width, size.height, origin);
    let column = size.height as usize;
    let param = config.param;
    let maxit = config.max_iterations;

    debug!(
        "sampling {}x{} grid for c={} over {:?} (maxit={}, {:?})",
        size.width, size.height, param, window, maxit, config.strategy
    );
    trace!("begin sample");

    match config.strategy {
        Strategy::Sequential => {
            counts
                .chunks_mut(column)
                .zip(axes.x.iter())
                .for_each(|(row, &x)| fill_row(row, x, &axes.y, param, maxit));
        }
        Strategy::Parallel { threads } => {
            let threads = threads.unwrap_or_else(num_cpus::get).max(1);
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()?;
            pool.install(|| {
                counts
                    .par_chunks_mut(column)
                    .zip(axes.x.par_iter())
                    .for_each(|(row, &x)| fill_row(row, x, &axes.y, param, maxit));
            });
        }
    }

    trace!("end sample");

    Ok(CountField::new(size, maxit, window, counts))
}

fn fill_row(row: &mut [u32], x: f64, ys: &[f64], param: Complex64, maxit: u32) {
    debug_assert_eq!(row.len(), ys.len());
    for (cell, &y) in row.iter_mut().zip(ys) {
        // x-sample is the imaginary part, y-sample the real part.
        *cell = estimate(Complex64::new(y, x), param, maxit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Axis;

    const ZERO: Complex64 = Complex64::new(0.0, 0.0);

    #[test]
    fn linspace_includes_both_ends() {
        assert_eq!(linspace(-1.0, 1.0, 3), vec![-1.0, 0.0, 1.0]);
        assert_eq!(linspace(0.0, 3.0, 4), vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn shared_origin_starts_y_at_xmin() {
        let region = Region::new(-2.0, 2.0, 0.0, 1.0);
        let shared = Axes::new(&region, 3, 3, AxisOrigin::Shared);
        assert_eq!(shared.y, vec![-2.0, -1.5, -1.0]);

        let independent = Axes::new(&region, 3, 3, AxisOrigin::Independent);
        assert_eq!(independent.y, vec![0.0, 0.5, 1.0]);
        assert_eq!(shared.x, independent.x);
    }

    #[test]
    fn origins_agree_on_default_window() {
        let region = Region::bounding(Complex64::new(0.285, 0.01));
        assert_eq!(
            Axes::new(&region, 7, 5, AxisOrigin::Shared),
            Axes::new(&region, 7, 5, AxisOrigin::Independent)
        );
    }

    #[test]
    fn three_by_three_at_zero_parameter() {
        let counts = sample_grid(ZERO, 3, 3, 10).unwrap();
        assert_eq!(counts.len(), 9);
        assert_eq!(counts[1 * 3 + 1], 10);
        // Every sample has |z0| <= 1 except the corners, |z0| = sqrt(2).
        assert_eq!(counts, vec![0, 10, 0, 10, 10, 10, 0, 10, 0]);
    }

    #[test]
    fn x_sample_feeds_the_imaginary_part() {
        // With c = -1, z0 = 1 falls into the 0, -1 cycle while z0 = i jumps
        // straight to -2 and escapes. That separates the two axes.
        let field = GridConfig::new(Complex64::new(-1.0, 0.0))
            .with_size(2, 2)
            .with_max_iterations(5)
            .with_region(Region::new(0.0, 1.0, 0.0, 1.0))
            .sample()
            .unwrap();
        // i = 0 is x = 0: z0 in {0, 1}, both bounded.
        assert_eq!(field.get(0, 0), Some(5));
        assert_eq!(field.get(0, 1), Some(5));
        // i = 1 is x = 1: z0 = i and 1 + i, both escape at once.
        assert_eq!(field.get(1, 0), Some(0));
        assert_eq!(field.get(1, 1), Some(0));
    }

    #[test]
    fn reported_window_matches_every_cell() {
        let param = Complex64::new(0.285, 0.01);
        let region = Region::new(-1.5, 1.5, 0.0, 1.0);
        for origin in [None, Some(AxisOrigin::Shared), Some(AxisOrigin::Independent)] {
            let mut config = GridConfig::new(param)
                .with_size(9, 9)
                .with_max_iterations(40)
                .with_region(region);
            if let Some(origin) = origin {
                config = config.with_axis_origin(origin);
            }
            let field = config.sample().unwrap();
            let window = field.region();
            let xs = linspace(window.xmin, window.xmax, 9);
            let ys = linspace(window.ymin, window.ymax, 9);
            for sample in field.samples() {
                let z0 = Complex64::new(ys[sample.y_index as usize], xs[sample.x_index as usize]);
                assert_eq!(sample.count, estimate(z0, param, 40), "{:?}", origin);
            }
        }

        let field = GridConfig::new(param)
            .with_size(9, 9)
            .with_region(region)
            .sample()
            .unwrap();
        assert_eq!(field.region(), region);

        let shared = GridConfig::new(param)
            .with_size(9, 9)
            .with_region(region)
            .with_axis_origin(AxisOrigin::Shared)
            .sample()
            .unwrap();
        assert_eq!(shared.region(), Region::new(-1.5, 1.5, -1.5, -0.5));
    }

    #[test]
    fn oversized_grid_is_an_allocation_failure() {
        assert!(matches!(
            sample_grid(ZERO, u32::MAX, u32::MAX, 1),
            Err(Error::AllocationFailure { .. })
        ));
    }

    #[test]
    fn degenerate_dimensions_fail() {
        assert!(matches!(
            sample_grid(ZERO, 1, 4, 10),
            Err(Error::InvalidDimension { axis: Axis::X, .. })
        ));
        assert!(matches!(
            sample_grid(ZERO, 4, 1, 10),
            Err(Error::InvalidDimension { axis: Axis::Y, .. })
        ));
    }

    #[test]
    fn bad_region_fails() {
        let result = GridConfig::new(ZERO)
            .with_size(4, 4)
            .with_region(Region::new(1.0, -1.0, -1.0, 1.0))
            .sample();
        assert!(matches!(result, Err(Error::InvalidRegion { .. })));

        let result = GridConfig::new(ZERO)
            .with_size(4, 4)
            .with_region(Region::new(-1.0, 1.0, f64::NAN, 1.0))
            .sample();
        assert!(matches!(result, Err(Error::InvalidRegion { .. })));
    }

    #[test]
    fn parallel_matches_sequential() {
        let config = GridConfig::new(Complex64::new(-0.7, 0.27015))
            .with_size(33, 21)
            .with_max_iterations(80);
        let sequential = config.clone().sample().unwrap();
        let parallel = config
            .with_strategy(Strategy::Parallel { threads: Some(3) })
            .sample()
            .unwrap();
        assert_eq!(sequential, parallel);
    }
}
