use num_complex::Complex64;

use crate::{
    error::Result,
    field::CountField,
    grid::{self, AxisOrigin, Region},
    screen::Size,
};

pub const DEFAULT_WIDTH: u32 = 400;
pub const DEFAULT_HEIGHT: u32 = 400;
pub const DEFAULT_MAX_ITERATIONS: u32 = 64;

/// How the cells of a grid are evaluated. Both produce identical fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    #[default]
    Sequential,
    /// x-rows dispatched to a worker pool; `None` uses one worker per CPU.
    Parallel { threads: Option<usize> },
}

/// Everything needed to sample one Julia-set grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    pub param: Complex64,
    pub size: Size,
    pub max_iterations: u32,
    pub region: Option<Region>,
    /// `None` follows the region: shared for the default window, independent for a custom one.
    pub axis_origin: Option<AxisOrigin>,
    pub strategy: Strategy,
}

impl GridConfig {
    pub fn new(param: Complex64) -> Self {
        Self {
            param,
            size: Size::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            region: None,
            axis_origin: None,
            strategy: Strategy::default(),
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = Size::new(width, height);
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sample `region` instead of the square bounding the escape boundary.
    ///
    /// Unless an origin is set explicitly, the y-samples then span the
    /// region's own `[ymin, ymax]`.
    pub fn with_region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    pub fn with_axis_origin(mut self, axis_origin: AxisOrigin) -> Self {
        self.axis_origin = Some(axis_origin);
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// The window that will be sampled.
    pub fn region(&self) -> Region {
        self.region.unwrap_or_else(|| Region::bounding(self.param))
    }

    pub fn axis_origin(&self) -> AxisOrigin {
        self.axis_origin.unwrap_or(match self.region {
            Some(_) => AxisOrigin::Independent,
            None => AxisOrigin::Shared,
        })
    }

    pub fn sample(&self) -> Result<CountField> {
        grid::sample(self)
    }
}
