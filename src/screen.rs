use bytemuck::{Pod, Zeroable};

use crate::error::{Axis, Error, Result};

/// Number of x-samples (`width`) and y-samples (`height`) in a grid.
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Both axes need two samples to define a step.
    pub fn validate(&self) -> Result<()> {
        if self.width <= 1 {
            return Err(Error::InvalidDimension {
                axis: Axis::X,
                value: self.width,
            });
        }
        if self.height <= 1 {
            return Err(Error::InvalidDimension {
                axis: Axis::Y,
                value: self.height,
            });
        }
        Ok(())
    }

    /// `width * height`, or an allocation failure when it does not fit in `usize`.
    pub fn cells(&self) -> Result<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .ok_or(Error::AllocationFailure {
                cells: self.width as u128 * self.height as u128,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_axes() {
        assert!(matches!(
            Size::new(1, 5).validate(),
            Err(Error::InvalidDimension { axis: Axis::X, value: 1 })
        ));
        assert!(matches!(
            Size::new(5, 0).validate(),
            Err(Error::InvalidDimension { axis: Axis::Y, value: 0 })
        ));
        assert!(Size::new(2, 2).validate().is_ok());
    }

    #[test]
    fn counts_cells() {
        assert_eq!(Size::new(4, 3).cells().unwrap(), 12);
    }
}
