use crate::error::FieldError;

/// A dense width x height grid of cells in row-major order.
///
/// The backing store is allocated once at construction and never resized;
/// map updates overwrite cells in place via [`Field2D::copy_from_slice`] or
/// [`Field2D::as_slice_mut`]. Reads through [`Field2D::get_clamped`] clamp
/// to the nearest edge cell, so no coordinate is out of bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Field2D<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T: Clone> Field2D<T> {
    /// Create a field with every cell set to `val`.
    pub fn from_val(width: usize, height: usize, val: T) -> Result<Self, FieldError> {
        if width == 0 || height == 0 {
            return Err(FieldError::ZeroDimension(width, height));
        }
        Ok(Self {
            width,
            height,
            data: vec![val; width * height],
        })
    }

    /// Create a field from row-major cell data.
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Result<Self, FieldError> {
        if width == 0 || height == 0 {
            return Err(FieldError::ZeroDimension(width, height));
        }
        if data.len() != width * height {
            return Err(FieldError::InvalidLength(width * height, data.len()));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Overwrite every cell with `val`.
    pub fn fill(&mut self, val: T) {
        self.data.fill(val);
    }

    /// Overwrite the cell data from a row-major slice of the same length.
    ///
    /// This is the refresh path for externally supplied correction maps.
    pub fn copy_from_slice(&mut self, src: &[T]) -> Result<(), FieldError> {
        if src.len() != self.data.len() {
            return Err(FieldError::InvalidLength(self.data.len(), src.len()));
        }
        self.data.clone_from_slice(src);
        Ok(())
    }
}

impl<T> Field2D<T> {
    /// The width of the field in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// The height of the field in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the field has no cells. Always false for a constructed field.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the cells as a row-major slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the cells as a mutable row-major slice.
    #[inline]
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Read the cell at `(x, y)`, clamping each axis to the field edge.
    #[inline]
    pub fn get_clamped(&self, x: i32, y: i32) -> &T {
        let x = x.clamp(0, self.width as i32 - 1) as usize;
        let y = y.clamp(0, self.height as i32 - 1) as usize;
        &self.data[y * self.width + x]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_val() -> Result<(), FieldError> {
        let field = Field2D::from_val(3, 2, 1.5f32)?;
        assert_eq!(field.width(), 3);
        assert_eq!(field.height(), 2);
        assert_eq!(field.len(), 6);
        assert!(field.as_slice().iter().all(|&v| v == 1.5));
        Ok(())
    }

    #[test]
    fn test_from_vec_invalid_length() {
        let res = Field2D::from_vec(2, 2, vec![0.0f32; 3]);
        assert_eq!(res.unwrap_err(), FieldError::InvalidLength(4, 3));
    }

    #[test]
    fn test_zero_dimension() {
        let res = Field2D::from_val(0, 4, 0.0f32);
        assert_eq!(res.unwrap_err(), FieldError::ZeroDimension(0, 4));
    }

    #[test]
    fn test_copy_from_slice() -> Result<(), FieldError> {
        let mut field = Field2D::from_val(2, 2, 0.0f32)?;
        field.copy_from_slice(&[1.0, 2.0, 3.0, 4.0])?;
        assert_eq!(field.as_slice(), &[1.0, 2.0, 3.0, 4.0]);

        let res = field.copy_from_slice(&[1.0, 2.0]);
        assert_eq!(res.unwrap_err(), FieldError::InvalidLength(4, 2));
        Ok(())
    }

    #[test]
    fn test_get_clamped() -> Result<(), FieldError> {
        let field = Field2D::from_vec(2, 2, vec![0.0f32, 10.0, 20.0, 30.0])?;
        assert_eq!(*field.get_clamped(0, 0), 0.0);
        assert_eq!(*field.get_clamped(1, 1), 30.0);
        assert_eq!(*field.get_clamped(-5, -5), 0.0);
        assert_eq!(*field.get_clamped(7, 0), 10.0);
        assert_eq!(*field.get_clamped(0, 7), 20.0);
        Ok(())
    }
}
