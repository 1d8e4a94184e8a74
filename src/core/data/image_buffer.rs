use crate::core::data::colour::Colour;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageBufferError {
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for ImageBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(
                    f,
                    "image data length {} does not match grid byte length {}",
                    actual, expected
                )
            }
        }
    }
}

impl Error for ImageBufferError {}

/// A completed frame in display-ready RGB form, three bytes per pixel in
/// row-major order. Immutable once constructed; a new frame is a new buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    grid: GridSize,
    data: Vec<u8>,
}

impl ImageBuffer {
    pub fn from_data(grid: GridSize, data: Vec<u8>) -> Result<Self, ImageBufferError> {
        if data.len() != grid.rgb_len() {
            return Err(ImageBufferError::SizeMismatch {
                expected: grid.rgb_len(),
                actual: data.len(),
            });
        }

        Ok(Self { grid, data })
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Colour of the pixel at `point`, or `None` outside the grid.
    #[must_use]
    pub fn pixel(&self, point: Point) -> Option<Colour> {
        if !self.grid.contains(point) {
            return None;
        }

        let offset = (point.y as usize * self.grid.width() as usize + point.x as usize) * 3;
        Some(Colour {
            r: self.data[offset],
            g: self.data[offset + 1],
            b: self.data[offset + 2],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_data_accepts_matching_length() {
        let grid = GridSize::new(2, 2).unwrap();
        let buffer = ImageBuffer::from_data(grid, vec![0; 12]).unwrap();

        assert_eq!(buffer.grid(), grid);
        assert_eq!(buffer.bytes().len(), 12);
    }

    #[test]
    fn test_from_data_rejects_length_mismatch() {
        let grid = GridSize::new(2, 2).unwrap();
        let buffer = ImageBuffer::from_data(grid, vec![0; 11]);

        assert_eq!(
            buffer,
            Err(ImageBufferError::SizeMismatch { expected: 12, actual: 11 })
        );
    }

    #[test]
    fn test_pixel_reads_row_major_rgb() {
        let grid = GridSize::new(2, 2).unwrap();
        let data = vec![
            1, 2, 3, 4, 5, 6, //
            7, 8, 9, 10, 11, 12,
        ];
        let buffer = ImageBuffer::from_data(grid, data).unwrap();

        assert_eq!(buffer.pixel(Point { x: 0, y: 0 }), Some(Colour { r: 1, g: 2, b: 3 }));
        assert_eq!(buffer.pixel(Point { x: 1, y: 0 }), Some(Colour { r: 4, g: 5, b: 6 }));
        assert_eq!(buffer.pixel(Point { x: 0, y: 1 }), Some(Colour { r: 7, g: 8, b: 9 }));
        assert_eq!(buffer.pixel(Point { x: 1, y: 1 }), Some(Colour { r: 10, g: 11, b: 12 }));
    }

    #[test]
    fn test_pixel_outside_grid_is_none() {
        let grid = GridSize::new(2, 2).unwrap();
        let buffer = ImageBuffer::from_data(grid, vec![0; 12]).unwrap();

        assert_eq!(buffer.pixel(Point { x: 2, y: 0 }), None);
        assert_eq!(buffer.pixel(Point { x: 0, y: -1 }), None);
    }
}
