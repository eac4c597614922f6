use std::path::Path;

use image::{GenericImageView, RgbImage};

use crate::error::MazeError;
use crate::maze::{Cell, Grid};

/// Converts an image into a coarse [`Grid`] by averaging square pixel blocks.
#[derive(Debug, Clone, Copy)]
pub struct Discretizer {
    cell_size: u32,
}

impl Discretizer {
    pub fn new(cell_size: u32) -> Result<Self, MazeError> {
        if cell_size == 0 {
            return Err(MazeError::InvalidCellSize(cell_size));
        }
        Ok(Self { cell_size })
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn read_image(&self, path: impl AsRef<Path>) -> Result<RgbImage, MazeError> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|source| MazeError::UnreadableImage {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!("read {}x{} image from {}", img.width(), img.height(), path.display());
        Ok(img.to_rgb8())
    }

    /// Grid is `floor(height / cell_size)` rows by `floor(width / cell_size)`
    /// columns; trailing partial blocks are ignored.
    pub fn discretize(&self, image: &RgbImage) -> Result<Grid, MazeError> {
        let rows = (image.height() / self.cell_size) as usize;
        let cols = (image.width() / self.cell_size) as usize;

        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows as u32 {
            for col in 0..cols as u32 {
                cells.push(classify(self.average_color(image, row, col)));
            }
        }

        log::debug!(
            "discretized into {}x{} cells of {}px",
            rows,
            cols,
            self.cell_size
        );
        Grid::new(cells, rows, cols)
    }

    fn average_color(&self, image: &RgbImage, row: u32, col: u32) -> [f64; 3] {
        let block = image.view(
            col * self.cell_size,
            row * self.cell_size,
            self.cell_size,
            self.cell_size,
        );

        let mut sum = [0f64; 3];
        for (_, _, pixel) in block.pixels() {
            for (acc, &channel) in sum.iter_mut().zip(pixel.0.iter()) {
                *acc += channel as f64;
            }
        }

        let count = (self.cell_size * self.cell_size) as f64;
        sum.map(|channel| channel / count)
    }
}

/// Fixed thresholds on an average RGB colour. Anything matching none of them
/// stays [`Cell::Free`].
pub fn classify([red, green, blue]: [f64; 3]) -> Cell {
    if red > 200.0 && green > 200.0 && blue > 200.0 {
        Cell::Free
    } else if red < 50.0 && green < 50.0 && blue < 50.0 {
        Cell::Wall
    } else if green > 150.0 && red < 100.0 && blue < 100.0 {
        Cell::Goal
    } else if red > 150.0 && green < 100.0 && blue < 100.0 {
        Cell::Start
    } else {
        Cell::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Position;
    use image::Rgb;

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
    const GREEN: Rgb<u8> = Rgb([0, 200, 0]);
    const RED: Rgb<u8> = Rgb([220, 10, 10]);

    fn paint(image: &mut RgbImage, row: u32, col: u32, size: u32, color: Rgb<u8>) {
        for y in row * size..(row + 1) * size {
            for x in col * size..(col + 1) * size {
                image.put_pixel(x, y, color);
            }
        }
    }

    #[test]
    fn classifies_thresholds() {
        assert_eq!(classify([255.0, 255.0, 255.0]), Cell::Free);
        assert_eq!(classify([10.0, 10.0, 10.0]), Cell::Wall);
        assert_eq!(classify([20.0, 180.0, 30.0]), Cell::Goal);
        assert_eq!(classify([200.0, 40.0, 40.0]), Cell::Start);
    }

    #[test]
    fn ambiguous_colors_default_to_free() {
        assert_eq!(classify([128.0, 128.0, 128.0]), Cell::Free);
        assert_eq!(classify([0.0, 0.0, 255.0]), Cell::Free);
        assert_eq!(classify([200.0, 200.0, 0.0]), Cell::Free);
    }

    #[test]
    fn discretizes_blocks() {
        let size = 4;
        let mut image = RgbImage::from_pixel(3 * size, 2 * size, WHITE);
        paint(&mut image, 0, 0, size, RED);
        paint(&mut image, 0, 1, size, BLACK);
        paint(&mut image, 1, 2, size, GREEN);

        let grid = Discretizer::new(size).unwrap().discretize(&image).unwrap();
        assert_eq!(grid.bounds(), (2, 3));
        assert_eq!(grid.get(Position::new(0, 0)), Some(Cell::Start));
        assert_eq!(grid.get(Position::new(0, 1)), Some(Cell::Wall));
        assert_eq!(grid.get(Position::new(0, 2)), Some(Cell::Free));
        assert_eq!(grid.get(Position::new(1, 2)), Some(Cell::Goal));
    }

    #[test]
    fn partial_blocks_are_dropped() {
        let mut image = RgbImage::from_pixel(7, 5, WHITE);
        paint(&mut image, 0, 0, 2, RED);
        paint(&mut image, 1, 2, 2, GREEN);

        let grid = Discretizer::new(2).unwrap().discretize(&image).unwrap();
        assert_eq!(grid.bounds(), (2, 3));
    }

    #[test]
    fn averages_mixed_blocks() {
        // half black, half white averages to mid grey, which matches no threshold
        let mut image = RgbImage::from_pixel(4, 4, WHITE);
        paint(&mut image, 0, 0, 2, RED);
        paint(&mut image, 1, 0, 2, GREEN);
        image.put_pixel(2, 0, BLACK);
        image.put_pixel(3, 0, BLACK);

        let grid = Discretizer::new(2).unwrap().discretize(&image).unwrap();
        assert_eq!(grid.get(Position::new(0, 1)), Some(Cell::Free));
    }

    #[test]
    fn image_without_start_is_rejected() {
        let image = RgbImage::from_pixel(4, 4, WHITE);
        let err = Discretizer::new(2).unwrap().discretize(&image).unwrap_err();
        assert!(matches!(err, MazeError::MissingStartOrGoal { .. }));
    }

    #[test]
    fn zero_cell_size_is_rejected() {
        assert!(matches!(
            Discretizer::new(0),
            Err(MazeError::InvalidCellSize(0))
        ));
    }

    #[test]
    fn missing_file_is_unreadable() {
        let discretizer = Discretizer::new(12).unwrap();
        let err = discretizer
            .read_image("does/not/exist/maze.bmp")
            .unwrap_err();
        assert!(matches!(err, MazeError::UnreadableImage { .. }));
        assert_eq!(err.code(), "UNREADABLE_IMAGE");
    }
}
