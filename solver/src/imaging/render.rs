//! Presentation of a solved route: step narration and an image overlay.

use image::{Rgb, RgbImage};

use crate::maze::Position;

pub const PATH_COLOR: Rgb<u8> = Rgb([255, 0, 255]);

/// One line per path state, with the move derived from the previous state.
pub fn narrate(path: &[Position]) -> Vec<String> {
    path.iter()
        .enumerate()
        .map(|(idx, &state)| {
            let step = idx + 1;
            match idx.checked_sub(1).map(|prev| path[prev]) {
                None => format!("Step {step}: {state} - start"),
                Some(prev) => match prev.direction_to(state) {
                    Some(direction) => format!("Step {step}: {state} - move {direction}"),
                    None => format!("Step {step}: {state} - jump from {prev}"),
                },
            }
        })
        .collect()
}

/// Copy of `image` with every path cell's block filled with [`PATH_COLOR`].
pub fn draw_solution(image: &RgbImage, path: &[Position], cell_size: u32) -> RgbImage {
    let mut canvas = image.clone();

    for state in path {
        let top = state.row as u32 * cell_size;
        let left = state.col as u32 * cell_size;
        let bottom = (top + cell_size).min(canvas.height());
        let right = (left + cell_size).min(canvas.width());

        for y in top..bottom {
            for x in left..right {
                canvas.put_pixel(x, y, PATH_COLOR);
            }
        }
    }

    canvas
}
