use crate::domain::Block;

use super::canvas::Canvas;

pub const CANVAS_HEIGHT: u32 = 150;
pub const BLOCK_SIZE: f64 = 60.0;
pub const BLOCK_GAP: f64 = 10.0;
pub const RIGHT_MARGIN: f64 = 20.0;

const TILE_FILL: &str = "rgba(76, 29, 149, 0.8)";
const ACCENT: &str = "#00BFFF";
const LABEL: &str = "#FFFFFF";

/// Draw the feed as a right-to-left chain of tiles, newest on the right.
///
/// The canvas is resized to `width` first, which wipes the previous frame.
pub fn draw_blockchain<C: Canvas>(canvas: &mut C, width: u32, blocks: &[Block]) {
    canvas.resize(width, CANVAS_HEIGHT);

    let mid_y = f64::from(CANVAS_HEIGHT) / 2.0;
    let top = mid_y - BLOCK_SIZE / 2.0;
    let mut x = f64::from(width) - BLOCK_SIZE - RIGHT_MARGIN;

    for (index, block) in blocks.iter().enumerate() {
        canvas.fill_rect(x, top, BLOCK_SIZE, BLOCK_SIZE, TILE_FILL);
        canvas.stroke_rect(x, top, BLOCK_SIZE, BLOCK_SIZE, ACCENT, 2.0);
        canvas.fill_text(&format!("ID: {}", block.id), x + BLOCK_SIZE / 2.0, mid_y, LABEL);

        if index + 1 < blocks.len() {
            canvas.line(
                (x - BLOCK_GAP / 2.0, mid_y),
                (x + BLOCK_GAP / 2.0, mid_y),
                ACCENT,
                1.0,
            );
        }

        x -= BLOCK_SIZE + BLOCK_GAP;
    }
}
