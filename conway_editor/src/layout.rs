// layout.rs - Screen geometry of the board

use egui::{Pos2, Rect, Vec2, pos2, vec2};

/// Maps grid cells to screen rectangles and back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub cell_size: f32,
    pub width: usize,
    pub height: usize,
}

impl Layout {
    pub fn new(cell_size: f32, width: usize, height: usize) -> Self {
        Self {
            cell_size,
            width,
            height,
        }
    }

    /// Pixel size of the whole board.
    pub fn size(&self) -> Vec2 {
        vec2(
            self.width as f32 * self.cell_size,
            self.height as f32 * self.cell_size,
        )
    }

    pub fn cell_rect(&self, origin: Pos2, x: usize, y: usize) -> Rect {
        let min = origin + vec2(x as f32, y as f32) * self.cell_size;
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// The cell under `pos`, if any.
    pub fn cell_at(&self, origin: Pos2, pos: Pos2) -> Option<(usize, usize)> {
        let rel = (pos - origin) / self.cell_size;
        if rel.x < 0.0 || rel.y < 0.0 {
            return None;
        }
        let (x, y) = (rel.x as usize, rel.y as usize);
        (x < self.width && y < self.height).then_some((x, y))
    }

    /// Line segments along every cell border.
    pub fn grid_lines(&self, origin: Pos2) -> Vec<[Pos2; 2]> {
        let Vec2 { x: w, y: h } = self.size();
        let vertical = (0..=self.width).map(|i| {
            let x = origin.x + i as f32 * self.cell_size;
            [pos2(x, origin.y), pos2(x, origin.y + h)]
        });
        let horizontal = (0..=self.height).map(|j| {
            let y = origin.y + j as f32 * self.cell_size;
            [pos2(origin.x, y), pos2(origin.x + w, y)]
        });
        vertical.chain(horizontal).collect()
    }
}
