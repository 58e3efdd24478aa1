//! Sprite-sheet metadata shared between the simulation and the renderer
//!
//! The cache is built once at startup by whatever owns the real images and
//! handed to the draw pass. Only frame geometry lives here; decoding and
//! upload belong to the embedding surface.

use std::collections::HashMap;
use std::rc::Rc;

use crate::sim::enemy::EnemySize;
use crate::sim::grid;

/// Stable lookup keys for every sprite the arena draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKey {
    Player,
    Enemy(EnemySize),
    Headquarters,
}

/// Source rectangle within a sheet, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Frame grid of a loaded sprite sheet
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    pub rows: u32,
    pub cols: u32,
    pub frame_width: f32,
    pub frame_height: f32,
}

impl SpriteSheet {
    /// Describe a sheet of `rows` x `cols` equal frames over an image of
    /// the given pixel size
    pub fn new(rows: u32, cols: u32, image_width: f32, image_height: f32) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        Self {
            rows,
            cols,
            frame_width: image_width / cols as f32,
            frame_height: image_height / rows as f32,
        }
    }

    pub fn frame_count(&self) -> u32 {
        self.rows * self.cols
    }

    /// Source rect of a frame counter; frames run left to right, top to
    /// bottom, and wrap at the end of the sheet
    pub fn frame_rect(&self, frame: u32) -> FrameRect {
        let place = (frame % self.frame_count()) as usize + 1;
        let cell = grid::cell_row_major(place, self.cols as usize);
        FrameRect {
            x: (cell.col - 1) as f32 * self.frame_width,
            y: (cell.row - 1) as f32 * self.frame_height,
            w: self.frame_width,
            h: self.frame_height,
        }
    }
}

/// Injected sprite-sheet registry; entries are shared, not copied
#[derive(Debug, Clone, Default)]
pub struct AssetCache {
    sheets: HashMap<SpriteKey, Rc<SpriteSheet>>,
}

impl AssetCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: SpriteKey, sheet: SpriteSheet) {
        self.sheets.insert(key, Rc::new(sheet));
    }

    pub fn get(&self, key: SpriteKey) -> Option<Rc<SpriteSheet>> {
        self.sheets.get(&key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_rect_walks_the_sheet_row_major() {
        let sheet = SpriteSheet::new(2, 3, 300.0, 100.0);
        assert_eq!(sheet.frame_rect(0), FrameRect { x: 0.0, y: 0.0, w: 100.0, h: 50.0 });
        assert_eq!(sheet.frame_rect(2), FrameRect { x: 200.0, y: 0.0, w: 100.0, h: 50.0 });
        assert_eq!(sheet.frame_rect(3), FrameRect { x: 0.0, y: 50.0, w: 100.0, h: 50.0 });
    }

    #[test]
    fn test_frame_rect_wraps_past_the_last_frame() {
        let sheet = SpriteSheet::new(2, 3, 300.0, 100.0);
        assert_eq!(sheet.frame_rect(6), sheet.frame_rect(0));
        assert_eq!(sheet.frame_rect(7), sheet.frame_rect(1));
    }

    #[test]
    fn test_degenerate_sheets_clamp_to_one_frame() {
        let sheet = SpriteSheet::new(0, 0, 64.0, 64.0);
        assert_eq!(sheet.frame_count(), 1);
        assert_eq!(sheet.frame_rect(5), FrameRect { x: 0.0, y: 0.0, w: 64.0, h: 64.0 });
    }

    #[test]
    fn test_cache_hands_out_shared_sheets() {
        let mut cache = AssetCache::new();
        cache.insert(SpriteKey::Player, SpriteSheet::new(1, 1, 64.0, 64.0));

        let a = cache.get(SpriteKey::Player);
        let b = cache.get(SpriteKey::Player);
        match (a, b) {
            (Some(a), Some(b)) => assert!(Rc::ptr_eq(&a, &b)),
            _ => panic!("player sheet missing"),
        }
        assert!(cache.get(SpriteKey::Headquarters).is_none());
    }
}
