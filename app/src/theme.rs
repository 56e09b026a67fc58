//! Color palette, the classic gray-board look.

pub type Color = [u8; 3];

pub const BACKGROUND: Color = [100, 100, 100];
pub const TILE_HIDDEN: Color = [255, 255, 255];
pub const TILE_REVEALED: Color = [200, 200, 200];
pub const TILE_BORDER: Color = [0, 0, 0];

/// Adjacency label color for a single neighboring mine.
pub const COUNT_ONE: Color = [0, 0, 255];
/// Adjacency label color for two or more neighboring mines.
pub const COUNT_MANY: Color = [0, 128, 0];

pub const BUTTON: Color = [255, 255, 255];
pub const BUTTON_BORDER: Color = [0, 0, 0];
pub const BUTTON_LABEL: Color = [0, 0, 0];
pub const RETRY_HOVER: Color = [200, 255, 200];
pub const CANCEL_HOVER: Color = [255, 200, 200];

pub const SCRIM: Color = [0, 0, 0];
pub const SCRIM_ALPHA: u8 = 180;
