pub const PRIMARY: [u8; 3] = [79, 140, 255];
pub const ACCENT: [u8; 3] = [166, 108, 255];

// links are always drawn in the primary color,
// independent of either endpoint's own color
pub const LINK_COLOR: [u8; 3] = PRIMARY;
pub const LINK_WIDTH: f32 = 0.4;
