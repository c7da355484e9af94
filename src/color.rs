//! Named colors used by the built-in palettes.

use smart_leds::RGB8;

/// Size in bytes of one color in the persisted layout
pub const COLOR_SIZE: usize = 3;

pub const WHITE: RGB8 = RGB8 {
    r: 255,
    g: 255,
    b: 255,
};

pub const PURPLE: RGB8 = RGB8 {
    r: 128,
    g: 0,
    b: 128,
};

pub(crate) fn write_color(color: RGB8, out: &mut [u8]) {
    out[0] = color.r;
    out[1] = color.g;
    out[2] = color.b;
}

pub(crate) fn read_color(bytes: &[u8]) -> RGB8 {
    RGB8 {
        r: bytes[0],
        g: bytes[1],
        b: bytes[2],
    }
}
