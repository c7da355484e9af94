use core::ops::Index;
use core::slice;

use smart_leds::RGB8;

use crate::color::{self, COLOR_SIZE, PURPLE, WHITE};
use crate::error::Error;

/// The number of colors in a [`Palette16`]
pub const PALETTE_SIZE: usize = 16;

/// Size in bytes of a [`Palette16`] in the persisted layout
pub const PALETTE_BYTES: usize = PALETTE_SIZE * COLOR_SIZE;

// Renderers compute entry indexes with shifts and masks.
const _: () = assert!(PALETTE_SIZE.is_power_of_two());

/// 16-color gradient palette
///
/// Entries are control points; the renderer interpolates between neighbours
/// and treats the palette as cyclic.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Palette16([RGB8; PALETTE_SIZE]);

/// White and purple in blocks of two and four, repeated once.
#[rustfmt::skip]
pub static PURPLE_WHITE: Palette16 = Palette16::new([
    WHITE, WHITE, PURPLE, PURPLE,
    PURPLE, PURPLE, WHITE, WHITE,
    WHITE, WHITE, PURPLE, PURPLE,
    PURPLE, PURPLE, WHITE, WHITE,
]);

/// Names accepted by [`by_name`]
pub const NAMES: &[&str] = &["PurpleWhite"];

/// Looks up a built-in palette by name. Names are case-sensitive.
pub fn by_name(name: &str) -> Option<&'static Palette16> {
    match name {
        "PurpleWhite" => Some(&PURPLE_WHITE),
        _ => None,
    }
}

impl Palette16 {
    pub const fn new(entries: [RGB8; PALETTE_SIZE]) -> Self {
        Self(entries)
    }

    pub const fn len(&self) -> usize {
        PALETTE_SIZE
    }

    pub const fn is_empty(&self) -> bool {
        false
    }

    pub const fn as_array(&self) -> &[RGB8; PALETTE_SIZE] {
        &self.0
    }

    pub fn iter(&self) -> slice::Iter<'_, RGB8> {
        self.0.iter()
    }

    /// Returns the color at `index`.
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is 16 or greater.
    /// Indexes never wrap around.
    pub fn get(&self, index: usize) -> Result<RGB8, Error> {
        self.0.get(index).copied().ok_or(Error::IndexOutOfRange(index))
    }

    /// Serializes the palette as 16 consecutive R, G, B byte triples.
    pub fn to_bytes(&self) -> [u8; PALETTE_BYTES] {
        let mut buf = [0u8; PALETTE_BYTES];
        self.fill_bytes(&mut buf);
        buf
    }

    /// Writes the 48-byte layout into the start of `buffer`.
    ///
    /// Returns [`Error::BufferTooSmall`] if `buffer` is shorter than
    /// [`PALETTE_BYTES`]
    pub fn write_bytes(&self, buffer: &mut [u8]) -> Result<(), Error> {
        if buffer.len() < PALETTE_BYTES {
            log::debug!("palette write rejected: {} byte buffer", buffer.len());
            return Err(Error::BufferTooSmall);
        }

        self.fill_bytes(&mut buffer[..PALETTE_BYTES]);
        Ok(())
    }

    /// Reads a palette from the 48-byte layout. Trailing bytes are ignored.
    ///
    /// Returns [`Error::BufferTooSmall`] if `bytes` is shorter than
    /// [`PALETTE_BYTES`]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() < PALETTE_BYTES {
            log::debug!("palette read rejected: {} byte buffer", bytes.len());
            return Err(Error::BufferTooSmall);
        }

        let mut entries = [RGB8::default(); PALETTE_SIZE];
        for (entry, chunk) in entries.iter_mut().zip(bytes.chunks_exact(COLOR_SIZE)) {
            *entry = color::read_color(chunk);
        }

        log::trace!("decoded palette from {} bytes", bytes.len());
        Ok(Self(entries))
    }

    fn fill_bytes(&self, buf: &mut [u8]) {
        for (color, chunk) in self.0.iter().zip(buf.chunks_exact_mut(COLOR_SIZE)) {
            color::write_color(*color, chunk);
        }
    }
}

impl Index<usize> for Palette16 {
    type Output = RGB8;

    fn index(&self, index: usize) -> &RGB8 {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Palette16 {
    type Item = &'a RGB8;
    type IntoIter = slice::Iter<'a, RGB8>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<[RGB8; PALETTE_SIZE]> for Palette16 {
    fn from(entries: [RGB8; PALETTE_SIZE]) -> Self {
        Self(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: RGB8 = WHITE;
    const P: RGB8 = PURPLE;

    #[test]
    fn test_purple_white_order() {
        assert_eq!(PURPLE_WHITE.len(), 16);
        assert_eq!(
            PURPLE_WHITE.as_array(),
            &[W, W, P, P, P, P, W, W, W, W, P, P, P, P, W, W]
        );
    }

    #[test]
    fn test_get() {
        assert_eq!(PURPLE_WHITE.get(0), Ok(RGB8 { r: 255, g: 255, b: 255 }));
        assert_eq!(PURPLE_WHITE.get(2), Ok(RGB8 { r: 128, g: 0, b: 128 }));
        assert_eq!(PURPLE_WHITE.get(15), Ok(RGB8 { r: 255, g: 255, b: 255 }));
        // No wraparound
        assert_eq!(PURPLE_WHITE.get(16), Err(Error::IndexOutOfRange(16)));
        assert_eq!(PURPLE_WHITE.get(usize::MAX), Err(Error::IndexOutOfRange(usize::MAX)));
    }

    #[test]
    fn test_repeated_reads_are_stable() {
        for i in 0..PALETTE_SIZE {
            let first = PURPLE_WHITE.get(i);
            assert_eq!(PURPLE_WHITE.get(i), first);
            assert_eq!(Ok(PURPLE_WHITE[i]), first);
        }
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let i = PALETTE_SIZE;
        let _ = PURPLE_WHITE[i];
    }

    #[test]
    fn test_iter_matches_get() {
        let mut count = 0;
        for (i, color) in (&PURPLE_WHITE).into_iter().enumerate() {
            assert_eq!(PURPLE_WHITE.get(i), Ok(*color));
            count += 1;
        }
        assert_eq!(count, 16);
    }

    #[test]
    fn test_to_bytes_layout() {
        let bytes = PURPLE_WHITE.to_bytes();
        assert_eq!(bytes.len(), 48);
        assert_eq!(&bytes[0..6], &[255, 255, 255, 255, 255, 255]);
        assert_eq!(&bytes[6..9], &[128, 0, 128]);
        assert_eq!(&bytes[45..48], &[255, 255, 255]);

        assert_eq!(Palette16::from_bytes(&bytes), Ok(PURPLE_WHITE));
    }

    #[test]
    fn test_from_bytes_ignores_trailing_bytes() {
        let mut buf = [0xAAu8; 50];
        PURPLE_WHITE.write_bytes(&mut buf).unwrap();
        assert_eq!(&buf[48..], &[0xAA, 0xAA]);
        assert_eq!(Palette16::from_bytes(&buf), Ok(PURPLE_WHITE));
    }

    #[test]
    fn test_short_buffers() {
        let mut buf = [0u8; 47];
        assert_eq!(PURPLE_WHITE.write_bytes(&mut buf), Err(Error::BufferTooSmall));
        assert_eq!(buf, [0u8; 47]);
        assert_eq!(Palette16::from_bytes(&buf), Err(Error::BufferTooSmall));
        assert_eq!(Palette16::from_bytes(&[]), Err(Error::BufferTooSmall));
    }

    #[test]
    fn test_by_name() {
        assert_eq!(by_name("PurpleWhite"), Some(&PURPLE_WHITE));
        assert_eq!(by_name("purplewhite"), None);
        assert_eq!(by_name(""), None);
        for name in NAMES {
            assert!(by_name(name).is_some());
        }
    }
}
