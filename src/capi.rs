use core::ffi::{CStr, c_char};
use core::slice;

use smart_leds::RGB8;

use crate::error::Error;
use crate::palette::{self, Palette16, PURPLE_WHITE};

#[repr(C)]
#[derive(Debug, PartialEq, Eq)]
pub enum LampError {
    LampOk = 0,
    LampBufferTooSmall = 1,
    LampIndexOutOfRange = 100,
}

impl core::convert::From<Error> for LampError {
    fn from(error: Error) -> Self {
        match error {
            Error::IndexOutOfRange(_) => Self::LampIndexOutOfRange,
            Error::BufferTooSmall => Self::LampBufferTooSmall,
        }
    }
}

#[unsafe(no_mangle)]
pub extern "C" fn lamp_palette_purple_white() -> &'static Palette16 {
    &PURPLE_WHITE
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn lamp_palette_by_name(name: *const c_char) -> Option<&'static Palette16> {
    if name.is_null() {
        return None;
    }

    let name = unsafe { CStr::from_ptr(name) };
    name.to_str().ok().and_then(palette::by_name)
}

#[unsafe(no_mangle)]
pub extern "C" fn lamp_palette_get(palette: &Palette16, index: usize, out: &mut RGB8) -> LampError {
    match palette.get(index) {
        Ok(color) => {
            *out = color;
            LampError::LampOk
        }
        Err(e) => e.into(),
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn lamp_palette_write(palette: &Palette16, buffer: *mut u8, buffer_size: usize) -> LampError {
    if buffer.is_null() {
        return LampError::LampBufferTooSmall;
    }

    let buf = unsafe { slice::from_raw_parts_mut(buffer, buffer_size) };

    palette.write_bytes(buf).err().map_or(LampError::LampOk, |e| e.into())
}
