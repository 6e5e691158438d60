// SPDX-License-Identifier: MPL-2.0
//! Single-pixel GIF placeholder.
//!
//! The strip shows a stretched 1x1 image in the brand color while the real
//! image is downloading. Encoding it by hand keeps the placeholder free of
//! any decoder or asset file.

use iced::widget::image;

/// Placeholder color, `rgb(237, 181, 6)`.
pub const PLACEHOLDER_RGB: (u8, u8, u8) = (237, 181, 6);

/// Encodes a 1x1 GIF89a image filled with the given color.
///
/// The global color table holds two entries (the pixel color, then white);
/// the single pixel indexes entry 0.
#[must_use]
pub fn pixel_gif(r: u8, g: u8, b: u8) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(43);

    // Header
    bytes.extend_from_slice(b"GIF89a");
    // Logical screen: 1x1, global color table of 2 entries
    bytes.extend_from_slice(&[0x01, 0x00, 0x01, 0x00, 0xf0, 0x00, 0x00]);
    // Global color table
    bytes.extend_from_slice(&[r, g, b, 0xff, 0xff, 0xff]);
    // Graphic control extension
    bytes.extend_from_slice(&[0x21, 0xf9, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00]);
    // Image descriptor
    bytes.extend_from_slice(&[0x2c, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00]);
    // LZW minimum code size, one data sub-block, terminator
    bytes.extend_from_slice(&[0x02, 0x02, 0x44, 0x01, 0x00]);
    // Trailer
    bytes.push(0x3b);

    bytes
}

/// Image handle for the brand-colored placeholder.
#[must_use]
pub fn placeholder_handle() -> image::Handle {
    let (r, g, b) = PLACEHOLDER_RGB;
    image::Handle::from_bytes(pixel_gif(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gif_is_43_bytes_with_header_and_trailer() {
        let gif = pixel_gif(1, 2, 3);
        assert_eq!(gif.len(), 43);
        assert!(gif.starts_with(b"GIF89a"));
        assert_eq!(gif.last(), Some(&0x3b));
    }

    #[test]
    fn color_lands_in_first_palette_entry() {
        let (r, g, b) = PLACEHOLDER_RGB;
        let gif = pixel_gif(r, g, b);
        assert_eq!(&gif[13..16], &[237, 181, 6]);
        assert_eq!(&gif[16..19], &[0xff, 0xff, 0xff]);
    }

    #[test]
    fn dimensions_are_one_by_one() {
        let gif = pixel_gif(0, 0, 0);
        assert_eq!(u16::from_le_bytes([gif[6], gif[7]]), 1);
        assert_eq!(u16::from_le_bytes([gif[8], gif[9]]), 1);
    }
}
