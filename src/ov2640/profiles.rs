// SPDX-License-Identifier: Apache-2.0

//! Stock OV2640 register sequences for JPEG capture.
//!
//! These are the vendor's tuning tables, applied verbatim. Every table ends
//! with the (0xFF, 0xFF) sentinel and is otherwise opaque: entries write both
//! register banks, interleaved with bank select writes, and the values come
//! from the sensor vendor rather than from anything documented per-register.

/// Base JPEG pipeline setup. Applied once after a soft reset.
pub static JPEG_INIT: &[(u8, u8)] = &[
    (0xFF, 0x00), (0x2C, 0xFF), (0x2E, 0xDF), (0xFF, 0x01), (0x3C, 0x32),
    (0x11, 0x00), (0x09, 0x02), (0x04, 0x28), (0x13, 0xE5), (0x14, 0x48),
    (0x2C, 0x0C), (0x33, 0x78), (0x3A, 0x33), (0x3B, 0xFB), (0x3E, 0x00),
    (0x43, 0x11), (0x16, 0x10), (0x39, 0x92), (0x35, 0xDA), (0x22, 0x1A),
    (0x37, 0xC3), (0x23, 0x00), (0x34, 0xC0), (0x36, 0x1A), (0x06, 0x88),
    (0x07, 0xC0), (0x0D, 0x87), (0x0E, 0x41), (0x4C, 0x00), (0x48, 0x00),
    (0x5B, 0x00), (0x42, 0x03), (0x4A, 0x81), (0x21, 0x99), (0x24, 0x40),
    (0x25, 0x38), (0x26, 0x82), (0x5C, 0x00), (0x63, 0x00), (0x61, 0x70),
    (0x62, 0x80), (0x7C, 0x05), (0x20, 0x80), (0x28, 0x30), (0x6C, 0x00),
    (0x6D, 0x80), (0x6E, 0x00), (0x70, 0x02), (0x71, 0x94), (0x73, 0xC1),
    (0x12, 0x40), (0x17, 0x11), (0x18, 0x43), (0x19, 0x00), (0x1A, 0x4B),
    (0x32, 0x09), (0x37, 0xC0), (0x4F, 0x60), (0x50, 0xA8), (0x6D, 0x00),
    (0x3D, 0x38), (0x46, 0x3F), (0x4F, 0x60), (0x0C, 0x3C), (0xFF, 0x00),
    (0xE5, 0x7F), (0xF9, 0xC0), (0x41, 0x24), (0xE0, 0x14), (0x76, 0xFF),
    (0x33, 0xA0), (0x42, 0x20), (0x43, 0x18), (0x4C, 0x00), (0x87, 0xD5),
    (0x88, 0x3F), (0xD7, 0x03), (0xD9, 0x10), (0xD3, 0x82), (0xC8, 0x08),
    (0xC9, 0x80), (0x7C, 0x00), (0x7D, 0x00), (0x7C, 0x03), (0x7D, 0x48),
    (0x7D, 0x48), (0x7C, 0x08), (0x7D, 0x20), (0x7D, 0x10), (0x7D, 0x0E),
    (0x90, 0x00), (0x91, 0x0E), (0x91, 0x1A), (0x91, 0x31), (0x91, 0x5A),
    (0x91, 0x69), (0x91, 0x75), (0x91, 0x7E), (0x91, 0x88), (0x91, 0x8F),
    (0x91, 0x96), (0x91, 0xA3), (0x91, 0xAF), (0x91, 0xC4), (0x91, 0xD7),
    (0x91, 0xE8), (0x91, 0x20), (0x92, 0x00), (0x93, 0x06), (0x93, 0xE3),
    (0x93, 0x05), (0x93, 0x05), (0x93, 0x00), (0x93, 0x04), (0x93, 0x00),
    (0x93, 0x00), (0x93, 0x00), (0x93, 0x00), (0x93, 0x00), (0x93, 0x00),
    (0x93, 0x00), (0x96, 0x00), (0x97, 0x08), (0x97, 0x19), (0x97, 0x02),
    (0x97, 0x0C), (0x97, 0x24), (0x97, 0x30), (0x97, 0x28), (0x97, 0x26),
    (0x97, 0x02), (0x97, 0x98), (0x97, 0x80), (0x97, 0x00), (0x97, 0x00),
    (0xC3, 0xED), (0xA4, 0x00), (0xA8, 0x00), (0xC5, 0x11), (0xC6, 0x51),
    (0xBF, 0x80), (0xC7, 0x10), (0xB6, 0x66), (0xB8, 0xA5), (0xB7, 0x64),
    (0xB9, 0x7C), (0xB3, 0xAF), (0xB4, 0x97), (0xB5, 0xFF), (0xB0, 0xC5),
    (0xB1, 0x94), (0xB2, 0x0F), (0xC4, 0x5C), (0xC0, 0x64), (0xC1, 0x4B),
    (0x8C, 0x00), (0x86, 0x3D), (0x50, 0x00), (0x51, 0xC8), (0x52, 0x96),
    (0x53, 0x00), (0x54, 0x00), (0x55, 0x00), (0x5A, 0xC8), (0x5B, 0x96),
    (0x5C, 0x00), (0xD3, 0x00), (0xC3, 0xED), (0x7F, 0x00), (0xDA, 0x00),
    (0xE5, 0x1F), (0xE1, 0x67), (0xE0, 0x00), (0xDD, 0x7F), (0x05, 0x00),
    (0x12, 0x40), (0xD3, 0x04), (0xC8, 0x08), (0xC9, 0x80), (0xFF, 0xFF),
];

/// YUV422 color format for the JPEG encoder's input.
pub static YUV422: &[(u8, u8)] = &[
    (0xFF, 0x00), (0x05, 0x00), (0xDA, 0x10), (0xD7, 0x03), (0xDF, 0x00),
    (0x33, 0x80), (0x3C, 0x40), (0xE1, 0x77), (0x00, 0x00), (0xFF, 0xFF),
];

/// JPEG output mode.
pub static JPEG: &[(u8, u8)] = &[
    (0xE0, 0x14), (0xE1, 0x77), (0xE5, 0x1F), (0xD7, 0x03), (0xDA, 0x10),
    (0xE0, 0x00), (0xFF, 0x01), (0x04, 0x08), (0xFF, 0xFF),
];

/// 320×240 output window.
pub static QVGA_320X240_JPEG: &[(u8, u8)] = &[
    (0xFF, 0x01), (0x12, 0x40), (0x17, 0x11), (0x18, 0x43), (0x19, 0x00),
    (0x1A, 0x4B), (0x32, 0x09), (0x4F, 0xCA), (0x50, 0xA8), (0x5A, 0x23),
    (0x6D, 0x00), (0x39, 0x12), (0x35, 0xDA), (0x22, 0x1A), (0x37, 0xC3),
    (0x23, 0x00), (0x34, 0xC0), (0x36, 0x1A), (0x06, 0x88), (0x07, 0xC0),
    (0x0D, 0x87), (0x0E, 0x41), (0x4C, 0x00), (0xFF, 0x00), (0xE0, 0x04),
    (0xC0, 0x64), (0xC1, 0x4B), (0x86, 0x35), (0x50, 0x89), (0x51, 0xC8),
    (0x52, 0x96), (0x53, 0x00), (0x54, 0x00), (0x55, 0x00), (0x57, 0x00),
    (0x5A, 0x50), (0x5B, 0x3C), (0x5C, 0x00), (0xE0, 0x00), (0xFF, 0xFF),
];

/// 640×480 output window.
pub static VGA_640X480_JPEG: &[(u8, u8)] = &[
    (0xFF, 0x01), (0x11, 0x01), (0x12, 0x00), (0x17, 0x11), (0x18, 0x75),
    (0x32, 0x36), (0x19, 0x01), (0x1A, 0x97), (0x03, 0x0F), (0x37, 0x40),
    (0x4F, 0xBB), (0x50, 0x9C), (0x5A, 0x57), (0x6D, 0x80), (0x3D, 0x34),
    (0x39, 0x02), (0x35, 0x88), (0x22, 0x0A), (0x37, 0x40), (0x34, 0xA0),
    (0x06, 0x02), (0x0D, 0xB7), (0x0E, 0x01), (0xFF, 0x00), (0xE0, 0x04),
    (0xC0, 0xC8), (0xC1, 0x96), (0x86, 0x3D), (0x50, 0x89), (0x51, 0x90),
    (0x52, 0x2C), (0x53, 0x00), (0x54, 0x00), (0x55, 0x88), (0x57, 0x00),
    (0x5A, 0xA0), (0x5B, 0x78), (0x5C, 0x00), (0xD3, 0x04), (0xE0, 0x00),
    (0xFF, 0xFF),
];

/// 1600×1200 output, the sensor's full frame.
pub static UXGA_1600X1200_JPEG: &[(u8, u8)] = &[
    (0xFF, 0x01), (0x11, 0x01), (0x12, 0x00), (0x17, 0x11), (0x18, 0x75),
    (0x32, 0x36), (0x19, 0x01), (0x1A, 0x97), (0x03, 0x0F), (0x37, 0x40),
    (0x4F, 0xBB), (0x50, 0x9C), (0x5A, 0x57), (0x6D, 0x80), (0x3D, 0x34),
    (0x39, 0x02), (0x35, 0x88), (0x22, 0x0A), (0x37, 0x40), (0x34, 0xA0),
    (0x06, 0x02), (0x0D, 0xB7), (0x0E, 0x01), (0xFF, 0x00), (0xE0, 0x04),
    (0xC0, 0xC8), (0xC1, 0x96), (0x86, 0x3D), (0x50, 0x00), (0x51, 0x90),
    (0x52, 0x2C), (0x53, 0x00), (0x54, 0x00), (0x55, 0x88), (0x57, 0x00),
    (0x5A, 0x90), (0x5B, 0x2C), (0x5C, 0x05), (0xD3, 0x02), (0xE0, 0x00),
    (0xFF, 0xFF),
];
