//! One-wire support
//!
//! - Dallas/Maxim CRC-8 used by ROM codes and scratchpads
//! - Bit-banged bus master on an open-drain GPIO

pub mod bitbang;

pub use bitbang::BitBangBus;

/// Dallas/Maxim CRC-8 (x^8 + x^5 + x^4 + 1, reflected)
///
/// Running the CRC over data followed by its CRC byte yields zero.
pub fn crc8(data: &[u8]) -> u8 {
    const POLY: u8 = 0x8C;
    let mut crc: u8 = 0;

    for &byte in data {
        let mut byte = byte;
        for _ in 0..8 {
            let mix = (crc ^ byte) & 0x01;
            crc >>= 1;
            if mix != 0 {
                crc ^= POLY;
            }
            byte >>= 1;
        }
    }

    crc
}
