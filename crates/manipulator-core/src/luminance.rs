//! Luma calculation for grayscale conversion.
//!
//! Uses the fixed weights 0.30 / 0.59 / 0.11. The weights are held as
//! integer percentages so the result is an exact floor with no
//! floating-point drift.

/// Red weight in percent.
pub const LUMA_R: u32 = 30;

/// Green weight in percent.
pub const LUMA_G: u32 = 59;

/// Blue weight in percent.
pub const LUMA_B: u32 = 11;

/// Calculate luma from u8 RGB values, truncating toward zero.
///
/// Equal to `floor(0.3 * r + 0.59 * g + 0.11 * b)`.
///
/// # Returns
/// Luma value (0-255)
#[inline]
pub fn calculate_luma_u8(r: u8, g: u8, b: u8) -> u8 {
    let weighted = LUMA_R * r as u32 + LUMA_G * g as u32 + LUMA_B * b as u32;
    // Weights sum to 100, so the quotient never exceeds 255.
    (weighted / 100) as u8
}
