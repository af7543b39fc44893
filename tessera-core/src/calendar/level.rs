use tessera_types::Level;

/// Minimum counts for levels 1 through 4; the highest threshold met wins.
pub const LEVEL_THRESHOLDS: [u32; 4] = [1, 3, 5, 8];

/// Quantize a raw count into a display level.
///
/// `0 → 0`, `1..=2 → 1`, `3..=4 → 2`, `5..=7 → 3`, `8.. → 4`.
#[must_use]
pub fn quantize(count: u32) -> Level {
    let reached = LEVEL_THRESHOLDS.iter().take_while(|&&t| count >= t).count();
    u8::try_from(reached).map_or(Level::MAX, Level::clamped)
}
