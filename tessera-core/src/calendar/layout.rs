use tessera_types::{LayoutConfig, Weeks};

/// Number of week columns that fit in a container `width` pixels wide.
///
/// The result is `floor((width - padding) / (cell_size + cell_gap))` clamped to
/// `[min_weeks, max_weeks]`. Widths narrower than the padding yield `min_weeks`.
/// A degenerate config (zero pitch, zero or inverted bounds) still produces at
/// least one week.
#[must_use]
pub fn weeks_for_width(width: u32, layout: &LayoutConfig) -> Weeks {
    let lo = layout.min_weeks.max(1);
    let hi = layout.max_weeks.max(lo);
    let pitch = layout.cell_size.saturating_add(layout.cell_gap);
    let fit = width
        .saturating_sub(layout.padding)
        .checked_div(pitch)
        .unwrap_or(u32::from(hi));
    let fit = u16::try_from(fit).unwrap_or(u16::MAX);
    Weeks::new(fit.clamp(lo, hi)).unwrap_or(Weeks::DEFAULT)
}
