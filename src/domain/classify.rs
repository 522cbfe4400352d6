// Flood severity classification - warning labels and path color tiers

/// Returned by the warning classifier when the input is not a number.
pub const NO_DATA_LABEL: &str = "No data available";

/// Coarse severity bucket used for path rendering. The CSS values are the
/// exact colors the map legend documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTier {
    Green,
    Yellow,
    Red,
}

impl ColorTier {
    pub fn css(self) -> &'static str {
        match self {
            ColorTier::Green => "rgba(11, 156, 49, 0.5)",
            ColorTier::Yellow => "rgba(225, 173, 1, 0.5)",
            ColorTier::Red => "rgba(180, 0, 50, 0.5)",
        }
    }
}

// Ordered ascending; first inclusive upper bound wins. Levels are meters.
const WARNING_BANDS: [(f64, &str); 6] = [
    (0.20, "Gutter deep flood"),
    (0.25, "Half-knee deep flood"),
    (0.33, "Half-tire deep flood"),
    (0.50, "Knee deep flood"),
    (0.66, "Tire deep flood"),
    (0.94, "Waist deep flood"),
];
const TOP_WARNING: &str = "Chest deep flood";

// The color bounds are not the warning bounds. The two tables are kept
// independent; do not unify them.
const COLOR_BANDS: [(f64, ColorTier); 2] = [
    (0.25, ColorTier::Green),
    (0.50, ColorTier::Yellow),
];

pub fn warning_label(level: f64) -> &'static str {
    for (bound, label) in WARNING_BANDS {
        if level <= bound {
            return label;
        }
    }
    TOP_WARNING
}

pub fn color_tier(level: f64) -> ColorTier {
    for (bound, tier) in COLOR_BANDS {
        if level <= bound {
            return tier;
        }
    }
    ColorTier::Red
}

/// Warning text for a stored channel value. Non-numeric input gets the
/// fixed no-data label rather than an error.
pub fn flood_warning(text: &str) -> &'static str {
    match text.trim().parse::<f64>() {
        Ok(level) if level.is_finite() => warning_label(level),
        _ => NO_DATA_LABEL,
    }
}

/// Path color for a stored channel value; `None` means no stroke is drawn.
pub fn flood_color(text: &str) -> Option<ColorTier> {
    match text.trim().parse::<f64>() {
        Ok(level) if level.is_finite() => Some(color_tier(level)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_bands_ascend_with_boundaries_on_the_lower_band() {
        assert_eq!(warning_label(0.00), "Gutter deep flood");
        assert_eq!(warning_label(0.20), "Gutter deep flood");
        assert_eq!(warning_label(0.25), "Half-knee deep flood");
        assert_eq!(warning_label(0.26), "Half-tire deep flood");
        assert_eq!(warning_label(0.33), "Half-tire deep flood");
        assert_eq!(warning_label(0.50), "Knee deep flood");
        assert_eq!(warning_label(0.66), "Tire deep flood");
        assert_eq!(warning_label(0.94), "Waist deep flood");
        assert_eq!(warning_label(0.95), "Chest deep flood");
        assert_eq!(warning_label(3.00), "Chest deep flood");
    }

    #[test]
    fn test_color_partition_is_independent_of_warning_bounds() {
        assert_eq!(color_tier(0.25), ColorTier::Green);
        // 0.26 is already "Half-tire deep flood" in the warning table but
        // still only yellow here
        assert_eq!(color_tier(0.26), ColorTier::Yellow);
        assert_eq!(color_tier(0.50), ColorTier::Yellow);
        assert_eq!(color_tier(0.51), ColorTier::Red);
        assert_eq!(color_tier(0.94), ColorTier::Red);
    }

    #[test]
    fn test_non_numeric_input_yields_sentinels() {
        assert_eq!(flood_warning(""), NO_DATA_LABEL);
        assert_eq!(flood_warning("n/a"), NO_DATA_LABEL);
        assert_eq!(flood_color(""), None);
        assert_eq!(flood_color("NaN"), None);
        assert_eq!(flood_color("0.33"), Some(ColorTier::Yellow));
    }
}
