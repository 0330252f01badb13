use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::forecast::RiskBand;
use crate::data::model::AreaStatus;
use crate::data::plans::PlanStatus;

// ---------------------------------------------------------------------------
// Brand colours
// ---------------------------------------------------------------------------

pub const BRAND_DARK: Color32 = Color32::from_rgb(0x0c, 0x4b, 0x33);
pub const BRAND: Color32 = Color32::from_rgb(0x2c, 0x7d, 0x5f);
pub const BRAND_LIGHT: Color32 = Color32::from_rgb(0x5a, 0xb1, 0x90);
pub const ALERT: Color32 = Color32::from_rgb(0xd9, 0x53, 0x4f);
pub const WARNING: Color32 = Color32::from_rgb(0xf0, 0xad, 0x4e);
pub const INFO: Color32 = Color32::from_rgb(0x5b, 0xc0, 0xde);
pub const SUCCESS: Color32 = Color32::from_rgb(0x5c, 0xb8, 0x5c);

/// Row tint for indicators at or above target.
pub const ON_TARGET_BG: Color32 = Color32::from_rgb(0xe6, 0xf7, 0xed);
/// Row tint for indicators below target.
pub const OFF_TARGET_BG: Color32 = Color32::from_rgb(0xff, 0xeb, 0xee);

// ---------------------------------------------------------------------------
// Value → colour lookups
// ---------------------------------------------------------------------------

/// Map polygon colour: active areas in brand green, everything else in red.
pub fn status_color(status: AreaStatus) -> Color32 {
    match status {
        AreaStatus::Active => BRAND,
        AreaStatus::Suspended | AreaStatus::UnderReview | AreaStatus::Terminated => ALERT,
    }
}

pub fn plan_status_color(status: PlanStatus) -> Color32 {
    match status {
        PlanStatus::Approved => BRAND,
        PlanStatus::UnderEvaluation => WARNING,
        PlanStatus::UnderReview => INFO,
        PlanStatus::InExecution => SUCCESS,
    }
}

pub fn risk_color(band: RiskBand) -> Color32 {
    match band {
        RiskBand::High => ALERT,
        RiskBand::Medium => WARNING,
        RiskBand::Low => SUCCESS,
    }
}

// ---------------------------------------------------------------------------
// Sequential palette
// ---------------------------------------------------------------------------

/// `n` greens from light to dark at a fixed hue, for ordered categories.
pub fn sequential_greens(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let t = if n == 1 {
                0.5
            } else {
                i as f32 / (n - 1) as f32
            };
            let lightness = 0.78 - t * 0.55;
            let hsl = Hsl::new(155.0, 0.55, lightness);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}
