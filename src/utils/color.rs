use crate::app::Severity;
use crate::upload::HistoryStatus;
use eframe::egui::Color32;

pub const BRAND: Color32 = Color32::from_rgb(0x90, 0xbe, 0x55);
pub const INFO: Color32 = Color32::from_rgb(0x17, 0xa2, 0xb8);
pub const DANGER: Color32 = Color32::from_rgb(0xdc, 0x35, 0x45);
pub const MUTED: Color32 = Color32::from_rgb(0x6c, 0x75, 0x7d);
pub const PANEL: Color32 = Color32::from_rgb(0xf8, 0xf9, 0xfa);
pub const PANEL_BORDER: Color32 = Color32::from_rgb(0xe9, 0xec, 0xef);
pub const DROP_BORDER: Color32 = Color32::from_rgb(0xdd, 0xdd, 0xdd);
pub const DROP_HOVER_FILL: Color32 = Color32::from_rgb(0xf0, 0xf8, 0xf0);
pub const SELECTED_TEXT: Color32 = Color32::from_rgb(0x28, 0xa7, 0x45);

/// `(background, foreground)` pair for tinted badges and banners.
pub type Tint = (Color32, Color32);

const POSITIVE: Tint = (
    Color32::from_rgb(0xd4, 0xed, 0xda),
    Color32::from_rgb(0x15, 0x57, 0x24),
);
const CAUTION: Tint = (
    Color32::from_rgb(0xff, 0xf3, 0xcd),
    Color32::from_rgb(0x85, 0x64, 0x04),
);
const NEGATIVE: Tint = (
    Color32::from_rgb(0xf8, 0xd7, 0xda),
    Color32::from_rgb(0x72, 0x1c, 0x24),
);

pub fn status_badge(status: &HistoryStatus) -> Tint {
    match status {
        HistoryStatus::Completed => POSITIVE,
        HistoryStatus::Partial => CAUTION,
        HistoryStatus::Failed => NEGATIVE,
    }
}

pub fn banner(severity: Severity) -> Tint {
    match severity {
        Severity::Success => POSITIVE,
        Severity::Error => NEGATIVE,
    }
}
