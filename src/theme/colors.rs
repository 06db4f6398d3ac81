//! Colors - Application Palette

use gpui::{rgb, Rgba};

/// Color palette - all colors are accessed via associated functions
pub struct Palette;

impl Palette {
    // Brand
    /// Header background - Slate
    pub fn header_bg() -> Rgba { rgb(0x1e293b) }
    /// Accent - Blue (checked boxes, active page)
    pub fn accent() -> Rgba { rgb(0x3b82f6) }

    // Background colors
    /// Window background
    pub fn background() -> Rgba { rgb(0xf5f5f5) }
    /// Content area background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }
    /// Log panel background - Dark blue
    pub fn log_panel_bg() -> Rgba { rgb(0x1a2332) }

    // Text colors
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Light text (on dark backgrounds)
    pub fn text_light() -> Rgba { rgb(0xffffff) }

    // Status colors
    pub fn success() -> Rgba { rgb(0x22c55e) }
    pub fn warning() -> Rgba { rgb(0xf59e0b) }
    pub fn danger() -> Rgba { rgb(0xef4444) }

    // Border colors
    pub fn border() -> Rgba { rgb(0xe5e7eb) }
    pub fn border_focus() -> Rgba { rgb(0x3b82f6) }

    // Button colors
    pub fn button_primary_bg() -> Rgba { rgb(0x3b82f6) }
    pub fn button_primary_text() -> Rgba { rgb(0xffffff) }
    pub fn button_danger_bg() -> Rgba { rgb(0xef4444) }
    pub fn button_danger_text() -> Rgba { rgb(0xffffff) }
    pub fn button_ghost_text() -> Rgba { rgb(0x2563eb) }

    // Table colors
    pub fn table_header_bg() -> Rgba { rgb(0xf9fafb) }
    pub fn table_row_hover() -> Rgba { rgb(0xf3f4f6) }
    pub fn table_row_alt() -> Rgba { rgb(0xfcfcfd) }
    /// Selected row (checked checkbox)
    pub fn table_row_selected() -> Rgba { rgb(0xe5e7eb) }

    // Input colors
    pub fn input_bg() -> Rgba { rgb(0xffffff) }
    pub fn input_border() -> Rgba { rgb(0xd1d5db) }
    pub fn input_placeholder() -> Rgba { rgb(0x9ca3af) }
}
