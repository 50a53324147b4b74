use eframe::egui::Color32;

/// Color the grid starts with, and the one the eraser paints.
pub const BACKGROUND_COLOR: Color32 = Color32::WHITE;

/// Default swatches offered in the palette panel.
pub const DEFAULT_PALETTE: [Color32; 10] = [
    Color32::from_rgb(0x00, 0x00, 0x00), // black
    Color32::from_rgb(0xff, 0xff, 0xff), // white
    Color32::from_rgb(0xff, 0x00, 0x00), // red
    Color32::from_rgb(0x00, 0xff, 0x00), // green
    Color32::from_rgb(0x00, 0x00, 0xff), // blue
    Color32::from_rgb(0xff, 0xff, 0x00), // yellow
    Color32::from_rgb(0x00, 0xff, 0xff), // cyan
    Color32::from_rgb(0xff, 0x00, 0xff), // magenta
    Color32::from_rgb(0xff, 0x99, 0x00), // orange
    Color32::from_rgb(0x99, 0x00, 0xff), // purple
];

/// Parse a `#rrggbb` string (leading `#` optional) into an opaque color.
pub fn parse_hex(hex: &str) -> Option<Color32> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;
    Some(Color32::from_rgb(
        (value >> 16) as u8,
        (value >> 8) as u8,
        value as u8,
    ))
}

/// Format an opaque color as `#rrggbb`.
pub fn to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}
