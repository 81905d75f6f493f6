//! Colors shared by the desktop components

/// Color palette for the application
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub bg_overlay: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
    pub error: &'static str,
    pub success: &'static str,
}

pub const PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#ffffff",
    bg_secondary: "#f5f6f8",
    bg_overlay: "rgba(15, 23, 42, 0.45)",
    text_primary: "#1f2933",
    text_secondary: "#52606d",
    text_muted: "#9aa5b1",
    border: "#d9dee4",
    accent: "#2563eb",
    accent_text: "#ffffff",
    error: "#dc2626",
    success: "#16a34a",
};

#[must_use]
pub const fn palette() -> &'static ColorPalette {
    &PALETTE
}
