/// Widget colors, specified in oklch like the rest of the stack and
/// converted to terminal RGB at draw time.
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32 },
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn to_rgb(&self) -> (u8, u8, u8) {
        match self {
            Self::Rgb { r, g, b } => (*r, *g, *b),
            Self::Oklch { l, c, h } => oklch_to_rgb(*l, *c, *h),
        }
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> (u8, u8, u8) {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    srgb.into_format::<u8>().into_components()
}

/// Colors for the rendered rows. Markers and indentation draw muted; the
/// selected row is inverted; a row being dragged dims.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeTheme {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
}

impl TreeTheme {
    pub fn new() -> Self {
        Self {
            background: Color::oklch(0.15, 0.01, 250.0),
            foreground: Color::oklch(0.95, 0.0, 0.0),
            muted: Color::oklch(0.55, 0.02, 250.0),
            selected_bg: Color::oklch(0.45, 0.1, 250.0),
            selected_fg: Color::oklch(0.98, 0.0, 0.0),
        }
    }
}

impl Default for TreeTheme {
    fn default() -> Self {
        Self::new()
    }
}
