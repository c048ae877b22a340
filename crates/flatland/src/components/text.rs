use glam::DVec2;

use crate::components::colour::Rgb;

/// Common font families available in every browser.
pub mod family {
    pub const GEORGIA: &str = "Georgia";
    pub const PALATINO_LINOTYPE: &str = "Palatino Linotype";
    pub const TIMES_NEW_ROMAN: &str = "Times New Roman";
    pub const ARIAL: &str = "Arial";
    pub const ARIAL_BLACK: &str = "Arial Black";
    pub const COMIC_SANS_MS: &str = "Comic Sans MS";
    pub const IMPACT: &str = "Impact";
    pub const LUCIDA_SANS_UNICODE: &str = "Lucida Sans Unicode";
    pub const TAHOMA: &str = "Tahoma";
    pub const TREBUCHET_MS: &str = "Trebuchet MS";
    pub const VERDANA: &str = "Verdana";
    pub const COURIER_NEW: &str = "Courier New";
    pub const LUCIDA_CONSOLE: &str = "Lucida Console";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }
}

/// Font size, family and weight.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    /// Pixel size.
    pub size: u32,
    pub family: String,
    pub weight: FontWeight,
}

impl FontSpec {
    pub fn new(size: u32, family: impl Into<String>, weight: FontWeight) -> Self {
        Self {
            size,
            family: family.into(),
            weight,
        }
    }

    /// CSS shorthand, e.g. `bold 72px Arial`.
    pub fn to_css(&self) -> String {
        format!("{} {}px {}", self.weight.as_str(), self.size, self.family)
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new(24, family::ARIAL, FontWeight::Normal)
    }
}

/// A line of text drawn at a fixed point.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    content: String,
    font: FontSpec,
    colour: Rgb,
    /// Opacity in `[0, 1]`.
    alpha: f64,
    position: DVec2,
    visible: bool,
}

impl Text {
    pub fn new(content: impl Into<String>, font: FontSpec, colour: Rgb, position: DVec2) -> Self {
        Self {
            content: content.into(),
            font,
            colour,
            alpha: 1.0,
            position,
            visible: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.content
    }

    pub fn set_text(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    pub fn set_font(&mut self, font: FontSpec) {
        self.font = font;
    }

    pub fn font_css(&self) -> String {
        self.font.to_css()
    }

    pub fn colour(&self) -> Rgb {
        self.colour
    }

    pub fn set_colour(&mut self, colour: Rgb) {
        self.colour = colour;
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Set opacity, clamped to `[0, 1]`.
    pub fn set_alpha(&mut self, alpha: f64) {
        self.alpha = if alpha.is_nan() { 1.0 } else { alpha.clamp(0.0, 1.0) };
    }

    /// Fill style for the current colour and alpha.
    pub fn colour_css(&self) -> String {
        self.colour.to_css_rgba(self.alpha)
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn set_position(&mut self, position: DVec2) {
        self.position = position;
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn set_x(&mut self, x: f64) {
        self.position.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.position.y = y;
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
