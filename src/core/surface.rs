use glam::DVec2;

/// Stroke colour with an independent alpha channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub fn new(rgb: [u8; 3], a: f64) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a,
        }
    }

    /// CSS colour string understood by `strokeStyle`.
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Minimal immediate-mode 2D surface the compositor draws on.
///
/// Implementations only need stroked paths; there is no fill, clip or transform.
pub trait DrawSurface {
    /// Resize to the given extent. Leaves the surface blank.
    fn resize(&mut self, width: f64, height: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn close_path(&mut self);
    fn set_stroke(&mut self, color: Rgba, width: f64);
    fn stroke(&mut self);
}

/// Axis-aligned rectangle of the surface assigned to one group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Region {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    pub fn half_diagonal(&self) -> f64 {
        DVec2::new(self.width, self.height).length() * 0.5
    }

    pub fn min_half_extent(&self) -> f64 {
        self.width.min(self.height) * 0.5
    }
}
