//! Page geometry for layout.
//!
//! Coordinates follow PDF conventions: origin at the bottom-left corner,
//! y increasing upward, units in points (1/72 inch).

/// Page dimensions and margins defining the content area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    /// Page width in points
    pub width: f32,
    /// Page height in points
    pub height: f32,
    /// Left margin in points
    pub margin_left: f32,
    /// Right margin in points
    pub margin_right: f32,
    /// Top margin in points
    pub margin_top: f32,
    /// Bottom margin in points
    pub margin_bottom: f32,
}

impl PageGeometry {
    /// A4 page (210mm x 297mm) with uniform 50pt margins.
    pub fn a4() -> Self {
        Self::new(595.0, 842.0, 50.0)
    }

    /// US Letter page (8.5" x 11") with uniform 50pt margins.
    pub fn letter() -> Self {
        Self::new(612.0, 792.0, 50.0)
    }

    /// Create a page geometry with a uniform margin.
    pub fn new(width: f32, height: f32, margin: f32) -> Self {
        Self {
            width,
            height,
            margin_left: margin,
            margin_right: margin,
            margin_top: margin,
            margin_bottom: margin,
        }
    }

    /// Width of the content area (inside the horizontal margins).
    pub fn content_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }

    /// Height of the content area (inside the vertical margins).
    pub fn content_height(&self) -> f32 {
        self.height - self.margin_top - self.margin_bottom
    }

    /// x coordinate of the left content edge.
    pub fn content_left(&self) -> f32 {
        self.margin_left
    }

    /// x coordinate of the right content edge.
    pub fn content_right(&self) -> f32 {
        self.width - self.margin_right
    }

    /// y coordinate of the top content edge (PDF coordinates, from the bottom).
    pub fn content_top(&self) -> f32 {
        self.height - self.margin_top
    }

    /// y coordinate of the bottom content edge.
    pub fn content_bottom(&self) -> f32 {
        self.margin_bottom
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_dimensions() {
        let geom = PageGeometry::a4();
        assert_eq!(geom.width, 595.0);
        assert_eq!(geom.height, 842.0);
    }

    #[test]
    fn test_letter_dimensions() {
        let geom = PageGeometry::letter();
        assert_eq!(geom.width, 612.0);
        assert_eq!(geom.height, 792.0);
        assert_eq!(geom.content_width(), 512.0);
    }

    #[test]
    fn test_content_area() {
        let geom = PageGeometry::new(600.0, 800.0, 50.0);
        assert_eq!(geom.content_width(), 500.0);
        assert_eq!(geom.content_height(), 700.0);
        assert_eq!(geom.content_left(), 50.0);
        assert_eq!(geom.content_right(), 550.0);
        assert_eq!(geom.content_top(), 750.0);
        assert_eq!(geom.content_bottom(), 50.0);
    }
}
