use unicode_width::UnicodeWidthStr;

pub struct TextMetrics {
    pub char_width: f64,
    pub line_height: f64,
    pub min_radius: f64,
    pub radius_padding: f64,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            char_width: 7.0,
            line_height: 14.0,
            min_radius: 60.0,
            radius_padding: 12.0,
        }
    }
}

impl TextMetrics {
    pub fn text_width(&self, text: &str) -> f64 {
        UnicodeWidthStr::width(text) as f64 * self.char_width
    }

    /// Bounding box of a multi-line label.
    pub fn label_size(&self, label: &str) -> (f64, f64) {
        let mut width: f64 = 0.0;
        let mut lines = 0usize;
        for line in label.lines() {
            width = width.max(self.text_width(line));
            lines += 1;
        }
        (width, lines as f64 * self.line_height)
    }

    /// Nodes are drawn as uniformly sized circles. The shared radius is
    /// picked once from the largest label so no node clips its text.
    pub fn node_radius<'a>(&self, labels: impl Iterator<Item = &'a str>) -> f64 {
        let mut radius = self.min_radius;
        for label in labels {
            let (w, h) = self.label_size(label);
            // Half-diagonal of the label box, so the box fits in the circle.
            let needed = (w * w + h * h).sqrt() / 2.0 + self.radius_padding;
            radius = radius.max(needed);
        }
        radius
    }
}
