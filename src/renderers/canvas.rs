//! Canvas: a 2D character grid for painting roster-line diagrams.

use super::charset::BoxChars;

// ─── Rect ─────────────────────────────────────────────────────────────────────

/// A rectangle in character-grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> usize {
        self.x + self.width
    }

    pub fn bottom(&self) -> usize {
        self.y + self.height
    }
}

// ─── Canvas ───────────────────────────────────────────────────────────────────

/// A 2D character grid used as a painting surface.
pub struct Canvas {
    pub width: usize,
    pub height: usize,
    cells: Vec<Vec<char>>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![' '; width]; height],
        }
    }

    pub fn get(&self, col: usize, row: usize) -> char {
        if row < self.height && col < self.width {
            self.cells[row][col]
        } else {
            ' '
        }
    }

    pub fn set(&mut self, col: usize, row: usize, ch: char) {
        if row < self.height && col < self.width {
            self.cells[row][col] = ch;
        }
    }

    /// Draw a horizontal line from x1 to x2 (inclusive) at row y.
    pub fn hline(&mut self, y: usize, x1: usize, x2: usize, ch: char) {
        let (lo, hi) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        for col in lo..=hi {
            self.set(col, y, ch);
        }
    }

    /// Draw a box outline using box-drawing characters from BoxChars.
    pub fn draw_box(&mut self, rect: Rect, bc: &BoxChars) {
        if rect.width < 2 || rect.height < 2 {
            return;
        }
        let x0 = rect.x;
        let y0 = rect.y;
        let x1 = rect.right() - 1;
        let y1 = rect.bottom() - 1;
        self.set(x0, y0, bc.top_left);
        self.set(x1, y0, bc.top_right);
        self.set(x0, y1, bc.bottom_left);
        self.set(x1, y1, bc.bottom_right);
        for col in (x0 + 1)..x1 {
            self.set(col, y0, bc.horizontal);
            self.set(col, y1, bc.horizontal);
        }
        for row in (y0 + 1)..y1 {
            self.set(x0, row, bc.vertical);
            self.set(x1, row, bc.vertical);
        }
    }

    /// Write a string starting at (col, row).
    pub fn write_str(&mut self, col: usize, row: usize, s: &str) {
        for (i, ch) in s.chars().enumerate() {
            let c = col + i;
            if c >= self.width || row >= self.height {
                break;
            }
            self.cells[row][c] = ch;
        }
    }

    /// Write a string centered on `center`, clipped at the left edge.
    pub fn write_centered(&mut self, center: usize, row: usize, s: &str) {
        let half = s.chars().count() / 2;
        self.write_str(center.saturating_sub(half), row, s);
    }

    /// Render the canvas to a string, trimming trailing whitespace per line.
    pub fn render_to_string(&self) -> String {
        let mut lines: Vec<String> = self
            .cells
            .iter()
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect();
        // Trim trailing empty lines
        while lines.last().map(|l: &String| l.is_empty()).unwrap_or(false) {
            lines.pop();
        }
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

impl std::fmt::Display for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render_to_string())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
