/// GridLayout maps board cells to screen pixels and back.
/// Pure geometry, no drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell_size: f32,
    pub rows: usize,
    pub cols: usize,
}

impl GridLayout {
    /// Horizontally centered in a view `view_width` wide, top edge at `top`
    pub fn centered(view_width: f32, top: f32, rows: usize, cols: usize, cell_size: f32) -> Self {
        let width = cols as f32 * cell_size;
        Self {
            origin_x: ((view_width - width) / 2.0).max(0.0),
            origin_y: top,
            cell_size,
            rows,
            cols,
        }
    }

    pub fn width(&self) -> f32 {
        self.cols as f32 * self.cell_size
    }

    pub fn height(&self) -> f32 {
        self.rows as f32 * self.cell_size
    }

    /// Y coordinate just below the last row
    pub fn bottom(&self) -> f32 {
        self.origin_y + self.height()
    }

    /// Convert screen coordinates to the (row, col) under them
    pub fn cell_at(&self, screen_x: f32, screen_y: f32) -> Option<(usize, usize)> {
        let local_x = screen_x - self.origin_x;
        let local_y = screen_y - self.origin_y;
        if local_x < 0.0 || local_y < 0.0 {
            return None;
        }

        let col = (local_x / self.cell_size) as usize;
        let row = (local_y / self.cell_size) as usize;
        (row < self.rows && col < self.cols).then_some((row, col))
    }

    /// Top-left screen corner of a cell
    pub fn cell_origin(&self, row: usize, col: usize) -> (f32, f32) {
        (
            self.origin_x + col as f32 * self.cell_size,
            self.origin_y + row as f32 * self.cell_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GridLayout {
        GridLayout::centered(400.0, 100.0, 20, 18, 20.0)
    }

    #[test]
    fn test_centered_origin() {
        let layout = sample();
        assert_eq!(layout.origin_x, 20.0);
        assert_eq!(layout.width(), 360.0);
        assert_eq!(layout.height(), 400.0);
        assert_eq!(layout.bottom(), 500.0);
    }

    #[test]
    fn test_narrow_view_clamps_origin() {
        let layout = GridLayout::centered(100.0, 0.0, 20, 18, 20.0);
        assert_eq!(layout.origin_x, 0.0);
    }

    #[test]
    fn test_cell_at_inside() {
        let layout = sample();
        assert_eq!(layout.cell_at(20.0, 100.0), Some((0, 0)));
        assert_eq!(layout.cell_at(45.0, 139.0), Some((1, 1)));
        assert_eq!(layout.cell_at(379.0, 499.0), Some((19, 17)));
    }

    #[test]
    fn test_cell_at_outside() {
        let layout = sample();
        assert_eq!(layout.cell_at(19.0, 150.0), None);
        assert_eq!(layout.cell_at(200.0, 99.0), None);
        assert_eq!(layout.cell_at(380.0, 150.0), None);
        assert_eq!(layout.cell_at(200.0, 500.0), None);
    }

    #[test]
    fn test_cell_origin_round_trips() {
        let layout = sample();
        let (x, y) = layout.cell_origin(7, 11);
        assert_eq!((x, y), (240.0, 240.0));
        assert_eq!(layout.cell_at(x + 1.0, y + 1.0), Some((7, 11)));
    }
}
