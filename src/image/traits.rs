//! Read-only row access shared by borrowed page views and owned masks.

/// Anything that can hand out rows of `width()` pixels.
pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Pixels of row `y`, exactly `width()` long.
    fn row(&self, y: usize) -> &[Self::Pixel];

    fn rows(&self) -> impl Iterator<Item = &[Self::Pixel]> {
        (0..self.height()).map(move |y| self.row(y))
    }

    fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}
