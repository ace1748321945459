use super::traits::ImageView;

/// Borrowed 8-bit grayscale view over a caller-owned buffer.
#[derive(Clone, Copy, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// Tightly packed view (`stride == w`).
    pub fn packed(w: usize, h: usize, data: &'a [u8]) -> Self {
        debug_assert!(data.len() >= w * h, "buffer smaller than {w}x{h}");
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }
}

impl ImageView for ImageU8<'_> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}
