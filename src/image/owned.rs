//! Owned 8-bit grayscale buffer.
//!
//! Binary masks use `0` for background and `255` for foreground; cell patches
//! handed to the recognizer are plain grayscale. All helpers allocate a new
//! buffer and leave `self` untouched.
use super::traits::ImageView;
use super::u8::ImageU8;
use image::GrayImage;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Wrap raw row-major bytes (`data.len() == width * height`).
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        assert_eq!(
            data.len(),
            width * height,
            "buffer length does not match {width}x{height}"
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// Buffer with every pixel set to `value`.
    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self::new(width, height, vec![value; width * height])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: u8) {
        self.data[y * self.width + x] = v;
    }

    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.width;
        &mut self.data[start..start + self.width]
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8::packed(self.width, self.height, &self.data)
    }

    /// Copy of the half-open rectangle `[x0, x1) × [y0, y1)`, clipped to the
    /// image. Returns an empty buffer when the clipped rectangle is empty.
    pub fn crop(&self, x0: usize, y0: usize, x1: usize, y1: usize) -> Self {
        let x1 = x1.min(self.width);
        let y1 = y1.min(self.height);
        if x0 >= x1 || y0 >= y1 {
            return Self::new(0, 0, Vec::new());
        }
        let w = x1 - x0;
        let mut data = Vec::with_capacity(w * (y1 - y0));
        for y in y0..y1 {
            data.extend_from_slice(&self.row(y)[x0..x1]);
        }
        Self::new(w, y1 - y0, data)
    }

    /// Photometric inverse (`255 - v`).
    pub fn inverted(&self) -> Self {
        self.map(|v| 255 - v)
    }

    pub fn map(&self, f: impl Fn(u8) -> u8) -> Self {
        Self::new(self.width, self.height, self.data.iter().map(|&v| f(v)).collect())
    }

    /// Pixel-wise combination of two equally sized buffers.
    pub fn zip_map(&self, other: &Self, f: impl Fn(u8, u8) -> u8) -> Self {
        assert_eq!(
            (self.width, self.height),
            (other.width, other.height),
            "zip_map on mismatched sizes"
        );
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| f(a, b))
            .collect();
        Self::new(self.width, self.height, data)
    }

    /// Nearest-neighbour upscaling by an integer factor.
    pub fn upscale_nearest(&self, factor: usize) -> Self {
        let factor = factor.max(1);
        let (w, h) = (self.width * factor, self.height * factor);
        let mut data = Vec::with_capacity(w * h);
        for y in 0..h {
            let src = self.row(y / factor);
            data.extend((0..w).map(|x| src[x / factor]));
        }
        Self::new(w, h, data)
    }

    pub fn count_nonzero(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }

    pub fn from_gray_image(img: GrayImage) -> Self {
        let (w, h) = (img.width() as usize, img.height() as usize);
        Self::new(w, h, img.into_raw())
    }

    pub fn to_gray_image(&self) -> GrayImage {
        GrayImage::from_raw(self.width as u32, self.height as u32, self.data.clone())
            .unwrap_or_else(|| GrayImage::new(self.width as u32, self.height as u32))
    }
}

impl ImageView for GrayImageU8 {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
}
