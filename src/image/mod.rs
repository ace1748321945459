//! Pixel containers shared by every stage of the pipeline.
//!
//! - [`ImageU8`]: borrowed 8-bit grayscale view (stride aware).
//! - [`GrayImageU8`]: owned 8-bit buffer used for masks and cell patches.
//! - [`ImageF32`]: owned float buffer used for intermediate filtering.
pub mod f32;
pub mod io;
pub mod owned;
pub mod traits;
pub mod u8;

pub use self::f32::ImageF32;
pub use self::owned::GrayImageU8;
pub use self::traits::ImageView;
pub use self::u8::ImageU8;
