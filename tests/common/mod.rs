#![allow(dead_code)]

pub mod glyph_reader;
pub mod synthetic_image;
