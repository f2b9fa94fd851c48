//! Sample formats and normalization

pub mod convert;
pub mod format;


pub use convert::{i16_to_f32, i24_to_f32, normalize, sign_extend_24, u8_to_f32};
pub use format::{Codec, INT24_MAX, INT24_MIN, SampleFormat};
