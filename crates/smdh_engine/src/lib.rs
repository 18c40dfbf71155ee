#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_lossless,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]
mod error;
pub use error::*;

mod unicode_field;
pub use unicode_field::*;

mod tiling;
pub use tiling::*;

mod rgb565;
pub use rgb565::*;

mod writer;
pub use writer::*;

mod smdh;
pub use smdh::*;

mod default_icon;
pub use default_icon::*;

mod theme_pack;
pub use theme_pack::*;
