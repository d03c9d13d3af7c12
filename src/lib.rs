//! Per-pixel color-space strategies for paint pipelines.
//!
//! A color space owns a pixel record layout (its channel table) and implements
//! the [`ColorSpace`] contract over caller-owned byte buffers:
//!
//! - **Codec**: 8-bit device colors in and out of the native fixed-point record
//!   (`v * 257` widening, `v >> 8` narrowing).
//! - **Formatter**: raw and normalized channel values as text.
//! - **Alpha editing**, **mixing** (alpha-weighted averages) and **compositing**
//!   under a [`CompositeOp`], with byte strides and an optional coverage mask.
//! - **Materializing** native records into a straight-alpha RGBA8 [`DisplayImage`].
//!
//! Every operation is a synchronous, reentrant transform; nothing holds state
//! between calls. Concrete spaces are looked up through an explicit
//! [`ColorSpaceRegistry`].
//!
//! ```
//! use pixelspace::{Bgra16, ColorSpace, DeviceColor, RgbaU16Space};
//!
//! let cs = RgbaU16Space::new();
//! let mut px = Bgra16::default();
//! cs.native_color(DeviceColor::new(128, 64, 192), Some(255), bytemuck::bytes_of_mut(&mut px))
//!     .unwrap();
//! assert_eq!(px, Bgra16::new(128 * 257, 64 * 257, 192 * 257, 65535));
//! ```
#![forbid(unsafe_code)]

mod channel;
mod composite;
mod config;
mod display;
mod foundation;
mod mix;
mod pixel;
mod space;

pub use channel::depth::ChannelDepth;
pub use channel::descriptor::{ChannelDescriptor, ChannelKind};
pub use channel::layout::PixelLayout;
pub use composite::blend::{CompositeParams, Mask, Surface, SurfaceMut};
pub use composite::op::CompositeOp;
pub use config::settings::Settings;
pub use display::interop::{Rgba16Image, import_rgba8, import_rgba16};
pub use display::materialize::{
    DisplayImage, DisplayThreading, materialize_in_pool, materialize_with,
};
pub use foundation::error::{PixelError, PixelResult};
pub use foundation::logging::init_tracing;
pub use pixel::types::{Bgra8, Bgra16, DeviceColor, OPACITY_OPAQUE, OPACITY_TRANSPARENT};
pub use space::registry::ColorSpaceRegistry;
pub use space::rgba::{RgbaSpace, RgbaU8Space, RgbaU16Space};
pub use space::strategy::{ColorSpace, ColorSpaceId};
