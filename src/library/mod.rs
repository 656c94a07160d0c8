//! The resource library: catalog structure and the built-in data set.
//!
//! # Categories
//!
//! ```text
//! extensions        # WebUI extension repositories
//! controlnet-sd15   # ControlNet v1.1 models for SD 1.5
//! controlnet-sdxl   # ControlNet models for SDXL
//! vae               # VAE weights
//! upscalers         # ESRGAN / SwinIR / HAT upscalers
//! ```

mod builtin;
pub mod catalog;

pub use catalog::{Catalog, Category};
