//! canvastrace: CPU canvas exercises
//!
//! Renders into a flat RGB8 [`canvas::Canvas`]: a scanline-filled triangle,
//! per-frame random noise, and a single unit sphere ray traced with Phong
//! lighting. The tracer has no graphics-API dependency; finished canvases go
//! to PNG files or a TEV viewer.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod canvas;
pub mod light;
pub mod material;
pub mod output;
pub mod random;
pub mod raster;
pub mod ray;
pub mod scene;
pub mod sphere;
pub mod vector;
