//! Camera for ray generation and scene rendering
//!
//! Rays start at a fixed eye point and pass through a rectangular view plane
//! at a fixed depth. Pixel `(x, y)` maps to the plane point
//! `(left + x·width/W, bottom + y·height/H, z)`; canvas row 0 therefore sits
//! at the plane's low-y edge.

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use rayon::prelude::*;

use crate::canvas::Canvas;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::vector::Vector3;

/// Rectangle on the plane `z = depth` that the image spans.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPlane {
    /// X coordinate of pixel column 0
    pub left: f32,
    /// Y coordinate of pixel row 0
    pub bottom: f32,
    /// Extent covered by all columns
    pub width: f32,
    /// Extent covered by all rows
    pub height: f32,
    /// Z coordinate of the plane
    pub depth: f32,
}

impl Default for ViewPlane {
    /// `x ∈ [-3.5, 3.5)`, `y ∈ [-3, 4)`, at `z = 5`.
    fn default() -> Self {
        Self {
            left: -3.5,
            bottom: -3.0,
            width: 7.0,
            height: 7.0,
            depth: 5.0,
        }
    }
}

/// Pinhole camera with an explicit view plane.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Rendered image height in pixel count
    pub image_height: u32,
    /// Ray origin shared by every pixel
    pub origin: Vector3,
    /// Plane the pixel grid is laid on
    pub view_plane: ViewPlane,
    /// Draw a progress bar while rendering
    pub show_progress: bool,
}

impl Camera {
    /// Creates a camera at `(0, 0, -5)` looking through the default view
    /// plane.
    pub fn new(image_width: u32, image_height: u32) -> Self {
        Self {
            image_width,
            image_height,
            origin: Vector3::new(0.0, 0.0, -5.0),
            view_plane: ViewPlane::default(),
            show_progress: false,
        }
    }

    /// Point on the view plane for pixel `(x, y)`.
    pub fn plane_point(&self, x: u32, y: u32) -> Vector3 {
        let vp = &self.view_plane;
        Vector3::new(
            vp.left + x as f32 * vp.width / self.image_width as f32,
            vp.bottom + y as f32 * vp.height / self.image_height as f32,
            vp.depth,
        )
    }

    /// Primary ray through pixel `(x, y)`. The direction is not normalized.
    pub fn ray_for_pixel(&self, x: u32, y: u32) -> Ray {
        Ray::new(self.origin, self.plane_point(x, y).sub(self.origin))
    }

    /// Trace pixel `(x, y)`.
    ///
    /// Returns `None` when the ray misses, meaning the pixel keeps its
    /// background.
    pub fn shade_pixel(&self, scene: &Scene, x: u32, y: u32) -> Option<[u8; 3]> {
        let ray = self.ray_for_pixel(x, y);
        let hit = scene.sphere.intersect(&ray)?;
        let eye = hit.point.sub(ray.origin).normalize();
        let material = &scene.sphere.material;
        let shade = material.lighting(&scene.light, hit.point, eye, hit.normal, scene.gating);
        Some(material.to_bytes(shade.total()))
    }

    /// Renders the scene into a fresh canvas cleared to the scene background.
    pub fn render(&self, scene: &Scene) -> Canvas {
        let mut canvas = Canvas::filled(self.image_width, self.image_height, scene.background);
        self.render_into(scene, &mut canvas);
        canvas
    }

    /// Renders hits into `canvas`, leaving missed pixels untouched.
    ///
    /// Rows are traced in parallel with Rayon; each worker owns a disjoint
    /// row slice. A canvas whose size differs from the camera's image size
    /// is left untouched.
    pub fn render_into(&self, scene: &Scene, canvas: &mut Canvas) {
        if (canvas.width(), canvas.height()) != (self.image_width, self.image_height) {
            warn!(
                "Canvas is {}x{} but camera renders {}x{}; skipping render",
                canvas.width(),
                canvas.height(),
                self.image_width,
                self.image_height
            );
            return;
        }
        let stride = canvas.stride();
        if stride == 0 || canvas.height() == 0 {
            return;
        }

        info!("Generating image using {} CPU cores...", rayon::current_num_threads());
        let generation_start = std::time::Instant::now();
        let pb = self.progress_bar(canvas.height() as u64);

        canvas
            .as_bytes_mut()
            .par_chunks_mut(stride)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, pixel) in row.chunks_exact_mut(Canvas::CHANNELS).enumerate() {
                    if let Some(rgb) = self.shade_pixel(scene, x as u32, y as u32) {
                        pixel.copy_from_slice(&rgb);
                    }
                }
                pb.inc(1);
            });

        pb.finish_and_clear();
        info!("Image generated in {:.2?}", generation_start.elapsed());
    }

    /// Single-threaded render through [`Canvas::set_pixel`].
    pub fn render_serial(&self, scene: &Scene, canvas: &mut Canvas) {
        let mut hits = 0usize;
        for y in 0..self.image_height {
            for x in 0..self.image_width {
                if let Some(rgb) = self.shade_pixel(scene, x, y) {
                    canvas.set_pixel(x as i64, y as i64, rgb);
                    hits += 1;
                }
            }
        }
        debug!("Serial render shaded {} of {} pixels", hits, self.image_width as u64 * self.image_height as u64);
    }

    fn progress_bar(&self, rows: u64) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(rows);
        match ProgressStyle::default_bar().template("{bar:40} {pos}/{len} rows ETA: {eta}") {
            Ok(style) => pb.set_style(style),
            Err(e) => debug!("Falling back to default progress style: {}", e),
        }
        pb
    }
}
