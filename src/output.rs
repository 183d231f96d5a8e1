//! # Output Module
//!
//! Display collaborators for a finished [`Canvas`]:
//! - PNG file export through the `image` crate
//! - Real-time visualization via TEV (The EXR Viewer)
//!
//! ## TEV Integration
//!
//! [`TevSink`] opens one TCP connection, creates the image once and then
//! pushes whole frames with update packets, which is what the noise exercise
//! needs for its per-frame refresh. TEV expects planar float channels, so
//! each frame is converted from interleaved RGB8 to `RRR…GGG…BBB…` in
//! `[0, 1]`.

use image::{imageops, ImageBuffer, Rgb, RgbImage};
use log::{debug, info};
use std::error::Error;
use std::net::TcpStream;
use std::path::Path;
use tev_client::{PacketCreateImage, PacketUpdateImage, TevClient};

use crate::canvas::Canvas;

/// Default TEV listening port.
pub const TEV_DEFAULT_PORT: u16 = 14158;

const CHANNEL_NAMES: [&str; 3] = ["R", "G", "B"];

/// Copy a canvas into an `image` buffer.
///
/// With `flip_vertical` the last canvas row becomes the top of the image,
/// matching how a bottom-up texture upload would display the buffer.
pub fn canvas_to_image(canvas: &Canvas, flip_vertical: bool) -> RgbImage {
    let image: RgbImage = ImageBuffer::from_fn(canvas.width(), canvas.height(), |x, y| {
        Rgb(canvas.get_pixel(x as i64, y as i64).unwrap_or([0, 0, 0]))
    });
    if flip_vertical {
        imageops::flip_vertical(&image)
    } else {
        image
    }
}

/// Save a canvas as an 8-bit PNG.
///
/// Only `.png` paths are accepted; anything else is an error before any file
/// is touched.
pub fn save_canvas_as_png(canvas: &Canvas, output_path: &str, flip_vertical: bool) -> Result<(), Box<dyn Error>> {
    let is_png = Path::new(output_path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
    if !is_png {
        return Err(format!("unsupported output file '{}': only .png is supported", output_path).into());
    }

    canvas_to_image(canvas, flip_vertical).save(output_path)?;
    info!("Image saved as {}", output_path);
    Ok(())
}

/// Append the default TEV port when `address` has none.
pub fn tev_address_with_port(address: &str) -> String {
    if address.contains(':') {
        address.to_string()
    } else {
        format!("{}:{}", address, TEV_DEFAULT_PORT)
    }
}

/// Interleaved RGB8 to planar `[0, 1]` floats, the layout TEV reads.
pub fn planar_channels(canvas: &Canvas) -> Vec<f32> {
    let bytes = canvas.as_bytes();
    let mut data = Vec::with_capacity(bytes.len());
    for channel in 0..Canvas::CHANNELS {
        data.extend(
            bytes
                .iter()
                .skip(channel)
                .step_by(Canvas::CHANNELS)
                .map(|&b| b as f32 / 255.0),
        );
    }
    data
}

/// Open connection to a TEV viewer displaying one named image.
pub struct TevSink {
    client: TevClient,
    image_name: String,
    width: u32,
    height: u32,
    frames_sent: u64,
}

impl TevSink {
    /// Connect to TEV at `address` and create an image of the given size.
    pub fn connect(address: &str, image_name: &str, width: u32, height: u32) -> Result<Self, Box<dyn Error>> {
        let address = tev_address_with_port(address);
        debug!("Attempting to connect to TEV at {}", address);

        let stream = TcpStream::connect(&address)?;
        if let Err(e) = stream.set_nodelay(true) {
            debug!("Failed to set TCP_NODELAY: {}", e);
        }
        let mut client = TevClient::wrap(stream);

        client.send(PacketCreateImage {
            image_name,
            width,
            height,
            channel_names: &CHANNEL_NAMES,
            grab_focus: true,
        })?;
        info!("Image '{}' created in TEV at {}", image_name, address);

        Ok(Self {
            client,
            image_name: image_name.to_string(),
            width,
            height,
            frames_sent: 0,
        })
    }

    /// Replace the displayed pixels with `canvas`.
    pub fn send_frame(&mut self, canvas: &Canvas) -> Result<(), Box<dyn Error>> {
        if (canvas.width(), canvas.height()) != (self.width, self.height) {
            return Err(format!(
                "frame is {}x{} but TEV image '{}' is {}x{}",
                canvas.width(),
                canvas.height(),
                self.image_name,
                self.width,
                self.height
            )
            .into());
        }

        let start_time = std::time::Instant::now();
        let data = planar_channels(canvas);
        let plane = self.width as u64 * self.height as u64;

        self.client.send(PacketUpdateImage {
            image_name: &self.image_name,
            grab_focus: false,
            channel_names: &CHANNEL_NAMES,
            x: 0,
            y: 0,
            width: self.width,
            height: self.height,
            channel_offsets: &[0, plane, 2 * plane],
            channel_strides: &[1, 1, 1],
            data: &data,
        })?;

        self.frames_sent += 1;
        debug!(
            "Frame {} sent to TEV in {:.2?} ({:.1} MB)",
            self.frames_sent,
            start_time.elapsed(),
            data.len() as f32 * 4.0 / 1_000_000.0
        );
        Ok(())
    }

    /// Number of frames delivered so far.
    pub fn frames_sent(&self) -> u64 {
        self.frames_sent
    }
}
