use clap::Parser;
use log::{debug, error, info, warn};

mod cli;
mod logger;

use canvastrace::camera::Camera;
use canvastrace::canvas::Canvas;
use canvastrace::output::{save_canvas_as_png, TevSink};
use canvastrace::random::{fill_noise, fill_noise_thread_local, seeded};
use canvastrace::raster::fill_triangle_ndc;
use canvastrace::scene::{Scene, TRIANGLE_BACKGROUND, TRIANGLE_COLOR, TRIANGLE_VERTICES};
use cli::{Args, SceneKind};
use logger::init_logger;

const TEV_IMAGE_NAME: &str = "canvastrace_output";

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    // Log application startup with version information
    info!("canvastrace - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));
    info!("Scene: {:?}, image resolution: {}x{}", args.scene, args.width, args.height);

    let mut tev = connect_tev(&args);

    let canvas = match args.scene {
        SceneKind::Triangle => render_triangle(&args),
        SceneKind::Noise => render_noise(&args, tev.as_mut()),
        SceneKind::Sphere => render_sphere(&args),
    };

    // Noise frames were streamed as they were produced
    if args.scene != SceneKind::Noise {
        if let Some(sink) = tev.as_mut() {
            if let Err(e) = sink.send_frame(&canvas) {
                warn!("Failed to send image data to TEV: {}", e);
            }
        }
    }

    if let Err(e) = save_canvas_as_png(&canvas, &args.output, args.flip) {
        error!("Failed to save image: {}", e);
        std::process::exit(1);
    }
}

/// Open the TEV connection when requested; failures only disable streaming.
fn connect_tev(args: &Args) -> Option<TevSink> {
    let should_send_to_tev = args.tev || args.tev_address.is_some();
    if !should_send_to_tev {
        return None;
    }
    let tev_address = args.tev_address.as_deref().unwrap_or("localhost");
    match TevSink::connect(tev_address, TEV_IMAGE_NAME, args.width, args.height) {
        Ok(sink) => Some(sink),
        Err(e) => {
            warn!("Failed to connect to TEV on {}: {}", tev_address, e);
            None
        }
    }
}

fn render_triangle(args: &Args) -> Canvas {
    let mut canvas = Canvas::filled(args.width, args.height, TRIANGLE_BACKGROUND);
    fill_triangle_ndc(&mut canvas, TRIANGLE_VERTICES, TRIANGLE_COLOR);
    info!("Triangle rasterized");
    canvas
}

fn render_noise(args: &Args, mut tev: Option<&mut TevSink>) -> Canvas {
    let mut canvas = Canvas::new(args.width, args.height);
    let mut seeded_rng = args.seed.map(seeded);
    if args.frames == 0 {
        warn!("No noise frames requested; output stays black");
    }

    let start = std::time::Instant::now();
    for frame in 0..args.frames {
        match seeded_rng.as_mut() {
            Some(rng) => fill_noise(&mut canvas, rng),
            None => fill_noise_thread_local(&mut canvas),
        }

        if let Some(sink) = tev.as_deref_mut() {
            if let Err(e) = sink.send_frame(&canvas) {
                warn!("Stopping TEV stream after frame {}: {}", frame, e);
                tev = None;
            }
        }
        debug!("Noise frame {} ready", frame);
    }
    info!("Generated {} noise frames in {:.2?}", args.frames, start.elapsed());
    canvas
}

fn render_sphere(args: &Args) -> Canvas {
    let scene = Scene::phong_sphere().with_gating(args.gating.into());
    let mut camera = Camera::new(args.width, args.height);
    camera.show_progress = !args.no_progress;
    camera.render(&scene)
}
