use anyhow::Context;
use log::info;

mod camera;
mod curve;
mod error;
mod input;
mod math;
mod pawn;
mod scene;
mod session;
mod settings;

pub const CONFY_APP_NAME: &str = "stratcam-rs";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Optional path to an authored pitch-by-zoom curve (JSON key table).
    // Without one, a built-in profile tilts the camera down as it zooms out.
    let args: Vec<String> = std::env::args().collect();
    let pitch_curve = match args.get(1) {
        Some(path) => curve::FloatCurve::load(path)
            .with_context(|| format!("loading pitch curve '{path}'"))?,
        None => curve::FloatCurve::from_keys([
            (500.0, 25.0),
            (1300.0, 40.0),
            (1500.0, 45.0),
            (5000.0, 75.0),
        ])
        .context("building the built-in pitch curve")?,
    };

    let settings = settings::Settings::load();
    info!(
        "camera rig demo starting (zoom {:.0}..{:.0}, step {:.0})",
        settings.zoom.min_zoom_length, settings.zoom.max_zoom_length, settings.zoom.zoom_step_amount
    );

    let mut session = session::Session::new(settings, Some(pitch_curve));
    session.run_demo();

    let pawn = session.pawn().borrow();
    info!(
        "demo finished: pivot ({:.1}, {:.1}), arm {:.1} (target {:.1}), pitch {:.1}",
        pawn.location().x,
        pawn.location().y,
        pawn.boom.arm_length,
        session.controller().zoom_target_length(),
        pawn.boom.pitch
    );

    Ok(())
}
