//! Headless runner: drives a synthetic molecule and a particle network
//! through the frame loop and logs what a renderer would have received.
//!
//! Usage: `vizloop [options.toml] [frames]`

use std::{f32::consts::TAU, path::Path};

use vizloop::{
    animation::{FixedStepScheduler, FrameAnimator, FrameLoop},
    molecule::{MoleculeData, MoleculeScene},
    network::{NetworkScene, RecordingSurface, Rect},
    options::Options,
};

const DEFAULT_FRAMES: u64 = 600;
const CANVAS: (f32, f32) = (1280.0, 720.0);

/// Alpha-helix-like backbone: one atom per residue, bonded in sequence.
fn synthetic_helix(residues: u32) -> MoleculeData {
    let mut positions = Vec::with_capacity(residues as usize * 3);
    for i in 0..residues {
        let angle = i as f32 * TAU / 3.6;
        positions.extend_from_slice(&[
            2.3 * angle.cos(),
            1.5 * i as f32,
            2.3 * angle.sin(),
        ]);
    }
    let bonds = (1..residues).map(|i| [i - 1, i]).collect();
    MoleculeData {
        positions,
        colors: None,
        bonds,
    }
}

struct Args {
    options: Option<String>,
    frames: u64,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        options: None,
        frames: DEFAULT_FRAMES,
    };
    for arg in std::env::args().skip(1) {
        if Path::new(&arg)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
        {
            args.options = Some(arg);
        } else {
            args.frames = arg
                .parse()
                .map_err(|e| format!("invalid frame count {arg:?}: {e}"))?;
        }
    }
    Ok(args)
}

fn main() {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            log::error!("{e}");
            log::error!("Usage: vizloop [options.toml] [frames]");
            std::process::exit(1);
        }
    };

    let options = match args.options.as_deref() {
        Some(path) => match Options::load(Path::new(path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    let mut molecule = MoleculeScene::new(&options);
    molecule.finish_load(Ok(synthetic_helix(120)));
    log::info!("{}", molecule.status_text());

    let (width, height) = CANVAS;
    let mut network = NetworkScene::new(width, height, &options.network, 0x5eed);
    // Title box centred near the top third of the canvas
    network.set_obstacle(Some(Rect::new(
        width * 0.5 - 240.0,
        height * 0.3 - 40.0,
        480.0,
        80.0,
    )));

    let mut surface = RecordingSurface::new();
    let mut scheduler = FixedStepScheduler::at_fps(60).with_frame_limit(args.frames);
    let mut peak_lines = 0;

    let stats = FrameLoop::new().run(&mut scheduler, |clock| {
        let update = molecule.tick(clock).merge(network.tick(clock));
        network.draw(&mut surface);
        peak_lines = peak_lines.max(surface.line_count());
        update
    });

    log::info!(
        "{} frames ({} dirty), {:.1}s simulated",
        stats.frames,
        stats.dirty_frames,
        stats.frames as f32 / 60.0
    );
    log::info!(
        "molecule: {} atoms, spin {:.2} rad",
        molecule.atom_count(),
        molecule.spin().angle()
    );
    log::info!(
        "network: {} particles, {} lines last frame, {peak_lines} peak",
        network.particles().len(),
        surface.line_count()
    );
}
