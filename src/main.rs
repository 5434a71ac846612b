use log::{ error, info, warn };

use vecmath_trails::logger;
use vecmath_trails::settings::Settings;
use vecmath_trails::simulation::Simulation;

fn load_settings() -> Settings {
    match std::env::args().nth(1) {
        None => {
            info!("No settings file given, using defaults");
            Settings::default()
        },
        Some(path) => match Settings::load(&path) {
            Ok(settings) => {
                info!("Loaded settings from {}", path);
                settings
            },
            Err(err) => {
                warn!("Unable to load settings from {}: {}", path, err);
                Settings::default()
            },
        },
    }
}

fn main() {
    if let Err(err) = logger::init(log::LevelFilter::Debug) {
        eprintln!("Unable to initialise logger: {err}");
    }

    let settings = load_settings();
    if !settings.verbose {
        log::set_max_level(log::LevelFilter::Info);
    }
    if settings.trail_rate <= 0.0 {
        warn!("Trail rate is {}, no trails will be emitted", settings.trail_rate);
    }

    let mut simulation = Simulation::new(&settings);
    match simulation.run(settings.steps) {
        Ok(summary) => {
            info!("Steps: {}", summary.steps);
            info!("Trail particles: {}", summary.trail_count);
            info!("Particle centroid: {}", summary.centroid);
            info!("Furthest particle: {}", summary.max_distance);
        },
        Err(err) => error!("Simulation failed: {}", err),
    }

    log::logger().flush();
}
