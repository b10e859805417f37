//! Contagion entry point
//!
//! Runs the simulation headless: ticks until nobody is sick or the tick limit
//! is hit, then logs the outcome and optionally writes the epidemic curve.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use contagion::controls::Control;
use contagion::sim::Arena;
use contagion::{Config, Driver};

#[derive(Parser, Debug)]
#[command(
    name = "contagion",
    version,
    about = "Headless colliding-agent epidemic simulation"
)]
struct Args {
    /// JSON configuration file; defaults are used if missing or invalid
    config: Option<PathBuf>,

    /// Stop after this many ticks
    #[arg(long, default_value_t = 20_000)]
    ticks: u64,

    /// Arena side length
    #[arg(long, default_value_t = 600.0)]
    side: f32,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Slider override as NAME=VALUE, e.g. radius=3 or sick=25
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_override)]
    overrides: Vec<(Control, i32)>,

    /// Write the epidemic curve as JSON
    #[arg(long, value_name = "OUT.json")]
    history: Option<PathBuf>,

    /// Sleep the configured tick interval between ticks
    #[arg(long)]
    realtime: bool,
}

fn parse_override(s: &str) -> Result<(Control, i32), String> {
    let (name, raw) = s
        .split_once('=')
        .ok_or(format!("expected NAME=VALUE, got {}", s))?;
    let control = Control::from_str(name).ok_or(format!("unknown parameter: {}", name))?;
    let value = raw
        .parse()
        .map_err(|_| format!("bad value for {}: {}", name, raw))?;
    Ok((control, value))
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Contagion (headless) starting...");

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_or_default(path),
        None => Config::default(),
    };
    for (control, value) in &args.overrides {
        control.update(&mut config, *value);
    }
    if let Err(e) = config.validate() {
        log::error!("{}", e);
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    let side = args.side;
    if !(side > 0.0) {
        log::error!("arena side must be positive, got {}", side);
        eprintln!("arena side must be positive, got {}", side);
        return ExitCode::FAILURE;
    }
    let arena = Arena::square(side);
    let mut driver = match args.seed {
        Some(seed) => Driver::with_seed(config, arena, seed),
        None => Driver::new(config, arena),
    };

    let max_ticks = args.ticks;
    let interval = driver.tick_interval();
    driver.start();
    while driver.ticks() < max_ticks {
        driver.tick();
        if driver.tally().is_over() {
            log::info!("Epidemic over at tick {}", driver.ticks());
            break;
        }
        if args.realtime {
            std::thread::sleep(interval);
        }
    }
    driver.stop();

    let tally = driver.tally();
    log::info!(
        "Final after {} ticks: healthy={} sick={} recovered={}",
        driver.ticks(),
        tally.healthy,
        tally.sick,
        tally.recovered
    );
    if let Some(peak) = driver.history().peak_sick() {
        log::info!("Peak: {} sick at tick {}", peak.sick, peak.tick);
    }
    println!(
        "ticks={} healthy={} sick={} recovered={}",
        driver.ticks(),
        tally.healthy,
        tally.sick,
        tally.recovered
    );

    if let Some(path) = &args.history {
        let written = driver
            .history()
            .to_json()
            .map_err(|e| e.to_string())
            .and_then(|json| std::fs::write(path, json).map_err(|e| e.to_string()));
        match written {
            Ok(()) => log::info!("Wrote history to {}", path.display()),
            Err(e) => {
                log::error!("Failed to write history to {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use contagion::controls::Slider;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["contagion"]).unwrap();
        assert_eq!(args.ticks, 20_000);
        assert_eq!(args.side, 600.0);
        assert!(args.config.is_none());
        assert!(args.overrides.is_empty());
        assert!(!args.realtime);
    }

    #[test]
    fn test_flags_and_overrides() {
        let args = Args::try_parse_from([
            "contagion",
            "params.json",
            "--ticks=5",
            "--seed",
            "9",
            "--set",
            "radius=3",
            "--set",
            "sick=25",
            "--realtime",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("params.json")));
        assert_eq!(args.ticks, 5);
        assert_eq!(args.seed, Some(9));
        assert_eq!(
            args.overrides,
            vec![
                (Control::Radius, 3),
                (Control::SickPercentage(Slider::PERCENT), 25)
            ]
        );
        assert!(args.realtime);
    }

    #[test]
    fn test_bad_override_rejected() {
        assert!(Args::try_parse_from(["contagion", "--set", "gravity=3"]).is_err());
        assert!(Args::try_parse_from(["contagion", "--set", "radius"]).is_err());
        assert!(Args::try_parse_from(["contagion", "--set", "radius=big"]).is_err());
        assert!(Args::try_parse_from(["contagion", "--ticks", "-1"]).is_err());
    }
}
