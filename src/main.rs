//! Cannonball Pool headless driver
//!
//! Fires one shot through the simulation and prints what the classroom
//! display would show: the pool distance, the Flight Data table and the result.
//!
//! ANGLE is in display convention (degrees above the horizon, 0..=90).

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::error::Error;
    use std::path::PathBuf;

    use clap::Parser;
    use serde::Serialize;

    use cannonball_pool::GameConfig;
    use cannonball_pool::sim::{FlightDataRow, GameSession, Outcome, format_table};

    #[derive(Parser, Debug)]
    #[command(name = "cannonball-pool")]
    #[command(about = "Fire one cannonball at the pool and show the flight data", long_about = None)]
    struct Args {
        /// Launch speed (m/s)
        #[arg(default_value = "17.5")]
        speed_mps: f64,

        /// Launch angle (degrees above the horizon)
        #[arg(default_value = "38.0")]
        angle_deg: f64,

        /// RNG seed for pool placement (defaults to the current time)
        #[arg(long)]
        seed: Option<u64>,

        /// JSON file overriding the environment constants
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print a JSON report instead of the table
        #[arg(long)]
        json: bool,
    }

    #[derive(Serialize)]
    struct Report {
        seed: u64,
        speed_mps: f64,
        angle_deg: f64,
        pool_distance_m: f64,
        landing_x: f64,
        flight_time_s: f64,
        outcome: Outcome,
        flight_data: Vec<FlightDataRow>,
    }

    pub fn run() -> Result<(), Box<dyn Error>> {
        let args = Args::parse();

        let config = match &args.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        let seed = args.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });
        log::info!("Cannonball Pool starting with seed: {}", seed);

        let mut session = GameSession::with_config(config, seed)?;
        // Controls show degrees above the horizon; the simulation measures
        // angles with y pointing down.
        if let Err(e) = session.fire(args.speed_mps, -args.angle_deg) {
            if e.is_user_error() {
                let config = session.config();
                log::warn!(
                    "Speed must be {}..={} m/s, angle {}..={}° above the horizon",
                    config.speed_mps.min,
                    config.speed_mps.max,
                    -config.angle_deg.max,
                    -config.angle_deg.min
                );
            }
            return Err(e.into());
        }
        let outcome = session.run_to_landing()?;

        let report = Report {
            seed,
            speed_mps: args.speed_mps,
            angle_deg: args.angle_deg,
            pool_distance_m: session.target().displacement_m,
            landing_x: session.position().x,
            flight_time_s: session.projectile().total_flight_s,
            outcome,
            flight_data: session.flight_data(),
        };

        if args.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        println!("Pool distance: {} m", report.pool_distance_m);
        println!(
            "Fired at {} m/s, {}° above the horizon",
            report.speed_mps, report.angle_deg
        );
        println!();
        print!("{}", format_table(&report.flight_data));
        println!();
        match outcome {
            Outcome::Hit => println!("Success! Right into the pool."),
            Outcome::Miss => println!("Missed. Try again."),
        }
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_defaults() {
            let args = Args::try_parse_from(["cannonball-pool"]).unwrap();
            assert_eq!(args.speed_mps, 17.5);
            assert_eq!(args.angle_deg, 38.0);
            assert!(args.seed.is_none());
            assert!(args.config.is_none());
            assert!(!args.json);
        }

        #[test]
        fn test_positional_and_flags() {
            let args = Args::try_parse_from([
                "cannonball-pool",
                "15",
                "36",
                "--seed",
                "42",
                "--config",
                "moon.json",
                "--json",
            ])
            .unwrap();
            assert_eq!(args.speed_mps, 15.0);
            assert_eq!(args.angle_deg, 36.0);
            assert_eq!(args.seed, Some(42));
            assert_eq!(args.config, Some(PathBuf::from("moon.json")));
            assert!(args.json);
        }

        #[test]
        fn test_bad_arguments() {
            assert!(Args::try_parse_from(["cannonball-pool", "fast"]).is_err());
            assert!(Args::try_parse_from(["cannonball-pool", "15", "36", "7"]).is_err());
            assert!(Args::try_parse_from(["cannonball-pool", "--seed"]).is_err());
            assert!(Args::try_parse_from(["cannonball-pool", "--seed", "-1"]).is_err());
        }

        #[test]
        fn test_command_definition() {
            use clap::CommandFactory;
            Args::command().debug_assert();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    if let Err(e) = native::run() {
        log::error!("{}", e);
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // A web host drives `sim::GameSession` directly
}
