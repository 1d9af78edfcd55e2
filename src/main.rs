use anyhow::Context;
use clap::{ArgAction, Parser};
use log::LevelFilter;
use rand::rngs::StdRng;
use rand::SeedableRng;

use dimpsled::{Config, HostSysfs};

/// Set a dim light for a connected PS controller
#[derive(Parser, Debug)]
#[command(
    name = "dimpsled",
    version,
    long_about = "dimpsled takes a PS controller device, or any device that behaves similarly, \
and chooses a random dim, non aggressive light and color, so that it does not burn the eyes \
of the people in front of you."
)]
struct Args {
    /// Any device ending with @global, for which there is a corresponding @red, @green and @blue
    #[arg(short, long, default_value = "")]
    device: String,

    /// Color palette to use (pastelle)
    #[arg(short, long, default_value = "pastelle")]
    palette: String,

    /// More logging, repeat for debug output
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            device: args.device,
            palette: args.palette,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(config: &Config) -> anyhow::Result<()> {
    let mut rng = StdRng::from_entropy();
    let outcome = dimpsled::run(config, &HostSysfs, &mut rng)
        .with_context(|| format!("could not set a color on {:?}", config.device))?;
    println!("{}", outcome);
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = Config::from(args);
    if let Err(e) = run(&config) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
