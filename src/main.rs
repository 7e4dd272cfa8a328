#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seawar::{
    init_logging, play_match, play_one_shot, AiPlayer, FieldConfig, Signal, TargetGrid,
    DEFAULT_HEIGHT, DEFAULT_WIDTH, STANDARD_FLEET,
};

#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Debug)]
#[cfg(feature = "std")]
struct FieldArgs {
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,
    /// Ship lengths in placement order, e.g. 4,3,3,2
    #[arg(long, value_delimiter = ',')]
    fleet: Option<Vec<usize>>,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
impl FieldArgs {
    fn config(&self) -> anyhow::Result<FieldConfig> {
        let fleet = self.fleet.clone().unwrap_or_else(|| STANDARD_FLEET.to_vec());
        FieldConfig::new(self.width, self.height, fleet).map_err(|e| anyhow::anyhow!(e))
    }

    fn rng(&self) -> SmallRng {
        if let Some(s) = self.seed {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        } else {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Lay out a fleet at random and print it.
    Place {
        #[command(flatten)]
        field: FieldArgs,
    },
    /// Let the computer hunt down a random fleet.
    Hunt {
        #[command(flatten)]
        field: FieldArgs,
    },
    /// Play the computer against itself.
    Local {
        #[command(flatten)]
        field: FieldArgs,
        #[arg(long, help = "Print the match summary as JSON")]
        json: bool,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Place { field } => {
            let config = field.config()?;
            let mut rng = field.rng();
            let (grid, ships) = config
                .random_fleet_grid(&mut rng)
                .map_err(|e| anyhow::anyhow!(e))?;
            println!("{}", grid);
            println!("{} ships placed", ships.len());
        }
        Commands::Hunt { field } => {
            let config = field.config()?;
            let mut rng = field.rng();
            let (mut enemy, _) = config
                .random_fleet_grid(&mut rng)
                .map_err(|e| anyhow::anyhow!(e))?;
            let mut overlay =
                TargetGrid::new(config.width, config.height).map_err(|e| anyhow::anyhow!(e))?;
            let mut shots = 0;
            loop {
                shots += 1;
                let answer = play_one_shot(&mut overlay, &mut enemy, &mut rng)
                    .map_err(|e| anyhow::anyhow!(e))?;
                if answer.signal == Signal::Win {
                    break;
                }
            }
            println!("Fleet destroyed in {} shots", shots);
            println!("{}", overlay);
        }
        Commands::Local { field, json } => {
            println!("Starting local AI vs AI game...");
            let config = field.config()?;
            let mut rng = field.rng();
            let mut ai1 =
                AiPlayer::new(config.width, config.height).map_err(|e| anyhow::anyhow!(e))?;
            let mut ai2 =
                AiPlayer::new(config.width, config.height).map_err(|e| anyhow::anyhow!(e))?;
            let summary = play_match(&config, &mut ai1, &mut ai2, &mut rng)
                .map_err(|e| anyhow::anyhow!(e))?;
            if json {
                println!("{}", serde_json::to_string(&summary)?);
            } else {
                for (i, fleet) in summary.fleets.iter().enumerate() {
                    println!("Player {} fleet:\n{}\n", i + 1, fleet);
                }
                println!(
                    "Player {} wins ({} shots vs {})",
                    summary.winner,
                    summary.shots[summary.winner - 1],
                    summary.shots[2 - summary.winner]
                );
            }
        }
    }
    Ok(())
}
