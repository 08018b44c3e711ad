use std::path::PathBuf;

/// Stochastic redistricting by constrained graph clustering
#[derive(clap::Parser, Debug)]
#[command(name = "clustermander", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Generate redistricting plans and write them to a directory
    Generate(GenerateArgs),

    /// Load the inputs and print summary statistics
    Inspect(InspectArgs),
}

/// Input tables shared by every command.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// County adjacency list (first two columns name neighboring units)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub edges: PathBuf,

    /// Race table (name, population, hispanic, non-hispanic, white, black, american indian, asian)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub race: PathBuf,

    /// SNAP table (per-unit food assistance fraction in column 2)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub food: PathBuf,

    /// Wage table (per-unit wage score in column 2)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub wage: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output directory for plan files, defaults to "./plans"
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// JSON config file; command-line flags override its values
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Number of districts [default: 14]
    #[arg(short, long)]
    pub districts: Option<usize>,

    /// Attempt budget [default: 2000]
    #[arg(long)]
    pub attempts: Option<usize>,

    /// Number of plans to accept [default: 50]
    #[arg(long)]
    pub plans: Option<usize>,

    /// Allowed population excess as a fraction [default: 0.05]
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Weight of the race terms [default: 0.33]
    #[arg(long)]
    pub w_race: Option<f64>,

    /// Weight of the food term [default: 0.33]
    #[arg(long)]
    pub w_food: Option<f64>,

    /// Weight of the wage term [default: 0.33]
    #[arg(long)]
    pub w_wages: Option<f64>,

    /// Master seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Evaluate attempts in parallel (output is identical to a sequential run)
    #[arg(long)]
    pub parallel: bool,
}

#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Number of districts used to report the target population
    #[arg(short, long, default_value_t = 14)]
    pub districts: usize,
}
