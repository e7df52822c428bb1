use std::io;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use threshold_net::case::Case;
use threshold_net::error::NetError;
use threshold_net::harness::compare;
use threshold_net::sampler::CaseSampler;
use threshold_net::simulator::{run_with, SimulationProgram};
use threshold_net::state::NetworkState;
use threshold_net::stepper::{BaselineStepper, FastStepper, Stepper};

/// Simulate binary threshold networks. Without a mode, runs the built-in demo network.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// The log level, on stderr (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", global = true)]
    log_level: LevelFilter,
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Run the built-in nine-neuron network for 100 ticks
    Demo {
        /// Print the state every given number of ticks
        #[arg(long)]
        snapshot_every: Option<usize>,
    },
    /// Read one case and print the final state of the baseline rule
    Run(CaseArgs),
    /// Read one case and print the final state of the fast rule
    RunFast(CaseArgs),
    /// Read one case, run both rules and print both final states, whether they match and timings
    Verify(CaseArgs),
    /// Generate a large random network and time both rules on it
    Bench(BenchArgs),
}

#[derive(Args, Debug)]
struct CaseArgs {
    /// The case file in textual format; read from stdin if omitted
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Print the state every given number of ticks
    #[arg(long)]
    snapshot_every: Option<usize>,
}

#[derive(Args, Debug)]
struct BenchArgs {
    /// The number of neurons
    #[arg(short = 'M', long, default_value = "200000")]
    num_neurons: usize,
    /// The number of outputs of each neuron
    #[arg(long, default_value = "3")]
    out_degree: usize,
    /// The number of ticks
    #[arg(short = 'N', long, default_value = "1500")]
    num_steps: usize,
    /// The probability for a neuron to be initially active
    #[arg(long, default_value = "0.01")]
    activity: f64,
    /// The threshold of every neuron
    #[arg(long, default_value = "0.5")]
    threshold: f64,
    /// The seed used for sampling the network
    #[arg(long, default_value = "42")]
    seed: u64,
}

fn init_logging(level: LevelFilter) -> Result<(), NetError> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} - {m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .map_err(|e| NetError::IOError(e.to_string()))?;

    log4rs::init_config(config).map_err(|e| NetError::IOError(e.to_string()))?;
    Ok(())
}

fn read_case(args: &CaseArgs) -> Result<Case, NetError> {
    match &args.input {
        Some(path) => Case::open(path),
        None => Case::from_reader(io::stdin().lock()),
    }
}

fn simulate<S: Stepper>(
    stepper: &mut S,
    initial: NetworkState,
    num_steps: usize,
    snapshot_every: Option<usize>,
) -> Result<NetworkState, NetError> {
    let program = SimulationProgram::build(num_steps, snapshot_every)?;
    run_with(stepper, initial, &program, |snapshot| {
        println!(
            "STEP {:>4}: {:?}",
            snapshot.step,
            snapshot.state.activations()
        )
    })
}

fn demo(snapshot_every: Option<usize>) -> Result<(), NetError> {
    let case = Case::demo();
    let initial = case.initial_state();
    println!("BEFORE: {:?}", initial.activations());

    let mut stepper = BaselineStepper::build(case.connections(), case.thresholds())?;
    let final_state = simulate(&mut stepper, initial, case.num_steps(), snapshot_every)?;
    println!("AFTER : {:?}", final_state.activations());
    Ok(())
}

fn run_baseline(args: &CaseArgs) -> Result<(), NetError> {
    let case = read_case(args)?;
    let mut stepper = BaselineStepper::build(case.connections(), case.thresholds())?;
    let final_state = simulate(
        &mut stepper,
        case.initial_state(),
        case.num_steps(),
        args.snapshot_every,
    )?;
    println!("{}", final_state);
    Ok(())
}

fn run_fast(args: &CaseArgs) -> Result<(), NetError> {
    let case = read_case(args)?;
    let mut stepper = FastStepper::build(case.connections(), case.thresholds())?;
    let final_state = simulate(
        &mut stepper,
        case.initial_state(),
        case.num_steps(),
        args.snapshot_every,
    )?;
    println!("{}", final_state);
    Ok(())
}

fn verify(args: &CaseArgs) -> Result<(), NetError> {
    let case = read_case(args)?;
    let comparison = compare(&case, args.snapshot_every)?;
    println!("BASE : {}", comparison.baseline);
    println!("FAST : {}", comparison.fast);
    println!("MATCH: {}", comparison.matches);
    println!(
        "time  baseline={:.6}s  fast={:.6}s",
        comparison.baseline_elapsed.as_secs_f64(),
        comparison.fast_elapsed.as_secs_f64()
    );
    Ok(())
}

fn bench(args: &BenchArgs) -> Result<(), NetError> {
    let sampler = CaseSampler::build(
        args.num_neurons,
        args.out_degree,
        (0.0, 1.0),
        args.activity,
        args.threshold,
        args.num_steps,
    )?;
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let case = sampler.sample(&mut rng)?;
    log::info!("Case sampling: done!");

    println!(
        "[Bench] M={}, edges={}, steps={}",
        case.num_neurons(),
        case.connections().len(),
        case.num_steps()
    );
    let comparison = compare(&case, None)?;
    println!("baseline: {:.3}s", comparison.baseline_elapsed.as_secs_f64());
    println!("fast    : {:.3}s", comparison.fast_elapsed.as_secs_f64());
    println!(
        "match: {} (speedup x{:.1})",
        comparison.matches,
        comparison.speedup()
    );
    Ok(())
}

fn main() -> Result<(), NetError> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Unknown modes only print the usage.
            e.print()?;
            return Ok(());
        }
    };
    init_logging(cli.log_level)?;
    log::info!("{:?}", cli);

    match &cli.mode {
        None => demo(None),
        Some(Mode::Demo { snapshot_every }) => demo(*snapshot_every),
        Some(Mode::Run(args)) => run_baseline(args),
        Some(Mode::RunFast(args)) => run_fast(args),
        Some(Mode::Verify(args)) => verify(args),
        Some(Mode::Bench(args)) => bench(args),
    }
}
