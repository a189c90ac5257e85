use anyhow::{anyhow, Context, Result};
use clap::{arg, ArgAction, Command};
use knapsack_dp::*;
use std::{fs, io::Read};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

const MUSEUM_VALUES: [u32; 4] = [10, 5, 16, 11];
const MUSEUM_WEIGHTS: [u32; 4] = [3, 2, 4, 4];
const MUSEUM_CAPACITY: u32 = 10;

fn cli() -> Command {
    Command::new("knapsack")
        .about("Solves 0/1 knapsack instances by dynamic programming")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("demo")
                .about("Solves the built-in museum instance")
                .arg(arg!(--json "Print the summary as json").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("solve")
                .about("Solves an instance")
                .arg(
                    arg!(<INSTANCE> "Instance json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(arg!(--json "Print the summary as json").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("generate")
                .about("Generates a random instance")
                .arg(
                    arg!(<SEED> "A string used in seed generation")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<NUM_ITEMS> "Number of items")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--budget [BUDGET] "Capacity as a percentage of total weight")
                        .value_parser(clap::value_parser!(u32))
                        .default_value("50"),
                ),
        )
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("demo", sub_m)) => demo(sub_m.get_flag("json")),
        Some(("solve", sub_m)) => solve(
            sub_m.get_one::<String>("INSTANCE").unwrap().clone(),
            sub_m.get_flag("json"),
        ),
        Some(("generate", sub_m)) => generate(
            sub_m.get_one::<String>("SEED").unwrap().clone(),
            *sub_m.get_one::<usize>("NUM_ITEMS").unwrap(),
            *sub_m.get_one::<u32>("budget").unwrap(),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

pub fn demo(json: bool) -> Result<()> {
    let solver = KnapsackSolver::from_parallel(&MUSEUM_VALUES, &MUSEUM_WEIGHTS, MUSEUM_CAPACITY)?;
    report(&solver.solve(), json);
    Ok(())
}

pub fn solve(instance: String, json: bool) -> Result<()> {
    let instance = load_instance(&instance)?;
    let solver = KnapsackSolver::new(instance)?;
    report(&solver.solve(), json);
    Ok(())
}

pub fn generate(seed: String, num_items: usize, budget_percent: u32) -> Result<()> {
    let track = Track {
        budget_percent,
        ..Track::new(num_items)
    };
    let instance = ProblemInstance::generate(&seed_from_str(&seed), &track)?;
    println!("{}", jsonify(&InstanceData::from(&instance)));
    Ok(())
}

fn report(summary: &Summary, json: bool) {
    if json {
        println!("{}", jsonify(summary));
    } else {
        println!("{}", summary);
    }
}

fn load_instance(instance: &str) -> Result<ProblemInstance> {
    let instance = if instance == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read instance from stdin")?;
        buffer
    } else if instance.ends_with(".json") {
        fs::read_to_string(instance)
            .with_context(|| format!("Failed to read instance file: {}", instance))?
    } else {
        instance.to_string()
    };

    let data = dejsonify::<InstanceData>(&instance).context("Failed to parse instance")?;
    Ok(ProblemInstance::try_from(data)?)
}
