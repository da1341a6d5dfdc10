use clap::{Parser, Subcommand};
use colored::Colorize;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use serde::Serialize;
use std::error::Error;
use std::path::Path;
use subnet_calc::config::Config;
use subnet_calc::output;
use subnet_calc::processing;
use subnet_calc::CidrError;

/// IPv4 subnet calculator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Largest number of subnets a split may produce
    #[arg(long, global = true)]
    max_subnets: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Split a network into subnets of a longer prefix
    Subnet {
        /// Network (or any host) address, e.g. 192.168.1.0
        network_ip: String,
        /// Current prefix length, e.g. 24
        current_prefix: String,
        /// Prefix length of the subnets, e.g. 26
        new_prefix: String,
    },
    /// Collapse networks into the fewest supernets
    Supernet {
        /// Networks in CIDR notation, comma or newline separated
        #[arg(required = true)]
        networks: Vec<String>,
    },
    /// Smallest single network covering all given networks
    Cover {
        /// Networks in CIDR notation, comma or newline separated
        #[arg(required = true)]
        networks: Vec<String>,
    },
    /// The network following the given one, same size
    Next {
        /// Network in CIDR notation, a bare address counts as /32
        network: String,
    },
}

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let args = Args::parse();
    let mut config = Config::from_env();
    init_logging(&config.log_config);
    if let Some(max_subnets) = args.max_subnets {
        config.max_subnets = max_subnets;
    }
    log::info!("#Start main() {:?}", args.command);

    match run(&args, &config) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            match e.downcast_ref::<CidrError>() {
                Some(err) if args.json => println!("{}", output::error_to_json(err)),
                Some(err) => eprintln!("{}: {err}", err.kind().red()),
                None => eprintln!("{}: {e}", "Error".red()),
            }
            std::process::exit(1);
        }
    }
}

fn run(args: &Args, config: &Config) -> Result<String, Box<dyn Error>> {
    match &args.command {
        Command::Subnet {
            network_ip,
            current_prefix,
            new_prefix,
        } => {
            let result = processing::subnet_from_parts(
                network_ip,
                current_prefix,
                new_prefix,
                config.max_subnets,
            )?;
            render(args, &result, output::render_subnetting)
        }
        Command::Supernet { networks } => {
            let result = processing::supernet(&processing::flatten_network_args(networks))?;
            render(args, &result, output::render_supernets)
        }
        Command::Cover { networks } => {
            let result =
                processing::minimal_cover_supernet(&processing::flatten_network_args(networks))?;
            render(args, &result, output::render_cover)
        }
        Command::Next { network } => {
            let result = processing::next_subnet_from_str(network)?;
            render(args, &result, output::render_next_subnet)
        }
    }
}

/// Render `result` as JSON or as a table, depending on `--json`.
fn render<T: Serialize>(
    args: &Args,
    result: &T,
    table: fn(&T) -> String,
) -> Result<String, Box<dyn Error>> {
    if args.json {
        Ok(output::to_json(result)?)
    } else {
        Ok(table(result))
    }
}

/// Initialize log4rs from `log_config`, or log warnings to stderr if it can't be read.
fn init_logging(log_config: &Path) {
    if log_config.exists() {
        match log4rs::init_file(log_config, Default::default()) {
            Ok(()) => return,
            Err(e) => eprintln!("Error initializing log4rs from {log_config:?}: {e}"),
        }
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {m}{n}")))
        .build();
    let config = log4rs::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn));
    match config {
        Ok(config) => {
            if let Err(e) = log4rs::init_config(config) {
                eprintln!("Error initializing logging: {e}");
            }
        }
        Err(e) => eprintln!("Error building log config: {e}"),
    }
}
