//! more-dice: exact sum distribution for a mix of dice, e.g. `2d6 1d8 2d20`.

use std::io::Write;

use dice_stats::config::{flag_value, OutputFormat, ReportConfig};
use dice_stats::constants::DEFAULT_MIXED_DICE;
use dice_stats::dice_mechanics::parse_notation;
use dice_stats::distribution::Distribution;
use dice_stats::env_config::{init_logging, resolve_sort};
use dice_stats::report::write_report;
use dice_stats::types::DiceSpec;

fn print_usage() {
    println!("Usage: more-dice [--sort METHOD] [--json] [NdM ...]");
    println!();
    println!("Dice: <number of dice>d<sides on dice> (default: 2d6 1d8 2d20)");
    println!("Options:");
    println!("  --sort METHOD    probability | count | key | insertion (default: $DICE_STATS_SORT or probability)");
    println!("  --json           Emit the distribution as JSON");
}

fn main() {
    init_logging();

    let args: Vec<String> = std::env::args().collect();
    let mut sort: Option<String> = None;
    let mut json = false;
    let mut dice: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--sort" => {
                i += 1;
                let value = flag_value("--sort", args.get(i)).unwrap_or_else(|e| {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                });
                sort = Some(value.to_string());
            }
            "--json" => json = true,
            "--help" | "-h" => {
                print_usage();
                return;
            }
            flag if flag.starts_with("--") => {
                eprintln!("Unknown argument: {}", flag);
                print_usage();
                std::process::exit(1);
            }
            token => dice.push(token.to_string()),
        }
        i += 1;
    }

    let spec = if dice.is_empty() {
        DiceSpec::from_pairs(&DEFAULT_MIXED_DICE)
    } else {
        parse_notation(&dice)
    };
    let spec = spec.unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let sort = resolve_sort(sort.as_deref());
    let format = if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let cfg = ReportConfig::mixed(spec, sort).with_format(format);

    let dist = Distribution::compute(&cfg.spec);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = write_report(&mut out, &dist, &cfg).and_then(|_| out.flush()) {
        eprintln!("Failed to write report: {}", e);
        std::process::exit(1);
    }
}
