//! dice-stats: exact sum distribution for N identical dice.
//!
//! Prints the most likely sum, then every sum sorted descending by the chosen
//! key.

use std::io::Write;

use dice_stats::config::{flag_value, OutputFormat, ReportConfig};
use dice_stats::constants::{DEFAULT_DICE_COUNT, DEFAULT_DICE_SIDES};
use dice_stats::distribution::Distribution;
use dice_stats::env_config::{init_logging, resolve_sort};
use dice_stats::report::write_report;
use dice_stats::types::DiceSpec;

struct Args {
    count: u32,
    sides: u32,
    sort: Option<String>,
    show_breakdown: bool,
    json: bool,
}

fn print_usage() {
    println!("Usage: dice-stats [--count N] [--sides S] [--sort METHOD] [--no-breakdown] [--json]");
    println!();
    println!("Options:");
    println!("  --count N        Number of dice (default: {})", DEFAULT_DICE_COUNT);
    println!("  --sides S        Faces per die (default: {})", DEFAULT_DICE_SIDES);
    println!("  --sort METHOD    probability | count | key | insertion (default: $DICE_STATS_SORT or probability)");
    println!("  --no-breakdown   Only print the most likely sum");
    println!("  --json           Emit the distribution as JSON");
}

fn require_value<'a>(flag: &str, value: Option<&'a String>) -> &'a str {
    flag_value(flag, value).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    })
}

fn parse_num(flag: &str, value: Option<&String>) -> u32 {
    let raw = require_value(flag, value);
    raw.parse().unwrap_or_else(|_| {
        eprintln!("Invalid {} value: {}", flag, raw);
        std::process::exit(1);
    })
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut count = DEFAULT_DICE_COUNT;
    let mut sides = DEFAULT_DICE_SIDES;
    let mut sort: Option<String> = None;
    let mut show_breakdown = true;
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" => {
                i += 1;
                count = parse_num("--count", args.get(i));
            }
            "--sides" => {
                i += 1;
                sides = parse_num("--sides", args.get(i));
            }
            "--sort" => {
                i += 1;
                sort = Some(require_value("--sort", args.get(i)).to_string());
            }
            "--no-breakdown" => show_breakdown = false,
            "--json" => json = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    Args {
        count,
        sides,
        sort,
        show_breakdown,
        json,
    }
}

fn main() {
    init_logging();
    let args = parse_args();

    let spec = DiceSpec::uniform(args.count, args.sides).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let cfg = ReportConfig::uniform(spec, resolve_sort(args.sort.as_deref()))
        .with_breakdown(args.show_breakdown)
        .with_format(format);

    let dist = Distribution::compute(&cfg.spec);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = write_report(&mut out, &dist, &cfg).and_then(|_| out.flush()) {
        eprintln!("Failed to write report: {}", e);
        std::process::exit(1);
    }
}
