use std::env;
use std::io;
use std::process;

use apriori::{MinSupport, MiningConfig};
use argparse::{ArgumentParser, Store, StoreOption};

pub struct Arguments {
    pub input_file_path: String,
    pub output_rules_path: Option<String>,
    pub config: MiningConfig,
    pub min_lift: f64,
}

pub fn parse_args_or_exit() -> Arguments {
    let mut input_file_path = String::new();
    let mut output_rules_path: Option<String> = None;
    let mut min_support: Option<f64> = None;
    let mut min_count: Option<u32> = None;
    let mut min_confidence: f64 = 0.0;
    let mut min_lift: f64 = 0.0;
    {
        let mut parser = ArgumentParser::new();
        parser.set_description("Apriori frequent itemset and association rule miner.");

        parser
            .refer(&mut input_file_path)
            .add_option(
                &["--input"],
                Store,
                "Input dataset, one transaction per line, items separated by \
                 whitespace or commas.",
            )
            .metavar("file_path")
            .required();

        parser
            .refer(&mut output_rules_path)
            .add_option(
                &["--output"],
                StoreOption,
                "File path in which to store output rules, stdout if omitted. \
                 Format: antecedent ==> consequent, confidence, lift, \
                 all-confidence, cosine, support.",
            )
            .metavar("file_path");

        parser
            .refer(&mut min_support)
            .add_option(
                &["--min-support"],
                StoreOption,
                "Minimum itemset support as a fraction of transactions, in range [0,1].",
            )
            .metavar("threshold");

        parser
            .refer(&mut min_count)
            .add_option(
                &["--min-count"],
                StoreOption,
                "Minimum itemset support as an absolute number of transactions.",
            )
            .metavar("count");

        parser
            .refer(&mut min_confidence)
            .add_option(
                &["--min-confidence"],
                Store,
                "Minimum rule confidence threshold, in range [0,1].",
            )
            .metavar("threshold");

        parser
            .refer(&mut min_lift)
            .add_option(
                &["--min-lift"],
                Store,
                "Minimum rule lift threshold, in range [0,∞].",
            )
            .metavar("threshold");

        if env::args().count() == 1 {
            let _ = parser.print_help("Usage:", &mut io::stderr());
            process::exit(1);
        }

        if let Err(err) = parser.parse_args() {
            process::exit(err);
        }
    }

    let min_support = match (min_support, min_count) {
        (Some(fraction), None) => MinSupport::Fraction(fraction),
        (None, Some(count)) => MinSupport::Count(count),
        _ => {
            eprintln!("Error: exactly one of --min-support or --min-count must be given");
            process::exit(1);
        }
    };

    let config = match MiningConfig::new(min_support, min_confidence) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    };

    if min_lift < 0.0 || min_lift.is_nan() {
        eprintln!("Minimum lift must be in range [0,∞]");
        process::exit(1);
    }

    Arguments {
        input_file_path,
        output_rules_path,
        config,
        min_lift,
    }
}
