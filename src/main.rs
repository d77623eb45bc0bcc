mod command_line_args;

use apriori::{filter_rules, mine, Dataset, ItemSet, Itemizer, MiningError, SupportCounts};
use command_line_args::parse_args_or_exit;
use command_line_args::Arguments;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_itemsets<'a, I>(title: &str, itemsets: I, frequent: &SupportCounts, itemizer: &Itemizer)
where
    I: IntoIterator<Item = &'a ItemSet>,
{
    println!("{}", title);
    for itemset in itemsets {
        let count = frequent.get(itemset).cloned().unwrap_or(0);
        println!("  {} ({})", itemset.to_string(itemizer), count);
    }
}

fn mine_apriori(args: &Arguments) -> Result<(), MiningError> {
    println!("Mining data set: {}", args.input_file_path);
    let start = Instant::now();
    let timer = Instant::now();
    let dataset = Dataset::read(&args.input_file_path)?;
    println!(
        "Read {} transactions containing {} distinct items in {} ms.",
        dataset.num_transactions(),
        dataset.itemizer().len(),
        timer.elapsed().as_millis()
    );

    println!("Mining frequent itemsets, closures and rules...");
    let timer = Instant::now();
    let result = mine(&dataset, &args.config)?;
    println!(
        "Found {} frequent itemsets (min count {}) and {} rules in {} ms.",
        result.frequent.len(),
        result.min_count,
        result.rules.len(),
        timer.elapsed().as_millis()
    );

    let itemizer = dataset.itemizer();
    print_itemsets("FREQUENT", result.frequent.keys(), &result.frequent, itemizer);
    print_itemsets("MAXIMAL", &result.maximal, &result.frequent, itemizer);
    print_itemsets("CLOSED", &result.closed, &result.frequent, itemizer);

    let rules = filter_rules(&result.rules, args.config.min_confidence, args.min_lift);
    println!(
        "{} of {} rules pass the confidence and lift thresholds.",
        rules.len(),
        result.rules.len()
    );

    let timer = Instant::now();
    {
        let writer: Box<dyn Write> = match args.output_rules_path {
            Some(ref path) => Box::new(File::create(path)?),
            None => Box::new(io::stdout()),
        };
        let mut output = BufWriter::new(writer);
        writeln!(
            output,
            "Antecedent => Consequent, Confidence, Lift, AllConfidence, Cosine, Support"
        )?;
        for rule in rules {
            writeln!(
                output,
                "{}, {}, {}, {}, {}, {}",
                rule.to_string(itemizer),
                rule.confidence(),
                rule.lift(),
                rule.all_confidence(),
                rule.cosine(),
                rule.support(),
            )?;
        }
        output.flush()?;
    }
    println!("Wrote rules in {} ms.", timer.elapsed().as_millis());

    println!("Total runtime: {} ms", start.elapsed().as_millis());

    Ok(())
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "apriori=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let arguments = parse_args_or_exit();

    if let Err(err) = mine_apriori(&arguments) {
        println!("Error: {}", err);
        process::exit(1);
    }
}
