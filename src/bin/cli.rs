// src/bin/cli.rs

use clap::{ArgGroup, Parser};
use ptview::config::Config;
use ptview::model::dataset::dataset;
use ptview::model::element::{Family, ALL_FAMILIES};
use ptview::ui::element_card;
use ptview::utils::logger;

/// Periodic table lookups from the command line.
#[derive(Parser, Debug)]
#[command(
    name = "ptview-cli",
    version,
    about = "Query the periodic table without the interactive viewer",
    group = ArgGroup::new("query").args(["list", "show", "family"])
)]
struct Cli {
    /// List every element with atomic number, symbol and name
    #[arg(short, long)]
    list: bool,

    /// Show the full info card for one element symbol
    #[arg(short, long, value_name = "SYMBOL")]
    show: Option<String>,

    /// List the members of a chemical family
    #[arg(short, long, value_name = "FAMILY")]
    family: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    let (config, _) = Config::load();
    let _ = logger::init(config.verbose_logging);

    let set = match dataset() {
        Ok(set) => set,
        Err(e) => {
            log::error!("element dataset failed to load: {}", e);
            std::process::exit(1);
        }
    };

    if cli.list {
        for e in set.all() {
            println!("{:>3}  {:<3} {}", e.atomic_number, e.symbol, e.name);
        }
    } else if let Some(symbol) = cli.show.as_deref() {
        match set.by_symbol(symbol) {
            Some(element) => print!("{}", element_card(set, element, &config)),
            None => {
                log::error!("no element with symbol '{}'", symbol);
                std::process::exit(1);
            }
        }
    } else if let Some(name) = cli.family.as_deref() {
        match Family::parse(name) {
            Some(family) => {
                let members = set.family_members(family);
                println!("{} ({} elements):", family, members.len());
                for e in members {
                    println!("{:>3}  {:<3} {}", e.atomic_number, e.symbol, e.name);
                }
            }
            None => {
                log::error!("unknown family '{}'", name);
                let labels: Vec<&str> = ALL_FAMILIES.iter().map(|f| f.label()).collect();
                eprintln!("Known families: {}", labels.join(", "));
                std::process::exit(1);
            }
        }
    } else {
        println!("No valid option provided. Use --help for usage.");
    }
}
