// src/main.rs

use ptview::config::Config;
use ptview::model::dataset::dataset;
use ptview::ui;
use ptview::utils::logger;
use std::io::{self, Write};

fn main() {
    // 1. Config and logging
    let (config, config_msg) = Config::load();
    if logger::init(config.verbose_logging).is_err() {
        eprintln!("logger already installed");
    }
    log::info!("{}", config_msg);

    // 2. Dataset
    let set = match dataset() {
        Ok(set) => set,
        Err(e) => {
            log::error!("element dataset failed to load: {}", e);
            std::process::exit(1);
        }
    };
    log::debug!("loaded {} elements", set.len());

    // 3. Command loop
    println!("Periodic Table Viewer");
    println!("Type an element symbol, or 'help' for commands.");

    let stdin = io::stdin();
    loop {
        print!("ptview> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                log::error!("input error: {}", e);
                break;
            }
        }

        let cmd = line.trim();
        // Single-letter shortcuts must not shadow element symbols, so
        // there is no "h" alias for help.
        match cmd.to_lowercase().as_str() {
            "" => continue,
            "help" | "?" => print_help(),
            "table" | "t" => ui::print_table(set),
            "quiz" => {
                if let Err(e) = ui::run_quiz(set, &config) {
                    log::error!("quiz aborted: {}", e);
                }
            }
            "quit" | "exit" | "q" => break,
            _ => match set.by_symbol(cmd) {
                Some(element) => print!("{}", ui::element_card(set, element, &config)),
                None => println!("No element with symbol '{}'. Try 'table' to browse.", cmd),
            },
        }
    }
    println!("Bye.");
}

fn print_help() {
    println!("Commands:");
    println!("  <symbol>   show the info card for an element (e.g. Fe)");
    println!("  table      print the colored periodic table");
    println!("  quiz       start a ten-question quiz");
    println!("  help       this text");
    println!("  quit       leave");
}
