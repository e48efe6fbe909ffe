// src/bin/render.rs

use clap::{Parser, ValueEnum};
use ptview::config::{Config, ImageFormat};
use ptview::model::dataset::dataset;
use ptview::rendering::batch::{render_all, render_element, BatchOptions};
use ptview::utils::logger;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Png,
    Svg,
}

impl From<FormatArg> for ImageFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Png => ImageFormat::Png,
            FormatArg::Svg => ImageFormat::Svg,
        }
    }
}

/// Renders orbital diagrams for the whole table, or one element.
#[derive(Parser, Debug)]
#[command(
    name = "ptview-render",
    version,
    about = "Render electron orbital diagrams to image files"
)]
struct Cli {
    /// Output directory (defaults to the configured images dir)
    #[arg(short, long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Render a single element instead of the whole table
    #[arg(short, long, value_name = "SYMBOL")]
    symbol: Option<String>,

    /// Image format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Square canvas edge in pixels (defaults to the configured size)
    #[arg(long, value_name = "PIXELS")]
    size: Option<u32>,

    /// Contract shells by the relativistic correction
    #[arg(long)]
    relativistic: bool,

    /// Nudge apart overlapping electron markers
    #[arg(long)]
    jitter: bool,
}

fn main() {
    let cli = Cli::parse();
    let (config, config_msg) = Config::load();
    let _ = logger::init(config.verbose_logging);
    log::debug!("{}", config_msg);

    let set = match dataset() {
        Ok(set) => set,
        Err(e) => {
            log::error!("element dataset failed to load: {}", e);
            std::process::exit(1);
        }
    };

    let mut opts = BatchOptions::new(cli.out_dir.unwrap_or_else(|| config.images_dir.clone()));
    opts.format = cli.format.map(Into::into).unwrap_or(config.image_format);
    opts.size = cli.size.unwrap_or(config.image_size);
    opts.layout.relativistic = cli.relativistic || config.relativistic_orbitals;
    opts.layout.jitter = cli.jitter;

    match cli.symbol.as_deref() {
        Some(symbol) => match set.by_symbol(symbol) {
            Some(element) => match render_element(element, &opts) {
                Ok(path) => println!("Wrote {}", path.display()),
                Err(e) => {
                    log::error!("{}", e);
                    std::process::exit(1);
                }
            },
            None => {
                log::error!("no element with symbol '{}'", symbol);
                std::process::exit(1);
            }
        },
        None => {
            let report = render_all(set, &opts);
            println!(
                "Rendered {} diagrams into {} ({} failed).",
                report.rendered,
                opts.output_dir.display(),
                report.failed()
            );
            if !report.failures.is_empty() {
                for failure in &report.failures {
                    eprintln!("  failed: {}", failure);
                }
                std::process::exit(1);
            }
        }
    }
}
