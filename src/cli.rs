use crate::config::load_config;
use crate::ir::parse_dataset;
use crate::layout::compute_layout;
use crate::layout_dump::{dump_to_string, write_chart_dump};
use anyhow::Result;
use clap::Parser;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "bubbleplot",
    version,
    about = "Bubble chart layout with collision-free labels"
)]
pub struct Args {
    /// Input dataset (.json/.json5) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output layout dump (JSON). Defaults to stdout if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Config JSON file (theme + chart + placement overrides)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Width
    #[arg(short = 'w', long = "width", default_value_t = 1200.0)]
    pub width: f32,

    /// Height
    #[arg(short = 'H', long = "height", default_value_t = 700.0)]
    pub height: f32,

    /// Disable leader lines (labels float free)
    #[arg(long = "noLeaderLines")]
    pub no_leader_lines: bool,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    config.chart.width = args.width;
    config.chart.height = args.height;
    if args.no_leader_lines {
        config.chart.placement.leader_lines = false;
    }

    let input = read_input(args.input.as_deref())?;
    let dataset = parse_dataset(&input)?;
    if dataset.records.is_empty() {
        return Err(anyhow::anyhow!("No usable records found in input"));
    }

    let layout = compute_layout(&dataset, &config.theme, &config.chart)?;
    match args.output.as_deref() {
        Some(path) => write_chart_dump(path, &layout, &config.theme)?,
        None => println!("{}", dump_to_string(&layout, &config.theme)?),
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path == Path::new("-") {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            return Ok(buf);
        }
        return Ok(std::fs::read_to_string(path)?);
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}
