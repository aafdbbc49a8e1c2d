// Copyright 2025 the scatterviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders the state health scatter chart for every axis selection into one HTML page.
mod html;
mod tour;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context as _, Result};
use clap::Parser;
use scatterviz_app::{Controller, ScatterConfig, Selection, XField, YField};
use scatterviz_data::{CoercionPolicy, load_path};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "scatterviz_demo")]
#[command(about = "Clicks through every axis selection of the scatter chart and writes an HTML report", long_about = None)]
struct Args {
    /// Delimited data file with a header row
    #[arg(long, default_value = "assets/data/data.csv")]
    data: PathBuf,

    /// Where to write the report
    #[arg(long, default_value = "scatterviz_demo.html")]
    out: PathBuf,

    /// Initial x field (poverty, age or income)
    #[arg(long, default_value = "poverty")]
    x: XField,

    /// Initial y field (healthcare, smokes or obesity)
    #[arg(long, default_value = "healthcare")]
    y: YField,

    /// Bottom margin in pixels
    #[arg(long)]
    bottom_margin: Option<f64>,

    /// Reject non-numeric cells instead of plotting them as missing
    #[arg(long)]
    strict: bool,

    /// Abbreviation of the row to hover in each snapshot
    #[arg(long, default_value = "OH")]
    hover: String,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log.as_deref())?;

    let policy = if args.strict {
        CoercionPolicy::Reject
    } else {
        CoercionPolicy::Coerce
    };
    let dataset = load_path(&args.data, policy)
        .with_context(|| format!("failed to load {}", args.data.display()))?;

    let config = config(&args);
    let controller = Controller::with_selection(dataset, config, Selection::new(args.x, args.y));
    let sections = tour::run(controller, &args.hover);

    let html = html::render_report("State health scatter", &sections);
    std::fs::write(&args.out, html)
        .with_context(|| format!("failed to write {}", args.out.display()))?;
    tracing::info!(sections = sections.len(), out = %args.out.display(), "report written");
    println!("wrote {}", args.out.display());
    Ok(())
}

fn config(args: &Args) -> ScatterConfig {
    let config = ScatterConfig::default();
    match args.bottom_margin {
        Some(bottom) => config.with_bottom_margin(bottom),
        None => config,
    }
}

/// Logs go to `log` when given, otherwise to stderr. `RUST_LOG` overrides the `info` default.
fn init_logging(log: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match log {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    }
    .map_err(|e| anyhow::anyhow!(e))?;
    tracing::debug!("logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_page() {
        let args = Args::try_parse_from(["scatterviz_demo"]).expect("defaults parse");
        assert_eq!(args.data, PathBuf::from("assets/data/data.csv"));
        assert_eq!(Selection::new(args.x, args.y), Selection::default());
        assert_eq!(config(&args), ScatterConfig::default());
        assert!(!args.strict);
    }

    #[test]
    fn fields_and_margin_are_parsed() {
        let args = Args::try_parse_from([
            "scatterviz_demo",
            "--x",
            "age",
            "--y",
            "smokes",
            "--bottom-margin",
            "60",
            "--strict",
        ])
        .expect("args parse");
        assert_eq!(args.x, XField::Age);
        assert_eq!(args.y, YField::Smokes);
        assert_eq!(config(&args).plot_height(), 420.0);
        assert!(args.strict);
    }

    #[test]
    fn fields_on_the_wrong_axis_are_rejected() {
        assert!(Args::try_parse_from(["scatterviz_demo", "--x", "smokes"]).is_err());
        assert!(Args::try_parse_from(["scatterviz_demo", "--y", "height"]).is_err());
    }

    #[test]
    fn bundled_data_loads_strictly() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../assets/data/data.csv");
        let ds = load_path(path, CoercionPolicy::Reject).expect("bundled data is clean");
        assert_eq!(ds.len(), 51);
        let (_, ohio) = ds.find_abbr("OH").expect("Ohio present");
        assert_eq!((ohio.poverty, ohio.healthcare), (14.8, 11.3));
    }

    #[test]
    fn report_is_written_to_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let data = dir.path().join("data.csv");
        std::fs::write(
            &data,
            "state,abbr,poverty,age,income,healthcare,smokes,obesity\n\
             Ohio,OH,14.8,39.4,49308,11.3,21.6,29.2\n\
             Utah,UT,11.7,30.5,60922,12.5,8.8,25.2\n",
        )
        .expect("write data");
        let ds = load_path(&data, CoercionPolicy::Coerce).expect("load");
        let sections = tour::run(Controller::new(ds, ScatterConfig::default()), "OH");
        let out = dir.path().join("report.html");
        std::fs::write(&out, html::render_report("t", &sections)).expect("write report");
        let written = std::fs::read_to_string(&out).expect("read report");
        assert_eq!(written.matches("<section>").count(), sections.len());
    }
}
