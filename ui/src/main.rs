//! Assignment Board - student coursework dashboard

use assignment_board_ui::AppConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "assignment-board")]
#[command(about = "Student dashboard for submitting coursework")]
struct Args {
    /// JSON config file; defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tracing filter, e.g. `debug` or `assignment_board_core=debug`
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("Application error: {}", info);
    }));

    let args = Args::parse();
    let config = AppConfig::load_or_default(args.config.as_deref())?;

    assignment_board_ui::run(config, args.log_level.as_deref())
}
