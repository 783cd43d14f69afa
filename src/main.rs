use clap::Parser;
use std::env;

use html_index::{Config, DEFAULT_TARGET};

#[derive(Parser)]
#[command(version, about = "Write an index.html listing the HTML pages of a directory")]
struct CliArg {
    /// Directory to index, relative to the current working directory
    #[arg(env = "TARGET_DIR", default_value = DEFAULT_TARGET)]
    dir: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
    let args: CliArg = CliArg::parse();
    let config = Config::new(args.dir, env::current_dir()?);
    html_index::generate_index(&config)?;
    Ok(())
}
