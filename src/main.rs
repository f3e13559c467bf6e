use clap::Parser;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use std::fs::File;
use timesweeper::args::MinesweeperArgs;

mod input_state;
mod ui;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = MinesweeperArgs::parse();

    // the terminal belongs to the ui, so logs only ever go to a file
    if let Some(path) = &args.log_file {
        let level = if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        WriteLogger::init(level, Config::default(), File::create(path)?)?;
    }

    let config = args.game_config()?;
    ui::main(config, args.seed)
}
