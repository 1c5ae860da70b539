mod app;
mod cli;
mod config;
mod consts;
mod dataset;
mod error;
mod output;
mod utils;

use clap::Parser;

use cli::Cli;
use config::Config;
use output::print_summary;
use utils::set_debug;

fn main() {
    let cli = Cli::parse();
    let config = Config::load();
    let config_source = config.source.clone();
    let settings = cli.with_config(config);
    set_debug(settings.debug);

    if settings.debug {
        match &config_source {
            Some(path) => eprintln!("[DEBUG] Loaded config from {}", path.display()),
            None => eprintln!("[DEBUG] No config file loaded"),
        }
        eprintln!(
            "[DEBUG] input={} output={} date_column={} order={}",
            settings.input.display(),
            settings.output.display(),
            settings.date_column,
            settings.order.as_str()
        );
    }

    let result = app::run(&settings).and_then(|summary| print_summary(&summary, settings.json));
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
