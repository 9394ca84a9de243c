use clap::Parser;
use log::info;

use postlog::{App, Cli, Config, PostStore, StdinConfirm, TerminalNotifier};

fn initialize_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_secs()
        .format_module_path(true)
        .init();
}

fn main() {
    let cli = Cli::parse();
    initialize_logger(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> postlog::Result<()> {
    let mut config = Config::load(cli.config)?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    let mut store = PostStore::new(config.clone());
    let loaded = store.load()?;
    info!("Store ready with {} posts", loaded);

    let notifier = TerminalNotifier::new(config.use_color);
    let mut app = App::new(store, config, Box::new(notifier), Box::new(StdinConfirm));

    app.run(cli.command)
}
