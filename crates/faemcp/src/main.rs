mod cli;
mod commands;
mod context;
mod logging;
mod output;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command.clone().unwrap_or(Commands::Serve) {
        Commands::Serve => commands::serve::run(&cli),
        Commands::Vars { json } => commands::vars::run(&cli, json),
        Commands::Render { set } => commands::render::run(&cli, set),
        Commands::Templates { json } => commands::templates::run(&cli, json),
        Commands::Version { json } => commands::version::run(json),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
