use clap::Parser;
use taskcal::cli::commands::{Cli, Commands};
use taskcal::cli::handlers;

fn main() {
    let cli = Cli::parse();
    let dir = cli.dir.clone();

    let result = match cli.command {
        None => taskcal::tui::run(dir.as_deref()),
        Some(Commands::Init) => handlers::cmd_init(dir.as_deref()),
        Some(Commands::List(args)) => handlers::cmd_list(dir.as_deref(), &args),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
