use clap::Parser;
use slate::config::load_config;

#[derive(Parser)]
#[command(
    name = "slate",
    about = concat!("[ ] slate v", env!("CARGO_PKG_VERSION"), " - a task list that forgets"),
    version
)]
struct Cli {
    /// Read UI settings from a different config file
    #[arg(short = 'c', long = "config")]
    config: Option<std::path::PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = slate::tui::run(&config) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
