use chrono::Local;
use clap::Parser;
use peter::application::{CloseOutcome, CloseService, ListService, RunService};
use peter::cli::{output, Cli, Commands};
use peter::error::PeterError;
use peter::infrastructure::{FileStore, StdInteraction};

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), PeterError> {
    let store = FileStore::new(&cli.store);

    match cli.command {
        Commands::Run => {
            let service = RunService::new(store);
            let mut ui = StdInteraction::new();
            let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
            service.execute(&mut ui, &cli.config, &today)?;
            Ok(())
        }
        Commands::List => {
            let service = ListService::new(store);
            let entries = service.open_entries()?;
            println!("{}", output::format_open_list(&entries).trim_end());
            Ok(())
        }
        Commands::Status => {
            let service = ListService::new(store);
            let entries = service.status_entries()?;
            println!("{}", output::format_status_list(&entries).trim_end());
            Ok(())
        }
        Commands::Close => {
            let service = CloseService::new(store);
            let mut ui = StdInteraction::new();
            match service.execute(&mut ui)? {
                CloseOutcome::NothingOpen => println!("No open todos"),
                CloseOutcome::NoneSelected => println!("No todos selected"),
                CloseOutcome::Closed(count) => println!("Closed {} todo(s)", count),
            }
            Ok(())
        }
    }
}
