use book_dispatch::core::ConfigProvider;
use book_dispatch::utils::error::{DispatchError, ErrorSeverity};
use book_dispatch::utils::{logger, validation::Validate};
use book_dispatch::{CliConfig, Dispatcher};
use clap::Parser;
use std::io::Write;

fn main() {
    let cli = CliConfig::parse();

    // The config file may carry the log level, so resolve before logging starts.
    let resolved = cli.resolve();
    let file_level = resolved.as_ref().ok().and_then(|c| c.log_level.as_deref());
    logger::init_cli_logger(cli.verbose, file_level);

    tracing::info!("Starting book-dispatch");

    let mut dispatcher = Dispatcher::stdout();

    if cli.list_operations {
        for key in dispatcher.registry().keys() {
            println!("{}", key);
        }
        return;
    }

    let config = match resolved {
        Ok(config) => config,
        Err(e) => fail(&e),
    };
    if cli.verbose {
        tracing::debug!("Resolved config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        fail(&e);
    }

    match run(&mut dispatcher, &config) {
        Ok(Some(output)) => println!("{}", output),
        Ok(None) => tracing::info!("No serialize command; nothing to return"),
        Err(e) => fail(&e),
    }
}

fn run<W: Write>(
    dispatcher: &mut Dispatcher<W>,
    provider: &impl ConfigProvider,
) -> book_dispatch::Result<Option<String>> {
    let book = provider.book();
    let commands = provider.commands();
    tracing::info!("Running {} command(s) on '{}'", commands.len(), book.title);

    dispatcher.dispatch(&book, commands)
}

fn fail(e: &DispatchError) -> ! {
    tracing::error!(
        "Dispatch failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
