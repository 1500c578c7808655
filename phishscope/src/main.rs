use colored::Colorize;
use phishscope::command_argument_builder;
use phishscope::handlers::{handle_batch, handle_check};
use tracing::Level;

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");
    let verbose = chosen_command.get_flag("verbose");

    init_logging(quiet, verbose);

    if !quiet {
        print_banner();
    }

    let outcome = match chosen_command.subcommand() {
        Some(("check", primary_command)) => handle_check(primary_command, quiet).await,
        Some(("batch", primary_command)) => handle_batch(primary_command, quiet).await,
        None => {
            // No subcommand provided, just show the banner
            return;
        }
        _ => unreachable!("clap should ensure we don't get here"),
    };

    if let Err(e) = outcome {
        eprintln!("{} {:#}", "✗".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(quiet: bool, verbose: bool) {
    let level = if verbose {
        Level::DEBUG
    } else if quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn print_banner() {
    eprintln!(
        "{} {}",
        "🔍 Phishscope".bright_white().bold(),
        "- phishing check for URLs".bright_blue()
    );
}
