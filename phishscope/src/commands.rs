use clap::{ArgAction, arg, command};

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("phishscope")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("phishscope")
        .about("Check a URL for phishing before you click it")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .arg(arg!(-v --"verbose" "Log pipeline details to stderr").required(false))
        .subcommand_required(false)
        .subcommand(
            analysis_args(command!("check").about(
                "Analyze a single URL. Prompts for one when no URL is given.",
            ))
            .arg(
                arg!([URL])
                    .required(false)
                    .help("The URL to check (https:// is assumed when no scheme is given)"),
            ),
        )
        .subcommand(
            analysis_args(
                command!("batch").about("Analyze a newline-delimited file of URLs concurrently"),
            )
            .arg(
                arg!(-H --"hosts-file" <PATH>)
                    .required(true)
                    .help("Path to a newline-delimited file of URLs ('#' starts a comment)")
                    .value_parser(clap::value_parser!(std::path::PathBuf)),
            )
            .arg(
                arg!(-t --"threads" <NUM_WORKERS>)
                    .required(false)
                    .help("Maximum number of URLs analyzed at once")
                    .value_parser(clap::value_parser!(usize))
                    .default_value("10"),
            ),
        )
}

/// Options shared by every analysis command
fn analysis_args(cmd: clap::Command) -> clap::Command {
    cmd.arg(
        arg!(-m --"model" <PATH>)
            .required(false)
            .help("Trained token model (JSON) consulted before the heuristics"),
    )
    .arg(
        arg!(--"timeout" <SECONDS>)
            .required(false)
            .help("Page fetch timeout in seconds")
            .value_parser(clap::value_parser!(u64).range(1..))
            .default_value("10"),
    )
    .arg(
        arg!(--"trust" <DOMAIN>)
            .required(false)
            .help("Additional trusted domain; repeat for more")
            .action(ArgAction::Append),
    )
    .arg(
        arg!(-f --"format" <FORMAT>)
            .required(false)
            .help("Report format: text, json")
            .value_parser(["text", "json"])
            .default_value("text"),
    )
    .arg(
        arg!(-o --"output" <PATH>)
            .required(false)
            .help("Save report to file (default: display to screen)")
            .value_parser(clap::value_parser!(std::path::PathBuf)),
    )
}
