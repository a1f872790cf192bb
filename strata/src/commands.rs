use crate::CLAP_STYLING;
use clap::{arg, command};

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("strata")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("strata")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("analyze")
                .about(
                    "Analyze a crawl dataset: structure metrics, quality scores, \
                journeys, and SEO audit.",
                )
                .arg(
                    arg!(-d --"dataset" <PATH>)
                        .required(true)
                        .help("Path to the crawl dataset (.csv or .json)"),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Save report to file (default: display to screen)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Report format: text, json")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                ),
        )
        .subcommand(
            command!("compare")
                .about(
                    "Analyze several crawl datasets and rank them by navigation \
                efficiency, information architecture, and size.",
                )
                .arg(
                    arg!(-s --"site" <LABEL_PATH>)
                        .required(true)
                        .action(clap::ArgAction::Append)
                        .help("Site to include, as LABEL=PATH; repeat for each site"),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Save report to file (default: display to screen)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Report format: text, json")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                ),
        )
}
