use crate::CLAP_STYLING;
use clap::arg;
use std::path::PathBuf;
use url::Url;

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("pagemirror")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("pagemirror")
        .styles(CLAP_STYLING)
        .about(
            "Downloads a web page together with its same-origin images, \
            stylesheets and scripts for offline viewing, and prints the path \
            of the saved page.",
        )
        .arg(
            arg!(<URL> "The page URL to mirror")
                .value_parser(clap::value_parser!(Url)),
        )
        .arg(
            arg!(-o --"output" <DIR>)
                .required(false)
                .help("Directory to save the page into (default: current directory)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(-t --"timeout" <SECONDS>)
                .required(false)
                .help("Request timeout in seconds")
                .value_parser(clap::value_parser!(u64))
                .default_value("30"),
        )
        .arg(arg!(-q --"quiet" "Suppress log output").required(false))
}
