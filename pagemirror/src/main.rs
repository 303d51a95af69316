use pagemirror::commands::command_argument_builder;
use pagemirror_core::PageMirror;
use std::path::PathBuf;
use url::Url;

#[tokio::main]
async fn main() {
    let matches = command_argument_builder().get_matches();
    let quiet = matches.get_flag("quiet");

    // Logs go to stderr so stdout stays a clean path for scripting.
    if !quiet {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .init();
    }

    let url = matches.get_one::<Url>("URL").unwrap();
    let timeout = matches.get_one::<u64>("timeout").unwrap();
    let output_dir = match matches.get_one::<PathBuf>("output") {
        Some(dir) => dir.clone(),
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!("Error: cannot determine current directory: {}", e);
                std::process::exit(1);
            }
        },
    };

    let mirror = PageMirror::with_timeout(*timeout);
    match mirror.mirror(url.as_str(), &output_dir).await {
        Ok(page_path) => println!("{}", page_path.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
