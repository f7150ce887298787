/// count-tokens - report how many tokens a file or the clipboard uses.
///
/// A thin binary over the `count_tokens` library.
use clap::Parser;
use count_tokens::cli::Cli;
use count_tokens::logging;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout and succeed; usage errors fail with 1.
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    logging::init(cli.verbose);

    if let Err(e) = cli.run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
