use letteropt::cli::{self, Cli};

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut parser = match cli.parser() {
        Ok(parser) => parser,
        Err(err) => err.exit(),
    };

    if cli.usage {
        parser.print_usage(0);
    }

    if let Err(err) = parser.parse() {
        err.exit();
    }

    match cli::report(&parser) {
        Ok(report) => print!("{report}"),
        Err(err) => err.exit(),
    }
}
