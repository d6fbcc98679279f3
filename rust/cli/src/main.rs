use mindshift_cli::logging::init_logging;
use mindshift_cli::run;
use std::io;

fn main() {
    init_logging();
    let mut out = io::stdout();
    let mut err = io::stderr();
    let code = run(std::env::args(), &mut out, &mut err);
    std::process::exit(code);
}
