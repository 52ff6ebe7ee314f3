use std::env;
use std::io;
use std::process;

use chel_matches::{cli, Settings};

fn main() {
    env_logger::init();

    let stdout = io::stdout();
    let stderr = io::stderr();
    let code = cli::run(env::args_os(), &Settings::default(), stdout.lock(), stderr.lock());

    process::exit(code);
}
