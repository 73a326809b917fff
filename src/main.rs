use std::env;
use std::io;
use std::process;

use env_logger::Env;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("off")).init();

    let code = {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let stderr = io::stderr();
        checksum::cli::run(env::args_os().skip(1), &mut stdin.lock(), &mut stdout.lock(), &mut stderr.lock())
    };
    process::exit(code);
}
