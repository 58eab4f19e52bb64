use std::io;
use std::process;

use abspath_rs::cli;
use abspath_rs::resolver::PathResolver;

fn main() {
    let mut args = std::env::args();
    let argv0 = args.next().unwrap_or_default();
    let tokens: Vec<String> = args.collect();

    let resolver = match PathResolver::from_current_dir() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("abspath: {}", e);
            process::exit(1);
        }
    };

    let mut out = io::stdout().lock();
    if let Err(e) = cli::run(&resolver, &argv0, &tokens, &mut out) {
        eprintln!("abspath: {}", e);
        process::exit(1);
    }
}
