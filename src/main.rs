use std::env;
use std::process;

use env_logger::Env;
use log::LevelFilter;

use img_view::*;

fn main() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .format_timestamp(None)
        .parse_env(Env::new().filter("IMG_VIEW_LOG"))
        .init();

    match parse_args(env::args_os()) {
        Invocation::View(args) => {
            if let Err(e) = view(&args, &mut ExternalViewer::default()) {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        Invocation::Usage => println!("{}", USAGE),
    }
}
