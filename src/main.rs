use std::process;
use anyhow::Error;
use clap::{App, load_yaml};
use hostprop::{args::Args, cmd, filter};

fn main() {
    let ver  = env!("CARGO_PKG_VERSION");
    let yaml = load_yaml!("args.yml");
    let args = App::from_yaml(yaml).version(ver).get_matches();
    let args = Args::new(&args, yaml);

    let level = args.occurrences_of("verbose");
    filter::init(module_path!(), level).unwrap_or_else(abort);

    match args.subcommand() {
        Some(("get",  args)) => cmd::get(args),
        Some(("list", args)) => cmd::list(args),
        _                    => unreachable!(),
    }.unwrap_or_else(abort);
}

fn abort(e: Error) {
    match e.downcast_ref::<clap::Error>() {
        Some(e) => println!("{}", e.message),
        None    => panic!("{:?}", e),
    }
    process::exit(1);
}
