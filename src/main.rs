use std::process;

use clap::error::ErrorKind;

use cropsquare::cli::build_cli;
use cropsquare::commands::{CommandFactory, CropsquareCommandFactory};
use cropsquare::options::RunOptions;
use cropsquare::utils::logger::Logger;

fn main() {
    let matches = match build_cli().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                if let Err(io_error) = e.print() {
                    println!("Error printing help: {}", io_error);
                    process::exit(1);
                }
                process::exit(0);
            }
            _ => {
                println!("{}", e.render());
                process::exit(1);
            }
        },
    };

    let options = match RunOptions::from_matches(&matches) {
        Ok(options) => options,
        Err(e) => {
            println!("{}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger(options.verbose, options.log_file.as_deref()) {
        println!("Error initializing logger: {}", e);
        process::exit(1);
    }
    options.log_summary();

    let factory = CropsquareCommandFactory::new();
    let result = factory
        .create_command(options)
        .and_then(|mut command| command.execute());

    if let Err(e) = result {
        println!("{}", e);
        process::exit(1);
    }
}
