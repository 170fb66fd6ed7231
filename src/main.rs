use std::path::Path;
use std::process::ExitCode;

use env_logger::Env;

use iconforge::{driver, Error};

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match driver::generate_all(Path::new(".")) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err @ Error::CapabilityError(_)) => {
            eprintln!("error: {err}");
            eprintln!("hint: rebuild with the `png` feature of the `image` crate enabled");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
