#![forbid(unsafe_code)]

use attrition_cli::handler::EXIT_FAILURE;
use attrition_core::AttritionErrorCode;

fn main() {
    match attrition_cli::run_from_env() {
        Ok(code) => std::process::exit(code),
        Err(error) => {
            eprintln!("{}", error.coded_string());
            std::process::exit(EXIT_FAILURE);
        }
    }
}
