//! `httpsave check-url <candidate>` – URL validity check; exit status 1 when invalid.

use httpsave_core::is_valid_url;
use std::process::ExitCode;

pub fn run_check_url(candidate: &str) -> ExitCode {
    if is_valid_url(candidate) {
        println!("valid");
        ExitCode::SUCCESS
    } else {
        println!("invalid");
        ExitCode::FAILURE
    }
}
