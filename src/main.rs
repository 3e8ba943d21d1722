//! artifact-store binary entry point.
//!
//! Maps error kinds to exit codes: 0 success, 1 runtime failure, 2 usage
//! error (clap reports its own parse failures with 2 as well).

use artifact_store::core::errors::StoreError;

fn main() {
    if let Err(err) = artifact_store::cli::run() {
        eprintln!("error: {:#}", err);
        let code = err
            .downcast_ref::<StoreError>()
            .map(StoreError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}
