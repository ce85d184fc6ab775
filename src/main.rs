use std::process::ExitCode;

fn main() -> ExitCode {
    match transcript_importer::cli::commands::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
