use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match aim_mobile_lib::run(std::env::args_os()).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
