//! CLI entry and dispatch.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use aim_shell::bootstrap::runtime::resolve_paths;
use aim_shell::bootstrap::tracing::{init_tracing_subscriber, LogTarget};
use aim_shell::commands::{self, CommandError};
use aim_shell::{create_runtime, AppRuntime, RuntimeOptions};
use anyhow::Result;
use clap::Parser;
use tracing::debug;

use crate::output;

/// Exit code when input was rejected by validation.
const EXIT_INVALID: u8 = 2;

#[derive(Parser)]
#[command(name = "aim")]
#[command(version)]
#[command(about = "AIM Mobile headless driver")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: <config dir>/aim-mobile/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory holding preferences.json and logs
    #[arg(long, global = true, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Validate a single login field
    Validate {
        /// One of: id, password, passwordConfirm, email, phone
        #[arg(long)]
        field: String,

        #[arg(long, allow_hyphen_values = true)]
        value: String,
    },

    /// Validate all fields and save the session
    Login(LoginArgs),

    /// Clear the saved session
    Logout,

    /// Show whether a session is saved and where the app would start
    Status,

    /// Show the asset allocation dashboard
    Dashboard,

    /// List the ETFs on the detail screen
    Etfs,
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Validate { .. } => "validate",
            Commands::Login(_) => "login",
            Commands::Logout => "logout",
            Commands::Status => "status",
            Commands::Dashboard => "dashboard",
            Commands::Etfs => "etfs",
        }
    }
}

#[derive(clap::Args, Clone)]
struct LoginArgs {
    #[arg(long, allow_hyphen_values = true)]
    id: String,

    #[arg(long, allow_hyphen_values = true)]
    password: String,

    #[arg(long, allow_hyphen_values = true)]
    password_confirm: String,

    #[arg(long, allow_hyphen_values = true)]
    email: String,

    #[arg(long, allow_hyphen_values = true)]
    phone: String,
}

pub async fn run<I, T>(args: I) -> Result<ExitCode>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);

    let paths = resolve_paths(cli.data_dir.clone())?;
    if let Err(err) = init_tracing_subscriber(Some(&paths.logs_dir), LogTarget::Stderr) {
        eprintln!("tracing disabled: {err}");
    }

    let runtime = create_runtime(RuntimeOptions {
        config_path: cli.config.clone(),
        data_dir: cli.data_dir.clone(),
    })
    .await?;

    let outcome = dispatch(&runtime, cli.command, cli.json).await;
    runtime.shutdown().await;

    match outcome {
        Ok(code) => Ok(code),
        Err(err) => {
            output::command_error(cli.json, &err)?;
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn dispatch(
    runtime: &AppRuntime,
    command: Commands,
    json: bool,
) -> Result<ExitCode, CommandError> {
    debug!(command = command.name(), "Dispatching");
    match command {
        Commands::Validate { field, value } => {
            let state = commands::field_changed(runtime, &field, value).await?;
            let valid = state.field(&field).is_some_and(|f| f.status == "valid");
            output::field(json, &state, &field).map_err(output_err)?;
            Ok(exit_for(valid))
        }
        Commands::Login(args) => login(runtime, args, json).await,
        Commands::Logout => {
            let route = commands::logout(runtime).await?;
            output::route(json, "logged out", &route).map_err(output_err)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Status => {
            let status = commands::session_status(runtime).await;
            output::status(json, &status).map_err(output_err)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Dashboard => {
            let dashboard = commands::get_dashboard(runtime).await?;
            output::dashboard(json, &dashboard).map_err(output_err)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Etfs => {
            let etfs = commands::list_etfs(runtime).await?;
            output::etfs(json, &etfs).map_err(output_err)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn login(runtime: &AppRuntime, args: LoginArgs, json: bool) -> Result<ExitCode, CommandError> {
    for (field, value) in [
        ("id", args.id),
        ("password", args.password),
        ("passwordConfirm", args.password_confirm),
        ("email", args.email),
        ("phone", args.phone),
    ] {
        commands::field_changed(runtime, field, value).await?;
    }

    match commands::submit_login(runtime).await {
        Ok(route) => {
            output::route(json, "logged in", &route).map_err(output_err)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) if err.code == "invalid_form" => {
            let state = commands::form_state(runtime).await;
            output::form(json, &state).map_err(output_err)?;
            Ok(exit_for(false))
        }
        Err(err) => Err(err),
    }
}

fn exit_for(valid: bool) -> ExitCode {
    if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_INVALID)
    }
}

fn output_err(err: anyhow::Error) -> CommandError {
    CommandError::new("output", format!("{err:#}"))
}
