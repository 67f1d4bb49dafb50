//! main.rs
//! Entry point for pathsurfer

use pathsurfer::app::AppState;
use pathsurfer::config::Config;
use pathsurfer::core::terminal;
use pathsurfer::utils::cli::Args;
use pathsurfer::utils::{logging, resolve_start_dir};

use clap::Parser;

use std::process::ExitCode;

fn main() -> ExitCode {
    std::panic::set_hook(Box::new(|info| {
        let _ = terminal::restore_terminal();
        log::error!("panic: {info}");
        eprintln!("\n[pathsurfer] Error occurred: {}", info);

        #[cfg(debug_assertions)]
        {
            let bt = std::backtrace::Backtrace::force_capture();
            eprintln!("\nStack Backtrace:\n{}", bt);
        }
    }));

    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(Config::default_path);
    if args.init {
        return match Config::generate_default(&config_path) {
            Ok(()) => {
                eprintln!("Wrote {}", config_path.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    let mut config = Config::load(&config_path);
    config.apply_args(&args);

    let log_path = config.log_path();
    if let Err(e) = logging::init(&log_path, config.log().debug()) {
        eprintln!(
            "[pathsurfer] Cannot log to {}: {}. Continuing without a log.",
            log_path.display(),
            e
        );
    }

    let start = match resolve_start_dir(args.path.as_deref()) {
        Ok(path) => path,
        Err(e) => {
            log::error!("{e}");
            eprintln!("\n[pathsurfer] Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut app = AppState::new(config, start);
    match terminal::run_terminal(&mut app) {
        Ok(path) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("terminal session failed: {e}");
            eprintln!("[pathsurfer] Error: {e}");
            ExitCode::FAILURE
        }
    }
}
