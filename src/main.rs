//! Stamp's standalone runner entry point.
//! Loads a task definition, configures logging, and drives one replace
//! invocation on a current-thread runtime.

use stamp::{
    cli::{get_args, Args},
    config::load_task_file,
    error::{default_error_handler, Result},
    interpolate::TokenInterpolator,
    processor,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Loads the task file and performs the replacement.
///
/// The runtime is single-threaded: every file operation of the invocation
/// is in flight cooperatively, never on parallel threads.
fn run(args: Args) -> Result<()> {
    let config = load_task_file(&args.task_file)?;
    let interpolator = TokenInterpolator::new();

    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    runtime.block_on(processor::run(&config, &interpolator))
}
