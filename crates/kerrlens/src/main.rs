mod app;
mod cli;
mod input;
mod panel;
mod params;
mod run;
mod uniforms;

use std::process::ExitCode;

use renderer::RendererError;

/// Exit status for failures before the render loop starts.
const INIT_FAILURE: u8 = 255;

fn main() -> ExitCode {
    let cli = cli::parse();
    run::initialise_tracing();

    match run::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "kerrlens failed");
            match err.downcast_ref::<RendererError>() {
                Some(init) if init.is_initialization() => ExitCode::from(INIT_FAILURE),
                _ => ExitCode::FAILURE,
            }
        }
    }
}
