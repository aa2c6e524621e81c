use hf_smoke_check::error::SmokeCheckError;
use hf_smoke_check::logger::initialize as LoggerInitialize;
use hf_smoke_check::runner::run;

use inference_client::SmokeTestConfig;
use inference_client::credential::load_env_files;

use std::io::stdout;
use std::path::Path;

use log::{debug, error, info};

#[tokio::main]
async fn main() -> Result<(), SmokeCheckError> {
    LoggerInitialize()?;

    info!("Hugging Face summarization smoke check starting");

    if !load_env_files(Path::new(".")).any_loaded() {
        debug!("No env file found, using the process environment");
    }

    let config = SmokeTestConfig::default();

    if let Err(e) = run(&config, &mut stdout()).await {
        error!("Smoke check aborted: {e}");
        return Err(e);
    }

    Ok(())
}
