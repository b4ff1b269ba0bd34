use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent, service_fn};
use newsflash::core::config::AppConfig;
use newsflash::dialog::DialogController;
use serde_json::Value;
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    newsflash::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    let controller = Arc::new(DialogController::from_config(&config));

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let controller = Arc::clone(&controller);
        async move { newsflash::api::handler(&controller, event).await }
    }))
    .await
}
