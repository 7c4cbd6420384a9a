use formrelay_api::ApiContext;
use lambda_http::{Error, Request, run, service_fn};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing subscriber for structured logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .json()
        .init();

    info!("Starting formrelay Lambda function");

    let ctx = ApiContext::from_env();
    info!(path = %ctx.contact_path, "Contact form relay mounted");

    let app = formrelay_api::router(ctx);

    run(service_fn(|event: Request| {
        let app = app.clone();
        async move { formrelay_api::handler(app, event).await }
    }))
    .await
}
