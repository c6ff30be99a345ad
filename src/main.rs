//! send-sns - publish a monero-node-stack alert to Amazon SNS
//!
//! Usage: `send-sns "Subject" "Message body"`

use anyhow::Result;
use clap::Parser;
use monero_sns_notify::{
    app::dispatch,
    cli::Cli,
    config::Config,
    core::DispatchTarget,
    logging,
    notification::sns::SnsPublisher,
};
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Checked before anything touches the environment or the network.
    let notification = cli.notification().unwrap_or_else(|err| {
        eprintln!("{}", err);
        std::process::exit(1);
    });

    let config = Config::load(&cli)?;
    logging::init(&config.log_level);

    let target = DispatchTarget::resolve(&config)?;
    info!(
        topic_arn = %target.topic_arn,
        region = %target.region,
        "Resolved notification target"
    );

    let publisher = SnsPublisher::connect(&target, config.endpoint_url.as_deref()).await;
    dispatch(&publisher, &target, &notification).await?;

    Ok(())
}
