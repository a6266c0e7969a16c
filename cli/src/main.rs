mod args;

use anyhow::{anyhow, Context, Result};
use args::{Args, OutputFormat};
use clap::Parser;
use greeter_sdk::{RpcConnection, Workflow};
use log::{error, info};
use solana_sdk::signature::read_keypair_file;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let result = run(&args).await;
    if let Err(e) = &result {
        error!("{}", failure_message(e));
    }
    result
}

/// One line naming the failing stage and every cause below it.
fn failure_message(e: &anyhow::Error) -> String {
    format!("{:#}", e)
}

async fn run(args: &Args) -> Result<()> {
    info!("Let's say hello to a Solana account...");

    let keypair_path = args.keypair_path();
    let payer = read_keypair_file(&keypair_path)
        .map_err(|e| anyhow!("Failed to read payer keypair {}: {}", keypair_path, e))?;

    let session = RpcConnection::new(&args.url, args.commitment.into());

    let workflow = Workflow::builder()
        .with_session(session)
        .with_payer(payer)
        .with_program_id(args.program_id)
        .with_config(args.workflow_config())
        .build()
        .context("Invalid workflow configuration")?;

    let report = workflow
        .run()
        .await
        .with_context(|| format!("Greeting workflow against {} aborted", args.url))?;

    match args.output {
        OutputFormat::Text => println!("{}", report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    info!("Success");
    Ok(())
}
