mod args;

use std::process::ExitCode;

use anyhow::{Context as _, Result};
use args::Args;
use clap::Parser as _;
use machine_vitals::{
    net::{connect, send_report},
    report::encode_report,
    vitals::Sampler,
};
use tokio::time::{Duration, sleep};

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = run().await {
        eprintln!("{e:#}");
        return ExitCode::from(1);
    }

    ExitCode::from(0)
}

async fn run() -> Result<()> {
    let args = Args::parse();

    let mut stream = connect(&args.address)
        .await
        .context("failed to open report connection")?;

    println!("Connected to {}", args.address);

    let mut sampler = Sampler::new();

    loop {
        let reading = sampler.sample(args.timezone);
        let report = encode_report(&reading);

        send_report(&mut stream, &report)
            .await
            .context("failed to deliver report")?;

        println!("Sent: {report}");

        sleep(Duration::from_secs(args.interval_secs)).await;
    }
}
