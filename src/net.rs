use anyhow::{Context as _, Result};
use tokio::io::{AsyncWrite, AsyncWriteExt as _};
use tokio::net::TcpStream;

pub async fn connect(address: &str) -> Result<TcpStream> {
    let stream = TcpStream::connect(address)
        .await
        .with_context(|| format!("failed to connect to {address}"))?;

    Ok(stream)
}

pub async fn send_report(writer: &mut (impl AsyncWrite + Unpin), report: &str) -> Result<()> {
    writer
        .write_all(report.as_bytes())
        .await
        .context("failed to send report")?;

    writer.flush().await.context("failed to flush report")?;

    Ok(())
}
