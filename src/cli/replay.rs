use anyhow::{Context, Result};
use log::info;
use serde::Serialize;

use crate::collaborators::{
    LoggingObserver, ManualEstimator, TransferSummary, TransferTally, format_bitrate, format_bytes,
};
use crate::meter::{BandwidthEstimator, DataMeter, TransferObserver};
use crate::settings::{MeterConfig, ScriptedTransfer};

/// Outcome of replaying the configured transfers
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub estimate_bps: i64,
    pub estimate: String,
    pub total_bytes: u64,
    pub transfers: Vec<TransferSummary<String>>,
}

/// Replays every scripted transfer through a data meter built from `settings`
pub fn replay(settings: &MeterConfig) -> Result<ReplayReport> {
    let estimator = ManualEstimator::new(settings.estimate_bps);
    let tally = TransferTally::<String>::new();

    let estimate_bps = if settings.log_transfers {
        let meter = DataMeter::new(&estimator, LoggingObserver::new(&tally));
        drive(&meter, &settings.transfers)?
    } else {
        let meter = DataMeter::new(&estimator, &tally);
        drive(&meter, &settings.transfers)?
    };

    let report = ReplayReport {
        estimate_bps,
        estimate: format_bitrate(estimate_bps),
        total_bytes: tally.total_bytes(),
        transfers: tally.completed(),
    };
    info!(
        "Replayed {} transfers, {} bytes",
        report.transfers.len(),
        report.total_bytes
    );
    Ok(report)
}

/// Sends each transfer through the meter and reads back its estimate
fn drive<M>(meter: &M, transfers: &[ScriptedTransfer]) -> Result<i64>
where
    M: BandwidthEstimator + TransferObserver<String>,
    M::Error: std::error::Error + Send + Sync + 'static,
{
    for transfer in transfers {
        meter
            .on_transfer_start(&transfer.source, &transfer.data_spec())
            .with_context(|| format!("Failed to start transfer from {}", transfer.source))?;
        for &chunk in &transfer.chunks {
            meter
                .on_bytes_transferred(&transfer.source, chunk)
                .with_context(|| format!("Failed to count bytes from {}", transfer.source))?;
        }
        meter
            .on_transfer_end(&transfer.source)
            .with_context(|| format!("Failed to end transfer from {}", transfer.source))?;
    }
    Ok(meter.bitrate_estimate())
}

pub fn print_report(report: &ReplayReport, json: bool) -> Result<()> {
    if json {
        let output =
            serde_json::to_string_pretty(report).context("Failed to serialize replay report")?;
        println!("{output}");
        return Ok(());
    }

    println!("Data Meter Replay");
    println!("=================");
    println!("Estimate: {}", report.estimate);
    println!("Total transferred: {}", format_bytes(report.total_bytes));

    for summary in &report.transfers {
        println!("\nSource: {}", summary.source);
        println!("  URI: {}", summary.uri);
        println!("  Transferred: {}", format_bytes(summary.bytes));
        println!("  Elapsed: {} ms", summary.elapsed_ms());
    }
    Ok(())
}
