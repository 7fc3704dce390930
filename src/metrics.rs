use anyhow::Result;
use once_cell::sync::Lazy;
use prometheus::{
    Encoder, Histogram, IntCounter, TextEncoder, opts, register_histogram, register_int_counter,
};

pub static STORE_READS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(opts!(
        "crowdpitch_store_reads_total",
        "Total number of reads issued to the backend store"
    ))
    .unwrap()
});

pub static STORE_WRITES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(opts!(
        "crowdpitch_store_writes_total",
        "Total number of writes issued to the backend store"
    ))
    .unwrap()
});

pub static INCREMENT_MERGES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(opts!(
        "crowdpitch_increment_merges_total",
        "Total number of partial updates that resolved increment sentinels"
    ))
    .unwrap()
});

pub static FEEDBACK_SUBMITTED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(opts!(
        "crowdpitch_feedback_submitted_total",
        "Total number of accepted feedback submissions"
    ))
    .unwrap()
});

pub static STORE_REQUEST_SECONDS: Lazy<Histogram> = Lazy::new(|| {
    register_histogram!(
        "crowdpitch_store_request_seconds",
        "Histogram of backend store request latencies"
    )
    .unwrap()
});

pub fn gather_metrics() -> Result<String> {
    let mut buffer = vec![];
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    encoder.encode(&metric_families, &mut buffer)?;

    Ok(String::from_utf8(buffer)?)
}
