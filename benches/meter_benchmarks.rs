use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kaipo_meter::collaborators::{ManualEstimator, NoObserver, TransferRecorder, TransferTally};
use kaipo_meter::models::DataSpec;
use kaipo_meter::{BandwidthEstimator, DataMeter, TransferObserver};
use std::sync::Arc;

/// Benchmark estimate reads directly and through the meter
fn benchmark_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("bitrate_estimate");

    let estimator = ManualEstimator::new(500_000);
    group.bench_function("direct", |b| {
        b.iter(|| black_box(estimator.bitrate_estimate()));
    });

    let meter = DataMeter::new(&estimator, NoObserver);
    group.bench_function("borrowed_meter", |b| {
        b.iter(|| black_box(meter.bitrate_estimate()));
    });

    let shared = DataMeter::new(Arc::new(ManualEstimator::new(500_000)), NoObserver);
    group.bench_function("shared_meter", |b| {
        b.iter(|| black_box(shared.bitrate_estimate()));
    });

    group.finish();
}

/// Benchmark a full start/bytes/end sequence through the meter
fn benchmark_transfer_notifications(c: &mut Criterion) {
    let mut group = c.benchmark_group("transfer_notifications");
    let spec = DataSpec::new("https://cdn.example/seg.ts");

    group.bench_function("tally", |b| {
        let tally = TransferTally::<u32>::new();
        let meter = DataMeter::new(ManualEstimator::default(), &tally);
        b.iter(|| {
            meter.on_transfer_start(&1, &spec).expect("start should be accepted");
            for _ in 0..16 {
                meter
                    .on_bytes_transferred(&1, black_box(1024))
                    .expect("bytes should be accepted");
            }
            meter.on_transfer_end(&1).expect("end should be accepted");
        });
    });

    group.bench_function("recorder", |b| {
        let recorder = TransferRecorder::<u32>::new();
        let meter = DataMeter::new(ManualEstimator::default(), &recorder);
        b.iter(|| {
            meter.on_transfer_start(&1, &spec).expect("start should be accepted");
            meter
                .on_bytes_transferred(&1, black_box(1024))
                .expect("bytes should be accepted");
            meter.on_transfer_end(&1).expect("end should be accepted");
            recorder.clear();
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_estimate,
    benchmark_transfer_notifications
);
criterion_main!(benches);
