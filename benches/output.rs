use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::io;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;
use tintlog::{Flags, Level, Logger, Target};

fn bench_sink_write(c: &mut Criterion) {
    let logger = Logger::new(io::sink(), Level::Info);
    logger.set_flags(Flags::STD | Flags::SHORT_FILE);

    c.bench_function("Logger::info (sink)", |b| {
        b.iter(|| logger.info(black_box("benchmark log message")));
    });
}

fn bench_filtered(c: &mut Criterion) {
    let logger = Logger::new(io::sink(), Level::Error);

    c.bench_function("Logger::debug (filtered)", |b| {
        b.iter(|| logger.debug(black_box("never written")));
    });
}

fn bench_file_write(c: &mut Criterion) {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let logger = Logger::builder()
        .target(Target::File(tmp.path().join("bench.log")))
        .level(Level::Info)
        .build()
        .expect("failed to build logger");

    c.bench_function("Logger::info (file)", |b| {
        b.iter(|| logger.info(black_box("benchmark log message")));
    });

    logger.flush().expect("flush failed");
}

fn bench_contended(c: &mut Criterion) {
    let logger = Arc::new(Logger::new(io::sink(), Level::Info));

    c.bench_function("Logger::info (4 threads x 100)", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let logger = Arc::clone(&logger);
                    thread::spawn(move || {
                        for _ in 0..100 {
                            let _ = logger.info("contended");
                        }
                    })
                })
                .collect();
            for h in handles {
                h.join().expect("writer panicked");
            }
        });
    });
}

criterion_group!(
    benches,
    bench_sink_write,
    bench_filtered,
    bench_contended,
    bench_file_write,
);
criterion_main!(benches);
