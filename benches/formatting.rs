use chrono::{TimeZone, Utc};
use criterion::{Criterion, criterion_group, criterion_main};
use tintlog::fmt::{CallerInfo, FormatTemplate, FormatValues, LineFormat, strip, wrap};
use tintlog::{Color, Flags, Level, Style};
use std::hint::black_box;

fn bench_format_template_render(c: &mut Criterion) {
    let template = FormatTemplate::standard();
    let values = FormatValues::new()
        .prefix(">>>")
        .level("INFO")
        .date("Wed Jan 15 14:30:00 +0000 2025")
        .caller("main.rs:42", "main.rs", "42")
        .msg("Application started successfully");

    c.bench_function("FormatTemplate::render", |b| {
        b.iter(|| template.render(black_box(&values)));
    });
}

fn bench_line_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("LineFormat::format_into");
    let now = Utc.with_ymd_and_hms(2025, 1, 15, 14, 30, 0).unwrap();
    let caller = CallerInfo {
        file: "src/server/main.rs",
        line: 42,
    };

    let colored = LineFormat::new();
    let mut buf = String::with_capacity(256);
    group.bench_function("default", |b| {
        b.iter(|| {
            buf.clear();
            colored.format_into(&mut buf, &now, black_box(Level::Warning), &caller, "disk low");
        });
    });

    let mut plain = LineFormat::new();
    plain.set_colors(false);
    plain.set_flags(Flags::DATE | Flags::SHORT_FILE);
    group.bench_function("plain_short_file", |b| {
        b.iter(|| {
            buf.clear();
            plain.format_into(&mut buf, &now, black_box(Level::Warning), &caller, "disk low");
        });
    });

    group.finish();
}

fn bench_strip(c: &mut Criterion) {
    let colored = wrap(Style::Bold, Color::Red, "connection refused", Style::Off);
    let plain = "connection refused";

    let mut group = c.benchmark_group("strip");
    group.bench_function("colored", |b| b.iter(|| strip(black_box(&colored))));
    group.bench_function("plain", |b| b.iter(|| strip(black_box(plain))));
    group.finish();
}

criterion_group!(
    benches,
    bench_format_template_render,
    bench_line_format,
    bench_strip,
);
criterion_main!(benches);
