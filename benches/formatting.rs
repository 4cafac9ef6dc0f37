use criterion::{Criterion, criterion_group, criterion_main};
use loglet::config::{Config, Settings};
use loglet::fmt::finish_line;
use loglet::{EntryContext, FormatTemplate, FormatValues, LogType};
use std::hint::black_box;

const DEFAULT_FORMAT: &str = "[{DateTime}] {LogType} {UserName}: {Message}";

const SPARSE_CONFIG: &str = "LogType=false\nUserName=false\nMessage=true\nDateTime=true\n\
                             Format=[{DateTime}] {LogType} {UserName}: {Message}";

const SAMPLE_FILE: &str = "; logger settings\n[Settings]\n\
                           DateTime=true\nLogType=true\nUserName=true\nMessage=true\n\
                           Format=[{DateTime}] {LogType} {UserName}: {Message}\n";

fn bench_template_parse(c: &mut Criterion) {
    c.bench_function("FormatTemplate::parse", |b| {
        b.iter(|| FormatTemplate::parse(black_box(DEFAULT_FORMAT)));
    });
}

fn bench_template_render(c: &mut Criterion) {
    let template = FormatTemplate::parse(DEFAULT_FORMAT);
    let values = FormatValues::new()
        .date_time("2025-01-15 14:30:00")
        .log_type("[Info]")
        .user_name("alice")
        .message("Application started successfully");

    c.bench_function("FormatTemplate::render", |b| {
        b.iter(|| template.render(black_box(&values)));
    });
}

fn bench_format_entry(c: &mut Criterion) {
    let mut group = c.benchmark_group("Settings::format_entry");
    let context = EntryContext::new("2025-01-15 14:30:00", "alice");

    let all = Settings::default();
    group.bench_function("all_fields", |b| {
        b.iter(|| all.format_entry(LogType::Info, black_box("Application started"), &context));
    });

    let sparse = Settings::from_config(&Config::parse(SPARSE_CONFIG)).unwrap_or_default();
    group.bench_function("sparse_fields", |b| {
        b.iter(|| sparse.format_entry(LogType::Warning, black_box("Disk almost full"), &context));
    });

    group.finish();
}

fn bench_finish_line(c: &mut Criterion) {
    c.bench_function("finish_line", |b| {
        b.iter(|| finish_line(black_box("  [2025-01-15 14:30:00]    alice:   msg  ")));
    });
}

fn bench_config_parse(c: &mut Criterion) {
    c.bench_function("Config::parse", |b| {
        b.iter(|| Config::parse(black_box(SAMPLE_FILE)));
    });
}

criterion_group!(
    benches,
    bench_template_parse,
    bench_template_render,
    bench_format_entry,
    bench_finish_line,
    bench_config_parse
);
criterion_main!(benches);
