use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kma_forecast::{
    ForecastItem, RecordAssembler, RunSchedule, VariableKind, WindowFilter, DEFAULT_TARGET_HOURS,
};

fn synthetic_series(date: NaiveDate, days: i64) -> Vec<ForecastItem> {
    (0..days * 24)
        .map(|h| {
            let day = date + chrono::Duration::days(h / 24);
            let stamp = format!("{}{:02}00", day.format("%Y%m%d"), h % 24);
            ForecastItem::new(stamp, format!("{:.1}", h as f64 * 0.1))
        })
        .collect()
}

fn bench_cycle_merge(c: &mut Criterion) {
    let target = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    let series = synthetic_series(target - chrono::Duration::days(1), 3);
    let filter = WindowFilter::new(target, DEFAULT_TARGET_HOURS);
    let schedule = RunSchedule::default();
    let now = target.and_hms_opt(8, 0, 0).unwrap();

    c.bench_function("window_filter", |b| b.iter(|| filter.apply(black_box(&series))));
    c.bench_function("filter_and_assemble", |b| {
        b.iter(|| {
            let run = schedule.resolve(black_box(now));
            let mut assembler = RecordAssembler::new(now, target, run, filter.hours());
            for kind in VariableKind::ALL {
                assembler.merge(kind, filter.apply(black_box(&series)));
            }
            assembler.finish()
        })
    });
}

criterion_group!(benches, bench_cycle_merge);
criterion_main!(benches);
