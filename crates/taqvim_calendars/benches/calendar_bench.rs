use criterion::{Criterion, black_box, criterion_group, criterion_main};
use taqvim_calendars::{
    LongCount, gregorian_to_jd, hebrew_to_jd, indian_civil_to_jd, islamic_to_jd, jd_to_gregorian,
    jd_to_hebrew, jd_to_indian_civil, jd_to_islamic, jd_to_julian, jd_to_mayan, jd_to_persian,
    julian_to_jd, mayan_to_jd, persian_to_jd,
};

fn to_jd_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_jd");
    group.bench_function("gregorian", |b| {
        b.iter(|| gregorian_to_jd(black_box(2024), black_box(7), black_box(18)))
    });
    group.bench_function("julian", |b| {
        b.iter(|| julian_to_jd(black_box(2024), black_box(7), black_box(5)))
    });
    group.bench_function("islamic", |b| {
        b.iter(|| islamic_to_jd(black_box(1446), black_box(1), black_box(10)))
    });
    group.bench_function("persian", |b| {
        b.iter(|| persian_to_jd(black_box(1403), black_box(4), black_box(28)))
    });
    group.bench_function("hebrew", |b| {
        b.iter(|| hebrew_to_jd(black_box(5784), black_box(4), black_box(12)))
    });
    let lc = LongCount::new(13, 0, 11, 13, 7);
    group.bench_function("mayan", |b| b.iter(|| mayan_to_jd(black_box(&lc))));
    group.bench_function("indian_civil", |b| {
        b.iter(|| indian_civil_to_jd(black_box(1946), black_box(4), black_box(27)))
    });
    group.finish();
}

fn from_jd_bench(c: &mut Criterion) {
    let jd = 2_460_509.5;

    let mut group = c.benchmark_group("from_jd");
    group.bench_function("gregorian", |b| b.iter(|| jd_to_gregorian(black_box(jd))));
    group.bench_function("julian", |b| b.iter(|| jd_to_julian(black_box(jd))));
    group.bench_function("islamic", |b| b.iter(|| jd_to_islamic(black_box(jd))));
    group.bench_function("persian", |b| b.iter(|| jd_to_persian(black_box(jd))));
    group.bench_function("hebrew", |b| b.iter(|| jd_to_hebrew(black_box(jd))));
    group.bench_function("mayan", |b| b.iter(|| jd_to_mayan(black_box(jd))));
    group.bench_function("indian_civil", |b| {
        b.iter(|| jd_to_indian_civil(black_box(jd)))
    });
    group.finish();
}

criterion_group!(benches, to_jd_bench, from_jd_bench);
criterion_main!(benches);
