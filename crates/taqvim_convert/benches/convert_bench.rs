use criterion::{Criterion, black_box, criterion_group, criterion_main};
use taqvim_convert::{
    Calendar, CalendarDate, ConversionRequest, convert, convert_request, parse_conversion_type,
    render_all,
};

fn convert_bench(c: &mut Criterion) {
    let date = CalendarDate::ymd(2024, 7, 18);

    let mut group = c.benchmark_group("convert");
    group.bench_function("gregorian_to_persian", |b| {
        b.iter(|| convert(Calendar::Gregorian, Calendar::Persian, black_box(&date)))
    });
    group.bench_function("gregorian_to_hebrew", |b| {
        b.iter(|| convert(Calendar::Gregorian, Calendar::Hebrew, black_box(&date)))
    });
    let request = ConversionRequest {
        source: Calendar::Gregorian,
        target: Calendar::Islamic,
        date,
    };
    group.bench_function("request", |b| {
        b.iter(|| convert_request(black_box(&request)))
    });
    group.finish();
}

fn facade_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("facade");
    group.bench_function("render_all", |b| {
        b.iter(|| render_all(black_box(2_460_509.5)))
    });
    group.bench_function("parse_conversion_type", |b| {
        b.iter(|| parse_conversion_type(black_box("indian_civil_to_mayan_long_count")))
    });
    group.finish();
}

criterion_group!(benches, convert_bench, facade_bench);
criterion_main!(benches);
