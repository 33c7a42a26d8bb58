use bencher::BenchCase;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use micro_decorator::{
    accumulate, accumulate_with, constructor, fn_sink, CallArgs, Decorator, FnTrait, Signature, Trace, TraceLine,
};
use serde_json::{Map, Value};
use std::hint::black_box;

fn create_test_cases() -> Vec<BenchCase> {
    vec![BenchCase::small("small"), BenchCase::normal("normal"), BenchCase::large("large")]
}

fn benchmark_bind(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("bind");

    for case in create_test_cases().into_iter().filter(|case| case.size() <= 64) {
        let mut builder = Signature::builder();
        for i in 0..case.size() {
            builder = builder.param_with_default(format!("p{i}"), i);
        }
        let signature = builder.var_keyword("extra").build().expect("generated signature should be valid");
        let init = constructor(signature).decorate(|_: &mut Map<String, Value>, _: &CallArgs| Ok::<_, micro_decorator::BindError>(()));
        let args: CallArgs = (0..case.size() / 2).collect();

        group.throughput(Throughput::Elements(case.size() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(case.name()), &args, |b, args| {
            b.iter_batched(
                || args.clone(),
                |args| {
                    let object: Map<String, Value> = init.construct(args).expect("arguments should bind");
                    black_box(object);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn benchmark_accumulate(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("accumulate");
    let to_vec = accumulate::<Vec<usize>>().decorate(|n: usize| (0..n).map(|i| i * 3));
    let to_sum = accumulate_with(|items: std::ops::Range<usize>| items.sum::<usize>()).decorate(|n: usize| 0..n);

    for case in create_test_cases() {
        group.throughput(Throughput::Elements(case.size() as u64));
        group.bench_with_input(BenchmarkId::new("collect", case.name()), &case.size(), |b, &n| {
            b.iter(|| black_box(to_vec.call((n,))));
        });
        group.bench_with_input(BenchmarkId::new("sum", case.name()), &case.size(), |b, &n| {
            b.iter(|| black_box(to_sum.call((n,))));
        });
    }

    group.finish();
}

fn benchmark_trace(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("trace");
    let discard = fn_sink(|line: &TraceLine<'_>| {
        black_box(line.to_string());
    });
    let plain = Trace::named("add").show_counter(true).sink(discard).decorate(|a: u64, b: u64| a + b);
    let typed = Trace::named("add").show_types(true).sink(discard).decorate(|a: u64, b: u64| a + b);

    group.bench_function("plain", |b| b.iter(|| black_box(plain.call((black_box(2), black_box(3))))));
    group.bench_function("typed", |b| b.iter(|| black_box(typed.call((black_box(2), black_box(3))))));

    group.finish();
}

criterion_group!(decorators, benchmark_bind, benchmark_accumulate, benchmark_trace);
criterion_main!(decorators);
