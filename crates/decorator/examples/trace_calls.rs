use micro_decorator::{
    Decorator, DecoratorExt, FnTrait, Trace, TraceOptions, TracingSink, accumulate, accumulate_with, trace,
};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

fn add(a: i32, b: i32) -> i32 {
    a + b
}

fn fib(n: u64) -> u64 {
    (0..n).fold((0, 1), |(a, b), _| (b, a + b)).0
}

fn primes_below(n: u32) -> impl Iterator<Item = u32> {
    (2..n).filter(|i| (2..*i).all(|d| i % d != 0))
}

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    // standard output, ordinal first: "1 add(2, 3) -> 5"
    let traced_add = trace(TraceOptions { show_counter: true, show_types: false }).decorate(add);
    traced_add.call((2, 3));
    traced_add.call((40, 2));

    // with runtime type names: "fib(10: u64) -> 55"
    let traced_fib = Trace::new().show_types(true).decorate(fib);
    traced_fib.call((10,));

    // routed through tracing instead of stdout
    let squares = accumulate_with(|items: std::ops::Range<u64>| items.map(|i| i * i).sum::<u64>())
        .and_then(Trace::named("sum_of_squares").show_counter(true).sink(TracingSink))
        .decorate(|n: u64| 0..n);
    let total = squares.call((4,));
    info!(total, "done");

    // the collected Vec has no Display, so render it with Debug: "primes_below(10) -> [2, 3, 5, 7]"
    let primes = accumulate::<Vec<u32>>().and_then(Trace::new().debug_result()).decorate(primes_below);
    primes.call((10,));
}
