use micro_decorator::{Decorator, FnTrait, accumulate, accumulate_star};
use std::collections::BTreeSet;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

struct Rgb {
    red: u8,
    green: u8,
    blue: u8,
}

fn parse_hex(code: &str) -> impl Iterator<Item = u8> + '_ {
    code.trim_start_matches('#')
        .as_bytes()
        .chunks(2)
        .filter_map(|pair| std::str::from_utf8(pair).ok())
        .filter_map(|pair| u8::from_str_radix(pair, 16).ok())
}

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let words = accumulate::<BTreeSet<String>>()
        .decorate(|text: &'static str| text.split_whitespace().map(str::to_lowercase));
    info!(words = ?words.call(("The quick the lazy THE end",)), "distinct words");

    let color = accumulate_star(|red: u8, green: u8, blue: u8| Rgb { red, green, blue }).decorate(parse_hex);
    for code in ["#ff8800", "#ff88"] {
        match color.call((code,)) {
            Ok(Rgb { red, green, blue }) => info!(code, red, green, blue, "parsed"),
            Err(e) => info!(code, cause = %e, "rejected"),
        }
    }
}
