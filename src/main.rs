#![warn(clippy::all, rust_2018_idioms)]

fn main() -> anyhow::Result<()> {
    let matches = ksum::cli::command().get_matches();

    ksum_harness::setup(ksum::cli::log_level(&matches));

    ksum::cli::run(&matches)
}
