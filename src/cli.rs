use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use ksum_core::Algorithm;
use ksum_harness::{
    HarnessConfig, RunMode, check::cross_check, config::InputProfile, report::Report,
    timing::run_trials,
};
use strum::IntoEnumIterator as _;

fn names<T: ToString>(values: impl Iterator<Item = T>) -> String {
    values.map(|v| v.to_string()).collect::<Vec<_>>().join(", ")
}

pub fn command() -> Command {
    Command::new("ksum")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Time zero-sum counters and sorting baselines, and fit the timings to a power law")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_parser(value_parser!(PathBuf))
                .global(true)
                .help("TOML config file (default: ksum.toml if present)"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_parser(value_parser!(u64))
                .global(true)
                .help("Seed for input generation"),
        )
        .arg(
            Arg::new("trials")
                .long("trials")
                .value_parser(value_parser!(usize))
                .global(true)
                .conflicts_with_all(["quick", "full"])
                .help("Trials averaged per input size"),
        )
        .arg(
            Arg::new("quick")
                .long("quick")
                .action(ArgAction::SetTrue)
                .global(true)
                .conflicts_with("full")
                .help("Run a single trial per size"),
        )
        .arg(
            Arg::new("full")
                .long("full")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Run ten trials per size"),
        )
        .arg(
            Arg::new("algorithm")
                .long("algorithm")
                .short('a')
                .action(ArgAction::Append)
                .value_parser(|s: &str| s.parse::<Algorithm>().map_err(|e| format!("{e}")))
                .help(format!("Algorithm to time, repeatable [{}]", names(Algorithm::iter()))),
        )
        .arg(
            Arg::new("size")
                .long("size")
                .short('n')
                .action(ArgAction::Append)
                .value_parser(value_parser!(usize))
                .global(true)
                .help("Input size, repeatable"),
        )
        .arg(
            Arg::new("input")
                .long("input")
                .value_parser(|s: &str| s.parse::<InputProfile>().map_err(|e| format!("{e}")))
                .global(true)
                .help(format!("Input profile [{}]", names(InputProfile::iter()))),
        )
        .arg(
            Arg::new("project")
                .long("project")
                .action(ArgAction::Append)
                .value_parser(value_parser!(usize))
                .help("Extra input size to project the fitted law to, repeatable"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Print JSON instead of tables"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count)
                .global(true)
                .help("Set verbose output level"),
        )
        .subcommand(
            Command::new("check")
                .about("Cross-check the 2-sum strategies and the sorts on generated inputs"),
        )
}

/// Level forced by `-v`; `None` leaves it to `RUST_LOG`.
pub fn log_level(matches: &ArgMatches) -> Option<log::LevelFilter> {
    match matches.get_count("verbose") {
        0 => None,
        1 => Some(log::LevelFilter::Debug),
        _ => Some(log::LevelFilter::Trace),
    }
}

/// Resolve the run configuration: file and environment first, flags last.
pub fn resolve_config(matches: &ArgMatches) -> Result<HarnessConfig> {
    let path = matches.get_one::<PathBuf>("config");
    let mut config = HarnessConfig::load(path.map(PathBuf::as_path))?;
    apply_flags(&mut config, matches);

    if matches.subcommand_matches("check").is_some() {
        config.validate_cross_check()?;
    } else {
        config.validate()?;
    }
    Ok(config)
}

fn apply_flags(config: &mut HarnessConfig, matches: &ArgMatches) {
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config.seed = seed;
    }

    if matches.get_flag("quick") {
        config.trial_count = RunMode::Quick.trial_count();
    } else if matches.get_flag("full") {
        config.trial_count = RunMode::Full.trial_count();
    } else if let Some(&trials) = matches.get_one::<usize>("trials") {
        config.trial_count = trials;
    }

    if let Some(algorithms) = matches.get_many::<Algorithm>("algorithm") {
        config.algorithms = algorithms.copied().collect();
    }
    if let Some(sizes) = matches.get_many::<usize>("size") {
        config.sizes = sizes.copied().collect();
    }
    if let Some(&input) = matches.get_one::<InputProfile>("input") {
        config.input = input;
    }
    if let Some(sizes) = matches.get_many::<usize>("project") {
        config.project_sizes = sizes.copied().collect();
    }
}

pub fn run(matches: &ArgMatches) -> Result<()> {
    let config = resolve_config(matches)?;
    let json = matches.get_flag("json");
    log::debug!("Resolved config: {config:?}");

    if matches.subcommand_matches("check").is_some() {
        return check(&config, json);
    }

    let mut reports = Vec::with_capacity(config.algorithms.len());
    for &algorithm in &config.algorithms {
        log::info!(
            "Timing {algorithm} over sizes {:?} ({} trials)",
            config.sizes,
            config.trial_count
        );
        let measurements = run_trials(&config, algorithm)?;
        reports.push(Report::build(&config, algorithm, measurements));
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!("{report}");
        }
    }
    Ok(())
}

fn check(config: &HarnessConfig, json: bool) -> Result<()> {
    let summary = cross_check(config);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "Checked {} inputs: {} mismatches",
            summary.inputs,
            summary.mismatches.len()
        );
    }

    if summary.passed() {
        Ok(())
    } else {
        Err(anyhow!(
            "{} of {} inputs disagreed between strategies",
            summary.mismatches.len(),
            summary.inputs
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ArgMatches {
        command()
            .try_get_matches_from(std::iter::once("ksum").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_command_is_well_formed() {
        command().debug_assert();
    }

    #[test]
    fn test_flags_override_config() {
        let matches = parse(&[
            "--seed",
            "7",
            "--quick",
            "-a",
            "two-sum-hash-table",
            "-a",
            "merge-sort",
            "-n",
            "10",
            "-n",
            "20",
            "--input",
            "distinct",
            "--project",
            "40",
        ]);
        let mut config = HarnessConfig::default();
        apply_flags(&mut config, &matches);

        assert_eq!(config.seed, 7);
        assert_eq!(config.trial_count, 1);
        assert_eq!(
            config.algorithms,
            vec![Algorithm::TwoSumHashTable, Algorithm::MergeSort]
        );
        assert_eq!(config.sizes, vec![10, 20]);
        assert_eq!(config.input, InputProfile::Distinct);
        assert_eq!(config.project_sizes, vec![40]);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let matches = parse(&[]);
        let mut config = HarnessConfig::default();
        apply_flags(&mut config, &matches);
        assert_eq!(config, HarnessConfig::default());
        assert_eq!(log_level(&matches), None);
    }

    #[test]
    fn test_rejects_unknown_algorithm_and_conflicts() {
        assert!(command().try_get_matches_from(["ksum", "-a", "bogo-sort"]).is_err());
        assert!(command().try_get_matches_from(["ksum", "--quick", "--full"]).is_err());
        assert!(
            command()
                .try_get_matches_from(["ksum", "--trials", "3", "--quick"])
                .is_err()
        );
    }

    #[test]
    fn test_check_subcommand_and_verbosity() {
        let matches = parse(&["-vv", "check", "--trials", "2"]);
        assert!(matches.subcommand_matches("check").is_some());
        assert_eq!(log_level(&matches), Some(log::LevelFilter::Trace));
        assert_eq!(log_level(&parse(&["-v"])), Some(log::LevelFilter::Debug));

        let mut config = HarnessConfig::default();
        apply_flags(&mut config, &matches);
        assert_eq!(config.trial_count, 2);
    }

    #[test]
    fn test_check_validates_only_checked_algorithms() {
        let matches = parse(&["check", "-n", "0", "-n", "1", "-n", "2"]);
        let config = resolve_config(&matches).unwrap();
        assert_eq!(config.sizes, vec![0, 1, 2]);

        // The default timed algorithm is 3-sum, which needs three elements.
        let matches = parse(&["-n", "2"]);
        assert!(resolve_config(&matches).is_err());
    }

    #[test]
    fn test_file_then_env_then_flags() -> Result<()> {
        let path = std::env::temp_dir().join(format!("ksum-{}-layers.toml", std::process::id()));
        std::fs::write(&path, "seed = 7\nsizes = [10, 20]\ntrial_count = 4\n")?;
        let mut config = HarnessConfig::from_toml_file(&path)?;
        std::fs::remove_file(&path)?;
        assert_eq!(config.seed, 7);

        config.apply_env_with(|key| (key == "KSUM_SEED").then(|| "9".to_owned()));
        assert_eq!(config.seed, 9);
        assert_eq!(config.sizes, vec![10, 20]);
        assert_eq!(config.trial_count, 4);

        apply_flags(&mut config, &parse(&["--seed", "11"]));
        assert_eq!(config.seed, 11);
        assert_eq!(config.sizes, vec![10, 20]);
        assert_eq!(config.trial_count, 4);

        apply_flags(&mut config, &parse(&["--trials", "2", "-n", "5"]));
        assert_eq!(config.seed, 11);
        assert_eq!(config.sizes, vec![5]);
        assert_eq!(config.trial_count, 2);
        Ok(())
    }
}
