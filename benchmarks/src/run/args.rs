use clap::{
    crate_authors, crate_version, value_parser, Arg, ArgMatches, Command,
};
use simplelog::LevelFilter;
use std::path::PathBuf;

/// Default stream lengths.
pub const DEFAULT_N: [usize; 3] = [200, 400, 800];
/// Default numbers of selected values.
pub const DEFAULT_K: [usize; 3] = [10, 50, 100];
/// Default upper bound (excluded) of random values.
pub const DEFAULT_RANGE: u64 = 1024;

/// Command line arguments of the `klowest` driver.
#[derive(Clone, Debug, PartialEq)]
pub struct RunArgs {
    /// Stream lengths, one run per length and `k`.
    pub n: Vec<usize>,
    /// Numbers of selected values.
    pub k: Vec<usize>,
    /// Values are drawn in `[0, range)`.
    pub range: u64,
    pub seed: Option<u64>,
    /// Selector configuration file replacing the default selector.
    pub config: Option<PathBuf>,
    /// Wrap selectors in a profiler writing to stdout.
    pub profile: bool,
    pub log_level: LevelFilter,
}

impl RunArgs {
    pub fn app() -> Command<'static> {
        let n_arg = Arg::new("n")
            .long("n")
            .help("Number of random values in the stream. Can be repeated.")
            .takes_value(true)
            .multiple_occurrences(true)
            .value_parser(value_parser!(u64))
            .required(false);
        let k_arg = Arg::new("k")
            .long("k")
            .help("Number of lowest values to select. Can be repeated.")
            .takes_value(true)
            .multiple_occurrences(true)
            .value_parser(value_parser!(u64))
            .required(false);
        let range_arg = Arg::new("range")
            .long("range")
            .help("Random values are drawn in [0, range).")
            .takes_value(true)
            .value_parser(value_parser!(u64).range(1..))
            .required(false);
        let seed_arg = Arg::new("seed")
            .long("seed")
            .help("Seed of the random values generator.")
            .takes_value(true)
            .value_parser(value_parser!(u64))
            .required(false);
        let config_arg = Arg::new("config")
            .long("config")
            .help(
                "Selector configuration file in toml format. The selector
capacity is set by the configuration and --k is ignored.",
            )
            .takes_value(true)
            .value_parser(value_parser!(PathBuf))
            .required(false);
        let profile_arg = Arg::new("profile")
            .long("profile")
            .help("Print selectors profile to stdout at the end of each run.")
            .takes_value(false)
            .required(false);
        let verbose_arg = Arg::new("verbose")
            .short('v')
            .long("verbose")
            .help("Increase logging verbosity. Can be repeated.")
            .takes_value(false)
            .multiple_occurrences(true)
            .required(false);

        Command::new("klowest")
            .version(crate_version!())
            .author(crate_authors!())
            .about(
                "Select the k lowest values of streams of random values
and print the selection at each quarter of the stream.",
            )
            .arg(n_arg)
            .arg(k_arg)
            .arg(range_arg)
            .arg(seed_arg)
            .arg(config_arg)
            .arg(profile_arg)
            .arg(verbose_arg)
    }

    pub fn from_matches(matches: &ArgMatches) -> Self {
        let sizes = |name: &str, default: &[usize]| -> Vec<usize> {
            match matches.get_many::<u64>(name) {
                Some(values) => values.map(|v| *v as usize).collect(),
                None => default.to_vec(),
            }
        };

        RunArgs {
            n: sizes("n", &DEFAULT_N),
            k: sizes("k", &DEFAULT_K),
            range: matches
                .get_one::<u64>("range")
                .copied()
                .unwrap_or(DEFAULT_RANGE),
            seed: matches.get_one::<u64>("seed").copied(),
            config: matches.get_one::<PathBuf>("config").cloned(),
            profile: matches.is_present("profile"),
            log_level: match matches.occurrences_of("verbose") {
                0 => LevelFilter::Warn,
                1 => LevelFilter::Info,
                2 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            },
        }
    }

    pub fn parse() -> Self {
        RunArgs::from_matches(&RunArgs::app().get_matches())
    }
}

#[cfg(test)]
mod tests {
    use super::{RunArgs, DEFAULT_K, DEFAULT_N, DEFAULT_RANGE};
    use simplelog::LevelFilter;
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> RunArgs {
        let matches = RunArgs::app().try_get_matches_from(args).unwrap();
        RunArgs::from_matches(&matches)
    }

    #[test]
    fn test_default_args() {
        let args = parse(&["klowest"]);
        assert_eq!(args.n, DEFAULT_N.to_vec());
        assert_eq!(args.k, DEFAULT_K.to_vec());
        assert_eq!(args.range, DEFAULT_RANGE);
        assert_eq!(args.seed, None);
        assert_eq!(args.config, None);
        assert!(!args.profile);
        assert_eq!(args.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_args() {
        let args = parse(&[
            "klowest",
            "--n",
            "100",
            "--k",
            "3",
            "--k",
            "7",
            "--range",
            "16",
            "--seed",
            "42",
            "--config",
            "selector.toml",
            "--profile",
            "-vv",
        ]);
        assert_eq!(args.n, vec![100]);
        assert_eq!(args.k, vec![3, 7]);
        assert_eq!(args.range, 16);
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.config, Some(PathBuf::from("selector.toml")));
        assert!(args.profile);
        assert_eq!(args.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_args() {
        assert!(RunArgs::app()
            .try_get_matches_from(&["klowest", "--range", "0"])
            .is_err());
        assert!(RunArgs::app()
            .try_get_matches_from(&["klowest", "--k", "-1"])
            .is_err());
    }
}
