use klowest::builder::Build;
use klowest::config::{ConfigBuilder, DynSelector};
use klowest::utils::profiler::ProfilerOutputKind;
use klowest::{KLowest, Profiler, Selector};
use klowest_benchmarks::generator::RandomUniformGenerator;
use klowest_benchmarks::utils::print::RULE;
use klowest_benchmarks::run::DEFAULT_K;
use klowest_benchmarks::{Run, RunArgs};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::io::{self, Write};
use std::process::exit;

fn make_selector(
    args: &RunArgs,
    config: &Option<ConfigBuilder>,
    n: usize,
    k: usize,
) -> DynSelector<u64> {
    let selector: DynSelector<u64> = match config {
        Some(builder) => builder.clone().build(),
        None => Box::new(KLowest::new(k)),
    };
    if args.profile {
        let name = format!("klowest(n={},k={})", n, selector.capacity());
        Box::new(Profiler::new(&name, ProfilerOutputKind::Stdout, selector))
    } else {
        selector
    }
}

fn main() {
    let args = RunArgs::parse();
    if let Err(e) = TermLogger::init(
        args.log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let config = match &args.config {
        None => None,
        Some(path) => match ConfigBuilder::from_file(path) {
            Ok(c) => Some(c),
            Err(e) => {
                log::error!("{}", e);
                exit(1);
            }
        },
    };
    // With a configuration, the capacity is fixed by the configuration.
    let ks = match config {
        Some(_) => {
            if args.k != DEFAULT_K {
                log::warn!("Selector configuration overrides --k values.");
            }
            vec![0]
        }
        None => args.k.clone(),
    };

    let generator = RandomUniformGenerator::new(args.range, args.seed);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for n in args.n.iter() {
        for k in ks.iter() {
            let mut selector = make_selector(&args, &config, *n, *k);
            log::info!("Run n={} k={}", n, selector.capacity());
            let run = Run::new(selector.capacity(), *n, generator);
            let result = run
                .write_input(&mut out)
                .and_then(|_| run.execute(&mut selector, &mut out));
            // The profiler, if any, prints its profile when dropped.
            drop(selector);
            if let Err(e) = result.and_then(|_| writeln!(out, "{}", RULE)) {
                log::error!("Failed to write run output: {}", e);
                exit(1);
            }
        }
    }
}
