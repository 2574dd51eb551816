//! Nuts & Bolts - console driver
//!
//! Generates a shuffled set of nuts and bolts, then walks the matcher's event
//! stream one pair at a time, narrating each step.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use nuts_bolts::{by_size, Bolt, Matcher, MatcherConfig, Nut, PivotRule};

/// Pivot selection as a command line value
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CliPivot {
    Random,
    First,
}

impl From<CliPivot> for PivotRule {
    fn from(pivot: CliPivot) -> Self {
        match pivot {
            CliPivot::Random => PivotRule::Random,
            CliPivot::First => PivotRule::First,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Matches shuffled nuts to bolts by comparison only", long_about = None)]
struct Args {
    /// Number of nut/bolt pairs
    #[arg(short = 'n', long, default_value_t = 6)]
    count: usize,

    /// Largest size to draw from (sizes are distinct, starting at 1)
    #[arg(
        long,
        default_value_t = 99,
        value_parser = clap::value_parser!(u32).range(1..u32::MAX as i64)
    )]
    max_size: u32,

    /// Seed for the instance and the pivots (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Pivot selection rule
    #[arg(long, value_enum, default_value_t = CliPivot::Random)]
    pivot: CliPivot,

    /// Replace one bolt with a size no nut has
    #[arg(long)]
    break_bolt: bool,

    #[arg(short, long)]
    verbose: bool,
}

/// Nut and bolt sizes for one run
#[derive(Debug, Clone, PartialEq, Eq)]
struct Instance {
    nuts: Vec<u32>,
    bolts: Vec<u32>,
    /// Bolt replaced by `--break-bolt`, if any
    broken: Option<usize>,
}

/// Draw `count` distinct sizes from `1..=max_size`, shuffled independently
/// for each side. With `break_bolt`, one bolt gets size `max_size + 1`, which
/// no nut has.
fn build_instance(
    rng: &mut ChaCha8Rng,
    count: usize,
    max_size: u32,
    break_bolt: bool,
) -> Result<Instance> {
    if count > max_size as usize {
        bail!("cannot draw {} distinct sizes from 1..={}", count, max_size);
    }

    let mut nuts: Vec<u32> = rand::seq::index::sample(rng, max_size as usize, count)
        .into_iter()
        .map(|i| i as u32 + 1)
        .collect();
    let mut bolts = nuts.clone();
    nuts.shuffle(rng);
    bolts.shuffle(rng);

    let mut broken = None;
    if break_bolt && !bolts.is_empty() {
        let Some(foreign) = max_size.checked_add(1) else {
            bail!("--break-bolt needs a size above {}", max_size);
        };
        let victim = rng.gen_range(0..bolts.len());
        bolts[victim] = foreign;
        broken = Some(victim);
    }

    Ok(Instance { nuts, bolts, broken })
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    env_logger::builder().filter_level(log_level).parse_default_env().init();

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    debug!("seed {}", seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let Instance { nuts: nut_sizes, bolts: bolt_sizes, broken } =
        build_instance(&mut rng, args.count, args.max_size, args.break_bolt)?;
    if let Some(victim) = broken {
        info!("bolt #{} replaced with size {}", victim, bolt_sizes[victim]);
    }

    println!("Nuts:  {:?}", nut_sizes);
    println!("Bolts: {:?}", bolt_sizes);
    println!();

    let config = MatcherConfig::new().with_pivot(args.pivot.into());
    let mut matcher = Matcher::new(config, rng);
    debug!("pivot rule {:?}", matcher.config().pivot);
    let mut events = matcher.events(
        Nut::from_sizes(nut_sizes.iter().copied()),
        Bolt::from_sizes(bolt_sizes.iter().copied()),
        by_size,
    );

    let mut step = 0;
    for event in events.by_ref() {
        let event = event.context("matching failed")?;
        step += 1;
        println!(
            "Step {}: matching nut {} with bolt {} -> position {}",
            step, nut_sizes[event.nut], bolt_sizes[event.bolt], event.slot
        );
    }

    let matched = events.finish().context("matching failed")?;
    let stats = matched.stats;

    println!();
    println!("Matched nuts:  {:?}", matched.nut_sizes());
    println!("Matched bolts: {:?}", matched.bolt_sizes());
    info!(
        "{} pairs, {} comparisons, {} partitions, max depth {}",
        stats.pairs, stats.comparisons, stats.partitions, stats.max_depth
    );

    Ok(())
}

// ============================================================================
// Unit Tests
// ============================================================================
