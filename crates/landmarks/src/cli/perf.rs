//! `landmarks perf`: run the catalog pipeline under the performance monitor.
//!
//! Statistics are looked up through a TTL cache, so the first round computes
//! and later rounds hit the cache.

use super::config::Settings;
use super::{print_rejections, read_landmarks, DataArgs};
use anyhow::Result;
use chrono::Duration;
use landmarks_cache::TtlCache;
use landmarks_catalog::{Catalog, Statistics};
use landmarks_monitor::PerformanceMonitor;
use tracing::debug;

const STATISTICS_KEY: &str = "catalog.statistics";
// Largest value chrono accepts for a whole-second duration
const MAX_TTL_SECS: i64 = i64::MAX / 1000;

#[derive(Debug, clap::Args)]
pub struct PerfArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Number of statistics lookups to time
    #[arg(long, default_value_t = 3)]
    pub rounds: usize,

    /// Print key=value lines instead of the human-readable report
    #[arg(long)]
    pub summary: bool,
}

pub fn run(args: PerfArgs, settings: &Settings) -> Result<()> {
    let monitor = PerformanceMonitor::new();
    let ttl_secs = i64::try_from(settings.cache_ttl_secs).unwrap_or(i64::MAX);
    let ttl = Duration::seconds(ttl_secs.min(MAX_TTL_SECS));
    let mut cache: TtlCache<Statistics> = TtlCache::with_ttl(ttl);

    let landmarks = {
        let mut op = monitor.operation("load_data");
        let loaded = read_landmarks(&args.data, settings);
        op.set_success(loaded.is_ok());
        loaded?
    };

    let mut catalog = Catalog::new();
    for landmark in landmarks {
        let mut op = monitor.operation("validate");
        op.set_success(catalog.add(landmark));
    }

    let (mut hits, mut misses) = (0usize, 0usize);
    for _ in 0..args.rounds {
        let _op = monitor.operation("statistics");
        if cache.get(STATISTICS_KEY).is_some() {
            hits += 1;
        } else {
            misses += 1;
            cache.set(STATISTICS_KEY, catalog.statistics());
        }
    }
    debug!(hits, misses, "statistics cache");

    if args.summary {
        print!("{}", monitor.export_summary());
        println!("cache.hits={}", hits);
        println!("cache.misses={}", misses);
    } else {
        println!("{}", catalog.report());
        println!();
        println!("{}", monitor.report());
        println!();
        let stats = cache.stats();
        println!(
            "Cache: {} entr{} [{}], {} hit(s), {} miss(es), TTL {}s",
            stats.size,
            if stats.size == 1 { "y" } else { "ies" },
            stats.keys.join(", "),
            hits,
            misses,
            cache.ttl().num_seconds()
        );
    }

    print_rejections(&catalog);
    Ok(())
}
