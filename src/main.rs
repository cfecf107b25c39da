//! Console entry point: runs the counter against the default publication,
//! renders progress events as they arrive, and persists the results document.

use std::io::Write;
use std::path::Path;

use series_tally::report::group_digits;
use series_tally::{Config, DiscoverySource, Event, RunReport, SeriesCounter};
use tokio::sync::broadcast::error::RecvError;
use tracing_subscriber::EnvFilter;

const OUTPUT_PATH: &str = "results.json";

#[tokio::main]
async fn main() -> series_tally::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let config = Config::default();
    print_banner(&config);

    let counter = SeriesCounter::new(config)?;
    let events = counter.subscribe();
    let printer = tokio::spawn(print_events(events));

    let report = counter.run().await;

    // The printer exits on the Finished event, after the last progress line
    let _ = printer.await;

    print_summary(&report);

    report.write_to(Path::new(OUTPUT_PATH)).await?;
    println!();
    println!("  Detailed results saved to: {OUTPUT_PATH}");
    println!();

    Ok(())
}

async fn print_events(mut events: tokio::sync::broadcast::Receiver<Event>) {
    loop {
        match events.recv().await {
            Ok(Event::Discovered { source, posts }) => {
                match source {
                    DiscoverySource::Archive => {
                        println!("Found {posts} series posts via the archive");
                    }
                    DiscoverySource::Catalog => {
                        println!("Archive unavailable, using {posts} known posts");
                    }
                }
                println!("{}", "-".repeat(70));
            }
            Ok(Event::PostStarted {
                index,
                total,
                number,
                title,
            }) => {
                print!("[{index:3}/{total}] AI #{number}: {title:.50} ... ");
                let _ = std::io::stdout().flush();
            }
            Ok(Event::PostCounted { words, .. }) => {
                println!("{} words", group_digits(words as u64));
            }
            Ok(Event::PostFailed { .. }) => {
                println!("FAILED");
            }
            Ok(Event::Finished { .. }) | Err(RecvError::Closed) => break,
            Err(RecvError::Lagged(_)) => continue,
        }
    }
}

fn print_banner(config: &Config) {
    println!("{}", "=".repeat(70));
    println!("  Series word counter");
    println!("  Counting words across the AI series at {}", config.base_url);
    println!("{}", "=".repeat(70));
    println!();
}

fn print_summary(report: &RunReport) {
    let summary = &report.summary;
    println!("{}", "-".repeat(70));
    println!();
    println!("{}", "=".repeat(70));
    println!("  RESULTS");
    println!("{}", "=".repeat(70));
    println!();
    println!("  Posts processed successfully: {}", summary.total_posts);
    println!("  Posts failed:                 {}", summary.failed_posts);
    println!();
    println!("  Total words:            {}", group_digits(summary.total_words));
    println!("  Average words per post: {}", group_digits(summary.average_words_per_post));

    if let (Some(longest), Some(shortest)) = (report.longest(), report.shortest()) {
        println!();
        println!(
            "  Longest post:  AI #{} - {} words",
            longest.number,
            group_digits(longest.word_count as u64)
        );
        println!("                 {:.60}", longest.title);
        println!(
            "  Shortest post: AI #{} - {} words",
            shortest.number,
            group_digits(shortest.word_count as u64)
        );
        println!("                 {:.60}", shortest.title);
    }
}
