//! Weekly averages, growth rates and 90-day projections for a synthetic
//! outbreak counter.
//!
//! Run with: cargo run --example weekly_projection

use chrono::NaiveDate;
use epicurve::config::PipelineConfig;
use epicurve::pipeline::analyze;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() {
    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap();

    println!("=== epicurve weekly projection ===\n");

    // Daily increments rise then fall off
    let cumulative: Vec<i64> = (0..120)
        .scan(0i64, |total, day| {
            let x = day as f64 / 120.0;
            *total += (400.0 * (std::f64::consts::PI * x).sin().powi(2)) as i64;
            Some(*total)
        })
        .collect();

    let config = PipelineConfig::builder()
        .epoch(NaiveDate::from_ymd_opt(2020, 2, 29).unwrap())
        .build()
        .unwrap();

    let report = analyze(&cumulative, &config).unwrap();
    let dates = report.period_dates().unwrap().unwrap_or_default();

    println!("{:>10}  {:>10}  {:>10}  {:>8}", "week end", "total", "per day", "growth%");
    for i in 0..report.delta_periods.len() {
        let date = dates.get(i).map(|d| d.to_string()).unwrap_or_default();
        println!(
            "{:>10}  {:>10.1}  {:>10.1}  {:>8.2}",
            date,
            report.cumulative_periods.values()[i],
            report.delta_periods.values()[i],
            report.growth.log()[i]
        );
    }
    println!("\nmax daily increment: {}", report.max_delta());

    match &report.ratio_error {
        Some(err) => println!("estimated ratio unavailable: {err}"),
        None => println!("estimated ratio: {:?}", report.estimated_ratio()),
    }

    let offsets = report.projection_offsets();
    println!("\n--- projections (day offset -> per day) ---");
    for scenario in &report.scenarios {
        println!("{}:", scenario.label());
        for (offset, point) in offsets.iter().zip(scenario.points()) {
            println!("  day {offset:>4}: {point:>8.1}");
        }
    }
}
