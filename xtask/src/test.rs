use anyhow::Result;
use colored::Colorize;
use std::time::Instant;

use crate::cargo::{step, test_summary, OnFailure};

pub fn run(unit_only: bool, integration_only: bool) -> Result<()> {
    println!();
    println!("{}", "🧪 Running tests...".cyan().bold());
    println!();

    let total_start = Instant::now();

    if !integration_only {
        if let Some(out) = step("Unit tests", &["test", "--lib", "--workspace"], OnFailure::Fail)? {
            println!("    {}", test_summary(&out.stdout).dimmed());
        }
    }

    // screen_loop (host loop end-to-end) + list_box_proptest (invariants).
    if !unit_only {
        if let Some(out) = step(
            "Integration tests",
            &["test", "-p", "touch-widgets", "--tests"],
            OnFailure::Fail,
        )? {
            println!("    {}", test_summary(&out.stdout).dimmed());
        }
    }

    if let Some(out) = step("Doc tests", &["test", "--doc", "--workspace"], OnFailure::Warn)? {
        println!("    {}", test_summary(&out.stdout).dimmed());
    }

    println!(
        "{}",
        format!(
            "✓ All tests completed in {:.2}s",
            total_start.elapsed().as_secs_f64()
        )
        .green()
        .bold()
    );
    println!();

    Ok(())
}
