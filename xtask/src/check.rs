use anyhow::Result;
use colored::Colorize;
use std::time::Instant;

use crate::cargo::{step, OnFailure};

pub fn run(host_only: bool) -> Result<()> {
    println!();
    println!("{}", "🔍 Checking touch-widgets...".cyan().bold());
    println!();

    let total_start = Instant::now();

    step(
        "Host build (all features except simulator)",
        &["check", "-p", "touch-widgets", "--features", "tracing", "--all-targets"],
        OnFailure::Fail,
    )?;

    // The library is no_std + alloc; make sure nothing std-only crept in.
    if !host_only {
        step(
            "no_std build (thumbv7em-none-eabihf, defmt)",
            &[
                "check",
                "-p",
                "touch-widgets",
                "--target",
                "thumbv7em-none-eabihf",
                "--features",
                "defmt",
            ],
            OnFailure::Fail,
        )?;
    }

    step(
        "Clippy",
        &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
        OnFailure::Warn,
    )?;

    if step("Formatting", &["fmt", "--all", "--check"], OnFailure::Warn)?.is_none() {
        eprintln!("     Run 'cargo fmt --all' to fix");
    }

    println!(
        "{}",
        format!(
            "✓ All checks completed in {:.2}s",
            total_start.elapsed().as_secs_f64()
        )
        .green()
        .bold()
    );
    println!();

    Ok(())
}
