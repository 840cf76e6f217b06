use anyhow::{Context, Result};
use colored::Colorize;
use std::process::Command;

/// Launch the simulator demo attached to this terminal (needs SDL2 installed).
pub fn run(log_filter: &str) -> Result<()> {
    println!();
    println!("{}", "🖐  Starting list box demo (mouse = touch)...".cyan().bold());
    println!("   {}", "Close the window to exit".dimmed());
    println!();

    let status = Command::new("cargo")
        .args([
            "run",
            "-p",
            "touch-widgets",
            "--example",
            "list_box_demo",
            "--features",
            "simulator",
        ])
        .env("RUST_LOG", log_filter)
        .status()
        .context("Failed to launch list_box_demo")?;

    if !status.success() {
        eprintln!("{}", "✗ Demo exited with an error".red().bold());
        eprintln!("   {}", "Is SDL2 installed? (libsdl2-dev / brew install sdl2)".dimmed());
        anyhow::bail!("Demo failed");
    }
    Ok(())
}
