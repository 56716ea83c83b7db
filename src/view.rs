//! Console presentation adapter.

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};

use mb_core::ports::ScreenViewPort;
use mb_core::screen::{ImageSlot, RenderPlan};

/// Renders the screen as plain terminal output.
pub struct ConsoleScreenView;

#[async_trait]
impl ScreenViewPort for ConsoleScreenView {
    async fn loading_started(&self) {
        println!("Loading configuration...");
    }

    async fn render(&self, plan: RenderPlan) {
        println!();
        println!("== {} ==", plan.title);
        println!("{}", plan.message);
        println!();
        for slot in &plan.slots {
            match slot {
                ImageSlot::Resolved(handle) => {
                    println!(
                        "  [{}x{}] {} ({} bytes)",
                        handle.width,
                        handle.height,
                        handle.id,
                        handle.size_bytes()
                    );
                }
                ImageSlot::Missing(id) => {
                    println!("  Missing: {id}");
                }
            }
        }
    }

    async fn show_error(&self, message: String) {
        eprintln!("Error: {message}");
    }
}

/// Ask whether to retry a failed load. Answers no on end of input.
pub async fn confirm_retry() -> anyhow::Result<bool> {
    println!("Try again? [y/N]");

    let mut line = String::new();
    let mut reader = BufReader::new(tokio::io::stdin());
    let read = reader.read_line(&mut line).await?;

    Ok(read > 0 && matches!(line.trim(), "y" | "Y" | "yes"))
}
