//! altclaw - local chat-bot installation scanner.
//!
//! Finds openclaw, moltbot, and clawdbot installations on this host and
//! reports what they contain and what looks risky.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    altclaw_cli::run().await
}
