use std::io;

use anyhow::Result;
use tracing::info;

use dragchess_term::Frontend;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("dragchess starting");
    Frontend::new().run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
