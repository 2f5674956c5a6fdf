use anyhow::Context;

use stockroom_cli::{Config, Session, Transcript};
use stockroom_inventory::InventoryDirectory;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    stockroom_observability::init(config.log_format);
    for warning in &config.warnings {
        tracing::warn!("{warning}");
    }

    let transcript = Transcript::create(&config.transcript_path).with_context(|| {
        format!("failed to open transcript {}", config.transcript_path.display())
    })?;
    tracing::info!(transcript = %config.transcript_path.display(), "session started");

    let mut session = Session::new(InventoryDirectory::new(), transcript, config.output);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let summary = session.run(stdin.lock(), &mut stdout.lock())?;

    tracing::info!(
        commands = summary.commands,
        failed = summary.failed,
        "end of input"
    );
    Ok(())
}
