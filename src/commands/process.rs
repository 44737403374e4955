//! Clean an input tree into an output tree

use std::path::Path;

use anyhow::{Context, bail};

use rfc_clean::config::{CleanConfig, Overrides};
use rfc_clean::output::{ConsoleReporter, OutputMode};
use rfc_clean::processor::TreeProcessor;

/// Load settings, run the tree processor, and render the summary
pub fn process(config_path: Option<&Path>, overrides: Overrides, mode: OutputMode) -> anyhow::Result<()> {
    let config = CleanConfig::load_or_default(config_path)?.with_overrides(overrides);
    log::debug!("effective config: {config:?}");

    let processor = TreeProcessor::from_config(&config)?;
    let reporter = ConsoleReporter::new(mode);

    let summary = processor
        .process_all(&config.input_dir, &config.output_dir, &reporter)
        .with_context(|| format!("failed to process {}", config.input_dir.display()))?;

    summary.render(mode);

    if summary.has_failures() {
        bail!("{} item(s) could not be processed", summary.failures.len());
    }

    Ok(())
}
