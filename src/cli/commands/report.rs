//! Report command - run the pipeline and write the CSV report

use anyhow::Context;

use wordtally::config::ConfigOverrides;
use wordtally::output::OutputMode;
use wordtally::{Pipeline, PipelineConfig};

use crate::cli::app::Cli;

/// Build the config from `--config` and flag overrides, then run the pipeline
pub fn report(cli: Cli, mode: OutputMode) -> anyhow::Result<()> {
    let base = match &cli.config {
        Some(path) => PipelineConfig::load(path)?,
        None => PipelineConfig::default(),
    };

    let config = base.apply_overrides(ConfigOverrides {
        stopwords_path: cli.stopwords,
        corpus_path: cli.corpus,
        output_path: cli.output,
        skip_lines: cli.skip_lines,
        terminal_marker: cli.marker,
    });
    log::debug!("Running with {config:?}");

    let output_path = config.output_path.clone();
    let summary = Pipeline::new(config)
        .with_top(cli.top)
        .run()
        .with_context(|| format!("no report written to {}", output_path.display()))?;

    summary.render(mode);
    Ok(())
}
