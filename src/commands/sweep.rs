use crate::config::SweepConfig;
use crate::io::output::{looking_for_file_notice, render, OutputFormat, Report};
use crate::io::{destination_for, read_input, OutputDestination};
use crate::normalize::{normalize, Normalized};
use anyhow::{Context, Result};

/// Read the input file, normalize it and write the rendered result.
pub fn handle_sweep(config: &SweepConfig) -> Result<()> {
    let destination = destination_for(config.output.as_deref());
    sweep_to(config, destination.as_ref())?;
    Ok(())
}

/// Same as [`handle_sweep`] with an explicit destination.
pub fn sweep_to(config: &SweepConfig, destination: &dyn OutputDestination) -> Result<Normalized> {
    log::info!("Looking for file: {}", config.input.display());

    // The notice precedes the read so it is shown even when the file is missing.
    if config.format == OutputFormat::Terminal && destination.is_stdout() {
        destination.write_str(&looking_for_file_notice(&config.input))?;
    }

    let text = read_input(&config.input)?;
    let normalized = normalize(&text, &config.normalize_options());

    let report = Report::new(&config.input, config.strict, &normalized);
    let rendered = render(config.format, &report)
        .with_context(|| format!("Failed to render output for {}", config.input.display()))?;

    destination.write_str(&rendered)?;
    destination.flush()?;
    log::info!(
        "Wrote {} lines to {}",
        normalized.lines.len(),
        destination.description()
    );

    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SweepError;
    use crate::io::output::BANNER;
    use crate::io::MemoryDestination;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn config_for(dir: &TempDir, contents: Option<&str>) -> SweepConfig {
        let input = dir.path().join("commitsSource.txt");
        if let Some(contents) = contents {
            fs::write(&input, contents).unwrap();
        }
        SweepConfig {
            input,
            ..SweepConfig::default()
        }
    }

    #[test]
    fn test_sweep_to_terminal_format() {
        let dir = TempDir::new().unwrap();
        let config = config_for(&dir, Some("feat: A\nfix: B\ndocs: C\n"));
        let dest = MemoryDestination::new();

        sweep_to(&config, &dest).unwrap();

        // Memory is not stdout, so no file notice.
        assert_eq!(
            dest.get_content(),
            format!("{BANNER}\ndocs: C\nfeat: A\n\nfix: B\n\n{BANNER}\n")
        );
    }

    #[test]
    fn test_sweep_to_strict_plain() {
        let dir = TempDir::new().unwrap();
        let mut config = config_for(&dir, Some("feat: A\nrandom note\nfix: B\n"));
        config.strict = true;
        config.format = OutputFormat::Plain;
        let dest = MemoryDestination::new();

        let normalized = sweep_to(&config, &dest).unwrap();

        assert_eq!(dest.get_content(), "feat: A\nfix: B\n");
        assert_eq!(normalized.stats.dropped_by_strict, 1);
    }

    #[test]
    fn test_sweep_to_missing_file() {
        let dir = TempDir::new().unwrap();
        let config = config_for(&dir, None);
        let dest = MemoryDestination::new();

        let err = sweep_to(&config, &dest).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SweepError>(),
            Some(SweepError::InputNotFound { .. })
        ));
        assert!(dest.get_content().is_empty());
    }

    #[test]
    fn test_handle_sweep_writes_output_file() {
        let dir = TempDir::new().unwrap();
        let mut config = config_for(&dir, Some("fix: b\nfix: b\nfeat: a\n"));
        let output = dir.path().join("sorted.json");
        config.format = OutputFormat::Json;
        config.output = Some(output.clone());

        handle_sweep(&config).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(value["lines"], serde_json::json!(["feat: a", "fix: b"]));
        assert_eq!(value["stats"]["unique_lines"], 2);
    }
}
