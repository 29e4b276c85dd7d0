use crate::normalize::{NormalizationStats, Normalized};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Dashes framing terminal output.
pub const BANNER: &str = "---------------------------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Text framed by banner lines, preceded by a notice naming the input
    Terminal,
    /// Just the text
    Plain,
    /// Lines and statistics as JSON
    Json,
}

/// Everything a writer needs to render one run.
#[derive(Debug, Clone, Serialize)]
pub struct Report<'a> {
    pub input: String,
    pub strict: bool,
    pub lines: &'a [String],
    pub stats: &'a NormalizationStats,
}

impl<'a> Report<'a> {
    pub fn new(input: &Path, strict: bool, normalized: &'a Normalized) -> Self {
        Self {
            input: input.display().to_string(),
            strict,
            lines: &normalized.lines,
            stats: &normalized.stats,
        }
    }

    fn text(&self) -> String {
        crate::normalize::join_lines(self.lines)
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &Report<'_>) -> anyhow::Result<()>;
}

/// Notice printed before the input file is read in terminal mode.
pub fn looking_for_file_notice(input: &Path) -> String {
    format!("LOOKING FOR FILE: {}\n\n", input.display())
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &Report<'_>) -> anyhow::Result<()> {
        writeln!(self.writer, "{BANNER}")?;
        writeln!(self.writer, "{}", report.text())?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{BANNER}")?;
        Ok(())
    }
}

pub struct PlainWriter<W: Write> {
    writer: W,
}

impl<W: Write> PlainWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for PlainWriter<W> {
    fn write_report(&mut self, report: &Report<'_>) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", report.text())?;
        Ok(())
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &Report<'_>) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub fn create_writer<'w, W: Write + 'w>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn OutputWriter + 'w> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
        OutputFormat::Plain => Box::new(PlainWriter::new(writer)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
    }
}

/// Render a report to a string in the given format.
pub fn render(format: OutputFormat, report: &Report<'_>) -> anyhow::Result<String> {
    let mut buffer = Vec::new();
    create_writer(format, &mut buffer).write_report(report)?;
    Ok(String::from_utf8(buffer)?)
}
