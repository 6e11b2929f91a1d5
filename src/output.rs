use crate::error::ListerError;
use crate::extract::VideoUrl;
use anyhow::{Context, Result};
use std::path::Path;

/// Layout of the output file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn parse(format: &str) -> Result<Self, ListerError> {
        match format.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(ListerError::Usage(format!(
                "Unknown format '{}'. Use: text, json, or csv",
                other
            ))),
        }
    }
}

/// Render the URLs and overwrite `path` with them
pub fn write_results(urls: &[VideoUrl], format: OutputFormat, path: &Path) -> Result<()> {
    let output_str = match format {
        OutputFormat::Text => format_text(urls),
        OutputFormat::Json => format_json(urls)?,
        OutputFormat::Csv => format_csv(urls)?,
    };

    std::fs::write(path, &output_str)
        .with_context(|| format!("failed to write {}", path.display()))?;
    log::debug!("Wrote {} bytes to {}", output_str.len(), path.display());

    Ok(())
}

/// One URL per line, each newline-terminated
fn format_text(urls: &[VideoUrl]) -> String {
    let mut output = String::new();
    for entry in urls {
        output.push_str(&entry.url);
        output.push('\n');
    }
    output
}

/// Format results as JSON, one object per URL
fn format_json(urls: &[VideoUrl]) -> Result<String> {
    Ok(serde_json::to_string_pretty(urls)?)
}

/// Format results as CSV with a `url,source` header
fn format_csv(urls: &[VideoUrl]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    for entry in urls {
        writer.serialize(entry)?;
    }
    Ok(String::from_utf8(writer.into_inner()?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::Source;

    fn sample() -> Vec<VideoUrl> {
        vec![
            VideoUrl {
                url: "https://a.com/watch?v=1".to_string(),
                source: Source::Anchor,
            },
            VideoUrl {
                url: "https://b.com/e/2".to_string(),
                source: Source::Iframe,
            },
        ]
    }

    #[test]
    fn text_is_newline_terminated_lines() {
        assert_eq!(
            format_text(&sample()),
            "https://a.com/watch?v=1\nhttps://b.com/e/2\n"
        );
    }

    #[test]
    fn json_carries_source() {
        let value: serde_json::Value = serde_json::from_str(&format_json(&sample()).unwrap()).unwrap();
        assert_eq!(value[0]["url"], "https://a.com/watch?v=1");
        assert_eq!(value[1]["source"], "iframe");
    }

    #[test]
    fn csv_has_header_row() {
        let csv = format_csv(&sample()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("url,source"));
        assert_eq!(lines.next(), Some("https://a.com/watch?v=1,anchor"));
        assert_eq!(lines.next(), Some("https://b.com/e/2,iframe"));
    }

    #[test]
    fn parse_format_names() {
        assert_eq!(OutputFormat::parse("TXT").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::parse("json").unwrap(), OutputFormat::Json);
        assert!(matches!(
            OutputFormat::parse("xml"),
            Err(ListerError::Usage(_))
        ));
    }

    #[test]
    fn write_overwrites_existing_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "stale content that is longer\n").unwrap();
        write_results(&sample(), OutputFormat::Text, file.path()).unwrap();
        let written = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(written, "https://a.com/watch?v=1\nhttps://b.com/e/2\n");
    }
}
