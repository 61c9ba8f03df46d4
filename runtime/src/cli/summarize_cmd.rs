//! `docsum summarize`: run the pipeline once from the command line.

use crate::cli::output::{self, Styled};
use crate::config::Config;
use crate::extraction::InputSource;
use crate::pipeline::{AnnotatedSummary, Pipeline};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Where the document comes from. At most one field is set.
#[derive(Debug, Default, Clone)]
pub struct SourceArgs {
    pub file: Option<PathBuf>,
    pub document_url: Option<String>,
    pub webpage_url: Option<String>,
    pub text: Option<String>,
}

impl SourceArgs {
    /// Resolve the arguments into an input source, reading `--file` from disk.
    pub fn into_source(self) -> Result<Option<InputSource>> {
        if let Some(path) = self.file {
            let bytes =
                std::fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
            return Ok(Some(InputSource::FileBytes {
                bytes,
                filename: file_name(&path),
            }));
        }
        Ok(self
            .document_url
            .map(InputSource::RemoteDocumentUrl)
            .or_else(|| self.text.map(InputSource::InlineText))
            .or_else(|| self.webpage_url.map(InputSource::WebPageUrl)))
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document.pdf".to_string())
}

/// Run the summarize command.
pub async fn run(args: SourceArgs) -> Result<()> {
    let config = Config::from_env().context("loading configuration")?;
    let pipeline = Pipeline::from_config(&config)?;

    let source = args.into_source()?;
    let summary = pipeline.run(source).await.context(
        "nothing to summarize (pass --file, --document-url, --webpage-url or --text)",
    )?;

    if output::is_json() {
        output::print_json(&serde_json::to_value(&summary)?);
        return Ok(());
    }

    print_summary(&Styled::new(), &summary);
    Ok(())
}

fn print_summary(s: &Styled, summary: &AnnotatedSummary) {
    if !output::is_quiet() {
        output::print_header(s);
        output::print_section(s, "Summary");
        // A failed Gemini call still produces a summary, prefixed "Error: ".
        let status = if summary.summary.starts_with("Error: ") {
            s.warn_sym()
        } else {
            s.ok_sym()
        };
        output::print_check(
            status,
            "Length:",
            &format!(
                "{} chars from {} chars of source",
                summary.summary_length, summary.original_length
            ),
        );
        let keywords = if summary.keywords.is_empty() {
            s.dim("(none)")
        } else {
            s.green(&summary.keywords.join(", "))
        };
        output::print_check(s.ok_sym(), "Keywords:", &keywords);
        eprintln!();
    }
    println!("{}", s.emphasis(&summary.highlighted));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_means_no_source() {
        assert!(SourceArgs::default().into_source().unwrap().is_none());
    }

    #[test]
    fn test_text_argument() {
        let args = SourceArgs {
            text: Some("some text".into()),
            ..Default::default()
        };
        assert_eq!(
            args.into_source().unwrap(),
            Some(InputSource::InlineText("some text".into()))
        );
    }

    #[test]
    fn test_file_argument_reads_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("paper.pdf");
        std::fs::write(&path, b"%PDF-1.5").unwrap();

        let args = SourceArgs {
            file: Some(path),
            ..Default::default()
        };
        assert_eq!(
            args.into_source().unwrap(),
            Some(InputSource::FileBytes {
                bytes: b"%PDF-1.5".to_vec(),
                filename: "paper.pdf".into(),
            })
        );
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let args = SourceArgs {
            file: Some(PathBuf::from("/definitely/not/here.pdf")),
            ..Default::default()
        };
        assert!(args.into_source().is_err());
    }
}
