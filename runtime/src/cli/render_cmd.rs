//! `docsum render`: write text to a `.txt` or `.pdf` file.

use crate::cli::output::{self, Styled};
use crate::render::{render, RenderFormat};
use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Run the render command. Reads stdin when `input` is `None`.
pub fn run(format: RenderFormat, input: Option<PathBuf>, output_path: &Path) -> Result<()> {
    let text = match input {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    let file = render(&text, format)?;
    std::fs::write(output_path, &file.bytes)
        .with_context(|| format!("writing {}", output_path.display()))?;

    if output::is_json() {
        output::print_json(&serde_json::json!({
            "path": output_path.display().to_string(),
            "content_type": file.content_type,
            "bytes": file.bytes.len(),
        }));
    } else if !output::is_quiet() {
        let s = Styled::new();
        eprintln!(
            "  {} Wrote {} ({})",
            s.ok_sym(),
            output_path.display(),
            output::format_size(file.bytes.len() as u64)
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let out = dir.path().join("out.txt");
        std::fs::write(&input, "The *cat* sat").unwrap();

        run(RenderFormat::Text, Some(input), &out).unwrap();
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "The *cat* sat");
    }

    #[test]
    fn test_render_pdf_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let out = dir.path().join("out.pdf");
        std::fs::write(&input, "A paginated summary").unwrap();

        run(RenderFormat::Pdf, Some(input), &out).unwrap();
        assert!(std::fs::read(&out).unwrap().starts_with(b"%PDF-"));
    }
}
