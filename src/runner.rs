use std::fmt;
use std::fs;
use std::path::PathBuf;

use anyhow::Result;

use crate::config::DecantConfig;
use crate::error::DecantError;
use crate::extract::{extract_pages, open_document};

/// Result of a completed extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Character count of the joined text, in Unicode scalar values.
    pub characters: usize,
    /// Page count of the source document.
    pub pages: usize,
    /// Path the text was written to.
    pub output: PathBuf,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Extracted {} characters from {} pages into {}",
            self.characters,
            self.pages,
            self.output.display()
        )
    }
}

/// Main entry point for a decant run in CLI mode.
///
/// Opens the PDF, extracts each page's text in document order, joins the
/// per-page strings with a newline separator, and writes the result as UTF-8
/// to the resolved output path, truncating any existing file there.
pub fn run(config: &DecantConfig) -> Result<Summary> {
    config.validate()?;

    let extracted = {
        let document = open_document(&config.input)?;
        extract_pages(&document)
        // document handle dropped here; pages come out as owned strings
    };

    if config.verbose {
        println!("Loaded {:?}: {} pages", config.input, extracted.page_count());
        for (i, page) in extracted.pages.iter().enumerate() {
            println!(
                "Page {}/{}: {} characters",
                i + 1,
                extracted.page_count(),
                page.chars().count()
            );
        }
    }

    let text = extracted.join();
    let output = config.resolved_output();

    fs::write(&output, text.as_bytes()).map_err(|source| DecantError::Output {
        path: output.clone(),
        source,
    })?;

    Ok(Summary {
        characters: text.chars().count(),
        pages: extracted.page_count(),
        output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_display_format() {
        let summary = Summary {
            characters: 4,
            pages: 3,
            output: PathBuf::from("out.txt"),
        };
        assert_eq!(
            summary.to_string(),
            "Extracted 4 characters from 3 pages into out.txt"
        );
    }
}
