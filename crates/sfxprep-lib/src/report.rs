//! Human-readable console output for a provisioning run.
//!
//! Progress goes to stdout as plain text; structured logs go through
//! `tracing` to stderr, so the two never interleave on the same stream.

use crate::config::{Asset, ManualSource};
use crate::download::{FailedAttempt, ProvisionReport};
use std::io::{self, Stdout, Write};
use std::path::Path;

pub fn format_size_kb(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

fn keyword_label(asset: &Asset) -> &str {
    Path::new(&asset.name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(&asset.name)
}

pub struct Reporter<W: Write> {
    out: W,
    manual_sources: Vec<ManualSource>,
}

impl Reporter<Stdout> {
    pub fn stdout(manual_sources: Vec<ManualSource>) -> Self {
        Self::new(io::stdout(), manual_sources)
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, manual_sources: Vec<ManualSource>) -> Self {
        Self {
            out,
            manual_sources,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn start(&mut self, output_dir: &Path, asset_count: usize) -> io::Result<()> {
        writeln!(
            self.out,
            "Downloading {asset_count} sound effects into {}...\n",
            output_dir.display()
        )
    }

    pub fn asset_started(&mut self, asset: &Asset) -> io::Result<()> {
        writeln!(
            self.out,
            "Downloading: {} ({})...",
            asset.description, asset.name
        )?;
        self.out.flush()
    }

    pub fn asset_downloaded(&mut self, asset: &Asset, size: u64) -> io::Result<()> {
        writeln!(
            self.out,
            "  [OK] Downloaded {} (size: {})\n",
            asset.name,
            format_size_kb(size)
        )
    }

    pub fn asset_failed(&mut self, asset: &Asset, attempts: &[FailedAttempt]) -> io::Result<()> {
        writeln!(self.out, "  [X] Failed to download {}", asset.name)?;
        for attempt in attempts {
            writeln!(self.out, "    {}: {}", attempt.url, attempt.error)?;
        }
        writeln!(self.out, "    Please download it manually from:")?;
        for source in &self.manual_sources {
            writeln!(self.out, "    - {}: {}", source.label, source.url)?;
        }
        if !asset.search_keywords.is_empty() {
            writeln!(
                self.out,
                "    Search keywords: {}",
                asset.search_keywords.join(", ")
            )?;
        }
        writeln!(self.out)
    }

    /// Prints the closing summary. `assets` must be in the same order as the
    /// report outcomes.
    pub fn finish(&mut self, report: &ProvisionReport, assets: &[Asset]) -> io::Result<()> {
        let downloaded = report.succeeded().count();
        writeln!(
            self.out,
            "Done: {downloaded} of {} assets downloaded.",
            report.outcomes.len()
        )?;

        if report.is_complete() {
            return self.out.flush();
        }

        writeln!(
            self.out,
            "\nSome files could not be downloaded. Get them manually from:"
        )?;
        for (index, source) in self.manual_sources.iter().enumerate() {
            writeln!(self.out, "{}. {}: {}", index + 1, source.label, source.url)?;
        }

        let missing: Vec<&Asset> = report
            .outcomes
            .iter()
            .zip(assets)
            .filter(|(outcome, _)| !outcome.is_downloaded())
            .map(|(_, asset)| asset)
            .filter(|asset| !asset.search_keywords.is_empty())
            .collect();
        if !missing.is_empty() {
            writeln!(self.out, "\nSuggested search keywords:")?;
            for asset in missing {
                writeln!(
                    self.out,
                    "- {}: {}",
                    keyword_label(asset),
                    asset.search_keywords.join(", ")
                )?;
            }
        }
        self.out.flush()
    }
}
