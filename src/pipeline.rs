//! End-to-end build: assemble, render, compile, write.

use crate::config::BuildConfig;
use crate::error::Result;
use crate::ingestion::{Assembler, SourceFetcher};
use crate::model::TransitLine;
use crate::output::{ArtifactKind, ArtifactSink};
use crate::styles::{render, Dialect, StyleCompiler, StyleOptions};
use std::path::PathBuf;
use tracing::info;

/// Rendered outputs of one build, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub json: String,
    pub less: String,
    pub scss: String,
    pub css: String,
}

impl Artifacts {
    pub fn get(&self, kind: ArtifactKind) -> &str {
        match kind {
            ArtifactKind::Json => &self.json,
            ArtifactKind::Less => &self.less,
            ArtifactKind::Scss => &self.scss,
            ArtifactKind::Css => &self.css,
        }
    }
}

/// Summary of a completed build.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub line_count: usize,
    pub composite_id_count: usize,
    pub written: Vec<PathBuf>,
}

pub struct Pipeline {
    assembler: Assembler,
    style: StyleOptions,
    compiler: Box<dyn StyleCompiler>,
    sink: Box<dyn ArtifactSink>,
}

impl Pipeline {
    pub fn new(
        config: &BuildConfig,
        fetcher: Box<dyn SourceFetcher>,
        compiler: Box<dyn StyleCompiler>,
        sink: Box<dyn ArtifactSink>,
    ) -> Self {
        Self {
            assembler: Assembler::new(fetcher, config),
            style: config.style.clone(),
            compiler,
            sink,
        }
    }

    /// Run the whole build. `message` is logged on success and nothing else.
    ///
    /// Every artifact is produced before the first write, so a failing
    /// fetch, parse or compile leaves no files behind. Writes then run in
    /// order (JSON, LESS, SCSS, CSS); a write error stops there and files
    /// already written stay on disk.
    pub async fn run(&self, message: Option<&str>) -> Result<BuildReport> {
        let lines = self.assembler.assemble().await?;
        let artifacts = self.render_artifacts(&lines)?;

        let mut written = Vec::new();
        for kind in ArtifactKind::ALL {
            written.push(self.sink.write(kind, artifacts.get(kind))?);
        }

        let report = BuildReport {
            line_count: lines.len(),
            composite_id_count: lines.iter().map(|l| l.composite_ids().len()).sum(),
            written,
        };
        info!(
            lines = report.line_count,
            ids = report.composite_id_count,
            "Build complete"
        );
        if let Some(message) = message {
            info!("{}", message);
        }
        Ok(report)
    }

    pub fn render_artifacts(&self, lines: &[TransitLine]) -> Result<Artifacts> {
        let json = serde_json::to_string(lines)?;
        let less = render(lines, &self.style, Dialect::Less);
        let scss = render(lines, &self.style, Dialect::Scss);
        let css = self.compiler.compile(&less)?;

        Ok(Artifacts {
            json,
            less,
            scss,
            css,
        })
    }
}
