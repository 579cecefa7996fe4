//! HTML → PDF conversion through an external converter process.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use certdesk_core::RenderError;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Converter binary looked up on `PATH` when none is configured.
pub const DEFAULT_CONVERTER: &str = "wkhtmltopdf";

pub const DEFAULT_CONVERTER_TIMEOUT: Duration = Duration::from_secs(30);

const PDF_MAGIC: &[u8] = b"%PDF";

/// Turns a rendered HTML page into PDF bytes.
#[async_trait]
pub trait HtmlToPdf: Send + Sync {
    async fn convert(&self, html: &str, landscape: bool) -> Result<Vec<u8>, RenderError>;
}

/// Runs `wkhtmltopdf`, feeding the page on stdin and reading the PDF
/// from stdout.
///
/// The child is killed if the timeout elapses or the request is dropped.
#[derive(Debug, Clone)]
pub struct WkhtmltopdfConverter {
    program: PathBuf,
    timeout: Duration,
}

impl WkhtmltopdfConverter {
    pub fn new(program: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    fn command(&self, landscape: bool) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(["--quiet", "--encoding", "utf-8"]);
        if landscape {
            cmd.args(["--orientation", "Landscape"]);
        }
        // Read HTML from stdin, write PDF to stdout.
        cmd.args(["-", "-"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd
    }
}

impl Default for WkhtmltopdfConverter {
    fn default() -> Self {
        Self::new(DEFAULT_CONVERTER, DEFAULT_CONVERTER_TIMEOUT)
    }
}

#[async_trait]
impl HtmlToPdf for WkhtmltopdfConverter {
    async fn convert(&self, html: &str, landscape: bool) -> Result<Vec<u8>, RenderError> {
        let program = self.program.display().to_string();
        let mut child = self.command(landscape).spawn().map_err(|e| {
            tracing::error!(program = %program, error = %e, "Failed to start PDF converter");
            RenderError::ConverterUnavailable(format!("{program}: {e}"))
        })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| RenderError::ConversionFailed("converter stdin not captured".to_string()))?;
        let page = html.as_bytes().to_vec();
        let writer = tokio::spawn(async move {
            stdin.write_all(&page).await?;
            stdin.shutdown().await
        });

        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| {
                tracing::warn!(program = %program, timeout = ?self.timeout, "PDF converter timed out");
                RenderError::ConverterUnavailable(format!(
                    "{program} timed out after {:?}",
                    self.timeout
                ))
            })?
            .map_err(|e| RenderError::ConversionFailed(e.to_string()))?;

        // A converter that exits early closes its stdin; the exit status
        // below is the error worth reporting.
        if let Ok(Err(e)) = writer.await {
            tracing::debug!(error = %e, "Converter stopped reading input");
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::error!(status = %output.status, stderr = %stderr.trim(), "PDF conversion failed");
            return Err(RenderError::ConversionFailed(format!(
                "{program} exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }
        if !output.stdout.starts_with(PDF_MAGIC) {
            return Err(RenderError::ConversionFailed(format!(
                "{program} produced {} bytes that are not a PDF",
                output.stdout.len()
            )));
        }

        Ok(output.stdout)
    }
}
