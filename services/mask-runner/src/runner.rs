use std::future::Future;

use anyhow::{Context, Result};
use mask_core::{FunctionCatalog, MaskExtension, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::config::RunnerConfig;

/// Counters reported when a run finishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Output lines written, one per non-blank input line
    pub rows_processed: usize,
    /// Rows written as `null` because the line was malformed or the function rejected it
    pub rows_failed: usize,
}

/// Applies one catalog function to newline-delimited JSON argument rows.
///
/// Every non-blank input line is a JSON array of arguments and produces
/// exactly one JSON output line, in input order.
pub struct BatchRunner {
    catalog: FunctionCatalog,
    function: String,
    batch_size: usize,
    fail_fast: bool,
}

impl BatchRunner {
    pub fn new(config: &RunnerConfig) -> Result<Self> {
        Self::with_catalog(MaskExtension::catalog(), config)
    }

    pub fn with_catalog(catalog: FunctionCatalog, config: &RunnerConfig) -> Result<Self> {
        catalog
            .get(&config.function)
            .with_context(|| format!("cannot run '{}'", config.function))?;

        Ok(Self {
            catalog,
            function: config.function.clone(),
            batch_size: config.batch_size.max(1),
            fail_fast: config.fail_fast,
        })
    }

    /// Processes `reader` until end of input or until `shutdown` resolves.
    /// Rows already read are always flushed before returning.
    pub async fn run<R, W, S>(&self, reader: R, mut writer: W, shutdown: S) -> Result<RunSummary>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
        S: Future<Output = ()>,
    {
        let mut summary = RunSummary::default();
        let mut pending: Vec<Option<Vec<Value>>> = Vec::with_capacity(self.batch_size);
        let mut lines = reader.lines();
        let mut line_number = 0usize;

        tokio::pin!(shutdown);

        loop {
            let line = tokio::select! {
                biased;
                _ = &mut shutdown => {
                    info!("shutdown requested, flushing pending rows");
                    break;
                }
                line = lines.next_line() => line.context("failed to read input line")?,
            };

            let Some(line) = line else {
                break;
            };
            line_number += 1;

            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str::<Vec<Value>>(&line) {
                Ok(row) => pending.push(Some(row)),
                Err(err) if self.fail_fast => {
                    return Err(err).context(format!("malformed row on line {line_number}"));
                }
                Err(err) => {
                    warn!(line = line_number, error = %err, "skipping malformed row");
                    summary.rows_failed += 1;
                    pending.push(None);
                }
            }

            if pending.len() >= self.batch_size {
                self.flush(&mut pending, &mut writer, &mut summary).await?;
            }
        }

        self.flush(&mut pending, &mut writer, &mut summary).await?;
        writer.flush().await.context("failed to flush output")?;

        info!(
            function = %self.function,
            rows_processed = summary.rows_processed,
            rows_failed = summary.rows_failed,
            "run completed"
        );

        Ok(summary)
    }

    async fn flush<W>(
        &self,
        pending: &mut Vec<Option<Vec<Value>>>,
        writer: &mut W,
        summary: &mut RunSummary,
    ) -> Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        if pending.is_empty() {
            return Ok(());
        }

        let slots: Vec<bool> = pending.iter().map(Option::is_some).collect();
        let written = slots.len();
        let rows: Vec<Vec<Value>> = pending.drain(..).flatten().collect();
        let mut results = self.evaluate(&rows, summary)?.into_iter();

        let mut output = String::new();
        for parsed in slots {
            let value = if parsed {
                results.next().unwrap_or(Value::Null)
            } else {
                Value::Null
            };
            output.push_str(&serde_json::to_string(&value)?);
            output.push('\n');
        }

        writer
            .write_all(output.as_bytes())
            .await
            .context("failed to write output")?;

        summary.rows_processed += written;
        debug!(rows = written, "batch written");
        Ok(())
    }

    /// Runs the whole batch at once; on failure, either aborts or retries
    /// row by row so only the offending rows become `null`.
    fn evaluate(&self, rows: &[Vec<Value>], summary: &mut RunSummary) -> Result<Vec<Value>> {
        let err = match self.catalog.execute(&self.function, rows) {
            Ok(results) => return Ok(results),
            Err(err) => err,
        };

        if self.fail_fast {
            return Err(err).context(format!("{} rejected a row", self.function));
        }

        let function = self.catalog.get(&self.function)?;
        let results = rows
            .iter()
            .map(|row| {
                function.invoke(row).unwrap_or_else(|err| {
                    warn!(function = %self.function, error = %err, "row rejected");
                    summary.rows_failed += 1;
                    Value::Null
                })
            })
            .collect();

        Ok(results)
    }
}
