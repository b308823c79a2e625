//! Rendering of run summaries and per-point labels.

use std::io::{self, Write};

use clap::ValueEnum;
use optica_core::{ClusterLabel, OpticsResult};

use super::ExecutionSummary;

/// Noise marker written by default; matches the `i64::MAX` sentinel used by
/// existing label files.
pub const DEFAULT_NOISE_LABEL: &str = "9223372036854775807";

/// Sequence in which `(pid, label)` pairs are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputOrder {
    /// Ascending point index.
    #[default]
    Original,
    /// Cluster-ordering sequence.
    Cluster,
}

/// Serialises labels as `pid,label` lines.
///
/// # Examples
/// ```
/// use optica_cli::cli::{LabelWriter, OutputOrder};
///
/// let result = optica_core::run(vec![vec![0.0], vec![5.0], vec![0.5]], 1.0, 1, "euclidean")?;
/// let mut buffer = Vec::new();
/// LabelWriter::new(OutputOrder::Cluster, "-1".to_owned()).write(&result, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "0,1\n2,1\n1,-1\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelWriter {
    order: OutputOrder,
    noise_label: String,
}

impl LabelWriter {
    /// Creates a writer emitting pairs in `order` with `noise_label` for noise.
    #[must_use]
    pub const fn new(order: OutputOrder, noise_label: String) -> Self {
        Self { order, noise_label }
    }

    /// Returns the configured order.
    #[must_use]
    pub const fn order(&self) -> OutputOrder {
        self.order
    }

    /// Returns the noise marker.
    #[must_use]
    pub fn noise_label(&self) -> &str {
        &self.noise_label
    }

    /// Writes one `pid,label` line per point of `result`.
    ///
    /// # Errors
    /// Returns [`io::Error`] if writing to `writer` fails.
    pub fn write(&self, result: &OpticsResult, mut writer: impl Write) -> io::Result<()> {
        match self.order {
            OutputOrder::Original => {
                for (pid, label) in result.labels().iter().enumerate() {
                    self.write_pair(&mut writer, pid, *label)?;
                }
            }
            OutputOrder::Cluster => {
                for point in result.points() {
                    self.write_pair(&mut writer, point.id, point.label)?;
                }
            }
        }
        Ok(())
    }

    fn write_pair(&self, writer: &mut impl Write, pid: usize, label: ClusterLabel) -> io::Result<()> {
        match label {
            ClusterLabel::Noise => writeln!(writer, "{pid},{}", self.noise_label),
            ClusterLabel::Cluster(id) => writeln!(writer, "{pid},{id}"),
        }
    }
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "data source: {}", summary.data_source)?;
    writeln!(writer, "points: {}", summary.points)?;
    writeln!(writer, "clusters: {}", summary.result.cluster_count())?;
    writeln!(writer, "noise: {}", summary.result.noise_count())?;
    writeln!(writer, "elapsed: {:.6}s", summary.elapsed.as_secs_f64())?;
    if let Some(path) = &summary.output {
        writeln!(writer, "labels: {}", path.display())?;
    }
    Ok(())
}
