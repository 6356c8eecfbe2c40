// CSV export of the aligned dataset.

use std::io::Write;

use anyhow::{Context, Result};

use crate::chart::{ChartSeries, ChartView};

/// Write the chart view as CSV: a `season` column followed by one column
/// per visible series. Null values become empty cells, preserving the
/// gap-vs-zero distinction for spreadsheet consumers. Hidden series are
/// skipped, matching what the chart shows.
pub fn write_csv<W: Write>(view: &ChartView, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let visible: Vec<&ChartSeries> = view.series.iter().filter(|s| !s.hidden).collect();

    let mut header = vec!["season".to_string()];
    header.extend(visible.iter().map(|s| s.name.clone()));
    csv_writer
        .write_record(&header)
        .context("failed to write csv header")?;

    for (row, label) in view.axis.iter().enumerate() {
        let mut record = vec![label.clone()];
        for series in &visible {
            let cell = series
                .values
                .get(row)
                .copied()
                .flatten()
                .map(|v| v.to_string())
                .unwrap_or_default();
            record.push(cell);
        }
        csv_writer
            .write_record(&record)
            .context("failed to write csv row")?;
    }

    csv_writer.flush().context("failed to flush csv output")?;
    Ok(())
}

/// Render the chart view to an in-memory CSV string.
pub fn to_csv_string(view: &ChartView) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(view, &mut buf)?;
    String::from_utf8(buf).context("csv output was not valid utf-8")
}
