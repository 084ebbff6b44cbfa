use thiserror::Error;

use crate::services::simulation_types::SimulationResult;

const LABEL_WIDTH: usize = 5;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TimeDiagramError {
    #[error("time diagram is empty")]
    EmptyDiagram,
    #[error("process order lists {order} ids but the diagram has {columns} columns")]
    OrderMismatch { order: usize, columns: usize },
}

/// Renders the execution timeline as aligned text.
///
/// The header row lists the process ids in schedule order; each following row
/// carries a right-aligned `i-(i+1)` interval label and that time unit's
/// per-process status cells.
pub fn render_time_diagram(result: &SimulationResult) -> Result<String, TimeDiagramError> {
    let columns = result
        .time_diagram
        .first()
        .map(|row| row.len())
        .ok_or(TimeDiagramError::EmptyDiagram)?;

    if result.process_order.len() < columns {
        return Err(TimeDiagramError::OrderMismatch {
            order: result.process_order.len(),
            columns,
        });
    }

    let mut lines = Vec::with_capacity(result.time_diagram.len() + 1);

    let mut header = format!("{:>width$}", "", width = LABEL_WIDTH);
    for id in result.process_order.iter().take(columns) {
        header.push(' ');
        header.push_str(&format!("{id:>2}"));
    }
    lines.push(header);

    for (index, row) in result.time_diagram.iter().enumerate() {
        let label = format!("{}-{}", index, index + 1);
        let mut line = format!("{label:>width$}", width = LABEL_WIDTH);
        for cell in row {
            line.push(' ');
            line.push_str(&format!("{cell:>2}"));
        }
        lines.push(line);
    }

    Ok(lines.join("\n"))
}
