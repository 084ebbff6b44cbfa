use crate::services::simulation_types::SimulationResult;
use crate::services::time_diagram::{TimeDiagramError, render_time_diagram};

pub fn format_simulation_report(result: &SimulationResult) -> Result<String, TimeDiagramError> {
    let mut lines = Vec::new();
    lines.push(format!("Average turnaround: {:.2}", result.avg_turnaround));
    lines.push(format!("Average wait: {:.2}", result.avg_wait));
    lines.push(format!("Context switches: {}", result.context_switches));
    lines.push(String::new());
    lines.push("Time diagram:".to_string());
    lines.push(render_time_diagram(result)?);

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_result() -> SimulationResult {
        SimulationResult {
            avg_turnaround: 6.5,
            avg_wait: 2.5,
            context_switches: 3,
            time_diagram: vec![
                vec!["##".to_string(), "--".to_string()],
                vec!["--".to_string(), "##".to_string()],
            ],
            process_order: vec!["P1".to_string(), "P2".to_string()],
        }
    }

    #[test]
    fn format_report_includes_statistics_and_diagram() {
        let output = format_simulation_report(&build_result()).unwrap();

        assert!(output.contains("Average turnaround: 6.50"));
        assert!(output.contains("Average wait: 2.50"));
        assert!(output.contains("Context switches: 3"));
        assert!(output.contains("Time diagram:"));
        assert!(output.contains("P1 P2"));
        assert!(output.contains("0-1 ## --"));
        assert!(output.contains("1-2 -- ##"));
    }

    #[test]
    fn format_report_fails_on_empty_diagram() {
        let mut result = build_result();
        result.time_diagram.clear();

        let error = format_simulation_report(&result).unwrap_err();
        assert_eq!(error, TimeDiagramError::EmptyDiagram);
    }
}
