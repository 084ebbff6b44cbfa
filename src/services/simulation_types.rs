use serde::Deserialize;

/// Statistics and execution timeline returned by the scheduling service.
///
/// The wire names are the service's Portuguese field names; they are part of
/// the HTTP contract and are not renamed on the wire.
#[derive(Deserialize, Debug, Clone)]
pub struct SimulationResult {
    #[serde(rename = "tempoMedioVida")]
    pub avg_turnaround: f64,
    #[serde(rename = "tempoMedioEspera")]
    pub avg_wait: f64,
    #[serde(rename = "trocasContexto")]
    pub context_switches: u64,
    /// One row per time unit, one status cell per process.
    #[serde(rename = "diagramaTempo")]
    pub time_diagram: Vec<Vec<String>>,
    /// Process ids in schedule order, one per diagram column.
    #[serde(rename = "ordemProcessos")]
    pub process_order: Vec<String>,
}
