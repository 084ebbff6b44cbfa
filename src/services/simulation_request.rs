use serde::Serialize;
use thiserror::Error;

use crate::domain::process::{Algorithm, ProcessSpec};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RequestValidationError {
    #[error("quantum must be a positive number")]
    NonPositiveQuantum,
    #[error("round-robin with aging requires a positive aging value")]
    NonPositiveAging,
    #[error("process list is empty")]
    NoProcesses,
}

/// JSON body accepted by the scheduling service.
#[derive(Serialize, Debug, Clone)]
pub struct SimulationRequest {
    pub alg: Algorithm,
    pub quantum: i64,
    pub aging: i64,
    pub input: Vec<ProcessSpec>,
}

impl SimulationRequest {
    /// Validates the submission and assembles the request body.
    ///
    /// Aging is only meaningful for the aging variant; for the other
    /// algorithms it is sent as 0, which the service ignores.
    pub fn build(
        alg: Algorithm,
        quantum: i64,
        aging: Option<i64>,
        input: Vec<ProcessSpec>,
    ) -> Result<Self, RequestValidationError> {
        if quantum <= 0 {
            return Err(RequestValidationError::NonPositiveQuantum);
        }
        if alg.requires_aging() && aging.unwrap_or(0) <= 0 {
            return Err(RequestValidationError::NonPositiveAging);
        }
        if input.is_empty() {
            return Err(RequestValidationError::NoProcesses);
        }

        Ok(Self {
            alg,
            quantum,
            aging: aging.unwrap_or(0),
            input,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_process() -> Vec<ProcessSpec> {
        vec![ProcessSpec {
            begin: 0,
            duration: 5,
            priority: 1,
        }]
    }

    #[test]
    fn rejects_non_positive_quantum() {
        let error = SimulationRequest::build(Algorithm::Rr, 0, None, one_process()).unwrap_err();
        assert_eq!(error, RequestValidationError::NonPositiveQuantum);

        let error = SimulationRequest::build(Algorithm::Rr, -3, None, one_process()).unwrap_err();
        assert_eq!(error, RequestValidationError::NonPositiveQuantum);
    }

    #[test]
    fn rrpe_requires_positive_aging() {
        let error = SimulationRequest::build(Algorithm::Rrpe, 2, None, one_process()).unwrap_err();
        assert_eq!(error, RequestValidationError::NonPositiveAging);

        let error =
            SimulationRequest::build(Algorithm::Rrpe, 2, Some(0), one_process()).unwrap_err();
        assert_eq!(error, RequestValidationError::NonPositiveAging);

        let request = SimulationRequest::build(Algorithm::Rrpe, 2, Some(1), one_process()).unwrap();
        assert_eq!(request.aging, 1);
    }

    #[test]
    fn aging_is_optional_for_other_algorithms() {
        let request = SimulationRequest::build(Algorithm::Rr, 2, None, one_process()).unwrap();
        assert_eq!(request.aging, 0);
    }

    #[test]
    fn rejects_empty_process_list() {
        let error = SimulationRequest::build(Algorithm::Rr, 2, None, Vec::new()).unwrap_err();
        assert_eq!(error, RequestValidationError::NoProcesses);
    }

    #[test]
    fn serializes_to_the_service_body() {
        let request = SimulationRequest::build(Algorithm::Rrpe, 2, Some(1), one_process()).unwrap();
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "alg": "rrpe",
                "quantum": 2,
                "aging": 1,
                "input": [{"begin": 0, "duration": 5, "priority": 1}]
            })
        );
    }
}
