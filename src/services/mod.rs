pub mod process_input;
pub mod scheduler_api;
pub mod simulation_request;
pub mod simulation_types;
pub mod time_diagram;
