//! CardioRisk Server
//!
//! HTTP front end for the hybrid cardiovascular risk evaluator. One POST
//! endpoint validates clinical measurements, runs the coronary model and
//! the guideline rules, and returns a unified report.

pub mod config;
pub mod evaluation;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use routes::{create_router, AppError};
pub use state::AppState;
