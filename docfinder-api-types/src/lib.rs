mod doctor;

pub mod analysis;

pub use analysis::{AnalysisResponse, SearchRequest};
pub use doctor::Doctor;
