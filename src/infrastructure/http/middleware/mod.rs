pub mod error;

pub use error::*;

use crate::application::services::{AssignmentService, RatingService};

#[derive(Clone)]
pub struct AppState {
    pub assignment_service: AssignmentService,
    pub rating_service: RatingService,
}
