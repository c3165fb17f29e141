//! Assessment command handlers.
//!
//! These handlers thread the catalog and the state-store port into the pure
//! pipeline stages. The domain never reads ambient state; the handlers fetch
//! stored answers and severities and inject them as explicit parameters.

mod assign_severity;
mod recommend_measures;
mod submit_questionnaire;

pub use assign_severity::{
    AssignSeverityCommand, AssignSeverityError, AssignSeverityHandler, AssignSeverityResult,
};
pub use recommend_measures::{
    RecommendMeasuresCommand, RecommendMeasuresError, RecommendMeasuresHandler,
    RecommendMeasuresResult,
};
pub use submit_questionnaire::{
    SubmitQuestionnaireCommand, SubmitQuestionnaireError, SubmitQuestionnaireHandler,
    SubmitQuestionnaireResult,
};
