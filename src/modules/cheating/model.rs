use prism_models::AssignmentId;
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ConfirmedCheatersParams {
    /// Only cheaters confirmed for this assignment
    pub assignment: Option<AssignmentId>,
}
