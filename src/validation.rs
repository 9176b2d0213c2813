use crate::error::ValidationError;
use crate::model::Flow;

/// Checks the two required fields, stopping at the first failure.
///
/// The identifier is checked before the name. No other invariant is enforced:
/// duplicate ids, dangling connection endpoints and unknown statuses all pass.
pub fn validate_flow(flow: &Flow) -> Result<(), ValidationError> {
    if flow.flow_id.is_empty() {
        return Err(ValidationError::MissingFlowId);
    }
    if flow.flow_name.is_empty() {
        return Err(ValidationError::MissingFlowName);
    }
    Ok(())
}

/// Returns every violated requirement, identifier first.
pub fn validation_errors(flow: &Flow) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if flow.flow_id.is_empty() {
        errors.push(ValidationError::MissingFlowId);
    }
    if flow.flow_name.is_empty() {
        errors.push(ValidationError::MissingFlowName);
    }
    errors
}
