use thiserror::Error;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("the observed trait values leave no admissible hypothesis for '{member}'. \
             Check the evidence against the probability model")]
    InconsistentEvidence { member: String },
}
