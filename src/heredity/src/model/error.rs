use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("'{field}' is {value}, expected a probability within [0, 1]")]
    InvalidProbability { field: String, value: f64 },

    #[error("gene-count prior sums to {sum}, expected 1")]
    UnnormalizedPrior { sum: f64 },
}
