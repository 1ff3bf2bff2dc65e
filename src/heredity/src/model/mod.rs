use std::{fmt, fs::File, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

mod error;
pub use error::ModelError;

/// Absolute tolerance when checking that a probability distribution sums to one.
const SUM_TOLERANCE: f64 = 1e-9;

/// Number of copies of the gene variant an individual may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneCount {
    Zero,
    One,
    Two,
}

impl GeneCount {
    /// Every possible gene-copy count, in ascending order.
    pub const ALL: [GeneCount; 3] = [Self::Zero, Self::One, Self::Two];

    /// Stable bucket index of this count within a size-three probability table.
    #[inline(always)]
    pub const fn index(self) -> usize {
        match self {
            Self::Zero => 0,
            Self::One  => 1,
            Self::Two  => 2,
        }
    }
}

impl fmt::Display for GeneCount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Probability tables driving the inference network.
/// # Fields:
/// - `gene_prior`      : Unconditional gene-count probabilities for a founder individual.
///                       `gene_prior[g]` = P(carrying g copies), for g in {0, 1, 2}.
/// - `trait_given_gene`: `trait_given_gene[g]` = P(exhibiting the trait | carrying g copies).
///                       The complement gives the probability of not exhibiting it.
/// - `mutation_rate`   : Probability that an allele flips state (present <-> absent)
///                       during transmission from parent to child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeredityModel {
    pub gene_prior      : [f64; 3],
    pub trait_given_gene: [f64; 3],
    pub mutation_rate   : f64,
}

impl Default for HeredityModel {
    fn default() -> Self {
        Self {
            gene_prior      : [0.96, 0.03, 0.01],
            trait_given_gene: [0.01, 0.56, 0.65],
            mutation_rate   : 0.01,
        }
    }
}

impl HeredityModel {
    /// Deserialize a model from a user-provided `.yaml` file and validate it.
    ///
    /// # Errors
    /// - if the file cannot be opened or does not parse as a `HeredityModel`.
    /// - if any of the deserialized values fails `validate()`.
    pub fn from_yaml(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open model file '{}'", path.display()))?;
        let model: Self = serde_yaml::from_reader(file)
            .with_context(|| format!("Failed to parse '{}' as a probability model", path.display()))?;
        model.validate()
            .with_context(|| format!("Invalid probability model within '{}'", path.display()))?;
        Ok(model)
    }

    /// Ensure every entry is a probability and that the gene-count prior is a distribution.
    ///
    /// # Errors
    /// - `InvalidProbability` if any value lies outside [0, 1].
    /// - `UnnormalizedPrior` if the gene-count prior does not sum to one.
    pub fn validate(&self) -> Result<(), ModelError> {
        for (index, &value) in self.gene_prior.iter().enumerate() {
            Self::check_probability("gene_prior", index, value)?;
        }
        for (index, &value) in self.trait_given_gene.iter().enumerate() {
            Self::check_probability("trait_given_gene", index, value)?;
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ModelError::InvalidProbability { field: "mutation_rate".to_string(), value: self.mutation_rate })
        }

        let sum: f64 = self.gene_prior.iter().sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(ModelError::UnnormalizedPrior { sum })
        }
        Ok(())
    }

    fn check_probability(table: &str, index: usize, value: f64) -> Result<(), ModelError> {
        match (0.0..=1.0).contains(&value) {
            true  => Ok(()),
            false => Err(ModelError::InvalidProbability { field: format!("{table}[{index}]"), value }),
        }
    }

    /// Unconditional probability that a founder carries `count` copies of the gene.
    #[inline(always)]
    pub fn gene_prior(&self, count: GeneCount) -> f64 {
        self.gene_prior[count.index()]
    }

    /// Probability of the observable phenotype given a gene-copy count.
    #[inline(always)]
    pub fn trait_likelihood(&self, count: GeneCount, has_trait: bool) -> f64 {
        let p = self.trait_given_gene[count.index()];
        match has_trait {
            true  => p,
            false => 1.0 - p,
        }
    }

    /// Probability that a single gamete transmitted by a parent carrying `parent_count`
    /// copies ends up carrying the mutated allele.
    ///
    /// A parent with no copies only transmits it through a mutation event, while a parent
    /// with both copies transmits it unless a mutation reverts it. The heterozygous case
    /// is an exact coin flip, regardless of the mutation rate.
    #[inline(always)]
    pub fn transmission_probability(&self, parent_count: GeneCount) -> f64 {
        match parent_count {
            GeneCount::Zero => self.mutation_rate,
            GeneCount::One  => 0.5,
            GeneCount::Two  => 1.0 - self.mutation_rate,
        }
    }
}
