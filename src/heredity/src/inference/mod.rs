use log::debug;

use crate::model::{GeneCount, HeredityModel};
use crate::pedigree::Pedigree;

mod subsets;
pub use subsets::Submasks;

mod joint;
pub use joint::joint_probability;

mod posterior;
pub use posterior::{Posterior, Posteriors};

mod error;
pub use error::InferenceError;

/// One point of the joint enumeration space, as index masks over pedigree members.
/// # Fields:
/// - `one_copy` : members carrying a single copy of the gene.
/// - `two_copy` : members carrying both copies. Disjoint from `one_copy`;
///                members in neither mask carry no copy.
/// - `has_trait`: members exhibiting the trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hypothesis {
    pub one_copy : u64,
    pub two_copy : u64,
    pub has_trait: u64,
}

impl Hypothesis {
    /// Gene-copy count assigned to the member at `index`.
    #[inline(always)]
    pub fn gene_count(&self, index: usize) -> GeneCount {
        if self.one_copy >> index & 1 == 1 {
            GeneCount::One
        } else if self.two_copy >> index & 1 == 1 {
            GeneCount::Two
        } else {
            GeneCount::Zero
        }
    }

    /// Whether the member at `index` exhibits the trait under this hypothesis.
    #[inline(always)]
    pub fn exhibits_trait(&self, index: usize) -> bool {
        self.has_trait >> index & 1 == 1
    }
}

/// Compute per-member posterior gene and trait distributions through exhaustive
/// enumeration of every hypothesis consistent with the observed evidence.
///
/// Every trait assignment (power set of the population, filtered by evidence)
/// is combined with every disjoint (one-copy, two-copy) partition; each
/// complete hypothesis contributes its joint probability to the matching
/// bucket of every member's accumulator, and the accumulators are normalized
/// once enumeration ends.
///
/// Enumeration is exponential in the population size. This is exact inference
/// over small families, not a scalable engine.
///
/// # Errors
/// `InconsistentEvidence` if no admissible hypothesis carries probability
/// mass, which would otherwise make normalization divide by zero.
pub fn infer(pedigree: &Pedigree, model: &HeredityModel) -> Result<Posteriors, InferenceError> {
    let mut accumulators = vec![Posterior::default(); pedigree.len()];

    let population = population_mask(pedigree.len());
    let (known, observed_true) = evidence_masks(pedigree);
    debug!("Population mask: {population:#b}. Evidence: known={known:#b}, exhibiting={observed_true:#b}");

    for has_trait in Submasks::of(population) {
        // ---- Evidence-consistency filter: every observed member's assignment
        //      must equal its observation.
        if has_trait & known != observed_true {
            continue
        }

        for one_copy in Submasks::of(population) {
            for two_copy in Submasks::of(population & !one_copy) {
                let hypothesis = Hypothesis { one_copy, two_copy, has_trait };
                let probability = joint_probability(pedigree, model, &hypothesis);

                for (index, accumulator) in accumulators.iter_mut().enumerate() {
                    accumulator.record(
                        hypothesis.gene_count(index),
                        hypothesis.exhibits_trait(index),
                        probability,
                    );
                }
            }
        }
    }

    for (member, accumulator) in pedigree.members().iter().zip(accumulators.iter_mut()) {
        accumulator.normalize(&member.name)?;
    }
    Ok(Posteriors::new(accumulators))
}

/// Bitmask with one set bit per pedigree member.
fn population_mask(len: usize) -> u64 {
    match len {
        0 => 0,
        n if n >= u64::BITS as usize => u64::MAX,
        n => (1u64 << n) - 1,
    }
}

/// Split the evidence into (members with a known trait value, members observed
/// to exhibit the trait). The second mask is always a submask of the first.
fn evidence_masks(pedigree: &Pedigree) -> (u64, u64) {
    let mut known = 0u64;
    let mut observed_true = 0u64;
    for (index, member) in pedigree.members().iter().enumerate() {
        if let Some(observed) = member.observed_trait {
            known |= 1 << index;
            if observed {
                observed_true |= 1 << index;
            }
        }
    }
    (known, observed_true)
}
