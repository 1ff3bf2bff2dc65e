use crate::model::{GeneCount, HeredityModel};
use crate::pedigree::Pedigree;

use super::Hypothesis;

/// Compute the probability mass of one complete hypothesis.
///
/// The result is the exact joint probability that every member carries the
/// gene-copy count assigned by `hypothesis`, and that exactly the members of
/// its trait mask exhibit the trait. It follows the conditional-independence
/// structure of the network: a member's gene count depends only on its
/// parents' counts, and its trait only on its own count.
///
/// Founders draw their count from the model prior. Children receive one gamete
/// from each parent, transmitted independently, so the probability of ending
/// up with exactly g copies combines each parent's transmission probability:
/// both gametes mutated for two copies, exactly one for a single copy, and
/// neither for zero.
pub fn joint_probability(pedigree: &Pedigree, model: &HeredityModel, hypothesis: &Hypothesis) -> f64 {
    let mut probability = 1.0;
    for (index, member) in pedigree.members().iter().enumerate() {
        let count     = hypothesis.gene_count(index);
        let has_trait = hypothesis.exhibits_trait(index);

        probability *= match member.parents() {
            None => model.gene_prior(count),
            Some([mother, father]) => {
                let from_mother = model.transmission_probability(hypothesis.gene_count(mother));
                let from_father = model.transmission_probability(hypothesis.gene_count(father));
                match count {
                    GeneCount::Zero => (1.0 - from_mother) * (1.0 - from_father),
                    GeneCount::One  => from_mother * (1.0 - from_father) + (1.0 - from_mother) * from_father,
                    GeneCount::Two  => from_mother * from_father,
                }
            }
        };
        probability *= model.trait_likelihood(count, has_trait);
    }
    probability
}
