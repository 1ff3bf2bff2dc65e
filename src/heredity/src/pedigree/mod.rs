use ahash::AHashMap;

mod member;
pub use member::{Member, MemberRecord};

mod error;
pub use error::PedigreeError;

/// Maximum supported population size. Member indices double as bit positions
/// within a machine word during inference, so the pedigree must fit one word.
pub const MAX_MEMBERS: usize = u64::BITS as usize;

/// A family pedigree: an ordered set of members, each addressed by a stable index.
///
/// Indices follow the order of the input records, and every parent reference is
/// resolved to an index at construction time. A successfully built `Pedigree`
/// therefore guarantees referential integrity to its consumers.
#[derive(Debug, Clone, Default)]
pub struct Pedigree {
    members: Vec<Member>,
    index  : AHashMap<String, usize>,
}

impl Pedigree {
    /// Build a pedigree from loader records.
    ///
    /// Resolution is two-pass: names are registered first, then parent references
    /// are resolved, so records may reference individuals defined on later rows.
    ///
    /// # Errors
    /// - `PopulationOverflow` if more than `MAX_MEMBERS` records are provided.
    /// - `DuplicateMember` if two records share a name.
    /// - `MissingParent` if exactly one of mother/father is set.
    /// - `UnknownParent` if a parent name matches no record.
    pub fn from_records(records: &[MemberRecord]) -> Result<Self, PedigreeError> {
        if records.len() > MAX_MEMBERS {
            return Err(PedigreeError::PopulationOverflow { found: records.len() })
        }

        // ---- First pass: assign a stable index to every name.
        let mut index = AHashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if index.insert(record.name.clone(), position).is_some() {
                return Err(PedigreeError::DuplicateMember(record.name.clone()))
            }
        }

        // ---- Second pass: resolve parent references.
        let mut members = Vec::with_capacity(records.len());
        for record in records {
            let resolve = |parent: &str| {
                index.get(parent).copied().ok_or_else(|| PedigreeError::UnknownParent {
                    child : record.name.clone(),
                    parent: parent.to_string(),
                })
            };
            let parents = match (&record.mother, &record.father) {
                (None, None)                 => None,
                (Some(mother), Some(father)) => Some([resolve(mother)?, resolve(father)?]),
                _ => return Err(PedigreeError::MissingParent { child: record.name.clone() }),
            };
            members.push(Member::new(&record.name, parents, record.observed_trait));
        }
        Ok(Self { members, index })
    }

    /// Number of members within the pedigree.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members, in input order. A member's position within this slice is its index.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Retrieve a member by name.
    pub fn get(&self, name: &str) -> Option<&Member> {
        self.index_of(name).map(|position| &self.members[position])
    }

    /// Retrieve the stable index of a member by name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Iterate over the members carrying no recorded parents.
    pub fn founders(&self) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(|member| member.is_founder())
    }

    /// Iterate over the members carrying two recorded parents.
    pub fn offspring(&self) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(|member| !member.is_founder())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::common;
    use pretty_assertions::assert_eq;

    #[test]
    fn founder_only_pedigree() -> Result<(), PedigreeError> {
        let pedigree = Pedigree::from_records(&common::founder_records(&["ind1", "ind2"]))?;
        assert_eq!(pedigree.len(), 2);
        assert_eq!(pedigree.founders().count(), 2);
        assert_eq!(pedigree.offspring().count(), 0);
        Ok(())
    }

    #[test]
    fn trio_resolves_parent_indices() -> Result<(), PedigreeError> {
        let pedigree = Pedigree::from_records(&common::trio_records(None))?;
        let child = pedigree.get("child").expect("Missing child");
        let mother = pedigree.index_of("mother").expect("Missing mother");
        let father = pedigree.index_of("father").expect("Missing father");
        assert_eq!(child.parents(), Some([mother, father]));
        assert!(!child.is_founder());
        Ok(())
    }

    #[test]
    fn parents_may_be_defined_after_child() -> Result<(), PedigreeError> {
        let records = vec![
            common::record("child", Some(["mother", "father"]), None),
            common::record("mother", None, None),
            common::record("father", None, None),
        ];
        let pedigree = Pedigree::from_records(&records)?;
        assert_eq!(pedigree.offspring().count(), 1);
        Ok(())
    }

    #[test]
    fn reject_duplicate_member() {
        let records = common::founder_records(&["ind1", "ind1"]);
        let result = Pedigree::from_records(&records);
        assert_eq!(result.unwrap_err(), PedigreeError::DuplicateMember("ind1".to_string()));
    }

    #[test]
    fn reject_unknown_parent() {
        let mut records = common::trio_records(None);
        records.retain(|record| record.name != "father");
        let result = Pedigree::from_records(&records);
        assert_eq!(
            result.unwrap_err(),
            PedigreeError::UnknownParent { child: "child".to_string(), parent: "father".to_string() }
        );
    }

    #[test]
    fn reject_half_specified_parents() {
        let records = vec![
            common::record("mother", None, None),
            MemberRecord {
                name          : "child".to_string(),
                mother        : Some("mother".to_string()),
                father        : None,
                observed_trait: None,
            },
        ];
        let result = Pedigree::from_records(&records);
        assert_eq!(result.unwrap_err(), PedigreeError::MissingParent { child: "child".to_string() });
    }

    #[test]
    fn reject_oversized_population() {
        let names: Vec<String> = (0..=MAX_MEMBERS).map(|i| format!("ind{i}")).collect();
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        let result = Pedigree::from_records(&common::founder_records(&names));
        assert_eq!(result.unwrap_err(), PedigreeError::PopulationOverflow { found: MAX_MEMBERS + 1 });
    }

    #[test]
    fn empty_pedigree() -> Result<(), PedigreeError> {
        let pedigree = Pedigree::from_records(&[])?;
        assert!(pedigree.is_empty());
        assert_eq!(pedigree.len(), 0);
        Ok(())
    }

    #[test]
    fn display() {
        let pedigree = Pedigree::from_records(&common::trio_records(Some(true)))
            .expect("Trio should be a valid pedigree");
        let display = format!("{}", pedigree.get("child").expect("Missing child"));
        assert!(display.contains("child"));
        assert!(display.contains("trait"));
    }
}
