use crate::pedigree::MemberRecord;

/// Mock a single loader record.
/// # Arguments:
/// - `name`          : name of the individual (e.g. "child")
/// - `parents`       : optional names of the parents, as `["mother", "father"]`.
/// - `observed_trait`: optional trait evidence for this individual.
pub fn record(name: &str, parents: Option<[&str; 2]>, observed_trait: Option<bool>) -> MemberRecord {
    let [mother, father] = match parents {
        Some([mother, father]) => [Some(mother.to_string()), Some(father.to_string())],
        None                   => [None, None],
    };
    MemberRecord { name: name.to_string(), mother, father, observed_trait }
}

/// Mock a set of unrelated founder records, with no trait evidence.
pub fn founder_records(names: &[&str]) -> Vec<MemberRecord> {
    names.iter().map(|name| record(name, None, None)).collect()
}

/// Mock a father/mother/child trio. Both parents are unobserved founders;
/// the child carries the provided trait evidence.
pub fn trio_records(child_trait: Option<bool>) -> Vec<MemberRecord> {
    vec![
        record("mother", None, None),
        record("father", None, None),
        record("child", Some(["mother", "father"]), child_trait),
    ]
}
