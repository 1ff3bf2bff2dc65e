use std::fmt;

/// Space padding length used for `std::fmt::Display` of Member
const NAME_DISPLAY_LEN: usize = 10;

/// A single record of the input pedigree, before name resolution.
/// `mother` and `father` must either both be set, or both be absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRecord {
    pub name          : String,
    pub mother        : Option<String>,
    pub father        : Option<String>,
    pub observed_trait: Option<bool>,
}

/// A resolved member of the pedigree.
/// # Fields:
/// - `name`          : Unique identifier of the individual.
/// - `parents`       : Optional pair of member indices, as `[mother, father]`.
///                     `None` if the individual is a founder.
/// - `observed_trait`: Evidence for this individual.
///                     - `Some(true)`  if the individual is known to exhibit the trait.
///                     - `Some(false)` if it is known not to.
///                     - `None`        if unobserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name          : String,
    parents           : Option<[usize; 2]>,
    pub observed_trait: Option<bool>,
}

impl Member {
    pub(super) fn new(name: &str, parents: Option<[usize; 2]>, observed_trait: Option<bool>) -> Self {
        Self { name: name.to_string(), parents, observed_trait }
    }

    /// Return the member indices of this individual's parents, as `[mother, father]`.
    #[inline(always)]
    pub fn parents(&self) -> Option<[usize; 2]> {
        self.parents
    }

    /// Check whether or not this individual is a founder. Returns `true` if it has no recorded parents.
    #[inline(always)]
    pub fn is_founder(&self) -> bool {
        self.parents.is_none()
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let parents = match self.parents {
            None                   => "None".to_string(),
            Some([mother, father]) => format!("{mother} <-> {father}"),
        };
        let observed = match self.observed_trait {
            None        => "unknown",
            Some(true)  => "trait",
            Some(false) => "no trait",
        };
        write!(f, "name: {: <NAME_DISPLAY_LEN$} - parents: {parents: <NAME_DISPLAY_LEN$} - observed: {observed}", self.name)
    }
}
