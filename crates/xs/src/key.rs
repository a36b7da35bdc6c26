use stools_utils::StringExt;

/// Calculation mode a group constant belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// B1 leakage-corrected results (`B1_` prefix)
    B1,
    /// Infinite medium results (`INF_` prefix)
    Inf,
}

impl Family {
    /// Prefix used in camelCase names
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::B1 => "b1",
            Self::Inf => "inf",
        }
    }

    /// Try to infer the family from a raw prefix segment, e.g. `INF`
    fn from_segment(segment: &str) -> Option<Self> {
        match segment.to_uppercase().as_str() {
            "B1" => Some(Self::B1),
            "INF" => Some(Self::Inf),
            _ => None,
        }
    }

    /// Try to split a camelCase name into the family and the remainder
    ///
    /// A prefix only counts if followed by something that is not lower case,
    /// so `infS0` has a family but `infection` does not.
    fn split_camel(name: &str) -> Option<(Self, &str)> {
        [Self::B1, Self::Inf].into_iter().find_map(|family| {
            let rest = name.strip_prefix(family.prefix())?;
            match rest.chars().next() {
                Some(c) if !c.is_lowercase() => Some((family, rest)),
                _ => None,
            }
        })
    }
}

/// Canonical form of a group constant name
///
/// Raw Serpent keys and camelCase keys describe the same quantity, so both
/// normalise to the same [VariableKey]:
///
/// ```rust
/// # use stools_xs::{Family, VariableKey};
/// let raw = VariableKey::parse("INF_S0");
/// let camel = VariableKey::parse("infS0");
///
/// assert_eq!(raw, camel);
/// assert_eq!(raw.family, Some(Family::Inf));
/// assert_eq!(raw.name, "s0");
///
/// // everything outside the B1/INF families is metadata
/// let meta = VariableKey::parse("CMM_TRANSP_X");
/// assert_eq!(meta.family, None);
/// assert_eq!(meta.name, "cmmTranspX");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariableKey {
    /// Calculation mode, `None` for metadata or family-less queries
    pub family: Option<Family>,
    /// camelCase name without the family prefix
    pub name: String,
}

impl VariableKey {
    /// Normalise a raw or camelCase key
    pub fn parse(key: &str) -> Self {
        if key.is_raw_name() {
            Self::parse_raw(key)
        } else {
            Self::parse_camel(key)
        }
    }

    fn parse_raw(key: &str) -> Self {
        if let Some((prefix, rest)) = key.split_once('_') {
            if let Some(family) = Family::from_segment(prefix) {
                if !rest.trim_matches('_').is_empty() {
                    return Self {
                        family: Some(family),
                        name: rest.to_variable_name(),
                    };
                }
            }
        }

        Self {
            family: None,
            name: key.to_variable_name(),
        }
    }

    fn parse_camel(key: &str) -> Self {
        match Family::split_camel(key) {
            Some((family, rest)) => Self {
                family: Some(family),
                name: rest.decapitalise(),
            },
            None => Self {
                family: None,
                name: key.to_string(),
            },
        }
    }
}

impl std::fmt::Display for VariableKey {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.family {
            Some(family) => write!(fmt, "{}{}", family.prefix(), self.name.capitalise()),
            None => write!(fmt, "{}", self.name),
        }
    }
}
