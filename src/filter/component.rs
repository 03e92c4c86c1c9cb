//! Filter components - the keys a filter token can restrict

use std::fmt;

use super::SyntaxError;

/// Shortest accepted abbreviation of a component name
pub const MIN_COMPONENT_LEN: usize = 3;

/// Aspect of the execution context a filter restricts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterComponent {
    /// GPU or other accelerator target
    Accelerator,
    /// CPU architecture target, e.g. `x86_64/amd/zen2`
    Architecture,
    /// Bot instance name
    Instance,
    /// Job identifier
    Job,
    /// Software repository
    Repository,
}

impl FilterComponent {
    pub const ALL: [FilterComponent; 5] = [
        FilterComponent::Accelerator,
        FilterComponent::Architecture,
        FilterComponent::Instance,
        FilterComponent::Job,
        FilterComponent::Repository,
    ];

    /// Canonical name used when serializing filters
    pub fn name(self) -> &'static str {
        match self {
            FilterComponent::Accelerator => "accelerator",
            FilterComponent::Architecture => "architecture",
            FilterComponent::Instance => "instance",
            FilterComponent::Job => "job",
            FilterComponent::Repository => "repository",
        }
    }

    /// Resolve a possibly abbreviated, case-insensitive component name
    ///
    /// `arch`, `repo` and `inst` are the usual spellings; any prefix of at
    /// least [`MIN_COMPONENT_LEN`] letters works.
    pub fn resolve(name: &str) -> Result<Self, SyntaxError> {
        if name.chars().count() < MIN_COMPONENT_LEN {
            return Err(SyntaxError::ComponentTooShort(name.to_string()));
        }

        let lower = name.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.name().starts_with(&lower))
            .ok_or_else(|| SyntaxError::UnknownComponent(name.to_string()))
    }
}

impl fmt::Display for FilterComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_full_names() {
        for component in FilterComponent::ALL {
            assert_eq!(FilterComponent::resolve(component.name()), Ok(component));
        }
    }

    #[test]
    fn test_resolve_abbreviations() {
        assert_eq!(
            FilterComponent::resolve("arch"),
            Ok(FilterComponent::Architecture)
        );
        assert_eq!(
            FilterComponent::resolve("repo"),
            Ok(FilterComponent::Repository)
        );
        assert_eq!(FilterComponent::resolve("inst"), Ok(FilterComponent::Instance));
        assert_eq!(
            FilterComponent::resolve("acc"),
            Ok(FilterComponent::Accelerator)
        );
        assert_eq!(FilterComponent::resolve("ARCH"), Ok(FilterComponent::Architecture));
    }

    #[test]
    fn test_resolve_too_short() {
        assert_eq!(
            FilterComponent::resolve("ar"),
            Err(SyntaxError::ComponentTooShort("ar".into()))
        );
    }

    #[test]
    fn test_resolve_unknown() {
        assert_eq!(
            FilterComponent::resolve("arm64"),
            Err(SyntaxError::UnknownComponent("arm64".into()))
        );
        // Longer than the canonical name
        assert_eq!(
            FilterComponent::resolve("jobs"),
            Err(SyntaxError::UnknownComponent("jobs".into()))
        );
    }

    #[test]
    fn test_minimum_prefixes_are_unambiguous() {
        for a in FilterComponent::ALL {
            for b in FilterComponent::ALL {
                if a != b {
                    assert_ne!(
                        &a.name()[..MIN_COMPONENT_LEN],
                        &b.name()[..MIN_COMPONENT_LEN]
                    );
                }
            }
        }
    }
}
