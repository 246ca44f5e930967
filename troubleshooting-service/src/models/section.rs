/// A named, addressable part of the troubleshooting guide.
///
/// `heading` must match a `## ` heading of the loaded document for the
/// section to resolve; `title` and `description` are display metadata only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionDescriptor {
    pub id: &'static str,
    pub heading: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static SECTIONS: &[SectionDescriptor] = &[
    SectionDescriptor {
        id: "overview",
        heading: "Overview",
        title: "Overview",
        description: "How problems are categorised and what to include when reporting one",
    },
    SectionDescriptor {
        id: "quick-fixes",
        heading: "Quick Fixes",
        title: "Quick Fixes",
        description: "First checks that resolve most reports",
    },
    SectionDescriptor {
        id: "installation",
        heading: "Installation Issues",
        title: "Installation Issues",
        description: "Startup failures and missing runtime dependencies",
    },
    SectionDescriptor {
        id: "configuration",
        heading: "Configuration Problems",
        title: "Configuration Problems",
        description: "Configuration sources, document location and log levels",
    },
    SectionDescriptor {
        id: "connectivity",
        heading: "Network and Connectivity",
        title: "Network & Connectivity",
        description: "Refused connections, firewalls and CORS errors",
    },
    SectionDescriptor {
        id: "performance",
        heading: "Performance Issues",
        title: "Performance Issues",
        description: "Slow responses and memory growth",
    },
];

/// Looks up a descriptor by its exact id.
pub fn find_section(id: &str) -> Option<&'static SectionDescriptor> {
    SECTIONS.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SECTIONS.len());
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(find_section("overview").map(|s| s.heading), Some("Overview"));
        assert!(find_section("Overview").is_none());
        assert!(find_section("").is_none());
    }
}
