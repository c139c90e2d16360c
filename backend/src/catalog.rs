//! Career Catalog Module
//!
//! The fixed table of careers the service can recommend.
//! Built once at startup and shared read-only across all requests.

use serde::Serialize;

// ============================================================
// CAREER NAMES
// ============================================================

pub const SOFTWARE_ENGINEER: &str = "Software Engineer";
pub const GRAPHIC_DESIGNER: &str = "Graphic Designer";
pub const MARKETING_SPECIALIST: &str = "Marketing Specialist";
pub const NURSE: &str = "Nurse";

// ============================================================
// CAREER ENTRY
// ============================================================

/// A single career with its description and ordered learning roadmap
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CareerEntry {
    #[serde(rename = "career")]
    pub name: &'static str,
    pub description: &'static str,
    /// Suggested learning steps, in order
    pub roadmap: &'static [&'static str],
}

static BUILTIN_CAREERS: [CareerEntry; 4] = [
    CareerEntry {
        name: SOFTWARE_ENGINEER,
        description: "Design, develop, and maintain software applications.",
        roadmap: &[
            "Learn programming languages (Python, Java, C++)",
            "Master data structures and algorithms",
            "Build real-world projects",
            "Explore system design and cloud computing",
        ],
    },
    CareerEntry {
        name: GRAPHIC_DESIGNER,
        description: "Create visual content using design tools and creativity.",
        roadmap: &[
            "Learn tools like Photoshop, Illustrator",
            "Study color theory and typography",
            "Build a creative portfolio",
            "Understand branding and UX/UI",
        ],
    },
    CareerEntry {
        name: MARKETING_SPECIALIST,
        description: "Promote products and services using digital and traditional strategies.",
        roadmap: &[
            "Understand SEO, SEM, content marketing",
            "Learn about analytics and consumer behavior",
            "Run mock campaigns",
            "Master social media platforms",
        ],
    },
    CareerEntry {
        name: NURSE,
        description: "Provide healthcare support and patient care.",
        roadmap: &[
            "Complete nursing degree",
            "Develop communication and clinical skills",
            "Practice in real-world settings",
            "Specialize in areas like pediatrics or ICU",
        ],
    },
];

// ============================================================
// CATALOG
// ============================================================

/// Read-only mapping from career name to [`CareerEntry`].
///
/// Entries keep their table order; lookups are by exact name.
#[derive(Debug, Clone, Copy)]
pub struct CareerCatalog {
    entries: &'static [CareerEntry],
}

impl CareerCatalog {
    /// The built-in four-career table
    pub fn builtin() -> Self {
        Self {
            entries: &BUILTIN_CAREERS,
        }
    }

    /// Catalog over a caller-supplied table. Names are expected to be unique.
    pub fn from_entries(entries: &'static [CareerEntry]) -> Self {
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&'static CareerEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn entries(&self) -> &'static [CareerEntry] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CareerCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_catalog_order() {
        let catalog = CareerCatalog::builtin();
        let names: Vec<&str> = catalog.entries().iter().map(|e| e.name).collect();
        assert_eq!(
            names,
            vec![SOFTWARE_ENGINEER, GRAPHIC_DESIGNER, MARKETING_SPECIALIST, NURSE]
        );
    }

    #[test]
    fn test_names_are_unique() {
        let catalog = CareerCatalog::builtin();
        let unique: HashSet<&str> = catalog.entries().iter().map(|e| e.name).collect();
        assert_eq!(unique.len(), catalog.len());
    }

    #[test]
    fn test_every_roadmap_has_four_steps() {
        for entry in CareerCatalog::builtin().entries() {
            assert_eq!(entry.roadmap.len(), 4, "{} roadmap length", entry.name);
        }
    }

    #[test]
    fn test_get_by_name() {
        let catalog = CareerCatalog::builtin();
        let nurse = catalog.get(NURSE).unwrap();
        assert_eq!(nurse.description, "Provide healthcare support and patient care.");
        assert_eq!(nurse.roadmap[0], "Complete nursing degree");

        // Lookups are exact, not case-folded
        assert!(catalog.get("nurse").is_none());
        assert!(catalog.get("Astronaut").is_none());
    }

    #[test]
    fn test_from_entries() {
        static ONLY_NURSE: [CareerEntry; 1] = [CareerEntry {
            name: NURSE,
            description: "Provide healthcare support and patient care.",
            roadmap: &["Complete nursing degree"],
        }];

        let catalog = CareerCatalog::from_entries(&ONLY_NURSE);
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get(NURSE).is_some());
        assert!(catalog.get(SOFTWARE_ENGINEER).is_none());
        assert!(CareerCatalog::from_entries(&[]).is_empty());
    }

    #[test]
    fn test_entry_serializes_as_career() {
        let entry = CareerCatalog::builtin().get(GRAPHIC_DESIGNER).unwrap();
        let json = serde_json::to_value(entry).unwrap();
        assert_eq!(json["career"], "Graphic Designer");
        assert_eq!(json["roadmap"][2], "Build a creative portfolio");
        assert!(json.get("name").is_none());
    }
}
