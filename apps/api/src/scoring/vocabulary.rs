//! The fixed set of technologies the scorer recognizes,
//! their aliases, and the category each one is weighted under.

use serde::{Deserialize, Serialize};

use crate::scoring::canonicalize::normalize;

/// Coarse skill category. Drives the per-skill weight in the skills sub-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Backend,
    Frontend,
    Db,
    Cloud,
    Test,
    General,
    Lang,
}

impl SkillCategory {
    pub const fn weight(self) -> f64 {
        match self {
            SkillCategory::Backend => 2.0,
            SkillCategory::Db => 1.6,
            SkillCategory::Cloud => 1.8,
            SkillCategory::Frontend => 1.2,
            SkillCategory::Test => 1.1,
            SkillCategory::General => 0.6,
            SkillCategory::Lang => 1.4,
        }
    }
}

/// Static definition of one canonical skill.
#[derive(Debug, Clone, Copy)]
pub struct SkillDef {
    pub name: &'static str,
    pub category: SkillCategory,
    pub aliases: &'static [&'static str],
}

const fn skill(
    name: &'static str,
    category: SkillCategory,
    aliases: &'static [&'static str],
) -> SkillDef {
    SkillDef {
        name,
        category,
        aliases,
    }
}

use SkillCategory::{Backend, Cloud, Db, Frontend, General, Lang, Test};

/// Declaration order matters: it is the tie-break order for fuzzy matching.
pub const SKILL_DEFS: &[SkillDef] = &[
    // Backend
    skill("Node.js", Backend, &["Node", "NodeJS", "node-js"]),
    skill("Express", Backend, &["Express.js", "ExpressJS"]),
    skill("Django", Backend, &[]),
    skill("Flask", Backend, &[]),
    skill("FastAPI", Backend, &["Fast API"]),
    skill("Spring Boot", Backend, &["Spring", "SpringBoot"]),
    skill("GraphQL", Backend, &[]),
    skill("REST API", Backend, &["REST", "RESTful", "REST APIs", "RESTful APIs"]),
    skill("Microservices", Backend, &["Microservice"]),
    skill("Kafka", Backend, &["Apache Kafka"]),
    // Frontend
    skill("React", Frontend, &["ReactJS", "React.js"]),
    skill("Angular", Frontend, &["AngularJS"]),
    skill("Vue.js", Frontend, &["Vue", "VueJS"]),
    skill("Next.js", Frontend, &["Next", "NextJS"]),
    skill("HTML", Frontend, &["HTML5"]),
    skill("CSS", Frontend, &["CSS3"]),
    skill("Tailwind CSS", Frontend, &["Tailwind", "TailwindCSS"]),
    skill("Redux", Frontend, &[]),
    // Databases
    skill("PostgreSQL", Db, &["Postgres", "psql"]),
    skill("MySQL", Db, &[]),
    skill("MongoDB", Db, &["Mongo"]),
    skill("Redis", Db, &[]),
    skill("SQLite", Db, &[]),
    skill("SQL", Db, &[]),
    skill("Firebase", Db, &["Firestore"]),
    // Cloud & DevOps
    skill("AWS", Cloud, &["Amazon Web Services"]),
    skill("Azure", Cloud, &["Microsoft Azure"]),
    skill("GCP", Cloud, &["Google Cloud", "Google Cloud Platform"]),
    skill("Docker", Cloud, &[]),
    skill("Kubernetes", Cloud, &["K8s"]),
    skill("Terraform", Cloud, &[]),
    skill("CI/CD", Cloud, &["CICD", "CI-CD"]),
    skill("Jenkins", Cloud, &[]),
    // Testing
    skill("Jest", Test, &[]),
    skill("Cypress", Test, &[]),
    skill("Selenium", Test, &[]),
    skill("Pytest", Test, &["py.test"]),
    skill("JUnit", Test, &[]),
    // Languages
    skill("JavaScript", Lang, &["JS", "ECMAScript"]),
    skill("TypeScript", Lang, &["TS"]),
    skill("Python", Lang, &["Python3"]),
    skill("Java", Lang, &[]),
    skill("Go", Lang, &["Golang"]),
    skill("Rust", Lang, &[]),
    skill("C++", Lang, &["CPP"]),
    skill("C#", Lang, &["CSharp"]),
    skill("Kotlin", Lang, &[]),
    // General tooling
    skill("Git", General, &[]),
    skill("GitHub", General, &[]),
    skill("Linux", General, &["Unix"]),
    skill("Agile", General, &["Scrum"]),
    skill("Jira", General, &[]),
    skill("Postman", General, &[]),
];

/// A vocabulary entry with its lookup keys pre-normalized.
#[derive(Debug, Clone)]
pub struct VocabEntry {
    pub name: &'static str,
    pub category: SkillCategory,
    /// Normalized canonical name, used for fuzzy comparison.
    pub key: String,
    /// Normalized canonical name plus every normalized alias.
    pub exact_keys: Vec<String>,
}

/// Immutable lookup tables built once from a slice of `SkillDef`s.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    entries: Vec<VocabEntry>,
}

impl Vocabulary {
    /// The built-in vocabulary.
    pub fn builtin() -> Self {
        Self::from_defs(SKILL_DEFS)
    }

    pub fn from_defs(defs: &[SkillDef]) -> Self {
        let entries = defs
            .iter()
            .map(|def| {
                let key = normalize(def.name);
                let mut exact_keys = vec![key.clone()];
                exact_keys.extend(def.aliases.iter().map(|a| normalize(a)));
                VocabEntry {
                    name: def.name,
                    category: def.category,
                    key,
                    exact_keys,
                }
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[VocabEntry] {
        &self.entries
    }

    /// Exact name-or-alias lookup on an already normalized candidate.
    pub fn lookup_exact(&self, normalized: &str) -> Option<&VocabEntry> {
        self.entries
            .iter()
            .find(|e| e.exact_keys.iter().any(|k| k == normalized))
    }

    /// Category for a canonical display name (case-insensitive).
    /// Unknown names fall back to `General`.
    pub fn category_of(&self, name: &str) -> SkillCategory {
        self.entries
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
            .map(|e| e.category)
            .unwrap_or(SkillCategory::General)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_canonical_names_are_unique() {
        let mut seen = HashSet::new();
        for def in SKILL_DEFS {
            assert!(
                seen.insert(def.name.to_lowercase()),
                "duplicate canonical name {}",
                def.name
            );
        }
    }

    #[test]
    fn test_no_alias_collides_across_entries() {
        let vocab = Vocabulary::builtin();
        let mut owner: std::collections::HashMap<&str, &str> = Default::default();
        for entry in vocab.entries() {
            for key in &entry.exact_keys {
                if let Some(prev) = owner.insert(key.as_str(), entry.name) {
                    assert_eq!(prev, entry.name, "key '{key}' maps to two skills");
                }
            }
        }
    }

    #[test]
    fn test_node_aliases_resolve() {
        let vocab = Vocabulary::builtin();
        for alias in ["node", "nodejs", "node-js", "node js"] {
            let hit = vocab.lookup_exact(alias).map(|e| e.name);
            assert_eq!(hit, Some("Node.js"), "alias {alias}");
        }
    }

    #[test]
    fn test_category_lookup_is_case_insensitive() {
        let vocab = Vocabulary::builtin();
        assert_eq!(vocab.category_of("kubernetes"), SkillCategory::Cloud);
        assert_eq!(vocab.category_of("MONGODB"), SkillCategory::Db);
    }

    #[test]
    fn test_unknown_category_defaults_to_general() {
        let vocab = Vocabulary::builtin();
        assert_eq!(vocab.category_of("COBOL"), SkillCategory::General);
    }

    #[test]
    fn test_category_weights() {
        assert_eq!(SkillCategory::Backend.weight(), 2.0);
        assert_eq!(SkillCategory::Cloud.weight(), 1.8);
        assert_eq!(SkillCategory::Db.weight(), 1.6);
        assert_eq!(SkillCategory::Lang.weight(), 1.4);
        assert_eq!(SkillCategory::Frontend.weight(), 1.2);
        assert_eq!(SkillCategory::Test.weight(), 1.1);
        assert_eq!(SkillCategory::General.weight(), 0.6);
    }
}
