//! # Catalog File Loader
//!
//! Loads per-section content overrides from a user-supplied JSON file, so the
//! portfolio can be re-pointed at someone else's material without rebuilding.
//!
//! ## File Format
//!
//! ```json
//! {
//!   "hero": { "name": "Ada Lovelace", "tagline": "..." },
//!   "sections": {
//!     "me": {
//!       "logs": [">> executing about_me()..."],
//!       "output": "{ ... }",
//!       "content": "<assistant>...</assistant>"
//!     }
//!   }
//! }
//! ```
//!
//! Sections absent from the file keep their builtin content. Section keys
//! outside the fixed set (`me`, `education`, `experience`, `projects`) are
//! rejected rather than silently ignored.

use super::{Catalog, Section, SectionId};
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    hero: Option<HeroOverride>,
    #[serde(default)]
    sections: BTreeMap<String, SectionOverride>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct HeroOverride {
    name: Option<String>,
    tagline: Option<String>,
    system_prompt: Option<String>,
    github: Option<String>,
    linkedin: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SectionOverride {
    logs: Vec<String>,
    output: String,
    content: String,
}

/// Load a catalog from `path`, layered over [`Catalog::builtin`].
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
    let file: CatalogFile = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?;

    let mut catalog = Catalog::builtin();

    for (key, over) in file.sections {
        let Some(id) = SectionId::from_key(&key) else {
            bail!(
                "Unknown section key {:?} in {} (expected one of: me, education, experience, projects)",
                key,
                path.display()
            );
        };
        if over.logs.is_empty() {
            bail!("Section {:?} in {} has an empty log list", key, path.display());
        }
        catalog.set(Section {
            id,
            logs: over.logs,
            output: over.output,
            content: over.content,
        });
    }

    if let Some(hero) = file.hero {
        if let Some(name) = hero.name {
            catalog.hero.name = name;
        }
        if let Some(tagline) = hero.tagline {
            catalog.hero.tagline = tagline;
        }
        if let Some(system_prompt) = hero.system_prompt {
            catalog.hero.system_prompt = system_prompt;
        }
        if let Some(github) = hero.github {
            catalog.hero.github = github;
        }
        if let Some(linkedin) = hero.linkedin {
            catalog.hero.linkedin = linkedin;
        }
    }

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_catalog(dir: &TempDir, json: &str) -> std::path::PathBuf {
        let path = dir.path().join("catalog.json");
        fs::write(&path, json).expect("write catalog");
        path
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = TempDir::new().expect("temp dir");
        let result = load_catalog(&dir.path().join("nope.json"));
        assert!(result.is_err());
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("Failed to read catalog file"));
    }

    #[test]
    fn test_empty_object_keeps_builtin_content() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_catalog(&dir, "{}");
        let catalog = load_catalog(&path).expect("load");
        let builtin = Catalog::builtin();
        assert_eq!(catalog.get(SectionId::Me).logs, builtin.get(SectionId::Me).logs);
        assert_eq!(catalog.hero.name, builtin.hero.name);
    }

    #[test]
    fn test_override_single_section() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_catalog(
            &dir,
            r#"{
                "sections": {
                    "projects": {
                        "logs": [">> executing search_projects()..."],
                        "output": "{}",
                        "content": "<assistant>hi</assistant>"
                    }
                }
            }"#,
        );
        let catalog = load_catalog(&path).expect("load");
        assert_eq!(catalog.get(SectionId::Projects).logs.len(), 1);
        assert_eq!(catalog.get(SectionId::Projects).content, "<assistant>hi</assistant>");
        // Untouched sections keep the builtin material
        assert_eq!(
            catalog.get(SectionId::Me).logs,
            Catalog::builtin().get(SectionId::Me).logs
        );
    }

    #[test]
    fn test_unknown_section_key_rejected() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_catalog(
            &dir,
            r#"{"sections": {"blog": {"logs": ["x"], "output": "", "content": ""}}}"#,
        );
        let result = load_catalog(&path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown section key"));
    }

    #[test]
    fn test_empty_log_list_rejected() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_catalog(
            &dir,
            r#"{"sections": {"me": {"logs": [], "output": "{}", "content": "x"}}}"#,
        );
        let result = load_catalog(&path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("empty log list"));
    }

    #[test]
    fn test_hero_override_is_partial() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_catalog(&dir, r#"{"hero": {"name": "Ada Lovelace"}}"#);
        let catalog = load_catalog(&path).expect("load");
        assert_eq!(catalog.hero.name, "Ada Lovelace");
        assert_eq!(catalog.hero.github, Catalog::builtin().hero.github);
    }

    #[test]
    fn test_invalid_json_rejected_with_context() {
        let dir = TempDir::new().expect("temp dir");
        let path = write_catalog(&dir, "not json");
        let result = load_catalog(&path);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to parse catalog file"));
    }
}
