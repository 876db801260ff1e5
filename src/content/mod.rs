//! # Portfolio Content
//!
//! Immutable section catalog for the portfolio. Each [`Section`] bundles the
//! pieces the reveal sequence plays through: the fake tool-call log lines,
//! the structured JSON "tool result", and the full tagged content body.
//!
//! The catalog is constructed once at startup, either from the embedded
//! defaults ([`Catalog::builtin`]) or overridden per-section from a JSON file
//! (see [`loader`]), and is never mutated afterwards.

pub mod loader;

pub use loader::load_catalog;

/// Identifier for one of the fixed navigable sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Me,
    Education,
    Experience,
    Projects,
}

impl SectionId {
    /// All sections in display order (navigation row, agent tool list).
    pub const ALL: [SectionId; 4] = [
        SectionId::Me,
        SectionId::Education,
        SectionId::Experience,
        SectionId::Projects,
    ];

    /// Stable string key, used for JSON catalogs and debug output.
    pub fn key(self) -> &'static str {
        match self {
            SectionId::Me => "me",
            SectionId::Education => "education",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
        }
    }

    /// Label shown on the navigation button.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Me => "Me",
            SectionId::Education => "Education",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
        }
    }

    /// Name of the pseudo tool the agent panel pretends to invoke.
    pub fn tool(self) -> &'static str {
        match self {
            SectionId::Me => "about_me",
            SectionId::Education => "fetch_education",
            SectionId::Experience => "get_experience",
            SectionId::Projects => "search_projects",
        }
    }

    /// Parse a string key back into an identifier.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.key() == key)
    }

    fn index(self) -> usize {
        match self {
            SectionId::Me => 0,
            SectionId::Education => 1,
            SectionId::Experience => 2,
            SectionId::Projects => 3,
        }
    }
}

/// One section's reveal material. Immutable after construction.
#[derive(Debug, Clone)]
pub struct Section {
    pub id: SectionId,
    /// Terminal log lines streamed during the first stage, in order.
    pub logs: Vec<String>,
    /// Pre-formatted JSON shown as the tool result.
    pub output: String,
    /// Full tagged body streamed character-by-character in the final stage.
    pub content: String,
}

/// Static header/footer material shown around the reveal sequence.
#[derive(Debug, Clone)]
pub struct Hero {
    pub name: String,
    pub tagline: String,
    /// The system-prompt line decorating the agent panel.
    pub system_prompt: String,
    pub github: String,
    pub linkedin: String,
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            name: "Larsen Weigle".to_string(),
            tagline: "Data scientist and software engineer shipping LLM products. \
                      Previously at Stanford. Now turning research into production systems."
                .to_string(),
            system_prompt: r#"{ "role": "system", "content": "You are a helpful assistant." }"#
                .to_string(),
            github: "github.com/larsenweigle".to_string(),
            linkedin: "linkedin.com/in/larsen-weigle".to_string(),
        }
    }
}

/// Complete catalog: exactly one [`Section`] per [`SectionId`].
#[derive(Debug, Clone)]
pub struct Catalog {
    sections: [Section; 4],
    pub hero: Hero,
}

impl Catalog {
    /// Look up a section. Total over the enum, so this never fails.
    pub fn get(&self, id: SectionId) -> &Section {
        &self.sections[id.index()]
    }

    /// Replace a single section (used by the JSON loader).
    pub(crate) fn set(&mut self, section: Section) {
        let index = section.id.index();
        self.sections[index] = section;
    }

    /// Iterate sections in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// The catalog shipped with the binary.
    pub fn builtin() -> Self {
        Self {
            sections: [
                builtin_me(),
                builtin_education(),
                builtin_experience(),
                builtin_projects(),
            ],
            hero: Hero::default(),
        }
    }
}

fn lines(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| (*s).to_string()).collect()
}

fn builtin_me() -> Section {
    Section {
        id: SectionId::Me,
        logs: lines(&[
            ">> executing about_me()...",
            ">> fetching personal information...",
            ">> compiling bio data...",
            ">> returning results...",
        ]),
        output: r#"{
  "name": "Larsen Weigle",
  "role": "Data Scientist",
  "location": "San Francisco, CA",
  "interests": ["AI/ML", "Conversational AI", "LLM Applications"],
  "status": "thinking about context windows"
}"#
        .to_string(),
        content: r"<assistant>

<name>
Larsen Weigle
</name>

<location>
San Francisco, CA
</location>

<role>
Data scientist specializing in conversational AI and task-oriented agents. I build AI-powered applications focused on LLM-augmented systems and data-driven solutions. I love working on highly collaborative, fast-paced teams.
</role>

<current_focus>
Tech lead for conversational AI team at Candidly. Building student loan and college planning assistants from prototype to production, defining roadmaps for evaluation, guardrails, and deployment.
</current_focus>

</assistant>"
            .to_string(),
    }
}

fn builtin_education() -> Section {
    Section {
        id: SectionId::Education,
        logs: lines(&[
            ">> executing fetch_education()...",
            ">> accessing academic records...",
            ">> retrieving certifications...",
            ">> returning educational data...",
        ]),
        output: r#"{
  "degrees": ["B.S. Computer Science", "M.S. Computer Science"],
  "university": "Stanford University",
  "years": "2023, 2024",
  "specialization": "Artificial Intelligence",
  "research": "Stanford OVAL"
}"#
        .to_string(),
        content: r#"<assistant>

<stanford_bs_2023>
Completed Bachelor of Science in Computer Science with specialization in Artificial Intelligence. Developed strong foundation in machine learning, natural language processing, and software engineering principles.
</stanford_bs_2023>

<stanford_ms_2024>
Pursued Master of Science in Computer Science, deepening expertise in AI systems and research methodologies. Focused on practical applications of large language models and task-oriented conversational agents.
</stanford_ms_2024>

<research_and_publications>
Stanford Open Virtual Assistant Lab (OVAL) - Contributed to Genie Worksheets, a declarative framework for task-oriented agents, and SUQL, an extension of SQL with free-text primitives for LLMs to perform search over hybrid structured/unstructured data. Coauthor of ACL 2025 paper: "Controllable and Reliable Knowledge-Intensive Task-Oriented Conversational Agents with Declarative Genie Worksheets"
</research_and_publications>

<athletics_and_leadership>
Men's Water Polo: Four-year varsity athlete, senior captain. NCAA National Champion (2019). NCAA Elite 90 Award recipient (2021) - highest GPA at national championship. Postgraduate Scholarship Recipient. Alpha Pi chapter vice president. Member of StanfordStartups.ai.
</athletics_and_leadership>

</assistant>"#
            .to_string(),
    }
}

fn builtin_experience() -> Section {
    Section {
        id: SectionId::Experience,
        logs: lines(&[
            ">> executing get_experience()...",
            ">> querying work history...",
            ">> processing achievements...",
            ">> returning career data...",
        ]),
        output: r#"{
  "current": "Data Scientist @ Candidly",
  "roles": ["Data Scientist", "Research Assistant", "ML Engineer"],
  "companies": ["Candidly", "Stanford OVAL", "The Ocean Cleanup", "Caktus.ai", "Momentum"],
  "specialties": ["Conversational AI", "LLM Applications", "ML Infrastructure"]
}"#
        .to_string(),
        content: r"<assistant>

<candidly>
<role>Data Scientist</role>
<duration>June 2024 - Present</duration>
<description>
Tech lead for conversational AI team. Built AI student-loan and college planning assistant from prototype to production, defining roadmap for evaluation, guardrails, and deployment. Designed automated support-ticket analysis pipeline and dashboard that summarize, classify, and cluster tickets to surface trends and product bugs.
</description>
<stack>Python, TypeScript, LangGraph, AI SDK, Arize Phoenix, AWS, Postgres, Hex</stack>
</candidly>

<stanford_oval>
<role>Research Assistant</role>
<duration>January - June 2024</duration>
<description>
Contributed to Genie Worksheets, a declarative framework for task-oriented agents, and SUQL, an extension of SQL with free-text primitives for LLMs to perform search over hybrid structured/unstructured data. Coauthored ACL 2025 paper on OVAL's LLM-Augmented Cognition research.
</description>
<stack>Python, Postgres, PyTorch, GCS</stack>
</stanford_oval>

<the_ocean_cleanup>
<role>Data Scientist Intern</role>
<duration>September - December 2023</duration>
<description>
Developed marine-plastic beaching predictor to forecast density/weight at coastline hotspots and candidate sites worldwide. Built end-to-end pipeline for feature engineering, dataset assembly, and model training/evaluation using linear regression, XGBoost, and ordinal logistic models, producing ranked maps to prioritize cleanup efforts.
</description>
<stack>Python, Pandas, scikit-learn</stack>
</the_ocean_cleanup>

<caktus_ai>
<role>Machine Learning Engineer Intern</role>
<duration>March - September 2023</duration>
<description>
Supervised fine-tuned and quantized open source models on proprietary academic journal datasets. Constructed company's first LLM-as-judge pipeline to generate pairwise evaluations across different models.
</description>
<stack>Python, Hugging Face, Google Colab</stack>
</caktus_ai>

<momentum>
<role>Software Engineer Intern</role>
<duration>June - August 2022</duration>
<description>
Fine-tuned and modified T5 Text-to-Text Transformer model to produce unique search queries given product descriptions, which was used to build training targets for a CLIP embedding model for products. Created packages to scrape stock keeping units and global trade numbers from HTML of product pages for various e-commerce websites.
</description>
<stack>Python, PyTorch, Golang, K8s</stack>
</momentum>

</assistant>"
            .to_string(),
    }
}

fn builtin_projects() -> Section {
    Section {
        id: SectionId::Projects,
        logs: lines(&[
            ">> executing search_projects()...",
            ">> scanning repositories...",
            ">> analyzing contributions...",
            ">> returning project list...",
        ]),
        output: r#"{
  "research": ["Genie Worksheets", "SUQL"],
  "publication": "ACL 2025",
  "focus_areas": ["Conversational AI", "Task-Oriented Agents", "ML Infrastructure"],
  "github": "github.com/larsenweigle"
}"#
        .to_string(),
        content: r"<assistant>

<coming_soon>
More projects coming soon...
</coming_soon>

<acl_2025_publication>
<title>
Controllable and Reliable Knowledge-Intensive Task-Oriented Conversational Agents with Declarative Genie Worksheets
</title>
<conference>ACL 2025</conference>
<role>Coauthor</role>
<arxiv>arXiv:2407.05674</arxiv>
<description>
Research on building reliable and controllable task-oriented conversational agents using declarative frameworks. Explores methods for creating knowledge-intensive dialogue systems that can handle complex, multi-turn interactions while maintaining accuracy and user trust.
</description>
</acl_2025_publication>

</assistant>"
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_id_key_roundtrip() {
        for id in SectionId::ALL {
            assert_eq!(SectionId::from_key(id.key()), Some(id));
        }
        assert_eq!(SectionId::from_key("blog"), None);
        assert_eq!(SectionId::from_key(""), None);
    }

    #[test]
    fn test_builtin_catalog_is_total() {
        let catalog = Catalog::builtin();
        for id in SectionId::ALL {
            let section = catalog.get(id);
            assert_eq!(section.id, id);
            assert!(!section.logs.is_empty(), "{} has no logs", id.key());
            assert!(!section.output.is_empty());
            assert!(!section.content.is_empty());
        }
    }

    #[test]
    fn test_builtin_me_logs() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.get(SectionId::Me).logs,
            vec![
                ">> executing about_me()...",
                ">> fetching personal information...",
                ">> compiling bio data...",
                ">> returning results...",
            ]
        );
    }

    #[test]
    fn test_log_lines_name_the_tool() {
        let catalog = Catalog::builtin();
        for id in SectionId::ALL {
            let first = &catalog.get(id).logs[0];
            assert!(
                first.contains(id.tool()),
                "first log line of {} should invoke {}()",
                id.key(),
                id.tool()
            );
        }
    }

    #[test]
    fn test_iter_follows_display_order() {
        let catalog = Catalog::builtin();
        let ids: Vec<SectionId> = catalog.iter().map(|s| s.id).collect();
        assert_eq!(ids, SectionId::ALL);
    }

    #[test]
    fn test_content_bodies_are_tagged() {
        let catalog = Catalog::builtin();
        for id in SectionId::ALL {
            let content = &catalog.get(id).content;
            assert!(content.starts_with("<assistant>"));
            assert!(content.ends_with("</assistant>"));
        }
    }
}
