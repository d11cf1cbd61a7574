//! Template registry: one static template per prompt category, plus domain
//! detection for role prompt placeholders.

use crate::config::constants::{categories, defaults};
use crate::prompts::catalog::Technique;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder tokens replaced by the detected domain
pub const PLACEHOLDERS: &[&str] = &["[DOMAIN]", "[TECHNOLOGY]", "[FIELD]"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    General,
    Writing,
    Analysis,
    Creative,
    Code,
    Research,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::General,
        Category::Writing,
        Category::Analysis,
        Category::Creative,
        Category::Code,
        Category::Research,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Category::General => categories::GENERAL,
            Category::Writing => categories::WRITING,
            Category::Analysis => categories::ANALYSIS,
            Category::Creative => categories::CREATIVE,
            Category::Code => categories::CODE,
            Category::Research => categories::RESEARCH,
        }
    }

    /// Strict lookup, trimmed and case-insensitive
    pub fn lookup(key: &str) -> Option<Self> {
        let key = key.trim().to_lowercase();
        Self::ALL.into_iter().find(|category| category.key() == key)
    }

    /// Lookup that treats any unknown key as `general`
    pub fn resolve(key: &str) -> Self {
        Self::lookup(key).unwrap_or(Category::General)
    }

    pub fn template(&self) -> &'static CategoryTemplate {
        match self {
            Category::General => &GENERAL,
            Category::Writing => &WRITING,
            Category::Analysis => &ANALYSIS,
            Category::Creative => &CREATIVE,
            Category::Code => &CODE,
            Category::Research => &RESEARCH,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Static configuration for one category.
///
/// `structure` names the sections a prompt of this category is meant to have.
/// It is descriptive only: the composer always emits its own fixed section
/// order.
#[derive(Debug)]
pub struct CategoryTemplate {
    pub structure: &'static [&'static str],
    pub role_prompts: &'static [&'static str],
    pub techniques: &'static [Technique],
}

static GENERAL: CategoryTemplate = CategoryTemplate {
    structure: &[
        "Role & Expertise",
        "Task Definition",
        "Methodology",
        "Instructions & Constraints",
        "Output Format",
        "Quality Standards",
        "Examples",
        "Validation",
    ],
    role_prompts: &[
        "You are a world-class expert consultant with deep, hands-on experience in [DOMAIN].",
        "You are a seasoned professional advisor recognized for practical, high-impact guidance in [FIELD].",
        "You are a knowledgeable specialist who has solved hundreds of real-world problems in [DOMAIN].",
        "You are an experienced strategist and problem solver with a reputation for clarity in [FIELD].",
    ],
    techniques: &[
        Technique::ChainOfThought,
        Technique::StepByStep,
        Technique::RolePlaying,
    ],
};

static WRITING: CategoryTemplate = CategoryTemplate {
    structure: &[
        "Writer Persona & Expertise",
        "Content Objective",
        "Narrative Approach",
        "Voice, Tone & Style Rules",
        "Structure & Length",
        "Editorial Standards",
        "Reference Examples",
        "Final Review Checklist",
    ],
    role_prompts: &[
        "You are an award-winning content writer with over a decade of experience producing compelling work about [DOMAIN].",
        "You are a professional copywriter and editor who crafts persuasive, polished content for leaders in [FIELD].",
        "You are a skilled long-form writer known for turning complex [DOMAIN] topics into engaging reading.",
        "You are an experienced journalist and storyteller who covers [FIELD] with accuracy and flair.",
    ],
    techniques: &[
        Technique::RolePlaying,
        Technique::FewShotLearning,
        Technique::PerspectiveTaking,
    ],
};

static ANALYSIS: CategoryTemplate = CategoryTemplate {
    structure: &[
        "Analyst Role & Credentials",
        "Subject & Scope",
        "Analytical Framework",
        "Evidence & Assumptions",
        "Findings Structure",
        "Rigor Standards",
        "Worked Examples",
        "Conclusion Validation",
    ],
    role_prompts: &[
        "You are a senior data analyst with extensive experience extracting actionable insight in [DOMAIN].",
        "You are a strategic consultant who has led rigorous, evidence-based assessments across [FIELD].",
        "You are an expert evaluator trained to weigh competing evidence and trade-offs in [DOMAIN].",
        "You are a research-driven analyst known for precise, defensible conclusions about [FIELD].",
    ],
    techniques: &[
        Technique::ChainOfThought,
        Technique::TreeOfThoughts,
        Technique::SelfConsistency,
    ],
};

static CREATIVE: CategoryTemplate = CategoryTemplate {
    structure: &[
        "Creative Persona",
        "Creative Brief",
        "Ideation Approach",
        "Style & Inspiration",
        "Output Specifications",
        "Originality Standards",
        "Inspiration References",
        "Creative Review",
    ],
    role_prompts: &[
        "You are an acclaimed creative director whose original work has redefined expectations in [DOMAIN].",
        "You are an innovative designer and storyteller who blends imagination with craft in [FIELD].",
        "You are a visionary creative writer celebrated for fresh, memorable ideas about [DOMAIN].",
        "You are an artistic innovator who turns constraints into striking concepts across [FIELD].",
    ],
    techniques: &[
        Technique::AnalogicalReasoning,
        Technique::PerspectiveTaking,
        Technique::TreeOfThoughts,
    ],
};

static CODE: CategoryTemplate = CategoryTemplate {
    structure: &[
        "Engineering Role",
        "Technical Requirements",
        "Implementation Approach",
        "Code Standards & Constraints",
        "Deliverable Format",
        "Testing & Quality Gates",
        "Reference Implementations",
        "Acceptance Checklist",
    ],
    role_prompts: &[
        "You are a principal software engineer with deep production experience in [TECHNOLOGY].",
        "You are a senior technical architect who designs robust, maintainable systems for [DOMAIN].",
        "You are an expert programmer and code reviewer known for clean, well-tested work in [TECHNOLOGY].",
        "You are a pragmatic staff engineer who ships reliable software for teams working in [FIELD].",
    ],
    techniques: &[
        Technique::StepByStep,
        Technique::ChainOfThought,
        Technique::ConstitutionalReasoning,
    ],
};

static RESEARCH: CategoryTemplate = CategoryTemplate {
    structure: &[
        "Researcher Role",
        "Research Question",
        "Methodology",
        "Sources & Evidence",
        "Analysis Framework",
        "Presentation Format",
        "Citation Examples",
        "Research Validation",
    ],
    role_prompts: &[
        "You are a research scientist with a strong publication record and deep expertise in [FIELD].",
        "You are an academic researcher who synthesizes the literature on [DOMAIN] with rigor and balance.",
        "You are a market and industry analyst who investigates [DOMAIN] with disciplined methodology.",
        "You are an investigative specialist trained to verify claims and trace sources across [FIELD].",
    ],
    techniques: &[
        Technique::SocraticQuestioning,
        Technique::SelfConsistency,
        Technique::ChainOfThought,
    ],
};

/// Domain keyword sets in priority order; the first matching domain wins
const DOMAIN_RULES: &[(&str, &[&str])] = &[
    (
        "marketing",
        &[
            "marketing",
            "brand",
            "campaign",
            "advertis",
            "seo",
            "social media",
            "conversion",
            "funnel",
        ],
    ),
    (
        "technology",
        &[
            "technology",
            "software",
            "programming",
            "coding",
            "developer",
            "api",
            "database",
            "cloud",
            "machine learning",
            "artificial intelligence",
            "javascript",
            "python",
            "react",
        ],
    ),
    (
        "business",
        &[
            "business",
            "startup",
            "company",
            "management",
            "sales",
            "revenue",
            "entrepreneur",
            "operations",
        ],
    ),
    (
        "education",
        &[
            "education",
            "teaching",
            "student",
            "course",
            "curriculum",
            "lesson",
            "classroom",
            "tutorial",
        ],
    ),
    (
        "content",
        &[
            "content",
            "blog",
            "article",
            "newsletter",
            "copywriting",
            "story",
            "script",
        ],
    ),
    (
        "research",
        &[
            "research",
            "study",
            "academic",
            "scientific",
            "literature",
            "experiment",
            "hypothesis",
        ],
    ),
    (
        "design",
        &[
            "design",
            "user interface",
            "user experience",
            "visual",
            "graphic",
            "layout",
            "logo",
            "typography",
        ],
    ),
    (
        "finance",
        &[
            "finance",
            "financial",
            "investment",
            "budget",
            "accounting",
            "stock",
            "banking",
            "tax",
        ],
    ),
];

/// Coarse subject-matter label for the input, or the generic fallback phrase
pub fn detect_domain(input: &str) -> &'static str {
    let lowered = input.to_lowercase();
    DOMAIN_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map(|(domain, _)| *domain)
        .unwrap_or(defaults::DEFAULT_DOMAIN)
}

/// Replace every placeholder token in `role_prompt` with `domain`
pub fn fill_placeholders(role_prompt: &str, domain: &str) -> String {
    PLACEHOLDERS
        .iter()
        .fold(role_prompt.to_string(), |text, token| text.replace(token, domain))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive_and_strict() {
        assert_eq!(Category::lookup(" Code "), Some(Category::Code));
        assert_eq!(Category::lookup("poetry"), None);
    }

    #[test]
    fn unknown_categories_resolve_to_general() {
        assert_eq!(Category::resolve("poetry"), Category::General);
        assert_eq!(Category::resolve(""), Category::General);
        assert_eq!(Category::resolve("research"), Category::Research);
    }

    #[test]
    fn every_template_is_fully_populated() {
        for category in Category::ALL {
            let template = category.template();
            assert_eq!(template.structure.len(), 8, "{category}");
            assert!(!template.role_prompts.is_empty(), "{category}");
            assert!(!template.techniques.is_empty(), "{category}");
            for role in template.role_prompts {
                assert!(
                    PLACEHOLDERS.iter().any(|token| role.contains(token)),
                    "{role}"
                );
            }
        }
    }

    #[test]
    fn domain_detection_respects_priority() {
        assert_eq!(detect_domain("A marketing plan for our software"), "marketing");
        assert_eq!(detect_domain("Refactor the database layer"), "technology");
        assert_eq!(detect_domain("Write a blog post on gardening"), "content");
        assert_eq!(detect_domain("Plan a weekend hike"), "your specialized field");
    }

    #[test]
    fn placeholders_are_all_replaced() {
        let filled = fill_placeholders("Expert in [DOMAIN], [TECHNOLOGY] and [FIELD].", "finance");
        assert_eq!(filled, "Expert in finance, finance and finance.");
    }
}
