//! Static lookup tables: prompting techniques, tone guidance and format guidance.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Named prompting strategy inserted into the methodology section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Technique {
    ChainOfThought,
    FewShotLearning,
    RolePlaying,
    StepByStep,
    TreeOfThoughts,
    SelfConsistency,
    ConstitutionalReasoning,
    SocraticQuestioning,
    AnalogicalReasoning,
    PerspectiveTaking,
}

impl Technique {
    /// Used when a template lists no techniques
    pub const DEFAULT: Technique = Technique::ChainOfThought;

    pub fn key(&self) -> &'static str {
        match self {
            Technique::ChainOfThought => "chain_of_thought",
            Technique::FewShotLearning => "few_shot_learning",
            Technique::RolePlaying => "role_playing",
            Technique::StepByStep => "step_by_step",
            Technique::TreeOfThoughts => "tree_of_thoughts",
            Technique::SelfConsistency => "self_consistency",
            Technique::ConstitutionalReasoning => "constitutional_reasoning",
            Technique::SocraticQuestioning => "socratic_questioning",
            Technique::AnalogicalReasoning => "analogical_reasoning",
            Technique::PerspectiveTaking => "perspective_taking",
        }
    }

    /// Uppercased display label, e.g. `CHAIN OF THOUGHT`
    pub fn label(&self) -> String {
        self.key().replace('_', " ").to_uppercase()
    }

    pub fn description(&self) -> &'static str {
        match self {
            Technique::ChainOfThought => {
                "Work through the problem one reasoning step at a time, making each inference explicit before drawing conclusions."
            }
            Technique::FewShotLearning => {
                "Anchor the response in concrete examples that demonstrate the expected pattern, quality, and structure."
            }
            Technique::RolePlaying => {
                "Fully inhabit the assigned expert persona, applying the judgment, vocabulary, and standards of that role."
            }
            Technique::StepByStep => {
                "Break the task into clearly ordered stages and complete each one before moving to the next."
            }
            Technique::TreeOfThoughts => {
                "Explore several candidate approaches in parallel, evaluate their merits, and pursue the most promising path."
            }
            Technique::SelfConsistency => {
                "Reason toward the answer along independent lines and keep only the conclusions that agree."
            }
            Technique::ConstitutionalReasoning => {
                "Check every recommendation against explicit principles of correctness, safety, and helpfulness before presenting it."
            }
            Technique::SocraticQuestioning => {
                "Probe assumptions with targeted questions and let the answers shape a rigorous, well-founded conclusion."
            }
            Technique::AnalogicalReasoning => {
                "Draw on parallels from other domains to illuminate the problem and inspire original solutions."
            }
            Technique::PerspectiveTaking => {
                "Consider the task from the viewpoint of every stakeholder and reconcile their needs in the final response."
            }
        }
    }
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

const TONE_ENTRIES: &[(&str, &str)] = &[
    (
        "professional",
        "Maintain a professional, formal tone throughout.",
    ),
    ("casual", "Use a conversational, approachable tone."),
    ("friendly", "Be warm, welcoming, and personable."),
    ("authoritative", "Demonstrate expertise with confidence."),
    (
        "educational",
        "Explain concepts clearly for learning purposes.",
    ),
    ("persuasive", "Use compelling arguments and evidence."),
    (
        "technical",
        "Use precise, technical language appropriate for experts.",
    ),
    ("creative", "Be imaginative and think outside the box."),
    (
        "analytical",
        "Apply rigorous, evidence-based reasoning and make every inference traceable.",
    ),
    (
        "empathetic",
        "Acknowledge the reader's situation and respond with understanding and care.",
    ),
];

const FORMAT_ENTRIES: &[(&str, &str)] = &[
    (
        "blog post",
        "Format as a blog post with engaging title, introduction, body sections, and conclusion.",
    ),
    (
        "report",
        "Structure as a formal report with executive summary, findings, and recommendations.",
    ),
    (
        "list",
        "Present information as a well-organized numbered or bulleted list.",
    ),
    (
        "email",
        "Format as a professional email with appropriate subject line and structure.",
    ),
    (
        "article",
        "Write as an informative article with compelling headlines and subheadings.",
    ),
    ("guide", "Create a step-by-step guide with clear instructions."),
    ("summary", "Provide a concise summary highlighting key points."),
    (
        "presentation",
        "Structure for presentation format with clear sections and talking points.",
    ),
];

static TONE_GUIDANCE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| TONE_ENTRIES.iter().copied().collect());

static FORMAT_GUIDANCE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| FORMAT_ENTRIES.iter().copied().collect());

/// Guidance sentence for a tone key, matched case-insensitively
pub fn tone_guidance(tone: &str) -> Option<&'static str> {
    TONE_GUIDANCE.get(tone.trim().to_lowercase().as_str()).copied()
}

/// Guidance sentence for a format key, matched case-insensitively
pub fn format_guidance(format: &str) -> Option<&'static str> {
    FORMAT_GUIDANCE
        .get(format.trim().to_lowercase().as_str())
        .copied()
}

/// Known tone keys in declaration order
pub fn tone_keys() -> impl Iterator<Item = &'static str> {
    TONE_ENTRIES.iter().map(|(key, _)| *key)
}

/// Known format keys in declaration order
pub fn format_keys() -> impl Iterator<Item = &'static str> {
    FORMAT_ENTRIES.iter().map(|(key, _)| *key)
}
