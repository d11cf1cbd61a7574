//! Assembles the final prompt document from an analyzed input, a category
//! template and the caller's options.
//!
//! The document always has the same eight slots in the same order. A slot is
//! rendered as `## TITLE` followed by its body, and slots with an empty body
//! are dropped. Only two values are drawn from the [`Selector`]: the role
//! prompt and the primary technique.

use crate::config::constants::limits;
use crate::prompts::analyzer::{ComplexityLevel, ProcessedInput, UrgencyLevel, capitalize_first};
use crate::prompts::catalog::{Technique, format_guidance, tone_guidance};
use crate::prompts::options::GenerationOptions;
use crate::prompts::selection::{Selector, choose};
use crate::prompts::templates::{CategoryTemplate, detect_domain, fill_placeholders};
use tracing::debug;

pub const ROLE_TITLE: &str = "ROLE & EXPERTISE";
pub const TASK_TITLE: &str = "TASK DEFINITION & OBJECTIVES";
pub const METHODOLOGY_TITLE: &str = "METHODOLOGY & APPROACH";
pub const INSTRUCTIONS_TITLE: &str = "DETAILED INSTRUCTIONS & CONSTRAINTS";
pub const OUTPUT_TITLE: &str = "OUTPUT FORMAT & STRUCTURE";
pub const QUALITY_TITLE: &str = "QUALITY STANDARDS & EVALUATION CRITERIA";
pub const EXAMPLES_TITLE: &str = "EXAMPLES & REFERENCE POINTS";
pub const VALIDATION_TITLE: &str = "VALIDATION & SUCCESS METRICS";

/// Slot titles in emission order
pub const SECTION_TITLES: [&str; 8] = [
    ROLE_TITLE,
    TASK_TITLE,
    METHODOLOGY_TITLE,
    INSTRUCTIONS_TITLE,
    OUTPUT_TITLE,
    QUALITY_TITLE,
    EXAMPLES_TITLE,
    VALIDATION_TITLE,
];

const SECTION_SEPARATOR: &str = "\n\n";

const AUTHORITY_INDICATORS: &[&str] = &[
    "Draw on proven best practices and current industry standards",
    "Apply insights from years of hands-on, real-world experience",
    "Anticipate common pitfalls and address them proactively",
    "Hold every recommendation to a professional, publishable standard",
];

const SUCCESS_CRITERIA: &[&str] = &[
    "Fully addresses every part of the request",
    "Delivers accurate, well-supported information",
    "Provides clear, actionable value to the reader",
    "Is organized logically and easy to follow",
];

const APPROACH_FRAMEWORK: &[&str] = &[
    "Clarify the goal and the constraints before producing content",
    "Break the task into logical components and address each in turn",
    "Ground claims in evidence, examples, or established principles",
    "Connect the components into a coherent, well-structured whole",
    "Review the result against the objectives and refine where needed",
];

const ADVANCED_CONSIDERATIONS: &[&str] = &[
    "Examine the problem from multiple perspectives and note trade-offs",
    "Identify hidden assumptions, dependencies, and second-order effects",
    "Address likely counterarguments, limitations, and edge cases",
];

const CORE_INSTRUCTIONS: &[&str] = &[
    "Read the task carefully and address every stated requirement",
    "Use clear, precise language and define specialized terms",
    "Support key points with evidence or concrete examples",
    "Maintain a logical flow with smooth transitions between ideas",
    "Stay focused on the objective and avoid unnecessary tangents",
    "Keep tone, terminology, and style consistent throughout",
    "Prefer specific, actionable guidance over generic statements",
    "State assumptions explicitly whenever information is missing",
];

const HIGH_COMPLEXITY_GUIDANCE: &[&str] = &[
    "Provide in-depth analysis with multiple perspectives",
    "Include relevant background context and supporting details",
    "Explain the reasoning behind each conclusion",
    "Cover nuances, exceptions, and advanced considerations",
];

const LOW_COMPLEXITY_GUIDANCE: &[&str] = &[
    "Keep explanations simple and accessible",
    "Focus on the most essential information",
    "Avoid jargon or explain it in plain terms",
    "Favor short sentences and concrete examples",
];

const MEDIUM_COMPLEXITY_GUIDANCE: &[&str] = &[
    "Balance depth with readability",
    "Provide enough context for understanding without overwhelming detail",
    "Highlight the most important points clearly",
];

const PRIORITY_HANDLING: &[&str] = &[
    "Prioritize the most critical points first",
    "Be direct and actionable in your recommendations",
    "Lead with a summary of the key takeaways",
];

const OPERATIONAL_CONSTRAINTS: &[&str] = &[
    "Do not fabricate facts, statistics, or sources",
    "Flag uncertainty instead of guessing",
    "Respect ethical, legal, and privacy considerations",
    "Keep the response within the requested scope",
];

const GENERIC_STRUCTURE: &[&str] = &[
    "Open with a brief introduction that frames the response",
    "Structure the body with clear headings and sections",
    "Use bullet points or numbered lists for clarity when appropriate",
    "Highlight key terms and takeaways",
    "Close with a concise summary or next steps",
];

const FORMATTING_STANDARDS: &[&str] = &[
    "Use Markdown headings to organize major sections",
    "Keep paragraphs short and focused on a single idea",
    "Use consistent formatting for lists and emphasis",
    "Include transitions that connect related sections",
    "Ensure the final output is clean and ready to use",
];

const EXCELLENCE_BENCHMARKS: &[&str] = &[
    "Accuracy: every statement is correct and verifiable",
    "Relevance: all content serves the stated objective",
    "Clarity: ideas are easy to understand on first reading",
    "Completeness: no essential aspect of the task is missing",
    "Consistency: tone and style stay uniform throughout",
    "Actionability: the reader knows exactly what to do next",
];

const ADVANCED_QUALITY_MARKERS: &[&str] = &[
    "Demonstrates deep understanding of complex concepts",
    "Synthesizes multiple sources or viewpoints into original insight",
    "Acknowledges limitations and areas of uncertainty",
    "Offers recommendations prioritized by impact",
];

const VALIDATION_CHECKPOINTS: &[&str] = &[
    "Does the response answer the core task directly?",
    "Are all claims supported and free of errors?",
    "Is the structure logical and easy to navigate?",
    "Does the tone suit the intended audience?",
    "Would an expert in the field approve of the result?",
];

const RESPONSE_FRAMEWORK: &[&str] = &[
    "Introduce the topic and state the objective",
    "Establish the essential context and background",
    "Develop the main content in well-organized sections",
    "Illustrate key points with concrete examples",
    "Conclude with a summary and clear next steps",
];

const ILLUSTRATIVE_EXAMPLE: &str = "\"A strong response opens by framing the problem and why it matters, \
walks through each component with evidence and a worked example, weighs the main alternatives \
against each other, and closes with prioritized recommendations the reader can act on immediately.\"";

const CHECKLIST_ITEMS: &[&str] = &[
    "All task requirements are addressed",
    "Content is accurate and well supported",
    "Structure follows the requested format",
    "Tone matches the intended audience",
    "Response has been proofread for clarity and errors",
];

const SUCCESS_INDICATORS: &[&str] = &[
    "The reader can act on the response without further clarification",
    "Key points are memorable and clearly stated",
    "The response would hold up to expert review",
    "Every section contributes to the overall objective",
    "The output meets or exceeds professional standards",
];

const CLOSING_REVIEW: &str = "Before finalizing, review your response against each checklist item and \
success indicator above, and revise any part that falls short.";

/// One rendered slot of the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub body: String,
}

impl Section {
    fn new(title: &'static str, blocks: Vec<String>) -> Self {
        Self {
            title,
            body: blocks.join(SECTION_SEPARATOR),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn render(&self) -> String {
        format!("## {}\n\n{}", self.title, self.body)
    }
}

pub struct PromptComposer<'a> {
    processed: &'a ProcessedInput,
    template: &'a CategoryTemplate,
    options: &'a GenerationOptions,
}

impl<'a> PromptComposer<'a> {
    pub fn new(
        processed: &'a ProcessedInput,
        template: &'a CategoryTemplate,
        options: &'a GenerationOptions,
    ) -> Self {
        Self {
            processed,
            template,
            options,
        }
    }

    /// Compose the full document. Empty slots are skipped.
    pub fn build(&self, selector: &mut dyn Selector) -> String {
        self.sections(selector)
            .iter()
            .filter(|section| !section.is_empty())
            .map(Section::render)
            .collect::<Vec<_>>()
            .join(SECTION_SEPARATOR)
    }

    /// All eight slots in emission order, including empty ones.
    /// Draws the role prompt first, then the technique.
    pub fn sections(&self, selector: &mut dyn Selector) -> Vec<Section> {
        let role = self.role_section(selector);
        let methodology = self.methodology_section(selector);

        vec![
            role,
            self.task_section(),
            methodology,
            self.instructions_section(),
            self.output_section(),
            self.quality_section(),
            self.examples_section(),
            self.validation_section(),
        ]
    }

    fn role_section(&self, selector: &mut dyn Selector) -> Section {
        let domain = detect_domain(&self.processed.original_input);
        let role = choose(selector, self.template.role_prompts)
            .map(|role| fill_placeholders(role, domain))
            .unwrap_or_default();
        debug!(target = "composer", domain, "selected role prompt");

        let mut opening = role;
        if let Some(audience) = self.options.audience() {
            if !opening.is_empty() {
                opening.push(' ');
            }
            opening.push_str(&format!(
                "Your audience consists of {audience}. Tailor vocabulary, depth, and examples to their needs."
            ));
        }

        let mut blocks = Vec::new();
        if !opening.is_empty() {
            blocks.push(opening);
        }
        blocks.push(labeled_bullets("Authority Indicators", AUTHORITY_INDICATORS));
        Section::new(ROLE_TITLE, blocks)
    }

    fn task_section(&self) -> Section {
        let processed = self.processed;
        let mut blocks = vec![format!("**Primary Objective:**\n{}", processed.main_task)];

        let mut criteria = bullet_lines(SUCCESS_CRITERIA);
        if let Some(length) = self.options.length() {
            criteria.push(bullet(&format!(
                "Stays within the requested length of {length} words"
            )));
        }
        blocks.push(labeled("Success Criteria", &criteria));

        if !processed.keywords.is_empty() {
            let keywords: Vec<String> = processed
                .keywords
                .iter()
                .map(|keyword| bullet(&capitalize_first(keyword)))
                .collect();
            blocks.push(labeled("Key Focus Areas", &keywords));
        }

        if !processed.implied_requirements.is_empty() {
            let requirements: Vec<String> = processed
                .implied_requirements
                .iter()
                .map(|requirement| bullet(requirement))
                .collect();
            blocks.push(labeled("Specific Requirements", &requirements));
        }

        blocks.push(labeled(
            "Context",
            &[
                bullet(&format!(
                    "Complexity Level: {}",
                    processed.complexity_level.label()
                )),
                bullet(&format!("Urgency Level: {}", processed.urgency_level.label())),
            ],
        ));

        Section::new(TASK_TITLE, blocks)
    }

    fn methodology_section(&self, selector: &mut dyn Selector) -> Section {
        let technique = choose(selector, self.template.techniques)
            .copied()
            .unwrap_or(Technique::DEFAULT);
        debug!(target = "composer", technique = %technique, "selected technique");

        let mut blocks = vec![
            format!(
                "**Primary Technique: {}**\n{}",
                technique.label(),
                technique.description()
            ),
            labeled_bullets("Approach Framework", APPROACH_FRAMEWORK),
        ];
        if self.is_high_complexity() {
            blocks.push(labeled_bullets(
                "Advanced Considerations",
                ADVANCED_CONSIDERATIONS,
            ));
        }
        Section::new(METHODOLOGY_TITLE, blocks)
    }

    fn instructions_section(&self) -> Section {
        let mut blocks = vec![labeled_bullets("Core Instructions", CORE_INSTRUCTIONS)];

        if let Some(sentence) = self.options.tone().and_then(tone_guidance) {
            blocks.push(format!("**Tone & Voice:**\n{sentence}"));
        }

        let guidance = match self.processed.complexity_level {
            ComplexityLevel::High => HIGH_COMPLEXITY_GUIDANCE,
            ComplexityLevel::Low => LOW_COMPLEXITY_GUIDANCE,
            ComplexityLevel::Medium => MEDIUM_COMPLEXITY_GUIDANCE,
        };
        blocks.push(labeled_bullets("Complexity Guidance", guidance));

        if self.processed.urgency_level == UrgencyLevel::High {
            blocks.push(labeled_bullets("Priority Handling", PRIORITY_HANDLING));
        }

        blocks.push(labeled_bullets(
            "Operational Constraints",
            OPERATIONAL_CONSTRAINTS,
        ));
        Section::new(INSTRUCTIONS_TITLE, blocks)
    }

    fn output_section(&self) -> Section {
        let mut blocks = Vec::new();

        match self.options.format().and_then(format_guidance) {
            Some(sentence) => blocks.push(format!("**Format Requirements:**\n{sentence}")),
            None => blocks.push(labeled_bullets("Structure Guidelines", GENERIC_STRUCTURE)),
        }

        if let Some(target) = self.options.length_target().filter(|target| *target != 0) {
            let (low, high) = length_range(target);
            blocks.push(labeled(
                "Length Requirements",
                &[
                    bullet(&format!(
                        "Target approximately {target} words (acceptable range: {low}-{high} words)"
                    )),
                    bullet(&format!(
                        "End your response with [Word Count: {target}] on its own line"
                    )),
                ],
            ));
        }

        blocks.push(labeled_bullets("Formatting Standards", FORMATTING_STANDARDS));
        Section::new(OUTPUT_TITLE, blocks)
    }

    fn quality_section(&self) -> Section {
        let mut blocks = vec![labeled_bullets(
            "Excellence Benchmarks",
            EXCELLENCE_BENCHMARKS,
        )];
        if self.is_high_complexity() {
            blocks.push(labeled_bullets(
                "Advanced Quality Markers",
                ADVANCED_QUALITY_MARKERS,
            ));
        }
        blocks.push(labeled_bullets(
            "Validation Checkpoints",
            VALIDATION_CHECKPOINTS,
        ));
        Section::new(QUALITY_TITLE, blocks)
    }

    fn examples_section(&self) -> Section {
        if self.processed.complexity_level == ComplexityLevel::Low {
            return Section::new(EXAMPLES_TITLE, Vec::new());
        }

        let steps: Vec<String> = RESPONSE_FRAMEWORK
            .iter()
            .enumerate()
            .map(|(index, step)| format!("{}. {step}", index + 1))
            .collect();

        let mut blocks = vec![labeled("Response Framework", &steps)];
        if self.is_high_complexity() {
            blocks.push(format!("**Illustrative Example:**\n{ILLUSTRATIVE_EXAMPLE}"));
        }
        Section::new(EXAMPLES_TITLE, blocks)
    }

    fn validation_section(&self) -> Section {
        let mut checklist: Vec<String> = CHECKLIST_ITEMS.iter().map(|item| checkbox(item)).collect();
        if let Some(length) = self.options.length() {
            checklist.push(checkbox(&format!(
                "Length requirement met (target: {length} words)"
            )));
        }

        let blocks = vec![
            labeled("Pre-Submission Checklist", &checklist),
            labeled_bullets("Success Indicators", SUCCESS_INDICATORS),
            CLOSING_REVIEW.to_string(),
        ];
        Section::new(VALIDATION_TITLE, blocks)
    }

    fn is_high_complexity(&self) -> bool {
        self.processed.complexity_level == ComplexityLevel::High
    }
}

/// Acceptable word range around `target`: both bounds floored, returned
/// low first, clamped to the `i64` range.
pub fn length_range(target: i64) -> (i64, i64) {
    let tolerance = i128::from(limits::LENGTH_TOLERANCE_PERCENT);
    let scaled = |percent: i128| {
        let bound = (i128::from(target) * percent).div_euclid(100);
        i64::try_from(bound).unwrap_or(if bound < 0 { i64::MIN } else { i64::MAX })
    };

    let first = scaled(100 - tolerance);
    let second = scaled(100 + tolerance);
    (first.min(second), first.max(second))
}

fn bullet(text: &str) -> String {
    format!("• {text}")
}

fn checkbox(text: &str) -> String {
    format!("☐ {text}")
}

fn bullet_lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| bullet(item)).collect()
}

fn labeled(label: &str, lines: &[String]) -> String {
    format!("**{label}:**\n{}", lines.join("\n"))
}

fn labeled_bullets(label: &str, items: &[&str]) -> String {
    labeled(label, &bullet_lines(items))
}
