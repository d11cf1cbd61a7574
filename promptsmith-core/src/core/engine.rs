use crate::config::PromptSmithConfig;
use crate::config::constants::{categories, variations};
use crate::core::error::EngineError;
use crate::core::stats::PromptStats;
use crate::core::validation::{ValidationReport, ValidationRules};
use crate::prompts::{
    Category, GenerationOptions, InputAnalyzer, ProcessedInput, PromptComposer, RandomSelector,
    Selector,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// Label attached to each entry of [`PromptEngine::generate_variations`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariationStyle {
    Standard,
    Detailed,
    Concise,
}

impl VariationStyle {
    const CYCLE: [VariationStyle; 3] = [
        VariationStyle::Standard,
        VariationStyle::Detailed,
        VariationStyle::Concise,
    ];

    /// Style for the zero-based variation `index`; labels repeat every three
    pub fn for_index(index: usize) -> Self {
        Self::CYCLE[index % Self::CYCLE.len()]
    }
}

impl fmt::Display for VariationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariationStyle::Standard => write!(f, "standard"),
            VariationStyle::Detailed => write!(f, "detailed"),
            VariationStyle::Concise => write!(f, "concise"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptVariation {
    /// One-based position in the batch
    pub id: usize,
    pub style: VariationStyle,
    pub prompt: String,
}

/// Everything produced by one generation, for machine-readable output
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRecord {
    pub input: String,
    pub category: Category,
    pub options: GenerationOptions,
    pub prompt: String,
    pub stats: PromptStats,
}

/// Entry point for prompt generation.
///
/// A default engine has no option defaults, draws from system entropy and
/// uses the stock validation limits. [`PromptEngine::from_config`] applies the
/// `[engine]`, `[validation]` and `[defaults]` tables of `promptsmith.toml`.
#[derive(Debug, Clone)]
pub struct PromptEngine {
    default_category: Category,
    defaults: GenerationOptions,
    rules: ValidationRules,
    seed: Option<u64>,
    words_per_minute: usize,
}

impl Default for PromptEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptEngine {
    pub fn new() -> Self {
        Self::from_config(&PromptSmithConfig::default())
    }

    pub fn from_config(config: &PromptSmithConfig) -> Self {
        let default_category = Category::resolve(&config.engine.default_category);
        debug!(
            target = "engine",
            default_category = %default_category,
            seeded = config.engine.seed.is_some(),
            "engine configured"
        );

        Self {
            default_category,
            defaults: config.defaults.clone(),
            rules: ValidationRules::from(&config.validation),
            seed: config.engine.seed,
            words_per_minute: config.engine.words_per_minute,
        }
    }

    /// Pin every draw to `seed`
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn default_category(&self) -> Category {
        self.default_category
    }

    /// Category keys in registry order
    pub fn list_categories(&self) -> Vec<&'static str> {
        categories::ALL.to_vec()
    }

    /// Map a caller-supplied key to a category. Blank keys use the configured
    /// default; unknown keys use `general`.
    pub fn resolve_category(&self, key: &str) -> Category {
        if key.trim().is_empty() {
            return self.default_category;
        }
        let category = Category::resolve(key);
        if Category::lookup(key).is_none() {
            debug!(target = "engine", key, "unknown category, using general");
        }
        category
    }

    /// Caller options with every unset field filled from `[defaults]`
    pub fn effective_options(&self, options: &GenerationOptions) -> GenerationOptions {
        options.clone().merged_with(&self.defaults)
    }

    /// Run only the analysis stage
    pub fn process(&self, raw: &str) -> Result<ProcessedInput, EngineError> {
        if raw.trim().is_empty() {
            return Err(EngineError::EmptyInput);
        }
        Ok(InputAnalyzer::process(raw))
    }

    /// Generate a prompt document, drawing from the engine's own random source
    pub fn generate(
        &self,
        raw: &str,
        category: &str,
        options: &GenerationOptions,
    ) -> Result<String, EngineError> {
        let mut selector = self.selector();
        self.generate_with(raw, category, options, &mut selector)
    }

    /// Generate a prompt document with an injected selector
    pub fn generate_with(
        &self,
        raw: &str,
        category: &str,
        options: &GenerationOptions,
        selector: &mut dyn Selector,
    ) -> Result<String, EngineError> {
        let processed = self.process(raw)?;
        let category = self.resolve_category(category);
        let options = self.effective_options(options);
        Ok(self.compose(&processed, category, &options, selector))
    }

    /// Generate a prompt and bundle it with its inputs and statistics
    pub fn generate_record(
        &self,
        raw: &str,
        category: &str,
        options: &GenerationOptions,
    ) -> Result<GenerationRecord, EngineError> {
        let processed = self.process(raw)?;
        let category = self.resolve_category(category);
        let options = self.effective_options(options);
        let prompt = self.compose(&processed, category, &options, &mut self.selector());

        Ok(GenerationRecord {
            input: raw.trim().to_string(),
            category,
            options,
            stats: self.get_stats(&prompt),
            prompt,
        })
    }

    fn compose(
        &self,
        processed: &ProcessedInput,
        category: Category,
        options: &GenerationOptions,
        selector: &mut dyn Selector,
    ) -> String {
        let document =
            PromptComposer::new(processed, category.template(), options).build(selector);

        info!(
            target = "engine",
            category = %category,
            complexity = %processed.complexity_level,
            urgency = %processed.urgency_level,
            chars = document.len(),
            "generated prompt"
        );
        document
    }

    /// `count` documents from one shared random source, so each draws its own
    /// role prompt and technique. `count` is capped at
    /// [`variations::MAX_COUNT`].
    pub fn generate_variations(
        &self,
        raw: &str,
        category: &str,
        options: &GenerationOptions,
        count: usize,
    ) -> Result<Vec<PromptVariation>, EngineError> {
        let count = count.min(variations::MAX_COUNT);
        let mut selector = self.selector();

        (0..count)
            .map(|index| {
                let prompt = self.generate_with(raw, category, options, &mut selector)?;
                Ok(PromptVariation {
                    id: index + 1,
                    style: VariationStyle::for_index(index),
                    prompt,
                })
            })
            .collect()
    }

    pub fn validate_input(
        &self,
        raw: &str,
        category: &str,
        options: &GenerationOptions,
    ) -> ValidationReport {
        self.rules
            .validate(raw, category, &self.effective_options(options))
    }

    pub fn get_stats(&self, document: &str) -> PromptStats {
        PromptStats::with_reading_speed(document, self.words_per_minute)
    }

    fn selector(&self) -> RandomSelector {
        RandomSelector::from_seed_option(self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::FixedSelector;

    #[test]
    fn lists_categories_in_registry_order() {
        assert_eq!(
            PromptEngine::new().list_categories(),
            vec!["general", "writing", "analysis", "creative", "code", "research"]
        );
    }

    #[test]
    fn whitespace_input_is_rejected() {
        let engine = PromptEngine::new();
        let err = engine
            .generate(" \n\t ", "code", &GenerationOptions::default())
            .unwrap_err();
        assert_eq!(err, EngineError::EmptyInput);
        assert_eq!(err.to_string(), "Please provide a task description");
    }

    #[test]
    fn unknown_category_matches_general() {
        let engine = PromptEngine::new();
        let options = GenerationOptions::default();
        let input = "Explain the water cycle to children";
        let general = engine
            .generate_with(input, "general", &options, &mut FixedSelector::new(1))
            .unwrap();
        let unknown = engine
            .generate_with(input, "poetry", &options, &mut FixedSelector::new(1))
            .unwrap();
        assert_eq!(general, unknown);
    }

    #[test]
    fn blank_category_uses_configured_default() {
        let mut config = PromptSmithConfig::default();
        config.engine.default_category = "Research".to_string();
        let engine = PromptEngine::from_config(&config);
        assert_eq!(engine.resolve_category("  "), Category::Research);
        assert_eq!(engine.resolve_category("code"), Category::Code);
    }

    #[test]
    fn seeded_engines_are_reproducible() {
        let engine = PromptEngine::new().with_seed(7);
        let options = GenerationOptions::default();
        let first = engine.generate("Design a logo for a bakery", "creative", &options);
        let second = engine.generate("Design a logo for a bakery", "creative", &options);
        assert_eq!(first.unwrap(), second.unwrap());
    }

    #[test]
    fn config_defaults_fill_unset_options() {
        let mut config = PromptSmithConfig::default();
        config.defaults = GenerationOptions::default().with_tone("casual");
        let engine = PromptEngine::from_config(&config);

        let document = engine
            .generate_with(
                "Write a welcome note for new members",
                "writing",
                &GenerationOptions::default(),
                &mut FixedSelector::default(),
            )
            .unwrap();
        assert!(document.contains("Use a conversational, approachable tone."));
    }

    #[test]
    fn variations_cycle_styles_and_cap_count() {
        let engine = PromptEngine::new().with_seed(3);
        let options = GenerationOptions::default();

        let batch = engine
            .generate_variations("Plan a product launch", "general", &options, 4)
            .unwrap();
        let styles: Vec<VariationStyle> = batch.iter().map(|v| v.style).collect();
        assert_eq!(
            styles,
            vec![
                VariationStyle::Standard,
                VariationStyle::Detailed,
                VariationStyle::Concise,
                VariationStyle::Standard
            ]
        );
        assert_eq!(batch[3].id, 4);

        let capped = engine
            .generate_variations("Plan a product launch", "general", &options, 50)
            .unwrap();
        assert_eq!(capped.len(), variations::MAX_COUNT);
    }

    #[test]
    fn record_carries_stats_for_the_prompt() {
        let engine = PromptEngine::new().with_seed(1);
        let record = engine
            .generate_record("  Summarize this quarter's results  ", "analysis", &GenerationOptions::default())
            .unwrap();
        assert_eq!(record.input, "Summarize this quarter's results");
        assert_eq!(record.category, Category::Analysis);
        assert_eq!(record.stats, engine.get_stats(&record.prompt));
    }

    #[test]
    fn record_uses_resolved_category_and_merged_options() {
        let mut config = PromptSmithConfig::default();
        config.defaults = GenerationOptions::default().with_tone("casual");
        let engine = PromptEngine::from_config(&config).with_seed(5);
        let options = GenerationOptions::default().with_length("200");

        let record = engine
            .generate_record("Describe a sunrise", "poetry", &options)
            .unwrap();
        assert_eq!(record.category, Category::General);
        assert_eq!(record.options, engine.effective_options(&options));
        assert_eq!(
            record.prompt,
            engine.generate("Describe a sunrise", "poetry", &options).unwrap()
        );
    }

    #[test]
    fn huge_length_generates_without_overflow() {
        let engine = PromptEngine::new().with_seed(2);
        let options = GenerationOptions::default().with_length("9000000000000000000");
        let input = "Write a history of the printing press";

        assert!(engine.validate_input(input, "writing", &options).is_valid);
        let document = engine.generate(input, "writing", &options).unwrap();
        assert!(document.contains("[Word Count: 9000000000000000000]"));
    }
}
