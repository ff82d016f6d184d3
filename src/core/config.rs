//! Game configuration.
//!
//! One engine covers every rule variant. `GameConfig` switches the optional
//! behaviour on and off:
//! - category selection before each round
//! - a per-player skip budget
//! - an allowed category set enforced on questions
//! - difficulty-weighted scoring
//! - the round-starter rotation

use serde::{Deserialize, Serialize};

/// Categories accepted by `GameConfig::with_default_categories`.
pub const DEFAULT_CATEGORIES: [&str; 4] = ["Geography", "Science", "Literature", "General"];

/// Category given to questions whose source record has none.
pub const FALLBACK_CATEGORY: &str = "General";

/// Complete game configuration.
///
/// ```
/// use trivia_engine::core::GameConfig;
///
/// let config = GameConfig::new()
///     .with_categories()
///     .with_default_categories()
///     .with_skip_budget(2);
///
/// assert!(config.categories_enabled);
/// assert!(config.is_category_allowed("Science"));
/// assert!(!config.is_category_allowed("Sports"));
/// assert_eq!(config.skip_budget, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Let the caller pick a category before each round.
    pub categories_enabled: bool,

    /// Skip tokens each player gets for the whole game (0 = skipping disabled).
    pub skip_budget: u32,

    /// Categories questions may carry. `None` accepts any non-blank category.
    pub allowed_categories: Option<Vec<String>>,

    /// Award the question's difficulty weight instead of a flat point.
    pub weighted_scoring: bool,

    /// Accept two players with the same display name.
    pub allow_duplicate_names: bool,

    /// Cycle the first answerer from round to round.
    /// When off, every round starts with the first player in the roster.
    pub rotate_starting_player: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            categories_enabled: false,
            skip_budget: 0,
            allowed_categories: None,
            weighted_scoring: false,
            allow_duplicate_names: false,
            rotate_starting_player: true,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable category selection.
    #[must_use]
    pub fn with_categories(mut self) -> Self {
        self.categories_enabled = true;
        self
    }

    /// Give each player `budget` skip tokens.
    #[must_use]
    pub fn with_skip_budget(mut self, budget: u32) -> Self {
        self.skip_budget = budget;
        self
    }

    /// Restrict question categories to `categories`.
    #[must_use]
    pub fn with_allowed_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    /// Restrict question categories to [`DEFAULT_CATEGORIES`].
    #[must_use]
    pub fn with_default_categories(self) -> Self {
        self.with_allowed_categories(DEFAULT_CATEGORIES)
    }

    /// Score correct answers by difficulty weight.
    #[must_use]
    pub fn with_weighted_scoring(mut self) -> Self {
        self.weighted_scoring = true;
        self
    }

    /// Accept players sharing a display name.
    #[must_use]
    pub fn with_duplicate_names(mut self) -> Self {
        self.allow_duplicate_names = true;
        self
    }

    /// Always start rounds with the first player in the roster.
    #[must_use]
    pub fn without_rotation(mut self) -> Self {
        self.rotate_starting_player = false;
        self
    }

    /// Check a category against the allowed set.
    #[must_use]
    pub fn is_category_allowed(&self, category: &str) -> bool {
        match &self.allowed_categories {
            Some(allowed) => allowed.iter().any(|c| c == category),
            None => true,
        }
    }
}
