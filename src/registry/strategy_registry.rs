use crate::content::fallback::FALLBACK_SLUG;
use crate::content::{
    language_arts, mathematics, science, social_studies, ContentStrategy, FallbackStrategy,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Registry statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryStats {
    pub total_strategies: usize,
    pub slugs: Vec<String>,
}

/// Immutable slug -> strategy map with a fallback for unknown slugs
#[derive(Debug, Clone)]
pub struct StrategyRegistry {
    strategies: HashMap<String, Arc<dyn ContentStrategy>>,
    fallback: Arc<dyn ContentStrategy>,
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::with_default_strategies()
    }
}

impl StrategyRegistry {
    pub fn builder() -> StrategyRegistryBuilder {
        StrategyRegistryBuilder::new()
    }

    /// Registry with the four built-in subjects plus the fallback
    pub fn with_default_strategies() -> Self {
        Self::builder()
            .register(Arc::new(mathematics::strategy()))
            .register(Arc::new(language_arts::strategy()))
            .register(Arc::new(science::strategy()))
            .register(Arc::new(social_studies::strategy()))
            .build()
    }

    /// Exact, case-sensitive slug match, else the fallback strategy
    pub fn resolve(&self, slug: &str) -> Arc<dyn ContentStrategy> {
        match self.strategies.get(slug) {
            Some(strategy) => Arc::clone(strategy),
            None => {
                debug!(slug = %slug, "No dedicated strategy, using fallback");
                Arc::clone(&self.fallback)
            }
        }
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.strategies.contains_key(slug)
    }

    /// Registered slugs in sorted order, excluding the fallback
    pub fn slugs(&self) -> Vec<String> {
        let mut slugs: Vec<String> = self.strategies.keys().cloned().collect();
        slugs.sort();
        slugs
    }

    pub fn fallback(&self) -> &Arc<dyn ContentStrategy> {
        &self.fallback
    }

    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            total_strategies: self.strategies.len(),
            slugs: self.slugs(),
        }
    }
}

/// Collects strategies before freezing them into a [`StrategyRegistry`]
#[derive(Debug)]
pub struct StrategyRegistryBuilder {
    strategies: HashMap<String, Arc<dyn ContentStrategy>>,
    fallback: Arc<dyn ContentStrategy>,
}

impl Default for StrategyRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StrategyRegistryBuilder {
    pub fn new() -> Self {
        Self {
            strategies: HashMap::new(),
            fallback: Arc::new(FallbackStrategy),
        }
    }

    /// Register under the strategy's own slug. A later registration for the
    /// same slug replaces the earlier one.
    pub fn register(mut self, strategy: Arc<dyn ContentStrategy>) -> Self {
        let slug = strategy.slug().to_string();
        if slug == FALLBACK_SLUG {
            self.fallback = strategy;
        } else {
            self.strategies.insert(slug, strategy);
        }
        self
    }

    pub fn with_fallback(mut self, fallback: Arc<dyn ContentStrategy>) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn build(self) -> StrategyRegistry {
        StrategyRegistry {
            strategies: self.strategies,
            fallback: self.fallback,
        }
    }
}
