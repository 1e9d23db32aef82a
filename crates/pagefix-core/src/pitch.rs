//! Canonical pitch block injection as a document pass

use pagefix_blocks::{
    Anchor, CanonicalBlock, Injector, Locator, Outcome, StalePolicy, render,
};

use crate::Result;
use crate::document::Document;
use crate::pass::{DocumentPass, PassResult};
use crate::settings::PitchSettings;

/// Puts the canonical block into every document that has a place for it.
#[derive(Debug, Clone)]
pub struct PitchPass {
    injector: Injector,
}

impl PitchPass {
    pub fn new(injector: Injector) -> Self {
        Self { injector }
    }

    /// Render `block` once and configure injection from settings.
    pub fn from_settings(block: &CanonicalBlock, settings: &PitchSettings) -> Result<Self> {
        let mut locator = Locator::default();
        if let Some(pattern) = &settings.anchor {
            locator.anchor = Anchor::new(pattern)?;
        }
        let stale = if settings.keep_stale {
            StalePolicy::Keep
        } else {
            StalePolicy::Refresh
        };

        let injector = Injector::new(render(block))
            .with_locator(locator)
            .with_dependency(settings.dependency.clone().unwrap_or_default())
            .with_stale_policy(stale);
        Ok(Self { injector })
    }

    pub fn version(&self) -> &str {
        self.injector.block().version()
    }
}

impl DocumentPass for PitchPass {
    fn name(&self) -> &'static str {
        "pitch"
    }

    fn process(&self, document: &Document) -> PassResult {
        let injection = self.injector.apply(document.text());
        let category = injection.outcome.category();

        let (action, failure) = match &injection.outcome {
            Outcome::Current => ("already current".to_string(), None),
            Outcome::Unchanged => ("no pitch site".to_string(), None),
            Outcome::ReplacedTypeA { .. } => ("Type A".to_string(), None),
            Outcome::InsertedTypeB {
                dependency_injected: true,
                ..
            } => ("Type B (+stylesheet)".to_string(), None),
            Outcome::InsertedTypeB { .. } => ("Type B".to_string(), None),
            Outcome::RefreshedStale {
                previous_version, ..
            } => (
                format!(
                    "Refreshed from version {}",
                    previous_version.as_deref().unwrap_or("unknown")
                ),
                None,
            ),
            Outcome::StructuralError { reason } => {
                ("structural error".to_string(), Some(reason.clone()))
            }
        };

        PassResult {
            counts: [(category.to_string(), 1)].into_iter().collect(),
            text: injection.text,
            action,
            failure,
        }
    }
}
