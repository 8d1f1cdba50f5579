use tracing::debug;

use meridian_core::constants::{GENERAL_DOMAIN, UNCLASSIFIED_INTENT};
use meridian_core::errors::{IntentError, MeridianResult};
use meridian_core::intent::{IntentData, Urgency};

use crate::defaults;
use crate::lexicon::{best_match, Lexicon};
use crate::resolver::DomainResolver;

/// Keyword-lexicon intent classifier.
///
/// Every classified query gets a fully populated [`IntentData`]: unmatched
/// queries fall back to the `"general"` domain, the `"unclassified"` intent
/// kind, and routine urgency. The only error path is an empty query.
pub struct IntentClassifier {
    domains: Vec<Lexicon>,
    intents: Vec<Lexicon>,
    emergency_markers: Vec<String>,
    elevated_markers: Vec<String>,
    resolver: Option<Box<dyn DomainResolver>>,
}

impl IntentClassifier {
    /// Classifier with the built-in Chinese medical lexicons.
    pub fn new() -> Self {
        Self {
            domains: defaults::domain_lexicons(),
            intents: defaults::intent_lexicons(),
            emergency_markers: defaults::emergency_markers(),
            elevated_markers: defaults::elevated_markers(),
            resolver: None,
        }
    }

    /// Classifier with caller-supplied lexicons. Registration order is the
    /// tie-break order.
    pub fn with_lexicons(
        domains: Vec<Lexicon>,
        intents: Vec<Lexicon>,
        emergency_markers: Vec<String>,
        elevated_markers: Vec<String>,
    ) -> Self {
        Self {
            domains,
            intents,
            emergency_markers,
            elevated_markers,
            resolver: None,
        }
    }

    /// Install a domain-override resolver.
    pub fn with_resolver(mut self, resolver: Box<dyn DomainResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Classify a raw query into domain, intent kind, and urgency.
    pub fn classify(&self, query: &str) -> MeridianResult<IntentData> {
        if query.trim().is_empty() {
            return Err(IntentError::InvalidQuery.into());
        }

        let keyword_domain = best_match(&self.domains, query)
            .map(|lexicon| lexicon.name.clone())
            .unwrap_or_else(|| GENERAL_DOMAIN.to_string());

        let domain = match &self.resolver {
            Some(resolver) => resolver
                .resolve(query, &keyword_domain)
                .unwrap_or(keyword_domain),
            None => keyword_domain,
        };

        let intent_kind = best_match(&self.intents, query)
            .map(|lexicon| lexicon.name.clone())
            .unwrap_or_else(|| UNCLASSIFIED_INTENT.to_string());

        let urgency = self.evaluate_urgency(query);

        debug!(
            domain = %domain,
            intent_kind = %intent_kind,
            urgency = %urgency,
            "classified query"
        );

        Ok(IntentData::new(domain, intent_kind, urgency))
    }

    /// Any emergency marker outweighs elevated markers; no marker is routine.
    fn evaluate_urgency(&self, query: &str) -> Urgency {
        if self.emergency_markers.iter().any(|m| query.contains(m.as_str())) {
            Urgency::Emergency
        } else if self.elevated_markers.iter().any(|m| query.contains(m.as_str())) {
            Urgency::Elevated
        } else {
            Urgency::Routine
        }
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}
