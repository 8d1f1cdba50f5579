/// Override hook for domain classification.
///
/// When installed, the resolver sees the query and the keyword verdict and
/// may return a replacement domain. Returning `None` keeps the keyword
/// verdict. Typical implementation: a trained statistical classifier that
/// defers to keywords when its own confidence is low.
pub trait DomainResolver: Send + Sync {
    fn resolve(&self, query: &str, keyword_domain: &str) -> Option<String>;
}
