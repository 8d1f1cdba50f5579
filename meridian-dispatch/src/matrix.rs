use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::debug;

use meridian_core::config::MatrixConfig;
use meridian_core::errors::DispatchError;
use meridian_core::knowledge::Score;

/// One matrix coordinate: (domain, intent kind, model).
pub type CellKey = (String, String, String);

/// Learned routing confidence per `(domain, intent kind, model)` cell.
///
/// Cells are created on first observation and never removed, only
/// reweighted. Updates are an exponential moving average so a single
/// outlier rating cannot flip routing; the smoothing factor is
/// configuration, not code.
pub struct ConfidenceMatrix {
    cells: DashMap<CellKey, Score>,
    smoothing: f64,
}

impl ConfidenceMatrix {
    pub fn new(config: &MatrixConfig) -> Self {
        Self {
            cells: DashMap::new(),
            smoothing: config.smoothing,
        }
    }

    /// Bulk-load initial cells, replacing any existing values.
    pub fn seed<I>(&self, cells: I)
    where
        I: IntoIterator<Item = (CellKey, Score)>,
    {
        for (key, score) in cells {
            self.cells.insert(key, score);
        }
    }

    /// The highest-confidence model for a cell, or `UnknownCell` if no
    /// model has a confidence entry there. No default is silently assumed.
    pub fn best_model(
        &self,
        domain: &str,
        intent_kind: &str,
    ) -> Result<(String, Score), DispatchError> {
        self.models_for(domain, intent_kind)
            .into_iter()
            .next()
            .ok_or_else(|| DispatchError::UnknownCell {
                domain: domain.to_string(),
                intent_kind: intent_kind.to_string(),
            })
    }

    /// All models with a confidence entry for the cell, highest first.
    /// Ties are broken by model name so ordering is deterministic.
    pub fn models_for(&self, domain: &str, intent_kind: &str) -> Vec<(String, Score)> {
        let mut models: Vec<(String, Score)> = self
            .cells
            .iter()
            .filter(|cell| {
                let (d, k, _) = cell.key();
                d == domain && k == intent_kind
            })
            .map(|cell| (cell.key().2.clone(), *cell.value()))
            .collect();
        models.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        models
    }

    /// Fold an observed score into a cell: EMA when the cell exists,
    /// initialization to the observed score when it does not.
    pub fn update(&self, domain: &str, intent_kind: &str, model: &str, observed: Score) {
        let key = (
            domain.to_string(),
            intent_kind.to_string(),
            model.to_string(),
        );
        match self.cells.entry(key) {
            Entry::Occupied(mut cell) => {
                let old = cell.get().value();
                let new = (1.0 - self.smoothing) * old + self.smoothing * observed.value();
                let new = Score::new(new);
                debug!(
                    domain,
                    intent_kind,
                    model,
                    old,
                    new = new.value(),
                    "confidence cell updated"
                );
                cell.insert(new);
            }
            Entry::Vacant(slot) => {
                debug!(
                    domain,
                    intent_kind,
                    model,
                    initial = observed.value(),
                    "confidence cell initialized"
                );
                slot.insert(observed);
            }
        }
    }

    /// Current confidence for an exact cell, if present.
    pub fn confidence(&self, domain: &str, intent_kind: &str, model: &str) -> Option<Score> {
        self.cells
            .get(&(
                domain.to_string(),
                intent_kind.to_string(),
                model.to_string(),
            ))
            .map(|cell| *cell.value())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
