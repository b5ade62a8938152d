//! Chart registry: each chart is constructed at most once per page load.

use crate::charts::{ChartId, ChartSpec};
use std::collections::BTreeSet;

/// Something that can turn a chart spec into a live chart.
pub trait ChartBackend {
    fn construct(&mut self, spec: &ChartSpec) -> anyhow::Result<()>;
}

/// Charts constructed so far in this page load.
#[derive(Debug, Default)]
pub struct ChartRegistry {
    constructed: BTreeSet<ChartId>,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct every chart not yet constructed. Returns how many were
    /// constructed by this call.
    ///
    /// A chart whose construction fails is logged and still counted as
    /// constructed, so it is not attempted again.
    pub fn construct_all<B: ChartBackend + ?Sized>(
        &mut self,
        charts: &[ChartSpec],
        backend: &mut B,
    ) -> usize {
        let mut count = 0;
        for spec in charts {
            if !self.constructed.insert(spec.id) {
                log::debug!("render: {} already constructed", spec.canvas_id());
                continue;
            }
            match backend.construct(spec) {
                Ok(()) => count += 1,
                Err(e) => log::error!("render: failed to construct {}: {}", spec.canvas_id(), e),
            }
        }
        count
    }

    pub fn is_constructed(&self, id: ChartId) -> bool {
        self.constructed.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.constructed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructed.is_empty()
    }
}

/// Backend that records what it was asked to build.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingBackend {
    pub built: Vec<ChartId>,
    pub fail_on: Option<ChartId>,
}

#[cfg(test)]
impl ChartBackend for RecordingBackend {
    fn construct(&mut self, spec: &ChartSpec) -> anyhow::Result<()> {
        self.built.push(spec.id);
        if self.fail_on == Some(spec.id) {
            anyhow::bail!("canvas missing");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts;
    use hsnap_data::testing;

    #[test]
    fn test_constructs_each_chart_once() {
        let specs = charts::all(&testing::dataset());
        let mut registry = ChartRegistry::new();
        let mut backend = RecordingBackend::default();

        assert_eq!(registry.construct_all(&specs, &mut backend), 8);
        assert_eq!(registry.construct_all(&specs, &mut backend), 0);
        assert_eq!(backend.built.len(), 8);
        assert_eq!(registry.len(), 8);
        assert!(registry.is_constructed(ChartId::PublicAssistance));
    }

    #[test]
    fn test_failed_chart_is_not_retried() {
        let specs = charts::all(&testing::dataset());
        let mut registry = ChartRegistry::new();
        let mut backend = RecordingBackend {
            fail_on: Some(ChartId::Covid),
            ..Default::default()
        };

        assert_eq!(registry.construct_all(&specs, &mut backend), 7);
        assert_eq!(registry.construct_all(&specs, &mut backend), 0);
        assert_eq!(backend.built.len(), 8);
    }
}
