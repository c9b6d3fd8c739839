//! Process-scoped pipeline context.
//!
//! Holds the reference data that every enrichment call needs. Built once per
//! run and passed explicitly; nothing in the crate keeps global state.

use crate::currency::ConversionRateSet;
use crate::reference::ReferenceTable;

/// Read-only reference data for one pipeline run
#[derive(Debug, Clone)]
pub struct PipelineContext {
    reference: ReferenceTable,
    rates: ConversionRateSet,
}

impl PipelineContext {
    pub fn new(reference: ReferenceTable, rates: ConversionRateSet) -> Self {
        Self { reference, rates }
    }

    pub fn reference(&self) -> &ReferenceTable {
        &self.reference
    }

    pub fn rates(&self) -> &ConversionRateSet {
        &self.rates
    }
}
