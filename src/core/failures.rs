//! Run-scoped list of failing spec results, in order of occurrence.

use crate::core::models::SpecResult;

/// Collects failing results during a run. The list only grows until
/// [`FailureAggregator::clear`] is called at run completion.
///
/// 在运行期间收集失败结果。列表只增不减，直到运行完成时调用 `clear`。
#[derive(Debug, Clone, Default)]
pub struct FailureAggregator {
    records: Vec<SpecResult>,
}

impl FailureAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: SpecResult) {
        self.records.push(result);
    }

    pub fn records(&self) -> &[SpecResult] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
