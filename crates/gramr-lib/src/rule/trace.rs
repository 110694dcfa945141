//! Debug logging around rule applications.

use gramr_core::RuleResult;

use super::Rule;

impl<E: 'static, R: 'static> Rule<E, R> {
    /// Emit `log` records for every application of this rule.
    ///
    /// `label` is entered on the run's context for the duration of the call,
    /// so nested traced rules log their full path. The result is untouched;
    /// errors are not relabelled (use [`path`](Rule::path) for that).
    pub fn traced(self, label: impl Into<String>) -> Self {
        let label = label.into();
        Rule::of(move |input, pos| {
            let context = input.context();
            let _guard = context.enter(label.as_str());

            if log::log_enabled!(log::Level::Debug) {
                log::debug!("{} at {pos}: trying", context.path().join(" > "));
            }

            let result = self.apply(input, pos);
            match &result {
                RuleResult::Accepted { pos: end, .. } => {
                    log::debug!("{label} at {pos}: matched up to {end}");
                }
                RuleResult::Rejected { errors } => {
                    log::debug!("{label} at {pos}: rejected with {} error(s)", errors.len());
                }
            }
            result
        })
    }
}
