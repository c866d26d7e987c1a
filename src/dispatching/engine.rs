//! Rule engine for multi-key process selection.
//!
//! Rules are applied in sequence: a later rule is consulted only when
//! every earlier rule ties. When all rules tie, the lower process id
//! wins, so selection is always deterministic.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{SchedulingContext, SelectionRule};
use crate::models::ProcessState;

/// A composable rule engine for process selection.
///
/// # Example
/// ```
/// use u_cpu_schedule::dispatching::RuleEngine;
/// use u_cpu_schedule::dispatching::rules;
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::HighestPriority)
///     .with_rule(rules::EarliestArrival);
/// assert_eq!(engine.rule_names(), vec!["PRIORITY", "ARRIVAL"]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn SelectionRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine (orders by process id only).
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule, consulted only when every earlier rule ties.
    pub fn with_rule<R: SelectionRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Returns the index of the best process that is ready at
    /// `context.current_time`, or `None` if nothing is ready.
    pub fn select_ready(&self, states: &[ProcessState], context: &SchedulingContext) -> Option<usize> {
        states
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_ready(context.current_time))
            .min_by(|(_, a), (_, b)| self.compare(a, b, context))
            .map(|(i, _)| i)
    }

    fn compare(&self, a: &ProcessState, b: &ProcessState, context: &SchedulingContext) -> Ordering {
        for rule in &self.rules {
            let ord = rule.evaluate(a, context).cmp(&rule.evaluate(b, context));
            if ord != Ordering::Equal {
                return ord;
            }
        }
        a.pid().cmp(&b.pid())
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}
