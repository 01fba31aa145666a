//! Merge pass
//!
//! Counters, charges and states are rendered one at a time, so a counter followed by a state
//! comes out as two subscripts: `<sub>2</sub><sub>(aq)</sub>`. The merge pass joins such runs
//! into one span, `<sub>2(aq)</sub>`, which is what a typesetter would produce by hand.
//!
//! Runs are matched maximally: `a b c` of the same kind becomes one span, never two. Merging
//! never creates a new adjacency, so running the pass twice changes nothing.

use crate::fragment::MergeRule;
use regex::{Captures, Regex};

/// One compiled [`MergeRule`].
#[derive(Debug, Clone)]
pub struct SpanMerger {
    open: &'static str,
    close: &'static str,
    span: Regex,
    run: Regex,
}

impl SpanMerger {
    pub fn new(rule: &MergeRule) -> Result<Self, regex::Error> {
        let open = regex::escape(rule.open);
        let close = regex::escape(rule.close);
        let span = Regex::new(&format!("{open}({}+){close}", rule.content))?;
        let run = Regex::new(&format!("(?:{open}{}+{close}){{2,}}", rule.content))?;
        Ok(Self {
            open: rule.open,
            close: rule.close,
            span,
            run,
        })
    }

    /// Replaces every run of two or more adjacent spans with a single span.
    pub fn merge(&self, text: &str) -> String {
        self.run
            .replace_all(text, |run: &Captures| {
                let body: String = self
                    .span
                    .captures_iter(&run[0])
                    .map(|span| span[1].to_string())
                    .collect();
                format!("{}{}{}", self.open, body, self.close)
            })
            .into_owned()
    }
}

/// Compiles every rule of a backend.
pub fn compile_rules(rules: &[MergeRule]) -> Result<Vec<SpanMerger>, regex::Error> {
    rules.iter().map(SpanMerger::new).collect()
}

/// Applies the mergers in order.
pub fn merge_all(mergers: &[SpanMerger], text: String) -> String {
    mergers
        .iter()
        .fold(text, |text, merger| merger.merge(&text))
}
