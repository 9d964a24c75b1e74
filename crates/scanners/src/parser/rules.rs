//! Ordered diagnostic rules.
//!
//! Each rule pairs a line predicate with the record it builds. The parser
//! walks the rules in order and stops at the first predicate that accepts a
//! line, so a line yields at most one record. Adding a category means adding
//! a rule, not another branch.

use crate::core::{classify, cwe, BugCategory, BugRecord};
use once_cell::sync::Lazy;
use regex::Regex;

/// `[location] short name: description`. Both middle groups are greedy, so
/// the description is whatever follows the last `: `.
static DIAGNOSTIC_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(.*)\] (.*): (.*)").expect("diagnostic line pattern"));

static STANDARD_RULES: Lazy<RuleSet> = Lazy::new(RuleSet::build_standard);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CweAssignment {
    /// Category already known from the property class.
    Fixed(BugCategory),
    /// Derived from the description text.
    Classified,
    Omitted,
}

#[derive(Debug, Clone)]
enum LineMatcher {
    /// Property tag such as `main.pointer_dereference.3`.
    Tag(Regex),
    /// Every keyword must appear somewhere on the line.
    Keywords(&'static [&'static str]),
}

#[derive(Debug, Clone)]
pub struct DiagnosticRule {
    id: &'static str,
    bug_type: &'static str,
    matcher: LineMatcher,
    cwe: CweAssignment,
}

impl DiagnosticRule {
    /// Matches lines carrying a `<property>.<n>` tag component. The property
    /// must start a dotted component, so `overflow` does not fire on
    /// `signed_overflow.1`.
    pub fn tag(
        id: &'static str,
        property: &str,
        bug_type: &'static str,
        cwe: CweAssignment,
    ) -> Result<Self, regex::Error> {
        let pattern = format!(r"(?:^|[\s\[.]){}\.\d+", regex::escape(property));
        Ok(Self {
            id,
            bug_type,
            matcher: LineMatcher::Tag(Regex::new(&pattern)?),
            cwe,
        })
    }

    pub fn keywords(
        id: &'static str,
        keywords: &'static [&'static str],
        bug_type: &'static str,
        cwe: CweAssignment,
    ) -> Self {
        Self {
            id,
            bug_type,
            matcher: LineMatcher::Keywords(keywords),
            cwe,
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn bug_type(&self) -> &'static str {
        self.bug_type
    }

    pub fn cwe(&self) -> CweAssignment {
        self.cwe
    }

    pub fn matches(&self, line: &str) -> bool {
        match &self.matcher {
            LineMatcher::Tag(pattern) => pattern.is_match(line),
            LineMatcher::Keywords(keywords) => keywords.iter().all(|k| line.contains(k)),
        }
    }

    /// Builds the record for a line this rule accepted. `None` when the line
    /// does not have the three-part diagnostic shape.
    pub fn build(&self, line: &str) -> Option<BugRecord> {
        let captures = DIAGNOSTIC_LINE.captures(line)?;
        let location = captures.get(1)?.as_str();
        let description = captures.get(3)?.as_str();

        let category = match self.cwe {
            CweAssignment::Fixed(category) => Some(category),
            CweAssignment::Classified => classify(description),
            CweAssignment::Omitted => None,
        };

        let mut record = BugRecord::new(self.bug_type, location, description);
        if let Some(category) = category {
            record = record.with_cwe(cwe::lookup(category));
        }
        Some(record)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<DiagnosticRule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The 2LS property classes, in priority order.
    pub fn standard() -> &'static RuleSet {
        &STANDARD_RULES
    }

    fn build_standard() -> Self {
        let tagged = [
            (
                "pointer-dereference",
                "pointer_dereference",
                "Pointer Dereference",
                CweAssignment::Classified,
            ),
            (
                "memory-leak",
                "memory_leak",
                "Memory Leak",
                CweAssignment::Fixed(BugCategory::MemoryLeak),
            ),
            (
                "invalid-object",
                "valid_object",
                "Invalid Memory Access",
                CweAssignment::Classified,
            ),
            (
                "division-by-zero",
                "division-by-zero",
                "Division by Zero",
                CweAssignment::Fixed(BugCategory::DivisionByZero),
            ),
            (
                "overflow",
                "overflow",
                "Integer Overflow",
                CweAssignment::Fixed(BugCategory::IntegerOverflow),
            ),
        ];

        let mut rules = Self::new();
        for (id, property, bug_type, cwe) in tagged {
            // Escaped literal plus a fixed suffix always compiles.
            let rule = DiagnosticRule::tag(id, property, bug_type, cwe)
                .expect("property tag pattern");
            rules.push(rule);
        }

        rules.push(DiagnosticRule::keywords(
            "assertion",
            &["FAILURE", "assertion"],
            "Assertion Failure",
            CweAssignment::Omitted,
        ));
        rules
    }

    pub fn push(&mut self, rule: DiagnosticRule) {
        self.rules.push(rule);
    }

    pub fn with_rule(mut self, rule: DiagnosticRule) -> Self {
        self.push(rule);
        self
    }

    pub fn first_match(&self, line: &str) -> Option<&DiagnosticRule> {
        self.rules.iter().find(|rule| rule.matches(line))
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticRule> {
        self.rules.iter()
    }

    pub fn list_ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.id).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_order() {
        assert_eq!(
            RuleSet::standard().list_ids(),
            vec![
                "pointer-dereference",
                "memory-leak",
                "invalid-object",
                "division-by-zero",
                "overflow",
                "assertion"
            ]
        );
    }

    #[test]
    fn test_tag_requires_numeric_suffix() {
        let rules = RuleSet::standard();
        assert!(rules.first_match("[main.memory_leak.12] leak: x").is_some());
        assert!(rules.first_match("[main.memory_leak.x] leak: x").is_none());
        assert!(rules.first_match("memory_leak detected").is_none());
    }

    #[test]
    fn test_tag_component_boundary() {
        let rules = RuleSet::standard();
        let hit = rules.first_match("[main.overflow.2] line 4 arithmetic overflow: FAILURE");
        assert_eq!(hit.map(|r| r.id()), Some("overflow"));
        assert!(rules.first_match("[main.signed_overflow.2] x: y").is_none());
    }

    #[test]
    fn test_tag_outside_brackets() {
        let rules = RuleSet::standard();
        let hit = rules.first_match("[main.c:7] pointer_dereference.1: NULL pointer dereference");
        assert_eq!(hit.map(|r| r.id()), Some("pointer-dereference"));
    }

    #[test]
    fn test_first_rule_wins_on_mixed_line() {
        let line = "[main.pointer_dereference.1] see main.overflow.3: FAILURE assertion";
        let rule = RuleSet::standard().first_match(line).unwrap();
        assert_eq!(rule.bug_type(), "Pointer Dereference");
    }

    #[test]
    fn test_build_splits_three_parts() {
        let rule = RuleSet::standard().first_match("[f.memory_leak.1] leak: gone").unwrap();
        let record = rule.build("[f.memory_leak.1] leak: gone").unwrap();
        assert_eq!(record.source_location, "f.memory_leak.1");
        assert_eq!(record.description, "gone");
        assert_eq!(record.cwe_id.as_deref(), Some("401"));
    }

    #[test]
    fn test_build_rejects_malformed_line() {
        let rule = RuleSet::standard().first_match("main.memory_leak.1 leak gone").unwrap();
        assert!(rule.build("main.memory_leak.1 leak gone").is_none());
    }

    #[test]
    fn test_classified_rule_without_category() {
        let line = "[main.valid_object.1] check: object bounds";
        let record = RuleSet::standard().first_match(line).unwrap().build(line).unwrap();
        assert_eq!(record.bug_type, "Invalid Memory Access");
        assert!(record.cwe_id.is_none());
    }

    #[test]
    fn test_custom_rule_set() -> Result<(), regex::Error> {
        let rules = RuleSet::new().with_rule(DiagnosticRule::tag(
            "bounds",
            "array_bounds",
            "Array Bounds",
            CweAssignment::Fixed(BugCategory::BufferOverflow),
        )?);

        let line = "[main.array_bounds.4] upper bound: dynamic_object1[5]";
        let record = rules.first_match(line).unwrap().build(line).unwrap();
        assert_eq!(record.cwe_id.as_deref(), Some("120"));
        assert_eq!(rules.len(), 1);
        Ok(())
    }
}
