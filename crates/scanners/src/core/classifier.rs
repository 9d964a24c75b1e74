use crate::core::BugCategory;

/// Ordered substring rules. Several needles can co-occur in one message, so
/// the first rule that hits decides the category.
const CLASSIFICATION_RULES: &[(&[&str], BugCategory)] = &[
    (&["memory leak"], BugCategory::MemoryLeak),
    (&["buffer overflow", "array bounds"], BugCategory::BufferOverflow),
    (&["NULL", "null pointer"], BugCategory::NullPointer),
    (
        &["integer overflow", "arithmetic overflow"],
        BugCategory::IntegerOverflow,
    ),
    (&["double free"], BugCategory::DoubleFree),
    (&["use after free", "deallocated"], BugCategory::UseAfterFree),
    (&["division by zero"], BugCategory::DivisionByZero),
];

/// Maps a free-text diagnostic to a weakness category. Matching is
/// case-sensitive; `None` means "no CWE annotation", never a failure.
pub fn classify(description: &str) -> Option<BugCategory> {
    CLASSIFICATION_RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| description.contains(needle)))
        .map(|(_, category)| *category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_rule() {
        let cases = [
            ("possible memory leak in main", BugCategory::MemoryLeak),
            ("buffer overflow on dest", BugCategory::BufferOverflow),
            ("array bounds violated", BugCategory::BufferOverflow),
            ("dereference failure: pointer NULL", BugCategory::NullPointer),
            ("null pointer in list walk", BugCategory::NullPointer),
            ("integer overflow on +", BugCategory::IntegerOverflow),
            ("arithmetic overflow on signed *", BugCategory::IntegerOverflow),
            ("double free of x", BugCategory::DoubleFree),
            ("use after free of x", BugCategory::UseAfterFree),
            ("dereference failure: deallocated dynamic object", BugCategory::UseAfterFree),
            ("division by zero in a / b", BugCategory::DivisionByZero),
        ];

        for (text, expected) in cases {
            assert_eq!(classify(text), Some(expected), "{}", text);
        }
    }

    #[test]
    fn test_first_rule_wins() {
        assert_eq!(
            classify("memory leak after double free"),
            Some(BugCategory::MemoryLeak)
        );
        assert_eq!(
            classify("NULL check missing before use after free"),
            Some(BugCategory::NullPointer)
        );
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(classify("Memory Leak"), None);
        assert_eq!(classify("null"), None);
    }

    #[test]
    fn test_unmatched_is_none() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("assertion x > 0"), None);
    }
}
