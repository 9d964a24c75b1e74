//! Common Weakness Enumeration entries for each [`BugCategory`].
//!
//! The table is plain constant data: one entry per category, in the same
//! order as [`BugCategory::ALL`]. Nothing mutates it after compilation.

use crate::core::BugCategory;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CweEntry {
    pub category: BugCategory,
    #[serde(rename = "cwe")]
    pub identifier: &'static str,
    pub description: &'static str,
}

impl CweEntry {
    pub fn reference_url(&self) -> String {
        format!(
            "https://cwe.mitre.org/data/definitions/{}.html",
            self.identifier
        )
    }

    pub fn label(&self) -> String {
        format!("CWE-{}", self.identifier)
    }
}

pub static CWE_TABLE: [CweEntry; 7] = [
    CweEntry {
        category: BugCategory::MemoryLeak,
        identifier: "401",
        description: "Memory Leak - Failure to release memory before the end of a function can lead to resource exhaustion.",
    },
    CweEntry {
        category: BugCategory::BufferOverflow,
        identifier: "120",
        description: "Buffer Overflow - Writing outside the bounds of allocated memory can lead to data corruption, crashes, or code execution.",
    },
    CweEntry {
        category: BugCategory::NullPointer,
        identifier: "476",
        description: "NULL Pointer Dereference - Attempting to read from or write to memory referenced by a NULL pointer can lead to crashes or undefined behavior.",
    },
    CweEntry {
        category: BugCategory::IntegerOverflow,
        identifier: "190",
        description: "Integer Overflow or Wraparound - When an integer value is incremented beyond its maximum value, it wraps around to a very small or negative number.",
    },
    CweEntry {
        category: BugCategory::DoubleFree,
        identifier: "415",
        description: "Double Free - Calling free() twice on the same memory address can lead to memory corruption and potentially exploitable vulnerabilities.",
    },
    CweEntry {
        category: BugCategory::UseAfterFree,
        identifier: "416",
        description: "Use After Free - Referencing memory after it has been freed can lead to crashes or arbitrary code execution.",
    },
    CweEntry {
        category: BugCategory::DivisionByZero,
        identifier: "369",
        description: "Divide By Zero - Division operations where the denominator can be zero can lead to crashes or undefined behavior.",
    },
];

/// Total over the closed enum: every category has exactly one entry.
pub fn lookup(category: BugCategory) -> &'static CweEntry {
    match category {
        BugCategory::MemoryLeak => &CWE_TABLE[0],
        BugCategory::BufferOverflow => &CWE_TABLE[1],
        BugCategory::NullPointer => &CWE_TABLE[2],
        BugCategory::IntegerOverflow => &CWE_TABLE[3],
        BugCategory::DoubleFree => &CWE_TABLE[4],
        BugCategory::UseAfterFree => &CWE_TABLE[5],
        BugCategory::DivisionByZero => &CWE_TABLE[6],
    }
}
