use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Weakness classes the output scraper knows how to annotate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BugCategory {
    MemoryLeak,
    BufferOverflow,
    NullPointer,
    IntegerOverflow,
    DoubleFree,
    UseAfterFree,
    DivisionByZero,
}

impl BugCategory {
    pub const ALL: [BugCategory; 7] = [
        Self::MemoryLeak,
        Self::BufferOverflow,
        Self::NullPointer,
        Self::IntegerOverflow,
        Self::DoubleFree,
        Self::UseAfterFree,
        Self::DivisionByZero,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::MemoryLeak => "memory_leak",
            Self::BufferOverflow => "buffer_overflow",
            Self::NullPointer => "null_pointer",
            Self::IntegerOverflow => "integer_overflow",
            Self::DoubleFree => "double_free",
            Self::UseAfterFree => "use_after_free",
            Self::DivisionByZero => "division_by_zero",
        }
    }
}

impl fmt::Display for BugCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MemoryLeak => write!(f, "Memory Leak"),
            Self::BufferOverflow => write!(f, "Buffer Overflow"),
            Self::NullPointer => write!(f, "NULL Pointer Dereference"),
            Self::IntegerOverflow => write!(f, "Integer Overflow"),
            Self::DoubleFree => write!(f, "Double Free"),
            Self::UseAfterFree => write!(f, "Use After Free"),
            Self::DivisionByZero => write!(f, "Division by Zero"),
        }
    }
}

impl FromStr for BugCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.key() == s)
            .ok_or_else(|| format!("Unknown bug category: {}", s))
    }
}
