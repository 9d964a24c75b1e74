use serde::{Deserialize, Serialize};

/// Option name to command-line flag, in the order flags are emitted.
pub const OPTION_FLAGS: [(&str, &str); 10] = [
    ("bounds_check", "--bounds-check"),
    ("pointer_check", "--pointer-check"),
    ("memory_leak_check", "--memory-leak-check"),
    ("div_by_zero_check", "--div-by-zero-check"),
    ("signed_overflow_check", "--signed-overflow-check"),
    ("unsigned_overflow_check", "--unsigned-overflow-check"),
    ("intervals", "--intervals"),
    ("k_induction", "--k-induction"),
    ("termination", "--termination"),
    ("heap", "--heap"),
];

/// Checks and techniques requested for one run. Absent fields are off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    pub bounds_check: bool,
    pub pointer_check: bool,
    pub memory_leak_check: bool,
    pub div_by_zero_check: bool,
    pub signed_overflow_check: bool,
    pub unsigned_overflow_check: bool,

    pub intervals: bool,
    pub k_induction: bool,
    pub termination: bool,
    pub heap: bool,
}

impl AnalysisOptions {
    fn values(&self) -> [bool; 10] {
        [
            self.bounds_check,
            self.pointer_check,
            self.memory_leak_check,
            self.div_by_zero_check,
            self.signed_overflow_check,
            self.unsigned_overflow_check,
            self.intervals,
            self.k_induction,
            self.termination,
            self.heap,
        ]
    }

    /// Flags for every enabled option, in [`OPTION_FLAGS`] order.
    pub fn flags(&self) -> Vec<&'static str> {
        OPTION_FLAGS
            .iter()
            .zip(self.values())
            .filter(|(_, enabled)| *enabled)
            .map(|((_, flag), _)| *flag)
            .collect()
    }

    /// Enables an option by its wire name. Returns false for unknown names.
    pub fn enable(&mut self, name: &str) -> bool {
        let slot = match name {
            "bounds_check" => &mut self.bounds_check,
            "pointer_check" => &mut self.pointer_check,
            "memory_leak_check" => &mut self.memory_leak_check,
            "div_by_zero_check" => &mut self.div_by_zero_check,
            "signed_overflow_check" => &mut self.signed_overflow_check,
            "unsigned_overflow_check" => &mut self.unsigned_overflow_check,
            "intervals" => &mut self.intervals,
            "k_induction" => &mut self.k_induction,
            "termination" => &mut self.termination,
            "heap" => &mut self.heap,
            _ => return false,
        };
        *slot = true;
        true
    }

    pub fn with(mut self, name: &str) -> Self {
        self.enable(name);
        self
    }
}
