pub const TRACE_MARKER: &str = "Trace:";

/// Returns the counterexample trace that follows the diagnostic at
/// `start_index`, or an empty string when the tool printed none.
///
/// The trace starts on the line after the first `Trace:` marker found below
/// `start_index` and runs until the first blank line. Indentation of the
/// frames is preserved; only trailing whitespace is dropped.
pub fn extract_trace<S: AsRef<str>>(lines: &[S], start_index: usize) -> String {
    let Some(first) = start_index.checked_add(1) else {
        return String::new();
    };
    if first >= lines.len() {
        return String::new();
    }

    let Some(marker) = lines[first..]
        .iter()
        .position(|line| line.as_ref().contains(TRACE_MARKER))
    else {
        return String::new();
    };

    let frames: Vec<&str> = lines[first + marker + 1..]
        .iter()
        .map(|line| line.as_ref())
        .take_while(|line| !line.trim().is_empty())
        .collect();

    frames.join("\n").trim_end().to_string()
}
