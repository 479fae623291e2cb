/// Normalize `\r\n` and lone `\r` to `\n`.
/// Applied when presenting instructions; stored text is left untouched.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Split instructions into display steps, one per line
pub fn instruction_steps(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    normalize_line_endings(text)
        .split('\n')
        .map(str::to_string)
        .collect()
}
