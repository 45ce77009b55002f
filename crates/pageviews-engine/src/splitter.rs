/// Normalize every line terminator (`"\r\n"` or bare `"\r"`) to a single
/// newline, then split on it.
///
/// Interior empty lines are preserved, as is a trailing empty line when the
/// text ends with a terminator (recorded fixtures depend on this split
/// convention). Interior whitespace is left untouched.
pub fn split_lines(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    normalized.split('\n').map(str::to_string).collect()
}
