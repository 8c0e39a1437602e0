/// Split a document into lines on `'\n'`.
///
/// A trailing separator yields an explicit empty final line, and text without a
/// trailing separator keeps its unterminated tail as the last line. The empty
/// document is a single empty line. Nothing but `'\n'` is interpreted, so a
/// `'\r'` stays part of its line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}
