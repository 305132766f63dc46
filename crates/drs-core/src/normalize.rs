//! Markdown code-fence stripping for model answers.

/// Opening fence some models put before a JSON answer.
const JSON_FENCE: &str = "```json\n";
/// Bare fence marker.
const FENCE: &str = "```";

/// Remove every `` ```json\n `` opener, then every bare `` ``` `` marker.
///
/// Plain substitution: the text is not parsed and anything outside the
/// markers, whitespace included, is kept byte-for-byte.
pub fn strip_code_fences(text: &str) -> String {
    text.replace(JSON_FENCE, "").replace(FENCE, "")
}
