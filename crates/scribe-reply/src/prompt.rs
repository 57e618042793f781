use crate::types::ReplyRequest;

/// Fixed instruction preamble for every prompt
const PREAMBLE: &str =
    "Generate a professional email reply for the following email content. Please do not generate the subject line. ";

/// Marker separating the instruction from the quoted email
const ORIGINAL_EMAIL_MARKER: &str = "\nOriginal Email: \n";

/// Build the prompt sent to the provider
///
/// The prompt is the fixed preamble, an optional `"Use a {tone} tone. "`
/// clause when a non-empty tone is given, the original-email marker, and
/// the raw email content appended unmodified. The tone is reproduced
/// verbatim; no sanitization or allow-list applies. Escaping is left to
/// the JSON encoding of the outbound body.
pub fn build_prompt(request: &ReplyRequest) -> String {
    let mut prompt = String::from(PREAMBLE);

    if let Some(tone) = request.tone.as_deref().filter(|t| !t.is_empty()) {
        prompt.push_str("Use a ");
        prompt.push_str(tone);
        prompt.push_str(" tone. ");
    }

    prompt.push_str(ORIGINAL_EMAIL_MARKER);
    prompt.push_str(&request.email_content);
    prompt
}
