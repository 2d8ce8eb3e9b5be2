// WHY: standalone whitespace normalization shared by the segmenter and callers that need
// the same view of a sentence without re-segmenting

/// Collapse every whitespace run (including `\r\n` and tabs) into a single space and trim
pub fn normalize_sentence(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    normalize_sentence_into(text, &mut result);
    result
}

/// Normalize into a supplied buffer so batch callers can reuse one allocation
pub fn normalize_sentence_into(text: &str, buffer: &mut String) {
    buffer.clear();
    buffer.reserve(text.len());

    let mut prev_was_space = true; // swallows leading whitespace

    for ch in text.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                buffer.push(' ');
                prev_was_space = true;
            }
        } else {
            buffer.push(ch);
            prev_was_space = false;
        }
    }

    if buffer.ends_with(' ') {
        buffer.pop();
    }
}
