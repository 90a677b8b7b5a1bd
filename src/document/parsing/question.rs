//! Question segmentation
//!
//! Questions are runs of consecutive non-empty paragraphs inside the first
//! `<div>` of the document. Empty paragraphs (including a lone `&nbsp;`)
//! separate one question from the next.

use markup5ever_rcdom::Handle;

use super::dom::{find_all, find_first, text_content};

const NBSP: &str = "\u{a0}";

pub(crate) fn is_delimiter(text: &str) -> bool {
    text.is_empty() || text == NBSP
}

/// Group paragraph texts into questions
pub(crate) fn segment_paragraphs<I, S>(paragraphs: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut questions = Vec::new();
    let mut current = String::new();

    for paragraph in paragraphs {
        let text = paragraph.as_ref().trim();

        if is_delimiter(text) {
            flush(&mut current, &mut questions);
            continue;
        }

        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(text);
    }

    // Last question may not be followed by a delimiter
    flush(&mut current, &mut questions);
    questions
}

fn flush(current: &mut String, questions: &mut Vec<String>) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        questions.push(trimmed.to_string());
    }
    current.clear();
}

/// Extract questions from the first `<div>` in document order
pub(crate) fn extract_questions(root: &Handle) -> Vec<String> {
    let Some(container) = find_first(root, "div") else {
        return Vec::new();
    };

    let paragraphs: Vec<String> = find_all(&container, "p").iter().map(text_content).collect();
    segment_paragraphs(paragraphs)
}
