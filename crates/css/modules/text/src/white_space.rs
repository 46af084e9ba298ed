//! White space processing.
//!
//! Spec: §4 White Space Processing & Control Characters

use crate::style::WhiteSpace;

/// Collapse ASCII whitespace runs to a single space and trim.
pub fn collapse_whitespace(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut in_whitespace = false;
    for character in input.chars() {
        if character.is_ascii_whitespace() {
            if !in_whitespace {
                output.push(' ');
                in_whitespace = true;
            }
        } else {
            output.push(character);
            in_whitespace = false;
        }
    }
    output.trim().to_owned()
}

/// Apply `white-space` processing and split the text at forced line breaks.
///
/// Each returned paragraph is laid out independently; a paragraph may be empty
/// (for example a blank line inside `pre`).
pub fn process_white_space(text: &str, mode: WhiteSpace) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    match mode {
        WhiteSpace::Normal | WhiteSpace::Nowrap => {
            let collapsed = collapse_whitespace(&normalized);
            if collapsed.is_empty() {
                Vec::new()
            } else {
                vec![collapsed]
            }
        }
        WhiteSpace::Pre | WhiteSpace::PreWrap => {
            normalized.split('\n').map(str::to_owned).collect()
        }
        WhiteSpace::PreLine => normalized
            .split('\n')
            .map(|segment| collapse_spaces_and_tabs(segment).trim().to_owned())
            .collect(),
    }
}

/// Collapse runs of spaces/tabs without touching other characters.
fn collapse_spaces_and_tabs(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut previous_space = false;
    for character in input.chars() {
        let is_space = character == ' ' || character == '\t';
        if is_space {
            if !previous_space {
                output.push(' ');
            }
        } else {
            output.push(character);
        }
        previous_space = is_space;
    }
    output
}
