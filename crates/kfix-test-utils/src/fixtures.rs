use kfix_core::{apply_text_edits, Span};
use kfix_ide::QuickFix;

const CARET: &str = "/*caret*/";
const START: &str = "/*start*/";
const END: &str = "/*end*/";

/// Remove the `/*caret*/` marker and return the text plus the caret offset.
pub fn extract_caret(fixture: &str) -> (String, usize) {
    let offset = fixture
        .find(CARET)
        .expect("fixture missing /*caret*/ marker");
    let mut text = String::with_capacity(fixture.len());
    text.push_str(&fixture[..offset]);
    text.push_str(&fixture[offset + CARET.len()..]);
    (text, offset)
}

/// Remove the `/*start*/` and `/*end*/` markers and return the text plus the
/// selected span.
pub fn extract_range(fixture: &str) -> (String, Span) {
    let start = fixture.find(START).expect("fixture missing /*start*/ marker");
    let after_start = start + START.len();
    let end = fixture.find(END).expect("fixture missing /*end*/ marker");
    assert!(end >= after_start, "/*end*/ must come after /*start*/");

    let mut text = String::with_capacity(fixture.len());
    text.push_str(&fixture[..start]);
    text.push_str(&fixture[after_start..end]);
    text.push_str(&fixture[end + END.len()..]);

    (text, Span::new(start, end - START.len()))
}

/// Apply a fix's edits for its own file to `text`.
pub fn apply_fix(text: &str, fix: &QuickFix) -> String {
    apply_text_edits(text, fix.edit.edits_for(fix.file)).expect("fix edits apply cleanly")
}
