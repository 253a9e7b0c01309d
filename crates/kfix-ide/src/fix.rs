use std::collections::HashMap;

use kfix_core::{FileId, LineIndex, WorkspaceEdit};
use lsp_types::{CodeAction, CodeActionKind, Uri};

/// A proposed fix: a title for the user and the edit that implements it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuickFix {
    pub title: String,
    /// Stable id of the fix family, matched against `quick_fixes.disabled`.
    pub family: &'static str,
    /// The file `edit` applies to. Not necessarily the file the diagnostic
    /// was reported in.
    pub file: FileId,
    pub edit: WorkspaceEdit,
    pub is_preferred: bool,
}

impl QuickFix {
    /// Convert into an LSP `quickfix` code action for `uri`, whose current
    /// contents are `text`. Only edits to this fix's own file are included.
    pub fn to_code_action(&self, uri: &Uri, text: &str) -> CodeAction {
        let index = LineIndex::new(text);
        let edits: Vec<lsp_types::TextEdit> = self
            .edit
            .edits_for(self.file)
            .iter()
            .map(|edit| lsp_types::TextEdit {
                range: index.range(text, edit.range).into(),
                new_text: edit.replacement.clone(),
            })
            .collect();

        let mut changes = HashMap::new();
        changes.insert(uri.clone(), edits);

        CodeAction {
            title: self.title.clone(),
            kind: Some(CodeActionKind::QUICKFIX),
            edit: Some(lsp_types::WorkspaceEdit {
                changes: Some(changes),
                document_changes: None,
                change_annotations: None,
            }),
            is_preferred: self.is_preferred.then_some(true),
            ..CodeAction::default()
        }
    }
}
