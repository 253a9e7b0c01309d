use kfix_core::Span;
use kfix_ide::{FunctionDeclaration, Modifier};
use kfix_types::FunctionDescriptor;

const MODIFIERS: &[&str] = &[
    "public", "protected", "private", "internal", "open", "final", "abstract", "override",
    "suspend", "inline", "operator", "infix", "tailrec", "external",
];

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn skip_ws(text: &str, mut offset: usize) -> usize {
    let bytes = text.as_bytes();
    while offset < bytes.len() && bytes[offset].is_ascii_whitespace() {
        offset += 1;
    }
    offset
}

/// Locate the header of the first `fun <name>` declaration at or after `from`
/// and pair it with `descriptor`.
///
/// This is a fixture helper, not a parser: it expects modifiers on the same
/// line as `fun` and a return type (if any) ending at `{`, `=` or the end of
/// the line.
pub fn scan_function(text: &str, from: usize, descriptor: FunctionDescriptor) -> FunctionDeclaration {
    let needle = format!("fun {}", descriptor.name);
    let fun_start = text
        .match_indices(&needle)
        .map(|(idx, _)| idx)
        .filter(|idx| *idx >= from)
        .find(|idx| {
            let after = idx + needle.len();
            (*idx == 0 || !is_ident_byte(text.as_bytes()[idx - 1]))
                && text.as_bytes().get(after).map_or(true, |b| !is_ident_byte(*b))
        })
        .unwrap_or_else(|| panic!("fixture has no `{needle}`"));
    let fun_keyword = Span::new(fun_start, fun_start + 3);

    let name_start = skip_ws(text, fun_keyword.end);
    let name_span = Span::new(name_start, name_start + descriptor.name.as_str().len());

    let open = skip_ws(text, name_span.end);
    assert_eq!(text.as_bytes()[open], b'(', "expected `(` after function name");
    let mut depth = 0usize;
    let mut close = open;
    for (idx, b) in text.bytes().enumerate().skip(open) {
        match b {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    close = idx;
                    break;
                }
            }
            _ => {}
        }
    }
    let parameter_list_span = Span::new(open, close + 1);

    let mut return_type_span = None;
    let after_params = skip_ws(text, parameter_list_span.end);
    if text.as_bytes().get(after_params) == Some(&b':') {
        let ty_start = skip_ws(text, after_params + 1);
        let rest = &text[ty_start..];
        let ty_len = rest
            .find(|c: char| c == '{' || c == '=' || c == '\n')
            .unwrap_or(rest.len());
        let ty_end = ty_start + rest[..ty_len].trim_end().len();
        return_type_span = Some(Span::new(ty_start, ty_end));
    }

    let line_start = text[..fun_start].rfind('\n').map_or(0, |idx| idx + 1);
    let mut modifiers = Vec::new();
    let mut offset = line_start;
    for word in text[line_start..fun_start].split_whitespace() {
        let start = offset + text[offset..].find(word).expect("word comes from this slice");
        offset = start + word.len();
        if MODIFIERS.contains(&word) {
            modifiers.push(Modifier {
                keyword: word.to_owned(),
                span: Span::new(start, offset),
            });
        }
    }

    let header_start = modifiers.first().map_or(fun_start, |m| m.span.start);
    let header_end = return_type_span.map_or(parameter_list_span.end, |span| span.end);

    FunctionDeclaration {
        descriptor,
        header_span: Span::new(header_start, header_end),
        fun_keyword,
        name_span,
        parameter_list_span,
        return_type_span,
        modifiers,
    }
}
