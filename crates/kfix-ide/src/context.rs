use std::collections::BTreeMap;

use kfix_config::QuickFixConfig;
use kfix_core::{FileId, Span};
use kfix_types::{ClassHierarchy, ClassStore, FunctionDescriptor, TypeEquality};

/// A modifier keyword in source, e.g. `override` or `open`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Modifier {
    pub keyword: String,
    pub span: Span,
}

/// A function declaration as written in a file: its resolved descriptor plus
/// the source spans fixes need to edit it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionDeclaration {
    pub descriptor: FunctionDescriptor,
    /// Span of the whole declaration header, from the first modifier to the end
    /// of the return type (or parameter list).
    pub header_span: Span,
    pub fun_keyword: Span,
    pub name_span: Span,
    /// Includes the parentheses.
    pub parameter_list_span: Span,
    /// The type after `:`, excluding the colon.
    pub return_type_span: Option<Span>,
    pub modifiers: Vec<Modifier>,
}

impl FunctionDeclaration {
    pub fn modifier(&self, keyword: &str) -> Option<&Modifier> {
        self.modifiers.iter().find(|m| m.keyword == keyword)
    }
}

/// Declaration and supertype lookup, backed by the compiler frontend.
pub trait DeclarationProvider {
    fn hierarchy(&self) -> &dyn ClassHierarchy;

    /// The function declaration whose header contains `offset`.
    fn function_at(&self, file: FileId, offset: usize) -> Option<FunctionDeclaration>;

    /// Where `function` is declared in source. `None` for library members.
    fn declaration_of(&self, function: &FunctionDescriptor) -> Option<(FileId, FunctionDeclaration)>;
}

/// Everything a fix factory may consult. Passed explicitly; fixes hold no
/// state of their own.
#[derive(Clone, Copy)]
pub struct FixContext<'a> {
    pub file: FileId,
    pub text: &'a str,
    pub declarations: &'a dyn DeclarationProvider,
    pub types: &'a dyn TypeEquality,
    pub config: &'a QuickFixConfig,
}

/// A [`DeclarationProvider`] over a fixed set of declarations.
#[derive(Debug, Default)]
pub struct InMemoryDeclarations {
    classes: ClassStore,
    functions: BTreeMap<FileId, Vec<FunctionDeclaration>>,
}

impl InMemoryDeclarations {
    pub fn new(classes: ClassStore) -> Self {
        Self {
            classes,
            functions: BTreeMap::new(),
        }
    }

    pub fn add_function(&mut self, file: FileId, declaration: FunctionDeclaration) {
        self.functions.entry(file).or_default().push(declaration);
    }

    pub fn classes_mut(&mut self) -> &mut ClassStore {
        &mut self.classes
    }
}

impl DeclarationProvider for InMemoryDeclarations {
    fn hierarchy(&self) -> &dyn ClassHierarchy {
        &self.classes
    }

    fn function_at(&self, file: FileId, offset: usize) -> Option<FunctionDeclaration> {
        self.functions
            .get(&file)?
            .iter()
            .find(|decl| {
                decl.header_span.contains(offset) || decl.header_span.end == offset
            })
            .cloned()
    }

    fn declaration_of(&self, function: &FunctionDescriptor) -> Option<(FileId, FunctionDeclaration)> {
        self.functions.iter().find_map(|(file, declarations)| {
            declarations
                .iter()
                .find(|decl| decl.descriptor == *function)
                .map(|decl| (*file, decl.clone()))
        })
    }
}
