//! Type extraction from C# source text.
//!
//! Parses a file's content with tree-sitter and collects every class,
//! interface, struct, and enum declaration found anywhere in the syntax
//! tree - nested types included, so a file with one outer and one nested
//! type counts as declaring two types. Input that cannot be parsed yields
//! an empty sequence rather than an error: generated files and malformed
//! drafts are expected inputs, not failures.

use anyhow::{Context, Result};
use tree_sitter::{Node, Parser};

mod declaration;

pub use declaration::{TypeDeclaration, TypeKind};

/// A reusable C# parser.
pub struct Extractor {
    parser: Parser,
}

impl Extractor {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_c_sharp::LANGUAGE.into())
            .context("failed to load the C# grammar")?;
        Ok(Self { parser })
    }

    /// Collect the type declarations in `source`, in document order.
    ///
    /// # Examples
    ///
    /// ```
    /// use typenamer::extract::Extractor;
    ///
    /// let mut extractor = Extractor::new().unwrap();
    /// let declarations = extractor.extract_types("class Foo {}");
    /// assert_eq!(declarations.len(), 1);
    /// assert_eq!(declarations[0].name, "Foo");
    /// ```
    pub fn extract_types(&mut self, source: &str) -> Vec<TypeDeclaration> {
        let Some(tree) = self.parser.parse(source, None) else {
            return Vec::new();
        };

        let mut declarations = Vec::new();
        collect(tree.root_node(), source.as_bytes(), &mut declarations);
        declarations
    }
}

fn collect(node: Node, source: &[u8], declarations: &mut Vec<TypeDeclaration>) {
    if let Some(kind) = TypeKind::from_node_kind(node.kind()) {
        if let Some(declaration) = read_declaration(node, source, kind) {
            declarations.push(declaration);
        }
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect(child, source, declarations);
    }
}

fn read_declaration(node: Node, source: &[u8], kind: TypeKind) -> Option<TypeDeclaration> {
    let name_node = node.child_by_field_name("name")?;
    let name = name_node.utf8_text(source).ok()?.to_string();
    if name.is_empty() {
        return None;
    }

    // Only classes support the partial modifier in the grammar we care about.
    let is_partial = kind == TypeKind::Class && has_partial_modifier(node, source);

    Some(TypeDeclaration {
        kind,
        name,
        is_partial,
    })
}

fn has_partial_modifier(node: Node, source: &[u8]) -> bool {
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .filter(|child| child.kind() == "modifier")
        .any(|child| child.utf8_text(source) == Ok("partial"))
}
