use std::fmt;

/// The four C# declaration forms a file can be named after.
///
/// The set is closed by the grammar; every consumer matches exhaustively so
/// adding a variant is a compile error everywhere it matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Class,
    Interface,
    Struct,
    Enum,
}

impl TypeKind {
    /// Map a tree-sitter node kind to a declaration kind.
    pub(crate) fn from_node_kind(kind: &str) -> Option<Self> {
        match kind {
            "class_declaration" => Some(TypeKind::Class),
            "interface_declaration" => Some(TypeKind::Interface),
            "struct_declaration" => Some(TypeKind::Struct),
            "enum_declaration" => Some(TypeKind::Enum),
            _ => None,
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeKind::Class => write!(f, "class"),
            TypeKind::Interface => write!(f, "interface"),
            TypeKind::Struct => write!(f, "struct"),
            TypeKind::Enum => write!(f, "enum"),
        }
    }
}

/// One type declaration discovered in a source file.
///
/// Lives only for the duration of a single parse-and-resolve pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    pub kind: TypeKind,
    pub name: String,
    /// True only for class declarations carrying a `partial` modifier.
    pub is_partial: bool,
}
