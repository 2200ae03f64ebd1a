/// Java syntactic categories distinguished by the indentation handlers.
///
/// Grammar kinds that no handler cares about collapse into [`TokenType::Other`];
/// reserved words without a dedicated variant become [`TokenType::Keyword`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    CompilationUnit,
    PackageDef,
    Import,

    // Type declarations
    ClassDef,
    InterfaceDef,
    EnumDef,
    AnnotationDef,
    RecordDef,
    ObjBlock,
    EnumConstant,
    EnumBodyDeclarations,

    // Members
    MethodDef,
    CtorDef,
    AnnotationFieldDef,
    FieldDef,
    VariableDef,
    VariableDeclarator,
    Modifiers,
    Annotation,
    TypeParameters,
    Parameters,
    Throws,
    ExtendsClause,
    ImplementsClause,
    PermitsClause,
    StaticInit,

    // Statements
    Slist,
    LiteralIf,
    LiteralElse,
    LiteralFor,
    ForEach,
    LiteralWhile,
    LiteralDo,
    LiteralTry,
    Resources,
    LiteralCatch,
    CatchParameter,
    LiteralFinally,
    LiteralSwitch,
    SwitchBlock,
    CaseGroup,
    SwitchRule,
    SwitchLabel,
    LiteralSynchronized,
    LabeledStat,
    ExprStatement,
    LiteralReturn,
    LiteralBreak,
    LiteralContinue,
    LiteralThrow,
    LiteralYield,
    LiteralAssert,

    // Expressions
    MethodCall,
    CtorCall,
    LiteralNew,
    ArrayCreation,
    ArrayInit,
    Assign,
    Lambda,
    ParenExpr,
    ArgumentList,
    FieldAccess,
    Ident,

    // Punctuation
    LCurly,
    RCurly,
    LParen,
    RParen,
    Semi,
    Comma,
    Dot,
    Colon,
    Arrow,
    AssignOperator,

    Keyword,
    Error,
    Other,
}

impl TokenType {
    /// Maps a tree-sitter node kind onto a token type.
    ///
    /// `named` separates clause nodes from the keyword token spelled the same
    /// way, e.g. the `throws` clause and the `throws` keyword inside it.
    pub fn from_grammar_kind(kind: &str, named: bool) -> Self {
        if named {
            Self::from_named_kind(kind)
        } else {
            Self::from_anonymous_kind(kind)
        }
    }

    fn from_named_kind(kind: &str) -> Self {
        match kind {
            "program" => Self::CompilationUnit,
            "package_declaration" => Self::PackageDef,
            "import_declaration" => Self::Import,

            "class_declaration" => Self::ClassDef,
            "interface_declaration" => Self::InterfaceDef,
            "enum_declaration" => Self::EnumDef,
            "annotation_type_declaration" => Self::AnnotationDef,
            "record_declaration" => Self::RecordDef,
            "class_body" | "interface_body" | "enum_body" | "annotation_type_body" => {
                Self::ObjBlock
            }
            "enum_constant" => Self::EnumConstant,
            "enum_body_declarations" => Self::EnumBodyDeclarations,

            "method_declaration" => Self::MethodDef,
            "constructor_declaration" | "compact_constructor_declaration" => Self::CtorDef,
            "annotation_type_element_declaration" => Self::AnnotationFieldDef,
            "field_declaration" | "constant_declaration" => Self::FieldDef,
            "local_variable_declaration" => Self::VariableDef,
            "variable_declarator" => Self::VariableDeclarator,
            "modifiers" => Self::Modifiers,
            "marker_annotation" | "annotation" => Self::Annotation,
            "type_parameters" => Self::TypeParameters,
            "formal_parameters" => Self::Parameters,
            "throws" => Self::Throws,
            "superclass" | "extends_interfaces" => Self::ExtendsClause,
            "super_interfaces" => Self::ImplementsClause,
            "permits" => Self::PermitsClause,
            "static_initializer" => Self::StaticInit,

            "block" | "constructor_body" => Self::Slist,
            "if_statement" => Self::LiteralIf,
            "for_statement" => Self::LiteralFor,
            "enhanced_for_statement" => Self::ForEach,
            "while_statement" => Self::LiteralWhile,
            "do_statement" => Self::LiteralDo,
            "try_statement" | "try_with_resources_statement" => Self::LiteralTry,
            "resource_specification" => Self::Resources,
            "catch_clause" => Self::LiteralCatch,
            "catch_formal_parameter" => Self::CatchParameter,
            "finally_clause" => Self::LiteralFinally,
            "switch_expression" | "switch_statement" => Self::LiteralSwitch,
            "switch_block" => Self::SwitchBlock,
            "switch_block_statement_group" => Self::CaseGroup,
            "switch_rule" => Self::SwitchRule,
            "switch_label" => Self::SwitchLabel,
            "synchronized_statement" => Self::LiteralSynchronized,
            "labeled_statement" => Self::LabeledStat,
            "expression_statement" => Self::ExprStatement,
            "return_statement" => Self::LiteralReturn,
            "break_statement" => Self::LiteralBreak,
            "continue_statement" => Self::LiteralContinue,
            "throw_statement" => Self::LiteralThrow,
            "yield_statement" => Self::LiteralYield,
            "assert_statement" => Self::LiteralAssert,

            "method_invocation" => Self::MethodCall,
            "explicit_constructor_invocation" => Self::CtorCall,
            "object_creation_expression" => Self::LiteralNew,
            "array_creation_expression" => Self::ArrayCreation,
            "array_initializer" | "element_value_array_initializer" => Self::ArrayInit,
            "assignment_expression" => Self::Assign,
            "lambda_expression" => Self::Lambda,
            "parenthesized_expression" => Self::ParenExpr,
            "argument_list" => Self::ArgumentList,
            "field_access" => Self::FieldAccess,
            "identifier" | "type_identifier" => Self::Ident,
            "this" | "super" => Self::Keyword,

            "ERROR" => Self::Error,
            _ => Self::Other,
        }
    }

    fn from_anonymous_kind(kind: &str) -> Self {
        match kind {
            "{" => Self::LCurly,
            "}" => Self::RCurly,
            "(" => Self::LParen,
            ")" => Self::RParen,
            ";" => Self::Semi,
            "," => Self::Comma,
            "." => Self::Dot,
            ":" => Self::Colon,
            "->" => Self::Arrow,
            "=" | "+=" | "-=" | "*=" | "/=" | "%=" | "&=" | "|=" | "^=" | "<<=" | ">>="
            | ">>>=" => Self::AssignOperator,
            "else" => Self::LiteralElse,
            _ if kind.bytes().all(|b| b.is_ascii_lowercase() || b == b'-') && !kind.is_empty() => {
                Self::Keyword
            }
            _ => Self::Other,
        }
    }

    /// Statement kinds whose first line a block checks against its children's level.
    pub fn is_block_statement(self) -> bool {
        matches!(
            self,
            Self::VariableDef
                | Self::ExprStatement
                | Self::LiteralBreak
                | Self::LiteralReturn
                | Self::LiteralThrow
                | Self::LiteralContinue
                | Self::LiteralYield
                | Self::LiteralAssert
                | Self::CtorCall
        )
    }

    /// Type declaration kinds.
    pub fn is_type_def(self) -> bool {
        matches!(
            self,
            Self::ClassDef | Self::InterfaceDef | Self::EnumDef | Self::AnnotationDef | Self::RecordDef
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_kinds() {
        assert_eq!(TokenType::from_grammar_kind("if_statement", true), TokenType::LiteralIf);
        assert_eq!(TokenType::from_grammar_kind("constructor_body", true), TokenType::Slist);
        assert_eq!(TokenType::from_grammar_kind("enum_body", true), TokenType::ObjBlock);
        assert_eq!(TokenType::from_grammar_kind("binary_expression", true), TokenType::Other);
    }

    #[test]
    fn test_clause_and_keyword_spelled_alike() {
        assert_eq!(TokenType::from_grammar_kind("throws", true), TokenType::Throws);
        assert_eq!(TokenType::from_grammar_kind("throws", false), TokenType::Keyword);
    }

    #[test]
    fn test_anonymous_tokens() {
        assert_eq!(TokenType::from_grammar_kind("{", false), TokenType::LCurly);
        assert_eq!(TokenType::from_grammar_kind("else", false), TokenType::LiteralElse);
        assert_eq!(TokenType::from_grammar_kind("+=", false), TokenType::AssignOperator);
        assert_eq!(TokenType::from_grammar_kind("non-sealed", false), TokenType::Keyword);
        assert_eq!(TokenType::from_grammar_kind("+", false), TokenType::Other);
    }
}
