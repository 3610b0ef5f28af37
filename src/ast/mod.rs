/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Stmt`/`Expr` sum types and the `Program` root
/// - expressions: Definitions for the expression node payloads
/// - statements: Definitions for the statement node payloads
///
/// Every node implements `Display`, producing the canonical fully
/// parenthesised rendering used by diagnostics and tests.
pub mod ast;
pub mod expressions;
pub mod statements;
