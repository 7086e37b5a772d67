//! Syntactic and semantic analysis.
//!
//! This module validates a token stream against the grammar by recursive
//! descent, one function per nonterminal, while maintaining a symbol table
//! for declared variables. It handles:
//!
//! - First-set dispatch between grammar alternatives, with no backtracking
//!   once a sub-rule has consumed a token
//! - Speculative parsing of the optional declaration sections, with
//!   snapshot/rollback of the semantic state
//! - Declaration-time duplicate checks and type registration
//! - Undeclared-variable and operand type-compatibility checks

pub mod decl;
pub mod expr;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
