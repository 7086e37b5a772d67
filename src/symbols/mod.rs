//! Symbol table for declared variables.

pub mod symbol_table;
