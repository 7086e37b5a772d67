use std::{collections::HashMap, fmt::Display};

/// The declared type of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarType {
    Integer,
    Real,
}

impl Display for VarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VarType::Integer => write!(f, "integer"),
            VarType::Real => write!(f, "real"),
        }
    }
}

/// Case-sensitive map from identifier name to declared type.
///
/// One flat table covers the whole program, nested procedure bodies
/// included. The table is cloneable so a speculative parse attempt can
/// snapshot it and roll back on structural failure.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    table: HashMap<String, VarType>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            table: HashMap::new(),
        }
    }

    pub fn insert(&mut self, name: &str, var_type: VarType) {
        self.table.insert(name.to_string(), var_type);
    }

    pub fn lookup(&self, name: &str) -> Option<VarType> {
        self.table.get(name).copied()
    }
}
