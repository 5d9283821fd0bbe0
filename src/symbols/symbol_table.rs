use std::{collections::HashMap, fmt::Display};

use super::symbol::Symbol;

/// One lexical scope. Symbols keep their declaration order.
#[derive(Debug, Default, Clone)]
pub struct Scope {
    symbols: Vec<Symbol>,
    index: HashMap<String, usize>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.index.get(name).map(|&i| &self.symbols[i])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Symbol> {
        match self.index.get(name) {
            Some(&i) => Some(&mut self.symbols[i]),
            None => None,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns `false` without touching the scope if the name is taken.
    pub fn insert(&mut self, symbol: Symbol) -> bool {
        if self.contains(symbol.name()) {
            return false;
        }

        self.index
            .insert(symbol.name().to_string(), self.symbols.len());
        self.symbols.push(symbol);
        true
    }

    /// Replaces the symbol bound to the same name, if any.
    pub fn replace(&mut self, symbol: Symbol) -> bool {
        match self.index.get(symbol.name()) {
            Some(&i) => {
                self.symbols[i] = symbol;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Stack of scopes. The global scope is open from construction.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    scopes: Vec<Scope>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        SymbolTable::new()
    }
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            scopes: vec![Scope::new()],
        }
    }

    pub fn push_scope(&mut self) {
        self.scopes.push(Scope::new());
    }

    /// Closes the innermost scope and hands it back.
    ///
    /// Pushes and pops must be balanced by the caller; popping with no
    /// scope open returns `None`.
    pub fn pop_scope(&mut self) -> Option<Scope> {
        self.scopes.pop()
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Inserts into the innermost scope; `false` if the name already exists
    /// there or no scope is open.
    pub fn declare(&mut self, symbol: Symbol) -> bool {
        match self.scopes.last_mut() {
            Some(scope) => scope.insert(symbol),
            None => false,
        }
    }

    /// Innermost-to-outermost lookup.
    pub fn resolve(&self, name: &str) -> Option<&Symbol> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    pub fn resolve_mut(&mut self, name: &str) -> Option<&mut Symbol> {
        self.scopes
            .iter_mut()
            .rev()
            .find_map(|scope| scope.get_mut(name))
    }

    /// Looks only at the innermost scope.
    pub fn lookup_current(&self, name: &str) -> Option<&Symbol> {
        self.scopes.last().and_then(|scope| scope.get(name))
    }

    pub fn current_scope_mut(&mut self) -> Option<&mut Scope> {
        self.scopes.last_mut()
    }

    /// Open scopes, outermost first.
    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }
}

impl Display for SymbolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (level, scope) in self.scopes.iter().enumerate() {
            writeln!(f, "Contexto {} ({} símbolos)", level, scope.len())?;
            for symbol in scope.iter() {
                writeln!(f, "  {}", symbol)?;
            }
        }
        Ok(())
    }
}
