//! Collision-free identifier minting.
//!
//! One allocator is created per synthesis call, seeded with every name
//! in scope that must not be shadowed. It is an explicitly owned value,
//! never shared across independent syntheses.

use std::collections::HashSet;

use crate::resolve::InterfaceDescriptor;

/// Mints names that collide with nothing already in scope.
#[derive(Debug, Default)]
pub struct NameAllocator {
    reserved: HashSet<String>,
}

impl NameAllocator {
    /// The default preferred symbol for the self-type parameter.
    pub const DEFAULT_PREFERRED: &'static str = "W";

    /// An allocator with nothing reserved.
    pub fn new() -> Self {
        Self::default()
    }

    /// An allocator seeded with every name in scope of the descriptor:
    /// the interface's own type-parameter names and each resolved
    /// operation's own generic-parameter names.
    pub fn seeded_for(descriptor: &InterfaceDescriptor) -> Self {
        let mut allocator = Self::new();
        for parameter in &descriptor.type_parameters {
            allocator.reserve(&parameter.name);
        }
        for operation in &descriptor.operations {
            for parameter in &operation.type_parameters {
                allocator.reserve(&parameter.name);
            }
        }
        allocator
    }

    /// Mark a name as unavailable.
    pub fn reserve(&mut self, name: &str) {
        self.reserved.insert(name.to_string());
    }

    /// Allocate using the default preferred symbol.
    pub fn allocate(&mut self) -> String {
        self.allocate_preferring(Self::DEFAULT_PREFERRED)
    }

    /// Allocate `preferred` if free, otherwise the first unused
    /// numeric-suffixed variant (suffix starts at 2). The returned name
    /// is reserved, so no two calls ever return the same name.
    pub fn allocate_preferring(&mut self, preferred: &str) -> String {
        if self.reserved.insert(preferred.to_string()) {
            return preferred.to_string();
        }
        let mut suffix = 2usize;
        loop {
            let candidate = format!("{}{}", preferred, suffix);
            if self.reserved.insert(candidate.clone()) {
                return candidate;
            }
            suffix += 1;
        }
    }
}
