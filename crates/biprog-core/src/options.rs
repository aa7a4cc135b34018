//! Per-unit configuration.

use rustc_hash::FxHashMap;

/// A tunable property of a compilation unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitProperty {
    /// Maximum number of diagnostics kept per build (`0` = unlimited).
    MaxDiagnostics,
    /// When non-zero the build output carries a dump of every resolved type.
    DumpTypes,
    /// When non-zero a redeclared dim must have an equal extent; when zero a
    /// comparable extent is accepted and the first declaration kept.
    StrictDimUnify,
}

impl UnitProperty {
    pub fn default_value(&self) -> usize {
        match self {
            UnitProperty::MaxDiagnostics => 0,
            UnitProperty::DumpTypes => 0,
            UnitProperty::StrictDimUnify => 1,
        }
    }
}

/// Property values for a unit; unset properties read as their default.
#[derive(Debug, Clone, Default)]
pub struct UnitOptions {
    values: FxHashMap<UnitProperty, usize>,
}

impl UnitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, builder style.
    pub fn with(mut self, property: UnitProperty, value: usize) -> Self {
        self.set(property, value);
        self
    }

    pub fn set(&mut self, property: UnitProperty, value: usize) {
        self.values.insert(property, value);
    }

    pub fn get(&self, property: UnitProperty) -> usize {
        self.values
            .get(&property)
            .copied()
            .unwrap_or_else(|| property.default_value())
    }

    pub fn max_diagnostics(&self) -> usize {
        self.get(UnitProperty::MaxDiagnostics)
    }

    pub fn dump_types(&self) -> bool {
        self.get(UnitProperty::DumpTypes) != 0
    }

    pub fn strict_dim_unify(&self) -> bool {
        self.get(UnitProperty::StrictDimUnify) != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = UnitOptions::new();
        assert_eq!(options.max_diagnostics(), 0);
        assert!(!options.dump_types());
        assert!(options.strict_dim_unify());
    }

    #[test]
    fn overrides() {
        let options = UnitOptions::new()
            .with(UnitProperty::MaxDiagnostics, 5)
            .with(UnitProperty::StrictDimUnify, 0);
        assert_eq!(options.max_diagnostics(), 5);
        assert!(!options.strict_dim_unify());
        assert_eq!(options.get(UnitProperty::DumpTypes), 0);
    }
}
