//! Packages: named collections of modules.

use super::access::AccessControlled;
use super::module::{ModuleDefinition, ModuleSpecification};
use crate::naming::Path;

/// The public interface of a package: its exposed modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSpecification<TA> {
    pub modules: Vec<(Path, ModuleSpecification<TA>)>,
}

/// The full implementation of a package.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageDefinition<TA, VA> {
    pub modules: Vec<(Path, AccessControlled<ModuleDefinition<TA, VA>>)>,
}

impl<TA> Default for PackageSpecification<TA> {
    fn default() -> Self {
        Self {
            modules: Vec::new(),
        }
    }
}

impl<TA, VA> Default for PackageDefinition<TA, VA> {
    fn default() -> Self {
        Self {
            modules: Vec::new(),
        }
    }
}

impl<TA> PackageSpecification<TA> {
    pub fn lookup_module(&self, module_path: &Path) -> Option<&ModuleSpecification<TA>> {
        self.modules
            .iter()
            .find_map(|(path, module)| (path == module_path).then_some(module))
    }
}

impl<TA, VA> PackageDefinition<TA, VA> {
    /// Module definition by path, regardless of its access.
    pub fn lookup_module(&self, module_path: &Path) -> Option<&ModuleDefinition<TA, VA>> {
        self.modules
            .iter()
            .find_map(|(path, module)| (path == module_path).then_some(&module.value))
    }
}

impl<TA: Clone, VA> PackageDefinition<TA, VA> {
    /// Specifications of the public modules, in definition order.
    pub fn to_specification(&self) -> PackageSpecification<TA> {
        PackageSpecification {
            modules: self
                .modules
                .iter()
                .filter_map(|(path, module)| {
                    module
                        .with_public_access()
                        .map(|definition| (path.clone(), definition.to_specification()))
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_private_modules_are_not_exposed() {
        let package: PackageDefinition<(), ()> = PackageDefinition {
            modules: vec![
                (Path::parse("Api"), AccessControlled::public(ModuleDefinition::default())),
                (
                    Path::parse("Internal"),
                    AccessControlled::private(ModuleDefinition::default()),
                ),
            ],
        };
        assert!(package.lookup_module(&Path::parse("Internal")).is_some());

        let spec = package.to_specification();
        assert!(spec.lookup_module(&Path::parse("Api")).is_some());
        assert!(spec.lookup_module(&Path::parse("Internal")).is_none());
    }
}
