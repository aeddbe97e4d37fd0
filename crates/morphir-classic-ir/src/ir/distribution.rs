//! Distributions: a package bundled with the specifications of its
//! dependencies.

use super::module::ModuleSpecification;
use super::package::{PackageDefinition, PackageSpecification};
use super::types::Type;
use crate::codec::FormatVersion;
use crate::naming::{Path, QualifiedModuleName};

/// A distributable unit. Library is the only kind.
///
/// Type attributes are `()`, value attributes are the inferred `Type<()>`.
#[derive(Debug, Clone, PartialEq)]
pub enum Distribution {
    Library(
        Path,
        Vec<(Path, PackageSpecification<()>)>,
        PackageDefinition<(), Type<()>>,
    ),
}

impl Distribution {
    pub fn package_path(&self) -> &Path {
        match self {
            Distribution::Library(path, _, _) => path,
        }
    }

    pub fn dependencies(&self) -> &[(Path, PackageSpecification<()>)] {
        match self {
            Distribution::Library(_, dependencies, _) => dependencies,
        }
    }

    pub fn definition(&self) -> &PackageDefinition<(), Type<()>> {
        match self {
            Distribution::Library(_, _, definition) => definition,
        }
    }

    /// Module specification from this package or one of its dependencies.
    ///
    /// Modules of the distributed package are looked up in its public
    /// interface, so private modules are not found.
    pub fn lookup_module_specification(
        &self,
        module: &QualifiedModuleName,
    ) -> Option<ModuleSpecification<()>> {
        let Distribution::Library(path, dependencies, definition) = self;
        if module.package_path() == path {
            return definition
                .modules
                .iter()
                .find(|(module_path, _)| module_path == module.module_path())
                .and_then(|(_, module)| module.with_public_access())
                .map(|module| module.to_specification());
        }
        dependencies
            .iter()
            .find(|(dependency, _)| dependency == module.package_path())
            .and_then(|(_, spec)| spec.lookup_module(module.module_path()))
            .cloned()
    }
}

/// A distribution together with the wire format version it is stored in.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionedDistribution {
    pub format_version: FormatVersion,
    pub distribution: Distribution,
}

impl VersionedDistribution {
    pub fn new(format_version: FormatVersion, distribution: Distribution) -> Self {
        Self {
            format_version,
            distribution,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::access::AccessControlled;
    use crate::ir::module::ModuleDefinition;

    fn distribution() -> Distribution {
        let dependency = PackageSpecification {
            modules: vec![(Path::parse("List"), ModuleSpecification::default())],
        };
        Distribution::Library(
            Path::parse("My.Pkg"),
            vec![(Path::parse("Morphir.SDK"), dependency)],
            PackageDefinition {
                modules: vec![
                    (Path::parse("Api"), AccessControlled::public(ModuleDefinition::default())),
                    (
                        Path::parse("Internal"),
                        AccessControlled::private(ModuleDefinition::default()),
                    ),
                ],
            },
        )
    }

    fn module(package: &str, module: &str) -> QualifiedModuleName {
        QualifiedModuleName::new(Path::parse(package), Path::parse(module))
    }

    #[test]
    fn test_lookup_module_specification() {
        let dist = distribution();
        assert!(dist.lookup_module_specification(&module("My.Pkg", "Api")).is_some());
        assert!(dist.lookup_module_specification(&module("My.Pkg", "Internal")).is_none());
        assert!(dist.lookup_module_specification(&module("Morphir.SDK", "List")).is_some());
        assert!(dist.lookup_module_specification(&module("Morphir.SDK", "Dict")).is_none());
        assert_eq!(dist.package_path(), &Path::parse("My.Pkg"));
    }
}
