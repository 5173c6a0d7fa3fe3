pub mod license_strategy;
pub mod module_dependency;
pub mod package_entry;
pub mod report_entry;

pub use license_strategy::{BsdOverrides, LicenseStrategy};
pub use module_dependency::{ModuleDependency, ModuleHost};
pub use package_entry::{LicenseField, PackageEntry, PackageRecord};
pub use report_entry::{ReportEntry, RepositoryIdentity};
