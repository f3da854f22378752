//! 配置文件驱动的容器集成测试

use di_abstractions::{ComponentRegistry, ContainerConfig, Dependencies, Injectable};
use di_impl::{DiContainerBuilder, DiContainerImpl};
use infrastructure_common::{ClassRef, ConfigError, DependencyError, DependencyResult};
use std::io::Write;

#[derive(Debug)]
struct AuditLog;

impl Injectable for AuditLog {
    fn construct(_: &mut Dependencies) -> DependencyResult<Self> {
        Ok(AuditLog)
    }
}

#[derive(Debug)]
struct Ledger;

impl Injectable for Ledger {
    fn construct(_: &mut Dependencies) -> DependencyResult<Self> {
        Ok(Ledger)
    }
}

fn write_config(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_container_uses_loaded_toml_config() {
    let file = write_config(
        ".toml",
        "name = \"billing\"\nstrict_dependency_arity = true\ntrace_resolution = true\n",
    );
    let config = ContainerConfig::load(Some(file.path())).unwrap();
    let container = DiContainerImpl::with_config(config);

    container.add::<AuditLog>();
    container.add::<Ledger>();
    let err = container
        .inject::<Ledger>(&[ClassRef::of::<AuditLog>()])
        .unwrap_err();

    assert_eq!(container.config().name, "billing");
    assert!(matches!(err, DependencyError::UnusedDependencies { .. }));
}

#[test]
fn test_json_config_is_supported() {
    let file = write_config(".json", r#"{ "name": "reports", "warn_on_overwrite": false }"#);
    let config = ContainerConfig::load(Some(file.path())).unwrap();

    assert_eq!(config.name, "reports");
    assert!(!config.warn_on_overwrite);
    assert!(!config.strict_dependency_arity);
}

#[test]
fn test_invalid_config_is_rejected() {
    let file = write_config(".toml", "name = \"\"\n");
    let err = ContainerConfig::load(Some(file.path())).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn test_registry_snapshot_serializes_to_json() {
    let container = DiContainerBuilder::new()
        .with_config(ContainerConfig::new("snapshot"))
        .register::<AuditLog>()
        .register_transient(|| Ok(Ledger))
        .build()
        .unwrap();
    container.get::<AuditLog>().unwrap();

    let snapshot = serde_json::to_value(container.registered_components()).unwrap();
    let entries = snapshot.as_array().unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["lifetime"], "singleton");
    assert_eq!(entries[0]["state"], "cached");
    assert_eq!(entries[1]["lifetime"], "transient");
    assert_eq!(entries[1]["state"], "uncached");

    let stats = container.stats();
    assert_eq!(stats.registered_components, 2);
    assert_eq!(stats.cached_instances, 1);
}
