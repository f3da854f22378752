//! 环境变量覆盖配置文件
//!
//! 单独的测试二进制，避免修改环境变量影响其他测试。

use di_abstractions::{ContainerConfig, CONFIG_ENV_PREFIX};
use std::io::Write;

#[test]
fn test_environment_overrides_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "name = \"from-file\"\ntrace_resolution = false").unwrap();

    std::env::set_var(format!("{}__NAME", CONFIG_ENV_PREFIX), "from-env");
    std::env::set_var(format!("{}__TRACE_RESOLUTION", CONFIG_ENV_PREFIX), "true");

    let config = ContainerConfig::load(Some(file.path())).unwrap();

    std::env::remove_var(format!("{}__NAME", CONFIG_ENV_PREFIX));
    std::env::remove_var(format!("{}__TRACE_RESOLUTION", CONFIG_ENV_PREFIX));

    assert_eq!(config.name, "from-env");
    assert!(config.trace_resolution);
    assert!(config.warn_on_overwrite);
}
