//! 容器配置与统计

use infrastructure_common::{load_config, ConfigError, ConfigResult, Lifetime, RegistrationDescriptor};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 容器配置使用的环境变量前缀，例如 `DI__NAME=orders`
pub const CONFIG_ENV_PREFIX: &str = "DI";

/// 容器配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// 容器名称，出现在日志字段中
    pub name: String,
    /// 同一类引用被重复注册时输出警告日志
    pub warn_on_overwrite: bool,
    /// 每次解析都输出调试日志
    pub trace_resolution: bool,
    /// 注入时存在未被构造函数使用的依赖则报错
    pub strict_dependency_arity: bool,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            warn_on_overwrite: true,
            trace_resolution: false,
            strict_dependency_arity: false,
        }
    }
}

impl ContainerConfig {
    /// 创建指定名称的默认配置
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_warn_on_overwrite(mut self, enabled: bool) -> Self {
        self.warn_on_overwrite = enabled;
        self
    }

    pub fn with_trace_resolution(mut self, enabled: bool) -> Self {
        self.trace_resolution = enabled;
        self
    }

    pub fn with_strict_dependency_arity(mut self, enabled: bool) -> Self {
        self.strict_dependency_arity = enabled;
        self
    }

    /// 从可选的配置文件和 `DI__*` 环境变量加载配置
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let config: Self = load_config(path, CONFIG_ENV_PREFIX)?;
        config.validate()?;
        Ok(config)
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::validation("容器名称不能为空"));
        }
        Ok(())
    }
}

/// 容器统计信息
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContainerStats {
    /// 已注册组件数量
    pub registered_components: usize,
    /// 单例注册数量
    pub singletons: usize,
    /// 瞬时注册数量
    pub transients: usize,
    /// 持有缓存实例的注册数量
    pub cached_instances: usize,
}

impl ContainerStats {
    /// 从注册项快照汇总统计
    pub fn from_descriptors(descriptors: &[RegistrationDescriptor]) -> Self {
        descriptors.iter().fold(Self::default(), |mut stats, descriptor| {
            stats.registered_components += 1;
            match descriptor.lifetime {
                Lifetime::Singleton => stats.singletons += 1,
                Lifetime::Transient => stats.transients += 1,
            }
            if descriptor.is_cached() {
                stats.cached_instances += 1;
            }
            stats
        })
    }
}
