//! 组件生命周期管理

use serde::{Deserialize, Serialize};

/// 组件生命周期类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifetime {
    /// 单例模式 - 首次解析时创建，之后一直返回同一个实例
    Singleton,
    /// 瞬时模式 - 每次解析都通过工厂创建新实例
    Transient,
}

impl Lifetime {
    /// 根据是否提供工厂确定生命周期
    pub fn from_factory_presence(has_factory: bool) -> Self {
        if has_factory {
            Self::Transient
        } else {
            Self::Singleton
        }
    }
}

impl std::fmt::Display for Lifetime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Singleton => f.write_str("singleton"),
            Self::Transient => f.write_str("transient"),
        }
    }
}

/// 注册项的缓存状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationState {
    /// 已注册，尚无缓存实例
    Uncached,
    /// 已注册，持有缓存实例
    Cached,
}

impl RegistrationState {
    /// 根据缓存槽是否有值确定状态
    pub fn from_cache(has_instance: bool) -> Self {
        if has_instance {
            Self::Cached
        } else {
            Self::Uncached
        }
    }
}
