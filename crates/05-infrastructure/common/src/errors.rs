//! 错误类型定义

use thiserror::Error;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置加载失败: {source}")]
    LoadFailed {
        #[from]
        source: config::ConfigError,
    },

    #[error("配置验证失败: {message}")]
    ValidationFailed { message: String },
}

impl ConfigError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }
}

/// 依赖注入错误类型
#[derive(Error, Debug)]
pub enum DependencyError {
    #[error("组件未注册: {type_name}，获取之前必须先调用 add 注册")]
    ComponentNotRegistered { type_name: String },

    #[error("组件未注册: {type_name}，注入之前必须先调用 add 注册")]
    InjectionTargetNotRegistered { type_name: String },

    #[error("组件 {type_name} 缺少位置 {index} 的依赖，期望类型: {expected}")]
    MissingDependency {
        type_name: String,
        index: usize,
        expected: &'static str,
    },

    #[error("组件 {type_name} 位置 {index} 的依赖类型不匹配: 期望 {expected}, 实际 {actual}")]
    DependencyTypeMismatch {
        type_name: String,
        index: usize,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("组件 {type_name} 只使用了 {expected} 个依赖，但提供了 {provided} 个")]
    UnusedDependencies {
        type_name: String,
        expected: usize,
        provided: usize,
    },

    #[error("组件创建失败: {type_name}, 原因: {source}")]
    ComponentCreationFailed {
        type_name: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("实例类型转换失败: {type_name}")]
    InstanceTypeMismatch { type_name: String },
}

impl DependencyError {
    /// 包装构造函数或工厂中的外部错误
    pub fn creation_failed<E>(type_name: impl Into<String>, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::ComponentCreationFailed {
            type_name: type_name.into(),
            source: source.into(),
        }
    }

    /// 是否为"未注册"类查找错误
    pub fn is_lookup_error(&self) -> bool {
        matches!(
            self,
            Self::ComponentNotRegistered { .. } | Self::InjectionTargetNotRegistered { .. }
        )
    }
}

/// 结果类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type DependencyResult<T> = Result<T, DependencyError>;
