//! # Infrastructure Common
//!
//! 依赖注入容器各层共享的基础类型。
//!
//! ## 核心内容
//!
//! - [`ClassRef`] - 类引用，容器的查找键
//! - [`Lifetime`] - 组件生命周期（单例 / 瞬时）
//! - [`DependencyError`] - 依赖注入错误
//! - [`load_config`] - 文件 + 环境变量的配置加载

pub mod configuration;
pub mod errors;
pub mod lifecycle;
pub mod metadata;

pub use configuration::*;
pub use errors::*;
pub use lifecycle::*;
pub use metadata::*;
