//! # Dependency Injection Abstractions
//!
//! 依赖注入抽象层，定义组件注册、解析和依赖注入的核心接口。
//!
//! ## 核心接口
//!
//! - [`ComponentRegistry`] - 组件注册表接口（add / get / inject）
//! - [`Registration`] - 注册项，持有生命周期、工厂和缓存实例
//! - [`RegistrationHandle`] - `add` 返回的注册句柄
//! - [`Injectable`] - 组件构造接口
//! - [`Dependencies`] - 按位置排列的已解析依赖

pub mod container;
pub mod factory;
pub mod handle;
pub mod registry;
pub mod resolver;

pub use container::*;
pub use factory::*;
pub use handle::*;
pub use registry::*;
pub use resolver::*;
