//! 组件构造与工厂
//!
//! 类引用的"构造能力"由 [`Injectable`] 提供，容器内部只保存类型擦除后的函数。

use crate::resolver::Dependencies;
use infrastructure_common::{ClassRef, DependencyError, DependencyResult};
use std::any::Any;
use std::sync::Arc;

/// 容器中保存的类型擦除实例
pub type Instance = Arc<dyn Any + Send + Sync>;

/// 类型擦除的构造函数，按位置接收已解析的依赖
pub type ConstructorFn = Arc<dyn Fn(&mut Dependencies) -> DependencyResult<Instance> + Send + Sync>;

/// 类型擦除的无参工厂（瞬时组件）
pub type FactoryFn = Arc<dyn Fn() -> DependencyResult<Instance> + Send + Sync>;

/// 可注入组件 trait
///
/// `construct` 同时承担无参构造和带依赖构造：单例首次解析时传入空的
/// [`Dependencies`]，`inject` 时按调用方给出的顺序传入依赖实例。
///
/// ```rust
/// use di_abstractions::{Dependencies, Injectable};
/// use infrastructure_common::DependencyResult;
/// use std::sync::Arc;
///
/// struct Logger;
///
/// impl Injectable for Logger {
///     fn construct(_: &mut Dependencies) -> DependencyResult<Self> {
///         Ok(Logger)
///     }
/// }
///
/// struct Service {
///     logger: Arc<Logger>,
/// }
///
/// impl Injectable for Service {
///     fn construct(deps: &mut Dependencies) -> DependencyResult<Self> {
///         Ok(Service { logger: deps.next()? })
///     }
/// }
/// ```
pub trait Injectable: Send + Sync + 'static {
    /// 使用按位置排列的依赖构建组件实例
    fn construct(dependencies: &mut Dependencies) -> DependencyResult<Self>
    where
        Self: Sized;
}

/// 生成 `T` 的类型擦除构造函数
pub fn constructor_of<T: Injectable>() -> ConstructorFn {
    Arc::new(|dependencies: &mut Dependencies| {
        T::construct(dependencies).map(|component| Arc::new(component) as Instance)
    })
}

/// 把返回 `T` 的工厂包装成类型擦除工厂
pub fn factory_of<T, F>(factory: F) -> FactoryFn
where
    T: Send + Sync + 'static,
    F: Fn() -> DependencyResult<T> + Send + Sync + 'static,
{
    Arc::new(move || factory().map(|component| Arc::new(component) as Instance))
}

/// 将类型擦除实例还原为具体类型
pub fn downcast_instance<T>(class_ref: ClassRef, instance: Instance) -> DependencyResult<Arc<T>>
where
    T: Send + Sync + 'static,
{
    instance
        .downcast::<T>()
        .map_err(|_| DependencyError::InstanceTypeMismatch {
            type_name: class_ref.type_name().to_string(),
        })
}
