//! 容器构建器实现

use crate::DiContainerImpl;
use di_abstractions::{ComponentRegistry, ContainerConfig, Injectable};
use infrastructure_common::{ClassRef, DependencyResult};
use tracing::info;

type DeferredRegistration = Box<dyn FnOnce(&DiContainerImpl) -> DependencyResult<()> + Send>;

/// 容器构建器
///
/// 先收集注册动作，`build` 时按声明顺序依次执行。
pub struct DiContainerBuilder {
    config: ContainerConfig,
    registrations: Vec<DeferredRegistration>,
}

impl DiContainerBuilder {
    pub fn new() -> Self {
        Self {
            config: ContainerConfig::default(),
            registrations: Vec::new(),
        }
    }

    /// 设置容器配置
    pub fn with_config(mut self, config: ContainerConfig) -> Self {
        self.config = config;
        self
    }

    /// 添加单例注册
    pub fn register<T: Injectable>(mut self) -> Self {
        self.registrations.push(Box::new(|container: &DiContainerImpl| {
            container.add::<T>();
            Ok(())
        }));
        self
    }

    /// 添加瞬时注册
    pub fn register_transient<T, F>(mut self, factory: F) -> Self
    where
        T: Injectable,
        F: Fn() -> DependencyResult<T> + Send + Sync + 'static,
    {
        self.registrations.push(Box::new(move |container: &DiContainerImpl| {
            container.add_transient(factory);
            Ok(())
        }));
        self
    }

    /// 添加单例注册，并在构建时按给定顺序注入依赖
    ///
    /// 依赖必须在此之前声明。
    pub fn register_injected<T: Injectable>(mut self, dependencies: Vec<ClassRef>) -> Self {
        self.registrations.push(Box::new(move |container: &DiContainerImpl| {
            container.add::<T>().inject(&dependencies).map(|_| ())
        }));
        self
    }

    /// 构建容器，任何一个注入失败都会中止构建
    pub fn build(self) -> DependencyResult<DiContainerImpl> {
        let container = DiContainerImpl::with_config(self.config);

        for registration in self.registrations {
            registration(&container)?;
        }

        info!(
            container = %container.config().name,
            "构建容器完成，注册了 {} 个组件",
            container.len()
        );
        Ok(container)
    }
}

impl Default for DiContainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DiContainerBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiContainerBuilder")
            .field("config", &self.config)
            .field("registrations", &self.registrations.len())
            .finish()
    }
}
