//! # 依赖注入具体实现
//!
//! 提供具体的依赖注入容器和容器构建器实现

pub mod builder;

pub use builder::DiContainerBuilder;

use dashmap::DashMap;
use di_abstractions::{
    ComponentRegistry, ContainerConfig, ContainerStats, Dependencies, Instance, Registration,
};
use infrastructure_common::{ClassRef, DependencyError, DependencyResult, RegistrationDescriptor};
use std::any::TypeId;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 具体的依赖注入容器实现
///
/// 单例在首次解析时构造：构造期间持有该注册项的缓存槽锁，
/// 并发的首次解析只会构造一次。构造失败不会写入缓存，下次解析重新构造。
pub struct DiContainerImpl {
    /// 容器配置
    config: ContainerConfig,
    /// 组件注册信息
    registrations: DashMap<TypeId, Arc<Registration>>,
}

impl DiContainerImpl {
    /// 创建新的容器
    pub fn new() -> Self {
        Self::with_config(ContainerConfig::default())
    }

    /// 使用指定配置创建容器
    pub fn with_config(config: ContainerConfig) -> Self {
        Self {
            config,
            registrations: DashMap::new(),
        }
    }

    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    /// 已注册组件数量
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// 容器统计信息
    pub fn stats(&self) -> ContainerStats {
        ContainerStats::from_descriptors(&self.registered_components())
    }

    fn resolve_singleton(&self, registration: &Registration) -> DependencyResult<Instance> {
        let class_ref = registration.class_ref();
        let (instance, created) = registration.get_or_construct()?;

        if created {
            debug!(container = %self.config.name, "创建单例实例: {}", class_ref.short_name());
        } else if self.config.trace_resolution {
            debug!(container = %self.config.name, "命中单例缓存: {}", class_ref.short_name());
        }
        Ok(instance)
    }
}

impl Default for DiContainerImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DiContainerImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiContainerImpl")
            .field("config", &self.config)
            .field("registrations", &self.registrations.len())
            .finish()
    }
}

impl ComponentRegistry for DiContainerImpl {
    fn register(&self, registration: Registration) -> Arc<Registration> {
        let class_ref = registration.class_ref();
        info!(
            container = %self.config.name,
            "注册组件: {} ({})",
            class_ref.short_name(),
            registration.lifetime()
        );

        let registration = Arc::new(registration);
        let previous = self
            .registrations
            .insert(class_ref.type_id(), registration.clone());

        if previous.is_some() && self.config.warn_on_overwrite {
            warn!(
                container = %self.config.name,
                "组件被重新注册，旧的注册项及其缓存实例已丢弃: {}",
                class_ref.type_name()
            );
        }

        registration
    }

    fn registration(&self, class_ref: ClassRef) -> Option<Arc<Registration>> {
        self.registrations
            .get(&class_ref.type_id())
            .map(|entry| entry.value().clone())
    }

    fn get_by_ref(&self, class_ref: ClassRef) -> DependencyResult<Instance> {
        let registration =
            self.registration(class_ref)
                .ok_or_else(|| DependencyError::ComponentNotRegistered {
                    type_name: class_ref.type_name().to_string(),
                })?;

        match registration.factory() {
            Some(factory) => {
                if self.config.trace_resolution {
                    debug!(container = %self.config.name, "调用瞬时工厂: {}", class_ref.short_name());
                }
                factory()
            }
            None => self.resolve_singleton(&registration),
        }
    }

    fn inject_registration(
        &self,
        registration: &Arc<Registration>,
        dependencies: &[ClassRef],
    ) -> DependencyResult<Instance> {
        let class_ref = registration.class_ref();

        let entries = dependencies
            .iter()
            .map(|dependency| {
                self.get_by_ref(*dependency)
                    .map(|instance| (*dependency, instance))
            })
            .collect::<DependencyResult<Vec<_>>>()?;

        let mut resolved = Dependencies::new(class_ref, entries);
        let instance = registration.construct(&mut resolved)?;

        if resolved.remaining() > 0 {
            if self.config.strict_dependency_arity {
                return Err(DependencyError::UnusedDependencies {
                    type_name: class_ref.type_name().to_string(),
                    expected: resolved.consumed(),
                    provided: resolved.len(),
                });
            }
            debug!(
                container = %self.config.name,
                "组件 {} 忽略了 {} 个未使用的依赖",
                class_ref.short_name(),
                resolved.remaining()
            );
        }

        registration.store_instance(instance.clone());

        // 写回容器
        let previous = self
            .registrations
            .insert(class_ref.type_id(), registration.clone());
        if let Some(previous) = previous {
            if !Arc::ptr_eq(&previous, registration) {
                warn!(
                    container = %self.config.name,
                    "过期的注册句柄覆盖了较新的注册项: {}",
                    class_ref.type_name()
                );
            }
        }

        info!(
            container = %self.config.name,
            "注入完成: {}，依赖数量 {}",
            class_ref.short_name(),
            dependencies.len()
        );
        Ok(instance)
    }

    fn registered_components(&self) -> Vec<RegistrationDescriptor> {
        let mut descriptors: Vec<_> = self
            .registrations
            .iter()
            .map(|entry| entry.value().descriptor())
            .collect();
        descriptors.sort_by(|a, b| a.type_name.cmp(&b.type_name));
        descriptors
    }
}
