//! 组件注册表抽象接口

use crate::factory::{
    constructor_of, downcast_instance, factory_of, ConstructorFn, FactoryFn, Injectable, Instance,
};
use crate::handle::RegistrationHandle;
use crate::resolver::Dependencies;
use infrastructure_common::{
    ClassRef, DependencyError, DependencyResult, Lifetime, RegistrationDescriptor,
    RegistrationState,
};
use parking_lot::Mutex;
use std::sync::Arc;

/// 组件注册信息
///
/// 每次 `add` 都会创建一个全新的注册项；缓存槽只在构造成功之后写入。
pub struct Registration {
    /// 注册项ID
    id: uuid::Uuid,
    /// 所属类引用
    class_ref: ClassRef,
    /// 生命周期，由是否提供工厂决定
    lifetime: Lifetime,
    /// 类引用自身的构造函数
    constructor: ConstructorFn,
    /// 瞬时组件的工厂
    factory: Option<FactoryFn>,
    /// 缓存实例
    instance: Mutex<Option<Instance>>,
    /// 注册时间
    registered_at: chrono::DateTime<chrono::Utc>,
}

impl Registration {
    fn new(class_ref: ClassRef, constructor: ConstructorFn, factory: Option<FactoryFn>) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            class_ref,
            lifetime: Lifetime::from_factory_presence(factory.is_some()),
            constructor,
            factory,
            instance: Mutex::new(None),
            registered_at: chrono::Utc::now(),
        }
    }

    /// 创建单例注册项
    pub fn singleton<T: Injectable>() -> Self {
        Self::new(ClassRef::of::<T>(), constructor_of::<T>(), None)
    }

    /// 创建瞬时注册项
    pub fn transient<T, F>(factory: F) -> Self
    where
        T: Injectable,
        F: Fn() -> DependencyResult<T> + Send + Sync + 'static,
    {
        Self::new(
            ClassRef::of::<T>(),
            constructor_of::<T>(),
            Some(factory_of(factory)),
        )
    }

    pub fn id(&self) -> uuid::Uuid {
        self.id
    }

    pub fn class_ref(&self) -> ClassRef {
        self.class_ref
    }

    pub fn lifetime(&self) -> Lifetime {
        self.lifetime
    }

    pub fn registered_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.registered_at
    }

    /// 瞬时组件的工厂，单例为 `None`
    pub fn factory(&self) -> Option<&FactoryFn> {
        self.factory.as_ref()
    }

    /// 使用给定依赖调用类引用的构造函数
    pub fn construct(&self, dependencies: &mut Dependencies) -> DependencyResult<Instance> {
        (self.constructor)(dependencies)
    }

    /// 返回缓存实例，没有缓存时以空依赖构造并缓存
    ///
    /// 构造期间持有缓存槽锁，同一注册项上的并发调用只会构造一次；
    /// 构造失败不写入缓存。返回值中的布尔值表示本次是否新建了实例。
    pub fn get_or_construct(&self) -> DependencyResult<(Instance, bool)> {
        let mut slot = self.instance.lock();
        if let Some(instance) = slot.as_ref() {
            return Ok((instance.clone(), false));
        }

        let instance = self.construct(&mut Dependencies::empty(self.class_ref))?;
        *slot = Some(instance.clone());
        Ok((instance, true))
    }

    /// 当前缓存的实例
    pub fn cached_instance(&self) -> Option<Instance> {
        self.instance.lock().clone()
    }

    /// 覆盖缓存实例
    ///
    /// 供 [`ComponentRegistry::inject_registration`] 的实现使用，
    /// 其他调用方应通过容器的 `get` / `inject` 读写缓存。
    pub fn store_instance(&self, instance: Instance) {
        *self.instance.lock() = Some(instance);
    }

    pub fn state(&self) -> RegistrationState {
        RegistrationState::from_cache(self.instance.lock().is_some())
    }

    /// 生成只读快照
    pub fn descriptor(&self) -> RegistrationDescriptor {
        RegistrationDescriptor {
            id: self.id,
            type_name: self.class_ref.type_name().to_string(),
            lifetime: self.lifetime,
            state: self.state(),
            registered_at: self.registered_at,
        }
    }
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("id", &self.id)
            .field("class_ref", &self.class_ref)
            .field("lifetime", &self.lifetime)
            .field("state", &self.state())
            .field("factory", &self.factory.as_ref().map(|_| "<function>"))
            .field("registered_at", &self.registered_at)
            .finish()
    }
}

/// 组件注册表 trait
///
/// 提供注册、解析和依赖注入的核心接口。泛型便捷方法要求 `Self: Sized`，
/// 其余方法可以通过 `dyn ComponentRegistry` 调用。
pub trait ComponentRegistry: Send + Sync {
    /// 保存注册项，覆盖同一类引用下已有的注册项
    fn register(&self, registration: Registration) -> Arc<Registration>;

    /// 查找类引用当前的注册项
    fn registration(&self, class_ref: ClassRef) -> Option<Arc<Registration>>;

    /// 按生命周期规则解析实例
    fn get_by_ref(&self, class_ref: ClassRef) -> DependencyResult<Instance>;

    /// 按顺序解析依赖，构造实例并写入给定注册项的缓存
    fn inject_registration(
        &self,
        registration: &Arc<Registration>,
        dependencies: &[ClassRef],
    ) -> DependencyResult<Instance>;

    /// 获取所有注册项的快照
    fn registered_components(&self) -> Vec<RegistrationDescriptor>;

    /// 检查类引用是否已注册
    fn is_registered(&self, class_ref: ClassRef) -> bool {
        self.registration(class_ref).is_some()
    }

    /// 注册单例组件
    fn add<T>(&self) -> RegistrationHandle<'_, Self, T>
    where
        Self: Sized,
        T: Injectable,
    {
        let registration = self.register(Registration::singleton::<T>());
        RegistrationHandle::new(self, registration)
    }

    /// 注册瞬时组件，每次解析都会调用 `factory`
    fn add_transient<T, F>(&self, factory: F) -> RegistrationHandle<'_, Self, T>
    where
        Self: Sized,
        T: Injectable,
        F: Fn() -> DependencyResult<T> + Send + Sync + 'static,
    {
        let registration = self.register(Registration::transient(factory));
        RegistrationHandle::new(self, registration)
    }

    /// 解析组件
    fn get<T>(&self) -> DependencyResult<Arc<T>>
    where
        Self: Sized,
        T: Send + Sync + 'static,
    {
        let class_ref = ClassRef::of::<T>();
        downcast_instance(class_ref, self.get_by_ref(class_ref)?)
    }

    /// 对已注册的组件执行依赖注入
    fn inject<T>(&self, dependencies: &[ClassRef]) -> DependencyResult<Arc<T>>
    where
        Self: Sized,
        T: Send + Sync + 'static,
    {
        let class_ref = ClassRef::of::<T>();
        let registration =
            self.registration(class_ref)
                .ok_or_else(|| DependencyError::InjectionTargetNotRegistered {
                    type_name: class_ref.type_name().to_string(),
                })?;
        downcast_instance(class_ref, self.inject_registration(&registration, dependencies)?)
    }
}
