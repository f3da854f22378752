//! 注册句柄
//!
//! `add` 返回的句柄绑定到刚创建的注册项，后续注入直接作用于该注册项，
//! 不会重新到容器中查找。

use crate::factory::downcast_instance;
use crate::registry::{ComponentRegistry, Registration};
use infrastructure_common::{ClassRef, DependencyResult, Lifetime};
use std::marker::PhantomData;
use std::sync::Arc;

/// 注册句柄
pub struct RegistrationHandle<'a, R: ?Sized, T> {
    registry: &'a R,
    registration: Arc<Registration>,
    _component: PhantomData<fn() -> T>,
}

impl<'a, R, T> RegistrationHandle<'a, R, T>
where
    R: ComponentRegistry + ?Sized,
    T: Send + Sync + 'static,
{
    /// 创建绑定到注册项的句柄
    pub fn new(registry: &'a R, registration: Arc<Registration>) -> Self {
        Self {
            registry,
            registration,
            _component: PhantomData,
        }
    }

    /// 按顺序解析依赖并构造组件，返回新实例
    ///
    /// 无论生命周期如何，新实例都会覆盖注册项中的缓存。
    pub fn inject(&self, dependencies: &[ClassRef]) -> DependencyResult<Arc<T>> {
        let instance = self
            .registry
            .inject_registration(&self.registration, dependencies)?;
        downcast_instance(self.class_ref(), instance)
    }

    /// 通过容器解析自身，等价于 `get::<T>()`
    pub fn get_self(&self) -> DependencyResult<Arc<T>> {
        let class_ref = self.class_ref();
        downcast_instance(class_ref, self.registry.get_by_ref(class_ref)?)
    }

    pub fn class_ref(&self) -> ClassRef {
        self.registration.class_ref()
    }

    pub fn lifetime(&self) -> Lifetime {
        self.registration.lifetime()
    }

    pub fn registration_id(&self) -> uuid::Uuid {
        self.registration.id()
    }

    /// 句柄绑定的注册项
    pub fn registration(&self) -> &Arc<Registration> {
        &self.registration
    }

    /// 容器当前是否仍持有该注册项（同一类引用被再次 add 后返回 false）
    pub fn is_current(&self) -> bool {
        self.registry
            .registration(self.class_ref())
            .is_some_and(|current| Arc::ptr_eq(&current, &self.registration))
    }
}

impl<R: ?Sized, T> std::fmt::Debug for RegistrationHandle<'_, R, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationHandle")
            .field("registration", &self.registration)
            .finish()
    }
}
