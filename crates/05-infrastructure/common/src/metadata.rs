//! 元数据定义
//!
//! 提供类引用和注册项的元数据信息

use crate::lifecycle::{Lifetime, RegistrationState};
use serde::Serialize;
use std::any::TypeId;
use std::hash::{Hash, Hasher};

/// 类引用
///
/// 可构造类型的身份标识，作为容器中的查找键。
/// 相等性与哈希只取决于 `TypeId`。
#[derive(Debug, Clone, Copy)]
pub struct ClassRef {
    id: TypeId,
    name: &'static str,
}

impl ClassRef {
    /// 从类型获取类引用
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// 类型ID
    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// 完整类型名称
    pub fn type_name(&self) -> &'static str {
        self.name
    }

    /// 获取简短的类型名称（不包含模块路径）
    pub fn short_name(&self) -> &'static str {
        // 只去掉开头的模块路径；元组、引用、切片等复合类型原样返回
        let path_end = self
            .name
            .find(|c: char| !(c.is_alphanumeric() || c == '_' || c == ':'))
            .unwrap_or(self.name.len());
        let start = self.name[..path_end].rfind("::").map_or(0, |pos| pos + 2);
        &self.name[start..]
    }
}

impl PartialEq for ClassRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ClassRef {}

impl Hash for ClassRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for ClassRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

/// 注册项描述符
///
/// 某个注册项在某一时刻的只读快照
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationDescriptor {
    /// 注册项ID，每次 add 都会生成新的ID
    pub id: uuid::Uuid,
    /// 类型名称
    pub type_name: String,
    /// 生命周期
    pub lifetime: Lifetime,
    /// 缓存状态
    pub state: RegistrationState,
    /// 注册时间
    pub registered_at: chrono::DateTime<chrono::Utc>,
}

impl RegistrationDescriptor {
    /// 是否持有缓存实例
    pub fn is_cached(&self) -> bool {
        self.state == RegistrationState::Cached
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Logger;
    struct Wrapper<T>(T);

    #[test]
    fn test_class_ref_identity() {
        assert_eq!(ClassRef::of::<Logger>(), ClassRef::of::<Logger>());
        assert_ne!(ClassRef::of::<Logger>(), ClassRef::of::<String>());
        assert_eq!(ClassRef::of::<Logger>().type_id(), TypeId::of::<Logger>());
    }

    #[test]
    fn test_short_name() {
        assert_eq!(ClassRef::of::<Logger>().short_name(), "Logger");
        assert_eq!(
            ClassRef::of::<Wrapper<Logger>>().short_name(),
            "Wrapper<infrastructure_common::metadata::tests::Logger>"
        );
    }

    #[test]
    fn test_short_name_keeps_compound_types_intact() {
        let tuple = ClassRef::of::<(Logger, String)>();
        assert_eq!(tuple.short_name(), tuple.type_name());

        let slice = ClassRef::of::<[Logger]>();
        assert_eq!(slice.short_name(), slice.type_name());

        let reference = ClassRef::of::<&'static Logger>();
        assert_eq!(reference.short_name(), reference.type_name());
    }
}
