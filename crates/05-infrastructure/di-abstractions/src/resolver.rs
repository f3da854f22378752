//! 按位置解析的依赖列表

use crate::factory::Instance;
use infrastructure_common::{ClassRef, DependencyError, DependencyResult};
use std::sync::Arc;

/// 已解析的依赖
///
/// 顺序与调用 `inject` 时给出的类引用顺序一致，构造函数通过
/// [`Dependencies::next`] 依次取用。容器不做名称或类型匹配。
pub struct Dependencies {
    /// 正在构造的目标类型
    target: ClassRef,
    /// 依赖实例及其类引用
    entries: Vec<(ClassRef, Instance)>,
    /// 下一个待取用的位置
    cursor: usize,
}

impl Dependencies {
    /// 创建依赖列表
    pub fn new(target: ClassRef, entries: Vec<(ClassRef, Instance)>) -> Self {
        Self {
            target,
            entries,
            cursor: 0,
        }
    }

    /// 创建空依赖列表（无参构造）
    pub fn empty(target: ClassRef) -> Self {
        Self::new(target, Vec::new())
    }

    /// 正在构造的目标类型
    pub fn target(&self) -> ClassRef {
        self.target
    }

    /// 依赖总数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 已取用的依赖数量
    pub fn consumed(&self) -> usize {
        self.cursor
    }

    /// 尚未取用的依赖数量
    pub fn remaining(&self) -> usize {
        self.entries.len() - self.cursor
    }

    /// 取出下一个依赖并还原为 `D`
    pub fn next<D>(&mut self) -> DependencyResult<Arc<D>>
    where
        D: Send + Sync + 'static,
    {
        let index = self.cursor;
        let (class_ref, instance) = match self.entries.get(index) {
            Some((class_ref, instance)) => (*class_ref, instance.clone()),
            None => {
                return Err(DependencyError::MissingDependency {
                    type_name: self.target.type_name().to_string(),
                    index,
                    expected: std::any::type_name::<D>(),
                })
            }
        };

        let typed = instance
            .downcast::<D>()
            .map_err(|_| DependencyError::DependencyTypeMismatch {
                type_name: self.target.type_name().to_string(),
                index,
                expected: std::any::type_name::<D>(),
                actual: class_ref.type_name(),
            })?;

        self.cursor += 1;
        Ok(typed)
    }
}

impl std::fmt::Debug for Dependencies {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dependencies")
            .field("target", &self.target)
            .field(
                "entries",
                &self.entries.iter().map(|(class_ref, _)| class_ref).collect::<Vec<_>>(),
            )
            .field("cursor", &self.cursor)
            .finish()
    }
}
