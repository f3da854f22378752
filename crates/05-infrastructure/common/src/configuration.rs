//! 配置加载

use crate::errors::ConfigResult;
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::debug;

/// 环境变量层级分隔符，例如 `DI__NAME`
pub const ENV_SEPARATOR: &str = "__";

/// 按"文件 → 环境变量"的顺序加载配置并绑定到类型
///
/// 文件格式由扩展名决定（toml / json / yaml），未指定文件时只读取环境变量。
/// 文件中缺失的字段由目标类型的 `#[serde(default)]` 补齐。
pub fn load_config<T>(path: Option<&Path>, env_prefix: &str) -> ConfigResult<T>
where
    T: DeserializeOwned,
{
    let mut builder = config::Config::builder();

    if let Some(path) = path {
        debug!("加载配置文件: {}", path.display());
        builder = builder.add_source(config::File::from(path).required(true));
    }

    let settings = builder
        .add_source(
            config::Environment::with_prefix(env_prefix)
                .prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        )
        .build()?;

    debug!("绑定配置到类型: {}", std::any::type_name::<T>());
    Ok(settings.try_deserialize()?)
}
