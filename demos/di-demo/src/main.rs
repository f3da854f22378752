//! # 依赖注入容器演示
//!
//! 注册 Logger / Repository / Service 三个组件，按位置注入依赖，
//! 然后打印容器的注册项快照。

use anyhow::Context;
use clap::Parser;
use di_abstractions::{ComponentRegistry, ContainerConfig, Dependencies, Injectable};
use di_impl::DiContainerImpl;
use infrastructure_common::{ClassRef, DependencyResult};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::info;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "di-demo")]
#[command(about = "Lorn DI 容器演示")]
struct Args {
    /// 容器配置文件路径（toml / json / yaml）
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 日志级别
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// 日志组件
#[derive(Debug)]
struct Logger {
    prefix: &'static str,
}

impl Logger {
    fn log(&self, message: &str) {
        info!("{} {}", self.prefix, message);
    }
}

impl Injectable for Logger {
    fn construct(_: &mut Dependencies) -> DependencyResult<Self> {
        Ok(Logger { prefix: "[orders]" })
    }
}

/// 订单仓储
#[derive(Debug)]
struct OrderRepository {
    logger: Arc<Logger>,
    next_id: AtomicU64,
}

impl OrderRepository {
    fn save(&self, item: &str) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.logger.log(&format!("保存订单 #{id}: {item}"));
        id
    }
}

impl Injectable for OrderRepository {
    fn construct(deps: &mut Dependencies) -> DependencyResult<Self> {
        Ok(OrderRepository {
            logger: deps.next()?,
            next_id: AtomicU64::new(1),
        })
    }
}

/// 每次解析都重新生成的请求上下文
#[derive(Debug)]
struct RequestContext {
    request_id: u64,
}

impl Injectable for RequestContext {
    fn construct(_: &mut Dependencies) -> DependencyResult<Self> {
        Ok(RequestContext { request_id: 0 })
    }
}

/// 订单服务
#[derive(Debug)]
struct OrderService {
    logger: Arc<Logger>,
    repository: Arc<OrderRepository>,
}

impl OrderService {
    fn place(&self, context: &RequestContext, item: &str) -> u64 {
        self.logger
            .log(&format!("请求 {} 下单: {}", context.request_id, item));
        self.repository.save(item)
    }
}

impl Injectable for OrderService {
    fn construct(deps: &mut Dependencies) -> DependencyResult<Self> {
        Ok(OrderService {
            logger: deps.next()?,
            repository: deps.next()?,
        })
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日志
    tracing_subscriber::fmt()
        .with_max_level(parse_log_level(&args.log_level))
        .init();

    let config = ContainerConfig::load(args.config.as_deref()).context("加载容器配置失败")?;
    info!("启动 DI 演示，容器: {}", config.name);

    let container = DiContainerImpl::with_config(config);
    wire_components(&container)?;

    let service = container.get::<OrderService>()?;
    for item in ["键盘", "显示器"] {
        let context = container.get::<RequestContext>()?;
        let order_id = service.place(&context, item);
        info!("订单已创建: {}", order_id);
    }

    let snapshot = serde_json::to_string_pretty(&container.registered_components())?;
    println!("{snapshot}");
    info!("容器统计: {:?}", container.stats());
    Ok(())
}

/// 注册组件并按构造函数参数顺序注入依赖
fn wire_components(container: &DiContainerImpl) -> anyhow::Result<()> {
    let request_ids = Arc::new(AtomicU64::new(1));
    container.add::<Logger>();
    container.add_transient(move || {
        Ok(RequestContext {
            request_id: request_ids.fetch_add(1, Ordering::SeqCst),
        })
    });

    container
        .add::<OrderRepository>()
        .inject(&[ClassRef::of::<Logger>()])
        .context("注入 OrderRepository 失败")?;
    container
        .add::<OrderService>()
        .inject(&[ClassRef::of::<Logger>(), ClassRef::of::<OrderRepository>()])
        .context("注入 OrderService 失败")?;
    Ok(())
}

fn parse_log_level(level: &str) -> tracing::Level {
    match level.to_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    }
}
