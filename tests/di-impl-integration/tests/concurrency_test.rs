//! 并发解析的集中集成测试

use di_abstractions::{ComponentRegistry, Dependencies, Injectable};
use di_impl::DiContainerImpl;
use infrastructure_common::{ClassRef, DependencyResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::time::Duration;

const CALLERS: usize = 16;

static POOL_CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

/// 构造较慢的单例，放大并发首次解析的竞争窗口
#[derive(Debug)]
struct ConnectionPool;

impl Injectable for ConnectionPool {
    fn construct(_: &mut Dependencies) -> DependencyResult<Self> {
        POOL_CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
        std::thread::sleep(Duration::from_millis(50));
        Ok(ConnectionPool)
    }
}

#[derive(Debug)]
struct Ticket {
    serial: usize,
}

impl Injectable for Ticket {
    fn construct(_: &mut Dependencies) -> DependencyResult<Self> {
        Ok(Ticket { serial: 0 })
    }
}

#[derive(Debug)]
struct Gateway {
    ticket: Arc<Ticket>,
}

impl Injectable for Gateway {
    fn construct(deps: &mut Dependencies) -> DependencyResult<Self> {
        Ok(Gateway {
            ticket: deps.next()?,
        })
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_first_resolution_constructs_once() {
    let container = Arc::new(DiContainerImpl::new());
    container.add::<ConnectionPool>();

    let barrier = Arc::new(Barrier::new(CALLERS));
    let mut tasks = Vec::with_capacity(CALLERS);
    for _ in 0..CALLERS {
        let container = container.clone();
        let barrier = barrier.clone();
        tasks.push(tokio::task::spawn_blocking(move || {
            barrier.wait();
            container.get::<ConnectionPool>()
        }));
    }

    let mut resolved = Vec::with_capacity(CALLERS);
    for task in tasks {
        resolved.push(task.await.unwrap().unwrap());
    }

    assert_eq!(POOL_CONSTRUCTIONS.load(Ordering::SeqCst), 1);
    assert!(resolved.iter().all(|pool| Arc::ptr_eq(pool, &resolved[0])));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_transient_resolution_is_independent() {
    let container = Arc::new(DiContainerImpl::new());
    let serials = Arc::new(AtomicUsize::new(0));
    let counter = serials.clone();
    container.add_transient(move || {
        Ok(Ticket {
            serial: counter.fetch_add(1, Ordering::SeqCst),
        })
    });

    let mut tasks = Vec::with_capacity(CALLERS);
    for _ in 0..CALLERS {
        let container = container.clone();
        tasks.push(tokio::task::spawn_blocking(move || {
            container.get::<Ticket>().map(|ticket| ticket.serial)
        }));
    }

    let mut seen = Vec::with_capacity(CALLERS);
    for task in tasks {
        seen.push(task.await.unwrap().unwrap());
    }
    seen.sort_unstable();

    assert_eq!(seen, (0..CALLERS).collect::<Vec<_>>());
    assert_eq!(serials.load(Ordering::SeqCst), CALLERS);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_injected_singleton_is_shared_across_threads() {
    let container = Arc::new(DiContainerImpl::new());
    container.add::<Ticket>();
    let gateway = container
        .add::<Gateway>()
        .inject(&[ClassRef::of::<Ticket>()])
        .unwrap();

    let mut tasks = Vec::with_capacity(CALLERS);
    for _ in 0..CALLERS {
        let container = container.clone();
        tasks.push(tokio::spawn(async move { container.get::<Gateway>() }));
    }

    for task in tasks {
        let resolved = task.await.unwrap().unwrap();
        assert!(Arc::ptr_eq(&resolved, &gateway));
        assert!(Arc::ptr_eq(&resolved.ticket, &gateway.ticket));
        assert_eq!(resolved.ticket.serial, 0);
    }
}
