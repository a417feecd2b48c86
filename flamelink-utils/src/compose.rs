use std::{future::Future, sync::Arc};

use futures::{
    FutureExt,
    future::{self, BoxFuture},
};
use log::trace;

/// 统一的延迟结果类型，同步和异步阶段都会被提升为它
pub type Deferred<T, E> = BoxFuture<'static, Result<T, E>>;

/// 单个阶段的返回值：可能立即可用，也可能需要等待
pub enum Step<T, E> {
    Ready(Result<T, E>),
    Deferred(Deferred<T, E>),
}

impl<T, E> Step<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    pub fn into_deferred(self) -> Deferred<T, E> {
        match self {
            Step::Ready(result) => future::ready(result).boxed(),
            Step::Deferred(fut) => fut,
        }
    }
}

type StageFn<T, E> = dyn Fn(T) -> Step<T, E> + Send + Sync;

pub struct Stage<T, E> {
    f: Arc<StageFn<T, E>>,
}

impl<T, E> Clone for Stage<T, E> {
    fn clone(&self) -> Self {
        Self { f: self.f.clone() }
    }
}

impl<T, E> Stage<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) -> Step<T, E> + Send + Sync + 'static,
    {
        Self { f: Arc::new(f) }
    }

    /// 同步且不会失败的阶段
    pub fn sync<F>(f: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        Self::new(move |value| Step::Ready(Ok(f(value))))
    }

    pub fn try_sync<F>(f: F) -> Self
    where
        F: Fn(T) -> Result<T, E> + Send + Sync + 'static,
    {
        Self::new(move |value| Step::Ready(f(value)))
    }

    /// 异步阶段
    pub fn deferred<F, Fut>(f: F) -> Self
    where
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self::new(move |value| Step::Deferred(f(value).boxed()))
    }

    pub fn call(&self, value: T) -> Step<T, E> {
        (self.f)(value)
    }
}

/// 组合后的函数，按顺序执行所有阶段
pub struct Composed<T, E> {
    stages: Arc<[Stage<T, E>]>,
}

impl<T, E> Clone for Composed<T, E> {
    fn clone(&self) -> Self {
        Self {
            stages: self.stages.clone(),
        }
    }
}

impl<T, E> Composed<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    fn in_order(stages: Vec<Stage<T, E>>) -> Self {
        Self {
            stages: stages.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// 每个阶段的结果作为下一个阶段的输入，任一阶段失败立即返回该错误
    pub fn run(&self, input: T) -> Deferred<T, E> {
        let stages = self.stages.clone();
        async move {
            let mut value = input;
            for (index, stage) in stages.iter().enumerate() {
                trace!("running stage {}/{}", index + 1, stages.len());
                value = stage.call(value).into_deferred().await?;
            }
            Ok(value)
        }
        .boxed()
    }

    pub fn into_fn(self) -> impl Fn(T) -> Deferred<T, E> + Send + Sync + 'static {
        move |value| self.run(value)
    }
}

impl<T, E> From<Composed<T, E>> for Stage<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    fn from(composed: Composed<T, E>) -> Self {
        Stage::new(move |value| Step::Deferred(composed.run(value)))
    }
}

/// 从右向左组合：最后一个阶段最先接收输入
pub fn compose<T, E>(stages: impl IntoIterator<Item = Stage<T, E>>) -> Composed<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    let mut stages: Vec<_> = stages.into_iter().collect();
    stages.reverse();
    Composed::in_order(stages)
}

/// 从左向右组合：第一个阶段最先接收输入
pub fn pipe<T, E>(stages: impl IntoIterator<Item = Stage<T, E>>) -> Composed<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    Composed::in_order(stages.into_iter().collect())
}
