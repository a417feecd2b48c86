use log::{debug, trace};
use serde::Deserialize;
use serde_json::Value;

use crate::query::{QueryHandle, QueryMethod};

/// 支持的过滤选项，按应用顺序排列
pub const AVAILABLE_FILTER_OPTIONS: [&str; 5] = [
    QueryMethod::LimitToFirst.name(),
    QueryMethod::LimitToLast.name(),
    QueryMethod::StartAt.name(),
    QueryMethod::EndAt.name(),
    QueryMethod::EqualTo.name(),
];

/// 过滤配置。未识别的键在反序列化时直接忽略，`null` 视为未设置。
/// 所有取值都原样交给查询句柄，包括 limit，由数据库客户端自行校验
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterOptions {
    pub limit_to_first: Option<Value>,
    pub limit_to_last: Option<Value>,
    pub start_at: Option<Value>,
    pub end_at: Option<Value>,
    pub equal_to: Option<Value>,
}

impl FilterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit_to_first(mut self, limit: impl Into<Value>) -> Self {
        self.limit_to_first = Some(limit.into());
        self
    }

    pub fn limit_to_last(mut self, limit: impl Into<Value>) -> Self {
        self.limit_to_last = Some(limit.into());
        self
    }

    pub fn start_at(mut self, value: impl Into<Value>) -> Self {
        self.start_at = Some(value.into());
        self
    }

    pub fn end_at(mut self, value: impl Into<Value>) -> Self {
        self.end_at = Some(value.into());
        self
    }

    pub fn equal_to(mut self, value: impl Into<Value>) -> Self {
        self.equal_to = Some(value.into());
        self
    }

    pub fn is_set(&self, method: QueryMethod) -> bool {
        match method {
            QueryMethod::LimitToFirst => self.limit_to_first.is_some(),
            QueryMethod::LimitToLast => self.limit_to_last.is_some(),
            QueryMethod::StartAt => self.start_at.is_some(),
            QueryMethod::EndAt => self.end_at.is_some(),
            QueryMethod::EqualTo => self.equal_to.is_some(),
            _ => false,
        }
    }

    // 把单个选项应用到句柄上，选项未设置时原样返回
    fn apply<H: QueryHandle>(&self, handle: H, method: QueryMethod) -> H {
        match method {
            QueryMethod::LimitToFirst => match &self.limit_to_first {
                Some(limit) => handle.limit_to_first(limit),
                None => handle,
            },
            QueryMethod::LimitToLast => match &self.limit_to_last {
                Some(limit) => handle.limit_to_last(limit),
                None => handle,
            },
            QueryMethod::StartAt => match &self.start_at {
                Some(value) => handle.start_at(value),
                None => handle,
            },
            QueryMethod::EndAt => match &self.end_at {
                Some(value) => handle.end_at(value),
                None => handle,
            },
            QueryMethod::EqualTo => match &self.equal_to {
                Some(value) => handle.equal_to(value),
                None => handle,
            },
            _ => handle,
        }
    }
}

/// 依次应用所有已设置且句柄支持的过滤选项
pub fn apply_filters<H: QueryHandle>(handle: H, options: Option<&FilterOptions>) -> H {
    let Some(options) = options else {
        return handle;
    };

    let mut handle = handle;
    for method in QueryMethod::FILTERS {
        if !options.is_set(method) {
            continue;
        }
        if !handle.supports(method) {
            debug!("query handle does not support `{}`, skipped", method);
            continue;
        }
        trace!("applying `{}`", method);
        handle = options.apply(handle, method);
    }
    handle
}
