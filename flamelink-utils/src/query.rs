use serde_json::Value;

/// 查询句柄上可能存在的方法
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueryMethod {
    LimitToFirst,
    LimitToLast,
    StartAt,
    EndAt,
    EqualTo,
    OrderByKey,
    OrderByValue,
    OrderByChild,
}

impl QueryMethod {
    pub const FILTERS: [QueryMethod; 5] = [
        QueryMethod::LimitToFirst,
        QueryMethod::LimitToLast,
        QueryMethod::StartAt,
        QueryMethod::EndAt,
        QueryMethod::EqualTo,
    ];

    pub const ORDERINGS: [QueryMethod; 3] = [
        QueryMethod::OrderByKey,
        QueryMethod::OrderByValue,
        QueryMethod::OrderByChild,
    ];

    /// 数据库客户端中的方法名
    pub const fn name(self) -> &'static str {
        match self {
            QueryMethod::LimitToFirst => "limitToFirst",
            QueryMethod::LimitToLast => "limitToLast",
            QueryMethod::StartAt => "startAt",
            QueryMethod::EndAt => "endAt",
            QueryMethod::EqualTo => "equalTo",
            QueryMethod::OrderByKey => "orderByKey",
            QueryMethod::OrderByValue => "orderByValue",
            QueryMethod::OrderByChild => "orderByChild",
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl std::fmt::Display for QueryMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 句柄实际支持的方法集合
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Capabilities(u8);

impl Capabilities {
    pub const NONE: Capabilities = Capabilities(0);
    pub const ALL: Capabilities = Capabilities(u8::MAX);

    pub const fn with(self, method: QueryMethod) -> Self {
        Capabilities(self.0 | method.bit())
    }

    pub const fn without(self, method: QueryMethod) -> Self {
        Capabilities(self.0 & !method.bit())
    }

    pub const fn contains(self, method: QueryMethod) -> bool {
        self.0 & method.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = QueryMethod> {
        QueryMethod::FILTERS
            .into_iter()
            .chain(QueryMethod::ORDERINGS)
            .filter(move |method| self.contains(*method))
    }
}

impl FromIterator<QueryMethod> for Capabilities {
    fn from_iter<I: IntoIterator<Item = QueryMethod>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Capabilities::NONE, |caps, method| caps.with(method))
    }
}

impl std::fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// 数据库查询句柄
///
/// 每个方法消费当前句柄并返回下一个句柄，对应客户端的链式调用。
/// 只有 `capabilities` 中声明的方法才会被调用，未实现的方法默认原样返回。
pub trait QueryHandle: Sized {
    fn capabilities(&self) -> Capabilities;

    fn limit_to_first(self, _limit: &Value) -> Self {
        self
    }

    fn limit_to_last(self, _limit: &Value) -> Self {
        self
    }

    fn start_at(self, _value: &Value) -> Self {
        self
    }

    fn end_at(self, _value: &Value) -> Self {
        self
    }

    fn equal_to(self, _value: &Value) -> Self {
        self
    }

    fn order_by_key(self) -> Self {
        self
    }

    fn order_by_value(self) -> Self {
        self
    }

    fn order_by_child(self, _path: &str) -> Self {
        self
    }

    fn supports(&self, method: QueryMethod) -> bool {
        self.capabilities().contains(method)
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use std::cell::RefCell;

    use serde_json::{Value, json};

    use super::{Capabilities, QueryHandle, QueryMethod};

    /// 记录每次调用的测试句柄，以引用的形式在链上传递
    #[derive(Debug, Default)]
    pub(crate) struct MockRef {
        caps: Capabilities,
        calls: RefCell<Vec<(QueryMethod, Value)>>,
    }

    impl MockRef {
        pub(crate) fn new(caps: Capabilities) -> Self {
            Self {
                caps,
                calls: RefCell::new(Vec::new()),
            }
        }

        pub(crate) fn count(&self, method: QueryMethod) -> usize {
            self.calls
                .borrow()
                .iter()
                .filter(|(called, _)| *called == method)
                .count()
        }

        pub(crate) fn calls(&self) -> Vec<(QueryMethod, Value)> {
            self.calls.borrow().clone()
        }

        fn record(&self, method: QueryMethod, arg: Value) -> &Self {
            self.calls.borrow_mut().push((method, arg));
            self
        }
    }

    impl<'a> QueryHandle for &'a MockRef {
        fn capabilities(&self) -> Capabilities {
            self.caps
        }

        fn limit_to_first(self, limit: &Value) -> Self {
            self.record(QueryMethod::LimitToFirst, limit.clone())
        }

        fn limit_to_last(self, limit: &Value) -> Self {
            self.record(QueryMethod::LimitToLast, limit.clone())
        }

        fn start_at(self, value: &Value) -> Self {
            self.record(QueryMethod::StartAt, value.clone())
        }

        fn end_at(self, value: &Value) -> Self {
            self.record(QueryMethod::EndAt, value.clone())
        }

        fn equal_to(self, value: &Value) -> Self {
            self.record(QueryMethod::EqualTo, value.clone())
        }

        fn order_by_key(self) -> Self {
            self.record(QueryMethod::OrderByKey, Value::Null)
        }

        fn order_by_value(self) -> Self {
            self.record(QueryMethod::OrderByValue, Value::Null)
        }

        fn order_by_child(self, path: &str) -> Self {
            self.record(QueryMethod::OrderByChild, json!(path))
        }
    }
}
