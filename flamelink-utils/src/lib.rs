mod compose;
mod error;
mod filter;
mod order;
mod pluck;
mod query;
mod scope;
mod utils;

pub use compose::{Composed, Deferred, Stage, Step, compose, pipe};
pub use error::Error;
pub use filter::{AVAILABLE_FILTER_OPTIONS, FilterOptions, apply_filters};
pub use flamelink_utils_derive::ContentType;
pub use order::{OrderOptions, apply_order_by};
pub use pluck::{ResultSet, pluck_fields, pluck_value};
pub use query::{Capabilities, QueryHandle, QueryMethod};
pub use scope::{DEFAULT_ENVIRONMENT, DEFAULT_LOCALE, RefScope, pluck_content};
pub use utils::{content_ref_path, navigation_ref_path, schemas_ref_path};

#[doc(hidden)]
pub use inventory;

// 内容类型元信息，由 derive 宏注册
pub struct ContentTypeMeta {
    pub reference: &'static str,
    pub field_names: &'static [&'static str],
}

impl std::fmt::Debug for ContentTypeMeta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ContentTypeMeta {{ reference: {}, fields: {:?} }}",
            self.reference, self.field_names
        )
    }
}

// 使用 inventory 收集所有内容类型
inventory::collect!(ContentTypeMeta);

/// 获取所有已注册的内容类型
///
/// 多个类型声明了同一个 reference 时每一个都会保留，不做去重
pub fn all_content_types() -> Vec<(&'static str, &'static [&'static str])> {
    inventory::iter::<ContentTypeMeta>
        .into_iter()
        .map(|meta| (meta.reference, meta.field_names))
        .collect()
}

/// ContentType trait 描述一种内容条目
pub trait ContentType {
    /// 内容类型的引用名，用于拼接引用路径
    fn reference() -> &'static str;

    /// 查询时需要保留的字段
    fn field_names() -> &'static [&'static str];
}
