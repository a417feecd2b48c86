use log::{debug, trace};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    Error,
    query::{QueryHandle, QueryMethod},
};

/// 排序配置，最多生效一项，优先级 key > value > child
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderOptions {
    pub order_by_key: Option<bool>,
    pub order_by_value: Option<bool>,
    pub order_by_child: Option<Value>,
}

impl OrderOptions {
    pub fn by_key() -> Self {
        Self {
            order_by_key: Some(true),
            ..Default::default()
        }
    }

    pub fn by_value() -> Self {
        Self {
            order_by_value: Some(true),
            ..Default::default()
        }
    }

    pub fn by_child(path: impl Into<String>) -> Self {
        Self {
            order_by_child: Some(Value::String(path.into())),
            ..Default::default()
        }
    }
}

pub fn apply_order_by<H: QueryHandle>(
    handle: H,
    options: Option<&OrderOptions>,
) -> Result<H, Error> {
    let Some(options) = options else {
        return Ok(handle);
    };

    if options.order_by_key == Some(true) && handle.supports(QueryMethod::OrderByKey) {
        trace!("applying `{}`", QueryMethod::OrderByKey);
        return Ok(handle.order_by_key());
    }

    if options.order_by_value == Some(true) && handle.supports(QueryMethod::OrderByValue) {
        trace!("applying `{}`", QueryMethod::OrderByValue);
        return Ok(handle.order_by_value());
    }

    if let Some(child) = &options.order_by_child {
        let Value::String(child) = child else {
            return Err(Error::InvalidOrderByChild);
        };
        if handle.supports(QueryMethod::OrderByChild) {
            trace!("applying `{}` with {:?}", QueryMethod::OrderByChild, child);
            return Ok(handle.order_by_child(child));
        }
        debug!(
            "query handle does not support `{}`, skipped",
            QueryMethod::OrderByChild
        );
    }

    Ok(handle)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::query::{Capabilities, mock::MockRef};

    fn ordering_ref() -> MockRef {
        MockRef::new(QueryMethod::ORDERINGS.into_iter().collect())
    }

    #[test]
    fn no_options_returns_same_handle() {
        let mock = ordering_ref();
        let handle = apply_order_by(&mock, None).unwrap();
        assert!(std::ptr::eq(handle, &mock));
        assert!(mock.calls().is_empty());
    }

    #[test]
    fn order_by_key() {
        let mock = ordering_ref();
        apply_order_by(&mock, Some(&OrderOptions::by_key())).unwrap();
        assert_eq!(mock.count(QueryMethod::OrderByKey), 1);
        assert_eq!(mock.calls().len(), 1);
    }

    #[test]
    fn order_by_value() {
        let mock = ordering_ref();
        apply_order_by(&mock, Some(&OrderOptions::by_value())).unwrap();
        assert_eq!(mock.count(QueryMethod::OrderByValue), 1);
        assert_eq!(mock.calls().len(), 1);
    }

    #[test]
    fn order_by_child() {
        let mock = ordering_ref();
        apply_order_by(&mock, Some(&OrderOptions::by_child("child"))).unwrap();
        assert_eq!(
            mock.calls(),
            vec![(QueryMethod::OrderByChild, json!("child"))]
        );
    }

    #[test]
    fn order_by_child_must_be_a_string() {
        let mock = ordering_ref();
        let options: OrderOptions =
            serde_json::from_value(json!({ "orderByChild": true })).unwrap();
        let err = apply_order_by(&mock, Some(&options)).unwrap_err();
        assert_eq!(err, Error::InvalidOrderByChild);
        assert!(
            err.to_string()
                .contains("\"orderByChild\" should specify the child key to order by")
        );
        assert!(mock.calls().is_empty());
    }

    #[test]
    fn invalid_child_is_rejected_even_without_capability() {
        let mock = MockRef::new(Capabilities::NONE);
        let options = OrderOptions {
            order_by_child: Some(json!(42)),
            ..Default::default()
        };
        assert_eq!(
            apply_order_by(&mock, Some(&options)).unwrap_err(),
            Error::InvalidOrderByChild
        );
    }

    #[test]
    fn only_one_ordering_is_honoured() {
        let mock = ordering_ref();
        let options: OrderOptions = serde_json::from_value(json!({
            "orderByKey": true,
            "orderByValue": true,
            "orderByChild": "title",
        }))
        .unwrap();
        apply_order_by(&mock, Some(&options)).unwrap();
        assert_eq!(mock.calls(), vec![(QueryMethod::OrderByKey, json!(null))]);
    }

    #[test]
    fn falls_through_when_method_missing() {
        let mock = MockRef::new(Capabilities::NONE.with(QueryMethod::OrderByChild));
        let options = OrderOptions {
            order_by_key: Some(true),
            order_by_child: Some(json!("title")),
            ..Default::default()
        };
        apply_order_by(&mock, Some(&options)).unwrap();
        assert_eq!(
            mock.calls(),
            vec![(QueryMethod::OrderByChild, json!("title"))]
        );
    }

    #[test]
    fn false_flags_are_ignored() {
        let mock = ordering_ref();
        let options: OrderOptions =
            serde_json::from_value(json!({ "orderByKey": false, "orderByValue": false }))
                .unwrap();
        let handle = apply_order_by(&mock, Some(&options)).unwrap();
        assert!(std::ptr::eq(handle, &mock));
        assert!(mock.calls().is_empty());
    }
}
