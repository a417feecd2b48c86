use serde_json::{Map, Value};

/// 查询结果：数组、键值映射或其它标量
#[derive(Clone, Debug, PartialEq)]
pub enum ResultSet {
    Sequence(Vec<Value>),
    Mapping(Map<String, Value>),
    Scalar(Value),
}

impl From<Value> for ResultSet {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(entries) => ResultSet::Sequence(entries),
            Value::Object(entries) => ResultSet::Mapping(entries),
            scalar => ResultSet::Scalar(scalar),
        }
    }
}

impl From<ResultSet> for Value {
    fn from(results: ResultSet) -> Self {
        match results {
            ResultSet::Sequence(entries) => Value::Array(entries),
            ResultSet::Mapping(entries) => Value::Object(entries),
            ResultSet::Scalar(scalar) => scalar,
        }
    }
}

// 只保留 fields 中存在于源记录上的字段，非对象记录得到空对象
fn narrow<S: AsRef<str>>(fields: &[S], record: Value) -> Value {
    let Value::Object(mut source) = record else {
        return Value::Object(Map::new());
    };
    let mut narrowed = Map::new();
    for field in fields {
        let field = field.as_ref();
        if let Some(value) = source.remove(field) {
            narrowed.insert(field.to_string(), value);
        }
    }
    Value::Object(narrowed)
}

/// 从结果集的每条记录中挑选指定字段，外层结构和顺序保持不变
pub fn pluck_fields<S: AsRef<str>>(fields: Option<&[S]>, results: ResultSet) -> ResultSet {
    let fields = match fields {
        Some(fields) if !fields.is_empty() => fields,
        _ => return results,
    };

    match results {
        ResultSet::Sequence(entries) => ResultSet::Sequence(
            entries
                .into_iter()
                .map(|entry| narrow(fields, entry))
                .collect(),
        ),
        ResultSet::Mapping(entries) => ResultSet::Mapping(
            entries
                .into_iter()
                .map(|(key, entry)| (key, narrow(fields, entry)))
                .collect(),
        ),
        scalar @ ResultSet::Scalar(_) => scalar,
    }
}

pub fn pluck_value<S: AsRef<str>>(fields: Option<&[S]>, value: Value) -> Value {
    pluck_fields(fields, ResultSet::from(value)).into()
}
