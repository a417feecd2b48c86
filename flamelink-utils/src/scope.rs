use serde::Deserialize;

use crate::{
    ContentType, Error,
    pluck::{ResultSet, pluck_fields},
    utils::{content_ref_path, navigation_ref_path, schemas_ref_path},
};

pub const DEFAULT_ENVIRONMENT: &str = "production";
pub const DEFAULT_LOCALE: &str = "en-US";

/// SDK 当前使用的环境和语言
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RefScope {
    pub environment: String,
    pub locale: String,
}

impl Default for RefScope {
    fn default() -> Self {
        Self {
            environment: DEFAULT_ENVIRONMENT.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl RefScope {
    pub fn new(environment: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
            locale: locale.into(),
        }
    }

    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn content_path(&self, reference: &str) -> Result<String, Error> {
        content_ref_path(
            Some(reference),
            Some(self.environment.as_str()),
            Some(self.locale.as_str()),
        )
    }

    pub fn navigation_path(&self, reference: &str) -> Result<String, Error> {
        navigation_ref_path(
            Some(reference),
            Some(self.environment.as_str()),
            Some(self.locale.as_str()),
        )
    }

    pub fn schemas_path(&self, reference: &str) -> Result<String, Error> {
        schemas_ref_path(
            Some(reference),
            Some(self.environment.as_str()),
            Some(self.locale.as_str()),
        )
    }

    pub fn content_path_for<T: ContentType>(&self) -> Result<String, Error> {
        self.content_path(T::reference())
    }
}

/// 只保留内容类型声明过的字段
pub fn pluck_content<T: ContentType>(results: ResultSet) -> ResultSet {
    pluck_fields(Some(T::field_names()), results)
}
