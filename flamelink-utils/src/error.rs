/// 参数校验错误。消息不带 `[FLAMELINK] ` 前缀，前缀由 SDK 在对外抛出时添加
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("The reference, environment and locale arguments are all required")]
    MissingReferenceArguments,
    #[error("\"orderByChild\" should specify the child key to order by")]
    InvalidOrderByChild,
}
