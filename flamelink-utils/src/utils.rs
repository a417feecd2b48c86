use crate::Error;

// 三个参数缺一不可，schemas 路径虽然只用到 reference 也一样校验
fn require<'a>(
    reference: Option<&'a str>,
    environment: Option<&'a str>,
    locale: Option<&'a str>,
) -> Result<(&'a str, &'a str, &'a str), Error> {
    let (Some(reference), Some(environment), Some(locale)) = (reference, environment, locale)
    else {
        return Err(Error::MissingReferenceArguments);
    };
    Ok((reference, environment, locale))
}

/// 内容条目的引用路径: `/environments/{environment}/content/{reference}/{locale}`
pub fn content_ref_path(
    reference: Option<&str>,
    environment: Option<&str>,
    locale: Option<&str>,
) -> Result<String, Error> {
    let (reference, environment, locale) = require(reference, environment, locale)?;
    Ok(format!(
        "/environments/{}/content/{}/{}",
        environment, reference, locale
    ))
}

/// 导航菜单的引用路径: `/environments/{environment}/navigation/{reference}/{locale}`
pub fn navigation_ref_path(
    reference: Option<&str>,
    environment: Option<&str>,
    locale: Option<&str>,
) -> Result<String, Error> {
    let (reference, environment, locale) = require(reference, environment, locale)?;
    Ok(format!(
        "/environments/{}/navigation/{}/{}",
        environment, reference, locale
    ))
}

/// schema 的引用路径: `/schemas/{reference}`，与环境和语言无关
pub fn schemas_ref_path(
    reference: Option<&str>,
    environment: Option<&str>,
    locale: Option<&str>,
) -> Result<String, Error> {
    let (reference, _, _) = require(reference, environment, locale)?;
    Ok(format!("/schemas/{}", reference))
}

#[cfg(test)]
mod tests {
    use super::*;

    const REF: &str = "my-reference";
    const ENV: &str = "my-environment";
    const LOCALE: &str = "my-locale";

    type PathFn = fn(Option<&str>, Option<&str>, Option<&str>) -> Result<String, Error>;

    fn assert_requires_all(path_fn: PathFn) {
        for (reference, environment, locale) in [
            (Some(REF), Some(ENV), None),
            (Some(REF), None, Some(LOCALE)),
            (None, Some(ENV), Some(LOCALE)),
            (None, None, None),
        ] {
            let err = path_fn(reference, environment, locale).unwrap_err();
            assert_eq!(err, Error::MissingReferenceArguments);
            assert_eq!(
                err.to_string(),
                "The reference, environment and locale arguments are all required"
            );
        }
    }

    #[test]
    fn content_path() {
        assert_eq!(
            content_ref_path(Some(REF), Some(ENV), Some(LOCALE)).unwrap(),
            "/environments/my-environment/content/my-reference/my-locale"
        );
        assert_requires_all(content_ref_path);
    }

    #[test]
    fn navigation_path() {
        assert_eq!(
            navigation_ref_path(Some(REF), Some(ENV), Some(LOCALE)).unwrap(),
            "/environments/my-environment/navigation/my-reference/my-locale"
        );
        assert_requires_all(navigation_ref_path);
    }

    #[test]
    fn schemas_path_ignores_environment_and_locale() {
        assert_eq!(
            schemas_ref_path(Some(REF), Some(ENV), Some(LOCALE)).unwrap(),
            "/schemas/my-reference"
        );
        assert_eq!(
            schemas_ref_path(Some(REF), Some("staging"), Some("af-ZA")).unwrap(),
            "/schemas/my-reference"
        );
        assert_requires_all(schemas_ref_path);
    }

    #[test]
    fn empty_strings_are_not_rejected() {
        assert_eq!(
            content_ref_path(Some(""), Some(""), Some("")).unwrap(),
            "/environments//content//"
        );
    }
}
