//! 查询参数
//!
//! URL 参数先按字符串接收 (`*Params`)，再转换为带默认值的强类型输入 (`*Input`)。
//! 非数字的参数视为未提供，不会让请求失败。page / limit 小于 1 时取默认值；
//! 超出整数范围的数字按上限截断，所以超大页码得到的是空页而不是第 1 页。

use serde::Deserialize;

pub const DEFAULT_API_LIMIT: u32 = 10;
pub const MAX_API_LIMIT: u32 = 100;

/// 解析十进制整数，溢出时截断到 i64 的上下限
fn saturating_int(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value = match digits.parse::<i64>() {
        Ok(v) if negative => -v,
        Ok(v) => v,
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    };
    Some(value)
}

/// 非 0 的整数 id。负数照样作为过滤条件，只是匹配不到任何记录
pub fn lenient_id(raw: Option<&str>) -> Option<i64> {
    raw.and_then(saturating_int).filter(|id| *id != 0)
}

fn positive_u32(raw: Option<&str>) -> Option<u32> {
    raw.and_then(saturating_int)
        .filter(|v| *v >= 1)
        .map(|v| v.min(u32::MAX as i64) as u32)
}

/// 页码，默认且最小为 1
pub fn lenient_page(raw: Option<&str>) -> u32 {
    positive_u32(raw).unwrap_or(1)
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub page: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct BrowseParams {
    pub category: Option<String>,
    pub page: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ApiSearchParams {
    pub q: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchInput {
    /// 已去除首尾空白，空串表示不按文本过滤
    pub query: String,
    pub category_id: Option<i64>,
    pub page: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseInput {
    pub category_id: Option<i64>,
    pub page: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSearchInput {
    pub query: String,
    pub limit: u32,
}

impl From<SearchParams> for SearchInput {
    fn from(params: SearchParams) -> Self {
        Self {
            query: params.q.as_deref().unwrap_or("").trim().to_string(),
            category_id: lenient_id(params.category.as_deref()),
            page: lenient_page(params.page.as_deref()),
        }
    }
}

impl From<BrowseParams> for BrowseInput {
    fn from(params: BrowseParams) -> Self {
        Self {
            category_id: lenient_id(params.category.as_deref()),
            page: lenient_page(params.page.as_deref()),
        }
    }
}

impl From<ApiSearchParams> for ApiSearchInput {
    fn from(params: ApiSearchParams) -> Self {
        let limit = positive_u32(params.limit.as_deref())
            .unwrap_or(DEFAULT_API_LIMIT)
            .min(MAX_API_LIMIT);
        Self {
            query: params.q.as_deref().unwrap_or("").trim().to_string(),
            limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_params_default_when_missing() {
        let input = SearchInput::from(SearchParams::default());
        assert_eq!(
            input,
            SearchInput {
                query: String::new(),
                category_id: None,
                page: 1
            }
        );
    }

    #[test]
    fn malformed_numbers_are_coerced() {
        let input = SearchInput::from(SearchParams {
            q: Some("  qi  ".into()),
            category: Some("herbs".into()),
            page: Some("two".into()),
        });
        assert_eq!(input.query, "qi");
        assert_eq!(input.category_id, None);
        assert_eq!(input.page, 1);

        let input = BrowseInput::from(BrowseParams {
            category: Some("0".into()),
            page: Some("-3".into()),
        });
        assert_eq!(input.category_id, None);
        assert_eq!(input.page, 1);
    }

    #[test]
    fn negative_category_still_filters() {
        let input = BrowseInput::from(BrowseParams {
            category: Some("-3".into()),
            page: None,
        });
        assert_eq!(input.category_id, Some(-3));
        assert_eq!(lenient_id(Some("99999999999999999999")), Some(i64::MAX));
    }

    #[test]
    fn oversized_page_saturates_instead_of_resetting() {
        assert_eq!(lenient_page(Some("99999999999")), u32::MAX);
        assert_eq!(lenient_page(Some("+7")), 7);
        assert_eq!(lenient_page(Some("1e3")), 1);
        assert_eq!(lenient_page(Some("-99999999999")), 1);
    }

    #[test]
    fn valid_numbers_are_kept() {
        let input = BrowseInput::from(BrowseParams {
            category: Some("5".into()),
            page: Some("3".into()),
        });
        assert_eq!(input.category_id, Some(5));
        assert_eq!(input.page, 3);
    }

    #[test]
    fn api_limit_defaults_and_is_capped() {
        let input = ApiSearchInput::from(ApiSearchParams {
            q: Some("qi".into()),
            limit: None,
        });
        assert_eq!(input.limit, DEFAULT_API_LIMIT);

        let input = ApiSearchInput::from(ApiSearchParams {
            q: Some("qi".into()),
            limit: Some("0".into()),
        });
        assert_eq!(input.limit, DEFAULT_API_LIMIT);

        let input = ApiSearchInput::from(ApiSearchParams {
            q: Some("qi".into()),
            limit: Some("5000".into()),
        });
        assert_eq!(input.limit, MAX_API_LIMIT);

        let input = ApiSearchInput::from(ApiSearchParams {
            q: Some("qi".into()),
            limit: Some("99999999999".into()),
        });
        assert_eq!(input.limit, MAX_API_LIMIT);
    }
}
