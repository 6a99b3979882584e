use serde::Serialize;

/// 分页请求，page 从 1 开始
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl PageRequest {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    pub fn offset(&self) -> i64 {
        (self.page as i64 - 1) * self.per_page as i64
    }

    pub fn limit(&self) -> i64 {
        self.per_page as i64
    }
}

/// 一页结果。页码超出范围时 items 为空，不报错
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub pages: u64,
    pub has_prev: bool,
    pub has_next: bool,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        let per_page = request.per_page as u64;
        let pages = total.div_ceil(per_page);
        Self {
            items,
            total,
            page: request.page,
            per_page: request.per_page,
            pages,
            has_prev: request.page > 1,
            has_next: (request.page as u64) < pages,
        }
    }

    pub fn empty(request: PageRequest) -> Self {
        Self::new(Vec::new(), 0, request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_follow_page_number() {
        assert_eq!(PageRequest::new(1, 20).offset(), 0);
        assert_eq!(PageRequest::new(3, 25).offset(), 50);
        // page 0 按第 1 页处理
        assert_eq!(PageRequest::new(0, 10), PageRequest::new(1, 10));
    }

    #[test]
    fn page_flags() {
        let first = Paginated::new(vec![1; 20], 45, PageRequest::new(1, 20));
        assert_eq!(first.pages, 3);
        assert!(!first.has_prev);
        assert!(first.has_next);

        let last = Paginated::new(vec![1; 5], 45, PageRequest::new(3, 20));
        assert!(last.has_prev);
        assert!(!last.has_next);
    }

    #[test]
    fn beyond_last_page_is_empty_without_next() {
        let page: Paginated<i32> = Paginated::new(Vec::new(), 3, PageRequest::new(9, 25));
        assert_eq!(page.pages, 1);
        assert!(page.items.is_empty());
        assert!(page.has_prev);
        assert!(!page.has_next);
    }

    #[test]
    fn empty_result_has_no_pages() {
        let page: Paginated<i32> = Paginated::empty(PageRequest::new(1, 20));
        assert_eq!(page.pages, 0);
        assert!(!page.has_prev);
        assert!(!page.has_next);
    }
}
