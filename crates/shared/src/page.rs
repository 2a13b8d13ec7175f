use sea_query::{Expr, Iden, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::{FromRow, SqlitePool, sqlite::SqliteRow};

#[derive(Iden)]
enum Candidates {
    Table,
}

/// A 1-based page number and a page size. Construction normalizes both so
/// callers can pass raw request values without checking them first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    page_size: u64,
}

impl PageRequest {
    /// Page size is capped at `i64::MAX`, the largest LIMIT SQLite accepts.
    pub fn new(page: i64, page_size: u64) -> Self {
        Self {
            page: page.max(1) as u64,
            page_size: page_size.clamp(1, i64::MAX as u64),
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub page_size: u64,
    pub total: u64,
    pub has_prev: bool,
    pub has_next: bool,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        let has_next = request.page.saturating_mul(request.page_size) < total;

        Self {
            items,
            page: request.page,
            page_size: request.page_size,
            total,
            has_prev: request.page > 1,
            has_next,
        }
    }

    pub fn pages(&self) -> u64 {
        self.total.div_ceil(self.page_size)
    }

    pub fn next_num(&self) -> Option<u64> {
        self.has_next.then_some(self.page + 1)
    }

    pub fn prev_num(&self) -> Option<u64> {
        self.has_prev.then_some(self.page - 1)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total: self.total,
            has_prev: self.has_prev,
            has_next: self.has_next,
        }
    }
}

/// Runs `statement` for one page. The statement must carry its own ordering
/// so consecutive pages are reproducible.
pub async fn fetch<R>(
    pool: &SqlitePool,
    statement: SelectStatement,
    request: PageRequest,
) -> crate::Result<Page<R>>
where
    R: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    let (sql, values) = sea_query::Query::select()
        .expr(Expr::cust("COUNT(*)"))
        .from_subquery(statement.clone(), Candidates::Table)
        .build_sqlx(SqliteQueryBuilder);

    let (total,): (i64,) = sqlx::query_as_with(&sql, values).fetch_one(pool).await?;
    let total = total.max(0) as u64;

    if request.offset() >= total {
        return Ok(Page::new(vec![], request, total));
    }

    let mut statement = statement;
    let (sql, values) = statement
        .limit(request.page_size)
        .offset(request.offset())
        .build_sqlx(SqliteQueryBuilder);

    let items = sqlx::query_as_with::<_, R, _>(&sql, values)
        .fetch_all(pool)
        .await?;

    tracing::debug!(
        page = request.page,
        page_size = request.page_size,
        total,
        items = items.len(),
        "fetched page"
    );

    Ok(Page::new(items, request, total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_below_one_is_normalized() {
        assert_eq!(PageRequest::new(0, 10), PageRequest::new(1, 10));
        assert_eq!(PageRequest::new(-4, 10).page(), 1);
        assert_eq!(PageRequest::new(1, 0).page_size(), 1);
    }

    #[test]
    fn oversized_page_size_is_capped() {
        let request = PageRequest::new(1, u64::MAX);
        assert_eq!(request.page_size(), i64::MAX as u64);
        assert_eq!(request.offset(), 0);

        let page = Page::new(vec![0; 4], request, 4);
        assert!(!page.has_next);
        assert_eq!(page.pages(), 1);
    }

    #[test]
    fn offset_counts_whole_pages() {
        assert_eq!(PageRequest::new(1, 10).offset(), 0);
        assert_eq!(PageRequest::new(3, 10).offset(), 20);
    }

    #[test]
    fn two_full_pages_boundaries() {
        let first = Page::new(vec![0; 5], PageRequest::new(1, 5), 10);
        assert!(!first.has_prev);
        assert!(first.has_next);
        assert_eq!(first.next_num(), Some(2));
        assert_eq!(first.prev_num(), None);

        let second = Page::new(vec![0; 5], PageRequest::new(2, 5), 10);
        assert!(second.has_prev);
        assert!(!second.has_next);
        assert_eq!(second.prev_num(), Some(1));

        let third = Page::<u8>::new(vec![], PageRequest::new(3, 5), 10);
        assert!(third.items.is_empty());
        assert!(!third.has_next);
        assert_eq!(third.pages(), 2);
    }

    #[test]
    fn partial_last_page() {
        let page = Page::new(vec![0; 1], PageRequest::new(3, 4), 9);
        assert!(!page.has_next);
        assert_eq!(page.pages(), 3);
        assert_eq!(page.map(|v| v + 1).items, vec![1]);
    }
}
