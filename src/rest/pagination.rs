//! Aggregation of paged list results.
//!
//! ShipStation list endpoints return one page at a time together with a
//! page cursor (`page`, `pages`). [`collect_all`] drives a paged operation
//! until every page has been retrieved and concatenates the records in
//! page order, preserving intra-page order as returned by the server.
//!
//! One cursor quirk is tolerated deliberately: when the result fits on a
//! single page the server may report `pages` as `0`. That means "no
//! further pages", not "zero pages exist", so exactly one request is
//! issued and its records are returned.

use std::future::Future;

use crate::clients::Error;
use crate::rest::filters::Filters;

/// One page of a paged listing.
///
/// Implemented by the paged payload types (`OrdersPage`, `ShipmentsPage`)
/// so [`collect_all`] can drive any of them.
pub trait PagedResponse {
    /// The record type the page carries.
    type Record;

    /// The page number this payload represents.
    fn page(&self) -> u32;

    /// The total number of pages, possibly reported as `0` for a
    /// single-page result.
    fn pages(&self) -> u32;

    /// Consumes the page, yielding its records in server order.
    fn into_records(self) -> Vec<Self::Record>;
}

/// Fetches every page of a paged operation and concatenates the records.
///
/// The first request is issued with the caller's filters as-is (no page
/// set means the server default, page 1). While the reported cursor shows
/// further pages, the page filter is advanced and the operation re-invoked.
/// The loop terminates because the page counter strictly increases and is
/// bounded by the reported total.
///
/// # Errors
///
/// A failure on any page propagates as `Err`; an empty first page yields
/// `Ok` with an empty vector.
pub(crate) async fn collect_all<P, F, Fut>(
    mut operation: F,
    mut filters: Filters,
) -> Result<Vec<P::Record>, Error>
where
    P: PagedResponse,
    F: FnMut(Filters) -> Fut,
    Fut: Future<Output = Result<P, Error>>,
{
    let first = operation(filters.clone()).await?;

    // Tolerate a payload without a page number: the first response is the
    // server default, page 1.
    let mut page = first.page().max(1);
    let pages = first.pages();
    let mut records = first.into_records();

    while page < pages {
        page += 1;
        filters.set_page(page);

        let next = operation(filters.clone()).await?;
        records.extend(next.into_records());
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ApiFailure;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    struct TestPage {
        page: u32,
        pages: u32,
        records: Vec<i64>,
    }

    impl PagedResponse for TestPage {
        type Record = i64;

        fn page(&self) -> u32 {
            self.page
        }

        fn pages(&self) -> u32 {
            self.pages
        }

        fn into_records(self) -> Vec<i64> {
            self.records
        }
    }

    /// Serves prepared pages one at a time, recording the filters of each call.
    struct PageServer {
        pages: RefCell<VecDeque<TestPage>>,
        seen_filters: RefCell<Vec<Filters>>,
    }

    impl PageServer {
        fn new(pages: Vec<TestPage>) -> Self {
            Self {
                pages: RefCell::new(pages.into()),
                seen_filters: RefCell::new(Vec::new()),
            }
        }

        fn fetch(&self, filters: Filters) -> Result<TestPage, Error> {
            self.seen_filters.borrow_mut().push(filters);
            self.pages
                .borrow_mut()
                .pop_front()
                .ok_or_else(|| {
                    Error::Api(ApiFailure {
                        code: 404,
                        headers: std::collections::HashMap::new(),
                        raw_body: "no more pages prepared".to_string(),
                    })
                })
        }

        fn calls(&self) -> usize {
            self.seen_filters.borrow().len()
        }
    }

    #[tokio::test]
    async fn test_collects_all_pages_in_order() {
        let server = PageServer::new(vec![
            TestPage { page: 1, pages: 3, records: vec![1, 2] },
            TestPage { page: 2, pages: 3, records: vec![3] },
            TestPage { page: 3, pages: 3, records: vec![4, 5] },
        ]);

        let records = collect_all(
            |filters| std::future::ready(server.fetch(filters)),
            Filters::new(),
        )
        .await
        .unwrap();

        assert_eq!(records, vec![1, 2, 3, 4, 5]);
        assert_eq!(server.calls(), 3);
    }

    #[tokio::test]
    async fn test_advances_the_page_filter_between_calls() {
        let server = PageServer::new(vec![
            TestPage { page: 1, pages: 2, records: vec![1] },
            TestPage { page: 2, pages: 2, records: vec![2] },
        ]);

        collect_all(
            |filters| std::future::ready(server.fetch(filters)),
            Filters::new().with("orderStatus", "shipped"),
        )
        .await
        .unwrap();

        let seen = server.seen_filters.borrow();
        // First call carries the caller's filters untouched (server default page)
        assert_eq!(
            seen[0].sanitized(),
            vec![("orderStatus".to_string(), "shipped".to_string())]
        );
        // Second call adds page=2 while keeping the original filters
        assert_eq!(
            seen[1].sanitized(),
            vec![
                ("orderStatus".to_string(), "shipped".to_string()),
                ("page".to_string(), "2".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_zero_total_pages_means_single_page() {
        let server = PageServer::new(vec![TestPage {
            page: 1,
            pages: 0,
            records: vec![7, 8],
        }]);

        let records = collect_all(
            |filters| std::future::ready(server.fetch(filters)),
            Filters::new(),
        )
        .await
        .unwrap();

        assert_eq!(records, vec![7, 8]);
        assert_eq!(server.calls(), 1);
    }

    #[tokio::test]
    async fn test_empty_first_page_yields_empty_result() {
        let server = PageServer::new(vec![TestPage {
            page: 1,
            pages: 1,
            records: vec![],
        }]);

        let records = collect_all(
            |filters| std::future::ready(server.fetch(filters)),
            Filters::new(),
        )
        .await
        .unwrap();

        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_failure_propagates() {
        let server = PageServer::new(vec![]);

        let result = collect_all(
            |filters| std::future::ready(server.fetch(filters)),
            Filters::new(),
        )
        .await;

        assert!(matches!(result, Err(Error::Api(failure)) if failure.code == 404));
    }
}
