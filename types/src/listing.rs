use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::pagination::{self, PageRequest};
use crate::registration::{Registration, lenient};

/// Envelope returned by `list_users.php`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListUsersResponse {
    #[serde(default, deserialize_with = "lenient::flag")]
    pub success: bool,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub pagination: Value,
}

impl ListUsersResponse {
    /// `pagination.total` when it reads as a count. Anything else is treated as
    /// missing.
    pub fn reported_total(&self) -> Option<u64> {
        let total = self.pagination.get("total")?.clone();
        lenient::optional_number(total).ok().flatten()
    }
}

/// Outcome of fetching one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PageLoad {
    Loaded {
        records: Vec<Registration>,
        total: u64,
    },
    /// The API answered but without a usable page (`success: false`, or `data`
    /// is not an array).
    Unavailable,
}

impl TryFrom<ListUsersResponse> for PageLoad {
    type Error = serde_json::Error;

    fn try_from(response: ListUsersResponse) -> Result<Self, Self::Error> {
        if !response.success || !response.data.is_array() {
            return Ok(PageLoad::Unavailable);
        }

        let reported = response.reported_total();
        let records: Vec<Registration> = serde_json::from_value(response.data)?;
        // A reported total of 0 also falls back to the page length.
        let total = reported
            .filter(|&t| t > 0)
            .unwrap_or(records.len() as u64);

        Ok(PageLoad::Loaded { records, total })
    }
}

/// Handle for one in-flight load. Only the most recently issued ticket may
/// change the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    seq: u64,
    page: u32,
}

impl LoadTicket {
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn request(&self) -> PageRequest {
        PageRequest::for_page(self.page)
    }
}

/// Records of the current page plus what is known about the whole collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    records: Vec<Registration>,
    total: u64,
    loading: bool,
    latest: u64,
}

impl Default for Listing {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            total: 0,
            loading: true,
            latest: 0,
        }
    }
}

impl Listing {
    pub fn records(&self) -> &[Registration] {
        &self.records
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn total_pages(&self) -> u32 {
        pagination::total_pages(self.total)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Start loading `page`. Any load still in flight becomes stale.
    pub fn begin(&mut self, page: u32) -> LoadTicket {
        self.latest += 1;
        self.loading = true;

        LoadTicket {
            seq: self.latest,
            page,
        }
    }

    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.seq == self.latest
    }

    /// Apply a finished load. Returns `false`, leaving the listing untouched,
    /// when a newer load has been issued since.
    pub fn complete(&mut self, ticket: LoadTicket, load: PageLoad) -> bool {
        if !self.is_current(&ticket) {
            return false;
        }

        match load {
            PageLoad::Loaded { records, total } => {
                self.records = records;
                self.total = total;
            }
            // total keeps its last known value
            PageLoad::Unavailable => self.records.clear(),
        }
        self.loading = false;
        true
    }

    /// Record a failed load. Returns `false` for stale tickets.
    pub fn fail(&mut self, ticket: LoadTicket) -> bool {
        if !self.is_current(&ticket) {
            return false;
        }

        self.records.clear();
        self.loading = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(id: u64) -> Value {
        json!({
            "id": id,
            "token": format!("tok{id}"),
            "full_name": format!("Pessoa {id}"),
            "validation": "pending",
            "is_expired": false
        })
    }

    fn page_of(count: u64, total: Option<u64>) -> Value {
        let data: Vec<Value> = (1..=count).map(record).collect();
        match total {
            Some(total) => json!({ "success": true, "data": data, "pagination": { "total": total } }),
            None => json!({ "success": true, "data": data }),
        }
    }

    fn decode(body: Value) -> PageLoad {
        let response: ListUsersResponse = serde_json::from_value(body).unwrap();
        PageLoad::try_from(response).unwrap()
    }

    #[test]
    fn first_page_of_three() {
        let mut listing = Listing::default();
        let ticket = listing.begin(1);
        assert_eq!(ticket.page(), 1);
        assert_eq!(ticket.request(), PageRequest { limit: 20, offset: 0 });
        assert!(listing.is_loading());

        assert!(listing.complete(ticket, decode(page_of(20, Some(45)))));

        assert_eq!(listing.records().len(), 20);
        assert_eq!(listing.total(), 45);
        assert_eq!(listing.total_pages(), 3);
        assert!(pagination::has_next(1, listing.total_pages()));
        assert!(!pagination::has_previous(1));
        assert!(!listing.is_loading());
    }

    #[test]
    fn total_falls_back_to_page_length() {
        assert_eq!(
            decode(page_of(5, None)),
            decode(page_of(5, Some(0))),
        );
        let PageLoad::Loaded { total, .. } = decode(page_of(5, None)) else {
            panic!("expected a loaded page");
        };
        assert_eq!(total, 5);
    }

    #[test]
    fn string_total_is_accepted() {
        let load = decode(json!({
            "success": true,
            "data": [record(1)],
            "pagination": { "total": "61" }
        }));
        let PageLoad::Loaded { total, .. } = load else {
            panic!("expected a loaded page");
        };
        assert_eq!(total, 61);
    }

    #[test]
    fn whole_float_total_is_accepted() {
        let load = decode(json!({
            "success": true,
            "data": [record(1)],
            "pagination": { "total": 45.0 }
        }));
        let PageLoad::Loaded { total, .. } = load else {
            panic!("expected a loaded page");
        };
        assert_eq!(total, 45);
    }

    #[test]
    fn unusable_total_falls_back_to_page_length() {
        for pagination in [
            json!({ "total": "n/a" }),
            json!({ "total": -4 }),
            json!({ "total": 12.5 }),
            json!({ "total": [45] }),
            json!("45"),
            json!(null),
        ] {
            let load = decode(json!({
                "success": true,
                "data": [record(1), record(2)],
                "pagination": pagination
            }));
            let PageLoad::Loaded { total, records } = load else {
                panic!("expected a loaded page for {pagination}");
            };
            assert_eq!(total, 2);
            assert_eq!(records.len(), 2);
        }
    }

    #[test]
    fn odd_validation_keeps_the_page() {
        let load = decode(json!({
            "success": true,
            "data": [{ "id": 1, "validation": 1 }, { "id": 2, "validation": "verified" }],
            "pagination": { "total": 2 }
        }));
        let PageLoad::Loaded { records, .. } = load else {
            panic!("expected a loaded page");
        };
        assert!(!records[0].validation.is_verified());
        assert!(records[1].validation.is_verified());
    }

    #[test]
    fn ticket_requests_a_full_page_at_its_offset() {
        let mut listing = Listing::default();
        let ticket = listing.begin(3);
        assert_eq!(ticket.page(), 3);
        assert_eq!(ticket.request(), PageRequest { limit: 20, offset: 40 });
    }

    #[test]
    fn unsuccessful_or_malformed_payloads_are_unavailable() {
        assert_eq!(decode(json!({ "success": false })), PageLoad::Unavailable);
        assert_eq!(
            decode(json!({ "success": false, "data": [record(1)] })),
            PageLoad::Unavailable
        );
        assert_eq!(
            decode(json!({ "success": true, "data": { "id": 1 } })),
            PageLoad::Unavailable
        );
        assert_eq!(decode(json!({ "success": true })), PageLoad::Unavailable);
    }

    #[test]
    fn broken_records_are_an_error() {
        let response: ListUsersResponse =
            serde_json::from_value(json!({ "success": true, "data": [{ "full_name": "x" }] }))
                .unwrap();
        assert!(PageLoad::try_from(response).is_err());
    }

    #[test]
    fn unavailable_clears_records_but_keeps_total() {
        let mut listing = Listing::default();
        let ticket = listing.begin(1);
        listing.complete(ticket, decode(page_of(20, Some(45))));

        let ticket = listing.begin(2);
        assert_eq!(ticket.request().offset, 20);
        assert!(listing.complete(ticket, PageLoad::Unavailable));

        assert!(listing.is_empty());
        assert_eq!(listing.total(), 45);
        assert!(!listing.is_loading());
    }

    #[test]
    fn failure_clears_records() {
        let mut listing = Listing::default();
        let ticket = listing.begin(1);
        listing.complete(ticket, decode(page_of(3, None)));

        let ticket = listing.begin(1);
        assert!(listing.fail(ticket));

        assert!(listing.is_empty());
        assert!(!listing.is_loading());
        assert_eq!(listing.total(), 3);
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut listing = Listing::default();
        let first = listing.begin(1);
        let second = listing.begin(2);

        // The newer request resolves first.
        assert!(listing.complete(second, decode(page_of(2, Some(42)))));
        assert!(!listing.complete(first, decode(page_of(20, Some(45)))));
        assert!(!listing.fail(first));

        assert_eq!(listing.records().len(), 2);
        assert_eq!(listing.total(), 42);
    }

    #[test]
    fn stale_completion_does_not_end_loading() {
        let mut listing = Listing::default();
        let first = listing.begin(1);
        let _second = listing.begin(2);

        assert!(!listing.complete(first, PageLoad::Unavailable));
        assert!(listing.is_loading());
    }

    #[test]
    fn empty_collection_has_no_pages() {
        let mut listing = Listing::default();
        let ticket = listing.begin(1);
        listing.complete(
            ticket,
            PageLoad::Loaded {
                records: Vec::new(),
                total: 0,
            },
        );

        assert_eq!(listing.total_pages(), 0);
        assert!(listing.is_empty());
        assert!(!pagination::has_next(1, listing.total_pages()));
    }
}
