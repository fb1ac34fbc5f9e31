use serde::{Deserialize, Serialize};

/// Paging parameters of a query.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PagingInfo {
    /// 1-based page index
    pub page_number: u32,
    /// Records per page, `None` leaves the size to the backend
    pub count: Option<u32>,
    /// Opaque token issued by the backend for the next page
    pub paging_cookie: Option<String>,
    pub return_total_record_count: bool,
}

impl Default for PagingInfo {
    fn default() -> Self {
        Self {
            page_number: 1,
            count: None,
            paging_cookie: None,
            return_total_record_count: false,
        }
    }
}
