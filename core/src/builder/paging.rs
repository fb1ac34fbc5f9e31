use crate::expression::PagingInfo;

/// Builds a [`PagingInfo`]; unset fields keep the first-page defaults.
#[derive(Debug, Default)]
pub struct PagingInfoBuilder {
    paging: PagingInfo,
}

impl PagingInfoBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_number(&mut self, page_number: u32) -> &mut Self {
        self.paging.page_number = page_number;
        self
    }

    pub fn page_size(&mut self, count: u32) -> &mut Self {
        self.paging.count = Some(count);
        self
    }

    pub fn paging_cookie(&mut self, cookie: impl Into<String>) -> &mut Self {
        self.paging.paging_cookie = Some(cookie.into());
        self
    }

    pub fn return_total_record_count(&mut self, return_count: bool) -> &mut Self {
        self.paging.return_total_record_count = return_count;
        self
    }

    pub fn build(self) -> PagingInfo {
        self.paging
    }
}
