//! Pagination parameters shared across all list endpoints.

use serde::Deserialize;

/// Page selection, deserializable straight from query params.
///
/// - `per-page`: 1-100, default 20
/// - `page`: at least 1, default 1
///
/// Out-of-range values are accepted at the edge and brought back into
/// range by `clamped`, which the repositories apply before querying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PageRequest {
    #[serde(default = "default_per_page", rename = "per-page")]
    pub per_page: u32,
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_per_page() -> u32 {
    20
}

fn default_page() -> u32 {
    1
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
            page: default_page(),
        }
    }
}

impl PageRequest {
    /// Clamp `per_page` into 1-100 and `page` to at least 1.
    pub fn clamped(self) -> Self {
        Self {
            per_page: self.per_page.clamp(1, 100),
            page: self.page.max(1),
        }
    }

    /// Row offset of the first item on this page, after clamping.
    pub fn offset(self) -> u64 {
        let Self { per_page, page } = self.clamped();
        u64::from(page - 1) * u64::from(per_page)
    }

    /// Largest number of rows a page may hold, after clamping.
    pub fn limit(self) -> u64 {
        u64::from(self.clamped().per_page)
    }
}
