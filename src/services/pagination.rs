// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Page arithmetic and navigation links for the user listing.
//!
//! Listing parameters are clamped into range, never rejected.

use serde::Serialize;
use std::num::IntErrorKind;

pub const DEFAULT_PAGE_NUMBER: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: u64 = 20;

/// Read one raw listing parameter.
///
/// Missing or non-numeric values give `default`; integers too large for
/// `i64` saturate so that clamping still applies to them.
pub fn parse_page_param(raw: Option<&str>, default: i64) -> i64 {
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse::<i64>() {
        Ok(value) => value,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => default,
        },
    }
}

/// Effective page coordinates after clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-indexed, at least 1
    pub number: u64,
    /// In `1..=MAX_PAGE_SIZE`
    pub size: u64,
}

impl PageRequest {
    /// Build a request from raw query values, each parsed on its own.
    pub fn from_raw(page_number: Option<&str>, page_size: Option<&str>) -> Self {
        Self::clamped(
            parse_page_param(page_number, DEFAULT_PAGE_NUMBER),
            parse_page_param(page_size, DEFAULT_PAGE_SIZE),
        )
    }

    pub fn clamped(requested_page: i64, requested_size: i64) -> Self {
        Self {
            number: requested_page.max(1).unsigned_abs(),
            size: requested_size.clamp(1, MAX_PAGE_SIZE as i64).unsigned_abs(),
        }
    }

    /// Number of items before this page. Saturates for absurd page numbers.
    pub fn skip(&self) -> u64 {
        (self.number - 1).saturating_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::clamped(DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE)
    }
}

/// Page metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub total_count: u64,
    pub page_size: u64,
    pub current_page: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl Page {
    pub fn new(total_count: u64, request: PageRequest) -> Self {
        let total_pages = total_count.div_ceil(request.size);
        Self {
            total_count,
            page_size: request.size,
            current_page: request.number,
            total_pages,
            has_next: request.number < total_pages,
            has_previous: request.number > 1,
        }
    }
}

/// Compute page metadata from raw listing parameters.
pub fn paginate(total_count: u64, requested_page: i64, requested_size: i64) -> Page {
    Page::new(total_count, PageRequest::clamped(requested_page, requested_size))
}

/// Navigation references to the neighbouring pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLinks {
    pub next: Option<String>,
    pub previous: Option<String>,
}

fn page_link(route: &str, number: u64, size: u64) -> String {
    let separator = if route.contains('?') { '&' } else { '?' };
    format!("{route}{separator}pageNumber={number}&pageSize={size}")
}

/// Build next/previous links for `route`.
///
/// Link presence follows the flags exactly as given; they are not recomputed
/// here.
pub fn build_links(
    route: &str,
    page: u64,
    size: u64,
    has_next: bool,
    has_previous: bool,
) -> PageLinks {
    PageLinks {
        next: has_next.then(|| page_link(route, page.saturating_add(1), size)),
        previous: has_previous.then(|| page_link(route, page.saturating_sub(1), size)),
    }
}

/// Payload of the `X-Pagination` response header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationHeader {
    pub previous_page_link: Option<String>,
    pub next_page_link: Option<String>,
    pub total_count: u64,
    pub page_size: u64,
    pub current_page: u64,
    pub total_pages: u64,
}

impl PaginationHeader {
    pub fn new(page: &Page, links: PageLinks) -> Self {
        Self {
            previous_page_link: links.previous,
            next_page_link: links.next,
            total_count: page.total_count,
            page_size: page.page_size,
            current_page: page.current_page,
            total_pages: page.total_pages,
        }
    }
}
