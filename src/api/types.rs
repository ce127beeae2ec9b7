// src/api/types.rs
//! Type definitions for the regulations.gov API module.

use crate::constants::{COMMENTS_SORT_ORDER, FIRST_PAGE_NUMBER};
use crate::model::{format_posted_date, Comment};
use chrono::{Days, NaiveDate};

/// One request against the comment listing: a document scope, a single
/// posting day and a page number within that day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentQuery {
    pub object_id: String,
    pub posted_date: NaiveDate,
    pub page_number: u32,
}

impl CommentQuery {
    /// The first page of `day`.
    pub fn first_page(object_id: impl Into<String>, day: NaiveDate) -> Self {
        Self {
            object_id: object_id.into(),
            posted_date: day,
            page_number: FIRST_PAGE_NUMBER,
        }
    }

    /// The following page of the same day.
    pub fn next_page(self) -> Self {
        Self {
            page_number: self.page_number + 1,
            ..self
        }
    }

    /// The first page of the following calendar day.
    pub fn next_day(self) -> Self {
        let next = self
            .posted_date
            .checked_add_days(Days::new(1))
            .unwrap_or(NaiveDate::MAX);
        Self {
            posted_date: next,
            page_number: FIRST_PAGE_NUMBER,
            ..self
        }
    }

    /// Query parameters in the order the listing endpoint documents them.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("filter[commentOnId]", self.object_id.clone()),
            ("page[number]", self.page_number.to_string()),
            ("sort", COMMENTS_SORT_ORDER.to_string()),
            ("filter[postedDate]", format_posted_date(self.posted_date)),
        ]
    }
}

/// One decoded page of the comment listing.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentPage {
    pub comments: Vec<Comment>,
    /// No further pages exist for this query's day.
    pub last_page: bool,
}
