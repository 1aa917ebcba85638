//! # Pages
//!
//! A [`Page`] is one slice of a larger collection plus the metadata needed to
//! link to its neighbours. Pages are built fresh for every request from the
//! data-access result ([`PageItems`]) and the requested [`Pagination`].

use crate::model::ModelType;
use std::any::Any;

/// Requested page number and page size, both 1-based and positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    per_page: usize,
}

impl Pagination {
    /// Creates a pagination request. Zero values are raised to 1.
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Index of the first item of this page in the whole collection.
    pub fn start_position(&self) -> usize {
        (self.page - 1) * self.per_page
    }

    /// Index one past the last item of this page.
    pub fn end_position(&self) -> usize {
        self.page * self.per_page
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, 30)
    }
}

/// Items returned by a data-access call together with the size of the whole collection.
#[derive(Debug, Clone)]
pub struct PageItems<T> {
    pub items: Vec<T>,
    pub total_count: usize,
}

impl<T> PageItems<T> {
    pub fn new(items: Vec<T>, total_count: usize) -> Self {
        Self { items, total_count }
    }
}

/// One page of models of type `T`.
#[derive(Debug, Clone)]
pub struct Page<T> {
    items: Vec<T>,
    total_count: usize,
    page_number: usize,
    items_per_page: usize,
    model_type: ModelType,
}

impl<T: Any> Page<T> {
    /// Builds a page. A requested page past the end is clamped to the last page
    /// (page 1 for an empty collection), so `page_number` always lies in
    /// `1..=max(1, last_page_number)`.
    pub fn new(page_items: PageItems<T>, pagination: Pagination) -> Self {
        let last_page_number = page_items
            .total_count
            .div_ceil(pagination.per_page())
            .max(1);
        Self {
            items: page_items.items,
            total_count: page_items.total_count,
            page_number: pagination.page().min(last_page_number),
            items_per_page: pagination.per_page(),
            model_type: ModelType::of::<T>(),
        }
    }
}

impl<T> Page<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn page_number(&self) -> usize {
        self.page_number
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn model_type(&self) -> ModelType {
        self.model_type
    }

    /// `ceil(total_count / items_per_page)`; zero for an empty collection.
    pub fn last_page_number(&self) -> usize {
        self.total_count.div_ceil(self.items_per_page)
    }

    pub fn has_previous(&self) -> bool {
        self.page_number > 1
    }

    pub fn has_next(&self) -> bool {
        self.page_number < self.last_page_number()
    }

    /// Type-erased metadata view handed to mapper hooks.
    pub fn info(&self) -> PageInfo {
        PageInfo {
            total_count: self.total_count,
            item_count: self.items.len(),
            page_number: self.page_number,
            items_per_page: self.items_per_page,
            last_page_number: self.last_page_number(),
            model_type: self.model_type,
        }
    }
}

/// Pagination metadata of a page without its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub total_count: usize,
    pub item_count: usize,
    pub page_number: usize,
    pub items_per_page: usize,
    pub last_page_number: usize,
    pub model_type: ModelType,
}

impl PageInfo {
    pub fn has_previous(&self) -> bool {
        self.page_number > 1
    }

    pub fn has_next(&self) -> bool {
        self.page_number < self.last_page_number
    }
}
