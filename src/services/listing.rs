//! Category filter for the public listing.
use std::{fmt, str::FromStr};

use serde::{Serialize, Serializer};

use crate::models::{BlogPost, Category, UnknownCategory};

const ALL_SENTINEL: &str = "all";

/// A category chooser option: the `all` sentinel or one concrete category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_SENTINEL,
            CategoryFilter::Only(c) => c.as_str(),
        }
    }

    /// Button label: first character upper-cased (`all` -> `All`).
    pub fn label(&self) -> String {
        let mut chars = self.as_str().chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn matches(&self, post: &BlogPost) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => post.category == *c,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_SENTINEL {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Order-preserving sub-sequence of `posts` matching `selected`.
pub fn filter_by_category(posts: &[BlogPost], selected: CategoryFilter) -> Vec<&BlogPost> {
    posts.iter().filter(|p| selected.matches(p)).collect()
}

/// `all` followed by the server's categories, in server order.
pub fn build_category_chooser(server_categories: &[Category]) -> Vec<CategoryFilter> {
    std::iter::once(CategoryFilter::All)
        .chain(server_categories.iter().copied().map(CategoryFilter::Only))
        .collect()
}

/// Public listing state: fetched posts, chooser options, and the current selection.
#[derive(Debug, Clone, Default)]
pub struct BlogListing {
    posts: Vec<BlogPost>,
    chooser: Vec<CategoryFilter>,
    selected: CategoryFilter,
}

impl BlogListing {
    pub fn new(posts: Vec<BlogPost>, chooser: Vec<CategoryFilter>) -> Self {
        Self {
            posts,
            chooser,
            selected: CategoryFilter::All,
        }
    }

    pub fn select(&mut self, filter: CategoryFilter) {
        self.selected = filter;
    }

    pub fn selected(&self) -> CategoryFilter {
        self.selected
    }

    pub fn chooser(&self) -> &[CategoryFilter] {
        &self.chooser
    }

    pub fn visible(&self) -> Vec<&BlogPost> {
        filter_by_category(&self.posts, self.selected)
    }
}
