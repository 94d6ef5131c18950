//! Test helpers for constructing `Beer` fixtures.
//!
//! # Examples
//!
//! ```
//! use taplist::catalog::models::test_support::{beer, page_of};
//!
//! let single = beer(1, "Buzz");
//! assert_eq!(single.id.key(), "1");
//!
//! let page = page_of(11, 3);
//! assert_eq!(page.len(), 3);
//! assert_eq!(page.first().map(|b| b.id.key()), Some("11".to_owned()));
//! ```

use super::{Beer, BeerId};

/// Constructs a minimal `Beer` with only id and name set.
#[must_use]
pub fn beer(id: u64, name: &str) -> Beer {
    Beer {
        id: BeerId::Number(id),
        name: name.to_owned(),
        tagline: None,
        image_url: Some(format!("https://images.example.test/{id}.png")),
        first_brewed: None,
    }
}

/// Constructs `count` consecutive beers starting at `first_id`.
///
/// Names follow the pattern `Beer <id>`.
#[must_use]
pub fn page_of(first_id: u64, count: usize) -> Vec<Beer> {
    (first_id..)
        .take(count)
        .map(|id| beer(id, &format!("Beer {id}")))
        .collect()
}
