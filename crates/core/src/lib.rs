//! Core library for blogroll
//!
//! This crate implements the **Functional Core** of the blogroll client,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`blogroll_core`** (this crate): Pure transformation functions with zero I/O
//! - **`blogroll`**: Fetching, the mock backend and the terminal front end (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Total**: Filtering, sorting, pagination and selection toggling cannot fail
//!
//! # Module Organization
//!
//! - [`post`]: Wire model for the `/api/data` response
//! - [`category`]: Category universe and the selection engine
//! - [`collation`]: Locale-aware title ordering
//! - [`filter`]: Category and title-search filtering
//! - [`pagination`]: "Load more" page size and visible prefix
//! - [`display`]: Category de-duplication and date formatting for rendering
//! - [`feed`]: Listing state that ties the above together
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use blogroll_core::category::Toggle;
//! use blogroll_core::feed::Feed;
//!
//! let mut feed = Feed::default();
//! feed.load(posts);
//!
//! feed.toggle_category(&Toggle::from("Ecommerce"));
//! feed.set_search_term("launch");
//! feed.load_more();
//!
//! for post in feed.visible_posts() {
//!     println!("{}", post.title);
//! }
//! ```

pub mod category;
pub mod collation;
pub mod display;
pub mod feed;
pub mod filter;
pub mod pagination;
pub mod post;
