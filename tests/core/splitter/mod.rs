//! Splitter layer tests
//!
//! Properties every split must satisfy, worked examples with exact
//! cut positions, protected spans, page attribution and reentrancy.

mod test_pages;
mod test_properties;
