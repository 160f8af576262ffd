//! HTTP integration tests.
//!
//! Each test runs against its own throwaway PostgreSQL database created
//! on the server pointed at by `AYNBEAUTY_TEST_DATABASE_URL`. Tests skip
//! silently when the variable is unset.

mod helpers;

mod admin_test;
mod auth_test;
mod cart_test;
mod catalog_test;
mod order_test;
mod wishlist_test;
