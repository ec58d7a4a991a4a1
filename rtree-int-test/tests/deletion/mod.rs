//! Deletion, tree condensation and root collapse.

mod delete_test;
mod condense_test;
