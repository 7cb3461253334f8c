//! Property-based tests for Kruskal MST construction.
//!
//! Verifies the builder against two independent oracles (exhaustive subset
//! search on small graphs, Prim's algorithm on larger ones), validates
//! structural invariants, and checks that repeated runs are identical.

mod oracle;
mod structural;
