//! Integration tests for the fincast engines
//!
//! Unit-sized cases live next to each engine; the modules here exercise
//! cross-engine properties:
//! - `fixtures` - shared input builders
//! - `risk` - risk classification boundaries and sentinel composition
//! - `determinism` - repeated runs are byte-identical once serialized
//! - `combined_scenarios` - multiple active scenarios compose additively
//! - `pipeline` - validate-then-compute flow over one realistic ledger


mod combined_scenarios;
mod risk;
