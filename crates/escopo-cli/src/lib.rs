//! CLI library components for the Escopo e Sequência ingester.

pub mod logging;
