//! # gradlite
//!
//! Scalar reverse-mode autograd with a small neural-network layer on top:
//! neurons, linear layers, an MLP, regression losses, and SGD.

pub mod autograd;
pub mod config;
pub mod nn;
pub mod optim;
