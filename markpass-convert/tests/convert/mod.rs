//! End-to-end conversion tests
//!
//! Whole-pipeline behavior of `markpass_convert::convert`, grouped by the kind of syntax involved.

mod blocks;
mod inline;
mod passthrough;
mod scenarios;
