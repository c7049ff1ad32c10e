//! Journey desirability ranker.
//!
//! A web service that takes a short list of candidate journeys from an
//! upstream route generator and answers: "which of these should the
//! traveller take?" The scoring algorithm is chosen per request by name.

pub mod config;
pub mod domain;
pub mod ranking;
pub mod web;
