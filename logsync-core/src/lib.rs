#![doc = "logsync-core: decision engine for shipping today's log files to an object store."]

//! This crate holds everything that decides *what* gets shipped and *where*:
//! directory scanning, candidate filtering, key construction, the remote
//! existence/size check and the upload step. The remote store is reached only
//! through the [`contract::ObjectStore`] trait, so the whole pipeline runs
//! against mocks in tests.
//!
//! # Usage
//! Build a [`config::SyncConfig`], resolve a [`key::RunContext`], hand both to
//! [`synchronise::synchronise`] together with a store implementation.

pub mod check;
pub mod config;
pub mod contract;
pub mod error;
pub mod filter;
pub mod key;
pub mod scan;
pub mod synchronise;
pub mod upload;
