//! taskboard-core
//!
//! Core building blocks for the taskboard tracker.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（status, task, project, events, errors）
//! - **ports**: 抽象化レイヤー（Clock, EventSink, ProjectApi）
//! - **store**: in-memory のプロジェクトレジストリ（single source of truth）
//! - **query**: 派生ビュー（summary, sort, remaining time, critical tasks）
//! - **bus**: pub/sub の EventBus（EventSink の実装）
//! - **remote**: 疑似リモート呼び出し（latency + fault injection）
//!
//! The store, bus and queries assume one cooperative execution context; the
//! simulated remote operations in `remote` are the only suspension points.

pub mod bus;
pub mod domain;
pub mod ports;
pub mod query;
pub mod remote;
pub mod store;
