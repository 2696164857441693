//! # Commission Fees
//!
//! Computes a commission fee for every cash-in and cash-out operation in a
//! CSV ledger and reports the fees in input order.
//!
//! ## Design Principles
//!
//! - **Decimal arithmetic**: amounts are `rust_decimal` values, fees are always rounded up
//! - **Weekly state**: cash-out allowances are tracked per user and ISO week
//! - **Fail fast**: the first invalid row aborts the run with its row number and field
//! - **Deterministic output**: one fee per input row, in input order
//!
//! ## Example
//!
//! ```
//! use commission_fees::process_csv;
//! use std::io::Cursor;
//!
//! let csv = "2016-01-05,1,natural,cash_in,200.00,EUR\n2016-01-06,2,legal,cash_out,300.00,EUR\n";
//! let fees = process_csv(Cursor::new(csv)).unwrap();
//! assert_eq!(fees, vec!["5.00", "0.90"]);
//! ```

pub mod currency;
pub mod decimal;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod operation;
pub mod pipeline;
pub mod schedule;
pub mod validator;

pub use currency::Currency;
pub use decimal::Amount;
pub use engine::FeeEngine;
pub use error::{FeeError, Field, Result};
pub use ledger::{WeekKey, WeeklyBucket, WeeklyLedger};
pub use operation::{Operation, OperationKind, UserType};
pub use pipeline::{calculate_fees, process_csv, process_csv_with, write_output};
pub use schedule::{FeeSchedule, UserTypeRules};
pub use validator::validate;
