#![forbid(unsafe_code)]

//! Device-facing seams around the tapeform layout engine.
//!
//! The layout engine ([`tapeform_text`]) is pure; this crate holds the
//! thin pieces that face the outside world:
//!
//! - [`driver`] — the command contract a physical receipt driver must
//!   satisfy. Implementations (USB, serial, test doubles) live outside
//!   this repository; nothing here constructs protocol bytes.
//! - [`label`] — the label print job: header, formatted message body,
//!   barcode, cut, issued against any [`driver::ReceiptDriver`].
//! - [`version`] — build/version metadata reporting. Pure data.
//!
//! Serialization of physical jobs (one label at a time, post-cut
//! settling) is the driver implementation's responsibility, not ours.

pub mod driver;
pub mod label;
pub mod version;

pub use driver::{Align, BarcodeKind, Font, ReceiptDriver};
pub use label::{DEFAULT_BUDGET, DEFAULT_COLUMNS, LabelError, LabelOptions, print_label};
pub use version::VersionInfo;
