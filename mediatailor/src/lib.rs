#![allow(deprecated)]
#![allow(unknown_lints)]
#![allow(clippy::module_inception)]
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::wrong_self_convention)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::disallowed_names)]
#![allow(clippy::vec_init_then_push)]
#![allow(clippy::type_complexity)]
#![allow(clippy::needless_return)]
#![allow(clippy::derive_partial_eq_without_eq)]
#![allow(clippy::result_large_err)]
#![allow(clippy::unnecessary_map_on_constructor)]
#![allow(rustdoc::bare_urls)]
#![allow(rustdoc::redundant_explicit_links)]
#![allow(rustdoc::invalid_html_tags)]
#![forbid(unsafe_code)]
#![warn(missing_docs)]
//! <p>Use the AWS Elemental MediaTailor SDK to configure scalable ad insertion for your live and VOD content. With AWS Elemental MediaTailor, you can serve targeted ads to viewers while maintaining broadcast quality in over-the-top (OTT) video applications. For information about using the service, including detailed information about the settings covered in this guide, see the AWS Elemental MediaTailor User Guide.</p><p>Through the SDK, you manage AWS Elemental MediaTailor configurations the same as you do through the console. For example, you specify ad insertion behavior and mapping information for the origin server and the ad decision server (ADS).</p>
//!
//! ## Crate Organization
//!
//! This crate contains the data model for AWS Elemental MediaTailor: the
//! operation input/output shapes, the model structures they reference, and the
//! wire (de)serializers that a transport layer drives.
//!
//! The crate is organized by operation. Each operation's module under
//! [`operation`](crate::operation) holds its input and output structures and
//! the operation's error type. The [`types`](crate::types) module holds the
//! model structures and enums referenced by operations, with
//! [`types::error`](crate::types::error) holding the modeled error structures.
//! The [`protocol_serde`](crate::protocol_serde) module serializes operation
//! inputs to JSON request bodies and deserializes response and error bodies.

pub use error_meta::Error;

/// Common errors and error handling utilities.
pub mod error;
mod error_meta;
mod json_errors;
/// All operations that this crate can perform.
pub mod operation;
/// Primitives such as `Blob` or `DateTime` used by other types.
pub mod primitives;
/// Serializers and deserializers for the service wire protocol.
pub mod protocol_serde;
/// Data structures used by operation inputs/outputs.
pub mod types;
