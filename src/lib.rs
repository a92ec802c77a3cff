//! Graph beta device-management models with `@odata.type` dispatch.
//!
//! Decode a payload as a family enum to get the concrete subtype the tag
//! names, or as a concrete model when the type is already known:
//!
//! ```
//! use betasdk::models::EasEmailProfileConfigurationBaseKind;
//!
//! let profile: EasEmailProfileConfigurationBaseKind = betasdk::serialization::from_str(
//!     r##"{"@odata.type":"#microsoft.graph.windows10EasEmailProfileConfiguration","accountName":"Acct1"}"##,
//! )
//! .unwrap();
//! assert!(matches!(
//!     profile,
//!     EasEmailProfileConfigurationBaseKind::Windows10EasEmailProfileConfiguration(_)
//! ));
//! ```

pub mod models;

pub use serialization;
