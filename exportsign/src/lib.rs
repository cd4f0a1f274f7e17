#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use exportsign_core::*;

#[cfg(feature = "export")]
pub mod export {
    //! The export api scheme: credential, providers, signer and verifier.
    pub use exportsign_export::*;
}
