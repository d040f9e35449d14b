//! Clone de-cloning core for the publishing pipeline.
//!
//! A clone variant stores only the fields it overrides and points at a source
//! variant for everything else, possibly through several hops. Before a clone
//! is published this crate materializes it: one variant holding its own fields
//! plus every inherited one, with inherited relationships re-anchored on the
//! clone.
//!
//! # Architecture
//!
//! ## Components
//!
//! - **Discovery**: fetches ancestors for all clones at once, one repository
//!   call per chain level
//! - **Chain**: orders each clone's ancestors nearest-first
//! - **Relationships**: loads outgoing edges for clones and ancestors in one call
//! - **Merge**: flattens a chain with nearest-wins precedence
//! - **Promoter**: runs the phases for a batch of clone locators
//!
//! ## Failure model
//!
//! Broken or dangling clone references shorten a chain; they never fail the
//! batch. Repository failures are returned unchanged as
//! [`DecloneError::Storage`].
//!
//! # Example
//!
//! ```
//! use promote_declone::{CloneManifestPromoter, PromoterOptions, TargetPromoteContext};
//! use promote_storage::{InMemoryRelationshipStore, InMemoryVariantStore};
//!
//! # block_on(async {
//! let variants = InMemoryVariantStore::new("master");
//! let relationships = InMemoryRelationshipStore::new("master");
//! let promoter = CloneManifestPromoter::new(PromoterOptions::default());
//! let context = TargetPromoteContext::new("master", "web");
//!
//! let declone = promoter
//!     .declone_variants(&context, &variants, &relationships, &[])
//!     .await
//!     .unwrap();
//! assert!(declone.is_empty());
//! # });
//! # fn block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

mod chain;
mod config;
mod discovery;
mod error;
mod merge;
mod promoter;
mod relationships;
mod source;

pub use chain::{build_chain, build_chains, CloneChain};
pub use config::PromoterOptions;
pub use discovery::{discover_ancestors, AncestorMap};
pub use error::{DecloneError, DecloneResult};
pub use merge::{merge_chain, merge_chain_with_stats, DeclonedVariant, MergeStats};
pub use promoter::{CloneManifestPromoter, TargetPromoteContext};
pub use relationships::{load_relationships, relationships_of};
pub use source::clone_source;
