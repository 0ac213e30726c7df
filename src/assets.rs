//! Opaque asset handles
//!
//! The simulation never decodes images or audio. A host loads whatever it
//! needs and hands back opaque handles; the sim and session only store and
//! forward them. A host must supply a usable fallback for anything it
//! fails to load — the sim never observes load failures.

use serde::{Deserialize, Serialize};

/// Opaque reference to a drawable or sound owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetHandle(pub u32);

/// Host-side asset provider.
pub trait AssetProvider {
    fn image(&mut self, path: &str) -> AssetHandle;
    fn sound(&mut self, path: &str) -> AssetHandle;
}

/// Provider for headless runs: every asset maps to handle 0.
#[derive(Debug, Default)]
pub struct NoopAssets;

impl AssetProvider for NoopAssets {
    fn image(&mut self, _path: &str) -> AssetHandle {
        AssetHandle(0)
    }

    fn sound(&mut self, _path: &str) -> AssetHandle {
        AssetHandle(0)
    }
}
