//! Core types for the directory node tree.

/// Hash: 256-bit digest identifying a node's content
pub type Hash = [u8; 32];
