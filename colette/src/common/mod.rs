// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
mod colette_error;

// Re-export.
pub use colette_error::*;
