use core::marker::PhantomData;

use crate::board::Board;

/// Label of the board's ROM when none is configured.
pub const DEFAULT_ROM_LABEL: &str = "Acme ROM";
/// Label of the board's store when none is configured.
pub const DEFAULT_STORE_LABEL: &str = "Beta Memory";

// Builder states
pub struct NeedVersion;
pub struct Ready;

/// Settings a [`Board`] creates its devices from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub store_version: i32,
    pub rom_label: &'static str,
    pub store_label: &'static str,
}

impl BoardConfig {
    pub const fn new(store_version: i32) -> Self {
        Self {
            store_version,
            rom_label: DEFAULT_ROM_LABEL,
            store_label: DEFAULT_STORE_LABEL,
        }
    }
}

/// Typestate builder for [`Board`].
///
/// The store version has no default and must be set before `build`.
pub struct BoardBuilder<State> {
    config: BoardConfig,
    _phantom: PhantomData<State>,
}

impl BoardBuilder<NeedVersion> {
    pub fn new() -> Self {
        BoardBuilder {
            config: BoardConfig::new(0),
            _phantom: PhantomData,
        }
    }

    /// Set the version the board's store is built with.
    pub fn store_version(self, version: i32) -> BoardBuilder<Ready> {
        BoardBuilder {
            config: BoardConfig {
                store_version: version,
                ..self.config
            },
            _phantom: PhantomData,
        }
    }
}

impl Default for BoardBuilder<NeedVersion> {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder<Ready> {
    pub fn rom_label(mut self, label: &'static str) -> Self {
        self.config.rom_label = label;
        self
    }

    /// Set the store label; the device name becomes `"<label>.<version>"`.
    pub fn store_label(mut self, label: &'static str) -> Self {
        self.config.store_label = label;
        self
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Build the board. Devices are attached by [`Board::initialize`].
    pub fn build(self) -> Board {
        Board::with_config(self.config)
    }
}
