use std::path::Path;

use anyhow::{Context, Result};

use crate::cpu::Mmu;

const ADDRESS_SPACE: usize = 0x10000;

/// A flat 64 KiB address space with no banking or IO side effects.
///
/// Useful for test programs and for hosting the CPU without a full
/// system memory map. IE and IF are ordinary bytes at 0xFFFF and 0xFF0F.
#[derive(Clone)]
pub struct FlatMemory {
    data: Box<[u8]>,
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FlatMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatMemory")
            .field("size", &self.data.len())
            .finish()
    }
}

impl FlatMemory {
    pub fn new() -> Self {
        Self {
            data: vec![0; ADDRESS_SPACE].into_boxed_slice(),
        }
    }

    /// Copy `bytes` into memory starting at `offset`.
    ///
    /// Anything that would land past 0xFFFF is dropped. Returns the number
    /// of bytes copied.
    pub fn load(&mut self, offset: u16, bytes: &[u8]) -> usize {
        let start = usize::from(offset);
        let len = bytes.len().min(ADDRESS_SPACE - start);
        self.data[start..start + len].copy_from_slice(&bytes[..len]);
        if len < bytes.len() {
            log::warn!(
                "FlatMemory: image truncated at 0x{:04X} ({} of {} bytes loaded)",
                offset,
                len,
                bytes.len()
            );
        }
        len
    }

    /// Build a memory image from a binary file mapped at 0x0000.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("failed to read memory image '{}'", path.display()))?;

        let mut memory = Self::new();
        let loaded = memory.load(0x0000, &bytes);
        log::info!("Loaded memory image '{}' ({} bytes)", path.display(), loaded);
        Ok(memory)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl Mmu for FlatMemory {
    #[inline]
    fn read(&mut self, address: u16) -> u8 {
        self.data[usize::from(address)]
    }

    #[inline]
    fn write(&mut self, address: u16, value: u8) {
        self.data[usize::from(address)] = value;
    }
}
