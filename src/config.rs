//! # CPU Configuration
//!
//! Compatibility switches for hardware quirks that not every host wants.
//! The defaults give the straightforward behavior; hosts that need bug-for-bug
//! NMOS compatibility turn the quirks on.

use serde::{Deserialize, Serialize};

/// CPU compatibility settings.
///
/// # Examples
///
/// ```
/// use nes6502::CpuConfig;
///
/// let config: CpuConfig = serde_json::from_str(r#"{ "indirect_jmp_page_wrap": true }"#).unwrap();
/// assert!(config.indirect_jmp_page_wrap);
/// assert!(config.irq_respects_interrupt_disable);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CpuConfig {
    /// Reproduce the `JMP ($xxFF)` page-wrap bug: the pointer's high byte is
    /// fetched from `$xx00` instead of the next page.
    pub indirect_jmp_page_wrap: bool,

    /// Ignore `trigger_irq` while the InterruptDisable flag is set.
    pub irq_respects_interrupt_disable: bool,
}

impl CpuConfig {
    /// Settings matching an NMOS 6502 as closely as the core models it.
    pub fn nmos() -> Self {
        Self {
            indirect_jmp_page_wrap: true,
            irq_respects_interrupt_disable: true,
        }
    }
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            indirect_jmp_page_wrap: false,
            irq_respects_interrupt_disable: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CpuConfig::default();
        assert!(!config.indirect_jmp_page_wrap);
        assert!(config.irq_respects_interrupt_disable);
    }

    #[test]
    fn test_nmos_enables_page_wrap() {
        assert!(CpuConfig::nmos().indirect_jmp_page_wrap);
    }
}
