//! Memory bus abstraction
//!
//! Every register access in this crate goes through a [`Bus`]. On the real
//! machine that is [`Mmio`], which performs volatile loads and stores. Off
//! hardware, [`crate::sim::Machine`] provides a 64 KiB register file with the
//! VIC-II side effects the HAL relies on.
//!
//! Reads take `&mut self`: reading the raster counter or the collision latch
//! changes hardware state.

/// Byte-addressed access to the C64 address space
///
/// There is no error path. Unmapped reads return whatever the bus floats to,
/// writes to ROM are ignored by the hardware.
pub trait Bus {
    /// Read one byte
    fn read(&mut self, addr: u16) -> u8;

    /// Write one byte
    fn write(&mut self, addr: u16, value: u8);
}

impl<B: Bus + ?Sized> Bus for &mut B {
    #[inline]
    fn read(&mut self, addr: u16) -> u8 {
        (**self).read(addr)
    }

    #[inline]
    fn write(&mut self, addr: u16, value: u8) {
        (**self).write(addr, value);
    }
}

/// Direct memory-mapped I/O
///
/// Addresses are dereferenced as raw pointers with volatile semantics,
/// exactly as the CPU sees them.
#[derive(Debug)]
pub struct Mmio {
    _private: (),
}

impl Mmio {
    /// Create the hardware bus
    ///
    /// # Safety
    ///
    /// Only sound when running on the machine itself, where every 16-bit
    /// address is a valid byte location. There must be no other live `Mmio`.
    pub const unsafe fn new() -> Self {
        Mmio { _private: () }
    }
}

impl Bus for Mmio {
    #[inline]
    fn read(&mut self, addr: u16) -> u8 {
        // SAFETY: `Mmio::new` requires the full address space to be mapped.
        unsafe { (addr as usize as *const u8).read_volatile() }
    }

    #[inline]
    fn write(&mut self, addr: u16, value: u8) {
        // SAFETY: see `read`.
        unsafe { (addr as usize as *mut u8).write_volatile(value) }
    }
}
