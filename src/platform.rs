/// Seam for framing code that needs a checksum over an already assembled byte buffer.
///
/// [`Crc`](crate::Crc) implements it; tests or hardware backed implementations can be swapped in
/// without touching the packet code.
pub trait Checksum {
    fn checksum(&self, data: &[u8]) -> u32;
}

impl<T: Checksum + ?Sized> Checksum for &T {
    fn checksum(&self, data: &[u8]) -> u32 {
        T::checksum(self, data)
    }
}

impl<T: Checksum + ?Sized> Checksum for &mut T {
    fn checksum(&self, data: &[u8]) -> u32 {
        T::checksum(self, data)
    }
}
