use crate::domain::mail::DeliveryMode;

/// Surfaces of a piece of real estate, in m².
///
/// Areas are `u64`: the sum of many `u32` appartment areas must not overflow.
pub trait Surface {
    fn living_area(&self) -> u64;
    fn garden_area(&self) -> u64;
}

/// Anything the post office can put a stamp on.
pub trait Frankable {
    /// Franking amount as if the item used the normal delivery mode.
    fn frank_normal(&self) -> f64;

    fn delivery_mode(&self) -> DeliveryMode;

    /// Implementors may only add restrictions on top of a non-empty
    /// delivery address, never lift it.
    fn is_valid(&self) -> bool;

    fn frank(&self) -> f64 {
        let base = self.frank_normal();
        match self.delivery_mode() {
            DeliveryMode::Normal => base,
            DeliveryMode::Express => 2.0 * base,
        }
    }
}
