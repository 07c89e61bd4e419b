//! Perk engine - inventory, activation cooldown, and timed effects
//!
//! Perks arrive from line-clear rolls into a 3-slot inventory (insertion
//! order is meaningful: the slot index is the activation key). Activation is
//! gated by a shared cooldown counted in gravity ticks. Each timed effect is
//! a single real-time-seconds countdown; an effect is active exactly while
//! its countdown is nonzero.

use arrayvec::ArrayVec;

use crate::types::{PerkKind, MAX_PERKS, PERK_COOLDOWN_TICKS, PERK_DURATION_SECS};

/// Held, unused perks. Capacity 3; grants beyond capacity are dropped.
#[derive(Debug, Clone, Default)]
pub struct PerkInventory {
    slots: ArrayVec<PerkKind, MAX_PERKS>,
}

impl PerkInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a perk if there is room; returns false when the grant was dropped.
    pub fn grant(&mut self, kind: PerkKind) -> bool {
        if self.slots.is_full() {
            return false;
        }
        self.slots.push(kind);
        true
    }

    /// Remove and return the perk at `index`; None if the slot is empty.
    pub fn take(&mut self, index: usize) -> Option<PerkKind> {
        if index >= self.slots.len() {
            return None;
        }
        Some(self.slots.remove(index))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn as_slice(&self) -> &[PerkKind] {
        &self.slots
    }
}

/// Activation cooldown, counted in gravity ticks.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerkCooldown {
    ticks: u8,
}

impl PerkCooldown {
    pub fn ready(&self) -> bool {
        self.ticks == 0
    }

    pub fn remaining(&self) -> u8 {
        self.ticks
    }

    /// Restart the cooldown (called on every activation).
    pub fn start(&mut self) {
        self.ticks = PERK_COOLDOWN_TICKS;
    }

    /// Decrement once per gravity tick, floored at zero.
    pub fn tick(&mut self) {
        self.ticks = self.ticks.saturating_sub(1);
    }
}

/// One timed effect: active exactly while the countdown is nonzero.
#[derive(Debug, Clone, Copy, Default)]
pub struct EffectTimer {
    remaining_secs: u8,
}

impl EffectTimer {
    pub fn active(&self) -> bool {
        self.remaining_secs > 0
    }

    pub fn remaining_secs(&self) -> u8 {
        self.remaining_secs
    }

    /// Arm the effect for the full perk duration.
    pub fn start(&mut self) {
        self.remaining_secs = PERK_DURATION_SECS;
    }

    /// Deactivate immediately (effect consumed before its time ran out).
    pub fn clear(&mut self) {
        self.remaining_secs = 0;
    }

    /// Count down one real second. Returns true when the effect expired on
    /// this call, so expiry side effects fire exactly once.
    pub fn tick_second(&mut self) -> bool {
        if self.remaining_secs == 0 {
            return false;
        }
        self.remaining_secs -= 1;
        self.remaining_secs == 0
    }
}

/// The five timed effects. Line Erase is instantaneous and has no timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActiveEffects {
    pub slow_time: EffectTimer,
    pub double_score: EffectTimer,
    pub shield: EffectTimer,
    pub bomb: EffectTimer,
    pub lucky: EffectTimer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inventory_drops_grants_when_full() {
        let mut inv = PerkInventory::new();
        assert!(inv.grant(PerkKind::Bomb));
        assert!(inv.grant(PerkKind::Shield));
        assert!(inv.grant(PerkKind::Lucky));
        assert!(!inv.grant(PerkKind::SlowTime));
        assert_eq!(inv.len(), 3);
        assert_eq!(
            inv.as_slice(),
            &[PerkKind::Bomb, PerkKind::Shield, PerkKind::Lucky]
        );
    }

    #[test]
    fn take_preserves_insertion_order_of_the_rest() {
        let mut inv = PerkInventory::new();
        inv.grant(PerkKind::Bomb);
        inv.grant(PerkKind::Shield);
        inv.grant(PerkKind::Lucky);

        assert_eq!(inv.take(1), Some(PerkKind::Shield));
        assert_eq!(inv.as_slice(), &[PerkKind::Bomb, PerkKind::Lucky]);
        assert_eq!(inv.take(5), None);
        assert_eq!(inv.len(), 2);
    }

    #[test]
    fn cooldown_counts_down_to_ready() {
        let mut cd = PerkCooldown::default();
        assert!(cd.ready());
        cd.start();
        assert!(!cd.ready());
        assert_eq!(cd.remaining(), PERK_COOLDOWN_TICKS);
        for _ in 0..PERK_COOLDOWN_TICKS {
            cd.tick();
        }
        assert!(cd.ready());
        cd.tick();
        assert_eq!(cd.remaining(), 0);
    }

    #[test]
    fn effect_timer_expires_exactly_once() {
        let mut timer = EffectTimer::default();
        assert!(!timer.tick_second());

        timer.start();
        assert!(timer.active());
        for _ in 0..PERK_DURATION_SECS - 1 {
            assert!(!timer.tick_second());
        }
        assert!(timer.tick_second());
        assert!(!timer.active());
        assert!(!timer.tick_second());
    }

    #[test]
    fn clear_consumes_effect_without_expiry_signal() {
        let mut timer = EffectTimer::default();
        timer.start();
        timer.clear();
        assert!(!timer.active());
        assert!(!timer.tick_second());
    }
}
