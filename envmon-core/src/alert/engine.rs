//! One-shot alert state machine
//!
//! The indicator follows the level on every tick; the alert tone fires
//! only on entry into a non-normal level.

use envmon_display::Rgb;

use super::level::{AlertLevel, AlertTone};

/// Indicator output for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IndicatorSetting {
    pub color: Rgb,
    pub brightness: u8,
}

impl IndicatorSetting {
    /// Indicator setting for a level
    pub const fn for_level(level: AlertLevel) -> Self {
        Self {
            color: level.indicator_color(),
            brightness: level.indicator_brightness(),
        }
    }
}

/// What the caller must do after an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlertAction {
    /// Indicator color and brightness to apply
    pub indicator: IndicatorSetting,
    /// Tone to play, if this update is an entry
    pub fire: Option<AlertTone>,
}

/// Alert engine state
///
/// Invariant: both flags are false whenever the level is `Normal`.
#[derive(Debug, Clone, Default)]
pub struct AlertEngine {
    level: AlertLevel,
    caution_fired: bool,
    attention_fired: bool,
}

impl AlertEngine {
    /// Create an engine in `Normal`
    pub fn new() -> Self {
        Self::default()
    }

    /// Process the level for this tick
    ///
    /// Entering `Attention` clears the caution flag, so a later drop back
    /// to `Caution` alerts again. Entering `Caution` leaves the attention
    /// flag alone.
    pub fn update(&mut self, level: AlertLevel) -> AlertAction {
        let fire = match level {
            AlertLevel::Normal => {
                if self.caution_fired || self.attention_fired {
                    info!("eCO2 back to normal");
                }
                self.caution_fired = false;
                self.attention_fired = false;
                None
            }
            AlertLevel::Caution => {
                if self.caution_fired {
                    None
                } else {
                    self.caution_fired = true;
                    Some(AlertTone::Caution)
                }
            }
            AlertLevel::Attention => {
                if self.attention_fired {
                    None
                } else {
                    self.attention_fired = true;
                    self.caution_fired = false;
                    Some(AlertTone::Attention)
                }
            }
        };

        if let Some(tone) = fire {
            info!("eCO2 alert: {}", tone.as_str());
        }
        self.level = level;

        AlertAction {
            indicator: IndicatorSetting::for_level(level),
            fire,
        }
    }

    /// Level from the last update
    pub fn level(&self) -> AlertLevel {
        self.level
    }

    pub fn caution_fired(&self) -> bool {
        self.caution_fired
    }

    pub fn attention_fired(&self) -> bool {
        self.attention_fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn flags(engine: &AlertEngine) -> (bool, bool) {
        (engine.caution_fired(), engine.attention_fired())
    }

    #[test]
    fn test_normal_turns_indicator_off() {
        let mut engine = AlertEngine::new();
        let action = engine.update(AlertLevel::Normal);
        assert_eq!(action.indicator.color, Rgb::BLACK);
        assert_eq!(action.indicator.brightness, 0);
        assert_eq!(action.fire, None);
        assert_eq!(flags(&engine), (false, false));
    }

    #[test]
    fn test_caution_fires_once() {
        let mut engine = AlertEngine::new();
        let first = engine.update(AlertLevel::Caution);
        assert_eq!(first.fire, Some(AlertTone::Caution));
        assert_eq!(first.indicator, IndicatorSetting::for_level(AlertLevel::Caution));

        let second = engine.update(AlertLevel::Caution);
        assert_eq!(second.fire, None);
        // Indicator is still driven on repeat ticks
        assert_eq!(second.indicator.brightness, 50);
    }

    #[test]
    fn test_attention_fires_once() {
        let mut engine = AlertEngine::new();
        assert_eq!(engine.update(AlertLevel::Attention).fire, Some(AlertTone::Attention));
        assert_eq!(engine.update(AlertLevel::Attention).fire, None);
        assert_eq!(engine.level(), AlertLevel::Attention);
    }

    #[test]
    fn test_normal_rearms_both() {
        let mut engine = AlertEngine::new();
        engine.update(AlertLevel::Caution);
        engine.update(AlertLevel::Normal);
        assert_eq!(engine.update(AlertLevel::Caution).fire, Some(AlertTone::Caution));

        engine.update(AlertLevel::Attention);
        engine.update(AlertLevel::Normal);
        assert_eq!(engine.update(AlertLevel::Attention).fire, Some(AlertTone::Attention));
    }

    #[test]
    fn test_asymmetric_reset_trace() {
        // Normal -> Attention -> Caution -> Attention
        let mut engine = AlertEngine::new();

        let a = engine.update(AlertLevel::Normal);
        assert_eq!(a.fire, None);
        assert_eq!(flags(&engine), (false, false));

        let b = engine.update(AlertLevel::Attention);
        assert_eq!(b.fire, Some(AlertTone::Attention));
        assert_eq!(flags(&engine), (false, true));

        let c = engine.update(AlertLevel::Caution);
        assert_eq!(c.fire, Some(AlertTone::Caution));
        assert_eq!(flags(&engine), (true, true));

        let d = engine.update(AlertLevel::Attention);
        assert_eq!(d.fire, None);
        // Attention did not re-enter, so the caution flag survives
        assert_eq!(flags(&engine), (true, true));

        let fired = [a, b, c, d].iter().filter_map(|x| x.fire).count();
        assert_eq!(fired, 2);
    }

    #[test]
    fn test_caution_does_not_clear_attention() {
        let mut engine = AlertEngine::new();
        engine.update(AlertLevel::Caution);
        engine.update(AlertLevel::Attention);
        assert_eq!(flags(&engine), (false, true));

        // Caution fires again because Attention cleared its flag
        assert_eq!(engine.update(AlertLevel::Caution).fire, Some(AlertTone::Caution));
        assert_eq!(flags(&engine), (true, true));
    }

    fn level_strategy() -> impl Strategy<Value = AlertLevel> {
        prop_oneof![
            Just(AlertLevel::Normal),
            Just(AlertLevel::Caution),
            Just(AlertLevel::Attention),
        ]
    }

    proptest! {
        #[test]
        fn prop_flags_clear_when_normal(levels in proptest::collection::vec(level_strategy(), 0..40)) {
            let mut engine = AlertEngine::new();
            for level in levels {
                let action = engine.update(level);
                prop_assert_eq!(action.indicator, IndicatorSetting::for_level(level));
                if level.is_normal() {
                    prop_assert!(!engine.caution_fired() && !engine.attention_fired());
                    prop_assert_eq!(action.fire, None);
                }
            }
        }

        #[test]
        fn prop_repeated_level_fires_at_most_once(level in level_strategy(), n in 1usize..20) {
            let mut engine = AlertEngine::new();
            let fired = (0..n).filter(|_| engine.update(level).fire.is_some()).count();
            prop_assert!(fired <= 1);
        }
    }
}
