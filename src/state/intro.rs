//! Hero overlay entrance timeline.

use crate::anim::{staggered, Counter, Ease, Tween};
use crate::geo::GeoPoint;

/// Overlay rows in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroItem {
    Badge,
    TitleLine1,
    TitleLine2,
    Subtitle,
    Buttons,
    Stats,
}

impl IntroItem {
    pub const ALL: [IntroItem; 6] = [
        IntroItem::Badge,
        IntroItem::TitleLine1,
        IntroItem::TitleLine2,
        IntroItem::Subtitle,
        IntroItem::Buttons,
        IntroItem::Stats,
    ];
}

/// Vertical offset (points) each row slides up from.
pub const INTRO_RISE: f32 = 24.0;

pub struct IntroTimeline {
    tweens: Vec<Tween>,
    pub destinations: Counter,
    pub hubs: Counter,
    pub support_hours: Counter,
}

impl IntroTimeline {
    pub fn new(points: &[GeoPoint]) -> Self {
        let hubs = points.iter().filter(|p| p.is_major).count() as u32;

        // Order matches IntroItem::ALL
        let mut tweens = vec![Tween::new(0.2, 0.8, Ease::Power3Out)];
        tweens.extend(staggered(2, 0.3, 0.15, 1.2, Ease::ExpoOut));
        tweens.push(Tween::new(0.7, 1.0, Ease::Power3Out));
        tweens.push(Tween::new(0.9, 0.8, Ease::Power2InOut));
        tweens.push(Tween::new(1.0, 0.6, Ease::Linear));

        Self {
            tweens,
            destinations: Counter::new(points.len() as u32, 1.1),
            hubs: Counter::new(hubs, 1.2),
            support_hours: Counter::new(24, 1.3),
        }
    }

    /// Opacity and downward offset of `item` at time `t`.
    pub fn item(&self, item: IntroItem, t: f32) -> (f32, f32) {
        let index = IntroItem::ALL
            .iter()
            .position(|i| *i == item)
            .unwrap_or_default();
        let progress = self.tweens.get(index).map_or(1.0, |tw| tw.progress(t));
        (progress, (1.0 - progress) * INTRO_RISE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GREECE_LOCATIONS;

    #[test]
    fn test_rows_enter_in_order() {
        let intro = IntroTimeline::new(GREECE_LOCATIONS);
        let (badge, _) = intro.item(IntroItem::Badge, 0.6);
        let (stats, offset) = intro.item(IntroItem::Stats, 0.6);
        assert!(badge > stats);
        assert_eq!(stats, 0.0);
        assert_eq!(offset, INTRO_RISE);
    }

    #[test]
    fn test_one_tween_per_row() {
        let intro = IntroTimeline::new(GREECE_LOCATIONS);
        assert_eq!(intro.tweens.len(), IntroItem::ALL.len());
        assert!(intro.tweens.iter().all(|tw| tw.progress(2.0) == 1.0));
    }

    #[test]
    fn test_end_state() {
        let intro = IntroTimeline::new(GREECE_LOCATIONS);
        let t = f32::INFINITY;
        for item in IntroItem::ALL {
            assert_eq!(intro.item(item, t), (1.0, 0.0));
        }
        assert_eq!(intro.destinations.value(t), GREECE_LOCATIONS.len() as u32);
        assert_eq!(intro.hubs.value(t), 5);
        assert_eq!(intro.support_hours.value(t), 24);
    }
}
