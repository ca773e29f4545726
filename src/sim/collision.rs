//! Arrow vs balloon hit detection
//!
//! A hit is a plain distance check between the arrow tip and the balloon
//! center. Each arrow can pop at most one balloon: it is marked for deletion
//! on its first hit and skipped for the rest of the pass.

use super::arrow::Arrow;
use super::state::GameEvent;
use super::wolf::Wolf;
use crate::consts::{BALLOON_RADIUS, HIT_PADDING};

/// True if the arrow tip is strictly inside the padded balloon radius
#[inline]
pub fn arrow_hits_balloon(arrow: &Arrow, wolf: &Wolf) -> bool {
    arrow.tip().distance(wolf.balloon_center()) < BALLOON_RADIUS + HIT_PADDING
}

/// Pop every buoyant wolf touched by a live arrow.
///
/// Returns the number of balloons popped this pass.
pub fn resolve_collisions(
    arrows: &mut [Arrow],
    wolves: &mut [Wolf],
    events: &mut Vec<GameEvent>,
) -> usize {
    let mut pops = 0;
    for arrow in arrows.iter_mut() {
        for wolf in wolves.iter_mut() {
            if arrow.marked_for_deletion {
                break;
            }
            if !wolf.has_buoyancy || !arrow_hits_balloon(arrow, wolf) {
                continue;
            }
            wolf.pop();
            arrow.marked_for_deletion = true;
            events.push(GameEvent::BalloonPopped);
            pops += 1;
        }
    }
    pops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use glam::Vec2;

    /// Arrow whose tip sits exactly at `tip`
    fn arrow_with_tip(tip: Vec2) -> Arrow {
        Arrow::new(Vec2::new(tip.x - ARROW_WIDTH, tip.y - ARROW_HEIGHT / 2.0))
    }

    #[test]
    fn test_hit_inside_padded_radius() {
        let mut wolves = vec![Wolf::new(500.0, 1.0)];
        let center = wolves[0].balloon_center();
        let mut arrows = vec![arrow_with_tip(center - Vec2::new(BALLOON_RADIUS + HIT_PADDING - 0.5, 0.0))];
        let mut events = Vec::new();

        let pops = resolve_collisions(&mut arrows, &mut wolves, &mut events);

        assert_eq!(pops, 1);
        assert!(!wolves[0].has_buoyancy);
        assert!(arrows[0].marked_for_deletion);
        assert_eq!(events, vec![GameEvent::BalloonPopped]);
    }

    #[test]
    fn test_miss_at_threshold_changes_nothing() {
        let mut wolves = vec![Wolf::new(500.0, 1.0)];
        let center = wolves[0].balloon_center();
        // Exactly on the threshold is not a hit (strict less-than)
        let mut arrows = vec![arrow_with_tip(center - Vec2::new(BALLOON_RADIUS + HIT_PADDING, 0.0))];
        let mut events = Vec::new();

        let pops = resolve_collisions(&mut arrows, &mut wolves, &mut events);

        assert_eq!(pops, 0);
        assert!(wolves[0].has_buoyancy);
        assert!(!arrows[0].marked_for_deletion);
        assert!(events.is_empty());
    }

    #[test]
    fn test_arrow_pops_only_one_of_overlapping_balloons() {
        let mut wolves = vec![Wolf::new(500.0, 1.0), Wolf::new(505.0, 1.0)];
        let tip = wolves[0].balloon_center();
        let mut arrows = vec![arrow_with_tip(tip)];
        let mut events = Vec::new();

        let pops = resolve_collisions(&mut arrows, &mut wolves, &mut events);

        assert_eq!(pops, 1);
        assert!(!wolves[0].has_buoyancy);
        assert!(wolves[1].has_buoyancy);
    }

    #[test]
    fn test_popped_wolf_is_not_a_target() {
        let mut wolves = vec![Wolf::new(500.0, 1.0)];
        wolves[0].pop();
        let mut arrows = vec![arrow_with_tip(wolves[0].balloon_center())];
        let mut events = Vec::new();

        assert_eq!(resolve_collisions(&mut arrows, &mut wolves, &mut events), 0);
        assert!(!arrows[0].marked_for_deletion);
    }

    #[test]
    fn test_spent_arrow_is_skipped() {
        let mut wolves = vec![Wolf::new(500.0, 1.0)];
        let mut arrows = vec![arrow_with_tip(wolves[0].balloon_center())];
        arrows[0].marked_for_deletion = true;
        let mut events = Vec::new();

        assert_eq!(resolve_collisions(&mut arrows, &mut wolves, &mut events), 0);
        assert!(wolves[0].has_buoyancy);
    }

    #[test]
    fn test_two_arrows_two_wolves() {
        let mut wolves = vec![Wolf::new(450.0, 1.0), Wolf::new(800.0, 1.0)];
        let mut arrows = vec![
            arrow_with_tip(wolves[1].balloon_center()),
            arrow_with_tip(wolves[0].balloon_center()),
        ];
        let mut events = Vec::new();

        assert_eq!(resolve_collisions(&mut arrows, &mut wolves, &mut events), 2);
        assert!(wolves.iter().all(|w| !w.has_buoyancy));
        assert!(arrows.iter().all(|a| a.marked_for_deletion));
    }
}
