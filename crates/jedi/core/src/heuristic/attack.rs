use crate::action::ActionKind;
use crate::state::DroidSet;

/// Minimum seconds of attacking still owed.
///
/// Every group needs at least one attack. A group holding more than one droid
/// needs more: either Force, or a second Slash. A running budget seeded with
/// the agent's concentration decides which is assumed. While the budget covers
/// Force, the group is charged up to Force's time and the budget is spent;
/// once it runs dry, the extra charge is one Slash.
///
/// The base attack already counts one Slash, so the Force branch only adds
/// the difference between the two times.
pub fn attack_lower_bound(droids: &DroidSet, concentration: i32) -> u32 {
    let slash = ActionKind::Slash.cost();
    let force = ActionKind::Force.cost();

    let mut budget = concentration;
    let mut total = 0;

    for group in droids.iter() {
        total += slash.time;

        if group.count > 1 {
            if budget >= force.concentration {
                total += force.time - slash.time;
                budget -= force.concentration;
            } else {
                total += slash.time;
            }
        }
    }

    total
}
