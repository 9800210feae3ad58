use jedi_core::{DroidSet, InitialCondition, Position, Walls};

use crate::request::GridSize;

/// Draws `condition` as text, one line per `y`, one character per `x`.
///
/// `J` marks the agent, `#` a wall, a digit the droid count of a group (`+`
/// above nine) and `.` an empty cell. Pieces outside `size` are not drawn.
pub fn render_grid(condition: &InitialCondition, size: GridSize) -> String {
    let walls = condition.walls();
    let droids = DroidSet::from_groups(condition.droids.iter().copied());

    let mut out = String::with_capacity((size.width as usize + 1) * size.height as usize);
    for y in 0..size.height as i32 {
        for x in 0..size.width as i32 {
            out.push(glyph(condition, &walls, &droids, (x, y).into()));
        }
        out.push('\n');
    }
    out
}

fn glyph(
    condition: &InitialCondition,
    walls: &Walls,
    droids: &DroidSet,
    cell: Position,
) -> char {
    if cell == condition.agent {
        return 'J';
    }
    if walls.contains(cell) {
        return '#';
    }
    match droids.count_at(cell) {
        Some(count @ 1..=9) => char::from_digit(count, 10).unwrap_or('+'),
        Some(_) => '+',
        None => '.',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jedi_core::DroidGroup;

    #[test]
    fn draws_every_piece() {
        let condition = InitialCondition::new(
            Position::new(1, 1),
            0,
            vec![Position::new(2, 0)],
            vec![
                DroidGroup::new(Position::new(0, 2), 3),
                DroidGroup::new(Position::new(2, 2), 12),
            ],
        );

        assert_eq!(
            render_grid(&condition, GridSize::new(3, 3)),
            "..#\n.J.\n3.+\n"
        );
    }
}
