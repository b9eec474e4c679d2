use super::{LayoutParams, Side};
use crate::models::Xyhw;

/// Layout which splits the area into two columns, gives the main window one column, and divides
/// the other column among all the other windows.
///
/// Returns one outer box per window, in the order the windows were given. `main` is the index of
/// the main window and falls back to the first window when out of range.
#[must_use]
pub fn arrange(count: usize, main: usize, area: &Xyhw, params: &LayoutParams) -> Vec<Xyhw> {
    match count {
        0 => vec![],
        1 => vec![*area],
        _ => {
            let main = if main < count { main } else { 0 };
            let gap = params.inner_gap;
            let main_width =
                (area.w() as f32 * params.main_fraction).floor() as i32 - gap / 2;
            let stack_width = area.w() - main_width - gap;
            let (main_x, stack_x) = match params.main_side {
                Side::Left => (area.x(), area.x() + main_width + gap),
                Side::Right => (area.x() + stack_width + gap, area.x()),
            };

            let mut stack = stack_heights(count - 1, area.h(), gap).into_iter();
            let mut y = area.y();
            (0..count)
                .map(|index| {
                    if index == main {
                        return Xyhw::new(main_x, area.y(), main_width, area.h());
                    }
                    let height = stack.next().unwrap_or_default();
                    let xyhw = Xyhw::new(stack_x, y, stack_width, height);
                    y += height + gap;
                    xyhw
                })
                .collect()
        }
    }
}

// Leading entries take the remainder so the column is filled exactly.
fn stack_heights(count: usize, height: i32, gap: i32) -> Vec<i32> {
    let count = count as i32;
    let available = height - (count - 1) * gap;
    let base = available / count;
    let remainder = available % count;
    (0..count)
        .map(|i| if i < remainder { base + 1 } else { base })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> LayoutParams {
        LayoutParams {
            inner_gap: 10,
            outer_gap: 10,
            main_fraction: 0.6,
            main_side: Side::Left,
        }
    }

    #[test]
    fn no_windows_produce_no_geometry() {
        assert!(arrange(0, 0, &Xyhw::new(10, 10, 980, 780), &params()).is_empty());
    }

    #[test]
    fn a_single_window_fills_the_area() {
        let area = Xyhw::new(10, 10, 980, 780);
        assert_eq!(arrange(1, 0, &area, &params()), vec![area]);
    }

    #[test]
    fn two_windows_split_main_and_stack() {
        let area = Xyhw::new(10, 10, 980, 780);
        let boxes = arrange(2, 0, &area, &params());
        assert_eq!(boxes[0], Xyhw::new(10, 10, 583, 780));
        assert_eq!(boxes[1], Xyhw::new(603, 10, 387, 780));
    }

    #[test]
    fn stack_heights_share_the_remainder() {
        let area = Xyhw::new(0, 0, 1000, 100);
        let boxes = arrange(4, 0, &area, &params());
        let heights: Vec<i32> = boxes[1..].iter().map(Xyhw::h).collect();
        assert_eq!(heights, vec![27, 27, 26]);
        let total: i32 = heights.iter().sum::<i32>() + 2 * 10;
        assert_eq!(total, 100);
        assert_eq!(boxes[2].y(), 37);
        assert_eq!(boxes[3].y(), 74);
    }

    #[test]
    fn the_main_window_can_sit_on_the_right() {
        let area = Xyhw::new(10, 10, 980, 780);
        let params = LayoutParams {
            main_side: Side::Right,
            ..params()
        };
        let boxes = arrange(2, 0, &area, &params);
        assert_eq!(boxes[0], Xyhw::new(407, 10, 583, 780));
        assert_eq!(boxes[1], Xyhw::new(10, 10, 387, 780));
    }

    #[test]
    fn the_main_window_keeps_its_position_in_the_list() {
        let area = Xyhw::new(0, 0, 1000, 500);
        let boxes = arrange(3, 1, &area, &params());
        assert_eq!(boxes[1].x(), 0);
        assert_eq!(boxes[1].h(), 500);
        assert_eq!(boxes[0].y(), 0);
        assert_eq!(boxes[2].y(), 255);
    }

    #[test]
    fn an_unknown_main_falls_back_to_the_first_window() {
        let area = Xyhw::new(0, 0, 1000, 500);
        assert_eq!(
            arrange(3, 7, &area, &params()),
            arrange(3, 0, &area, &params())
        );
    }

    #[test]
    fn arranging_twice_gives_the_same_geometry() {
        let area = Xyhw::new(3, 7, 1366, 743);
        assert_eq!(
            arrange(5, 2, &area, &params()),
            arrange(5, 2, &area, &params())
        );
    }
}
