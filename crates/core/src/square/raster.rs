use crate::SquareCell;
use log::trace;

/// Lazily walks every square crossed by a line segment. Created by
/// [SquareGrid::line_intersect](crate::SquareGrid::line_intersect).
///
/// This is the classic 2D DDA traversal: track the line parameter at which
/// the next vertical and horizontal grid line is crossed, and always step
/// across whichever comes first. When both are crossed at once (the line
/// passes exactly through a corner), x goes first.
///
/// All values are in unit space, i.e. already divided by the edge length.
#[derive(Clone, Debug)]
pub struct SquareRaycast {
    cell: SquareCell,
    step: [i32; 2],
    t_next: [f64; 2],
    t_delta: [f64; 2],
    started: bool,
    finished: bool,
}

impl SquareRaycast {
    pub(crate) fn new(from: [f64; 2], to: [f64; 2]) -> Self {
        let cell =
            SquareCell::new(from[0].floor() as i32, from[1].floor() as i32);
        let mut step = [0; 2];
        let mut t_next = [f64::INFINITY; 2];
        let mut t_delta = [f64::INFINITY; 2];
        for axis in 0..2 {
            let d = to[axis] - from[axis];
            let start = cell.coords()[axis];
            if d > 0.0 {
                step[axis] = 1;
                t_next[axis] = (f64::from(start + 1) - from[axis]) / d;
                t_delta[axis] = 1.0 / d;
            } else if d < 0.0 {
                step[axis] = -1;
                t_next[axis] = (f64::from(start) - from[axis]) / d;
                t_delta[axis] = -1.0 / d;
            }
        }
        Self {
            cell,
            step,
            t_next,
            t_delta,
            started: false,
            finished: false,
        }
    }
}

impl Iterator for SquareRaycast {
    type Item = SquareCell;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return Some(self.cell);
        }
        if self.finished {
            return None;
        }

        let axis = if self.t_next[0] <= self.t_next[1] { 0 } else { 1 };
        if self.t_next[axis] > 1.0 {
            trace!("Line raycast finished at {}", self.cell);
            self.finished = true;
            return None;
        }
        if axis == 0 {
            self.cell.x += self.step[0];
        } else {
            self.cell.y += self.step[1];
        }
        self.t_next[axis] += self.t_delta[axis];
        Some(self.cell)
    }
}
