use crate::TriCell;
use log::trace;
use nalgebra::Vector3;

/// Lazily walks every triangle crossed by a line segment. Created by
/// [TriGrid::line_intersect](crate::TriGrid::line_intersect).
///
/// This is a voxel traversal over the three triangle axes, the same as
/// raymarching through a 3D cube grid, except that it has to alternate
/// between up and down triangles. An up triangle can only be left by
/// decreasing one of its coordinates, and a down triangle only by
/// increasing one, so at each step only axes heading in the right direction
/// are eligible. Of those, the one whose boundary is crossed first wins,
/// with ties going to a, then b, then c.
///
/// All values are in unit space, i.e. already divided by the edge length.
#[derive(Clone, Debug)]
pub struct TriRaycast {
    /// Current triangle, as raw coordinates
    cell: [i32; 3],
    /// Does the current triangle point up?
    up: bool,
    /// Direction of travel along each axis, always ±1
    step: [i32; 3],
    /// Line parameter (0 at the start, 1 at the end) at which the next
    /// boundary on each axis is crossed
    t_next: [f64; 3],
    /// Amount `t_next` grows by after crossing one boundary on each axis
    t_delta: [f64; 3],
    started: bool,
    finished: bool,
}

impl TriRaycast {
    /// Set up a traversal. `start` is the triangle containing the start
    /// point, `from` is the start point projected onto the three axes, and
    /// `delta` is the full length of the segment along each axis.
    pub(crate) fn new(
        start: TriCell,
        from: Vector3<f64>,
        delta: Vector3<f64>,
    ) -> Self {
        let cell = start.coords();
        let mut step = [0; 3];
        let mut t_next = [0.0; 3];
        let mut t_delta = [0.0; 3];
        for axis in 0..3 {
            let d = delta[axis];
            step[axis] = if d > 0.0 { 1 } else { -1 };
            if d == 0.0 {
                // Never crossed
                t_next[axis] = f64::INFINITY;
                t_delta[axis] = f64::INFINITY;
            } else {
                // Distance to the upper boundary if heading up, lower if down
                let boundary =
                    f64::from(cell[axis]) - if d > 0.0 { 0.0 } else { 1.0 };
                t_next[axis] = (boundary - from[axis]) / d;
                t_delta[axis] = (1.0 / d).abs();
            }
        }

        Self {
            cell,
            up: start.points_up(),
            step,
            t_next,
            t_delta,
            started: false,
            finished: false,
        }
    }

    /// Pick the axis to step along next, if any
    fn next_axis(&self) -> Option<usize> {
        (0..3)
            .filter(|&axis| (self.step[axis] == 1) != self.up)
            .fold(None, |best: Option<usize>, axis| match best {
                Some(best) if self.t_next[best] <= self.t_next[axis] => {
                    Some(best)
                }
                _ => Some(axis),
            })
    }
}

impl Iterator for TriRaycast {
    type Item = TriCell;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            let [a, b, c] = self.cell;
            return Some(TriCell::new_unchecked(a, b, c));
        }
        if self.finished {
            return None;
        }

        match self.next_axis() {
            Some(axis) if self.t_next[axis] <= 1.0 => {
                self.cell[axis] += self.step[axis];
                self.t_next[axis] += self.t_delta[axis];
                self.up = !self.up;
                let [a, b, c] = self.cell;
                Some(TriCell::new_unchecked(a, b, c))
            }
            _ => {
                trace!("Line raycast finished at {:?}", self.cell);
                self.finished = true;
                None
            }
        }
    }
}

/// Lazily walks every triangle overlapping an axis-aligned rectangle.
/// Created by [TriGrid::rect_intersect](crate::TriGrid::rect_intersect).
///
/// Rows (values of b) are visited bottom to top. Within each row, the
/// rectangle is trimmed to the row's vertical extent, and the trimmed
/// corners give the bounds on the a and c diagonals. The row is then walked
/// left to right, alternating between down triangles (after which a goes
/// up) and up triangles (after which c goes down).
///
/// Triangles are treated as exclusive of their boundary and the rectangle as
/// inclusive of its own. All values are in unit space.
#[derive(Clone, Debug)]
pub struct TriRowWalk {
    /// Left edge of the rectangle
    x: f64,
    width: f64,
    /// Bottom edge of the rectangle, along the b axis
    lower: f64,
    /// Top edge of the rectangle, along the b axis
    upper: f64,
    row: i32,
    last_row: i32,
    a: i32,
    c: i32,
    max_a: i32,
    min_c: i32,
}

impl TriRowWalk {
    pub(crate) fn new(
        x: f64,
        width: f64,
        lower: f64,
        upper: f64,
    ) -> Self {
        let mut walk = Self {
            x,
            width,
            lower,
            upper,
            row: lower.floor() as i32 + 1,
            last_row: upper.ceil() as i32,
            a: 0,
            c: 0,
            max_a: -1,
            min_c: 1,
        };
        walk.start_row();
        walk
    }

    /// Compute the diagonal bounds for the current row
    fn start_row(&mut self) {
        let row = f64::from(self.row);
        let min_b = (row - 1.0).max(self.lower);
        let max_b = row.min(self.upper);
        self.a = (self.x - max_b / 2.0).floor() as i32 + 1;
        self.max_a = (self.x + self.width - min_b / 2.0).ceil() as i32;
        self.min_c = (-self.x - self.width - max_b / 2.0).floor() as i32 + 1;
        self.c = (-self.x - min_b / 2.0).ceil() as i32;
        debug_assert!(
            self.row > self.last_row || {
                let sum = self.a + self.row + self.c;
                sum == 1 || sum == 2
            },
            "row walk started off the lattice"
        );
    }
}

impl Iterator for TriRowWalk {
    type Item = TriCell;

    fn next(&mut self) -> Option<Self::Item> {
        while self.row <= self.last_row {
            if self.a <= self.max_a && self.c >= self.min_c {
                let cell = TriCell::new_unchecked(self.a, self.row, self.c);
                if cell.points_up() {
                    self.c -= 1;
                } else {
                    self.a += 1;
                }
                return Some(cell);
            }
            self.row += 1;
            self.start_row();
        }
        None
    }
}
