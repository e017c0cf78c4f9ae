//! Arrow outlines for board decorations.
//!
//! Arrows are built as closed polygons in board-local coordinates: a straight
//! 7-point outline for most moves, and a 9-point dogleg for knight moves that
//! runs along the longer axis first and then turns 90° onto the target.

use crate::domain::{Arrow, BoardGeometry, Point};

/// Arrow proportions, all derived from the cell size
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ArrowDimensions {
    pub tail_width: f32,
    pub head_width: f32,
    pub head_length: f32,
    /// Distance the tail starts away from the origin square's center
    pub tail_shift: f32,
}

impl ArrowDimensions {
    pub fn for_cell(cell_size: f32) -> Self {
        Self {
            tail_width: 0.2 * cell_size,
            head_width: 0.45 * cell_size,
            head_length: 0.33 * cell_size,
            tail_shift: 0.3 * cell_size,
        }
    }
}

/// Closed polygon ready to be filled
#[derive(Clone, PartialEq, Debug)]
pub struct ArrowOutline {
    pub points: Vec<Point>,
}

/// Outline for an arrow decoration under the given geometry
pub fn arrow_outline(arrow: &Arrow, geometry: &BoardGeometry) -> ArrowOutline {
    let start = geometry.center(arrow.start);
    let end = geometry.center(arrow.end);
    let dims = ArrowDimensions::for_cell(geometry.cell_size());

    if arrow.is_knight_move() {
        knight_arrow(start, end, dims)
    } else {
        straight_arrow(start, end, dims)
    }
}

/// Straight arrow from `start` to `end`, tip at `end`
pub fn straight_arrow(start: Point, end: Point, dims: ArrowDimensions) -> ArrowOutline {
    let distance = start.distance(end);
    if distance <= f32::EPSILON {
        return ArrowOutline { points: Vec::new() };
    }
    let cos = (end.x - start.x) / distance;
    let sin = (end.y - start.y) / distance;

    let base = start.offset(dims.tail_shift * cos, dims.tail_shift * sin);
    let half_tail = dims.tail_width / 2.0;
    let half_head = dims.head_width / 2.0;
    let tail_length = distance - dims.tail_shift - dims.head_length;
    let arrow_length = tail_length + dims.head_length;

    // along the shaft by `along`, off to one side by `side` (positive = left of travel)
    let at = |along: f32, side: f32| {
        base.offset(side * sin + along * cos, -side * cos + along * sin)
    };

    let points = vec![
        at(0.0, half_tail),
        at(tail_length, half_tail),
        at(tail_length, half_head),
        at(arrow_length, 0.0),
        at(tail_length, -half_head),
        at(tail_length, -half_tail),
        at(0.0, -half_tail),
    ];

    ArrowOutline { points }
}

/// L-shaped arrow for a knight move
pub fn knight_arrow(start: Point, end: Point, dims: ArrowDimensions) -> ArrowOutline {
    let half_tail = dims.tail_width / 2.0;
    let half_head = dims.head_width / 2.0;
    let shift = dims.tail_shift;
    let head = dims.head_length;

    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let sx = if dx < 0.0 { -1.0 } else { 1.0 };
    let sy = if dy < 0.0 { -1.0 } else { 1.0 };

    let points = if dx.abs() > dy.abs() {
        let turn = Point::new(end.x, start.y);
        vec![
            Point::new(start.x + sx * shift, start.y - sy * half_tail),
            Point::new(turn.x + sx * half_tail, turn.y - sy * half_tail),
            Point::new(turn.x + sx * half_tail, end.y - sy * head),
            Point::new(turn.x + sx * half_head, end.y - sy * head),
            end,
            Point::new(turn.x - sx * half_head, end.y - sy * head),
            Point::new(turn.x - sx * half_tail, end.y - sy * head),
            Point::new(turn.x - sx * half_tail, turn.y + sy * half_tail),
            Point::new(start.x + sx * shift, start.y + sy * half_tail),
        ]
    } else {
        let turn = Point::new(start.x, end.y);
        vec![
            Point::new(start.x - sx * half_tail, start.y + sy * shift),
            Point::new(turn.x - sx * half_tail, turn.y + sy * half_tail),
            Point::new(end.x - sx * head, end.y + sy * half_tail),
            Point::new(end.x - sx * head, end.y + sy * half_head),
            end,
            Point::new(end.x - sx * head, end.y - sy * half_head),
            Point::new(end.x - sx * head, end.y - sy * half_tail),
            Point::new(turn.x + sx * half_tail, turn.y - sy * half_tail),
            Point::new(start.x + sx * half_tail, start.y + sy * shift),
        ]
    };

    ArrowOutline { points }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DecorationColor, DecorationId, Square};

    const EPS: f32 = 1e-3;

    fn arrow(start: Square, end: Square) -> Arrow {
        Arrow {
            id: DecorationId(1),
            color: DecorationColor::Green,
            start,
            end,
        }
    }

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    fn midpoint(a: Point, b: Point) -> Point {
        Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
    }

    /// Reflect `p` across the line through `a` and `b`
    fn reflect(p: Point, a: Point, b: Point) -> Point {
        let (dx, dy) = (b.x - a.x, b.y - a.y);
        let len2 = dx * dx + dy * dy;
        let t = ((p.x - a.x) * dx + (p.y - a.y) * dy) / len2;
        let foot = Point::new(a.x + t * dx, a.y + t * dy);
        Point::new(2.0 * foot.x - p.x, 2.0 * foot.y - p.y)
    }

    /// Cross product of the edges meeting at vertex `i`
    fn turn_at(points: &[Point], i: usize) -> f32 {
        let n = points.len();
        let prev = points[(i + n - 1) % n];
        let here = points[i];
        let next = points[(i + 1) % n];
        let (ax, ay) = (here.x - prev.x, here.y - prev.y);
        let (bx, by) = (next.x - here.x, next.y - here.y);
        ax * by - ay * bx
    }

    fn axis_aligned(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS || (a.y - b.y).abs() < EPS
    }

    fn knight_moves(from: Square) -> Vec<Square> {
        [(1, 2), (2, 1), (2, -1), (1, -2), (-1, -2), (-2, -1), (-2, 1), (-1, 2)]
            .into_iter()
            .filter_map(|(df, dr)| {
                Square::from_xy(from.file().index() + df, from.rank().index() + dr)
            })
            .collect()
    }

    #[test]
    fn test_dimensions() {
        let dims = ArrowDimensions::for_cell(100.0);
        assert!((dims.tail_width - 20.0).abs() < EPS);
        assert!((dims.head_width - 45.0).abs() < EPS);
        assert!((dims.head_length - 33.0).abs() < EPS);
        assert!((dims.tail_shift - 30.0).abs() < EPS);
    }

    #[test]
    fn test_straight_arrow_shape() {
        let geometry = BoardGeometry::new(800.0, false);
        let outline = arrow_outline(&arrow(Square::E2, Square::E4), &geometry);
        assert_eq!(outline.points.len(), 7);

        let start = geometry.center(Square::E2);
        let end = geometry.center(Square::E4);
        // tip lands on the destination center
        assert!(close(outline.points[3], end));
        // tail starts 0.3 cells from the origin center, 0.2 cells wide
        assert!((outline.points[0].y - (start.y - 30.0)).abs() < EPS);
        assert!(((outline.points[0].x - outline.points[6].x).abs() - 20.0).abs() < EPS);
    }

    #[test]
    fn test_straight_arrow_symmetric_about_axis() {
        let geometry = BoardGeometry::new(640.0, false);
        for (from, to) in [
            (Square::A1, Square::H8),
            (Square::E2, Square::E4),
            (Square::H1, Square::A3),
            (Square::C7, Square::C2),
        ] {
            let outline = arrow_outline(&arrow(from, to), &geometry);
            let (a, b) = (geometry.center(from), geometry.center(to));
            let n = outline.points.len();
            for i in 0..n {
                let mirrored = reflect(outline.points[i], a, b);
                assert!(
                    close(mirrored, outline.points[n - 1 - i]),
                    "point {i} of {from}->{to} not mirrored"
                );
            }
        }
    }

    #[test]
    fn test_straight_arrow_respects_flip() {
        let normal = BoardGeometry::new(800.0, false);
        let flipped = BoardGeometry::new(800.0, true);
        let a = arrow(Square::E2, Square::E4);
        let tip_normal = arrow_outline(&a, &normal).points[3];
        let tip_flipped = arrow_outline(&a, &flipped).points[3];
        assert!(close(tip_normal, normal.center(Square::E4)));
        assert!(close(tip_flipped, flipped.center(Square::E4)));
        assert!(tip_normal.y < normal.center(Square::E2).y);
        assert!(tip_flipped.y > flipped.center(Square::E2).y);
    }

    #[test]
    fn test_knight_arrow_bends_once_at_right_angle() {
        for flipped in [false, true] {
            let geometry = BoardGeometry::new(800.0, flipped);
            for to in knight_moves(Square::D4) {
                let outline = arrow_outline(&arrow(Square::D4, to), &geometry);
                let points = &outline.points;
                assert_eq!(points.len(), 9);

                let start = geometry.center(Square::D4);
                let end = geometry.center(to);
                assert!(close(points[4], end), "tip of d4->{to}");

                // every edge but the two head flanks runs along an axis
                for (a, b) in [(8, 0), (0, 1), (1, 2), (2, 3), (5, 6), (6, 7), (7, 8)] {
                    assert!(axis_aligned(points[a], points[b]), "edge {a}-{b} of d4->{to}");
                }

                // the two shaft corners straddle the bend point
                let turn = midpoint(points[1], points[7]);
                let first = (turn.x - start.x, turn.y - start.y);
                let second = (end.x - turn.x, end.y - turn.y);
                assert!((first.0 * second.0 + first.1 * second.1).abs() < EPS);

                // longer leg first, leg lengths match the displacement
                let dx = (end.x - start.x).abs();
                let dy = (end.y - start.y).abs();
                assert!((start.distance(turn) - dx.max(dy)).abs() < EPS, "d4->{to}");
                assert!((turn.distance(end) - dx.min(dy)).abs() < EPS, "d4->{to}");

                // one outer and one inner corner at the bend; the only other
                // reflex vertices are where the shaft meets the head
                let convex = turn_at(points, 0).signum();
                assert_eq!(turn_at(points, 8).signum(), convex);
                assert_eq!(turn_at(points, 1).signum(), -turn_at(points, 7).signum());
                let reflex: Vec<usize> =
                    (0..9).filter(|&i| turn_at(points, i).signum() == -convex).collect();
                assert_eq!(reflex.len(), 3, "reflex vertices {reflex:?} of d4->{to}");
                assert!(reflex.contains(&2) && reflex.contains(&6));
            }
        }
    }

    #[test]
    fn test_knight_arrow_tail() {
        let geometry = BoardGeometry::new(800.0, false);
        let outline = arrow_outline(&arrow(Square::G1, Square::E2), &geometry);
        let start = geometry.center(Square::G1);

        // tail starts 0.3 cells toward the target, 0.2 cells wide
        assert!((outline.points[0].x - (start.x - 30.0)).abs() < EPS);
        assert!((outline.points[8].x - (start.x - 30.0)).abs() < EPS);
        assert!(((outline.points[0].y - outline.points[8].y).abs() - 20.0).abs() < EPS);
        // bend sits on the origin rank, under the target
        let turn = midpoint(outline.points[1], outline.points[7]);
        assert!(close(turn, Point::new(geometry.center(Square::E2).x, start.y)));
    }

    #[test]
    fn test_degenerate_arrow_is_empty() {
        let dims = ArrowDimensions::for_cell(50.0);
        let p = Point::new(10.0, 10.0);
        assert!(straight_arrow(p, p, dims).points.is_empty());
    }
}
